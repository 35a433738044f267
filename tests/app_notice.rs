mod common;

use chrono::{TimeDelta, Utc};
use common::{FakeProvider, test_app};
use stockwatch::api::Range;
use stockwatch::app::{App, NoticeKind, Settings};
use stockwatch::store::{MemoryStorage, WatchlistStore};

#[test]
fn notice_expires_after_display_duration() {
    let mut app = test_app();
    let now = Utc::now();
    app.show_notice_at(NoticeKind::Error, "boom", now);

    assert!(app.notice_at(now + TimeDelta::milliseconds(4_999)).is_some());
    assert!(app.notice_at(now + TimeDelta::seconds(5)).is_none());
}

#[test]
fn newer_notice_replaces_message_and_restarts_timer() {
    let mut app = test_app();
    let start = Utc::now();
    app.show_notice_at(NoticeKind::Error, "first", start);
    app.show_notice_at(NoticeKind::Error, "second", start + TimeDelta::seconds(3));

    let at_six = app.notice_at(start + TimeDelta::seconds(6)).unwrap();
    assert_eq!(at_six.message, "second");
    assert!(app.notice_at(start + TimeDelta::seconds(8)).is_none());
}

#[test]
fn tick_drops_expired_notice() {
    let mut app = test_app();
    let now = Utc::now();
    app.show_notice_at(NoticeKind::Success, "ok", now);

    app.tick(now + TimeDelta::seconds(1));
    assert!(app.notice_at(now + TimeDelta::seconds(1)).is_some());

    app.tick(now + TimeDelta::seconds(10));
    assert!(app.notice_at(now).is_none());
}

#[test]
fn default_display_duration_is_five_seconds() {
    let app = test_app();
    assert_eq!(app.settings().notice_duration, TimeDelta::seconds(5));
}

#[test]
fn oversized_duration_keeps_notice_up_instead_of_overflowing() {
    let settings = Settings {
        default_range: Range::OneMonth,
        notice_duration: TimeDelta::MAX,
    };
    let mut app = App::new(
        FakeProvider::default(),
        WatchlistStore::load(MemoryStorage::new()),
        settings,
    );
    let now = Utc::now();
    app.show_notice_at(NoticeKind::Error, "boom", now);
    assert!(app.notice_at(now + TimeDelta::days(365)).is_some());
}
