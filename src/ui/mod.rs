mod dashboard;
pub mod formatters;
mod home;

use crate::api::DataProvider;
use crate::app::{App, InputMode, Page};
use crate::store::Storage;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub fn draw<P: DataProvider, S: Storage>(frame: &mut Frame, app: &App<P, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], app);

    match app.page {
        Page::Home => home::draw_watchlist(frame, chunks[1], app),
        Page::Dashboard => dashboard::draw_dashboard(frame, chunks[1], app),
    }

    draw_footer(frame, chunks[2], app);

    if app.input_mode == InputMode::Help {
        draw_help(frame);
    }
}

fn draw_header<P: DataProvider, S: Storage>(frame: &mut Frame, area: Rect, app: &App<P, S>) {
    let status = if app.loading {
        "[Loading...]".to_string()
    } else {
        format!("[{}]", chrono::Local::now().format("%H:%M:%S"))
    };

    let title = match (app.page, app.scope.as_deref()) {
        (Page::Dashboard, Some(symbol)) => format!("{} Stock", symbol),
        (Page::Dashboard, None) => "Dashboard".to_string(),
        (Page::Home, _) => format!("Watchlist ({})", app.watchlist().len()),
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(" Stock Watch ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::styled("| ", Style::default().fg(Color::DarkGray)),
        Span::styled(title, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        Span::raw(" "),
        Span::styled(status, Style::default().fg(Color::DarkGray)),
    ]))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn draw_footer<P: DataProvider, S: Storage>(frame: &mut Frame, area: Rect, app: &App<P, S>) {
    let content = match app.input_mode {
        InputMode::Search => Line::from(vec![
            Span::raw(" Symbol: "),
            Span::styled(&app.input_buffer, Style::default().fg(Color::Cyan)),
            Span::styled("█", Style::default().fg(Color::Cyan)),
            Span::raw(" | [Enter] Go | [Esc] Cancel"),
        ]),
        InputMode::Help => Line::from(Span::styled(
            " [?/Enter/Esc] Close help ",
            Style::default().fg(Color::DarkGray),
        )),
        InputMode::Normal => {
            let help = match app.page {
                Page::Home => " [/] Search [Enter] View [d] Remove [↑↓] Nav [?] Help [q] Quit ",
                Page::Dashboard => " [/] Search [a] Add [1-5] Range [h] Home [?] Help [q] Quit ",
            };
            match app.notice() {
                Some(notice) => {
                    let color = if notice.is_error() { Color::Red } else { Color::Green };
                    Line::from(vec![
                        Span::styled(format!(" {} ", notice.message), Style::default().fg(color).add_modifier(Modifier::BOLD)),
                        Span::raw("|"),
                        Span::styled(help, Style::default().fg(Color::DarkGray)),
                    ])
                }
                None => Line::from(Span::styled(help, Style::default().fg(Color::DarkGray))),
            }
        }
    };

    let footer = Paragraph::new(content).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

fn draw_help(frame: &mut Frame) {
    let area = centered_rect(50, 60, frame.area());
    let key = |k: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("{:<10}", k), Style::default().fg(Color::Cyan)),
            Span::raw(desc),
        ])
    };
    let lines = vec![
        key("/", "Search for a symbol"),
        key("Enter", "View highlighted watchlist entry"),
        key("d", "Remove highlighted watchlist entry"),
        key("a", "Add the shown stock to the watchlist"),
        key("1-5", "Chart range: 1d 1w 1m 3m 1y"),
        key("h / Esc", "Back to the watchlist"),
        key("q", "Quit"),
    ];
    let help = Paragraph::new(lines).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(help, area);
}
