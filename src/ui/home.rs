use super::formatters::truncate_str;
use crate::api::DataProvider;
use crate::app::App;
use crate::store::Storage;
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

pub(super) fn draw_watchlist<P: DataProvider, S: Storage>(frame: &mut Frame, area: Rect, app: &App<P, S>) {
    let block = Block::default().borders(Borders::ALL).title(" Your Watchlist ");
    let entries = app.watchlist().list();

    if entries.is_empty() {
        let empty = Paragraph::new("No stocks added yet")
            .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Symbol"),
        Cell::from("Name"),
    ])
    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let style = if i == app.selected_index {
                Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(entry.symbol.clone()).style(Style::default().add_modifier(Modifier::BOLD)),
                Cell::from(truncate_str(&entry.name, 40)).style(Style::default().fg(Color::Gray)),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(10), Constraint::Min(20)])
        .header(header)
        .block(block);

    let mut state = TableState::default();
    state.select(Some(app.selected_index));
    frame.render_stateful_widget(table, area, &mut state);
}
