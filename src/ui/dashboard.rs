use super::formatters::*;
use crate::api::{DataProvider, HistoricalSeries, QuoteRecord, Range};
use crate::app::App;
use crate::store::Storage;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
};

pub(super) fn draw_dashboard<P: DataProvider, S: Storage>(frame: &mut Frame, area: Rect, app: &App<P, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(1),
            Constraint::Min(6),
        ])
        .split(area);

    draw_quote(frame, chunks[0], app);
    draw_range_selector(frame, chunks[1], app.range);
    draw_chart(frame, chunks[2], app.history.as_ref(), app.range);
}

fn quote_lines(q: &QuoteRecord, in_watchlist: bool) -> Vec<Line<'static>> {
    let change_color = if is_gain(q.change) { Color::Green } else { Color::Red };
    let watch_marker = if in_watchlist {
        Span::styled("  ★ watching", Style::default().fg(Color::Yellow))
    } else {
        Span::raw("")
    };
    vec![
        Line::from(vec![
            Span::styled(q.symbol.clone(), Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(q.name.clone(), Style::default().fg(Color::Gray)),
            watch_marker,
        ]),
        Line::from(vec![
            Span::styled(format_price(q.price), Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(
                format!("{} {}", format_change(q.change), format_change_percent(q.change_percent)),
                Style::default().fg(change_color),
            ),
        ]),
        Line::from(vec![
            Span::raw("Market Cap: "),
            Span::styled(format_market_cap(&q.market_cap), Style::default().fg(Color::Cyan)),
        ]),
    ]
}

fn draw_quote<P: DataProvider, S: Storage>(frame: &mut Frame, area: Rect, app: &App<P, S>) {
    let block = Block::default().borders(Borders::ALL).title(" Quote ");
    let lines = match (&app.quote, app.scope.as_deref()) {
        (Some(q), _) => {
            let mut lines = quote_lines(q, app.watchlist().contains(&q.symbol));
            if let Some(ts) = &app.last_updated {
                lines.push(Line::from(Span::styled(
                    format!("Updated {}", ts),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            lines
        }
        (None, Some(_)) if app.loading => vec![Line::from(Span::styled(
            "Loading...",
            Style::default().fg(Color::DarkGray),
        ))],
        (None, Some(symbol)) => vec![Line::from(vec![
            Span::styled(symbol.to_string(), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled("  quote unavailable", Style::default().fg(Color::DarkGray)),
        ])],
        (None, None) => vec![Line::from(Span::styled(
            "Search for a symbol with [/]",
            Style::default().fg(Color::DarkGray),
        ))],
    };
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_range_selector(frame: &mut Frame, area: Rect, selected: Range) {
    let mut spans = vec![Span::raw(" ")];
    for (i, range) in Range::ALL.iter().enumerate() {
        let style = if *range == selected {
            Style::default().fg(Color::Blue).bg(Color::Gray).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {}:{} ", i + 1, range), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_chart(frame: &mut Frame, area: Rect, history: Option<&HistoricalSeries>, range: Range) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Stock Price ({}) ", range));

    let Some(series) = history.filter(|s| !s.is_empty()) else {
        let no_data = Paragraph::new("Chart data unavailable")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(no_data, area);
        return;
    };

    let points = chart_points(series);
    let [low, high] = chart_bounds(series);
    let first = series.labels.first().cloned().unwrap_or_default();
    let last = series.labels.last().cloned().unwrap_or_default();

    let dataset = Dataset::default()
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Blue))
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, (series.len().saturating_sub(1)) as f64])
                .labels(vec![first, last]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([low, high])
                .labels(vec![format!("{:.2}", low), format!("{:.2}", high)]),
        );
    frame.render_widget(chart, area);
}
