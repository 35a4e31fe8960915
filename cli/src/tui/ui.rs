use pizzadash_core::{month_label, ChartSeries};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::tui::app::{App, Focus};

// --- THEME ---
const PRIMARY: Color = Color::Cyan;
const MUTED: Color = Color::DarkGray;
const REVENUE: Color = Color::Green;
const ORDERS: Color = Color::Blue;
const RANK: Color = Color::Yellow;

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Content
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    let header = Paragraph::new("PIZZA SALES")
        .style(Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, main_chunks[0]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(34), // Filters
            Constraint::Min(40),    // Charts
        ])
        .split(main_chunks[1]);

    draw_filters(f, app, content_chunks[0]);
    draw_dashboard(f, app, content_chunks[1]);

    let footer = Paragraph::new("j/k: Move | Tab: Months/Products | Space: Toggle | c: Clear | q: Quit")
        .style(Style::default().fg(MUTED))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[2]);
}

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { PRIMARY } else { MUTED }))
}

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x] " } else { "[ ] " }
}

fn draw_filters(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(14), Constraint::Min(3)])
        .split(area);

    let months: Vec<ListItem> = (1..=12)
        .map(|m| ListItem::new(format!("{}{}", checkbox(app.is_month_selected(m)), month_label(m))))
        .collect();
    let month_list = List::new(months)
        .block(pane_block(" Months ", app.focus == Focus::Months))
        .highlight_style(Style::default().bg(MUTED).add_modifier(Modifier::BOLD));
    f.render_stateful_widget(month_list, chunks[0], &mut app.month_state);

    let products: Vec<ListItem> = app
        .products
        .iter()
        .map(|(id, _)| ListItem::new(format!("{}{}", checkbox(app.is_product_selected(id)), id)))
        .collect();
    let product_list = List::new(products)
        .block(pane_block(" Products ", app.focus == Focus::Products))
        .highlight_style(Style::default().bg(MUTED).add_modifier(Modifier::BOLD));
    f.render_stateful_widget(product_list, chunks[1], &mut app.product_state);
}

fn draw_dashboard(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Percentage(35),
            Constraint::Min(8),
        ])
        .split(area);

    draw_summary(f, app, rows[0]);

    let monthly = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let revenue = &app.view.revenue_by_month;
    let revenue_bars: Vec<Bar> = revenue
        .labels()
        .into_iter()
        .zip(revenue.values())
        .map(|(label, value)| {
            Bar::default()
                .label(label)
                .value(value.round() as u64)
                .text_value(format!("{:.0}", value))
                .style(Style::default().fg(REVENUE))
        })
        .collect();
    f.render_widget(bar_chart(" Revenue MoM ", &revenue_bars, Direction::Vertical), monthly[0]);

    let orders = &app.view.orders_by_month;
    let order_bars: Vec<Bar> = orders
        .labels()
        .into_iter()
        .zip(orders.values())
        .map(|(label, value)| Bar::default().label(label).value(value).style(Style::default().fg(ORDERS)))
        .collect();
    f.render_widget(bar_chart(" Sales Per Month ", &order_bars, Direction::Vertical), monthly[1]);

    let breakdown = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(rows[2]);

    let top_bars = series_bars(&app.view.top_names, RANK);
    f.render_widget(bar_chart(" Top 10 Pizza Sales ", &top_bars, Direction::Horizontal), breakdown[0]);

    let size_bars = series_bars(&app.view.by_size, PRIMARY);
    f.render_widget(bar_chart(" Order by Size ", &size_bars, Direction::Vertical), breakdown[1]);

    let category_bars: Vec<Bar> = app
        .view
        .category_axis
        .pairs()
        .map(|(category, count)| Bar::default().label(category.label().to_string()).value(count).style(Style::default().fg(ORDERS)))
        .collect();
    f.render_widget(bar_chart(" Order by Category ", &category_bars, Direction::Vertical), breakdown[2]);
}

fn series_bars(series: &ChartSeries, color: Color) -> Vec<Bar<'_>> {
    series
        .iter()
        .map(|p| {
            Bar::default()
                .label(p.label.as_str())
                .value(p.value)
                .style(Style::default().fg(color))
        })
        .collect()
}

fn bar_chart<'a>(title: &'a str, bars: &'a [Bar<'a>], direction: Direction) -> BarChart<'a> {
    let chart = BarChart::default()
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(MUTED)),
        )
        .direction(direction)
        .data(BarGroup::default().bars(bars));

    match direction {
        Direction::Horizontal => chart.bar_width(1).bar_gap(0),
        Direction::Vertical => chart.bar_width(5).bar_gap(1),
    }
}

fn draw_summary(f: &mut Frame, app: &App, area: Rect) {
    let d = &app.view.summary_display;
    let item = |name: &'static str, value: &str| {
        vec![
            Span::styled(name, Style::default().fg(MUTED)),
            Span::styled(value.to_string(), Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            Span::raw("   "),
        ]
    };

    let mut spans = Vec::new();
    spans.extend(item("Orders ", &d.total_orders));
    spans.extend(item("Pizza types ", &d.distinct_product_count));
    spans.extend(item("Revenue ", &d.total_revenue));
    spans.extend(item("Avg/month ", &d.average_revenue));
    spans.extend(item("Sold ", &d.total_units_sold));

    let summary = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded).border_style(Style::default().fg(MUTED)));
    f.render_widget(summary, area);
}
