use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType, Padding, Paragraph, Wrap},
    Frame,
};
use satstreak_core::usecase::chart::ChartSeries;
use satstreak_core::{
    format_compact, format_currency, format_number, region_for, Currency, Estimate, PriceSource,
};

use crate::tui::app::App;

// --- THEME ---
struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
    sats: Color,
    value: Color,
    error: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan,
    muted: Color::DarkGray,
    text: Color::White,
    sats: Color::Yellow,
    value: Color::Green,
    error: Color::Red,
};

pub fn draw<S: PriceSource>(frame: &mut Frame, app: &App<'_, S>) {
    let size = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Charts + Sidebar
            Constraint::Length(1), // Footer
        ])
        .split(size);

    draw_header(frame, app, main_layout[0]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(70),
            Constraint::Length(1),
            Constraint::Percentage(30),
        ])
        .split(main_layout[1]);

    match (&app.estimate, app.chart()) {
        (Some(estimate), Some(chart)) => {
            draw_charts(frame, &chart, content_chunks[0]);
            draw_info_panel(frame, app, estimate, content_chunks[2]);
        }
        _ => {
            let message = app.error.clone().unwrap_or_else(|| "No data available".to_string());
            let error = Paragraph::new(message)
                .style(Style::default().fg(THEME.error))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(rounded_block(" Error "));
            frame.render_widget(error, main_layout[1]);
        }
    }

    let help = Line::from(vec![
        Span::styled("DAYS: ", Style::default().fg(THEME.muted)),
        Span::styled("←/→ ±1  ↑/↓ ±30 ", Style::default().fg(THEME.text)),
        Span::raw("  "),
        Span::styled("CURRENCY: ", Style::default().fg(THEME.muted)),
        Span::styled("c", Style::default().fg(THEME.text)),
        Span::raw("  "),
        Span::styled("QUIT: ", Style::default().fg(THEME.muted)),
        Span::styled("q", Style::default().fg(THEME.text)),
    ]);
    let footer = Paragraph::new(help).alignment(Alignment::Center);
    frame.render_widget(footer, main_layout[2]);
}

fn draw_header<S: PriceSource>(frame: &mut Frame, app: &App<'_, S>, area: Rect) {
    let header_block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(THEME.muted));

    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(24),
            Constraint::Min(1),
            Constraint::Length(40),
        ])
        .split(area);

    let app_title = Paragraph::new(Span::styled(
        "SATSTREAK CALCULATOR",
        Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD),
    ))
    .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(app_title, header_layout[0]);

    let price = app.price();
    let price_text = Line::from(vec![
        Span::styled(format!("Day {} ", app.days), Style::default().fg(THEME.text).add_modifier(Modifier::BOLD)),
        Span::styled("│ BTC ", Style::default().fg(THEME.muted)),
        Span::styled(
            format_currency(price.usd(), Currency::Usd),
            Style::default().fg(THEME.text),
        ),
        Span::styled(
            if price.is_fallback { " (fallback)" } else { "" },
            Style::default().fg(THEME.error),
        ),
    ]);
    let nav = Paragraph::new(price_text)
        .alignment(Alignment::Right)
        .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(nav, header_layout[2]);

    frame.render_widget(header_block, area);
}

fn draw_charts(frame: &mut Frame, chart: &ChartSeries, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let x_labels = axis_labels(chart.x_bounds, |v| format!("{:.0}", v));

    let sats_dataset = Dataset::default()
        .name("Total Sats")
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(THEME.sats))
        .data(&chart.sats);

    let sats_chart = Chart::new(vec![sats_dataset])
        .block(rounded_block(" Cumulative Satoshis "))
        .x_axis(
            Axis::default()
                .title("Day")
                .style(Style::default().fg(THEME.muted))
                .bounds(chart.x_bounds)
                .labels(x_labels.clone()),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(THEME.muted))
                .bounds(chart.sats_bounds)
                .labels(axis_labels(chart.sats_bounds, format_compact)),
        );
    frame.render_widget(sats_chart, chunks[0]);

    let currency = chart.currency;
    let value_dataset = Dataset::default()
        .name(format!("Value ({})", currency.code()))
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(THEME.value))
        .data(&chart.value);

    let value_chart = Chart::new(vec![value_dataset])
        .block(rounded_block(" Portfolio Value "))
        .x_axis(
            Axis::default()
                .title("Day")
                .style(Style::default().fg(THEME.muted))
                .bounds(chart.x_bounds)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(THEME.muted))
                .bounds(chart.value_bounds)
                .labels(axis_labels(chart.value_bounds, |v| format_currency(v, currency))),
        );
    frame.render_widget(value_chart, chunks[1]);
}

fn draw_info_panel<S: PriceSource>(frame: &mut Frame, app: &App<'_, S>, estimate: &Estimate, area: Rect) {
    let result = &estimate.result;
    let currency = app.currency;
    let today = result.last().map(|r| r.daily_accrual).unwrap_or(0);

    let label = |s: &'static str| Span::styled(s, Style::default().fg(THEME.muted));
    let info_text = vec![
        Line::from(vec![Span::styled("Total Earnings", Style::default().add_modifier(Modifier::BOLD))]),
        Line::from(""),
        Line::from(vec![
            label("Sats:   "),
            Span::styled(
                format_number(result.total_sats as f64),
                Style::default().fg(THEME.sats).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            label("Value:  "),
            Span::styled(
                format_currency(result.value_in(currency), currency),
                Style::default().fg(THEME.value).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled("Daily Averages", Style::default().add_modifier(Modifier::BOLD))]),
        Line::from(""),
        Line::from(vec![
            label("Sats:   "),
            Span::styled(format_number(result.average_sats_per_day), Style::default().fg(THEME.text)),
        ]),
        Line::from(vec![
            label("Value:  "),
            Span::styled(
                format_currency(result.average_value_in(currency), currency),
                Style::default().fg(THEME.text),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            label("Last day: "),
            Span::styled(
                format!("{} sats ({})", format_number(today as f64), region_for(app.days).label()),
                Style::default().fg(THEME.text),
            ),
        ]),
        Line::from(vec![
            label("Rate:     "),
            Span::styled(format!("{} CAD/USD", estimate.input.secondary_rate), Style::default().fg(THEME.text)),
        ]),
    ];

    let info = Paragraph::new(info_text).block(rounded_block(" Summary "));
    frame.render_widget(info, area);
}

fn rounded_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME.muted))
        .title(title)
}

/// Low, middle and high tick labels for an axis.
fn axis_labels<F: Fn(f64) -> String>(bounds: [f64; 2], fmt: F) -> Vec<Span<'static>> {
    let mid = (bounds[0] + bounds[1]) / 2.0;
    [bounds[0], mid, bounds[1]]
        .into_iter()
        .map(|v| Span::raw(fmt(v)))
        .collect()
}
