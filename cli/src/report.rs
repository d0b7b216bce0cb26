use satstreak_core::usecase::milestones::Milestone;
use satstreak_core::{
    daily_accrual, format_btc, format_currency, format_number, region_for, Currency, DailyRecord,
    Estimate,
};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct SeriesRow {
    #[tabled(rename = "Day")]
    day: u32,
    #[tabled(rename = "Sats today")]
    daily: String,
    #[tabled(rename = "Total sats")]
    total: String,
    #[tabled(rename = "Total value")]
    value: String,
}

#[derive(Tabled)]
struct MilestoneRow {
    #[tabled(rename = "Milestone")]
    name: String,
    #[tabled(rename = "Day")]
    day: u32,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Total sats")]
    total: String,
}

pub fn print_summary(estimate: &Estimate, currency: Currency) {
    let result = &estimate.result;
    let price_note = if estimate.price_is_fallback { " (fallback)" } else { "" };

    println!(
        "\x1b[1;36mStreak of {} days\x1b[0m at {}{} per BTC",
        format_number(estimate.input.streak_days as f64),
        format_currency(estimate.input.price_primary, Currency::Usd),
        price_note
    );
    if currency == Currency::Cad {
        println!("  USD to CAD rate: {}", estimate.input.secondary_rate);
    }
    println!();
    println!("Total Earnings");
    println!("  Total Satoshis:    {} sats ({})", format_number(result.total_sats as f64), format_btc(result.total_sats));
    println!("  Total Value:       {}", format_currency(result.value_in(currency), currency));
    println!();
    println!("Daily Averages");
    println!("  Average Sats/Day:  {} sats", format_number(result.average_sats_per_day));
    println!("  Average Value/Day: {}", format_currency(result.average_value_in(currency), currency));
}

/// Days shown in the series table: the first, every `every`th, and the last.
pub fn select_rows(series: &[DailyRecord], every: usize) -> Vec<&DailyRecord> {
    let every = every.max(1);
    let last = series.len().saturating_sub(1);
    series
        .iter()
        .enumerate()
        .filter(|(i, r)| *i == 0 || *i == last || r.day as usize % every == 0)
        .map(|(_, r)| r)
        .collect()
}

pub fn print_series(series: &[DailyRecord], currency: Currency, every: usize) {
    let rows: Vec<SeriesRow> = select_rows(series, every)
        .into_iter()
        .map(|r| SeriesRow {
            day: r.day,
            daily: format_number(r.daily_accrual as f64),
            total: format_number(r.cumulative_sats as f64),
            value: format_currency(r.value_in(currency), currency),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));

    println!("{}", table);
}

pub fn print_milestones(milestones: &[Milestone]) {
    if milestones.is_empty() {
        println!("No milestones reached within this streak.");
        return;
    }

    let rows: Vec<MilestoneRow> = milestones
        .iter()
        .map(|m| MilestoneRow {
            name: m.kind.describe(),
            day: m.day,
            date: m
                .date
                .map(|d| d.format("%Y-%m-%d (%a)").to_string())
                .unwrap_or_else(|| "-".to_string()),
            total: format_number(m.cumulative_sats as f64),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));

    println!("{}", table);
}

pub fn print_day(day: i64) {
    println!(
        "Day {}: {} sats ({} region)",
        day,
        format_number(daily_accrual(day) as f64),
        region_for(day).label()
    );
}
