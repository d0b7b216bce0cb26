use std::path::PathBuf;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use satstreak_core::repository::PriceQuote;
use satstreak_core::{CalculatorConfig, Currency, FilePriceSource, FixedPriceSource, PriceSource};

use crate::price::CoinGeckoPriceSource;

/// Largest streak the CLI will compute.
pub const MAX_STREAK_DAYS: i64 = 10_000;

#[derive(clap::Args, Clone, Debug, Default)]
pub struct CalcArgs {
    /// Streak length in days (capped at 10000)
    #[arg(short, long, allow_negative_numbers = true)]
    pub days: Option<i64>,
    /// Bitcoin price in USD
    #[arg(short, long, value_parser = parse_positive)]
    pub price: Option<f64>,
    /// Saved CoinGecko simple/price JSON response to read the price from
    #[arg(long, conflicts_with = "price")]
    pub price_file: Option<PathBuf>,
    /// Skip the live price lookup and use the fallback price
    #[arg(long, conflicts_with_all = ["price", "price_file"])]
    pub offline: bool,
    /// USD to CAD rate
    #[arg(short, long, value_parser = parse_positive)]
    pub rate: Option<f64>,
    /// Display currency (usd or cad)
    #[arg(short, long, value_parser = parse_currency)]
    pub currency: Option<Currency>,
}

impl CalcArgs {
    pub fn streak_days(&self) -> Option<i64> {
        self.days.map(|d| d.min(MAX_STREAK_DAYS))
    }

    pub fn currency_or(&self, config: &CalculatorConfig) -> Currency {
        self.currency.unwrap_or(config.display_currency)
    }

    pub fn price_source(&self) -> CliPriceSource {
        if let Some(price) = self.price {
            CliPriceSource::Fixed(FixedPriceSource::new(price))
        } else if let Some(path) = &self.price_file {
            CliPriceSource::File(FilePriceSource::new(path))
        } else if self.offline {
            CliPriceSource::Offline
        } else {
            CliPriceSource::Live(CoinGeckoPriceSource::new())
        }
    }
}

/// Where the BTC price comes from for this invocation.
pub enum CliPriceSource {
    Fixed(FixedPriceSource),
    File(FilePriceSource),
    Live(CoinGeckoPriceSource),
    Offline,
}

impl PriceSource for CliPriceSource {
    fn fetch(&self) -> Result<PriceQuote> {
        match self {
            CliPriceSource::Fixed(source) => source.fetch(),
            CliPriceSource::File(source) => source.fetch(),
            CliPriceSource::Live(source) => source.fetch(),
            CliPriceSource::Offline => Err(anyhow!("Offline, no price lookup")),
        }
    }
}

pub fn parse_positive(s: &str) -> Result<f64, String> {
    let value: f64 = s.trim().parse().map_err(|_| format!("'{}' is not a number", s))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("'{}' must be a positive number", s))
    }
}

pub fn parse_currency(s: &str) -> Result<Currency, String> {
    s.parse::<Currency>().map_err(|e| e.to_string())
}

pub fn parse_start_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|e| format!("Invalid date '{}': {}", s, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive("95000"), Ok(95_000.0));
        assert_eq!(parse_positive(" 1.35 "), Ok(1.35));
        assert!(parse_positive("0").is_err());
        assert!(parse_positive("-3").is_err());
        assert!(parse_positive("NaN").is_err());
        assert!(parse_positive("abc").is_err());
    }

    #[test]
    fn test_days_are_capped() {
        let args = CalcArgs {
            days: Some(50_000),
            ..CalcArgs::default()
        };
        assert_eq!(args.streak_days(), Some(MAX_STREAK_DAYS));

        let args = CalcArgs {
            days: Some(-4),
            ..CalcArgs::default()
        };
        assert_eq!(args.streak_days(), Some(-4));
    }

    #[test]
    fn test_default_price_source_is_live() {
        assert!(matches!(CalcArgs::default().price_source(), CliPriceSource::Live(_)));
    }

    #[test]
    fn test_offline_price_source_fails() {
        let args = CalcArgs {
            offline: true,
            ..CalcArgs::default()
        };
        assert!(matches!(args.price_source(), CliPriceSource::Offline));
        assert!(args.price_source().fetch().is_err());
    }

    #[test]
    fn test_fixed_price_source() {
        let args = CalcArgs {
            price: Some(120_000.0),
            ..CalcArgs::default()
        };
        assert_eq!(args.price_source().fetch().unwrap().usd, 120_000.0);
    }

    #[test]
    fn test_parse_start_date() {
        assert_eq!(parse_start_date("2025-01-01"), Ok(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()));
        assert!(parse_start_date("01/01/2025").is_err());
    }
}
