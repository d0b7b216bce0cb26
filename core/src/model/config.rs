use serde::{Deserialize, Serialize};

use crate::model::currency::Currency;
use crate::service::accumulator::DEFAULT_SECONDARY_RATE;
use crate::service::price_service::FALLBACK_PRICE_USD;
use crate::usecase::chart::DEFAULT_CHART_POINTS;

/// User preferences for the calculator. Every field can be overridden
/// per invocation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CalculatorConfig {
    #[serde(default = "default_streak_days")]
    pub default_streak_days: i64,
    #[serde(default = "default_fallback_price")]
    pub fallback_price_usd: f64,
    #[serde(default = "default_secondary_rate")]
    pub secondary_rate: f64,
    #[serde(default)]
    pub display_currency: Currency,
    #[serde(default = "default_chart_points")]
    pub chart_points: usize,
}

fn default_streak_days() -> i64 {
    365
}

fn default_fallback_price() -> f64 {
    FALLBACK_PRICE_USD
}

fn default_secondary_rate() -> f64 {
    DEFAULT_SECONDARY_RATE
}

fn default_chart_points() -> usize {
    DEFAULT_CHART_POINTS
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            default_streak_days: default_streak_days(),
            fallback_price_usd: default_fallback_price(),
            secondary_rate: default_secondary_rate(),
            display_currency: Currency::default(),
            chart_points: default_chart_points(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: CalculatorConfig =
            serde_json::from_str(r#"{ "display_currency": "CAD" }"#).unwrap();
        assert_eq!(config.display_currency, Currency::Cad);
        assert_eq!(config.default_streak_days, 365);
        assert_eq!(config.fallback_price_usd, 95_000.0);
        assert_eq!(config.secondary_rate, 1.35);
        assert_eq!(config.chart_points, 100);
    }
}
