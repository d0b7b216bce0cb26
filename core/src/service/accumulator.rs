use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CalcError, Result};
use crate::model::record::{CalculationResult, DailyRecord};
use crate::schedule::{daily_accrual, SATS_PER_BTC};

/// Secondary-per-primary rate used when the caller does not supply one.
pub const DEFAULT_SECONDARY_RATE: f64 = 1.35;

/// Longest streak [`calculate`] accepts. The series holds one record per
/// day, so this bounds the allocation to a few tens of megabytes.
pub const MAX_CALCULATION_DAYS: i64 = 1_000_000;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct CalculationInput {
    pub streak_days: i64,
    pub price_primary: f64,
    pub secondary_rate: f64,
}

impl CalculationInput {
    pub fn new(streak_days: i64, price_primary: f64) -> Self {
        Self {
            streak_days,
            price_primary,
            secondary_rate: DEFAULT_SECONDARY_RATE,
        }
    }

    pub fn with_secondary_rate(mut self, secondary_rate: f64) -> Self {
        self.secondary_rate = secondary_rate;
        self
    }

    /// Checks the preconditions of [`accumulate`] and returns the streak
    /// length as a day count.
    pub fn validate(&self) -> Result<u32> {
        if self.streak_days <= 0 {
            return Err(CalcError::invalid(
                "streak_days",
                format!("must be positive, got {}", self.streak_days),
            ));
        }
        if self.streak_days > MAX_CALCULATION_DAYS {
            return Err(CalcError::invalid(
                "streak_days",
                format!("{} exceeds the limit of {} days", self.streak_days, MAX_CALCULATION_DAYS),
            ));
        }
        let days = u32::try_from(self.streak_days).map_err(|_| {
            CalcError::invalid(
                "streak_days",
                format!("{} does not fit in a day counter", self.streak_days),
            )
        })?;
        check_positive("price_primary", self.price_primary)?;
        check_positive("secondary_rate", self.secondary_rate)?;
        Ok(days)
    }
}

fn check_positive(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid(field, format!("must be finite, got {}", value)));
    }
    if value <= 0.0 {
        return Err(CalcError::invalid(field, format!("must be positive, got {}", value)));
    }
    Ok(())
}

/// Fiat value of `sats` at `price` per whole bitcoin.
pub fn sats_to_value(sats: u64, price: f64) -> f64 {
    (sats as f64 / SATS_PER_BTC as f64) * price
}

/// Integrates the daily reward over `streak_days` and values the running
/// total at `price_primary`, with a second currency at `secondary_rate`.
///
/// Streaks longer than [`MAX_CALCULATION_DAYS`] are rejected with
/// [`CalcError::InvalidInput`].
pub fn accumulate(streak_days: i64, price_primary: f64, secondary_rate: f64) -> Result<CalculationResult> {
    calculate(&CalculationInput::new(streak_days, price_primary).with_secondary_rate(secondary_rate))
}

pub fn calculate(input: &CalculationInput) -> Result<CalculationResult> {
    let days = input.validate()?;
    let price = input.price_primary;
    let rate = input.secondary_rate;

    let mut series = Vec::with_capacity(days as usize);
    let mut total_sats: u64 = 0;

    for day in 1..=days {
        let daily = daily_accrual(i64::from(day));
        total_sats += daily;

        let value_primary = sats_to_value(total_sats, price);
        series.push(DailyRecord {
            day,
            daily_accrual: daily,
            cumulative_sats: total_sats,
            cumulative_value_primary: value_primary,
            cumulative_value_secondary: value_primary * rate,
        });
    }

    let total_value_primary = sats_to_value(total_sats, price);
    let total_value_secondary = total_value_primary * rate;
    let divisor = f64::from(days);

    debug!(streak_days = days, total_sats, price, "accumulated streak rewards");

    Ok(CalculationResult {
        total_sats,
        total_value_primary,
        total_value_secondary,
        average_sats_per_day: total_sats as f64 / divisor,
        average_value_per_day_primary: total_value_primary / divisor,
        average_value_per_day_secondary: total_value_secondary / divisor,
        series,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_day_total() {
        let result = accumulate(3, 100_000.0, DEFAULT_SECONDARY_RATE).unwrap();
        assert_eq!(result.total_sats, 84);
        assert_eq!(result.series.len(), 3);
        assert_eq!(result.series[0].cumulative_sats, 21);
        assert_eq!(result.series[1].cumulative_sats, 50);
        assert_eq!(result.series[2].cumulative_sats, 84);
    }

    #[test]
    fn test_value_conversion() {
        let result = accumulate(3, 100_000.0, DEFAULT_SECONDARY_RATE).unwrap();
        assert_eq!(result.total_value_primary, (84.0 / 100_000_000.0) * 100_000.0);
        assert!((result.total_value_primary - 0.084).abs() < 1e-12);
    }

    #[test]
    fn test_average_uses_real_division() {
        let result = accumulate(3, 100_000.0, DEFAULT_SECONDARY_RATE).unwrap();
        assert_eq!(result.average_sats_per_day, 84.0 / 3.0);
        assert_eq!(result.average_value_per_day_primary, result.total_value_primary / 3.0);
    }

    #[test]
    fn test_rejects_non_positive_days() {
        for days in [0, -1, i64::MIN] {
            let err = accumulate(days, 95_000.0, DEFAULT_SECONDARY_RATE).unwrap_err();
            assert!(matches!(err, CalcError::InvalidInput { field: "streak_days", .. }));
        }
    }

    #[test]
    fn test_rejects_oversized_days() {
        for days in [MAX_CALCULATION_DAYS + 1, i64::from(u32::MAX), i64::MAX] {
            let err = accumulate(days, 95_000.0, DEFAULT_SECONDARY_RATE).unwrap_err();
            assert!(matches!(err, CalcError::InvalidInput { field: "streak_days", .. }));
        }
    }

    #[test]
    fn test_accepts_streak_at_limit() {
        let input = CalculationInput::new(MAX_CALCULATION_DAYS, 95_000.0);
        assert_eq!(input.validate().unwrap(), 1_000_000);
    }

    #[test]
    fn test_rejects_bad_price() {
        for price in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = accumulate(10, price, DEFAULT_SECONDARY_RATE).unwrap_err();
            assert!(matches!(err, CalcError::InvalidInput { field: "price_primary", .. }));
        }
    }

    #[test]
    fn test_rejects_bad_rate() {
        for rate in [0.0, -1.35, f64::NAN, f64::NEG_INFINITY] {
            let err = accumulate(10, 95_000.0, rate).unwrap_err();
            assert!(matches!(err, CalcError::InvalidInput { field: "secondary_rate", .. }));
        }
    }

    #[test]
    fn test_input_defaults_rate() {
        let input = CalculationInput::new(30, 95_000.0);
        assert_eq!(input.secondary_rate, DEFAULT_SECONDARY_RATE);
        assert_eq!(input.validate().unwrap(), 30);
    }

    #[test]
    fn test_error_message() {
        let err = accumulate(0, 95_000.0, 1.35).unwrap_err();
        assert_eq!(err.to_string(), "Invalid input for streak_days: must be positive, got 0");
    }
}
