use serde::{Deserialize, Serialize};

use crate::model::currency::Currency;

/// One day of a streak, with totals as of the end of that day.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DailyRecord {
    pub day: u32,
    pub daily_accrual: u64,
    pub cumulative_sats: u64,
    pub cumulative_value_primary: f64,
    pub cumulative_value_secondary: f64,
}

impl DailyRecord {
    pub fn value_in(&self, currency: Currency) -> f64 {
        match currency {
            Currency::Usd => self.cumulative_value_primary,
            Currency::Cad => self.cumulative_value_secondary,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CalculationResult {
    pub total_sats: u64,
    pub total_value_primary: f64,
    pub total_value_secondary: f64,
    pub average_sats_per_day: f64,
    pub average_value_per_day_primary: f64,
    pub average_value_per_day_secondary: f64,
    pub series: Vec<DailyRecord>,
}

impl CalculationResult {
    pub fn streak_days(&self) -> usize {
        self.series.len()
    }

    pub fn last(&self) -> Option<&DailyRecord> {
        self.series.last()
    }

    pub fn value_in(&self, currency: Currency) -> f64 {
        match currency {
            Currency::Usd => self.total_value_primary,
            Currency::Cad => self.total_value_secondary,
        }
    }

    pub fn average_value_in(&self, currency: Currency) -> f64 {
        match currency {
            Currency::Usd => self.average_value_per_day_primary,
            Currency::Cad => self.average_value_per_day_secondary,
        }
    }
}
