use serde::{Deserialize, Serialize};

use crate::model::currency::Currency;
use crate::model::record::{CalculationResult, DailyRecord};

pub const DEFAULT_CHART_POINTS: usize = 100;

/// Thins a long series down to roughly `max_points` evenly spaced records.
///
/// Keeps every record whose index is a multiple of `ceil(len / max_points)`
/// and always keeps the final record, so the curve ends on the real total.
pub fn sample_series(series: &[DailyRecord], max_points: usize) -> Vec<DailyRecord> {
    let max_points = max_points.max(1);
    if series.len() <= max_points {
        return series.to_vec();
    }

    let step = series.len().div_ceil(max_points);
    let last = series.len() - 1;
    series
        .iter()
        .enumerate()
        .filter(|(i, _)| i % step == 0 || *i == last)
        .map(|(_, r)| r.clone())
        .collect()
}

/// Plot-ready points: x is the streak day.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub currency: Currency,
    pub sats: Vec<(f64, f64)>,
    pub value: Vec<(f64, f64)>,
    pub x_bounds: [f64; 2],
    pub sats_bounds: [f64; 2],
    pub value_bounds: [f64; 2],
}

pub fn build_chart(result: &CalculationResult, currency: Currency, max_points: usize) -> ChartSeries {
    let sampled = sample_series(&result.series, max_points);

    let sats: Vec<(f64, f64)> = sampled
        .iter()
        .map(|r| (f64::from(r.day), r.cumulative_sats as f64))
        .collect();
    let value: Vec<(f64, f64)> = sampled
        .iter()
        .map(|r| (f64::from(r.day), r.value_in(currency)))
        .collect();

    let last_day = result.last().map(|r| f64::from(r.day)).unwrap_or(1.0);

    ChartSeries {
        currency,
        sats,
        value,
        x_bounds: [1.0, last_day.max(1.0)],
        sats_bounds: [0.0, (result.total_sats as f64).max(1.0)],
        value_bounds: [0.0, positive_or_one(result.value_in(currency))],
    }
}

fn positive_or_one(v: f64) -> f64 {
    if v > 0.0 {
        v
    } else {
        1.0
    }
}
