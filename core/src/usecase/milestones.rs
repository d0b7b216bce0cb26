use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::model::record::CalculationResult;
use crate::schedule::{SATURATION_DAY, TABLE_MAX};

pub const DEFAULT_SATS_THRESHOLDS: [u64; 3] = [100_000, 1_000_000, 10_000_000];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum MilestoneKind {
    /// Cumulative total reached this many sats.
    SatsReached(u64),
    /// Last day paid from the published table.
    TableComplete,
    /// Daily reward stops growing.
    Saturation,
}

impl MilestoneKind {
    pub fn describe(&self) -> String {
        match self {
            MilestoneKind::SatsReached(t) => format!("{} sats stacked", crate::format::format_number(*t as f64)),
            MilestoneKind::TableComplete => "Reward table complete".to_string(),
            MilestoneKind::Saturation => "Daily reward maxed out".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Milestone {
    pub kind: MilestoneKind,
    pub day: u32,
    pub cumulative_sats: u64,
    pub date: Option<NaiveDate>,
}

/// Milestones reached within the series, ordered by day. Day 1 of the
/// streak falls on `start` when given.
pub fn find_milestones(result: &CalculationResult, start: Option<NaiveDate>) -> Vec<Milestone> {
    find_milestones_with(result, &DEFAULT_SATS_THRESHOLDS, start)
}

pub fn find_milestones_with(
    result: &CalculationResult,
    thresholds: &[u64],
    start: Option<NaiveDate>,
) -> Vec<Milestone> {
    let mut milestones = Vec::new();
    let mut pending: Vec<u64> = thresholds.to_vec();
    pending.sort_unstable();
    pending.dedup();
    let mut next = 0;

    for record in &result.series {
        while next < pending.len() && record.cumulative_sats >= pending[next] {
            milestones.push(Milestone {
                kind: MilestoneKind::SatsReached(pending[next]),
                day: record.day,
                cumulative_sats: record.cumulative_sats,
                date: None,
            });
            next += 1;
        }

        let day = i64::from(record.day);
        if day == TABLE_MAX {
            milestones.push(Milestone {
                kind: MilestoneKind::TableComplete,
                day: record.day,
                cumulative_sats: record.cumulative_sats,
                date: None,
            });
        } else if day == SATURATION_DAY {
            milestones.push(Milestone {
                kind: MilestoneKind::Saturation,
                day: record.day,
                cumulative_sats: record.cumulative_sats,
                date: None,
            });
        }
    }

    if let Some(start) = start {
        for m in milestones.iter_mut() {
            m.date = calendar_date(start, m.day);
        }
    }

    milestones
}

/// Calendar date of streak day `day` when day 1 is `start`.
pub fn calendar_date(start: NaiveDate, day: u32) -> Option<NaiveDate> {
    start.checked_add_signed(Duration::days(i64::from(day) - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::accumulator::accumulate;

    #[test]
    fn test_short_streak_has_no_milestones() {
        let result = accumulate(30, 95_000.0, 1.35).unwrap();
        assert!(find_milestones(&result, None).is_empty());
    }

    #[test]
    fn test_milestones_over_four_years() {
        let result = accumulate(1_500, 95_000.0, 1.35).unwrap();
        let milestones = find_milestones(&result, None);

        let kinds: Vec<_> = milestones.iter().map(|m| (m.kind.clone(), m.day)).collect();
        assert_eq!(
            kinds,
            vec![
                (MilestoneKind::TableComplete, 364),
                (MilestoneKind::SatsReached(100_000), 397),
                (MilestoneKind::Saturation, 1000),
                (MilestoneKind::SatsReached(1_000_000), 1479),
            ]
        );
        assert_eq!(milestones[1].cumulative_sats, 100_334);
    }

    #[test]
    fn test_milestone_dates() {
        let result = accumulate(400, 95_000.0, 1.35).unwrap();
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let milestones = find_milestones(&result, Some(start));

        assert_eq!(milestones[0].kind, MilestoneKind::TableComplete);
        assert_eq!(milestones[0].date, NaiveDate::from_ymd_opt(2025, 12, 30));
        assert_eq!(milestones[1].date, NaiveDate::from_ymd_opt(2026, 2, 1));
    }

    #[test]
    fn test_custom_thresholds_in_any_order() {
        let result = accumulate(10, 95_000.0, 1.35).unwrap();
        let milestones = find_milestones_with(&result, &[100, 21, 100], None);
        assert_eq!(milestones.len(), 2);
        assert_eq!(milestones[0].kind, MilestoneKind::SatsReached(21));
        assert_eq!(milestones[0].day, 1);
        assert_eq!(milestones[1].kind, MilestoneKind::SatsReached(100));
        assert_eq!(milestones[1].day, 4);
    }

    #[test]
    fn test_calendar_date() {
        let start = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
        assert_eq!(calendar_date(start, 1), Some(start));
        assert_eq!(calendar_date(start, 3), NaiveDate::from_ymd_opt(2024, 3, 1));
    }
}
