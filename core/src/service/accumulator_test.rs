
#[cfg(test)]
mod tests {
    use crate::schedule::daily_accrual;
    use crate::service::accumulator::{accumulate, calculate, CalculationInput, DEFAULT_SECONDARY_RATE};
    use proptest::prelude::*;

    #[test]
    fn test_full_year_streak() {
        let result = accumulate(365, 95_000.0, 1.35).unwrap();

        assert_eq!(result.series.len(), 365);
        let last = &result.series[364];
        assert_eq!(last.day, 365);
        assert_eq!(last.daily_accrual, 365);

        // 87,761 from the table plus 365 for the first linear day
        assert_eq!(result.total_sats, 87_761 + 365);
        assert_eq!(last.cumulative_sats, result.total_sats);
    }

    #[test]
    fn test_saturation_streak() {
        let result = accumulate(1000, 95_000.0, 1.35).unwrap();
        assert_eq!(result.series.len(), 1000);
        assert_eq!(result.total_sats, 521_831);
        assert_eq!(result.series[999].daily_accrual, 1000);
    }

    #[test]
    fn test_long_streak_keeps_saturated_rate() {
        let result = accumulate(10_000, 95_000.0, 1.35).unwrap();
        assert_eq!(result.series.len(), 10_000);
        assert_eq!(result.total_sats, 9_521_831);
        let tail = &result.series[9_000..];
        assert!(tail.iter().all(|r| r.daily_accrual == 1000));
    }

    #[test]
    fn test_series_is_index_aligned() {
        let result = accumulate(400, 50_000.0, 1.35).unwrap();
        for (i, record) in result.series.iter().enumerate() {
            assert_eq!(record.day as usize, i + 1);
            assert_eq!(record.daily_accrual, daily_accrual(i as i64 + 1));
        }
    }

    #[test]
    fn test_totals_match_last_record() {
        let result = accumulate(720, 87_250.5, 1.41).unwrap();
        let last = result.last().unwrap();
        assert_eq!(result.total_value_primary, last.cumulative_value_primary);
        assert_eq!(result.total_value_secondary, last.cumulative_value_secondary);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let input = CalculationInput::new(1_234, 95_000.0);
        let first = calculate(&input).unwrap();
        let second = calculate(&input).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first.total_value_primary.to_bits(),
            second.total_value_primary.to_bits()
        );
    }

    #[test]
    fn test_single_day() {
        let result = accumulate(1, 95_000.0, DEFAULT_SECONDARY_RATE).unwrap();
        assert_eq!(result.total_sats, 21);
        assert_eq!(result.average_sats_per_day, 21.0);
    }

    proptest! {
        #[test]
        fn cumulative_sats_strictly_increase(days in 1i64..3_000) {
            let result = accumulate(days, 95_000.0, 1.35).unwrap();
            prop_assert_eq!(result.series.len() as i64, days);
            for pair in result.series.windows(2) {
                prop_assert!(pair[1].cumulative_sats > pair[0].cumulative_sats);
            }
        }

        #[test]
        fn secondary_value_scales_primary(days in 1i64..2_000, rate in 0.01f64..10.0) {
            let result = accumulate(days, 95_000.0, rate).unwrap();
            prop_assert_eq!(result.total_value_secondary, result.total_value_primary * rate);
            for record in &result.series {
                prop_assert_eq!(record.cumulative_value_secondary, record.cumulative_value_primary * rate);
            }
        }

        #[test]
        fn outputs_are_finite_and_non_negative(days in 1i64..2_000, price in 0.01f64..10_000_000.0) {
            let result = accumulate(days, price, 1.35).unwrap();
            for value in [
                result.total_value_primary,
                result.total_value_secondary,
                result.average_sats_per_day,
                result.average_value_per_day_primary,
                result.average_value_per_day_secondary,
            ] {
                prop_assert!(value.is_finite());
                prop_assert!(value >= 0.0);
            }
        }
    }
}
