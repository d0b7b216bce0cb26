use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::model::config::CalculatorConfig;
use crate::model::record::CalculationResult;
use crate::repository::traits::PriceSource;
use crate::service::accumulator::{calculate, CalculationInput};
use crate::service::price_service::{PriceService, ResolvedPrice};

/// A calculation together with the price it was valued at.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Estimate {
    pub input: CalculationInput,
    pub price_is_fallback: bool,
    pub result: CalculationResult,
}

pub struct EstimateUseCase<'a, S: PriceSource> {
    price_service: &'a PriceService<S>,
    config: &'a CalculatorConfig,
}

impl<'a, S: PriceSource> EstimateUseCase<'a, S> {
    pub fn new(price_service: &'a PriceService<S>, config: &'a CalculatorConfig) -> Self {
        Self {
            price_service,
            config,
        }
    }

    pub fn resolve_price(&self) -> ResolvedPrice {
        self.price_service.resolve()
    }

    /// Missing arguments come from the config.
    pub fn estimate(&self, streak_days: Option<i64>, secondary_rate: Option<f64>) -> Result<Estimate> {
        let price = self.resolve_price();
        self.estimate_at(price, streak_days, secondary_rate)
    }

    /// Same as [`estimate`](Self::estimate) but with an already resolved price,
    /// so interactive callers can recalculate without hitting the source again.
    pub fn estimate_at(
        &self,
        price: ResolvedPrice,
        streak_days: Option<i64>,
        secondary_rate: Option<f64>,
    ) -> Result<Estimate> {
        let input = CalculationInput::new(
            streak_days.unwrap_or(self.config.default_streak_days),
            price.usd(),
        )
        .with_secondary_rate(secondary_rate.unwrap_or(self.config.secondary_rate));

        let result = calculate(&input)?;

        Ok(Estimate {
            input,
            price_is_fallback: price.is_fallback,
            result,
        })
    }
}
