use satstreak_core::usecase::chart::{build_chart, ChartSeries};
use satstreak_core::{Currency, Estimate, EstimateUseCase, PriceSource, ResolvedPrice};
use tracing::debug;

use crate::args::MAX_STREAK_DAYS;

pub struct App<'a, S: PriceSource> {
    usecase: EstimateUseCase<'a, S>,
    price: ResolvedPrice,
    rate: Option<f64>,
    pub days: i64,
    pub currency: Currency,
    pub chart_points: usize,
    pub estimate: Option<Estimate>,
    pub error: Option<String>,
}

impl<'a, S: PriceSource> App<'a, S> {
    pub fn new(
        usecase: EstimateUseCase<'a, S>,
        days: i64,
        rate: Option<f64>,
        currency: Currency,
        chart_points: usize,
    ) -> Self {
        let price = usecase.resolve_price();
        let mut app = Self {
            usecase,
            price,
            rate,
            days,
            currency,
            chart_points,
            estimate: None,
            error: None,
        };
        app.recalculate();
        app
    }

    pub fn price(&self) -> &ResolvedPrice {
        &self.price
    }

    pub fn increase_days(&mut self, by: i64) {
        self.set_days(self.days.saturating_add(by));
    }

    pub fn decrease_days(&mut self, by: i64) {
        self.set_days(self.days.saturating_sub(by));
    }

    fn set_days(&mut self, days: i64) {
        let days = days.clamp(1, MAX_STREAK_DAYS);
        if days != self.days {
            self.days = days;
            self.recalculate();
        }
    }

    pub fn toggle_currency(&mut self) {
        self.currency = self.currency.toggle();
    }

    pub fn chart(&self) -> Option<ChartSeries> {
        self.estimate
            .as_ref()
            .map(|e| build_chart(&e.result, self.currency, self.chart_points))
    }

    fn recalculate(&mut self) {
        match self.usecase.estimate_at(self.price, Some(self.days), self.rate) {
            Ok(estimate) => {
                debug!(days = self.days, total_sats = estimate.result.total_sats, "recalculated");
                self.estimate = Some(estimate);
                self.error = None;
            }
            Err(e) => {
                self.estimate = None;
                self.error = Some(e.to_string());
            }
        }
    }
}
