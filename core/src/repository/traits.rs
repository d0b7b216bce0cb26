use crate::model::config::CalculatorConfig;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// BTC spot price as reported by a price source.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PriceQuote {
    pub usd: f64,
}

pub trait PriceSource {
    fn fetch(&self) -> Result<PriceQuote>;
}

pub trait ConfigRepository {
    fn load(&self) -> Result<CalculatorConfig>;
    fn save(&self, config: &CalculatorConfig) -> Result<()>;
}
