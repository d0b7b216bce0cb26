pub mod error;
pub mod format;
pub mod model;
pub mod repository;
pub mod schedule;
pub mod service;
pub mod usecase;

pub use error::CalcError;
pub use format::{format_btc, format_compact, format_currency, format_number};
pub use model::config::CalculatorConfig;
pub use model::currency::Currency;
pub use model::record::{CalculationResult, DailyRecord};
pub use repository::{ConfigRepository, FileConfigRepository, FilePriceSource, FixedPriceSource, PriceSource};
pub use schedule::{daily_accrual, region_for, RewardRegion, SATURATION_DAY, SATS_PER_BTC, TABLE_MAX};
pub use service::accumulator::{
    accumulate, calculate, CalculationInput, DEFAULT_SECONDARY_RATE, MAX_CALCULATION_DAYS,
};
pub use service::price_service::{PriceService, ResolvedPrice, FALLBACK_PRICE_USD};
pub use usecase::estimate::{Estimate, EstimateUseCase};
