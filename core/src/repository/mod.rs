pub mod config;
pub mod price;
pub mod traits;

// Re-export
pub use config::{default_data_dir, FileConfigRepository};
pub use price::{parse_price_response, FilePriceSource, FixedPriceSource};
pub use traits::{ConfigRepository, PriceQuote, PriceSource};
