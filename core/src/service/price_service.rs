use tracing::{info, warn};

use crate::repository::traits::{PriceQuote, PriceSource};

/// Price used when no source can produce one.
pub const FALLBACK_PRICE_USD: f64 = 95_000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedPrice {
    pub quote: PriceQuote,
    pub is_fallback: bool,
}

impl ResolvedPrice {
    pub fn usd(&self) -> f64 {
        self.quote.usd
    }
}

pub struct PriceService<S: PriceSource> {
    source: S,
    fallback_usd: f64,
}

impl<S: PriceSource> PriceService<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            fallback_usd: FALLBACK_PRICE_USD,
        }
    }

    pub fn with_fallback(mut self, fallback_usd: f64) -> Self {
        if fallback_usd.is_finite() && fallback_usd > 0.0 {
            self.fallback_usd = fallback_usd;
        } else {
            warn!(fallback_usd, "ignoring non-positive fallback price");
        }
        self
    }

    /// Never fails: a source error is logged and replaced with the
    /// fallback price.
    pub fn resolve(&self) -> ResolvedPrice {
        match self.source.fetch() {
            Ok(quote) => {
                info!(usd = quote.usd, "using BTC price from source");
                ResolvedPrice {
                    quote,
                    is_fallback: false,
                }
            }
            Err(e) => {
                warn!(error = %e, fallback = self.fallback_usd, "price source failed, using fallback");
                ResolvedPrice {
                    quote: PriceQuote { usd: self.fallback_usd },
                    is_fallback: true,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::price::FixedPriceSource;
    use anyhow::{anyhow, Result};

    struct BrokenSource;

    impl PriceSource for BrokenSource {
        fn fetch(&self) -> Result<PriceQuote> {
            Err(anyhow!("connection refused"))
        }
    }

    #[test]
    fn test_uses_source_price() {
        let resolved = PriceService::new(FixedPriceSource::new(101_500.0)).resolve();
        assert_eq!(resolved.usd(), 101_500.0);
        assert!(!resolved.is_fallback);
    }

    #[test]
    fn test_falls_back_on_error() {
        let resolved = PriceService::new(BrokenSource).resolve();
        assert_eq!(resolved.usd(), FALLBACK_PRICE_USD);
        assert!(resolved.is_fallback);
    }

    #[test]
    fn test_custom_fallback() {
        let resolved = PriceService::new(BrokenSource).with_fallback(60_000.0).resolve();
        assert_eq!(resolved.usd(), 60_000.0);

        let ignored = PriceService::new(BrokenSource).with_fallback(-1.0).resolve();
        assert_eq!(ignored.usd(), FALLBACK_PRICE_USD);
    }

    #[test]
    fn test_invalid_fixed_price_falls_back() {
        let resolved = PriceService::new(FixedPriceSource::new(0.0)).resolve();
        assert!(resolved.is_fallback);
        assert_eq!(resolved.usd(), FALLBACK_PRICE_USD);
    }
}
