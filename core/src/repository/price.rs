use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use crate::repository::traits::{PriceQuote, PriceSource};

/// A price the user typed in.
#[derive(Debug, Clone, Copy)]
pub struct FixedPriceSource {
    quote: PriceQuote,
}

impl FixedPriceSource {
    pub fn new(usd: f64) -> Self {
        Self {
            quote: PriceQuote { usd },
        }
    }
}

impl PriceSource for FixedPriceSource {
    fn fetch(&self) -> Result<PriceQuote> {
        if !(self.quote.usd.is_finite() && self.quote.usd > 0.0) {
            return Err(anyhow!("Price must be a positive number, got {}", self.quote.usd));
        }
        Ok(self.quote)
    }
}

/// Reads a saved price response, e.g.
/// `curl 'https://api.coingecko.com/api/v3/simple/price?ids=bitcoin&vs_currencies=usd' > price.json`.
#[derive(Debug, Clone)]
pub struct FilePriceSource {
    path: PathBuf,
}

impl FilePriceSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PriceSource for FilePriceSource {
    fn fetch(&self) -> Result<PriceQuote> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("read price file '{}'", self.path.display()))?;
        parse_price_response(&content)
    }
}

#[derive(Deserialize)]
struct CoinGeckoBody {
    bitcoin: Option<CoinGeckoPrices>,
    // Shape returned by the old price proxy: { "price": 95000 }
    price: Option<f64>,
}

#[derive(Deserialize)]
struct CoinGeckoPrices {
    usd: Option<f64>,
}

/// Accepts either a CoinGecko `simple/price` body or a bare `{ "price": .. }`.
pub fn parse_price_response(body: &str) -> Result<PriceQuote> {
    let parsed: CoinGeckoBody = serde_json::from_str(body).context("deserialize price response")?;

    let usd = match (parsed.bitcoin, parsed.price) {
        (Some(prices), _) => prices.usd,
        (None, price) => price,
    };

    let usd = usd.ok_or_else(|| anyhow!("Price response has no USD price"))?;
    if !(usd.is_finite() && usd > 0.0) {
        return Err(anyhow!("USD price must be positive, got {}", usd));
    }

    Ok(PriceQuote { usd })
}
