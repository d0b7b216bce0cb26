use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use satstreak_core::repository::{parse_price_response, PriceQuote};
use satstreak_core::PriceSource;
use tracing::debug;

pub const COINGECKO_PRICE_URL: &str =
    "https://api.coingecko.com/api/v3/simple/price?ids=bitcoin&vs_currencies=usd";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Live BTC price from the CoinGecko `simple/price` endpoint.
pub struct CoinGeckoPriceSource {
    url: String,
    agent: ureq::Agent,
}

impl CoinGeckoPriceSource {
    pub fn new() -> Self {
        Self::with_url(COINGECKO_PRICE_URL)
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            agent: ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build(),
        }
    }
}

impl Default for CoinGeckoPriceSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceSource for CoinGeckoPriceSource {
    fn fetch(&self) -> Result<PriceQuote> {
        debug!(url = %self.url, "fetching BTC price");
        let response = self
            .agent
            .get(&self.url)
            .set("Accept", "application/json")
            .call()
            .map_err(|e| anyhow!("request '{}': {}", self.url, e))?;
        let body = response.into_string().context("read price response body")?;
        parse_price_response(&body)
    }
}
