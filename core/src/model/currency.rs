use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Primary currency, the one the BTC price is quoted in.
    #[default]
    Usd,
    /// Secondary currency, derived from the primary through a static rate.
    Cad,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Cad => "CAD",
        }
    }

    /// Prefix an en-US locale puts in front of amounts.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Cad => "CA$",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Currency::Usd => Currency::Cad,
            Currency::Cad => Currency::Usd,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "usd" | "us" | "u" => Ok(Currency::Usd),
            "cad" | "ca" | "c" => Ok(Currency::Cad),
            _ => Err(anyhow!("Unknown currency: '{}'", s)),
        }
    }
}
