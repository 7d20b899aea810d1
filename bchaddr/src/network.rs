//! Bitcoin Cash network types.

use core::fmt;
use core::str::FromStr;

/// Supported Bitcoin Cash networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Network {
    /// Bitcoin Cash mainnet.
    #[default]
    Mainnet,
    /// Bitcoin Cash testnet.
    Testnet,
}

impl Network {
    /// The CashAddr human-readable prefix for this network.
    #[inline]
    #[must_use]
    pub const fn cash_prefix(self) -> &'static str {
        match self {
            Self::Mainnet => "bitcoincash",
            Self::Testnet => "bchtest",
        }
    }

    /// Resolve a CashAddr prefix back to its network.
    #[must_use]
    pub fn from_cash_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "bitcoincash" => Some(Self::Mainnet),
            "bchtest" => Some(Self::Testnet),
            _ => None,
        }
    }

    /// Network name as a string.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when parsing an invalid network name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseNetworkError;

impl fmt::Display for ParseNetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid network, expected: mainnet or testnet")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseNetworkError {}

impl FromStr for Network {
    type Err = ParseNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("mainnet") {
            Ok(Self::Mainnet)
        } else if s.eq_ignore_ascii_case("testnet") {
            Ok(Self::Testnet)
        } else {
            Err(ParseNetworkError)
        }
    }
}
