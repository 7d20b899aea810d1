//! Non-hardened derivation paths.
//!
//! A watch-only path is a `/`-separated list of child indices, each below
//! 2^31. `"0/<i>"` is the receiving-chain convention; other chain values
//! are passed through as literal indices for the caller to interpret.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::error::Error;
use crate::Result;

/// Indices below this bound derive without a private key.
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// An ordered list of non-hardened child indices.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DerivationPath {
    indices: Vec<u32>,
}

impl DerivationPath {
    /// Build a path from raw indices.
    ///
    /// Fails with [`Error::HardenedDerivationUnsupported`] if any index is
    /// in the hardened range.
    pub fn new(indices: Vec<u32>) -> Result<Self> {
        if indices.iter().any(|&index| index >= HARDENED_OFFSET) {
            return Err(Error::HardenedDerivationUnsupported);
        }
        Ok(Self { indices })
    }

    /// The conventional receiving-chain path `0/<index>`.
    pub fn receiving(index: u32) -> Result<Self> {
        Self::new(vec![0, index])
    }

    /// Parse a path like `"0/7"`.
    ///
    /// A leading `m/` is accepted; hardened markers (`'`, `h`, `H`) and
    /// numeric indices in the hardened range are rejected since no private
    /// key is available.
    pub fn parse(path: &str) -> Result<Self> {
        let path = path.trim();
        if path.is_empty() || path == "m" || path == "M" {
            return Ok(Self::default());
        }
        let path = path
            .strip_prefix("m/")
            .or_else(|| path.strip_prefix("M/"))
            .unwrap_or(path);

        let mut indices = Vec::new();
        for component in path.split('/') {
            if component.is_empty() {
                continue;
            }
            if component.ends_with('\'') || component.ends_with('h') || component.ends_with('H') {
                return Err(Error::HardenedDerivationUnsupported);
            }
            let index: u32 = component
                .parse()
                .map_err(|_| Error::InvalidDerivationPath)?;
            if index >= HARDENED_OFFSET {
                return Err(Error::HardenedDerivationUnsupported);
            }
            indices.push(index);
        }
        Ok(Self { indices })
    }

    /// The child indices in order.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of derivation steps.
    pub fn depth(&self) -> usize {
        self.indices.len()
    }

    /// Whether the path derives nothing (the key itself).
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, index) in self.indices.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            write!(f, "{index}")?;
        }
        Ok(())
    }
}

impl FromStr for DerivationPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain() {
        let path = DerivationPath::parse("0/7").unwrap();
        assert_eq!(path.indices(), &[0, 7]);
        assert_eq!(path.depth(), 2);
    }

    #[test]
    fn parse_with_master_prefix() {
        assert_eq!(
            DerivationPath::parse("m/0/7").unwrap(),
            DerivationPath::parse("0/7").unwrap()
        );
    }

    #[test]
    fn parse_empty_is_master() {
        assert!(DerivationPath::parse("").unwrap().is_empty());
        assert!(DerivationPath::parse("m").unwrap().is_empty());
    }

    #[test]
    fn parse_rejects_hardened_marker() {
        for path in ["0'/1", "0h/1", "0H/1", "44'/145'/0'"] {
            assert_eq!(
                DerivationPath::parse(path),
                Err(Error::HardenedDerivationUnsupported)
            );
        }
    }

    #[test]
    fn parse_rejects_hardened_range() {
        assert_eq!(
            DerivationPath::parse("0/2147483648"),
            Err(Error::HardenedDerivationUnsupported)
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(
            DerivationPath::parse("0/x"),
            Err(Error::InvalidDerivationPath)
        );
        assert_eq!(
            DerivationPath::parse("0/-1"),
            Err(Error::InvalidDerivationPath)
        );
    }

    #[test]
    fn receiving_constructor() {
        assert_eq!(
            DerivationPath::receiving(5).unwrap(),
            DerivationPath::parse("0/5").unwrap()
        );
    }

    #[test]
    fn display_round_trip() {
        let path = DerivationPath::parse("0/19").unwrap();
        assert_eq!(path.to_string(), "0/19");
        assert_eq!(path.to_string().parse::<DerivationPath>().unwrap(), path);
    }

    #[test]
    fn new_rejects_hardened_indices() {
        assert_eq!(
            DerivationPath::new(vec![0, HARDENED_OFFSET]),
            Err(Error::HardenedDerivationUnsupported)
        );
    }
}
