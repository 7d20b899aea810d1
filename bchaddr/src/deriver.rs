//! Receiving-address derivation from an extended public key.

use alloc::string::String;
use alloc::vec::Vec;

use crate::base58check;
use crate::cashaddr;
use crate::hash::hash160;
use crate::hdpath::DerivationPath;
use crate::network::Network;
use crate::types::{AddressFormat, AddressPayload, ScriptType};
use crate::xpub::ExtendedPublicKey;
use crate::Result;

/// Derive one address from an encoded xpub and a path string like `"0/3"`.
///
/// The result is a P2PKH address on the extended key's network, rendered in
/// `format`; CashAddr output keeps its prefix.
pub fn derive_address(xpub: &str, path: &str, format: AddressFormat) -> Result<String> {
    let key = ExtendedPublicKey::from_xpub(xpub)?;
    let path = DerivationPath::parse(path)?;
    Deriver::new(key).derive(&path, format)
}

/// Derives addresses from a parsed extended public key.
#[derive(Clone, Debug)]
pub struct Deriver {
    xpub: ExtendedPublicKey,
}

impl Deriver {
    /// Wrap a parsed extended public key.
    pub const fn new(xpub: ExtendedPublicKey) -> Self {
        Self { xpub }
    }

    /// Parse `text` and wrap the result.
    pub fn from_xpub(text: &str) -> Result<Self> {
        ExtendedPublicKey::from_xpub(text).map(Self::new)
    }

    /// Derive the P2PKH address at `path`.
    pub fn derive(&self, path: &DerivationPath, format: AddressFormat) -> Result<String> {
        let child = self.xpub.derive_path(path)?;
        let payload = AddressPayload {
            network: child.network(),
            script_type: ScriptType::P2pkh,
            hash: hash160(&child.public_key_bytes()),
        };
        match format {
            AddressFormat::Legacy => base58check::encode(&payload),
            AddressFormat::CashAddr => Ok(cashaddr::encode(&payload, true)),
        }
    }

    /// Derive the receiving-chain address at `index` (path `0/<index>`).
    pub fn receiving(&self, index: u32, format: AddressFormat) -> Result<String> {
        self.derive(&DerivationPath::receiving(index)?, format)
    }

    /// Derive `count` consecutive receiving addresses starting at `start`.
    pub fn receiving_many(
        &self,
        start: u32,
        count: u32,
        format: AddressFormat,
    ) -> Result<Vec<String>> {
        (start..start.saturating_add(count))
            .map(|index| self.receiving(index, format))
            .collect()
    }

    /// Network of the underlying extended key.
    pub const fn network(&self) -> Network {
        self.xpub.network()
    }
}
