//! BIP-32 extended public keys.
//!
//! Watch-only parsing and non-hardened child derivation. An extended key
//! is the standard 78-byte structure: version ‖ depth ‖ parent fingerprint
//! ‖ child number ‖ chain code ‖ compressed public key, Base58Check
//! encoded.

use alloc::string::String;

use hmac::{Hmac, Mac};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::{NonZeroScalar, ProjectivePoint, PublicKey};
use sha2::Sha512;

use crate::base58check;
use crate::error::Error;
use crate::hash::hash160;
use crate::hdpath::{DerivationPath, HARDENED_OFFSET};
use crate::network::Network;
use crate::Result;

type HmacSha512 = Hmac<Sha512>;

/// A BIP-32 extended public key.
///
/// Immutable; every derivation step returns a new value owning its own
/// chain code and key bytes.
#[derive(Clone)]
pub struct ExtendedPublicKey {
    public_key: PublicKey,
    chain_code: [u8; 32],
    depth: u8,
    parent_fingerprint: [u8; 4],
    child_number: u32,
    network: Network,
}

impl ExtendedPublicKey {
    /// Parse a Base58Check-encoded extended public key (`xpub…`/`tpub…`).
    pub fn from_xpub(text: &str) -> Result<Self> {
        let data = base58check::decode_raw(text)?;
        if data.len() != 78 {
            return Err(Error::MalformedExtendedKey);
        }

        let network = match &data[0..4] {
            [0x04, 0x88, 0xB2, 0x1E] => Network::Mainnet, // xpub
            [0x04, 0x35, 0x87, 0xCF] => Network::Testnet, // tpub
            _ => return Err(Error::MalformedExtendedKey),
        };

        let depth = data[4];
        let mut parent_fingerprint = [0u8; 4];
        parent_fingerprint.copy_from_slice(&data[5..9]);
        let child_number = u32::from_be_bytes([data[9], data[10], data[11], data[12]]);
        let mut chain_code = [0u8; 32];
        chain_code.copy_from_slice(&data[13..45]);

        let public_key =
            PublicKey::from_sec1_bytes(&data[45..78]).map_err(|_| Error::MalformedExtendedKey)?;

        Ok(Self {
            public_key,
            chain_code,
            depth,
            parent_fingerprint,
            child_number,
            network,
        })
    }

    /// Serialize back to the Base58Check `xpub…`/`tpub…` form.
    pub fn to_xpub(&self) -> String {
        let version: [u8; 4] = match self.network {
            Network::Mainnet => [0x04, 0x88, 0xB2, 0x1E],
            Network::Testnet => [0x04, 0x35, 0x87, 0xCF],
        };

        let mut data = [0u8; 78];
        data[0..4].copy_from_slice(&version);
        data[4] = self.depth;
        data[5..9].copy_from_slice(&self.parent_fingerprint);
        data[9..13].copy_from_slice(&self.child_number.to_be_bytes());
        data[13..45].copy_from_slice(&self.chain_code);
        data[45..78].copy_from_slice(&self.public_key_bytes());
        base58check::encode_raw(&data)
    }

    /// Derive the non-hardened child at `index`.
    ///
    /// Per BIP-32 an index whose HMAC output is out of range, or whose
    /// child point is the point at infinity, is invalid and the caller
    /// should move on to the next index.
    pub fn derive_child(&self, index: u32) -> Result<Self> {
        if index >= HARDENED_OFFSET {
            return Err(Error::HardenedDerivationUnsupported);
        }
        if self.depth == u8::MAX {
            return Err(Error::MaxDepthExceeded);
        }

        // CKDpub: HMAC-SHA512(chain code, serP(Kpar) || ser32(i))
        let mut mac =
            HmacSha512::new_from_slice(&self.chain_code).map_err(|_| Error::InvalidChildKey)?;
        mac.update(&self.public_key_bytes());
        mac.update(&index.to_be_bytes());
        let digest = mac.finalize().into_bytes();
        let (il, ir) = digest.split_at(32);

        // Ki = parse256(IL)·G + Kpar
        let scalar = NonZeroScalar::try_from(il).map_err(|_| Error::InvalidChildKey)?;
        let child_point =
            ProjectivePoint::GENERATOR * scalar.as_ref() + self.public_key.to_projective();
        let public_key =
            PublicKey::from_affine(child_point.to_affine()).map_err(|_| Error::InvalidChildKey)?;

        let mut chain_code = [0u8; 32];
        chain_code.copy_from_slice(ir);
        let mut parent_fingerprint = [0u8; 4];
        parent_fingerprint.copy_from_slice(&hash160(&self.public_key_bytes())[..4]);

        Ok(Self {
            public_key,
            chain_code,
            depth: self.depth + 1,
            parent_fingerprint,
            child_number: index,
            network: self.network,
        })
    }

    /// Fold [`Self::derive_child`] over each index of `path`, failing
    /// closed on the first error.
    pub fn derive_path(&self, path: &DerivationPath) -> Result<Self> {
        let mut key = self.clone();
        for &index in path.indices() {
            key = key.derive_child(index)?;
        }
        Ok(key)
    }

    /// Compressed SEC1 bytes of the public key.
    pub fn public_key_bytes(&self) -> [u8; 33] {
        let point = self.public_key.to_encoded_point(true);
        let mut bytes = [0u8; 33];
        bytes.copy_from_slice(point.as_bytes());
        bytes
    }

    /// Network this key serializes for.
    pub const fn network(&self) -> Network {
        self.network
    }

    /// Depth in the derivation tree (0 for a master key).
    pub const fn depth(&self) -> u8 {
        self.depth
    }

    /// Fingerprint of the parent key.
    pub const fn parent_fingerprint(&self) -> [u8; 4] {
        self.parent_fingerprint
    }

    /// Child index that produced this key.
    pub const fn child_number(&self) -> u32 {
        self.child_number
    }

    /// Chain code for further derivation.
    pub const fn chain_code(&self) -> [u8; 32] {
        self.chain_code
    }
}

impl core::fmt::Debug for ExtendedPublicKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ExtendedPublicKey")
            .field("network", &self.network)
            .field("depth", &self.depth)
            .field("child_number", &self.child_number)
            .finish()
    }
}
