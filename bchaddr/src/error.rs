//! Error types for address and derivation operations.

#[cfg(feature = "alloc")]
use alloc::boxed::Box;
use core::fmt;

/// Errors that can occur while decoding, encoding, or deriving addresses.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Input contains a character outside the encoding alphabet.
    InvalidCharacter(char),
    /// Embedded checksum does not match the payload.
    ChecksumMismatch,
    /// Version byte does not map to a known network/script-type pair.
    UnknownVersionByte(u8),
    /// Decoded hash is not the 20 bytes an address payload requires.
    InvalidPayloadLength(usize),
    /// A prefixless CashAddr string validated against zero or several known
    /// prefixes, or an explicit prefix names no known network.
    NoValidPrefix,
    /// CashAddr input mixes upper- and lowercase characters.
    MixedCase,
    /// Non-zero padding bits left over after 5-to-8-bit regrouping.
    InvalidPadding,
    /// Empty or missing input.
    EmptyInput,
    /// The payload has no legacy encoding (testnet P2SH).
    NoLegacyEncoding,
    /// The string could not be decoded by any known codec.
    #[cfg(feature = "alloc")]
    InvalidAddress(Box<Error>),
    /// Derivation path is not a `/`-separated list of indices.
    InvalidDerivationPath,
    /// Hardened derivation requires a private key and is unsupported.
    HardenedDerivationUnsupported,
    /// Deriving past depth 255 would overflow the BIP-32 depth field.
    MaxDepthExceeded,
    /// HMAC left half is not a usable scalar, or the child point is the
    /// point at infinity.
    InvalidChildKey,
    /// Extended key is not a well-formed 78-byte BIP-32 structure.
    MalformedExtendedKey,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter(c) => write!(f, "invalid character {c:?} in address"),
            Self::ChecksumMismatch => write!(f, "checksum mismatch"),
            Self::UnknownVersionByte(b) => write!(f, "unknown version byte 0x{b:02x}"),
            Self::InvalidPayloadLength(n) => {
                write!(f, "invalid payload length {n}, expected 20 bytes")
            }
            Self::NoValidPrefix => {
                write!(f, "cash address does not validate under exactly one known prefix")
            }
            Self::MixedCase => write!(f, "cash address must not mix upper and lower case"),
            Self::InvalidPadding => write!(f, "non-zero padding bits in cash address payload"),
            Self::EmptyInput => write!(f, "empty address string"),
            Self::NoLegacyEncoding => {
                write!(f, "no legacy encoding is defined for testnet P2SH")
            }
            #[cfg(feature = "alloc")]
            Self::InvalidAddress(source) => write!(f, "invalid address: {source}"),
            Self::InvalidDerivationPath => write!(f, "invalid derivation path"),
            Self::HardenedDerivationUnsupported => {
                write!(f, "hardened derivation requires a private key")
            }
            Self::MaxDepthExceeded => write!(f, "BIP-32 derivation depth limit reached"),
            Self::InvalidChildKey => write!(f, "derived child key is invalid for this index"),
            Self::MalformedExtendedKey => write!(f, "malformed extended public key"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidAddress(source) => Some(source.as_ref()),
            _ => None,
        }
    }
}
