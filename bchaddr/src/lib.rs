//! # bchaddr - Bitcoin Cash address toolkit
//!
//! Converts between the legacy Base58Check and CashAddr encodings of a
//! Bitcoin Cash address, classifies address strings by format, network, and
//! script type, and derives receiving addresses from a BIP-32 extended
//! public key (watch-only, non-hardened derivation only).
//!
//! ## Features
//!
//! - `std` (default): enable standard library support
//! - `alloc`: enable heap allocation without full `std`
//!
//! ## Usage
//!
//! ```
//! use bchaddr::address;
//!
//! let cash = address::to_cash_address("1BpEi6DfDAUFd7GtittLSdBeYJvcoaVggu", true).unwrap();
//! assert_eq!(cash, "bitcoincash:qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a");
//!
//! let legacy = address::to_legacy_address(&cash).unwrap();
//! assert_eq!(legacy, "1BpEi6DfDAUFd7GtittLSdBeYJvcoaVggu");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs, rust_2018_idioms, clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::doc_markdown,
    clippy::unreadable_literal,
    clippy::cast_possible_truncation
)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod address;
#[cfg(feature = "alloc")]
pub mod base58check;
#[cfg(feature = "alloc")]
pub mod cashaddr;
#[cfg(feature = "alloc")]
mod deriver;
mod error;
pub mod hash;
#[cfg(feature = "alloc")]
mod hdpath;
mod network;
mod types;
#[cfg(feature = "alloc")]
mod xpub;

#[cfg(feature = "alloc")]
pub use deriver::{derive_address, Deriver};
pub use error::Error;
#[cfg(feature = "alloc")]
pub use hdpath::DerivationPath;
pub use network::{Network, ParseNetworkError};
pub use types::{AddressFormat, AddressPayload, ParseScriptTypeError, ScriptType};
#[cfg(feature = "alloc")]
pub use xpub::ExtendedPublicKey;

/// A convenient Result type alias for bchaddr operations.
pub type Result<T> = core::result::Result<T, Error>;
