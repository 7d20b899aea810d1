//! Address facade: format conversion, classification, and predicates.
//!
//! Every entry point normalizes its input to [`AddressPayload`] before any
//! classification decision is made, so a prefixed CashAddr string, its
//! prefixless form, and the equivalent legacy string all classify
//! identically.

use alloc::boxed::Box;
use alloc::string::String;

use crate::base58check;
use crate::cashaddr;
use crate::error::Error;
use crate::network::Network;
use crate::types::{AddressFormat, AddressPayload, ScriptType};
use crate::xpub::ExtendedPublicKey;
use crate::Result;

fn decode_any(text: &str) -> Result<(AddressFormat, AddressPayload)> {
    if text.is_empty() {
        return Err(Error::InvalidAddress(Box::new(Error::EmptyInput)));
    }
    let legacy_err = match base58check::decode(text) {
        Ok(payload) => return Ok((AddressFormat::Legacy, payload)),
        Err(err) => err,
    };
    match cashaddr::decode(text) {
        Ok(payload) => Ok((AddressFormat::CashAddr, payload)),
        Err(cash_err) => {
            // Keep whichever failure names the more specific defect.
            let source = if matches!(cash_err, Error::InvalidCharacter(_)) {
                legacy_err
            } else {
                cash_err
            };
            Err(Error::InvalidAddress(Box::new(source)))
        }
    }
}

/// Decode an address in either encoding to its canonical payload.
pub fn decode(text: &str) -> Result<AddressPayload> {
    decode_any(text).map(|(_, payload)| payload)
}

/// Re-encode any valid address as legacy Base58Check.
pub fn to_legacy_address(text: &str) -> Result<String> {
    base58check::encode(&decode(text)?)
}

/// Re-encode any valid address as CashAddr.
pub fn to_cash_address(text: &str, include_prefix: bool) -> Result<String> {
    Ok(cashaddr::encode(&decode(text)?, include_prefix))
}

/// Report which encoding a string is in.
pub fn detect_format(text: &str) -> Result<AddressFormat> {
    decode_any(text).map(|(format, _)| format)
}

/// Report the network a string belongs to.
///
/// Base58Check extended public key strings are also accepted and classified
/// by their version bytes.
pub fn detect_network(text: &str) -> Result<Network> {
    match decode(text) {
        Ok(payload) => Ok(payload.network),
        Err(err) => match ExtendedPublicKey::from_xpub(text) {
            Ok(xpub) => Ok(xpub.network()),
            Err(_) => Err(err),
        },
    }
}

/// Report the script type an address pays to.
pub fn detect_script_type(text: &str) -> Result<ScriptType> {
    decode(text).map(|payload| payload.script_type)
}

/// Whether `text` is a legacy Base58Check address.
pub fn is_legacy(text: &str) -> Result<bool> {
    detect_format(text).map(|format| format == AddressFormat::Legacy)
}

/// Whether `text` is a CashAddr address, prefixed or not.
pub fn is_cash_address(text: &str) -> Result<bool> {
    detect_format(text).map(|format| format == AddressFormat::CashAddr)
}

/// Whether `text` belongs to mainnet. Accepts addresses and extended
/// public keys.
pub fn is_mainnet(text: &str) -> Result<bool> {
    detect_network(text).map(|network| network == Network::Mainnet)
}

/// Whether `text` belongs to testnet. Accepts addresses and extended
/// public keys.
pub fn is_testnet(text: &str) -> Result<bool> {
    detect_network(text).map(|network| network == Network::Testnet)
}

/// Whether `text` pays to a public key hash.
pub fn is_p2pkh(text: &str) -> Result<bool> {
    detect_script_type(text).map(|script_type| script_type == ScriptType::P2pkh)
}

/// Whether `text` pays to a script hash.
pub fn is_p2sh(text: &str) -> Result<bool> {
    detect_script_type(text).map(|script_type| script_type == ScriptType::P2sh)
}
