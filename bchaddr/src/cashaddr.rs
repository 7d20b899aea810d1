//! CashAddr codec.
//!
//! A CashAddr string is an optional human-readable prefix, a `:` separator,
//! and a base-32 payload whose first byte packs the script type and hash
//! size, protected by a 40-bit polymod checksum over the expanded prefix
//! and the payload symbols.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::Error;
use crate::network::Network;
use crate::types::{AddressPayload, ScriptType};
use crate::Result;

/// The 32-character CashAddr alphabet.
const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Checksum generators from the CashAddr specification.
const GENERATORS: [u64; 5] = [
    0x98f2bc8e61,
    0x79b76d99e2,
    0xf33e5fb3c4,
    0xae2eabe2a8,
    0x1e4f43e470,
];

/// Version byte type bits for P2PKH (bits 3-6).
const TYPE_P2PKH: u8 = 0x00;
/// Version byte type bits for P2SH.
const TYPE_P2SH: u8 = 0x08;

fn polymod(values: &[u8]) -> u64 {
    let mut c: u64 = 1;
    for &d in values {
        let c0 = (c >> 35) as u8;
        c = ((c & 0x07ffffffff) << 5) ^ u64::from(d);
        for (i, generator) in GENERATORS.iter().enumerate() {
            if c0 & (1 << i) != 0 {
                c ^= generator;
            }
        }
    }
    c ^ 1
}

/// Expand a prefix for checksum computation: the low five bits of each
/// character followed by a zero separator.
fn expand_prefix(prefix: &str) -> Vec<u8> {
    let mut out: Vec<u8> = prefix.bytes().map(|b| b & 0x1f).collect();
    out.push(0);
    out
}

/// Regroup 8-bit bytes into 5-bit symbols, zero-padding the tail.
fn to_symbols(data: &[u8]) -> Vec<u8> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut out = Vec::with_capacity((data.len() * 8).div_ceil(5));
    for &byte in data {
        acc = (acc << 8) | u32::from(byte);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(((acc >> bits) & 0x1f) as u8);
        }
    }
    if bits > 0 {
        out.push(((acc << (5 - bits)) & 0x1f) as u8);
    }
    out
}

/// Regroup 5-bit symbols back into bytes. Non-zero padding is rejected so
/// that every payload has exactly one symbol spelling.
fn from_symbols(symbols: &[u8]) -> Result<Vec<u8>> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut out = Vec::with_capacity(symbols.len() * 5 / 8);
    for &symbol in symbols {
        acc = (acc << 5) | u32::from(symbol);
        bits += 5;
        while bits >= 8 {
            bits -= 8;
            out.push(((acc >> bits) & 0xff) as u8);
        }
    }
    if bits >= 5 || (bits > 0 && (acc << (8 - bits)) & 0xff != 0) {
        return Err(Error::InvalidPadding);
    }
    Ok(out)
}

fn parse_symbols(payload: &str) -> Result<Vec<u8>> {
    if payload.is_empty() {
        return Err(Error::EmptyInput);
    }
    payload
        .chars()
        .map(|c| {
            CHARSET
                .iter()
                .position(|&b| char::from(b) == c)
                .map(|i| i as u8)
                .ok_or(Error::InvalidCharacter(c))
        })
        .collect()
}

fn checksum_valid(network: Network, symbols: &[u8]) -> bool {
    let mut stream = expand_prefix(network.cash_prefix());
    stream.extend_from_slice(symbols);
    polymod(&stream) == 0
}

/// Encode a payload as a CashAddr string.
///
/// The returned string carries the `<prefix>:` part only when
/// `include_prefix` is set; either form decodes to the same payload.
pub fn encode(payload: &AddressPayload, include_prefix: bool) -> String {
    let type_bits = match payload.script_type {
        ScriptType::P2pkh => TYPE_P2PKH,
        ScriptType::P2sh => TYPE_P2SH,
    };
    // Size bits are zero for the only defined hash length, 20 bytes.
    let version = type_bits;

    let mut data = Vec::with_capacity(1 + payload.hash.len());
    data.push(version);
    data.extend_from_slice(&payload.hash);
    let symbols = to_symbols(&data);

    let prefix = payload.network.cash_prefix();
    let mut stream = expand_prefix(prefix);
    stream.extend_from_slice(&symbols);
    stream.extend_from_slice(&[0; 8]);
    let checksum = polymod(&stream);

    let mut out = String::new();
    if include_prefix {
        out.push_str(prefix);
        out.push(':');
    }
    for &symbol in &symbols {
        out.push(char::from(CHARSET[symbol as usize]));
    }
    for i in (0..8).rev() {
        out.push(char::from(CHARSET[((checksum >> (5 * i)) & 0x1f) as usize]));
    }
    out
}

/// Decode a CashAddr string, with or without its prefix.
///
/// A prefixless string is accepted only when it validates under exactly one
/// known network prefix; anything else is [`Error::NoValidPrefix`].
pub fn decode(text: &str) -> Result<AddressPayload> {
    if text.is_empty() {
        return Err(Error::EmptyInput);
    }

    let has_upper = text.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = text.chars().any(|c| c.is_ascii_lowercase());
    if has_upper && has_lower {
        return Err(Error::MixedCase);
    }
    let text = text.to_ascii_lowercase();

    // Only the part after the last colon is payload.
    let (network, symbols) = match text.rfind(':') {
        Some(pos) => {
            let network =
                Network::from_cash_prefix(&text[..pos]).ok_or(Error::NoValidPrefix)?;
            let symbols = parse_symbols(&text[pos + 1..])?;
            if !checksum_valid(network, &symbols) {
                return Err(Error::ChecksumMismatch);
            }
            (network, symbols)
        }
        None => {
            let symbols = parse_symbols(&text)?;
            let mut matched = None;
            for network in [Network::Mainnet, Network::Testnet] {
                if checksum_valid(network, &symbols) {
                    if matched.is_some() {
                        return Err(Error::NoValidPrefix);
                    }
                    matched = Some(network);
                }
            }
            (matched.ok_or(Error::NoValidPrefix)?, symbols)
        }
    };

    if symbols.len() <= 8 {
        return Err(Error::InvalidPayloadLength(0));
    }
    let data = from_symbols(&symbols[..symbols.len() - 8])?;

    let (&version, hash) = data.split_first().ok_or(Error::InvalidPayloadLength(0))?;
    if version & 0x80 != 0 {
        return Err(Error::UnknownVersionByte(version));
    }
    let script_type = match version & 0x78 {
        TYPE_P2PKH => ScriptType::P2pkh,
        TYPE_P2SH => ScriptType::P2sh,
        _ => return Err(Error::UnknownVersionByte(version)),
    };
    // The low three bits declare the hash size; only 20 bytes is defined
    // for an address payload.
    if version & 0x07 != 0 || hash.len() != 20 {
        return Err(Error::InvalidPayloadLength(hash.len()));
    }

    let mut digest = [0u8; 20];
    digest.copy_from_slice(hash);

    Ok(AddressPayload {
        network,
        script_type,
        hash: digest,
    })
}
