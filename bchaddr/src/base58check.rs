//! Legacy Base58Check address codec.
//!
//! A legacy address is version byte ‖ 20-byte HASH160 ‖ 4-byte checksum,
//! base-58 encoded. The checksum is the first four bytes of the double
//! SHA-256 of everything before it.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::Error;
use crate::hash::double_sha256;
use crate::network::Network;
use crate::types::{AddressPayload, ScriptType};
use crate::Result;

/// Version byte for mainnet P2PKH addresses.
pub const VERSION_MAINNET_P2PKH: u8 = 0x00;
/// Version byte for mainnet P2SH addresses.
pub const VERSION_MAINNET_P2SH: u8 = 0x05;
/// Version byte for testnet P2PKH addresses.
pub const VERSION_TESTNET_P2PKH: u8 = 0x6f;

/// Encode a payload as a legacy address.
///
/// Testnet P2SH has no defined legacy version byte and is rejected with
/// [`Error::NoLegacyEncoding`].
pub fn encode(payload: &AddressPayload) -> Result<String> {
    let version = match (payload.network, payload.script_type) {
        (Network::Mainnet, ScriptType::P2pkh) => VERSION_MAINNET_P2PKH,
        (Network::Mainnet, ScriptType::P2sh) => VERSION_MAINNET_P2SH,
        (Network::Testnet, ScriptType::P2pkh) => VERSION_TESTNET_P2PKH,
        (Network::Testnet, ScriptType::P2sh) => return Err(Error::NoLegacyEncoding),
    };

    let mut data = Vec::with_capacity(1 + payload.hash.len());
    data.push(version);
    data.extend_from_slice(&payload.hash);
    Ok(encode_raw(&data))
}

/// Decode a legacy address back to its payload.
pub fn decode(text: &str) -> Result<AddressPayload> {
    let data = decode_raw(text)?;

    let (version, hash) = data.split_first().ok_or(Error::InvalidPayloadLength(0))?;
    let (network, script_type) = match *version {
        VERSION_MAINNET_P2PKH => (Network::Mainnet, ScriptType::P2pkh),
        VERSION_MAINNET_P2SH => (Network::Mainnet, ScriptType::P2sh),
        VERSION_TESTNET_P2PKH => (Network::Testnet, ScriptType::P2pkh),
        other => return Err(Error::UnknownVersionByte(other)),
    };

    let hash: [u8; 20] = hash
        .try_into()
        .map_err(|_| Error::InvalidPayloadLength(data.len() - 1))?;

    Ok(AddressPayload {
        network,
        script_type,
        hash,
    })
}

/// Append a checksum to `data` and base-58 encode the result.
pub(crate) fn encode_raw(data: &[u8]) -> String {
    let checksum = double_sha256(data);
    let mut buf = Vec::with_capacity(data.len() + 4);
    buf.extend_from_slice(data);
    buf.extend_from_slice(&checksum[..4]);
    bs58::encode(buf).into_string()
}

/// Base-58 decode `text` and verify its trailing checksum.
pub(crate) fn decode_raw(text: &str) -> Result<Vec<u8>> {
    if text.is_empty() {
        return Err(Error::EmptyInput);
    }

    let data = bs58::decode(text).into_vec().map_err(|err| match err {
        bs58::decode::Error::InvalidCharacter { character, .. } => {
            Error::InvalidCharacter(character)
        }
        _ => Error::InvalidCharacter(char::REPLACEMENT_CHARACTER),
    })?;

    if data.len() < 5 {
        return Err(Error::InvalidPayloadLength(data.len()));
    }

    let (body, checksum) = data.split_at(data.len() - 4);
    let computed = double_sha256(body);
    if checksum != &computed[..4] {
        return Err(Error::ChecksumMismatch);
    }

    Ok(body.to_vec())
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;

    #[test]
    fn encode_mainnet_p2pkh() {
        let payload = AddressPayload::p2pkh(
            Network::Mainnet,
            hex!("62e907b15cbf27d5425399ebf6f0fb50ebb88f18"),
        );
        assert_eq!(
            encode(&payload).unwrap(),
            "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa"
        );
    }

    #[test]
    fn encode_testnet_p2pkh() {
        let payload = AddressPayload::p2pkh(
            Network::Testnet,
            hex!("62e907b15cbf27d5425399ebf6f0fb50ebb88f18"),
        );
        assert_eq!(
            encode(&payload).unwrap(),
            "mpXwg4jMtRhuSpVq4xS3HFHmCmWp9NyGKt"
        );
    }

    #[test]
    fn encode_mainnet_p2sh() {
        let payload = AddressPayload::p2sh(
            Network::Mainnet,
            hex!("89abcdefabbaabbaabbaabbaabbaabbaabbaabba"),
        );
        assert_eq!(
            encode(&payload).unwrap(),
            "3EExK1K1TF3v7zsFtQHt14XqexCwgmXM1y"
        );
    }

    #[test]
    fn encode_testnet_p2sh_rejected() {
        let payload = AddressPayload::p2sh(Network::Testnet, [0u8; 20]);
        assert_eq!(encode(&payload), Err(Error::NoLegacyEncoding));
    }

    #[test]
    fn decode_spec_vector() {
        let payload = decode("1BpEi6DfDAUFd7GtittLSdBeYJvcoaVggu").unwrap();
        assert_eq!(payload.network, Network::Mainnet);
        assert_eq!(payload.script_type, ScriptType::P2pkh);
        assert_eq!(payload.hash, hex!("76a04053bda0a88bda5177b86a15c3b29f559873"));
    }

    #[test]
    fn round_trip_all_encodable_payloads() {
        let hash = hex!("cb481232299cd5743151ac4b2d63ae198e7bb0a9");
        let payloads = [
            AddressPayload::p2pkh(Network::Mainnet, hash),
            AddressPayload::p2sh(Network::Mainnet, hash),
            AddressPayload::p2pkh(Network::Testnet, hash),
        ];
        for payload in payloads {
            let encoded = encode(&payload).unwrap();
            assert_eq!(decode(&encoded).unwrap(), payload);
        }
    }

    #[test]
    fn decode_rejects_bad_checksum() {
        assert_eq!(
            decode("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNb"),
            Err(Error::ChecksumMismatch)
        );
    }

    #[test]
    fn decode_rejects_invalid_character() {
        assert_eq!(decode("0OIl"), Err(Error::InvalidCharacter('0')));
    }

    #[test]
    fn decode_rejects_unknown_version() {
        // A valid WIF string: checksum passes, version byte 0x80 does not
        // name an address type.
        assert_eq!(
            decode("5HueCGU8rMjxEXxiPuD5BDku4MkFqeZyd4dZ1jvhTVqvbTLvyTJ"),
            Err(Error::UnknownVersionByte(0x80))
        );
    }

    #[test]
    fn decode_rejects_short_input() {
        assert!(matches!(
            decode("1234"),
            Err(Error::InvalidPayloadLength(_))
        ));
    }

    #[test]
    fn decode_rejects_wrong_hash_length() {
        let mut data = Vec::from([VERSION_MAINNET_P2PKH]);
        data.extend_from_slice(&[0u8; 19]);
        let encoded = encode_raw(&data);
        assert_eq!(decode(&encoded), Err(Error::InvalidPayloadLength(19)));
    }

    #[test]
    fn decode_rejects_empty() {
        assert_eq!(decode(""), Err(Error::EmptyInput));
    }
}
