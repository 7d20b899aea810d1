//! Digest primitives shared by the codecs and the HD deriver.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Compute SHA-256.
#[inline]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute double SHA-256, the Base58Check checksum digest.
#[inline]
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// Compute RIPEMD-160.
#[inline]
pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    let mut hasher = Ripemd160::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute HASH160 (RIPEMD-160 of SHA-256), the 20-byte digest carried by
/// every address payload.
#[inline]
pub fn hash160(data: &[u8]) -> [u8; 20] {
    ripemd160(&sha256(data))
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;

    #[test]
    fn sha256_abc() {
        assert_eq!(
            sha256(b"abc"),
            hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
        );
    }

    #[test]
    fn double_sha256_is_sha256_twice() {
        assert_eq!(double_sha256(b"abc"), sha256(&sha256(b"abc")));
    }

    #[test]
    fn double_sha256_empty() {
        assert_eq!(
            double_sha256(b""),
            hex!("5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456")
        );
    }

    #[test]
    fn ripemd160_abc() {
        assert_eq!(
            ripemd160(b"abc"),
            hex!("8eb208f7e05d987a9b044a8e98c6b087f15a0bfc")
        );
    }

    #[test]
    fn hash160_empty() {
        assert_eq!(
            hash160(b""),
            hex!("b472a266d0bd89c13706a4132ccfb16f7c3b9fcb")
        );
    }

    #[test]
    fn hash160_generator_pubkey() {
        // Compressed secp256k1 generator point; the digest behind the
        // well-known address 1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH.
        let pubkey = hex!("0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798");
        assert_eq!(
            hash160(&pubkey),
            hex!("751e76e8199196d454941c45d1b3a323f1433bd6")
        );
    }
}
