//! One-way password hashing.

use sha2::{Digest, Sha512};

/// SHA-512 of the UTF-8 bytes, as lowercase hex.
pub fn hash_password(plaintext: &str) -> String {
    hex::encode(Sha512::digest(plaintext.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_deterministic_hex() {
        let a = hash_password("x");
        let b = hash_password("x");
        assert_eq!(a, b);
        assert_eq!(a.len(), 128);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn hash_never_equals_plaintext() {
        assert_ne!(hash_password("secret"), "secret");
        assert_ne!(hash_password("secret"), hash_password("Secret"));
    }

    #[test]
    fn hash_matches_known_vector() {
        assert_eq!(
            hash_password("abc"),
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
             2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        );
    }
}
