//! Operating-system randomness for nonces, keys and magic values.

use rand::rngs::OsRng;
use rand::RngCore;

/// Fills `buf` from the operating system CSPRNG.
pub fn fill_random(buf: &mut [u8]) {
    OsRng.fill_bytes(buf);
}

/// Returns `count` random bytes from the operating system CSPRNG.
#[must_use]
pub fn random_bytes(count: usize) -> Vec<u8> {
    let mut buf = vec![0u8; count];
    fill_random(&mut buf);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_bytes_length() {
        assert!(random_bytes(0).is_empty());
        assert_eq!(random_bytes(32).len(), 32);
    }

    #[test]
    fn random_bytes_differ() {
        // 2^-256 chance of a false failure.
        assert_ne!(random_bytes(32), random_bytes(32));
    }
}
