//! Random alphabetic string generation.
//!
//! Not suitable for security-sensitive use; the generators here are plain
//! PRNGs, not cryptographic sources.

use rand::Rng;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generate a random string of `length` ASCII letters using the
/// thread-local generator.
pub fn alphabetic(length: usize) -> String {
    alphabetic_with(&mut rand::thread_rng(), length)
}

/// Generate a random string of `length` ASCII letters from the provided
/// generator.
///
/// Each character is drawn independently and uniformly from the 52 upper-
/// and lower-case ASCII letters.
pub fn alphabetic_with<R: Rng>(rng: &mut R, length: usize) -> String {
    let mut out = String::with_capacity(length);
    for _ in 0..length {
        out.push(ALPHABET[rng.gen_range(0..ALPHABET.len())] as char);
    }
    out
}
