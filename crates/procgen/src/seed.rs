//! Human-typable session seeds.
//!
//! A seed is a short string of lowercase alphanumerics, encoded to the
//! internal numeric seed by base-36 positional notation ('0'-'9' → 0-9,
//! 'a'-'z' → 10-35). The codec is bijective within the alphabet and length
//! bound, so the "new game" screen can roll a numeric seed and show the
//! player a string they can share.

use rand::Rng;
use thiserror::Error;

/// Number of distinct seed characters.
const RADIX: u64 = 36;

/// Maximum seed length accepted by the creation menu. 36^8 fits comfortably
/// in a u64.
pub const MAX_SEED_LEN: usize = 8;

/// Rejection reasons for a typed seed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeedError {
    #[error("invalid character {character:?} at position {position}: only digits and lowercase letters are supported")]
    InvalidCharacter { position: usize, character: char },
    #[error("seed is longer than {MAX_SEED_LEN} characters")]
    TooLong,
}

fn digit_value(c: char) -> Option<u64> {
    match c {
        '0'..='9' => Some(c as u64 - '0' as u64),
        'a'..='z' => Some(c as u64 - 'a' as u64 + 10),
        _ => None,
    }
}

fn digit_char(value: u64) -> char {
    debug_assert!(value < RADIX);
    if value < 10 {
        (b'0' + value as u8) as char
    } else {
        (b'a' + (value - 10) as u8) as char
    }
}

/// Convert a seed string to the numeric RNG seed.
pub fn seed_to_u64(seed: &str) -> Result<u64, SeedError> {
    if seed.chars().count() > MAX_SEED_LEN {
        return Err(SeedError::TooLong);
    }
    let mut result = 0u64;
    for (position, character) in seed.chars().enumerate() {
        let value = digit_value(character)
            .ok_or(SeedError::InvalidCharacter { position, character })?;
        result = result * RADIX + value;
    }
    Ok(result)
}

/// Convert a numeric seed back to its shortest display string.
pub fn u64_to_seed(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(digit_char(value % RADIX));
        value /= RADIX;
    }
    digits.iter().rev().collect()
}

/// Roll a random shareable seed of exactly [`MAX_SEED_LEN`] characters.
pub fn random_seed() -> String {
    let mut rng = rand::thread_rng();
    (0..MAX_SEED_LEN)
        .map(|_| digit_char(rng.gen_range(0..RADIX)))
        .collect()
}
