//! Deterministic cosmetic planet names.
//!
//! A name is a pure function of the raw placement-noise value that triggered
//! the planet, so regenerating a chunk reproduces identical names with no
//! extra state.

/// Star-survey catalogues used as name prefixes.
const CATALOGUES: [&str; 10] = [
    "Kepler",
    "Gliese",
    "Wolf",
    "Ross",
    "Lalande",
    "Luyten",
    "Groombridge",
    "Cygni",
    "Lacaille",
    "Struve",
];

/// Derive a survey designation such as "Kepler 42193 c" from the raw noise
/// value in [0, 1) that placed the planet. Digit groups of the scaled value
/// pick the catalogue, the numeric designation, and one or two letter
/// suffixes.
pub fn planet_name(value: f64) -> String {
    let n = (value * 1e9) as u64;

    let catalogue = CATALOGUES[(n % 10) as usize];
    let designation = (n / 10) % 99_999 + 1;
    let first_letter = (b'a' + ((n / 1_000_000) % 26) as u8) as char;

    // Roughly one name in three gets a second suffix letter.
    match (n / 100_000_000) % 3 {
        0 => format!("{catalogue} {designation} {first_letter}"),
        rest => {
            let second_letter = (b'a' + ((n / 10_000_000 + rest) % 26) as u8) as char;
            format!("{catalogue} {designation} {first_letter}{second_letter}")
        }
    }
}

/// Widest possible rendered name, used by HUD layout to size the name box.
pub const WIDEST_NAME: &str = "Groombridge 99999 ww";
