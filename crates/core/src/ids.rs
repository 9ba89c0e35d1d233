//! Client-generated identifiers.
//!
//! Ids are short random base-36 suffixes, optionally prefixed per entity
//! kind. A single-tenant, human-paced dataset makes collisions a
//! non-concern; uniqueness is probabilistic, not enforced.

use rand::Rng;

use chrono::{Days, NaiveDate};

/// Alphabet for random suffixes.
const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Default suffix length for entity ids.
pub const SUFFIX_LEN: usize = 9;

/// How long a quotation stays valid after issue.
pub const QUOTATION_VALIDITY_DAYS: u64 = 14;

/// Generate a random base-36 string of the given length.
pub fn random_suffix(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

/// New entity id with the given prefix, e.g. `entity_id("c")` -> `c7k2m91xq4`.
pub fn entity_id(prefix: &str) -> String {
    format!("{prefix}{}", random_suffix(SUFFIX_LEN))
}

/// New human-readable quotation id in the `QT-<nnn>` form.
pub fn quotation_id() -> String {
    let mut rng = rand::rng();
    format!("QT-{}", rng.random_range(100..1000))
}

/// Expiry date for a quotation issued on `date`.
pub fn quotation_expiry(date: NaiveDate) -> NaiveDate {
    // Days::new can only fail past the calendar's representable range.
    date.checked_add_days(Days::new(QUOTATION_VALIDITY_DAYS))
        .unwrap_or(date)
}
