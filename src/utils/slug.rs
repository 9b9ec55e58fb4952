//! Slug allocation.
//!
//! Slugs are drawn uniformly from a 64-symbol URL-safe alphabet using OS
//! entropy. Uniqueness is probabilistic; no store lookup happens here.

/// URL-safe slug alphabet. Exactly 64 symbols, so masking a random byte with
/// `63` selects a symbol without bias.
pub const SLUG_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Default slug length.
pub const DEFAULT_SLUG_LENGTH: usize = 8;

/// Generates a random slug of exactly `length` characters.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
///
/// # Examples
///
/// ```ignore
/// let slug = generate_slug(8);
/// assert_eq!(slug.len(), 8);
/// assert!(is_slug(&slug));
/// ```
pub fn generate_slug(length: usize) -> String {
    let mut buffer = vec![0u8; length];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    buffer
        .into_iter()
        .map(|byte| SLUG_ALPHABET[(byte & 63) as usize] as char)
        .collect()
}

/// Returns true if `candidate` is non-empty and uses only slug symbols.
///
/// Anything else can never have been issued, so lookups short-circuit to
/// not-found.
pub fn is_slug(candidate: &str) -> bool {
    !candidate.is_empty() && candidate.bytes().all(|b| SLUG_ALPHABET.contains(&b))
}
