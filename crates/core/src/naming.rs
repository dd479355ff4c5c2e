//! Project slug and address display conventions.
//!
//! Slugs identify projects in public URLs (`/public/projects/{slug}`), so
//! they are generated once at creation time and never rewritten when the
//! project is renamed.

use rand::Rng;

/// Maximum length of the name-derived part of a slug.
pub const SLUG_MAX_LENGTH: usize = 60;

/// Length of the random suffix appended to every generated slug.
pub const SLUG_SUFFIX_LENGTH: usize = 4;

const SLUG_SUFFIX_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Characters kept from each end when truncating an address for display.
pub const ADDRESS_TRUNCATE_CHARS: usize = 6;

/// Turn a project name into a URL-safe slug fragment.
///
/// Lowercases, drops everything except ASCII alphanumerics, hyphens,
/// underscores, and whitespace, then collapses each run of whitespace or
/// underscores into a single hyphen. Leading and trailing hyphens are
/// trimmed before the result is cut to [`SLUG_MAX_LENGTH`] characters.
///
/// # Examples
///
/// ```
/// use launchlist_core::naming::slugify;
///
/// assert_eq!(slugify("My Launch!!"), "my-launch");
/// assert_eq!(slugify("Degen_Apes  Club"), "degen-apes-club");
/// assert_eq!(slugify("--Mint--"), "mint");
/// ```
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();

    let mut collapsed = String::with_capacity(lowered.len());
    let mut in_separator_run = false;
    for ch in lowered.chars() {
        if ch.is_whitespace() || ch == '_' {
            if !in_separator_run {
                collapsed.push('-');
                in_separator_run = true;
            }
        } else if ch.is_ascii_alphanumeric() || ch == '-' {
            collapsed.push(ch);
            in_separator_run = false;
        }
        // Everything else (punctuation, emoji, non-ASCII letters) is dropped
        // without breaking a separator run.
    }

    collapsed
        .trim_matches('-')
        .chars()
        .take(SLUG_MAX_LENGTH)
        .collect()
}

/// Generate the random lowercase-alphanumeric suffix for a slug.
pub fn random_slug_suffix() -> String {
    let mut rng = rand::rng();
    (0..SLUG_SUFFIX_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..SLUG_SUFFIX_ALPHABET.len());
            SLUG_SUFFIX_ALPHABET[idx] as char
        })
        .collect()
}

/// Generate a fresh slug for a project name: slugified name plus a random
/// suffix to keep slugs unique across projects with the same name.
pub fn generate_slug(name: &str) -> String {
    format!("{}-{}", slugify(name), random_slug_suffix())
}

/// Shorten an address for display: first and last [`ADDRESS_TRUNCATE_CHARS`]
/// characters joined by an ellipsis. Addresses short enough that truncation
/// would not save space are returned unchanged.
///
/// # Examples
///
/// ```
/// use launchlist_core::naming::truncate_address;
///
/// assert_eq!(
///     truncate_address("0x1234567890abcdef1234567890abcdef12345678", 6),
///     "0x1234...345678"
/// );
/// assert_eq!(truncate_address("0xabc123", 6), "0xabc123");
/// ```
pub fn truncate_address(address: &str, chars: usize) -> String {
    let count = address.chars().count();
    if count <= chars * 2 + 3 {
        return address.to_string();
    }
    let head: String = address.chars().take(chars).collect();
    let tail: String = address.chars().skip(count - chars).collect();
    format!("{head}...{tail}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
