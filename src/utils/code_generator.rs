//! Short code generation and format validation.
//!
//! Random codes are drawn uniformly from `[A-Za-z0-9]`. The generator only
//! needs to avoid collisions, it is not a security boundary, so the thread
//! local RNG is used.

use crate::domain::errors::LinkError;
use rand::distr::{Alphanumeric, SampleString};
use regex::Regex;
use std::sync::LazyLock;

/// Shortest accepted custom code.
pub const MIN_CODE_LENGTH: usize = 3;

/// Longest accepted code, custom or generated.
pub const MAX_CODE_LENGTH: usize = 20;

/// Compiled regex for custom code validation.
static CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{3,20}$").expect("code regex is valid"));

/// Generates a random code of `length` characters from the 62-symbol
/// alphanumeric alphabet.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(6);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    Alphanumeric.sample_string(&mut rand::rng(), length)
}

/// Checks a user-provided code against the format rule.
///
/// # Rules
///
/// - Length: 3-20 characters
/// - Allowed characters: ASCII letters, digits, `_` and `-`
///
/// The code is not normalized; `AbC` and `abc` are different codes.
///
/// # Errors
///
/// Returns [`LinkError::InvalidFormat`] if either rule is violated.
pub fn validate_code_format(code: &str) -> Result<(), LinkError> {
    if CODE_REGEX.is_match(code) {
        return Ok(());
    }

    let length = code.chars().count();
    let reason = if !(MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&length) {
        "must be 3-20 characters"
    } else {
        "may only contain letters, digits, '_' or '-'"
    };

    Err(LinkError::InvalidFormat {
        code: code.to_string(),
        reason,
    })
}
