//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

// Local part may not end with '.', domain labels start alphanumeric, TLD letters only
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+.\-]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .unwrap()
});

/// Validates email format
///
/// On top of the pattern, the address may not start with '.' and may not
/// contain consecutive dots anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.starts_with('.') || email.contains("..") {
        return false;
    }

    EMAIL_REGEX.is_match(email)
}
