//! String validation functions

/// True when `s` has at least `min` characters
pub fn has_min_length(s: &str, min: usize) -> bool {
    s.chars().count() >= min
}

/// True when `s` is made of ASCII digits only and its length is within `min..=max`
pub fn is_digits(s: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}

/// Regex source equivalent to [`is_digits`], without anchors.
///
/// HTML `pattern` attributes are anchored implicitly.
pub fn digits_pattern(min: usize, max: usize) -> String {
    if min == max {
        format!(r"\d{{{}}}", min)
    } else {
        format!(r"\d{{{},{}}}", min, max)
    }
}
