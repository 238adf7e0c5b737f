//! Pluralization utilities.

/// Return "s" suffix for plural counts
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, handling pluralization
///
/// # Examples
///
/// - `plural_count(0, "page")` -> `"0 pages"`
/// - `plural_count(1, "page")` -> `"1 page"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "page"), "0 pages");
        assert_eq!(plural_count(1, "page"), "1 page");
        assert_eq!(plural_count(12, "heading"), "12 headings");
    }
}
