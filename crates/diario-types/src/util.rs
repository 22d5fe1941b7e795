/// Placeholder the scraper writes for fields it could not extract.
pub const PLACEHOLDER: &str = "-";

/// Return the value only if it carries information.
///
/// A value is present when, after trimming, it is neither empty nor the
/// [`PLACEHOLDER`]. Every "is this field set?" decision goes through here so
/// that classification, layout fallbacks and labels agree.
pub fn present(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != PLACEHOLDER)
}

/// Present value or the given fallback.
pub fn or_default<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    present(value).unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_filters_placeholders() {
        assert_eq!(present(None), None);
        assert_eq!(present(Some("")), None);
        assert_eq!(present(Some("   ")), None);
        assert_eq!(present(Some("-")), None);
        assert_eq!(present(Some(" - ")), None);
        assert_eq!(present(Some(" 12/2024 ")), Some("12/2024"));
    }

    #[test]
    fn test_or_default() {
        assert_eq!(or_default(Some("-"), "S/N"), "S/N");
        assert_eq!(or_default(Some("7"), "S/N"), "7");
    }
}
