use regex::Regex;
use std::sync::LazyLock;

static CPF_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{3})[.\s]?(\d{3})[.\s]?(\d{3})[-\s]?(\d{2})").expect("valid CPF pattern")
});

/// Mask a natural-person tax id (CPF), keeping the first and last digit groups.
///
/// Only values with exactly 11 digits are touched; company ids (CNPJ, 14
/// digits) and free text pass through unchanged.
pub fn anonymize_cpf(text: &str) -> String {
    let digits = text.chars().filter(char::is_ascii_digit).count();
    if digits != 11 {
        return text.to_string();
    }
    CPF_PATTERN
        .replace_all(text, "${1}.***.***-${4}")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masks_formatted_cpf() {
        assert_eq!(anonymize_cpf("123.456.789-01"), "123.***.***-01");
    }

    #[test]
    fn test_masks_bare_cpf() {
        assert_eq!(anonymize_cpf("12345678901"), "123.***.***-01");
    }

    #[test]
    fn test_leaves_cnpj_alone() {
        assert_eq!(anonymize_cpf("12.345.678/0001-90"), "12.345.678/0001-90");
    }

    #[test]
    fn test_leaves_text_alone() {
        assert_eq!(anonymize_cpf(""), "");
        assert_eq!(anonymize_cpf("-"), "-");
        assert_eq!(anonymize_cpf("ACME LTDA"), "ACME LTDA");
    }
}
