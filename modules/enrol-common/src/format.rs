//! Text normalization applied to form fields before storage.

use regex::Regex;
use std::sync::LazyLock;

/// Separators people type into phone numbers: spaces, parens, hyphens.
static MOBILE_SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s()\-]").unwrap());

/// Australian mobile in any accepted form: 04XXXXXXXX, +614XXXXXXXX, 614XXXXXXXX.
static MOBILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:04\d{8}|\+?614\d{8})$").unwrap());

/// Canonical international mobile form (+614…), split into display groups.
static MOBILE_GROUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+61)(4\d{2})(\d{3})(\d{3})$").unwrap());

/// Capitalizes the first letter of each word: "john smith" -> "John Smith".
///
/// Splits on literal single spaces only, so runs of interior whitespace
/// survive as-is. Idempotent.
pub fn capitalize_words(s: &str) -> String {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    trimmed
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lowercases an email address: "John@EMAIL.com" -> "john@email.com". Idempotent.
pub fn lowercase_email(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Strip the separators people type into mobile numbers.
fn clean_mobile(s: &str) -> String {
    MOBILE_SEPARATOR_RE.replace_all(s, "").into_owned()
}

/// True iff the input is a valid Australian mobile number in local
/// (04XXXXXXXX) or international (+614XXXXXXXX / 614XXXXXXXX) form,
/// ignoring spaces, parens, and hyphens.
pub fn validate_mobile(s: &str) -> bool {
    MOBILE_RE.is_match(&clean_mobile(s))
}

/// Normalize a mobile number to "+61 XXX XXX XXX".
///
/// A leading 0 or bare 61 becomes +61; anything without a leading + gets
/// +61 prefixed. Grouping is only applied when the result is a full
/// international mobile; anything else passes through normalized but
/// ungrouped.
pub fn format_mobile(s: &str) -> String {
    let mut cleaned = clean_mobile(s);

    if let Some(rest) = cleaned.strip_prefix('0') {
        cleaned = format!("+61{rest}");
    } else if cleaned.starts_with("61") && !cleaned.starts_with("+61") {
        cleaned = format!("+{cleaned}");
    } else if !cleaned.starts_with('+') {
        cleaned = format!("+61{cleaned}");
    }

    match MOBILE_GROUP_RE.captures(&cleaned) {
        Some(caps) => format!("{} {} {} {}", &caps[1], &caps[2], &caps[3], &caps[4]),
        None => cleaned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_each_word() {
        assert_eq!(capitalize_words("john smith"), "John Smith");
        assert_eq!(capitalize_words("MARY ANNE o'brien"), "Mary Anne O'brien");
    }

    #[test]
    fn capitalize_empty_and_whitespace() {
        assert_eq!(capitalize_words(""), "");
        assert_eq!(capitalize_words("   "), "");
    }

    #[test]
    fn capitalize_trims_outer_whitespace() {
        assert_eq!(capitalize_words("  jane doe  "), "Jane Doe");
    }

    #[test]
    fn capitalize_preserves_interior_space_runs() {
        // Splitting on literal single spaces keeps the empty words.
        assert_eq!(capitalize_words("john  smith"), "John  Smith");
    }

    #[test]
    fn capitalize_is_idempotent() {
        let once = capitalize_words("john smith");
        assert_eq!(capitalize_words(&once), once);
    }

    #[test]
    fn lowercases_email() {
        assert_eq!(lowercase_email("John@EMAIL.com"), "john@email.com");
        assert_eq!(lowercase_email("  UPPER@Example.COM "), "upper@example.com");
        assert_eq!(lowercase_email(""), "");
    }

    #[test]
    fn lowercase_email_is_idempotent() {
        let once = lowercase_email("John@EMAIL.com");
        assert_eq!(lowercase_email(&once), once);
    }

    #[test]
    fn valid_mobile_local_form() {
        assert!(validate_mobile("0412345678"));
        assert!(validate_mobile("0412 345 678"));
        assert!(validate_mobile("(04) 1234-5678"));
    }

    #[test]
    fn valid_mobile_international_forms() {
        assert!(validate_mobile("+61412345678"));
        assert!(validate_mobile("61412345678"));
        assert!(validate_mobile("+61 412 345 678"));
    }

    #[test]
    fn invalid_mobiles_rejected() {
        assert!(!validate_mobile("12345"));
        assert!(!validate_mobile("0412345"));
        assert!(!validate_mobile("04123456789"));
        assert!(!validate_mobile("0512345678"));
        assert!(!validate_mobile(""));
    }

    #[test]
    fn formats_local_to_international() {
        assert_eq!(format_mobile("0412345678"), "+61 412 345 678");
    }

    #[test]
    fn formats_bare_country_code() {
        assert_eq!(format_mobile("61412345678"), "+61 412 345 678");
    }

    #[test]
    fn formats_already_international() {
        assert_eq!(format_mobile("+61 412 345 678"), "+61 412 345 678");
    }

    #[test]
    fn nonconforming_number_passes_through_ungrouped() {
        // Too short to group; normalization still applies.
        assert_eq!(format_mobile("0412345"), "+61412345");
        // Right length but not a mobile prefix; stays ungrouped.
        assert_eq!(format_mobile("0512345678"), "+61512345678");
        assert_eq!(format_mobile("61512345678"), "+61512345678");
    }
}
