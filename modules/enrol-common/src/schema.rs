//! Field schema for the enrolment form.
//!
//! One static table drives both inline validation and submit-time
//! normalization, so a rule is never defined twice. Submit-time
//! normalization always re-derives from the raw posted values and does
//! not trust any normalization the client already displayed.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{EnrolError, FieldError};
use crate::format::{capitalize_words, format_mobile, lowercase_email, validate_mobile};
use crate::types::{EnrolmentRecord, EnrolmentStatus, Grade, RawEnrolment};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").unwrap());

/// Validation and normalization rules for one form field.
pub struct FieldRule {
    pub name: &'static str,
    /// Message shown when a required field is empty. None marks the
    /// field optional: an empty value is fine, a present one is checked.
    pub required_message: Option<&'static str>,
    /// Format check applied to non-empty trimmed values.
    pub check: fn(&str) -> Option<&'static str>,
    /// Transform applied to the raw value when assembling the record.
    pub normalize: fn(&str) -> String,
}

const NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
const MOBILE_INVALID: &str = "Please enter a valid Australian mobile number";
const EMAIL_INVALID: &str = "Please enter a valid email address";
const ADDRESS_TOO_SHORT: &str = "Please enter a complete address";
const SCHOOL_TOO_SHORT: &str = "School name must be at least 3 characters";
const GRADE_INVALID: &str = "Please select a grade";

fn check_name(value: &str) -> Option<&'static str> {
    (value.chars().count() < 2).then_some(NAME_TOO_SHORT)
}

fn check_mobile(value: &str) -> Option<&'static str> {
    (!validate_mobile(value)).then_some(MOBILE_INVALID)
}

fn check_email(value: &str) -> Option<&'static str> {
    (!EMAIL_RE.is_match(value)).then_some(EMAIL_INVALID)
}

fn check_address(value: &str) -> Option<&'static str> {
    (value.chars().count() < 10).then_some(ADDRESS_TOO_SHORT)
}

fn check_school(value: &str) -> Option<&'static str> {
    (value.chars().count() < 3).then_some(SCHOOL_TOO_SHORT)
}

fn check_grade(value: &str) -> Option<&'static str> {
    Grade::from_label(value).is_none().then_some(GRADE_INVALID)
}

fn trim_only(value: &str) -> String {
    value.trim().to_string()
}

/// The enrolment form, one rule per field, in display order.
pub const FIELDS: &[FieldRule] = &[
    FieldRule {
        name: "student_first_name",
        required_message: Some("Student first name is required"),
        check: check_name,
        normalize: capitalize_words,
    },
    FieldRule {
        name: "student_last_name",
        required_message: Some("Student last name is required"),
        check: check_name,
        normalize: capitalize_words,
    },
    FieldRule {
        name: "parent_first_name",
        required_message: Some("Parent first name is required"),
        check: check_name,
        normalize: capitalize_words,
    },
    FieldRule {
        name: "parent_last_name",
        required_message: Some("Parent last name is required"),
        check: check_name,
        normalize: capitalize_words,
    },
    FieldRule {
        name: "parent_mobile",
        required_message: Some("Mobile number is required"),
        check: check_mobile,
        normalize: format_mobile,
    },
    FieldRule {
        name: "email_address",
        required_message: Some("Email address is required"),
        check: check_email,
        normalize: lowercase_email,
    },
    FieldRule {
        name: "secondary_email_address",
        required_message: None,
        check: check_email,
        normalize: lowercase_email,
    },
    FieldRule {
        name: "address",
        required_message: Some("Address is required"),
        check: check_address,
        normalize: trim_only,
    },
    FieldRule {
        name: "school",
        required_message: Some("School name is required"),
        check: check_school,
        normalize: capitalize_words,
    },
    FieldRule {
        name: "current_grade",
        required_message: Some("Please select a grade"),
        check: check_grade,
        normalize: trim_only,
    },
];

fn field_value<'a>(raw: &'a RawEnrolment, name: &str) -> &'a str {
    match name {
        "student_first_name" => &raw.student_first_name,
        "student_last_name" => &raw.student_last_name,
        "parent_first_name" => &raw.parent_first_name,
        "parent_last_name" => &raw.parent_last_name,
        "parent_mobile" => &raw.parent_mobile,
        "email_address" => &raw.email_address,
        "secondary_email_address" => &raw.secondary_email_address,
        "address" => &raw.address,
        "school" => &raw.school,
        "current_grade" => &raw.current_grade,
        _ => "",
    }
}

/// Run every field rule against the raw submission. An empty result
/// means the form may be submitted.
pub fn validate(raw: &RawEnrolment) -> Vec<FieldError> {
    let mut errors = Vec::new();
    for rule in FIELDS {
        let value = field_value(raw, rule.name).trim();
        if value.is_empty() {
            if let Some(message) = rule.required_message {
                errors.push(FieldError::new(rule.name, message));
            }
            continue;
        }
        if let Some(message) = (rule.check)(value) {
            errors.push(FieldError::new(rule.name, message));
        }
    }
    errors
}

/// Apply a field's normalizer to its raw value.
pub fn normalized(raw: &RawEnrolment, name: &'static str) -> String {
    let value = field_value(raw, name);
    match FIELDS.iter().find(|rule| rule.name == name) {
        Some(rule) => (rule.normalize)(value),
        None => trim_only(value),
    }
}

/// Validate and assemble the record for the store. Normalization is
/// re-derived here from the raw values regardless of what the form
/// displayed. The record is always created as `pending`.
pub fn build_record(raw: &RawEnrolment) -> Result<EnrolmentRecord, EnrolError> {
    let errors = validate(raw);
    if !errors.is_empty() {
        return Err(EnrolError::Validation(errors));
    }

    let current_grade = Grade::from_label(raw.current_grade.trim()).ok_or_else(|| {
        EnrolError::Validation(vec![FieldError::new("current_grade", GRADE_INVALID)])
    })?;

    let secondary = normalized(raw, "secondary_email_address");

    Ok(EnrolmentRecord {
        student_first_name: normalized(raw, "student_first_name"),
        student_last_name: normalized(raw, "student_last_name"),
        parent_first_name: normalized(raw, "parent_first_name"),
        parent_last_name: normalized(raw, "parent_last_name"),
        parent_mobile: normalized(raw, "parent_mobile"),
        email_address: normalized(raw, "email_address"),
        secondary_email_address: (!secondary.is_empty()).then_some(secondary),
        address: normalized(raw, "address"),
        school: normalized(raw, "school"),
        current_grade,
        status: EnrolmentStatus::Pending,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_raw() -> RawEnrolment {
        RawEnrolment {
            student_first_name: "john".into(),
            student_last_name: "SMITH".into(),
            parent_first_name: "jane".into(),
            parent_last_name: "smith".into(),
            parent_mobile: "0412345678".into(),
            email_address: "Jane@EXAMPLE.com".into(),
            secondary_email_address: String::new(),
            address: "12 Railway Parade, Cabramatta NSW".into(),
            school: "cabramatta public school".into(),
            current_grade: "Year 5".into(),
        }
    }

    #[test]
    fn valid_submission_passes() {
        assert!(validate(&valid_raw()).is_empty());
    }

    #[test]
    fn build_record_normalizes_every_field() {
        let record = build_record(&valid_raw()).unwrap();
        assert_eq!(record.student_first_name, "John");
        assert_eq!(record.student_last_name, "Smith");
        assert_eq!(record.parent_first_name, "Jane");
        assert_eq!(record.parent_last_name, "Smith");
        assert_eq!(record.parent_mobile, "+61 412 345 678");
        assert_eq!(record.email_address, "jane@example.com");
        assert_eq!(record.secondary_email_address, None);
        assert_eq!(record.school, "Cabramatta Public School");
        assert_eq!(record.current_grade, Grade::Year5);
        assert_eq!(record.status, EnrolmentStatus::Pending);
    }

    #[test]
    fn invalid_mobile_blocks_submission() {
        let mut raw = valid_raw();
        raw.parent_mobile = "123".into();
        let err = build_record(&raw).unwrap_err();
        match err {
            EnrolError::Validation(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "parent_mobile");
                assert_eq!(errors[0].message, MOBILE_INVALID);
            }
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn required_fields_report_expected_wording() {
        let raw = RawEnrolment::default();
        let errors = validate(&raw);
        let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
        assert!(messages.contains(&"Student first name is required"));
        assert!(messages.contains(&"Mobile number is required"));
        assert!(messages.contains(&"Email address is required"));
        assert!(messages.contains(&"Address is required"));
        assert!(messages.contains(&"School name is required"));
        assert!(messages.contains(&"Please select a grade"));
        // Optional secondary email never appears.
        assert!(errors.iter().all(|e| e.field != "secondary_email_address"));
    }

    #[test]
    fn short_name_rejected() {
        let mut raw = valid_raw();
        raw.student_first_name = "j".into();
        let errors = validate(&raw);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "student_first_name");
        assert_eq!(errors[0].message, NAME_TOO_SHORT);
    }

    #[test]
    fn short_address_rejected() {
        let mut raw = valid_raw();
        raw.address = "12 Short".into();
        let errors = validate(&raw);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "address");
    }

    #[test]
    fn malformed_email_rejected() {
        let mut raw = valid_raw();
        raw.email_address = "not-an-email".into();
        let errors = validate(&raw);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, EMAIL_INVALID);
    }

    #[test]
    fn secondary_email_optional_but_checked_when_present() {
        let mut raw = valid_raw();
        raw.secondary_email_address = "  ".into();
        assert!(validate(&raw).is_empty());

        raw.secondary_email_address = "bogus@".into();
        let errors = validate(&raw);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "secondary_email_address");
    }

    #[test]
    fn secondary_email_lowercased_into_record() {
        let mut raw = valid_raw();
        raw.secondary_email_address = "Second@Example.COM".into();
        let record = build_record(&raw).unwrap();
        assert_eq!(
            record.secondary_email_address.as_deref(),
            Some("second@example.com")
        );
    }

    #[test]
    fn unknown_grade_rejected() {
        let mut raw = valid_raw();
        raw.current_grade = "Year 13".into();
        let errors = validate(&raw);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "current_grade");
        assert_eq!(errors[0].message, GRADE_INVALID);
    }

    #[test]
    fn all_errors_reported_at_once() {
        let mut raw = valid_raw();
        raw.student_first_name = "j".into();
        raw.parent_mobile = "12345".into();
        raw.email_address = "broken".into();
        let errors = validate(&raw);
        assert_eq!(errors.len(), 3);
    }
}
