use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

const PHONE_DIGITS: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    TextArea,
    Select,
}

impl FieldKind {
    pub fn input_type(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
            FieldKind::TextArea => "textarea",
            FieldKind::Select => "select",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidReason {
    Empty,
    BadEmail,
    BadPhone,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(InvalidReason),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn reason(&self) -> Option<InvalidReason> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(reason) => Some(*reason),
        }
    }
}

/// Checks run in order: required, email shape, phone digits. Optional
/// fields left blank are valid.
pub fn validate_field(kind: FieldKind, raw: &str, required: bool) -> ValidationResult {
    let value = raw.trim();

    if required && value.is_empty() {
        return ValidationResult::Invalid(InvalidReason::Empty);
    }
    if value.is_empty() {
        return ValidationResult::Valid;
    }

    match kind {
        FieldKind::Email if !is_valid_email(value) => ValidationResult::Invalid(InvalidReason::BadEmail),
        FieldKind::Tel if !is_valid_phone(value) => ValidationResult::Invalid(InvalidReason::BadPhone),
        _ => ValidationResult::Valid,
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Separators are ignored; exactly ten digits must remain.
pub fn is_valid_phone(value: &str) -> bool {
    value.chars().filter(|c| c.is_ascii_digit()).count() == PHONE_DIGITS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_email() {
        assert_eq!(
            validate_field(FieldKind::Email, "", true),
            ValidationResult::Invalid(InvalidReason::Empty)
        );
        assert_eq!(
            validate_field(FieldKind::Email, "a@b", true),
            ValidationResult::Invalid(InvalidReason::BadEmail)
        );
        assert!(validate_field(FieldKind::Email, "a@b.com", true).is_valid());
        assert!(validate_field(FieldKind::Email, "  a@b.com  ", true).is_valid());
    }

    #[test]
    fn email_rejects_whitespace_and_double_at() {
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("@b.com"));
    }

    #[test]
    fn phone_digits() {
        assert!(validate_field(FieldKind::Tel, "1234567890", false).is_valid());
        assert_eq!(
            validate_field(FieldKind::Tel, "12345", false).reason(),
            Some(InvalidReason::BadPhone)
        );
        assert!(validate_field(FieldKind::Tel, "(973) 355-4917", false).is_valid());
        assert!(!validate_field(FieldKind::Tel, "+91 97335 54917", false).is_valid());
    }

    #[test]
    fn optional_blank_fields_pass() {
        assert!(validate_field(FieldKind::Tel, "   ", false).is_valid());
        assert!(validate_field(FieldKind::Email, "", false).is_valid());
    }

    #[test]
    fn whitespace_only_required_is_empty() {
        assert_eq!(
            validate_field(FieldKind::Text, " \t ", true).reason(),
            Some(InvalidReason::Empty)
        );
        assert!(validate_field(FieldKind::TextArea, "hello", true).is_valid());
    }
}
