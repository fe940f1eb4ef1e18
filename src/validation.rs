//! Client-side validation of the enrollment form.

use crate::consts::cli_consts::MAX_FIELD_LENGTH;
use crate::i18n::{Language, Text, tr};
use regex::Regex;
use std::fmt::{Display, Formatter};
use std::sync::OnceLock;

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\+?[0-9\s\-()]{10,}$").expect("valid phone regex"))
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Name,
    Phone,
    Email,
    Message,
}

/// A single check a field value has to pass.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Rule {
    Required,
    Email,
    Phone,
}

impl Rule {
    /// Returns the failure message, or `None` when `value` passes.
    ///
    /// The value is checked as it would be posted, after `sanitize_input`.
    /// Shape rules accept an empty value; emptiness is `Required`'s concern.
    pub fn check(&self, value: &str, lang: Language) -> Option<&'static str> {
        let cleaned = sanitize_input(value);
        let value = cleaned.as_str();
        match self {
            Rule::Required if value.is_empty() => Some(tr(lang, Text::FieldRequired)),
            Rule::Email if !value.is_empty() && !email_re().is_match(value) => {
                Some(tr(lang, Text::InvalidEmail))
            }
            Rule::Phone if !value.is_empty() && !phone_re().is_match(value) => {
                Some(tr(lang, Text::InvalidPhone))
            }
            _ => None,
        }
    }
}

impl Field {
    pub fn rules(&self) -> &'static [Rule] {
        match self {
            Field::Name => &[Rule::Required],
            Field::Phone => &[Rule::Required, Rule::Phone],
            Field::Email => &[Rule::Required, Rule::Email],
            Field::Message => &[],
        }
    }
}

/// Validates one field, as happens when it loses focus.
pub fn validate_field(field: Field, value: &str, lang: Language) -> Result<(), FieldError> {
    match field.rules().iter().find_map(|rule| rule.check(value, lang)) {
        Some(message) => Err(FieldError {
            field,
            message: message.to_string(),
        }),
        None => Ok(()),
    }
}

/// Validates every field, as happens on submit.
pub fn validate_form(fields: &[(Field, &str)], lang: Language) -> Result<(), FieldErrors> {
    let errors: Vec<FieldError> = fields
        .iter()
        .filter_map(|(field, value)| validate_field(*field, value, lang).err())
        .collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(FieldErrors(errors))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    /// Inline message in the active display language.
    pub message: String,
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors(pub Vec<FieldError>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for FieldErrors {}

/// Strips control characters (except tab and newlines), truncates to the
/// maximum field length and trims surrounding whitespace.
pub fn sanitize_input(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .filter(|c| (*c as u32) >= 32 || matches!(c, '\t' | '\n' | '\r'))
        .take(MAX_FIELD_LENGTH)
        .collect();
    cleaned.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_field() {
        let err = validate_field(Field::Name, "   ", Language::En).unwrap_err();
        assert_eq!(err.message, "This field is required");
        assert!(validate_field(Field::Name, "Huda", Language::En).is_ok());
        // Message is optional
        assert!(validate_field(Field::Message, "", Language::En).is_ok());
    }

    #[test]
    fn test_control_characters_do_not_satisfy_required() {
        let err = validate_field(Field::Name, "\u{7}\u{1}", Language::En).unwrap_err();
        assert_eq!(err.message, "This field is required");
        assert!(validate_field(Field::Name, "\u{7}Huda", Language::En).is_ok());
    }

    #[test]
    fn test_email_shape() {
        let err = validate_field(Field::Email, "a@b", Language::En).unwrap_err();
        assert_eq!(err.message, "Please enter a valid email address");
        assert!(validate_field(Field::Email, "a@b.com", Language::En).is_ok());
        assert!(validate_field(Field::Email, "a b@c.com", Language::En).is_err());
    }

    #[test]
    fn test_phone_shape() {
        assert!(validate_field(Field::Phone, "123", Language::En).is_err());
        assert!(validate_field(Field::Phone, "+1 (555) 123-4567", Language::En).is_ok());
        assert!(validate_field(Field::Phone, "0501234567", Language::En).is_ok());
        assert!(validate_field(Field::Phone, "050-abc-4567", Language::En).is_err());
    }

    #[test]
    fn test_empty_email_reports_required_not_shape() {
        let err = validate_field(Field::Email, "", Language::En).unwrap_err();
        assert_eq!(err.message, "This field is required");
    }

    #[test]
    fn test_messages_follow_display_language() {
        let err = validate_field(Field::Name, "", Language::Ar).unwrap_err();
        assert_eq!(err.message, "هذا الحقل مطلوب");
    }

    #[test]
    fn test_validate_form_collects_every_failure() {
        let errors = validate_form(
            &[
                (Field::Name, ""),
                (Field::Phone, "123"),
                (Field::Email, "a@b.com"),
                (Field::Message, ""),
            ],
            Language::En,
        )
        .unwrap_err();
        assert_eq!(errors.0.len(), 2);
        assert!(errors.get(Field::Name).is_some());
        assert!(errors.get(Field::Phone).is_some());
        assert!(errors.get(Field::Email).is_none());
    }

    #[test]
    fn test_sanitize_input() {
        assert_eq!(sanitize_input("  hi\u{0}there\n "), "hithere");
        assert_eq!(sanitize_input("line1\nline2"), "line1\nline2");
        assert_eq!(sanitize_input(&"x".repeat(300)).len(), MAX_FIELD_LENGTH);
    }
}
