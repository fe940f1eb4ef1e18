//! Course enrollment requests.
//!
//! The form is validated field by field before anything is sent; only a
//! fully valid, sanitized form reaches `POST /enroll-request`.

use crate::api::PlatformApi;
use crate::api::error::ApiError;
use crate::i18n::{Language, Text, tr};
use crate::models::{Acknowledgement, EnrollmentRequest};
use crate::validation::{Field, FieldErrors, sanitize_input, validate_form};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnrollError {
    /// One or more fields failed client-side validation.
    #[error("{0}")]
    Invalid(#[from] FieldErrors),

    /// The request failed or the server declined it. `message` is the
    /// generic translated error shown to the user.
    #[error("{message}")]
    Failed {
        message: String,
        #[source]
        source: ApiError,
    },
}

/// The enrollment form as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrollmentForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
    pub course_id: u64,
}

impl EnrollmentForm {
    fn fields(&self) -> [(Field, &str); 4] {
        [
            (Field::Name, self.name.as_str()),
            (Field::Phone, self.phone.as_str()),
            (Field::Email, self.email.as_str()),
            (Field::Message, self.message.as_str()),
        ]
    }

    pub fn validate(&self, lang: Language) -> Result<(), FieldErrors> {
        validate_form(&self.fields(), lang)
    }

    /// Sanitized request body.
    pub fn to_request(&self) -> EnrollmentRequest {
        EnrollmentRequest {
            name: sanitize_input(&self.name),
            phone: sanitize_input(&self.phone),
            email: sanitize_input(&self.email),
            message: sanitize_input(&self.message),
            course_id: self.course_id,
        }
    }
}

/// Validates and submits `form`. Server-side failures are not distinguished:
/// every one of them maps to the same generic message.
pub async fn submit_enrollment(
    api: &dyn PlatformApi,
    form: &EnrollmentForm,
    lang: Language,
) -> Result<Acknowledgement, EnrollError> {
    form.validate(lang)?;

    api.submit_enrollment(&form.to_request())
        .await
        .map_err(|source| EnrollError::Failed {
            message: tr(lang, Text::GenericError).to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockPlatformApi;

    fn valid_form() -> EnrollmentForm {
        EnrollmentForm {
            name: "  Sara Ahmed\u{7} ".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            email: "sara@example.com".to_string(),
            message: "Evening classes please".to_string(),
            course_id: 12,
        }
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_server() {
        let mut api = MockPlatformApi::new();
        api.expect_submit_enrollment().times(0);

        let form = EnrollmentForm {
            email: "a@b".to_string(),
            phone: "123".to_string(),
            ..valid_form()
        };
        let err = submit_enrollment(&api, &form, Language::En)
            .await
            .unwrap_err();

        let EnrollError::Invalid(errors) = err else {
            panic!("expected validation errors");
        };
        assert_eq!(errors.0.len(), 2);
        assert_eq!(
            errors.get(Field::Email).unwrap().message,
            "Please enter a valid email address"
        );
        assert!(errors.get(Field::Phone).is_some());
    }

    #[tokio::test]
    async fn test_name_of_only_control_characters_is_rejected_locally() {
        let mut api = MockPlatformApi::new();
        api.expect_submit_enrollment().times(0);

        let form = EnrollmentForm {
            name: "\u{7}\u{1}".to_string(),
            ..valid_form()
        };
        let err = submit_enrollment(&api, &form, Language::En)
            .await
            .unwrap_err();

        let EnrollError::Invalid(errors) = err else {
            panic!("expected validation errors");
        };
        assert_eq!(
            errors.get(Field::Name).unwrap().message,
            "This field is required"
        );
    }

    #[tokio::test]
    async fn test_valid_form_is_sanitized_before_posting() {
        let mut api = MockPlatformApi::new();
        api.expect_submit_enrollment()
            .withf(|request| request.name == "Sara Ahmed" && request.course_id == 12)
            .times(1)
            .returning(|_| {
                Ok(Acknowledgement {
                    success: true,
                    message: None,
                })
            });

        let ack = submit_enrollment(&api, &valid_form(), Language::En)
            .await
            .unwrap();
        assert!(ack.success);
    }

    #[tokio::test]
    async fn test_server_failure_maps_to_generic_message() {
        let mut api = MockPlatformApi::new();
        api.expect_submit_enrollment().returning(|_| {
            Err(ApiError::Http {
                status: 422,
                message: r#"{"errors":{"email":"taken"}}"#.to_string(),
            })
        });

        let err = submit_enrollment(&api, &valid_form(), Language::Ar)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "حدث خطأ، يرجى المحاولة مرة أخرى");
    }
}
