//! Marking lessons as completed.

use crate::api::PlatformApi;
use crate::api::error::ApiError;
use crate::i18n::{Language, Text, tr};
use crate::models::LessonCompletion;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{message}")]
pub struct LessonError {
    /// Translated message shown to the user.
    pub message: String,
    #[source]
    pub source: ApiError,
}

pub async fn complete_lesson(
    api: &dyn PlatformApi,
    lesson_id: u64,
    lang: Language,
) -> Result<LessonCompletion, LessonError> {
    api.complete_lesson(lesson_id)
        .await
        .map_err(|source| LessonError {
            message: tr(lang, Text::GenericError).to_string(),
            source,
        })
}

/// Console summary of a completed lesson.
pub fn describe_completion(completion: &LessonCompletion, lang: Language) -> String {
    let message = if completion.message.is_empty() {
        tr(lang, Text::LessonCompleted)
    } else {
        completion.message.as_str()
    };
    match completion.progress {
        Some(progress) => format!("{} ({}%)", message, progress.min(100)),
        None => message.to_string(),
    }
}
