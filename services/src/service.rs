use sea_orm::{DbErr, EntityTrait, SqlErr};
use thiserror::Error;
use validator::ValidationErrors;

/// Every way a catalogue or review operation can fail.
///
/// Integrity errors from the store never surface raw: the review lifecycle maps
/// them to [`AppError::DuplicateReview`] at the point of mutation.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Course {0} not found")]
    CourseNotFound(i64),

    #[error("{0}")]
    Validation(String),

    #[error("You already have an active review for this course. Cancel it first.")]
    DuplicateReview,

    #[error("No active review found")]
    NoActiveReview,

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl AppError {
    /// Maps unique-constraint violations to `DuplicateReview`, everything else to `Database`.
    pub fn from_write(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => AppError::DuplicateReview,
            _ => AppError::Database(err),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(format_validation_errors(&errors))
    }
}

/// Joins all field messages into one user-facing line.
///
/// Fields are visited in name order so the message is stable.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .flat_map(|(_, errs)| {
            errs.iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => e.code.to_string(),
                })
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Conversion from a create request into an insertable active model.
pub trait ToActiveModel<E>
where
    E: EntityTrait,
{
    fn into_active_model(self) -> Result<E::ActiveModel, AppError>;
}
