use sea_orm::{DbErr, SqlErr};

/// Coarse classification of a failed statement, used by adapters to map constraint
/// violations onto domain errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbFailure {
    /// Carries the driver message so callers can tell which index fired.
    UniqueViolation(String),
    ForeignKeyViolation(String),
    Other(String),
}

pub fn classify_db_error(err: &DbErr) -> DbFailure {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => return DbFailure::UniqueViolation(msg),
        Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
            return DbFailure::ForeignKeyViolation(msg)
        }
        _ => {}
    }

    // Mocked and wrapped errors only expose the message text
    let text = err.to_string();
    let lowered = text.to_lowercase();
    if lowered.contains("23505")
        || lowered.contains("duplicate key")
        || lowered.contains("unique constraint")
    {
        DbFailure::UniqueViolation(text)
    } else if lowered.contains("23503") || lowered.contains("foreign key constraint") {
        DbFailure::ForeignKeyViolation(text)
    } else {
        DbFailure::Other(text)
    }
}
