//! Error types for Lessonbook
//!
//! "Not found" is not an error for repository reads and writes: those return
//! `None` or `false`. `RecordNotFound` is reserved for records that disappear
//! underneath an operation that just wrote them.
//!
//! Storage failures are classified when they are raised: a busy or locked
//! database becomes [`AppError::DatabaseLocked`], a rejected write becomes
//! [`AppError::ConstraintViolation`], and anything else stays a plain
//! [`AppError::DatabaseError`].

use std::fmt;
use thiserror::Error;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for Lessonbook
#[derive(Error, Debug)]
pub enum AppError {
    // ===== Database Errors =====
    /// Database operation failed (connectivity, decoding, I/O)
    #[error("Database error: {message}")]
    DatabaseError {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// The write broke a foreign key, unique, check or not-null rule
    #[error("Constraint violation: {message}")]
    ConstraintViolation {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// Another connection held the lock past the busy timeout
    #[error("Database locked: {operation}")]
    DatabaseLocked {
        operation: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// Database is corrupted and needs repair
    #[error("Database corrupted: {details}")]
    DatabaseCorrupted { details: String },

    /// Database migration failed
    #[error("Migration failed: {version} - {reason}")]
    MigrationFailed { version: String, reason: String },

    /// Record vanished while an operation was working on it
    #[error("Record not found: {entity} with {identifier}")]
    RecordNotFound { entity: String, identifier: String },

    // ===== Generic Errors =====
    /// Generic internal error
    #[error("Internal error: {message}")]
    InternalError { message: String },
}

impl AppError {
    /// Returns a user-friendly error message suitable for an admin panel
    pub fn user_message(&self) -> String {
        match self {
            Self::DatabaseError { .. } => {
                "The content database could not be read or written.".to_string()
            }
            Self::ConstraintViolation { .. } => {
                "The change refers to a record that does not exist or conflicts with stored data."
                    .to_string()
            }
            Self::DatabaseLocked { .. } => {
                "The content database is busy. Please try again.".to_string()
            }
            Self::DatabaseCorrupted { .. } => {
                "The content database is damaged and needs repair.".to_string()
            }
            Self::MigrationFailed { .. } => {
                "Failed to update the content database schema.".to_string()
            }
            Self::RecordNotFound { entity, .. } => {
                format!("The requested {} was not found.", entity)
            }
            Self::InternalError { .. } => "An unexpected error occurred.".to_string(),
        }
    }

    /// Returns true if running the same operation again may succeed
    ///
    /// Only lock contention qualifies. A constraint violation or a vanished
    /// record fails the same way on every attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::DatabaseLocked { .. })
    }

    /// Helper to create a database error from any error type
    pub fn database<E: std::error::Error + Send + Sync + 'static>(
        message: impl Into<String>,
        source: E,
    ) -> Self {
        Self::DatabaseError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Helper for a record that should exist but could not be read back
    pub fn not_found(entity: impl Into<String>, identifier: impl fmt::Display) -> Self {
        Self::RecordNotFound {
            entity: entity.into(),
            identifier: identifier.to_string(),
        }
    }
}

/// Convenience type alias for Results using AppError
pub type Result<T> = std::result::Result<T, AppError>;
