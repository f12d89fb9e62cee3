//! Lessonbook core types
//!
//! Domain models, payloads and the shared error type used by the database
//! and config crates.

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use types::{
    AuthorId, Book, BookAuthor, BookAuthorCreate, BookAuthorUpdate, BookCreate, BookId,
    BookUpdate, Change, Changeset, FieldValue, LessonSeries, LessonSeriesCreate,
    LessonSeriesUpdate, Listing, SeriesId, Teacher, TeacherCreate, TeacherId, TeacherUpdate,
    Theme, ThemeCreate, ThemeId, ThemeUpdate,
};
