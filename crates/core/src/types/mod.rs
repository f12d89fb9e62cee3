//! Domain types for Lessonbook
//!
//! - `book`: Books and their create/update payloads
//! - `author`: Book authors
//! - `series`: Lesson series
//! - `lookup`: Themes and teachers referenced by the above
//! - `ids`: Store-assigned id newtypes
//! - `common`: Listing modes, column changes and payload helpers

mod author;
mod book;
mod common;
mod ids;
mod lookup;
mod series;

pub use author::{BookAuthor, BookAuthorCreate, BookAuthorUpdate};
pub use book::{Book, BookCreate, BookUpdate};
pub use common::{deserialize_some, Change, Changeset, FieldValue, Listing};
pub use ids::{AuthorId, BookId, SeriesId, TeacherId, ThemeId};
pub use lookup::{Teacher, TeacherCreate, TeacherUpdate, Theme, ThemeCreate, ThemeUpdate};
pub use series::{LessonSeries, LessonSeriesCreate, LessonSeriesUpdate};
