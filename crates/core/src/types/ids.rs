//! Store-assigned identifiers
//!
//! Every entity gets its own id newtype so a `ThemeId` can never be passed
//! where a `BookId` is expected. The raw value is the SQLite rowid.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw rowid
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Returns the raw rowid
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Unique identifier for a book
    BookId
);
entity_id!(
    /// Unique identifier for a book author
    AuthorId
);
entity_id!(
    /// Unique identifier for a lesson series
    SeriesId
);
entity_id!(
    /// Unique identifier for a theme
    ThemeId
);
entity_id!(
    /// Unique identifier for a teacher
    TeacherId
);
