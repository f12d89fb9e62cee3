//! Book domain model

use crate::types::author::BookAuthor;
use crate::types::common::{deserialize_some, Change, Changeset};
use crate::types::ids::{AuthorId, BookId, ThemeId};
use crate::types::lookup::Theme;
use serde::{Deserialize, Serialize};

/// A book, with its theme and author loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub name: String,
    pub sort_order: i64,
    pub is_active: bool,
    pub theme: Option<Theme>,
    pub author: Option<BookAuthor>,
}

impl Book {
    /// Returns the id of the linked theme, if any
    pub fn theme_id(&self) -> Option<ThemeId> {
        self.theme.as_ref().map(|theme| theme.id)
    }

    /// Returns the id of the linked author, if any
    pub fn author_id(&self) -> Option<AuthorId> {
        self.author.as_ref().map(|author| author.id)
    }
}

/// Payload for creating a book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookCreate {
    pub name: String,
    #[serde(default)]
    pub sort_order: i64,
    #[serde(default)]
    pub theme_id: Option<ThemeId>,
    #[serde(default)]
    pub author_id: Option<AuthorId>,
}

impl BookCreate {
    /// Creates a payload with the required fields and no relations
    pub fn new(name: impl Into<String>, sort_order: i64) -> Self {
        Self {
            name: name.into(),
            sort_order,
            theme_id: None,
            author_id: None,
        }
    }

    pub fn with_theme(mut self, theme_id: ThemeId) -> Self {
        self.theme_id = Some(theme_id);
        self
    }

    pub fn with_author(mut self, author_id: AuthorId) -> Self {
        self.author_id = Some(author_id);
        self
    }
}

impl Changeset for BookCreate {
    fn changes(&self) -> Vec<Change> {
        vec![
            Change::text("name", &self.name),
            Change::integer("sort_order", self.sort_order),
            Change::optional_integer("theme_id", self.theme_id.map(i64::from)),
            Change::optional_integer("author_id", self.author_id.map(i64::from)),
        ]
    }
}

/// Partial update for a book
///
/// Relation ids are doubly optional: `None` leaves the link alone,
/// `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub theme_id: Option<Option<ThemeId>>,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub author_id: Option<Option<AuthorId>>,
}

impl BookUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_sort_order(mut self, sort_order: i64) -> Self {
        self.sort_order = Some(sort_order);
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn with_theme(mut self, theme_id: Option<ThemeId>) -> Self {
        self.theme_id = Some(theme_id);
        self
    }

    pub fn with_author(mut self, author_id: Option<AuthorId>) -> Self {
        self.author_id = Some(author_id);
        self
    }
}

impl Changeset for BookUpdate {
    fn changes(&self) -> Vec<Change> {
        let mut changes = Vec::new();
        if let Some(name) = &self.name {
            changes.push(Change::text("name", name));
        }
        if let Some(sort_order) = self.sort_order {
            changes.push(Change::integer("sort_order", sort_order));
        }
        if let Some(is_active) = self.is_active {
            changes.push(Change::bool("is_active", is_active));
        }
        if let Some(theme_id) = self.theme_id {
            changes.push(Change::optional_integer(
                "theme_id",
                theme_id.map(i64::from),
            ));
        }
        if let Some(author_id) = self.author_id {
            changes.push(Change::optional_integer(
                "author_id",
                author_id.map(i64::from),
            ));
        }
        changes
    }
}
