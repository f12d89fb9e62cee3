//! Book author domain model

use crate::types::common::{Change, Changeset};
use crate::types::ids::AuthorId;
use serde::{Deserialize, Serialize};

/// Author of one or more books
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookAuthor {
    pub id: AuthorId,
    pub name: String,
    pub is_active: bool,
}

/// Payload for creating an author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookAuthorCreate {
    pub name: String,
}

impl BookAuthorCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Changeset for BookAuthorCreate {
    fn changes(&self) -> Vec<Change> {
        vec![Change::text("name", &self.name)]
    }
}

/// Partial update for an author; unset fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookAuthorUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl BookAuthorUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }
}

impl Changeset for BookAuthorUpdate {
    fn changes(&self) -> Vec<Change> {
        let mut changes = Vec::new();
        if let Some(name) = &self.name {
            changes.push(Change::text("name", name));
        }
        if let Some(is_active) = self.is_active {
            changes.push(Change::bool("is_active", is_active));
        }
        changes
    }
}
