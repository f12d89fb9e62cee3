//! Reference entities that books and lesson series point at

use crate::types::common::{Change, Changeset};
use crate::types::ids::{TeacherId, ThemeId};
use serde::{Deserialize, Serialize};

/// A subject area shared by books and lesson series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub id: ThemeId,
    pub name: String,
    pub is_active: bool,
}

/// Payload for creating a theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeCreate {
    pub name: String,
}

impl ThemeCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Changeset for ThemeCreate {
    fn changes(&self) -> Vec<Change> {
        vec![Change::text("name", &self.name)]
    }
}

/// Partial update for a theme
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl Changeset for ThemeUpdate {
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

/// A teacher who leads lesson series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: TeacherId,
    pub name: String,
    pub is_active: bool,
}

/// Payload for creating a teacher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherCreate {
    pub name: String,
}

impl TeacherCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Changeset for TeacherCreate {
    fn changes(&self) -> Vec<Change> {
        vec![Change::text("name", &self.name)]
    }
}

/// Partial update for a teacher
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl Changeset for TeacherUpdate {
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
