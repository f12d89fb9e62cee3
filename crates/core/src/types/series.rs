//! Lesson series domain model

use crate::types::book::Book;
use crate::types::common::{deserialize_some, Change, Changeset};
use crate::types::ids::{BookId, SeriesId, TeacherId, ThemeId};
use crate::types::lookup::{Teacher, Theme};
use serde::{Deserialize, Serialize};

/// A yearly series of lessons, with teacher, book and theme loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonSeries {
    pub id: SeriesId,
    pub year: i64,
    /// Position within the year
    pub order: i64,
    pub is_active: bool,
    pub teacher: Option<Teacher>,
    pub book: Option<Book>,
    pub theme: Option<Theme>,
}

/// Payload for creating a lesson series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonSeriesCreate {
    pub year: i64,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub teacher_id: Option<TeacherId>,
    #[serde(default)]
    pub book_id: Option<BookId>,
    #[serde(default)]
    pub theme_id: Option<ThemeId>,
}

impl LessonSeriesCreate {
    pub fn new(year: i64, order: i64) -> Self {
        Self {
            year,
            order,
            teacher_id: None,
            book_id: None,
            theme_id: None,
        }
    }

    pub fn with_teacher(mut self, teacher_id: TeacherId) -> Self {
        self.teacher_id = Some(teacher_id);
        self
    }

    pub fn with_book(mut self, book_id: BookId) -> Self {
        self.book_id = Some(book_id);
        self
    }

    pub fn with_theme(mut self, theme_id: ThemeId) -> Self {
        self.theme_id = Some(theme_id);
        self
    }
}

impl Changeset for LessonSeriesCreate {
    fn changes(&self) -> Vec<Change> {
        vec![
            Change::integer("year", self.year),
            Change::integer("series_order", self.order),
            Change::optional_integer("teacher_id", self.teacher_id.map(i64::from)),
            Change::optional_integer("book_id", self.book_id.map(i64::from)),
            Change::optional_integer("theme_id", self.theme_id.map(i64::from)),
        ]
    }
}

/// Partial update for a lesson series
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonSeriesUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub teacher_id: Option<Option<TeacherId>>,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub book_id: Option<Option<BookId>>,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub theme_id: Option<Option<ThemeId>>,
}

impl LessonSeriesUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_year(mut self, year: i64) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn with_teacher(mut self, teacher_id: Option<TeacherId>) -> Self {
        self.teacher_id = Some(teacher_id);
        self
    }

    pub fn with_book(mut self, book_id: Option<BookId>) -> Self {
        self.book_id = Some(book_id);
        self
    }

    pub fn with_theme(mut self, theme_id: Option<ThemeId>) -> Self {
        self.theme_id = Some(theme_id);
        self
    }
}

impl Changeset for LessonSeriesUpdate {
    fn changes(&self) -> Vec<Change> {
        let mut changes = Vec::new();
        if let Some(year) = self.year {
            changes.push(Change::integer("year", year));
        }
        if let Some(order) = self.order {
            changes.push(Change::integer("series_order", order));
        }
        if let Some(is_active) = self.is_active {
            changes.push(Change::bool("is_active", is_active));
        }
        if let Some(teacher_id) = self.teacher_id {
            changes.push(Change::optional_integer(
                "teacher_id",
                teacher_id.map(i64::from),
            ));
        }
        if let Some(book_id) = self.book_id {
            changes.push(Change::optional_integer("book_id", book_id.map(i64::from)));
        }
        if let Some(theme_id) = self.theme_id {
            changes.push(Change::optional_integer(
                "theme_id",
                theme_id.map(i64::from),
            ));
        }
        changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_maps_to_series_order_column() {
        let update = LessonSeriesUpdate::new().with_order(3);
        assert_eq!(update.changes(), vec![Change::integer("series_order", 3)]);
    }

    #[test]
    fn test_create_lists_every_column() {
        let create = LessonSeriesCreate::new(2024, 1).with_teacher(TeacherId::new(7));
        let changes = create.changes();
        assert_eq!(changes.len(), 5);
        assert!(changes.contains(&Change::optional_integer("teacher_id", Some(7))));
        assert!(changes.contains(&Change::optional_integer("book_id", None)));
    }

    #[test]
    fn test_update_relations_are_independent() {
        let update = LessonSeriesUpdate::new()
            .with_book(Some(BookId::new(2)))
            .with_theme(None);
        assert_eq!(
            update.changes(),
            vec![
                Change::optional_integer("book_id", Some(2)),
                Change::optional_integer("theme_id", None),
            ]
        );
    }
}
