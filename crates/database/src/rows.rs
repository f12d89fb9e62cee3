//! Row decoding shared by the entity queries
//!
//! Joined relations come back as prefixed column groups
//! (`{prefix}id`, `{prefix}name`, `{prefix}is_active`). A NULL `{prefix}id`
//! means the relation is not set.

use lessonbook_core::{AppError, Book, BookAuthor, BookId, Teacher, Theme};
use sqlx::sqlite::{Sqlite, SqliteRow};
use sqlx::Row;

/// Column list for a book and its theme and author, aliased with `book_`
///
/// Expects `books b`, `themes bt` and `book_authors ba` in the FROM clause.
macro_rules! book_columns {
    () => {
        "b.id AS book_id, b.name AS book_name, \
         b.sort_order AS book_sort_order, b.is_active AS book_is_active, \
         bt.id AS book_theme_id, bt.name AS book_theme_name, \
         bt.is_active AS book_theme_is_active, \
         ba.id AS book_author_id, ba.name AS book_author_name, \
         ba.is_active AS book_author_is_active"
    };
}

/// Joins that pull in a book's theme and author
macro_rules! book_joins {
    () => {
        "LEFT JOIN themes bt ON bt.id = b.theme_id \
         LEFT JOIN book_authors ba ON ba.id = b.author_id"
    };
}

pub(crate) use book_columns;
pub(crate) use book_joins;

/// Reads a single column, naming it in the error
pub(crate) fn column<'r, T>(row: &'r SqliteRow, name: &str) -> Result<T, AppError>
where
    T: sqlx::Decode<'r, Sqlite> + sqlx::Type<Sqlite>,
{
    row.try_get(name)
        .map_err(|e| AppError::database(format!("Missing column {}", name), e))
}

/// Reads an INTEGER 0/1 column as a bool
pub(crate) fn flag(row: &SqliteRow, name: &str) -> Result<bool, AppError> {
    let value: i64 = column(row, name)?;
    Ok(value != 0)
}

/// Reads an `(id, name, is_active)` group if its id is not NULL
fn named_group(row: &SqliteRow, prefix: &str) -> Result<Option<(i64, String, bool)>, AppError> {
    let id: Option<i64> = column(row, &format!("{}id", prefix))?;
    let Some(id) = id else {
        return Ok(None);
    };

    let name: String = column(row, &format!("{}name", prefix))?;
    let is_active = flag(row, &format!("{}is_active", prefix))?;
    Ok(Some((id, name, is_active)))
}

pub(crate) fn theme(row: &SqliteRow, prefix: &str) -> Result<Option<Theme>, AppError> {
    Ok(named_group(row, prefix)?.map(|(id, name, is_active)| Theme {
        id: id.into(),
        name,
        is_active,
    }))
}

pub(crate) fn teacher(row: &SqliteRow, prefix: &str) -> Result<Option<Teacher>, AppError> {
    Ok(named_group(row, prefix)?.map(|(id, name, is_active)| Teacher {
        id: id.into(),
        name,
        is_active,
    }))
}

pub(crate) fn author(row: &SqliteRow, prefix: &str) -> Result<Option<BookAuthor>, AppError> {
    Ok(named_group(row, prefix)?.map(|(id, name, is_active)| BookAuthor {
        id: id.into(),
        name,
        is_active,
    }))
}

/// Reads the `BOOK_COLUMNS` group, `None` when the book id is NULL
pub(crate) fn book(row: &SqliteRow) -> Result<Option<Book>, AppError> {
    let id: Option<i64> = column(row, "book_id")?;
    let Some(id) = id else {
        return Ok(None);
    };

    Ok(Some(Book {
        id: BookId::new(id),
        name: column(row, "book_name")?,
        sort_order: column(row, "book_sort_order")?,
        is_active: flag(row, "book_is_active")?,
        theme: theme(row, "book_theme_")?,
        author: author(row, "book_author_")?,
    }))
}
