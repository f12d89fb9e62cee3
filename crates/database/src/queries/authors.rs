//! Book author database operations

use crate::repository::{Entity, Repository};
use crate::rows::{column, flag};
use crate::DbPool;
use lessonbook_core::{
    AppError, AuthorId, BookAuthor, BookAuthorCreate, BookAuthorUpdate, Listing,
};
use sqlx::sqlite::SqliteRow;

impl Entity for BookAuthor {
    type Id = AuthorId;
    type Create = BookAuthorCreate;
    type Update = BookAuthorUpdate;

    const NAME: &'static str = "book author";
    const TABLE: &'static str = "book_authors";
    const ALIAS: &'static str = "a";
    const SELECT: &'static str = "SELECT a.id, a.name, a.is_active FROM book_authors a";
    const ORDER_BY: &'static str = "a.name";

    fn from_row(row: &SqliteRow) -> Result<Self, AppError> {
        let id: i64 = column(row, "id")?;

        Ok(BookAuthor {
            id: AuthorId::new(id),
            name: column(row, "name")?,
            is_active: flag(row, "is_active")?,
        })
    }
}

/// Lists active authors by name
pub async fn list_authors(pool: &DbPool) -> Result<Vec<BookAuthor>, AppError> {
    list_authors_with(pool, Listing::ActiveOnly).await
}

/// Lists authors with an explicit active filter, ordered by name
pub async fn list_authors_with(
    pool: &DbPool,
    listing: Listing,
) -> Result<Vec<BookAuthor>, AppError> {
    Repository::<BookAuthor>::new(pool).list(listing).await
}

/// Gets an author by ID
pub async fn get_author(pool: &DbPool, id: AuthorId) -> Result<Option<BookAuthor>, AppError> {
    Repository::<BookAuthor>::new(pool).get(id).await
}

/// Creates a new author and returns it as stored
pub async fn create_author(
    pool: &DbPool,
    data: &BookAuthorCreate,
) -> Result<BookAuthor, AppError> {
    Repository::<BookAuthor>::new(pool).create(data).await
}

/// Updates an author and returns the stored record
pub async fn update_author(
    pool: &DbPool,
    id: AuthorId,
    data: &BookAuthorUpdate,
) -> Result<Option<BookAuthor>, AppError> {
    Repository::<BookAuthor>::new(pool).update(id, data).await
}

/// Deactivates an author (soft delete)
pub async fn delete_author(pool: &DbPool, id: AuthorId) -> Result<bool, AppError> {
    Repository::<BookAuthor>::new(pool).delete(id).await
}

/// Reactivates a soft-deleted author; false when no author has this id
pub async fn restore_author(pool: &DbPool, id: AuthorId) -> Result<bool, AppError> {
    Repository::<BookAuthor>::new(pool).restore(id).await
}
