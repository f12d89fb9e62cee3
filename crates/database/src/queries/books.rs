//! Book database operations

use crate::repository::{Entity, Repository};
use crate::rows::{self, book_columns, book_joins};
use crate::DbPool;
use lessonbook_core::{AppError, Book, BookCreate, BookId, BookUpdate, Listing};
use sqlx::sqlite::SqliteRow;

impl Entity for Book {
    type Id = BookId;
    type Create = BookCreate;
    type Update = BookUpdate;

    const NAME: &'static str = "book";
    const TABLE: &'static str = "books";
    const ALIAS: &'static str = "b";
    const SELECT: &'static str =
        concat!("SELECT ", book_columns!(), " FROM books b ", book_joins!());
    const ORDER_BY: &'static str = "b.sort_order, b.name";

    fn from_row(row: &SqliteRow) -> Result<Self, AppError> {
        rows::book(row)?.ok_or_else(|| AppError::InternalError {
            message: "Book row without an id".to_string(),
        })
    }
}

/// Lists active books ordered by sort order, then name
pub async fn list_books(pool: &DbPool) -> Result<Vec<Book>, AppError> {
    list_books_with(pool, Listing::ActiveOnly).await
}

/// Lists books with an explicit active filter
pub async fn list_books_with(pool: &DbPool, listing: Listing) -> Result<Vec<Book>, AppError> {
    Repository::<Book>::new(pool).list(listing).await
}

/// Gets a book by ID, with theme and author
pub async fn get_book(pool: &DbPool, id: BookId) -> Result<Option<Book>, AppError> {
    Repository::<Book>::new(pool).get(id).await
}

/// Creates a new book and returns it as stored
pub async fn create_book(pool: &DbPool, data: &BookCreate) -> Result<Book, AppError> {
    Repository::<Book>::new(pool).create(data).await
}

/// Updates the fields set in `data`; `None` if the book does not exist
pub async fn update_book(
    pool: &DbPool,
    id: BookId,
    data: &BookUpdate,
) -> Result<Option<Book>, AppError> {
    Repository::<Book>::new(pool).update(id, data).await
}

/// Deactivates a book (soft delete)
pub async fn delete_book(pool: &DbPool, id: BookId) -> Result<bool, AppError> {
    Repository::<Book>::new(pool).delete(id).await
}

/// Reactivates a soft-deleted book
pub async fn restore_book(pool: &DbPool, id: BookId) -> Result<bool, AppError> {
    Repository::<Book>::new(pool).restore(id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::create_test_db;
    use crate::migrations::run_migrations;
    use crate::queries::authors::create_author;
    use crate::queries::themes::create_theme;
    use lessonbook_core::{BookAuthorCreate, ThemeCreate, ThemeId};

    async fn setup() -> Result<DbPool, AppError> {
        let pool = create_test_db().await?;
        run_migrations(&pool).await?;
        Ok(pool)
    }

    #[tokio::test]
    async fn test_create_then_partial_update() {
        let pool = setup().await.expect("Failed to setup database");

        let book = create_book(&pool, &BookCreate::new("Alpha", 5))
            .await
            .expect("Failed to create book");
        assert_eq!(book.name, "Alpha");
        assert_eq!(book.sort_order, 5);
        assert!(book.is_active);
        assert!(book.theme.is_none());
        assert!(book.author.is_none());

        let updated = update_book(&pool, book.id, &BookUpdate::new().with_sort_order(1))
            .await
            .expect("Failed to update book")
            .expect("Book should exist");
        assert_eq!(updated.id, book.id);
        assert_eq!(updated.name, "Alpha");
        assert_eq!(updated.sort_order, 1);
    }

    #[tokio::test]
    async fn test_rename_keeps_sort_order() {
        let pool = setup().await.expect("Failed to setup database");
        let book = create_book(&pool, &BookCreate::new("Riyad as-Salihin", 3))
            .await
            .unwrap();

        let updated = update_book(&pool, book.id, &BookUpdate::new().with_name("Riyadh"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "Riyadh");
        assert_eq!(updated.sort_order, 3);
        assert!(updated.is_active);
    }

    #[tokio::test]
    async fn test_create_loads_relations() {
        let pool = setup().await.expect("Failed to setup database");
        let theme = create_theme(&pool, &ThemeCreate::new("Hadith")).await.unwrap();
        let author = create_author(&pool, &BookAuthorCreate::new("An-Nawawi"))
            .await
            .unwrap();

        let book = create_book(
            &pool,
            &BookCreate::new("Forty Hadith", 1)
                .with_theme(theme.id)
                .with_author(author.id),
        )
        .await
        .unwrap();

        assert_eq!(book.theme, Some(theme));
        assert_eq!(book.author, Some(author));

        let fetched = get_book(&pool, book.id).await.unwrap();
        assert_eq!(fetched, Some(book));
    }

    #[tokio::test]
    async fn test_explicit_null_clears_relation() {
        let pool = setup().await.expect("Failed to setup database");
        let theme = create_theme(&pool, &ThemeCreate::new("Fiqh")).await.unwrap();
        let author = create_author(&pool, &BookAuthorCreate::new("Ibn Qudamah"))
            .await
            .unwrap();
        let book = create_book(
            &pool,
            &BookCreate::new("Umdat al-Fiqh", 2)
                .with_theme(theme.id)
                .with_author(author.id),
        )
        .await
        .unwrap();

        let update: BookUpdate = serde_json::from_str(r#"{"theme_id": null}"#).unwrap();
        let updated = update_book(&pool, book.id, &update).await.unwrap().unwrap();

        assert!(updated.theme.is_none());
        assert_eq!(updated.author_id(), Some(author.id));
    }

    #[tokio::test]
    async fn test_unknown_theme_is_constraint_violation() {
        let pool = setup().await.expect("Failed to setup database");

        let data = BookCreate::new("Orphan", 1).with_theme(ThemeId::new(404));
        let result = create_book(&pool, &data).await;

        assert!(matches!(result, Err(AppError::ConstraintViolation { .. })));
        assert!(list_books_with(&pool, Listing::All).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_missing_book() {
        let pool = setup().await.expect("Failed to setup database");

        let data = BookUpdate::new().with_name("Ghost");
        let result = update_book(&pool, BookId::new(999), &data).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_soft_delete() {
        let pool = setup().await.expect("Failed to setup database");
        let book = create_book(&pool, &BookCreate::new("To Delete", 1))
            .await
            .unwrap();

        assert!(!delete_book(&pool, BookId::new(999)).await.unwrap());
        assert!(delete_book(&pool, book.id).await.unwrap());
        assert!(delete_book(&pool, book.id).await.unwrap());

        assert!(list_books(&pool).await.unwrap().is_empty());

        let retrieved = get_book(&pool, book.id).await.unwrap().unwrap();
        assert!(!retrieved.is_active);

        let all = list_books_with(&pool, Listing::All).await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_restore_book() {
        let pool = setup().await.expect("Failed to setup database");
        let book = create_book(&pool, &BookCreate::new("Returning", 1))
            .await
            .unwrap();

        delete_book(&pool, book.id).await.unwrap();
        assert!(restore_book(&pool, book.id).await.unwrap());

        assert_eq!(list_books(&pool).await.unwrap(), vec![book]);
    }

    #[tokio::test]
    async fn test_list_books_order() {
        let pool = setup().await.expect("Failed to setup database");

        for (name, sort_order) in [("Gamma", 2), ("Beta", 1), ("Alpha", 2), ("Delta", 0)] {
            create_book(&pool, &BookCreate::new(name, sort_order))
                .await
                .unwrap();
        }

        let books = list_books(&pool).await.unwrap();
        let names: Vec<_> = books.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Delta", "Beta", "Alpha", "Gamma"]);
    }
}
