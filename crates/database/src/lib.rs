//! Lessonbook Database Layer
//!
//! Content storage for the Lessonbook admin backend: books, book authors,
//! lesson series and the themes and teachers they link to. It uses SQLite
//! with sqlx; every entity goes through the generic [`Repository`].

pub mod connection;
pub mod migrations;
pub mod queries;
pub mod repository;
mod rows;

pub use connection::{close, connect, DatabaseConfig, DbPool};
pub use migrations::{current_version, optimize, run_migrations, verify_integrity};
pub use repository::{Entity, Repository};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::{
        create_author, create_book, create_series, delete_book, get_series, list_books,
        list_series, update_author,
    };
    use connection::create_test_db;
    use lessonbook_core::{
        AppError, BookAuthorCreate, BookAuthorUpdate, BookCreate, LessonSeriesCreate, Listing,
    };

    #[tokio::test]
    async fn test_database_migrations() -> Result<(), AppError> {
        let pool = create_test_db().await?;
        run_migrations(&pool).await?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM schema_migrations")
            .fetch_one(&pool)
            .await
            .map_err(|e| AppError::database("Failed to count migrations", e))?;

        assert_eq!(count, current_version());
        Ok(())
    }

    #[tokio::test]
    async fn test_full_database_workflow() -> Result<(), AppError> {
        let pool = create_test_db().await?;
        run_migrations(&pool).await?;

        let author = create_author(&pool, &BookAuthorCreate::new("Ibn Rajab")).await?;
        let book = create_book(
            &pool,
            &BookCreate::new("Jami al-Ulum wal-Hikam", 1).with_author(author.id),
        )
        .await?;
        let series = create_series(&pool, &LessonSeriesCreate::new(2025, 1).with_book(book.id))
            .await?;

        update_author(
            &pool,
            author.id,
            &BookAuthorUpdate::new().with_name("Ibn Rajab al-Hanbali"),
        )
        .await?;

        let retrieved = get_series(&pool, series.id)
            .await?
            .expect("Series should exist");
        let book_author = retrieved
            .book
            .and_then(|b| b.author)
            .map(|a| a.name);
        assert_eq!(book_author.as_deref(), Some("Ibn Rajab al-Hanbali"));

        Ok(())
    }

    #[tokio::test]
    async fn test_soft_delete_keeps_series_link() -> Result<(), AppError> {
        let pool = create_test_db().await?;
        run_migrations(&pool).await?;

        let book = create_book(&pool, &BookCreate::new("Bulugh al-Maram", 1)).await?;
        create_series(&pool, &LessonSeriesCreate::new(2024, 1).with_book(book.id)).await?;

        assert!(delete_book(&pool, book.id).await?);
        assert!(list_books(&pool).await?.is_empty());

        let series = list_series(&pool).await?;
        assert_eq!(series.len(), 1);
        let linked = series[0].book.as_ref().expect("Book link should remain");
        assert!(!linked.is_active);

        Ok(())
    }

    #[tokio::test]
    async fn test_generic_repository_matches_query_functions() -> Result<(), AppError> {
        let pool = create_test_db().await?;
        run_migrations(&pool).await?;

        create_book(&pool, &BookCreate::new("Kitab at-Tawhid", 1)).await?;

        let through_repository = Repository::<lessonbook_core::Book>::new(&pool)
            .list(Listing::ActiveOnly)
            .await?;
        assert_eq!(through_repository, list_books(&pool).await?);

        Ok(())
    }
}
