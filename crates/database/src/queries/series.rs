//! Lesson series database operations
//!
//! A series row carries its teacher and theme plus the full book group,
//! so the book arrives with its own theme and author.

use crate::repository::{Entity, Repository};
use crate::rows::{self, book_columns, book_joins, column, flag};
use crate::DbPool;
use lessonbook_core::{
    AppError, LessonSeries, LessonSeriesCreate, LessonSeriesUpdate, Listing, SeriesId,
};
use sqlx::sqlite::SqliteRow;

impl Entity for LessonSeries {
    type Id = SeriesId;
    type Create = LessonSeriesCreate;
    type Update = LessonSeriesUpdate;

    const NAME: &'static str = "lesson series";
    const TABLE: &'static str = "lesson_series";
    const ALIAS: &'static str = "s";
    const SELECT: &'static str = concat!(
        "SELECT s.id AS series_id, s.year AS series_year, \
         s.series_order AS series_order, s.is_active AS series_is_active, \
         t.id AS teacher_id, t.name AS teacher_name, t.is_active AS teacher_is_active, \
         th.id AS theme_id, th.name AS theme_name, th.is_active AS theme_is_active, ",
        book_columns!(),
        " FROM lesson_series s \
         LEFT JOIN teachers t ON t.id = s.teacher_id \
         LEFT JOIN themes th ON th.id = s.theme_id \
         LEFT JOIN books b ON b.id = s.book_id ",
        book_joins!()
    );
    const ORDER_BY: &'static str = "s.year DESC, s.series_order";

    fn from_row(row: &SqliteRow) -> Result<Self, AppError> {
        let id: i64 = column(row, "series_id")?;

        Ok(LessonSeries {
            id: SeriesId::new(id),
            year: column(row, "series_year")?,
            order: column(row, "series_order")?,
            is_active: flag(row, "series_is_active")?,
            teacher: rows::teacher(row, "teacher_")?,
            book: rows::book(row)?,
            theme: rows::theme(row, "theme_")?,
        })
    }
}

/// Lists every series, inactive ones included, newest year first
///
/// This listing feeds the admin panel, which needs deactivated series to
/// restore them. Use [`list_series_with`] for the public listing.
pub async fn list_series(pool: &DbPool) -> Result<Vec<LessonSeries>, AppError> {
    list_series_with(pool, Listing::All).await
}

/// Lists series with an explicit active filter
pub async fn list_series_with(
    pool: &DbPool,
    listing: Listing,
) -> Result<Vec<LessonSeries>, AppError> {
    Repository::<LessonSeries>::new(pool).list(listing).await
}

/// Gets a series by ID with teacher, book and theme
pub async fn get_series(pool: &DbPool, id: SeriesId) -> Result<Option<LessonSeries>, AppError> {
    Repository::<LessonSeries>::new(pool).get(id).await
}

/// Creates a new series and returns it as stored
pub async fn create_series(
    pool: &DbPool,
    data: &LessonSeriesCreate,
) -> Result<LessonSeries, AppError> {
    Repository::<LessonSeries>::new(pool).create(data).await
}

/// Updates the fields set in `data`; `None` if the series does not exist
pub async fn update_series(
    pool: &DbPool,
    id: SeriesId,
    data: &LessonSeriesUpdate,
) -> Result<Option<LessonSeries>, AppError> {
    Repository::<LessonSeries>::new(pool).update(id, data).await
}

/// Deactivates a series (soft delete)
pub async fn delete_series(pool: &DbPool, id: SeriesId) -> Result<bool, AppError> {
    Repository::<LessonSeries>::new(pool).delete(id).await
}

/// Reactivates a soft-deleted series
pub async fn restore_series(pool: &DbPool, id: SeriesId) -> Result<bool, AppError> {
    Repository::<LessonSeries>::new(pool).restore(id).await
}
