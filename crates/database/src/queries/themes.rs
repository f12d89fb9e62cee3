//! Theme database operations

use crate::repository::{Entity, Repository};
use crate::rows;
use crate::DbPool;
use lessonbook_core::{AppError, Listing, Theme, ThemeCreate, ThemeId, ThemeUpdate};
use sqlx::sqlite::SqliteRow;

impl Entity for Theme {
    type Id = ThemeId;
    type Create = ThemeCreate;
    type Update = ThemeUpdate;

    const NAME: &'static str = "theme";
    const TABLE: &'static str = "themes";
    const ALIAS: &'static str = "th";
    const SELECT: &'static str =
        "SELECT th.id AS theme_id, th.name AS theme_name, th.is_active AS theme_is_active \
         FROM themes th";
    const ORDER_BY: &'static str = "th.name";

    fn from_row(row: &SqliteRow) -> Result<Self, AppError> {
        rows::theme(row, "theme_")?.ok_or_else(|| AppError::InternalError {
            message: "Theme row without an id".to_string(),
        })
    }
}

pub async fn list_themes(pool: &DbPool) -> Result<Vec<Theme>, AppError> {
    list_themes_with(pool, Listing::ActiveOnly).await
}

pub async fn list_themes_with(pool: &DbPool, listing: Listing) -> Result<Vec<Theme>, AppError> {
    Repository::<Theme>::new(pool).list(listing).await
}

pub async fn get_theme(pool: &DbPool, id: ThemeId) -> Result<Option<Theme>, AppError> {
    Repository::<Theme>::new(pool).get(id).await
}

pub async fn create_theme(pool: &DbPool, data: &ThemeCreate) -> Result<Theme, AppError> {
    Repository::<Theme>::new(pool).create(data).await
}

pub async fn update_theme(
    pool: &DbPool,
    id: ThemeId,
    data: &ThemeUpdate,
) -> Result<Option<Theme>, AppError> {
    Repository::<Theme>::new(pool).update(id, data).await
}

pub async fn delete_theme(pool: &DbPool, id: ThemeId) -> Result<bool, AppError> {
    Repository::<Theme>::new(pool).delete(id).await
}

pub async fn restore_theme(pool: &DbPool, id: ThemeId) -> Result<bool, AppError> {
    Repository::<Theme>::new(pool).restore(id).await
}
