//! Teacher database operations

use crate::repository::{Entity, Repository};
use crate::rows;
use crate::DbPool;
use lessonbook_core::{AppError, Listing, Teacher, TeacherCreate, TeacherId, TeacherUpdate};
use sqlx::sqlite::SqliteRow;

impl Entity for Teacher {
    type Id = TeacherId;
    type Create = TeacherCreate;
    type Update = TeacherUpdate;

    const NAME: &'static str = "teacher";
    const TABLE: &'static str = "teachers";
    const ALIAS: &'static str = "t";
    const SELECT: &'static str =
        "SELECT t.id AS teacher_id, t.name AS teacher_name, t.is_active AS teacher_is_active \
         FROM teachers t";
    const ORDER_BY: &'static str = "t.name";

    fn from_row(row: &SqliteRow) -> Result<Self, AppError> {
        rows::teacher(row, "teacher_")?.ok_or_else(|| AppError::InternalError {
            message: "Teacher row without an id".to_string(),
        })
    }
}

pub async fn list_teachers(pool: &DbPool) -> Result<Vec<Teacher>, AppError> {
    list_teachers_with(pool, Listing::ActiveOnly).await
}

pub async fn list_teachers_with(
    pool: &DbPool,
    listing: Listing,
) -> Result<Vec<Teacher>, AppError> {
    Repository::<Teacher>::new(pool).list(listing).await
}

pub async fn get_teacher(pool: &DbPool, id: TeacherId) -> Result<Option<Teacher>, AppError> {
    Repository::<Teacher>::new(pool).get(id).await
}

pub async fn create_teacher(pool: &DbPool, data: &TeacherCreate) -> Result<Teacher, AppError> {
    Repository::<Teacher>::new(pool).create(data).await
}

pub async fn update_teacher(
    pool: &DbPool,
    id: TeacherId,
    data: &TeacherUpdate,
) -> Result<Option<Teacher>, AppError> {
    Repository::<Teacher>::new(pool).update(id, data).await
}

pub async fn delete_teacher(pool: &DbPool, id: TeacherId) -> Result<bool, AppError> {
    Repository::<Teacher>::new(pool).delete(id).await
}

pub async fn restore_teacher(pool: &DbPool, id: TeacherId) -> Result<bool, AppError> {
    Repository::<Teacher>::new(pool).restore(id).await
}
