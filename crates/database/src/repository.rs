//! Generic entity repository
//!
//! Every content entity gets the same operations through one implementation:
//! list, get, create, update, soft delete and restore. An entity only has to
//! describe its table, its hydrating SELECT, and how to read a row.
//!
//! Writes run in a transaction that is committed before the record is read
//! back, so callers always get the persisted, fully hydrated state.

use crate::DbPool;
use lessonbook_core::{AppError, Changeset, FieldValue, Listing};
use sqlx::error::ErrorKind;
use sqlx::sqlite::{Sqlite, SqliteQueryResult, SqliteRow};
use sqlx::QueryBuilder;
use std::fmt;
use std::marker::PhantomData;

/// A table-backed record with soft-delete support
pub trait Entity: Sized + Send + Unpin + 'static {
    /// Store-assigned identifier
    type Id: Copy + From<i64> + Into<i64> + fmt::Display + Send + Sync;
    /// Payload with every column needed for an insert
    type Create: Changeset + Sync;
    /// Payload whose set fields are applied on update
    type Update: Changeset + Sync;

    /// Human-readable name used in logs and errors, e.g. "lesson series"
    const NAME: &'static str;
    /// Table written to
    const TABLE: &'static str;
    /// Alias of `TABLE` inside `SELECT`
    const ALIAS: &'static str;
    /// SELECT with all joins needed to hydrate relations, without WHERE
    const SELECT: &'static str;
    /// ORDER BY clause for listings
    const ORDER_BY: &'static str;

    /// Builds the entity (and its relations) from one row of `SELECT`
    fn from_row(row: &SqliteRow) -> Result<Self, AppError>;
}

/// Data access for one entity type over a shared pool
pub struct Repository<'p, E> {
    pool: &'p DbPool,
    entity: PhantomData<E>,
}

impl<'p, E: Entity> Repository<'p, E> {
    pub fn new(pool: &'p DbPool) -> Self {
        Self {
            pool,
            entity: PhantomData,
        }
    }

    /// Lists records in the entity's order, relations attached
    pub async fn list(&self, listing: Listing) -> Result<Vec<E>, AppError> {
        log::debug!("Listing {} records ({})", E::NAME, listing);

        let sql = match listing {
            Listing::ActiveOnly => format!(
                "{} WHERE {}.is_active = 1 ORDER BY {}",
                E::SELECT,
                E::ALIAS,
                E::ORDER_BY
            ),
            Listing::All => format!("{} ORDER BY {}", E::SELECT, E::ORDER_BY),
        };

        let rows = sqlx::query(&sql)
            .fetch_all(self.pool)
            .await
            .map_err(|e| storage_error(format!("Failed to list {}", E::NAME), e))?;

        rows.iter().map(E::from_row).collect()
    }

    /// Fetches one record by id, active or not
    pub async fn get(&self, id: E::Id) -> Result<Option<E>, AppError> {
        let sql = format!("{} WHERE {}.id = ?", E::SELECT, E::ALIAS);
        let raw: i64 = id.into();

        let row = sqlx::query(&sql)
            .bind(raw)
            .fetch_optional(self.pool)
            .await
            .map_err(|e| storage_error(format!("Failed to fetch {}", E::NAME), e))?;

        row.as_ref().map(E::from_row).transpose()
    }

    /// Inserts a record and returns it as stored
    pub async fn create(&self, data: &E::Create) -> Result<E, AppError> {
        let changes = data.changes();

        let mut builder = QueryBuilder::<Sqlite>::new(format!("INSERT INTO {} (", E::TABLE));
        for (index, change) in changes.iter().enumerate() {
            if index > 0 {
                builder.push(", ");
            }
            builder.push(change.column);
        }
        builder.push(") VALUES (");
        for (index, change) in changes.into_iter().enumerate() {
            if index > 0 {
                builder.push(", ");
            }
            push_value(&mut builder, change.value);
        }
        builder.push(")");

        let result = self.write(&mut builder, "create").await?;
        let id = E::Id::from(result.last_insert_rowid());
        log::debug!("Created {} {}", E::NAME, id);

        self.get(id)
            .await?
            .ok_or_else(|| AppError::not_found(E::NAME, id))
    }

    /// Applies the set fields of `data`
    ///
    /// Returns `None` when no record has this id. An empty payload writes
    /// nothing and returns the current record.
    pub async fn update(&self, id: E::Id, data: &E::Update) -> Result<Option<E>, AppError> {
        let changes = data.changes();
        if changes.is_empty() {
            return self.get(id).await;
        }

        let mut builder = QueryBuilder::<Sqlite>::new(format!("UPDATE {} SET ", E::TABLE));
        for (index, change) in changes.into_iter().enumerate() {
            if index > 0 {
                builder.push(", ");
            }
            builder.push(change.column).push(" = ");
            push_value(&mut builder, change.value);
        }
        let raw: i64 = id.into();
        builder.push(" WHERE id = ").push_bind(raw);

        let result = self.write(&mut builder, "update").await?;
        if result.rows_affected() == 0 {
            log::debug!("No {} with id {} to update", E::NAME, id);
            return Ok(None);
        }
        log::debug!("Updated {} {}", E::NAME, id);

        self.get(id)
            .await?
            .ok_or_else(|| AppError::not_found(E::NAME, id))
            .map(Some)
    }

    /// Soft-deletes a record
    ///
    /// Returns false when no record has this id. Deleting an inactive record
    /// again still returns true.
    pub async fn delete(&self, id: E::Id) -> Result<bool, AppError> {
        let found = self.set_active(id, false).await?;
        log::debug!("Soft delete of {} {}: found = {}", E::NAME, id, found);
        Ok(found)
    }

    /// Reverses a soft delete; false when no record has this id
    pub async fn restore(&self, id: E::Id) -> Result<bool, AppError> {
        let found = self.set_active(id, true).await?;
        log::debug!("Restore of {} {}: found = {}", E::NAME, id, found);
        Ok(found)
    }

    async fn set_active(&self, id: E::Id, is_active: bool) -> Result<bool, AppError> {
        let mut builder = QueryBuilder::<Sqlite>::new(format!(
            "UPDATE {} SET is_active = ",
            E::TABLE
        ));
        let raw: i64 = id.into();
        builder
            .push_bind(i64::from(is_active))
            .push(" WHERE id = ")
            .push_bind(raw);

        let operation = if is_active { "restore" } else { "delete" };
        let result = self.write(&mut builder, operation).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Executes one statement in its own committed transaction
    async fn write(
        &self,
        builder: &mut QueryBuilder<'_, Sqlite>,
        operation: &str,
    ) -> Result<SqliteQueryResult, AppError> {
        let context = |e: sqlx::Error| {
            let detail = e.to_string();
            let err = storage_error(format!("Failed to {} {}", operation, E::NAME), e);
            if err.is_retryable() {
                log::warn!("{}: {}", err, detail);
            } else {
                log::error!("{}: {}", err, detail);
            }
            err
        };

        let mut tx = self.pool.begin().await.map_err(context)?;
        let result = builder.build().execute(&mut *tx).await.map_err(context)?;
        tx.commit().await.map_err(context)?;

        Ok(result)
    }
}

const SQLITE_BUSY: i32 = 5;
const SQLITE_LOCKED: i32 = 6;
const SQLITE_CONSTRAINT: i32 = 19;

/// Classifies a driver error so callers can tell contention from bad writes
///
/// SQLite reports extended result codes; the low byte is the primary code.
pub(crate) fn storage_error(message: String, err: sqlx::Error) -> AppError {
    let (locked, constraint) = match &err {
        sqlx::Error::Database(db) => {
            let primary = db
                .code()
                .and_then(|code| code.parse::<i32>().ok())
                .map(|code| code & 0xff);
            (
                matches!(primary, Some(SQLITE_BUSY | SQLITE_LOCKED)),
                !matches!(db.kind(), ErrorKind::Other) || primary == Some(SQLITE_CONSTRAINT),
            )
        }
        _ => (false, false),
    };

    let source: Option<Box<dyn std::error::Error + Send + Sync>> = Some(Box::new(err));
    if locked {
        AppError::DatabaseLocked {
            operation: message,
            source,
        }
    } else if constraint {
        AppError::ConstraintViolation { message, source }
    } else {
        AppError::DatabaseError { message, source }
    }
}

fn push_value(builder: &mut QueryBuilder<'_, Sqlite>, value: FieldValue) {
    match value {
        FieldValue::Integer(v) => builder.push_bind(v),
        FieldValue::OptionalInteger(v) => builder.push_bind(v),
        FieldValue::Text(v) => builder.push_bind(v),
        FieldValue::Bool(v) => builder.push_bind(i64::from(v)),
    };
}
