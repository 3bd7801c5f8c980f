//! Postgres helpers shared by the storage services.
//!
//! Classifies driver errors into the two sentinel conditions the services
//! branch on, and builds the small SQL fragments every store repeats. This
//! crate never opens connections; it only looks at errors and builds strings.

#![cfg_attr(test, allow(clippy::unwrap_used))]

use thiserror::Error;

/// Schema used to bundle tables not belonging to a customer app.
pub const META_NAMESPACE: &str = "sg";

/// `chrono` format string used to store and extract timestamps reproducibly.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f UTC";

/// SQLSTATE class 23: integrity constraint violation, unique index.
const CODE_DUPLICATE_KEY_VIOLATION: &str = "23505";

/// SQLSTATE class 42: the target relation does not exist.
const CODE_RELATION_NOT_FOUND: &str = "42P01";

const CLAUSE_SEPARATOR: &str = "\nAND ";

/// Storage-layer error after classification.
///
/// The two sentinel variants are the conditions callers branch on; every
/// other driver error passes through unchanged.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The attempted write violates a unique constraint on a table.
    #[error("entity not unique")]
    NotUnique,

    /// The target relation is not present yet.
    #[error("relation not found")]
    RelationNotFound,

    /// Any other database error, passed through unchanged.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Whether this error is the unique-constraint sentinel.
    #[must_use]
    pub fn is_not_unique(&self) -> bool {
        matches!(self, Self::NotUnique)
    }

    /// Whether this error is the missing-relation sentinel.
    #[must_use]
    pub fn is_relation_not_found(&self) -> bool {
        matches!(self, Self::RelationNotFound)
    }
}

/// Classify a driver error into the storage sentinels.
///
/// Maps SQLSTATE `23505` to [`StoreError::NotUnique`] and `42P01` to
/// [`StoreError::RelationNotFound`]; all other errors pass through as
/// [`StoreError::Database`].
#[must_use]
pub fn wrap_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(ref db) = err {
        match db.code().as_deref() {
            Some(CODE_DUPLICATE_KEY_VIOLATION) => return StoreError::NotUnique,
            Some(CODE_RELATION_NOT_FOUND) => return StoreError::RelationNotFound,
            _ => {}
        }
    }

    StoreError::Database(err)
}

/// Assemble a list of SQL clauses into a WHERE statement.
#[must_use]
pub fn clauses_to_where(clauses: &[String]) -> String {
    format!("WHERE\n{}", clauses.join(CLAUSE_SEPARATOR))
}

/// Wrap an index creation statement in a conditional block so repeated
/// deploys do not conflict.
///
/// `CREATE INDEX IF NOT EXISTS` needs Postgres 9.5; this guard covers older
/// servers. `query` is the fully rendered index creation statement, without
/// a trailing semicolon.
#[must_use]
pub fn guard_index(namespace: &str, index: &str, query: &str) -> String {
    format!(
        "DO $$
BEGIN
IF NOT EXISTS (
    SELECT 1 FROM pg_indexes WHERE schemaname = '{namespace}' AND indexname = '{index}'
) THEN
{query};
END IF;
END$$;"
    )
}

/// Build a connection URL for consistent local testing.
#[must_use]
pub fn test_url(user: &str) -> String {
    format!("postgres://{user}@127.0.0.1:5432/signet_test?sslmode=disable&connect_timeout=5")
}
