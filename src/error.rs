use thiserror::Error;

use crate::models::Kind;

#[derive(Error, Debug)]
pub enum CashflowError {
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid amount: {0} (must be a number greater than zero)")]
    InvalidAmount(String),

    #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid kind: {0} (must be INCOME or EXPENSE)")]
    InvalidKind(String),

    #[error("Category name already exists: {0}")]
    DuplicateCategory(String),

    #[error("Cannot delete category {id}: it is used by {transactions} transaction(s)")]
    CategoryInUse { id: i64, transactions: i64 },

    #[error("Unknown category: id {0}")]
    UnknownCategory(i64),

    #[error("Category '{category}' is {expected}, but the transaction was entered as {given}")]
    KindMismatch {
        category: String,
        expected: Kind,
        given: Kind,
    },

    #[error("{entity} not found: id {id}")]
    NotFound { entity: &'static str, id: i64 },
}

pub type Result<T> = std::result::Result<T, CashflowError>;

/// Which SQLite constraint rejected a write, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    Unique,
    ForeignKey,
    Check,
}

/// Classify a rusqlite error by the constraint that raised it.
pub fn constraint_of(err: &rusqlite::Error) -> Option<Constraint> {
    use rusqlite::ffi;

    match err {
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::ConstraintViolation => {
            match e.extended_code {
                ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY => Some(Constraint::Unique),
                ffi::SQLITE_CONSTRAINT_FOREIGNKEY => Some(Constraint::ForeignKey),
                ffi::SQLITE_CONSTRAINT_CHECK => Some(Constraint::Check),
                _ => None,
            }
        }
        _ => None,
    }
}
