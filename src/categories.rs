use rusqlite::{Connection, Row};

use crate::error::{constraint_of, CashflowError, Constraint, Result};
use crate::models::{Category, Kind};

/// CRUD over the `categories` table.
///
/// Categories are never edited in place; they are added, listed, and deleted
/// only while no transaction refers to them.
pub struct CategoryRepository<'a> {
    conn: &'a Connection,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// All categories ordered by kind, then name.
    pub fn list_all(&self) -> Result<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, type FROM categories ORDER BY type, name")?;
        let categories = stmt
            .query_map([], map_row)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .inspect_err(|e| tracing::warn!(error = %e, "listing categories failed"))?;
        Ok(categories)
    }

    pub fn get(&self, id: i64) -> Result<Category> {
        self.conn
            .query_row("SELECT id, name, type FROM categories WHERE id = ?1", [id], map_row)
            .map_err(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => CashflowError::NotFound { entity: "Category", id },
                other => CashflowError::Db(other),
            })
    }

    /// Insert a category. The name is trimmed; it must be non-empty and unused.
    pub fn add(&self, name: &str, kind: Kind) -> Result<Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CashflowError::MissingField("Category name"));
        }
        self.conn
            .execute(
                "INSERT INTO categories (name, type) VALUES (?1, ?2)",
                rusqlite::params![name, kind],
            )
            .map_err(|e| {
                tracing::warn!(name, %kind, error = %e, "adding category failed");
                match constraint_of(&e) {
                    Some(Constraint::Unique) => CashflowError::DuplicateCategory(name.to_string()),
                    Some(Constraint::Check) => CashflowError::InvalidKind(kind.to_string()),
                    _ => CashflowError::Db(e),
                }
            })?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, name, %kind, "added category");
        Ok(Category {
            id,
            name: name.to_string(),
            kind,
        })
    }

    /// Delete by id. Refused while any transaction still references the category.
    pub fn delete(&self, id: i64) -> Result<()> {
        let deleted = match self.conn.execute("DELETE FROM categories WHERE id = ?1", [id]) {
            Ok(n) => n,
            Err(e) if constraint_of(&e) == Some(Constraint::ForeignKey) => {
                let transactions = self.usage_count(id)?;
                tracing::warn!(id, transactions, "category delete blocked by transactions");
                return Err(CashflowError::CategoryInUse { id, transactions });
            }
            Err(e) => {
                tracing::warn!(id, error = %e, "deleting category failed");
                return Err(e.into());
            }
        };
        if deleted == 0 {
            return Err(CashflowError::NotFound { entity: "Category", id });
        }
        tracing::debug!(id, "deleted category");
        Ok(())
    }

    /// Number of transactions filed under the category.
    pub fn usage_count(&self, id: i64) -> Result<i64> {
        let count = self.conn.query_row(
            "SELECT COUNT(*) FROM transactions WHERE category_id = ?1",
            [id],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}

fn map_row(row: &Row) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
        kind: row.get(2)?,
    })
}
