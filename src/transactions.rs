use chrono::NaiveDate;
use rusqlite::{Connection, Row};

use crate::categories::CategoryRepository;
use crate::error::{constraint_of, CashflowError, Constraint, Result};
use crate::models::{Kind, MonthlySummary, Transaction, DATE_FORMAT};

/// CRUD over the `transactions` table plus the per-month aggregate query.
pub struct TransactionRepository<'a> {
    conn: &'a Connection,
}

impl<'a> TransactionRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Every transaction with its category name, newest date first. Same-day
    /// entries come most-recently-added first.
    pub fn list_all(&self) -> Result<Vec<Transaction>> {
        let mut stmt = self.conn.prepare(
            "SELECT t.id, t.date, t.amount, t.type, t.category_id, c.name \
             FROM transactions t JOIN categories c ON t.category_id = c.id \
             ORDER BY t.date DESC, t.id DESC",
        )?;
        let rows = stmt
            .query_map([], map_row)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .inspect_err(|e| tracing::warn!(error = %e, "listing transactions failed"))?;
        Ok(rows)
    }

    /// Insert a transaction and return its id.
    ///
    /// `amount` is stored as given; callers validate it is positive. The kind
    /// must agree with the category's kind.
    pub fn add(&self, date: NaiveDate, amount: f64, kind: Kind, category_id: i64) -> Result<i64> {
        let category = CategoryRepository::new(self.conn)
            .get(category_id)
            .map_err(|e| match e {
                CashflowError::NotFound { .. } => CashflowError::UnknownCategory(category_id),
                other => other,
            })?;
        if category.kind != kind {
            tracing::warn!(category_id, expected = %category.kind, given = %kind, "transaction kind mismatch");
            return Err(CashflowError::KindMismatch {
                category: category.name,
                expected: category.kind,
                given: kind,
            });
        }

        let date_str = date.format(DATE_FORMAT).to_string();
        self.conn
            .execute(
                "INSERT INTO transactions (date, amount, type, category_id) VALUES (?1, ?2, ?3, ?4)",
                rusqlite::params![date_str, amount, kind, category_id],
            )
            .map_err(|e| {
                tracing::warn!(date = %date_str, amount, category_id, error = %e, "adding transaction failed");
                match constraint_of(&e) {
                    Some(Constraint::ForeignKey) => CashflowError::UnknownCategory(category_id),
                    Some(Constraint::Check) => CashflowError::InvalidKind(kind.to_string()),
                    _ => CashflowError::Db(e),
                }
            })?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, date = %date_str, amount, %kind, category_id, "added transaction");
        Ok(id)
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        let deleted = self
            .conn
            .execute("DELETE FROM transactions WHERE id = ?1", [id])
            .inspect_err(|e| tracing::warn!(id, error = %e, "deleting transaction failed"))?;
        if deleted == 0 {
            return Err(CashflowError::NotFound { entity: "Transaction", id });
        }
        tracing::debug!(id, "deleted transaction");
        Ok(())
    }

    /// Income and expense totals per `YYYY-MM`, most recent month first.
    /// A month with no entries of one kind reports zero for that side.
    /// Unlike `list_all` this reads `transactions` alone, so rows without a
    /// category still count toward the monthly totals.
    pub fn monthly_summaries(&self) -> Result<Vec<MonthlySummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT substr(date, 1, 7) AS month, \
             SUM(CASE WHEN type = 'INCOME' THEN amount ELSE 0.0 END) AS total_income, \
             SUM(CASE WHEN type = 'EXPENSE' THEN amount ELSE 0.0 END) AS total_expense \
             FROM transactions \
             GROUP BY month \
             ORDER BY month DESC",
        )?;
        let summaries = stmt
            .query_map([], |row| {
                Ok(MonthlySummary::new(
                    row.get::<_, String>(0)?,
                    row.get(1)?,
                    row.get(2)?,
                ))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()
            .inspect_err(|e| tracing::warn!(error = %e, "monthly summary query failed"))?;
        Ok(summaries)
    }
}

fn map_row(row: &Row) -> rusqlite::Result<Transaction> {
    let raw_date: String = row.get(1)?;
    let date = NaiveDate::parse_from_str(&raw_date, DATE_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, Box::new(e))
    })?;
    Ok(Transaction {
        id: row.get(0)?,
        date,
        amount: row.get(2)?,
        kind: row.get(3)?,
        category_id: row.get(4)?,
        category_name: row.get(5)?,
    })
}
