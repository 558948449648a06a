use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};

use crate::error::CashflowError;

/// Storage format for transaction dates. Lexically sortable.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Direction of a category or transaction. Stored as `INCOME` / `EXPENSE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Income,
    Expense,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Income => "INCOME",
            Kind::Expense => "EXPENSE",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive: `income`, `Income` and `INCOME` all parse.
impl FromStr for Kind {
    type Err = CashflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "INCOME" => Ok(Kind::Income),
            "EXPENSE" => Ok(Kind::Expense),
            _ => Err(CashflowError::InvalidKind(s.to_string())),
        }
    }
}

impl ToSql for Kind {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Kind {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str()?.parse().map_err(|_| FromSqlError::InvalidType)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub kind: Kind,
}

/// A stored transaction joined with its category's display name.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: i64,
    pub date: NaiveDate,
    pub amount: f64,
    pub kind: Kind,
    pub category_id: i64,
    pub category_name: String,
}

impl Transaction {
    /// Amount with the sign implied by `kind`.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            Kind::Income => self.amount,
            Kind::Expense => -self.amount,
        }
    }
}

/// Income/expense totals for one `YYYY-MM` month. Derived, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub month: String,
    pub total_income: f64,
    pub total_expense: f64,
    pub net_profit: f64,
}

impl MonthlySummary {
    pub fn new(month: impl Into<String>, total_income: f64, total_expense: f64) -> Self {
        Self {
            month: month.into(),
            total_income,
            total_expense,
            net_profit: total_income - total_expense,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionPoint {
    pub month: u32,
    pub balance: f64,
}
