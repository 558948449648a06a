pub mod categories;
pub mod init;
pub mod predict;
pub mod report;
pub mod transactions;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rusqlite::Connection;

use crate::db::open_store;
use crate::error::{CashflowError, Result};
use crate::models::DATE_FORMAT;
use crate::settings::{load_settings, Settings};

#[derive(Parser)]
#[command(name = "cashflow", about = "Track income and expenses, review monthly totals, project your balance.")]
pub struct Cli {
    /// Use this database file instead of the one in the configured data directory
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Log store operations to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Choose a data directory and create the database.
    Init {
        /// Path for cashflow data (default: ~/Documents/cashflow)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Manage income and expense categories.
    Categories {
        #[command(subcommand)]
        command: CategoriesCommands,
    },
    /// Record, list and delete transactions.
    Tx {
        #[command(subcommand)]
        command: TxCommands,
    },
    /// Income, expense and net profit per month.
    Summary,
    /// Current balance across all transactions.
    Balance,
    /// Project the balance forward from the recent monthly average.
    Predict {
        /// Horizon in months: 12, 36 or 60
        #[arg(long, default_value = "12")]
        months: u32,
        /// Starting balance (default: current balance)
        #[arg(long = "initial-balance", allow_hyphen_values = true)]
        initial_balance: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum CategoriesCommands {
    /// Add a category.
    Add {
        /// Category name, e.g. 'Salary'
        name: String,
        /// income or expense
        #[arg(long)]
        kind: String,
    },
    /// List all categories.
    List,
    /// Delete a category that has no transactions.
    Delete {
        /// Category ID (shown in `cashflow categories list`)
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum TxCommands {
    /// Record a transaction.
    Add {
        /// Positive amount; the kind decides the sign
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
        /// Category ID (shown in `cashflow categories list`)
        #[arg(long)]
        category: i64,
        /// Date: YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
        /// income or expense (default: the category's kind)
        #[arg(long)]
        kind: Option<String>,
    },
    /// List all transactions and the current balance.
    List,
    /// Delete a transaction.
    Delete {
        /// Transaction ID (shown in `cashflow tx list`)
        id: i64,
    },
}

/// Resolved settings plus the store location for this invocation.
pub struct Context {
    pub settings: Settings,
    pub db_override: Option<PathBuf>,
}

impl Context {
    pub fn new(db_override: Option<PathBuf>) -> Self {
        Self {
            settings: load_settings(),
            db_override,
        }
    }

    pub fn db_path(&self) -> PathBuf {
        self.db_override
            .clone()
            .unwrap_or_else(|| self.settings.db_path())
    }

    pub fn connect(&self) -> Result<Connection> {
        open_store(&self.db_path(), self.settings.busy_timeout())
    }

    pub fn money(&self, val: f64) -> String {
        crate::fmt::money(val, &self.settings.currency_symbol)
    }

    pub fn signed_money(&self, val: f64) -> String {
        crate::fmt::signed_money(val, &self.settings.currency_symbol).to_string()
    }
}

/// Validate user-entered amount text: present, numeric, finite, above zero.
pub(crate) fn parse_amount(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CashflowError::MissingField("Amount"));
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(CashflowError::InvalidAmount(trimmed.to_string())),
    }
}

/// Validate a starting balance: numeric and finite. Negative balances are allowed.
pub(crate) fn parse_balance(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CashflowError::MissingField("Initial balance"));
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(CashflowError::InvalidAmount(trimmed.to_string())),
    }
}

/// Parse `YYYY-MM-DD`, defaulting to today's local date.
pub(crate) fn parse_date_opt(input: Option<&str>) -> Result<NaiveDate> {
    match input.map(str::trim) {
        None | Some("") => Ok(chrono::Local::now().date_naive()),
        Some(s) => NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map_err(|_| CashflowError::InvalidDate(s.to_string())),
    }
}
