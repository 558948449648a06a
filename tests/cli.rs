use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

const BIN_NAME: &str = "cashflow";

struct Sandbox {
    home: TempDir,
    db: PathBuf,
}

impl Sandbox {
    fn new() -> Self {
        let home = tempfile::tempdir().expect("temp home");
        let db = home.path().join("data").join("cashflow.db");
        Self { home, db }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
        cmd.env("HOME", self.home.path())
            .env("NO_COLOR", "1")
            .env("CLICOLOR", "0")
            .env_remove("RUST_LOG")
            .arg("--db")
            .arg(&self.db);
        cmd
    }

    fn run(&self, args: &[&str]) {
        self.cmd().args(args).assert().success();
    }
}

#[test]
fn init_creates_store_and_settings() {
    let sb = Sandbox::new();
    sb.cmd()
        .arg("init")
        .arg("--data-dir")
        .arg(sb.home.path().join("data"))
        .assert()
        .success()
        .stdout(contains("Initialized cashflow"));
    assert!(sb.db.exists());
    assert!(sb.home.path().join(".config/cashflow/settings.json").exists());
}

#[test]
fn category_add_list_delete() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["categories", "add", "Salary", "--kind", "income"])
        .assert()
        .success()
        .stdout(contains("Added category 1: Salary (INCOME)"));
    sb.run(&["categories", "add", "Rent", "--kind", "EXPENSE"]);

    sb.cmd()
        .args(["categories", "list"])
        .assert()
        .success()
        .stdout(contains("Salary").and(contains("Rent")).and(contains("EXPENSE")));

    sb.run(&["categories", "delete", "2"]);
    sb.cmd()
        .args(["categories", "list"])
        .assert()
        .success()
        .stdout(contains("Rent").not());
}

#[test]
fn duplicate_category_is_rejected() {
    let sb = Sandbox::new();
    sb.run(&["categories", "add", "Rent", "--kind", "expense"]);
    sb.cmd()
        .args(["categories", "add", "Rent", "--kind", "expense"])
        .assert()
        .failure()
        .stderr(contains("already exists"));
}

#[test]
fn invalid_kind_is_rejected() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["categories", "add", "Savings", "--kind", "transfer"])
        .assert()
        .failure()
        .stderr(contains("Invalid kind"));
}

#[test]
fn category_in_use_cannot_be_deleted() {
    let sb = Sandbox::new();
    sb.run(&["categories", "add", "Rent", "--kind", "expense"]);
    sb.run(&["tx", "add", "--amount", "900", "--category", "1", "--date", "2024-01-01"]);
    sb.cmd()
        .args(["categories", "delete", "1"])
        .assert()
        .failure()
        .stderr(contains("used by 1 transaction"));
    sb.cmd()
        .args(["categories", "list"])
        .assert()
        .success()
        .stdout(contains("Rent"));
}

#[test]
fn transactions_list_shows_balance() {
    let sb = Sandbox::new();
    sb.run(&["categories", "add", "Salary", "--kind", "income"]);
    sb.run(&["categories", "add", "Rent", "--kind", "expense"]);
    sb.run(&["tx", "add", "--amount", "3000", "--category", "1", "--date", "2024-06-01"]);
    sb.run(&["tx", "add", "--amount", "1200", "--category", "2", "--date", "2024-06-02"]);

    sb.cmd()
        .args(["tx", "list"])
        .assert()
        .success()
        .stdout(contains("2024-06-02").and(contains("Salary")).and(contains("Balance: ¥1,800")));

    sb.cmd()
        .arg("balance")
        .assert()
        .success()
        .stdout(contains("Balance: ¥1,800"));
}

#[test]
fn transaction_amount_is_validated() {
    let sb = Sandbox::new();
    sb.run(&["categories", "add", "Salary", "--kind", "income"]);
    for bad in ["0", "-5", "abc"] {
        sb.cmd()
            .args(["tx", "add", "--amount", bad, "--category", "1"])
            .assert()
            .failure()
            .stderr(contains("Invalid amount"));
    }
    sb.cmd()
        .args(["tx", "list"])
        .assert()
        .success()
        .stdout(contains("No transactions yet."));
}

#[test]
fn transaction_kind_must_match_category() {
    let sb = Sandbox::new();
    sb.run(&["categories", "add", "Rent", "--kind", "expense"]);
    sb.cmd()
        .args(["tx", "add", "--amount", "10", "--category", "1", "--kind", "income"])
        .assert()
        .failure()
        .stderr(contains("Category 'Rent' is EXPENSE"));
}

#[test]
fn transaction_with_unknown_category_fails() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["tx", "add", "--amount", "10", "--category", "9"])
        .assert()
        .failure()
        .stderr(contains("Unknown category: id 9"));
}

#[test]
fn delete_missing_transaction_fails() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["tx", "delete", "3"])
        .assert()
        .failure()
        .stderr(contains("Transaction not found: id 3"));
}

#[test]
fn summary_groups_by_month() {
    let sb = Sandbox::new();
    sb.run(&["categories", "add", "Salary", "--kind", "income"]);
    sb.run(&["categories", "add", "Rent", "--kind", "expense"]);
    sb.run(&["tx", "add", "--amount", "1000", "--category", "1", "--date", "2024-01-05"]);
    sb.run(&["tx", "add", "--amount", "500", "--category", "1", "--date", "2024-01-28"]);
    sb.run(&["tx", "add", "--amount", "300", "--category", "2", "--date", "2024-02-10"]);

    sb.cmd()
        .arg("summary")
        .assert()
        .success()
        .stdout(
            contains("2024-01")
                .and(contains("¥1,500"))
                .and(contains("2024-02"))
                .and(contains("-¥300")),
        );
}

#[test]
fn predict_without_history_reports_no_data() {
    let sb = Sandbox::new();
    sb.cmd()
        .arg("predict")
        .assert()
        .success()
        .stdout(contains("Not enough transaction data"));
}

#[test]
fn predict_projects_from_recent_average() {
    let sb = Sandbox::new();
    sb.run(&["categories", "add", "Salary", "--kind", "income"]);
    sb.run(&["tx", "add", "--amount", "100", "--category", "1", "--date", "2024-03-01"]);
    sb.run(&["tx", "add", "--amount", "100", "--category", "1", "--date", "2024-02-01"]);

    sb.cmd()
        .args(["predict", "--months", "12", "--initial-balance", "1000"])
        .assert()
        .success()
        .stdout(contains("12 months").and(contains("¥2,200")));
}

#[test]
fn predict_with_unsupported_horizon_shows_start_only() {
    let sb = Sandbox::new();
    sb.run(&["categories", "add", "Salary", "--kind", "income"]);
    sb.run(&["tx", "add", "--amount", "100", "--category", "1", "--date", "2024-03-01"]);

    sb.cmd()
        .args(["predict", "--months", "7", "--initial-balance", "500"])
        .assert()
        .success()
        .stdout(contains("0 months").and(contains("¥500")).and(contains("¥600").not()));
}

#[test]
fn predict_rejects_non_finite_initial_balance() {
    let sb = Sandbox::new();
    sb.run(&["categories", "add", "Salary", "--kind", "income"]);
    sb.run(&["tx", "add", "--amount", "100", "--category", "1", "--date", "2024-03-01"]);
    for bad in ["NaN", "inf"] {
        sb.cmd()
            .args(["predict", "--initial-balance", bad])
            .assert()
            .failure()
            .stderr(contains("Invalid amount"))
            .stdout(contains("Balance Projection").not());
    }
}

#[test]
fn predict_accepts_negative_initial_balance() {
    let sb = Sandbox::new();
    sb.run(&["categories", "add", "Salary", "--kind", "income"]);
    sb.run(&["tx", "add", "--amount", "100", "--category", "1", "--date", "2024-03-01"]);
    sb.cmd()
        .args(["predict", "--initial-balance", "-500"])
        .assert()
        .success()
        .stdout(contains("-¥500").and(contains("¥700")));
}

#[test]
fn verbose_flag_logs_store_operations() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["-v", "categories", "list"])
        .assert()
        .success()
        .stderr(contains("opened store"));
    sb.cmd()
        .args(["categories", "list"])
        .assert()
        .success()
        .stderr(contains("opened store").not());
}
