use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::reports::current_balance;
use crate::transactions::TransactionRepository;

use super::Context;

pub fn summary(ctx: &Context) -> Result<()> {
    let conn = ctx.connect()?;
    let months = TransactionRepository::new(&conn).monthly_summaries()?;

    if months.is_empty() {
        println!("No transactions yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Month", "Income", "Expense", "Net"]);
    for m in &months {
        table.add_row(vec![
            Cell::new(&m.month),
            Cell::new(ctx.money(m.total_income)),
            Cell::new(ctx.money(m.total_expense)),
            Cell::new(ctx.signed_money(m.net_profit)),
        ]);
    }
    println!("Monthly Summary\n{table}");
    Ok(())
}

pub fn balance(ctx: &Context) -> Result<()> {
    let conn = ctx.connect()?;
    let rows = TransactionRepository::new(&conn).list_all()?;
    println!("Balance: {}", ctx.signed_money(current_balance(&rows)));
    Ok(())
}
