use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::projection::{average_recent_net_profit, horizon_months, project_balance, DEFAULT_WINDOW};
use crate::reports::current_balance;
use crate::transactions::TransactionRepository;

use super::{parse_balance, Context};

pub fn run(ctx: &Context, months: u32, initial_balance: Option<&str>) -> Result<()> {
    let initial_balance = initial_balance.map(parse_balance).transpose()?;
    let conn = ctx.connect()?;
    let repo = TransactionRepository::new(&conn);

    let summaries = repo.monthly_summaries()?;
    let Some(average) = average_recent_net_profit(&summaries, DEFAULT_WINDOW) else {
        println!("Not enough transaction data to make a projection.");
        return Ok(());
    };

    let initial = match initial_balance {
        Some(b) => b,
        None => current_balance(&repo.list_all()?),
    };
    let horizon = horizon_months(months);
    let points = project_balance(initial, average, horizon);

    let mut table = Table::new();
    table.set_header(vec!["Month", "Projected Balance"]);
    for p in &points {
        table.add_row(vec![Cell::new(p.month), Cell::new(ctx.signed_money(p.balance))]);
    }
    println!(
        "Balance Projection ({horizon} months, average monthly net profit {})\n{table}",
        ctx.signed_money(average)
    );
    Ok(())
}
