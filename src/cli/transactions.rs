use comfy_table::{Cell, Table};

use crate::categories::CategoryRepository;
use crate::error::{CashflowError, Result};
use crate::models::{Kind, DATE_FORMAT};
use crate::reports::current_balance;
use crate::transactions::TransactionRepository;

use super::{parse_amount, parse_date_opt, Context};

pub fn add(
    ctx: &Context,
    amount: &str,
    category_id: i64,
    date: Option<&str>,
    kind: Option<&str>,
) -> Result<()> {
    let amount = parse_amount(amount)?;
    let date = parse_date_opt(date)?;
    let conn = ctx.connect()?;

    let kind: Kind = match kind {
        Some(k) => k.parse()?,
        None => CategoryRepository::new(&conn)
            .get(category_id)
            .map_err(|e| match e {
                CashflowError::NotFound { .. } => CashflowError::UnknownCategory(category_id),
                other => other,
            })?
            .kind,
    };

    let id = TransactionRepository::new(&conn).add(date, amount, kind, category_id)?;
    println!(
        "Added transaction {id}: {} {} {}",
        date.format(DATE_FORMAT),
        kind,
        ctx.money(amount)
    );
    Ok(())
}

pub fn list(ctx: &Context) -> Result<()> {
    let conn = ctx.connect()?;
    let rows = TransactionRepository::new(&conn).list_all()?;

    if rows.is_empty() {
        println!("No transactions yet.");
    } else {
        let mut table = Table::new();
        table.set_header(vec!["ID", "Date", "Category", "Kind", "Amount"]);
        for t in &rows {
            table.add_row(vec![
                Cell::new(t.id),
                Cell::new(t.date.format(DATE_FORMAT)),
                Cell::new(&t.category_name),
                Cell::new(t.kind),
                Cell::new(ctx.signed_money(t.signed_amount())),
            ]);
        }
        println!("Transactions ({})\n{table}", rows.len());
    }

    println!("Balance: {}", ctx.signed_money(current_balance(&rows)));
    Ok(())
}

pub fn delete(ctx: &Context, id: i64) -> Result<()> {
    let conn = ctx.connect()?;
    TransactionRepository::new(&conn).delete(id)?;
    println!("Deleted transaction {id}");
    Ok(())
}
