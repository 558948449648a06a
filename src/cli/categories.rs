use comfy_table::{Cell, Table};

use crate::categories::CategoryRepository;
use crate::error::Result;
use crate::models::Kind;

use super::Context;

pub fn add(ctx: &Context, name: &str, kind: &str) -> Result<()> {
    let kind: Kind = kind.parse()?;
    let conn = ctx.connect()?;
    let category = CategoryRepository::new(&conn).add(name, kind)?;
    println!("Added category {}: {} ({})", category.id, category.name, category.kind);
    Ok(())
}

pub fn list(ctx: &Context) -> Result<()> {
    let conn = ctx.connect()?;
    let categories = CategoryRepository::new(&conn).list_all()?;

    if categories.is_empty() {
        println!("No categories yet. Add one with `cashflow categories add NAME --kind income|expense`.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Kind"]);
    for cat in categories {
        table.add_row(vec![
            Cell::new(cat.id),
            Cell::new(cat.name),
            Cell::new(cat.kind),
        ]);
    }
    println!("Categories\n{table}");
    Ok(())
}

pub fn delete(ctx: &Context, id: i64) -> Result<()> {
    let conn = ctx.connect()?;
    CategoryRepository::new(&conn).delete(id)?;
    println!("Deleted category {id}");
    Ok(())
}
