use crate::error::Result;
use crate::settings::{save_settings, shellexpand_path};

use super::Context;

pub fn run(mut ctx: Context, data_dir: Option<String>) -> Result<()> {
    if let Some(dir) = data_dir {
        ctx.settings.data_dir = shellexpand_path(&dir);
    }
    save_settings(&ctx.settings)?;

    std::fs::create_dir_all(&ctx.settings.data_dir)?;
    let db_path = ctx.db_path();
    ctx.connect()?;
    tracing::info!(db = %db_path.display(), "store initialised");

    println!("Initialized cashflow at {}", db_path.display());
    Ok(())
}
