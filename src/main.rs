mod categories;
mod cli;
mod db;
mod error;
mod fmt;
mod models;
mod projection;
mod reports;
mod settings;
mod transactions;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{CategoriesCommands, Cli, Commands, Context, TxCommands};

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("cashflow=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cashflow=warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = Context::new(cli.db);
    let result = match cli.command {
        Commands::Init { data_dir } => cli::init::run(ctx, data_dir),
        Commands::Categories { command } => match command {
            CategoriesCommands::Add { name, kind } => cli::categories::add(&ctx, &name, &kind),
            CategoriesCommands::List => cli::categories::list(&ctx),
            CategoriesCommands::Delete { id } => cli::categories::delete(&ctx, id),
        },
        Commands::Tx { command } => match command {
            TxCommands::Add {
                amount,
                category,
                date,
                kind,
            } => cli::transactions::add(&ctx, &amount, category, date.as_deref(), kind.as_deref()),
            TxCommands::List => cli::transactions::list(&ctx),
            TxCommands::Delete { id } => cli::transactions::delete(&ctx, id),
        },
        Commands::Summary => cli::report::summary(&ctx),
        Commands::Balance => cli::report::balance(&ctx),
        Commands::Predict {
            months,
            initial_balance,
        } => cli::predict::run(&ctx, months, initial_balance.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
