//! Categories command - inspect the keyword table.

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use console::style;

use invtriage_core::CategoryTable;

/// Arguments for the categories command.
#[derive(Args)]
pub struct CategoriesArgs {
    #[command(subcommand)]
    command: CategoriesCommand,
}

#[derive(Subcommand)]
enum CategoriesCommand {
    /// Validate the table and list its categories in match order
    Show {
        /// Category keyword table (overrides config)
        #[arg(short = 'k', long)]
        categories: Option<PathBuf>,
    },
}

pub async fn run(args: CategoriesArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    match args.command {
        CategoriesCommand::Show { categories } => {
            let config = super::load_config(config_path)?;
            let path = categories.unwrap_or(config.categories_file);
            show(&CategoryTable::from_file(&path)?, &path)
        }
    }
}

fn show(table: &CategoryTable, path: &Path) -> anyhow::Result<()> {
    println!(
        "{} {} categories in {}",
        style("✓").green(),
        table.len(),
        path.display()
    );
    println!();

    for (idx, category) in table.iter().enumerate() {
        println!(
            "{:>3}. {} ({})",
            idx + 1,
            style(category.name()).bold(),
            category.keywords().join(", ")
        );
    }

    Ok(())
}
