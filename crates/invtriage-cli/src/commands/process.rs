//! Process command - categorize a single invoice file.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use invtriage_core::{OutputRecord, RecordAssembler};

use crate::output;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (image, PDF or text)
    #[arg(required = true)]
    input: PathBuf,

    /// Category keyword table (overrides config)
    #[arg(short = 'k', long)]
    categories: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut config = super::load_config(config_path)?;
    if let Some(categories) = &args.categories {
        config.categories_file = categories.clone();
    }

    let assembler = RecordAssembler::from_config(&config)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let reader = super::build_reader(&config, std::slice::from_ref(&args.input))?;
    let document = reader.read(&args.input);
    let record = assembler.assemble(&document.id, &document.text);

    let rendered = format_record(&record, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &rendered)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        print!("{}", rendered);
    }

    Ok(())
}

fn format_record(record: &OutputRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(record)?)),
        OutputFormat::Csv => output::format_csv(std::slice::from_ref(record)),
        OutputFormat::Text => Ok(output::format_text(record)),
    }
}
