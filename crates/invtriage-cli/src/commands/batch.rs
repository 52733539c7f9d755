//! Batch command - categorize every invoice in a folder.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::Local;
use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use invtriage_core::models::config::TriageConfig;
use invtriage_core::{CategorySummary, Document, RecordAssembler};

use crate::output;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input folder or glob pattern
    #[arg(default_value = "invoices")]
    input: String,

    /// Category keyword table (overrides config)
    #[arg(short = 'k', long)]
    categories: Option<PathBuf>,

    /// Output directory (overrides config)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Skip the JSON result file
    #[arg(long)]
    no_json: bool,

    /// Skip the CSV result file
    #[arg(long)]
    no_csv: bool,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let mut config = super::load_config(config_path)?;
    if let Some(categories) = &args.categories {
        config.categories_file = categories.clone();
    }

    // Categories first: a bad table stops the run before any file is touched
    let assembler = RecordAssembler::from_config(&config)?;
    info!("Using {} categories", assembler.table().len());

    let files = collect_files(&args.input, &config)?;
    if files.is_empty() {
        anyhow::bail!("No matching files found for: {}", args.input);
    }

    println!(
        "{} Found {} invoices to process",
        style("ℹ").blue(),
        files.len()
    );

    let reader = super::build_reader(&config, &files)?;

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("=>-"),
    );

    let mut documents: Vec<Document> = Vec::with_capacity(files.len());
    for (idx, path) in files.iter().enumerate() {
        debug!("Processing {}/{}: {}", idx + 1, files.len(), path.display());
        let document = reader.read(path);
        pb.set_message(document.id.clone());
        pb.inc(1);
        documents.push(document);
    }
    pb.finish_and_clear();

    let records = assembler.assemble_all(&documents);
    for record in &records {
        println!("  {} → {}", record.filename, record.categories.primary());
    }

    // Write outputs
    let results_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| config.output.results_dir.clone());
    fs::create_dir_all(&results_dir)?;

    let stem = format!(
        "{}_{}",
        config.output.file_prefix,
        Local::now().format(&config.output.timestamp_format)
    );

    let mut written = Vec::new();
    if config.output.write_json && !args.no_json {
        let path = results_dir.join(format!("{}.json", stem));
        output::write_json(&path, &records)?;
        written.push(path);
    }
    if config.output.write_csv && !args.no_csv {
        let path = results_dir.join(format!("{}.csv", stem));
        output::write_csv(&path, &records)?;
        written.push(path);
    }

    output::print_summary(&CategorySummary::from_records(&records));

    if !written.is_empty() {
        println!();
        println!("Results saved to:");
        for path in &written {
            println!("  - {}", path.display());
        }
    }

    info!("Processed {} files in {:?}", records.len(), start.elapsed());

    Ok(())
}

/// Expand a folder or glob into matching files, sorted by path.
fn collect_files(input: &str, config: &TriageConfig) -> anyhow::Result<Vec<PathBuf>> {
    let path = Path::new(input);

    let mut files: Vec<PathBuf> = if path.is_dir() {
        fs::read_dir(path)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_file())
            .collect()
    } else {
        glob(input)?.filter_map(|r| r.ok()).collect()
    };

    files.retain(|p| config.input.accepts(p));
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_collect_files_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.png", "a.JPG", "notes.md", "c.txt"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        fs::create_dir(dir.path().join("nested.png")).unwrap();

        let files = collect_files(dir.path().to_str().unwrap(), &TriageConfig::default()).unwrap();
        let names: Vec<&str> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();

        assert_eq!(names, vec!["a.JPG", "b.png", "c.txt"]);
    }

    #[test]
    fn test_collect_files_from_glob() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["x.png", "y.png", "z.txt"] {
            fs::write(dir.path().join(name), "").unwrap();
        }

        let pattern = format!("{}/*.png", dir.path().display());
        let files = collect_files(&pattern, &TriageConfig::default()).unwrap();
        assert_eq!(files.len(), 2);
    }
}
