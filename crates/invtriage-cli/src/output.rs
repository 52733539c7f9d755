//! Result files and console reports.

use std::fs;
use std::io::Write;
use std::path::Path;

use console::style;

use invtriage_core::{CategorySummary, OutputRecord};

/// Header of the tabular result file.
pub const CSV_HEADER: [&str; 3] = ["Filename", "Category", "Description"];

/// Write records as a pretty-printed JSON array.
pub fn write_json(path: &Path, records: &[OutputRecord]) -> anyhow::Result<()> {
    let content = serde_json::to_string_pretty(records)?;
    fs::write(path, content)?;
    Ok(())
}

/// Write records as CSV. `full_text` is left out.
pub fn write_csv(path: &Path, records: &[OutputRecord]) -> anyhow::Result<()> {
    let file = fs::File::create(path)?;
    write_csv_to(file, records)
}

/// Render records as a CSV string.
pub fn format_csv(records: &[OutputRecord]) -> anyhow::Result<String> {
    let mut buffer = Vec::new();
    write_csv_to(&mut buffer, records)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_csv_to<W: Write>(writer: W, records: &[OutputRecord]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;

    for record in records {
        let categories = record.categories.joined();
        wtr.write_record([
            record.filename.as_str(),
            categories.as_str(),
            record.description.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Plain text rendering of one record.
pub fn format_text(record: &OutputRecord) -> String {
    let mut output = String::new();

    output.push_str(&format!("File: {}\n", record.filename));
    output.push_str(&format!("Categories: {}\n", record.categories));
    output.push_str(&format!("Description: {}\n", record.description));

    output
}

/// Print the per-category counts.
pub fn print_summary(summary: &CategorySummary) {
    println!();
    println!("{}", "=".repeat(50));
    println!("{}", style("CATEGORIZATION SUMMARY").bold());
    println!("{}", "=".repeat(50));

    for (category, count) in summary.iter() {
        println!("{}: {} invoices", category, count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invtriage_core::Categories;
    use pretty_assertions::assert_eq;

    fn records() -> Vec<OutputRecord> {
        vec![
            OutputRecord {
                filename: "a.png".to_string(),
                categories: Categories::from(vec!["Utilities".to_string(), "Telecom".to_string()]),
                description: "Fiber, 1 Gbit".to_string(),
                full_text: "fiber, 1 gbit".to_string(),
            },
            OutputRecord {
                filename: "b.png".to_string(),
                categories: Categories::uncategorized(),
                description: String::new(),
                full_text: String::new(),
            },
        ]
    }

    #[test]
    fn test_format_csv() {
        let csv = format_csv(&records()).unwrap();
        assert_eq!(
            csv,
            "Filename,Category,Description\n\
             a.png,\"Utilities, Telecom\",\"Fiber, 1 Gbit\"\n\
             b.png,Uncategorized,\n"
        );
    }

    #[test]
    fn test_write_json_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_json(&path, &records()).unwrap();

        let loaded: Vec<OutputRecord> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded, records());
    }

    #[test]
    fn test_format_text() {
        let text = format_text(&records()[0]);
        assert!(text.contains("Categories: Utilities, Telecom"));
        assert!(text.contains("Description: Fiber, 1 Gbit"));
    }
}
