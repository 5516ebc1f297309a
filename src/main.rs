// Lead Deduplication CLI - Load a JSON batch, dedupe, report
// All file and console I/O lives here; the engine itself does none

use anyhow::{bail, Context, Result};
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use lead_dedup::{DedupResult, DeduplicationEngine, LeadBatch};

fn main() -> Result<()> {
    let input_path = env::args()
        .nth(1)
        .context("usage: lead-dedup <leads.json>")?;
    run(Path::new(&input_path))
}

fn run(input: &Path) -> Result<()> {
    let raw = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    if raw.trim().is_empty() {
        bail!("empty file: {}", input.display());
    }

    // Malformed JSON or an unparseable entryDate string fails here, at the
    // boundary; the engine only sees parsed timestamps or explicit absence.
    let batch: LeadBatch = serde_json::from_str(&raw)
        .with_context(|| format!("bad JSON in {}", input.display()))?;
    if batch.leads.is_empty() {
        println!("No leads found");
        return Ok(());
    }

    let result = DeduplicationEngine::new().deduplicate(batch.leads);
    let report = render_report(&result)?;
    print!("{report}");

    let log_path = log_file_path(input);
    fs::write(&log_path, &report)
        .with_context(|| format!("failed to write {}", log_path.display()))?;
    println!("\nLogs written to: {}", log_path.display());

    Ok(())
}

fn render_report(result: &DedupResult) -> Result<String> {
    let survivors = LeadBatch {
        leads: result.survivors.clone(),
    };
    let pretty = serde_json::to_string_pretty(&survivors)?;

    let mut out = String::new();
    writeln!(out, "------- DEDUPED JSON -------")?;
    writeln!(out, "{pretty}")?;
    writeln!(out, "\n------- CHANGE LOG -------")?;
    for entry in &result.log {
        write!(out, "{entry}")?;
        writeln!(out, "-----------------------------")?;
    }
    if !result.invalid.is_empty() {
        writeln!(out, "\n------- INVALID LEADS -------")?;
        for report in &result.invalid {
            writeln!(out, "{report}")?;
        }
    }
    Ok(out)
}

/// Timestamped log file placed next to the input.
fn log_file_path(input: &Path) -> PathBuf {
    let stamp = chrono::Local::now().format("%Y-%m-%d");
    let name = format!("dedup_log{stamp}.txt");
    match input.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(name),
        _ => PathBuf::from(name),
    }
}
