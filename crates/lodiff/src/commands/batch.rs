//! `lodiff batch`: compare every dump of a baseline directory against a
//! candidate directory and report per document.

use std::path::Path;

use lodiff_compare::flags_legend;

use crate::batch::{run_batch, BatchConfig, BatchSummary, DocumentResult, DocumentStatus};

/// Run a batch and print its results.
///
/// Exit code: 0 all equal, 1 failures or missing dumps, 2 nothing found or
/// a directory is missing.
pub fn run_batch_command(baseline_dir: &str, candidate_dir: &str, config: &BatchConfig) -> i32 {
    let summary = match run_batch(Path::new(baseline_dir), Path::new(candidate_dir), config) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };

    if config.json {
        print_json(&summary);
    } else {
        print_batch_summary(&summary, config.verbose);
    }
    summary.exit_code()
}

fn print_json(summary: &BatchSummary) {
    for document in &summary.documents {
        match serde_json::to_string(document) {
            Ok(line) => println!("{line}"),
            Err(e) => tracing::warn!(document = %document.name, "failed to serialize result: {e}"),
        }
    }
}

fn print_document(document: &DocumentResult, verbose: bool) {
    let flags = if document.flags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", document.flags)
    };
    match document.status {
        DocumentStatus::Passed => {
            if verbose {
                println!("  PASS: {}{flags}", document.name);
            }
        }
        DocumentStatus::Failed => {
            println!("  FAIL: {}{flags} - {}", document.name, document.report);
        }
        DocumentStatus::Missing => {
            println!("  MISSING: {} - {}", document.name, document.report);
        }
    }
}

fn print_batch_summary(summary: &BatchSummary, verbose: bool) {
    for document in &summary.documents {
        print_document(document, verbose);
    }

    println!();
    println!("Batch Summary:");
    println!(
        "  {} passed, {} failed, {} missing ({} total)",
        summary.passed,
        summary.failed,
        summary.missing,
        summary.total()
    );
    if summary.failed > 0 {
        let [pages, lines, geometry] = summary.failed_by_priority;
        println!("  page breaks: {pages}, line breaks: {lines}, geometry: {geometry}");
    }
    println!("  Completed in {:.2?}", summary.duration);

    if summary.flagged > 0 {
        println!();
        println!("{} documents with tolerated differences:", summary.flagged);
        println!("{}", flags_legend());
    }

    println!();
    if summary.has_failures() {
        println!("FAILED");
    } else if summary.total() == 0 {
        println!("NO DOCUMENTS FOUND");
    } else {
        println!("OK");
    }
}
