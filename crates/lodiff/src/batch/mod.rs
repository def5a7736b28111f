//! Batch comparison of baseline and candidate dump directories.
//!
//! Each document is compared independently, so documents run in parallel on
//! a scoped rayon pool. A fatal error in one document (unreadable or
//! malformed dump) is folded into that document's report and does not stop
//! the batch.

mod discovery;
mod result;

use std::path::{Path, PathBuf};
use std::time::Instant;

use lodiff_compare::{compare_or_report, CompareOptions};
use rayon::prelude::*;
use thiserror::Error;

pub use discovery::{discover_documents, Document};
pub use result::{BatchSummary, DocumentResult, DocumentStatus};

/// Configuration for a batch run.
#[derive(Clone, Debug)]
pub struct BatchConfig {
    pub options: CompareOptions,
    /// Only compare documents whose name contains this substring.
    pub filter: Option<String>,
    /// Compare documents in parallel.
    pub parallel: bool,
    /// Print passing documents too.
    pub verbose: bool,
    /// Print one JSON object per document instead of text.
    pub json: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            options: CompareOptions::default(),
            filter: None,
            parallel: true,
            verbose: false,
            json: false,
        }
    }
}

/// A directory to compare does not exist.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("Can not find layout folder: {}", .0.display())]
    MissingBaseline(PathBuf),
    #[error("Can not find temporary layout folder: {}", .0.display())]
    MissingCandidate(PathBuf),
}

/// Compare every document of `baseline_dir` against `candidate_dir`.
pub fn run_batch(
    baseline_dir: &Path,
    candidate_dir: &Path,
    config: &BatchConfig,
) -> Result<BatchSummary, BatchError> {
    if !baseline_dir.is_dir() {
        return Err(BatchError::MissingBaseline(baseline_dir.to_path_buf()));
    }
    if !candidate_dir.is_dir() {
        return Err(BatchError::MissingCandidate(candidate_dir.to_path_buf()));
    }

    let documents = discover_documents(baseline_dir, candidate_dir, config.filter.as_deref());
    tracing::debug!(documents = documents.len(), "discovered documents");

    let start = Instant::now();
    let results = if config.parallel {
        run_parallel(&documents, config.options)
    } else {
        run_sequential(&documents, config.options)
    };

    let mut summary = BatchSummary::new();
    for result in results {
        summary.add(result);
    }
    summary.duration = start.elapsed();
    Ok(summary)
}

fn run_sequential(documents: &[Document], options: CompareOptions) -> Vec<DocumentResult> {
    documents
        .iter()
        .map(|doc| compare_document(doc, &options))
        .collect()
}

/// Run on a scoped pool; falls back to sequential if the pool cannot be built.
fn run_parallel(documents: &[Document], options: CompareOptions) -> Vec<DocumentResult> {
    rayon::ThreadPoolBuilder::new()
        .stack_size(8 * 1024 * 1024)
        .build_scoped(rayon::ThreadBuilder::run, |pool| {
            pool.install(|| {
                documents
                    .par_iter()
                    .map(|doc| compare_document(doc, &options))
                    .collect::<Vec<_>>()
            })
        })
        .unwrap_or_else(|e| {
            tracing::warn!("failed to create thread pool ({e}), running sequentially");
            run_sequential(documents, options)
        })
}

fn compare_document(doc: &Document, options: &CompareOptions) -> DocumentResult {
    let _span = tracing::debug_span!("document", name = %doc.name).entered();

    if !doc.candidate.is_file() {
        return DocumentResult::missing(
            doc.name.clone(),
            format!(
                "Can not find saved xml layout file: {}",
                doc.candidate.display()
            ),
        );
    }

    let comparison = compare_or_report(&doc.baseline, &doc.candidate, options);
    tracing::debug!(
        equal = comparison.equal,
        flags = %comparison.flags,
        "compared"
    );
    DocumentResult::from_comparison(doc.name.clone(), &comparison)
}
