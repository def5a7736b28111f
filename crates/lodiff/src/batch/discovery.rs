//! Dump discovery.
//!
//! Every `.xml` file under the baseline directory is a document; its
//! candidate is the file at the same relative path under the candidate
//! directory.

use std::fs;
use std::path::{Path, PathBuf};

/// One baseline dump and where its candidate should be.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    /// Path relative to the baseline directory, `/`-separated.
    pub name: String,
    pub baseline: PathBuf,
    pub candidate: PathBuf,
}

/// Discover documents, sorted by name.
///
/// Hidden files and directories are skipped. With a `filter`, only names
/// containing it are kept.
pub fn discover_documents(
    baseline_dir: &Path,
    candidate_dir: &Path,
    filter: Option<&str>,
) -> Vec<Document> {
    let mut relative = Vec::new();
    discover_recursive(baseline_dir, Path::new(""), &mut relative);
    relative.sort();

    relative
        .into_iter()
        .map(|rel| Document {
            name: rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/"),
            baseline: baseline_dir.join(&rel),
            candidate: candidate_dir.join(&rel),
        })
        .filter(|doc| filter.map_or(true, |f| doc.name.contains(f)))
        .collect()
}

fn discover_recursive(dir: &Path, prefix: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let file_name = entry.file_name();

        // Skip hidden files and directories
        if file_name.to_string_lossy().starts_with('.') {
            continue;
        }

        let rel = prefix.join(&file_name);
        if path.is_dir() {
            discover_recursive(&path, &rel, files);
        } else if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"))
        {
            files.push(rel);
        }
    }
}
