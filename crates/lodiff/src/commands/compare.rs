//! `lodiff compare`: compare two dump files.

use std::path::Path;

use lodiff_compare::{compare, CompareOptions};

/// Compare `baseline` against `candidate` and print the verdict.
///
/// Exit code: 0 equal, 1 different, 2 unreadable or malformed dump.
pub fn compare_files(baseline: &str, candidate: &str, options: &CompareOptions) -> i32 {
    let result = match compare(Path::new(baseline), Path::new(candidate), options) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };

    if result.equal {
        println!("PASS {candidate}");
    } else {
        println!("FAIL {candidate}");
        println!("  {}", result.report);
    }
    if !result.flags.is_empty() {
        println!("  flags: {}", result.flags);
    }
    let [baseline_engines, candidate_engines] = &result.engines;
    if baseline_engines != candidate_engines {
        println!(
            "  engines: {}/{} vs {}/{}",
            baseline_engines.page_formatter,
            baseline_engines.line_formatter,
            candidate_engines.page_formatter,
            candidate_engines.line_formatter
        );
    }

    i32::from(!result.equal)
}
