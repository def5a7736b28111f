//! Command handlers for the `lodiff` CLI.
//!
//! Each handler prints its own output and returns the process exit code;
//! `main` only parses arguments.

mod batch;
mod compare;
mod debug;

use lodiff_compare::{flags_legend, CompareOptions, ParsePriorityError};

pub use batch::run_batch_command;
pub use compare::compare_files;
pub use debug::lex_file;

/// Apply one comparison option (`--priority=N`, `--fuzzy-dups`,
/// `--ignore-nested`) to `options`.
///
/// Returns `Ok(false)` if `arg` is not a comparison option.
pub fn apply_compare_option(
    options: &mut CompareOptions,
    arg: &str,
) -> Result<bool, ParsePriorityError> {
    if let Some(level) = arg.strip_prefix("--priority=") {
        options.max_priority = level.parse()?;
    } else if arg == "--fuzzy-dups" {
        options.fuzzy_duplicate_compare = true;
    } else if arg == "--ignore-nested" {
        options.ignore_nested_positions = true;
    } else {
        return Ok(false);
    }
    Ok(true)
}

/// Print the tolerance flag legend.
pub fn print_flags() {
    println!("Tolerance flags:");
    println!("{}", flags_legend());
}
