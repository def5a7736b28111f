//! `lodiff`: compare layout dumps produced by two layout engines.

use lodiff::batch::BatchConfig;
use lodiff::commands::{
    apply_compare_option, compare_files, lex_file, print_flags, run_batch_command,
};
use lodiff_compare::CompareOptions;

fn main() {
    lodiff::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "compare" => {
            let mut options = CompareOptions::default();
            let mut paths = Vec::new();
            for arg in args.iter().skip(2) {
                match apply_compare_option(&mut options, arg) {
                    Ok(true) => {}
                    Ok(false) if !arg.starts_with('-') => paths.push(arg.as_str()),
                    Ok(false) => {
                        eprintln!("error: unknown option '{arg}'");
                        std::process::exit(1);
                    }
                    Err(e) => {
                        eprintln!("error: {e}");
                        std::process::exit(1);
                    }
                }
            }

            let [baseline, candidate] = paths[..] else {
                eprintln!("Usage: lodiff compare <baseline.xml> <candidate.xml> [options]");
                std::process::exit(1);
            };
            std::process::exit(compare_files(baseline, candidate, &options));
        }
        "batch" => {
            let mut config = BatchConfig::default();
            let mut dirs = Vec::new();
            for arg in args.iter().skip(2) {
                if let Some(filter) = arg.strip_prefix("--filter=") {
                    config.filter = Some(filter.to_string());
                } else if arg == "--verbose" || arg == "-v" {
                    config.verbose = true;
                } else if arg == "--no-parallel" {
                    config.parallel = false;
                } else if arg == "--json" {
                    config.json = true;
                } else {
                    match apply_compare_option(&mut config.options, arg) {
                        Ok(true) => {}
                        Ok(false) if !arg.starts_with('-') => dirs.push(arg.as_str()),
                        Ok(false) => {
                            eprintln!("error: unknown option '{arg}'");
                            std::process::exit(1);
                        }
                        Err(e) => {
                            eprintln!("error: {e}");
                            std::process::exit(1);
                        }
                    }
                }
            }

            let [baseline_dir, candidate_dir] = dirs[..] else {
                eprintln!("Usage: lodiff batch <baseline-dir> <candidate-dir> [options]");
                std::process::exit(1);
            };
            std::process::exit(run_batch_command(baseline_dir, candidate_dir, &config));
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: lodiff lex <dump.xml>");
                std::process::exit(1);
            }
            std::process::exit(lex_file(&args[2]));
        }
        "flags" => {
            print_flags();
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("lodiff {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("lodiff: tolerance-aware comparison of layout dumps");
    println!();
    println!("Usage: lodiff <command> [options]");
    println!();
    println!("Commands:");
    println!("  compare <a.xml> <b.xml>   Compare a baseline dump with a candidate dump");
    println!("  batch <a-dir> <b-dir>     Compare every dump under two directories");
    println!("  lex <dump.xml>            Tokenize a dump and display tokens");
    println!("  flags                     Explain tolerance flag codes");
    println!("  help                      Show this help message");
    println!("  version                   Show version information");
    println!();
    println!("Compare options (compare and batch):");
    println!("  --priority=<n>      Highest priority to run: 0 page breaks,");
    println!("                      1 line breaks, 2 everything (default)");
    println!("  --fuzzy-dups        Fuzzy comparison of duplicate content");
    println!("  --ignore-nested     Skip positions nested deeper than one content level");
    println!();
    println!("Batch options:");
    println!("  --filter=<pattern>  Only compare documents whose name contains pattern");
    println!("  --verbose, -v       Also list passing documents");
    println!("  --no-parallel       Compare documents sequentially");
    println!("  --json              One JSON object per document");
    println!();
    println!("Exit codes:");
    println!("  0  all dumps equal");
    println!("  1  differences found (or usage error)");
    println!("  2  unreadable or malformed dump, or nothing to compare");
    println!();
    println!("Environment:");
    println!("  LODIFF_LOG          Log filter, e.g. lodiff_compare=debug");
    println!();
    println!("Examples:");
    println!("  lodiff compare base/doc.xml out/doc.xml");
    println!("  lodiff compare base/doc.xml out/doc.xml --priority=1");
    println!("  lodiff batch base/ out/ --filter=tables");
    println!("  lodiff batch base/ out/ --json > results.jsonl");
}
