//! Binary entry point for the `stunpack` command-line tool.
//!
//! Dispatch is deliberately small: parse the arguments, validate the two
//! positional filenames, and hand off to [`stunpack::io`].  Exit status
//! follows the usual convention: 0 on success, 1 on any failure.

use stunpack::cli::args::{parse_args, ParsedArgs};
use stunpack::cli::help::print_usage;
use stunpack::displaylevel;
use stunpack::io::decompress_filename;

/// Executes the operation selected by argument parsing.
///
/// Returns the process exit code (0 = success, 1 = error).
fn run(args: ParsedArgs) -> i32 {
    let (source, target) = match (args.input_filename, args.output_filename) {
        (Some(source), Some(target)) => (source, target),
        _ => {
            print_usage(&args.exe_name);
            return 1;
        }
    };

    // No path canonicalization: case-blind string equality, enough to
    // catch the mistake on the case-insensitive filesystems these files
    // come from.
    if source.eq_ignore_ascii_case(&target) {
        displaylevel!(
            1,
            "The target file cannot be the same as the source file \n"
        );
        return 1;
    }

    match decompress_filename(&source, &target) {
        Ok(_) => 0,
        Err(_) => 1, // the io layer already reported the failing stage
    }
}

fn main() {
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("stunpack: {}", e);
            std::process::exit(1);
        }
    };

    // Help / version flags set exit_early; nothing further to do.
    if args.exit_early {
        std::process::exit(0);
    }

    std::process::exit(run(args));
}
