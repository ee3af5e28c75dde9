//! Command-line argument parsing for the `stunpack` binary.
//!
//! The entry points are [`parse_args`] (reads `std::env::args()`) and
//! [`parse_args_from`] (takes an explicit slice, suitable for
//! unit-testing).  Both return a [`ParsedArgs`] value.
//!
//! Short options may be aggregated (e.g. `-vq`).  A bare `--` marks the
//! end of options; all subsequent arguments are treated as file paths
//! regardless of whether they start with `-`.  Bad or unrecognised options
//! return an `Err` whose message begins with `"bad usage: "`.

use anyhow::anyhow;

use crate::cli::constants::{display_level, set_display_level};
use crate::cli::help::{print_usage_advanced, print_welcome_message};

// ── Public output type ─────────────────────────────────────────────────────────

/// Options and filenames produced by the argument parsing loop.
#[derive(Debug)]
pub struct ParsedArgs {
    /// Compressed source file.
    pub input_filename: Option<String>,
    /// Decompressed target file.
    pub output_filename: Option<String>,
    /// When `true`, a --version / --help flag was processed; the caller
    /// should exit 0 without performing any I/O operation.
    pub exit_early: bool,
    /// Program name (argv[0]), used by help functions.
    pub exe_name: String,
}

// ── Public API ─────────────────────────────────────────────────────────────────

/// Parses `std::env::args()`, skipping argv[0].
pub fn parse_args() -> anyhow::Result<ParsedArgs> {
    let exe_name = std::env::args()
        .next()
        .unwrap_or_else(|| crate::cli::constants::PROGRAM_NAME.to_owned());
    let argv: Vec<String> = std::env::args().skip(1).collect();
    parse_args_from(&exe_name, &argv)
}

/// Parses an explicit argument list.
///
/// `exe_name` is argv[0] (used for help text); `argv` is argv[1..].
/// Callable from tests without touching `std::env`.
pub fn parse_args_from(exe_name: &str, argv: &[String]) -> anyhow::Result<ParsedArgs> {
    let mut input_filename: Option<String> = None;
    let mut output_filename: Option<String> = None;
    let mut all_arguments_are_files = false;
    let mut exit_early = false;

    let mut arg_idx = 0usize;
    while arg_idx < argv.len() {
        let argument = &argv[arg_idx];
        arg_idx += 1;

        if argument.is_empty() {
            continue;
        }

        let bytes = argument.as_bytes();

        // ── Non-option path (or end-of-options forced by `--`) ────────────────
        if all_arguments_are_files || bytes[0] != b'-' || bytes.len() == 1 {
            if input_filename.is_none() {
                input_filename = Some(argument.clone());
            } else if output_filename.is_none() {
                output_filename = Some(argument.clone());
            } else {
                return Err(anyhow!(
                    "bad usage: unexpected extra argument: {}",
                    argument
                ));
            }
            continue;
        }

        // ── Long options (`--…`) ──────────────────────────────────────────────
        if bytes[1] == b'-' {
            match argument.as_str() {
                "--" => all_arguments_are_files = true,
                "--verbose" => set_display_level(display_level().saturating_add(1)),
                "--quiet" => set_display_level(display_level().saturating_sub(1)),
                "--version" => {
                    print_welcome_message();
                    exit_early = true;
                    break;
                }
                "--help" => {
                    print_usage_advanced(exe_name);
                    exit_early = true;
                    break;
                }
                _ => return Err(anyhow!("bad usage: unknown option: {}", argument)),
            }
            continue;
        }

        // ── Short options (possibly aggregated, e.g. `-vq`) ───────────────────
        for &flag in &bytes[1..] {
            match flag {
                b'V' => {
                    print_welcome_message();
                    exit_early = true;
                    break;
                }
                b'h' | b'H' => {
                    print_usage_advanced(exe_name);
                    exit_early = true;
                    break;
                }
                b'v' => set_display_level(display_level().saturating_add(1)),
                b'q' => set_display_level(display_level().saturating_sub(1)),
                other => {
                    return Err(anyhow!(
                        "bad usage: unrecognised option: -{}",
                        other as char
                    ));
                }
            }
        }
        if exit_early {
            break;
        }
    }

    Ok(ParsedArgs {
        input_filename,
        output_filename,
        exit_early,
        exe_name: exe_name.to_owned(),
    })
}

// ── Tests ──────────────────────────────────────────────────────────────────────
