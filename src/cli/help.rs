//! Help, usage, and version text for the `stunpack` CLI.
//!
//! All text goes to stderr so a future pipe-friendly mode could keep
//! stdout clean.

use crate::config::RECOGNIZED_EXTENSIONS;

/// Prints the version banner.
pub fn print_welcome_message() {
    let bits = (std::mem::size_of::<*const ()>() * 8) as u32;
    eprintln!(
        "*** {} v{} {}-bit — Stunts / 4D Sports Driving data unpacker ***",
        super::constants::PROGRAM_NAME,
        crate::version_string(),
        bits
    );
}

/// Prints a brief usage summary.
pub fn print_usage(program: &str) {
    eprintln!("Usage : ");
    eprintln!("      {} [arg] SOURCE_FILE TARGET_FILE ", program);
    eprintln!();
    eprintln!("SOURCE_FILE : a compressed game data file ");
    eprintln!(
        "              (typically {}) ",
        RECOGNIZED_EXTENSIONS
            .map(|e| format!(".{e}"))
            .join(" ")
    );
    eprintln!("TARGET_FILE : where the decompressed data is written ");
    eprintln!("              (must not name the source file; created or truncated) ");
    eprintln!("Arguments : ");
    eprintln!(" -v     : verbose mode ");
    eprintln!(" -q     : suppress warnings; specify twice to suppress errors too ");
    eprintln!(" -V     : display version number and exit ");
    eprintln!(" -h     : display this help and exit ");
}

/// Prints the welcome banner followed by the usage summary.
pub fn print_usage_advanced(program: &str) {
    print_welcome_message();
    print_usage(program);
}
