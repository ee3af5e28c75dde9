//! Compile-time configuration constants for the `stunpack` programs layer.
//!
//! The container format itself carries no magic number, so the file
//! extension is the only up-front hint that a file is compressed game
//! data.  The list below covers the data files the game ships in
//! compressed form; it is advisory only — decoding proceeds for any
//! extension.

/// File extensions the game uses for compressed data files.
pub const RECOGNIZED_EXTENSIONS: [&str; 7] =
    ["cmn", "cod", "dif", "p3s", "pes", "pre", "pvs"];

/// Returns `true` when `path` ends in one of the recognized compressed-data
/// extensions (ASCII case-insensitive, matching the DOS filesystem's
/// indifference to case).
pub fn is_recognized_extension(path: &str) -> bool {
    match path.rsplit_once('.') {
        Some((_, ext)) => RECOGNIZED_EXTENSIONS
            .iter()
            .any(|known| ext.eq_ignore_ascii_case(known)),
        None => false,
    }
}
