//! CLI constants, the global verbosity level, and the display macro.
//!
//! The verbosity level is a process-wide atomic so every layer can gate
//! its stderr output without threading a context struct through the call
//! graph.  Semantics:
//!
//! | level | meaning |
//! |-------|----------------------------|
//! | 0     | completely silent |
//! | 1     | errors only |
//! | 2     | normal output (default) |
//! | 3     | extra informational output |
//! | 4     | verbose / diagnostic |

use std::sync::atomic::{AtomicU32, Ordering};

// ── Identity strings ────────────────────────────────────────────────────────
/// Program name, shown in the version banner and usage text.
pub const PROGRAM_NAME: &str = "stunpack";

// ── Verbosity level ──────────────────────────────────────────────────────────

/// Process-wide verbosity level; see the module docs for semantics.
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

/// Returns the current verbosity level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the verbosity level.  Values above 4 are accepted but have no
/// additional effect.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed)
}

// ── Output macro ─────────────────────────────────────────────────────────────

/// Write a formatted message to **stderr** if the current verbosity level
/// is at least `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn program_name_constant() {
        assert_eq!(PROGRAM_NAME, "stunpack");
    }

    #[test]
    fn display_level_is_readable() {
        // Mutation is exercised by the CLI parser tests; this global is
        // shared across threads, so only read it here.
        let _ = display_level();
    }
}
