#![forbid(unsafe_code)]

//! Core: backend-independent curses model and the per-ABI codecs that
//! translate it to and from ncurses and PDCurses native encodings.

pub mod attribute;
pub mod attribute_codec;
pub mod complex_char;
pub mod error;
pub mod event;
pub mod key_code;
pub mod key_table;
pub mod logging;
pub mod mouse;
pub mod profile;

pub use error::{CursesError, Result};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, trace, warn};

/// Native "did the call fail" predicate: every curses entry point reports
/// failure with a negative return code (`ERR == -1`).
#[inline]
#[must_use]
pub const fn failed(code: i32) -> bool {
    code < 0
}
