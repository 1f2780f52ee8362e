#![forbid(unsafe_code)]

//! Error type shared by the codecs and the backend dispatcher.
//!
//! Unknown key codes and mouse masks are *not* errors: they decode to
//! `Unknown` / `None`. Errors are reserved for contract violations
//! (a payload handed to the wrong family's codec), invalid caller input
//! and native call failures that must not be papered over.

use crate::attribute_codec::AbiFamily;
use crate::profile::BackendKind;

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, CursesError>;

/// Errors raised by codec and dispatch operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursesError {
    /// A value produced for one ABI family was handed to another family's codec.
    BackendMismatch {
        /// Family of the codec that received the value.
        expected: AbiFamily,
        /// Family that produced the value.
        found: AbiFamily,
    },
    /// A native payload whose layout does not belong to the receiving family.
    LayoutMismatch {
        /// Family the payload was handed to.
        expected: AbiFamily,
        /// C type of the payload (`cchar_t` or `chtype`).
        layout: &'static str,
    },
    /// A native curses call returned a failure code.
    NativeCall {
        /// Name of the native entry point.
        call: &'static str,
        /// Raw return code.
        code: i32,
    },
    /// The loaded library is not one of the supported ABI variants.
    UnsupportedBackend {
        /// Library family that was loaded.
        kind: BackendKind,
        /// What made it unsupported.
        detail: String,
    },
    /// Text that cannot form a complex character.
    InvalidCharacter(String),
}

impl CursesError {
    /// Build a [`CursesError::NativeCall`] for `call` returning `code`.
    #[must_use]
    pub const fn native(call: &'static str, code: i32) -> Self {
        Self::NativeCall { call, code }
    }
}

impl std::fmt::Display for CursesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BackendMismatch { expected, found } => {
                write!(f, "value encoded for {found} handed to {expected} codec")
            }
            Self::LayoutMismatch { expected, layout } => {
                write!(f, "{layout} payload handed to {expected} codec")
            }
            Self::NativeCall { call, code } => write!(f, "native call {call} failed ({code})"),
            Self::UnsupportedBackend { kind, detail } => {
                write!(f, "unsupported {kind} backend: {detail}")
            }
            Self::InvalidCharacter(msg) => write!(f, "invalid complex character: {msg}"),
        }
    }
}

impl std::error::Error for CursesError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_backend_mismatch() {
        let err = CursesError::BackendMismatch {
            expected: AbiFamily::NCurses,
            found: AbiFamily::PdCursesMod32,
        };
        assert_eq!(
            err.to_string(),
            "value encoded for PDCursesMod (32-bit chtype) handed to ncurses codec"
        );
    }

    #[test]
    fn display_layout_mismatch() {
        let err = CursesError::LayoutMismatch {
            expected: AbiFamily::NCurses,
            layout: "chtype",
        };
        assert_eq!(err.to_string(), "chtype payload handed to ncurses codec");
    }

    #[test]
    fn display_native_call() {
        assert_eq!(
            CursesError::native("getmouse", -1).to_string(),
            "native call getmouse failed (-1)"
        );
    }

    #[test]
    fn display_unsupported() {
        let err = CursesError::UnsupportedBackend {
            kind: BackendKind::PdCursesMod,
            detail: "64-bit chtype".into(),
        };
        assert_eq!(err.to_string(), "unsupported PDCursesMod backend: 64-bit chtype");
    }
}
