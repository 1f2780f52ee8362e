#![forbid(unsafe_code)]

//! Backend profile detection.
//!
//! A [`BackendProfile`] names the codec set used for one loaded native
//! library: the attribute layout ([`AbiFamily`]), the key-code table
//! ([`KeyTable`]), and the mouse mask scheme ([`MouseProtocol`]). It is
//! derived once from what the library reports about itself (its kind, its
//! version string, and the width of its `chtype`), then optionally adjusted
//! by a [`ProfileOverride`].
//!
//! # Detection rules
//!
//! | Library | Condition | Profile |
//! |---------|-----------|---------|
//! | ncurses | major ≥ 6 or unparsable version | ABI 6, `ModernV2` |
//! | ncurses | major 5 | ABI 5, `LegacyV1` |
//! | ncurses | major < 5 | unsupported |
//! | PDCurses | 32-bit `chtype` | `PdCursesLegacy` |
//! | PDCursesMod | 32-bit `chtype` | `PdCursesMod32` |
//!
//! Both PDCurses flavors use the literal mouse bits (`PdCursesModVariant`).
//!
//! # Environment overrides
//!
//! | Variable | Values |
//! |----------|--------|
//! | `POLYCURSES_NCURSES_ABI` | `5`, `6` |
//! | `POLYCURSES_MOUSE_VERSION` | `1`, `2`, `pdcurses` |
//!
//! Unrecognized values are ignored after a warning.

use std::env;
use std::fmt;

use crate::attribute_codec::AbiFamily;
use crate::error::{CursesError, Result};
use crate::key_table::KeyTable;
use crate::mouse::MouseProtocol;

/// Environment variable forcing the ncurses ABI.
pub const NCURSES_ABI_ENV: &str = "POLYCURSES_NCURSES_ABI";
/// Environment variable forcing the mouse mask scheme.
pub const MOUSE_VERSION_ENV: &str = "POLYCURSES_MOUSE_VERSION";

/// Which native library is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    NCurses,
    PdCurses,
    PdCursesMod,
}

impl BackendKind {
    /// Library name as used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NCurses => "ncurses",
            Self::PdCurses => "PDCurses",
            Self::PdCursesMod => "PDCursesMod",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// ncurses binary interface generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NCursesAbi {
    Abi5,
    Abi6,
}

impl NCursesAbi {
    /// Key table built for this ABI.
    #[must_use]
    pub const fn key_table(self) -> KeyTable {
        match self {
            Self::Abi5 => KeyTable::NCursesAbi5,
            Self::Abi6 => KeyTable::NCursesAbi6,
        }
    }

    /// Mouse scheme compiled into this ABI.
    #[must_use]
    pub const fn mouse(self) -> MouseProtocol {
        match self {
            Self::Abi5 => MouseProtocol::LegacyV1,
            Self::Abi6 => MouseProtocol::ModernV2,
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "5" => Some(Self::Abi5),
            "6" => Some(Self::Abi6),
            _ => None,
        }
    }
}

/// Codec selection for one native library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BackendProfile {
    /// Loaded library.
    pub kind: BackendKind,
    /// Attribute and complex-character layout.
    pub family: AbiFamily,
    /// Key code table for `wget_wch` results.
    pub key_table: KeyTable,
    /// Bit scheme of `MEVENT::bstate`.
    pub mouse: MouseProtocol,
}

impl BackendProfile {
    /// Profile of an ncurses build with the given ABI.
    #[must_use]
    pub const fn ncurses(abi: NCursesAbi) -> Self {
        Self {
            kind: BackendKind::NCurses,
            family: AbiFamily::NCurses,
            key_table: abi.key_table(),
            mouse: abi.mouse(),
        }
    }

    /// Profile of a 32-bit classic PDCurses build.
    #[must_use]
    pub const fn pdcurses() -> Self {
        Self {
            kind: BackendKind::PdCurses,
            family: AbiFamily::PdCursesLegacy,
            key_table: KeyTable::PdCurses,
            mouse: MouseProtocol::PdCursesModVariant,
        }
    }

    /// Profile of a 32-bit PDCursesMod build.
    #[must_use]
    pub const fn pdcursesmod() -> Self {
        Self {
            kind: BackendKind::PdCursesMod,
            family: AbiFamily::PdCursesMod32,
            key_table: KeyTable::PdCursesMod,
            mouse: MouseProtocol::PdCursesModVariant,
        }
    }

    /// Resolve the profile of a loaded library.
    ///
    /// `version` is what the library's version query returns
    /// (`curses_version()` for ncurses); `chtype_bits` is the width of its
    /// `chtype`.
    pub fn detect(kind: BackendKind, version: &str, chtype_bits: u32) -> Result<Self> {
        let profile = match kind {
            BackendKind::NCurses => Self::ncurses(ncurses_abi(version)?),
            BackendKind::PdCurses | BackendKind::PdCursesMod if chtype_bits != 32 => {
                return Err(CursesError::UnsupportedBackend {
                    kind,
                    detail: format!("{chtype_bits}-bit chtype"),
                });
            }
            BackendKind::PdCurses => Self::pdcurses(),
            BackendKind::PdCursesMod => Self::pdcursesmod(),
        };
        crate::debug!(
            kind = %profile.kind,
            family = %profile.family,
            key_table = ?profile.key_table,
            mouse = ?profile.mouse,
            version,
            "detected curses backend profile"
        );
        Ok(profile)
    }

    /// ncurses ABI of this profile, if it is an ncurses profile.
    #[must_use]
    pub const fn ncurses_abi(&self) -> Option<NCursesAbi> {
        match self.key_table {
            KeyTable::NCursesAbi5 => Some(NCursesAbi::Abi5),
            KeyTable::NCursesAbi6 => Some(NCursesAbi::Abi6),
            KeyTable::PdCurses | KeyTable::PdCursesMod => None,
        }
    }
}

/// Map an ncurses version string (`"ncurses 6.4.20221231"` or `"6.4"`) to
/// its ABI.
fn ncurses_abi(version: &str) -> Result<NCursesAbi> {
    let Some(major) = ncurses_major(version) else {
        crate::warn!(version, "unrecognized ncurses version, assuming ABI 6");
        return Ok(NCursesAbi::Abi6);
    };
    match major {
        0..=4 => Err(CursesError::UnsupportedBackend {
            kind: BackendKind::NCurses,
            detail: format!("version {version}"),
        }),
        5 => Ok(NCursesAbi::Abi5),
        _ => Ok(NCursesAbi::Abi6),
    }
}

fn ncurses_major(version: &str) -> Option<u32> {
    let version = version.trim();
    let number = version.strip_prefix("ncurses").unwrap_or(version).trim_start();
    let major: String = number.chars().take_while(char::is_ascii_digit).collect();
    major.parse().ok()
}

// ============================================================================
// Overrides
// ============================================================================

/// Adjustments applied on top of a detected profile.
///
/// `None` fields leave the detected value alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProfileOverride {
    /// Force the ncurses ABI (key table and matching mouse scheme). Ignored
    /// for PDCurses profiles.
    pub ncurses_abi: Option<NCursesAbi>,
    /// Force the mouse scheme. Applied after `ncurses_abi`.
    pub mouse: Option<MouseProtocol>,
}

/// Raw override inputs, captured separately from the process environment so
/// parsing can be tested without mutating it.
#[derive(Debug, Clone, Default)]
struct OverrideInputs {
    ncurses_abi: Option<String>,
    mouse_version: Option<String>,
}

impl OverrideInputs {
    fn from_env() -> Self {
        Self {
            ncurses_abi: env::var(NCURSES_ABI_ENV).ok(),
            mouse_version: env::var(MOUSE_VERSION_ENV).ok(),
        }
    }
}

impl ProfileOverride {
    /// Empty override.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ncurses_abi: None,
            mouse: None,
        }
    }

    /// Read `POLYCURSES_NCURSES_ABI` and `POLYCURSES_MOUSE_VERSION`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_inputs(&OverrideInputs::from_env())
    }

    fn from_inputs(inputs: &OverrideInputs) -> Self {
        let ncurses_abi = inputs.ncurses_abi.as_deref().and_then(|value| {
            let abi = NCursesAbi::parse(value);
            if abi.is_none() {
                crate::warn!(var = NCURSES_ABI_ENV, value, "ignoring invalid override");
            }
            abi
        });
        let mouse = inputs.mouse_version.as_deref().and_then(|value| {
            let mouse = parse_mouse_version(value);
            if mouse.is_none() {
                crate::warn!(var = MOUSE_VERSION_ENV, value, "ignoring invalid override");
            }
            mouse
        });
        Self { ncurses_abi, mouse }
    }

    // ── Builder Methods ────────────────────────────────────────────────

    /// Override the ncurses ABI.
    #[must_use]
    pub const fn ncurses_abi(mut self, value: Option<NCursesAbi>) -> Self {
        self.ncurses_abi = value;
        self
    }

    /// Override the mouse scheme.
    #[must_use]
    pub const fn mouse(mut self, value: Option<MouseProtocol>) -> Self {
        self.mouse = value;
        self
    }

    /// Whether no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.ncurses_abi.is_none() && self.mouse.is_none()
    }

    /// Apply this override on top of a detected profile.
    #[must_use]
    pub fn apply_to(&self, mut profile: BackendProfile) -> BackendProfile {
        if let Some(abi) = self.ncurses_abi {
            if profile.kind == BackendKind::NCurses {
                profile.key_table = abi.key_table();
                profile.mouse = abi.mouse();
            } else {
                crate::warn!(kind = %profile.kind, "ncurses ABI override ignored");
            }
        }
        if let Some(mouse) = self.mouse {
            profile.mouse = mouse;
        }
        profile
    }
}

fn parse_mouse_version(value: &str) -> Option<MouseProtocol> {
    let value = value.trim();
    match value {
        "1" => Some(MouseProtocol::LegacyV1),
        "2" => Some(MouseProtocol::ModernV2),
        _ if value.eq_ignore_ascii_case("pdcurses") => Some(MouseProtocol::PdCursesModVariant),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ncurses_6_is_abi6() {
        let p = BackendProfile::detect(BackendKind::NCurses, "ncurses 6.4.20221231", 32).unwrap();
        assert_eq!(p.family, AbiFamily::NCurses);
        assert_eq!(p.key_table, KeyTable::NCursesAbi6);
        assert_eq!(p.mouse, MouseProtocol::ModernV2);
        assert_eq!(p.ncurses_abi(), Some(NCursesAbi::Abi6));
    }

    #[test]
    fn ncurses_5_is_abi5() {
        let p = BackendProfile::detect(BackendKind::NCurses, "ncurses 5.9.20110404", 32).unwrap();
        assert_eq!(p.key_table, KeyTable::NCursesAbi5);
        assert_eq!(p.mouse, MouseProtocol::LegacyV1);
    }

    #[test]
    fn bare_version_number() {
        let p = BackendProfile::detect(BackendKind::NCurses, "5.7", 32).unwrap();
        assert_eq!(p.key_table, KeyTable::NCursesAbi5);
        let p = BackendProfile::detect(BackendKind::NCurses, " 6 ", 32).unwrap();
        assert_eq!(p.key_table, KeyTable::NCursesAbi6);
    }

    #[test]
    fn future_ncurses_is_abi6() {
        let p = BackendProfile::detect(BackendKind::NCurses, "ncurses 7.0", 32).unwrap();
        assert_eq!(p.key_table, KeyTable::NCursesAbi6);
    }

    #[test]
    fn unparsable_version_falls_back_to_abi6() {
        for version in ["", "ncurses", "garbage", "ncurses x.y"] {
            let p = BackendProfile::detect(BackendKind::NCurses, version, 32).unwrap();
            assert_eq!(p, BackendProfile::ncurses(NCursesAbi::Abi6), "{version:?}");
        }
    }

    #[test]
    fn ancient_ncurses_is_unsupported() {
        let err = BackendProfile::detect(BackendKind::NCurses, "ncurses 4.2", 32).unwrap_err();
        assert!(matches!(
            err,
            CursesError::UnsupportedBackend {
                kind: BackendKind::NCurses,
                ..
            }
        ));
    }

    #[test]
    fn pdcurses_flavors() {
        let p = BackendProfile::detect(BackendKind::PdCurses, "", 32).unwrap();
        assert_eq!(p.family, AbiFamily::PdCursesLegacy);
        assert_eq!(p.key_table, KeyTable::PdCurses);
        assert_eq!(p.mouse, MouseProtocol::PdCursesModVariant);
        assert_eq!(p.ncurses_abi(), None);

        let p = BackendProfile::detect(BackendKind::PdCursesMod, "4.4.0", 32).unwrap();
        assert_eq!(p.family, AbiFamily::PdCursesMod32);
        assert_eq!(p.key_table, KeyTable::PdCursesMod);
        assert_eq!(p.mouse, MouseProtocol::PdCursesModVariant);
    }

    #[test]
    fn wide_chtype_is_unsupported() {
        let err = BackendProfile::detect(BackendKind::PdCursesMod, "4.4.0", 64).unwrap_err();
        assert_eq!(err.to_string(), "unsupported PDCursesMod backend: 64-bit chtype");
        assert!(BackendProfile::detect(BackendKind::PdCurses, "", 16).is_err());
    }

    #[test]
    fn kind_names() {
        assert_eq!(BackendKind::NCurses.to_string(), "ncurses");
        assert_eq!(BackendKind::PdCurses.to_string(), "PDCurses");
        assert_eq!(BackendKind::PdCursesMod.to_string(), "PDCursesMod");
    }

    #[test]
    fn empty_override_is_identity() {
        let over = ProfileOverride::new();
        assert!(over.is_empty());
        assert_eq!(over, ProfileOverride::default());
        for p in [
            BackendProfile::ncurses(NCursesAbi::Abi5),
            BackendProfile::pdcurses(),
            BackendProfile::pdcursesmod(),
        ] {
            assert_eq!(over.apply_to(p), p);
        }
    }

    #[test]
    fn abi_override_switches_table_and_mouse() {
        let over = ProfileOverride::new().ncurses_abi(Some(NCursesAbi::Abi5));
        let p = over.apply_to(BackendProfile::ncurses(NCursesAbi::Abi6));
        assert_eq!(p, BackendProfile::ncurses(NCursesAbi::Abi5));
    }

    #[test]
    fn abi_override_ignored_for_pdcurses() {
        let over = ProfileOverride::new().ncurses_abi(Some(NCursesAbi::Abi5));
        assert_eq!(over.apply_to(BackendProfile::pdcurses()), BackendProfile::pdcurses());
    }

    #[test]
    fn mouse_override_applies_after_abi() {
        let over = ProfileOverride::new()
            .ncurses_abi(Some(NCursesAbi::Abi5))
            .mouse(Some(MouseProtocol::ModernV2));
        let p = over.apply_to(BackendProfile::ncurses(NCursesAbi::Abi6));
        assert_eq!(p.key_table, KeyTable::NCursesAbi5);
        assert_eq!(p.mouse, MouseProtocol::ModernV2);
    }

    #[test]
    fn override_from_inputs() {
        let inputs = OverrideInputs {
            ncurses_abi: Some("5".into()),
            mouse_version: Some("PDCurses".into()),
        };
        let over = ProfileOverride::from_inputs(&inputs);
        assert_eq!(over.ncurses_abi, Some(NCursesAbi::Abi5));
        assert_eq!(over.mouse, Some(MouseProtocol::PdCursesModVariant));
    }

    #[test]
    fn invalid_override_inputs_are_ignored() {
        let inputs = OverrideInputs {
            ncurses_abi: Some("7".into()),
            mouse_version: Some("3".into()),
        };
        assert!(ProfileOverride::from_inputs(&inputs).is_empty());
        assert!(ProfileOverride::from_inputs(&OverrideInputs::default()).is_empty());
    }

    #[test]
    fn mouse_version_values() {
        assert_eq!(parse_mouse_version("1"), Some(MouseProtocol::LegacyV1));
        assert_eq!(parse_mouse_version(" 2\n"), Some(MouseProtocol::ModernV2));
        assert_eq!(parse_mouse_version("pdcurses"), Some(MouseProtocol::PdCursesModVariant));
        assert_eq!(parse_mouse_version(""), None);
    }
}
