#![forbid(unsafe_code)]

//! Backend dispatch and event assembly over a loaded native curses library.
//!
//! The loader that opens the shared library and resolves its symbols lives
//! outside this crate. It hands over two views of the library:
//!
//! - [`NativeLibrary`], queried once when a [`CursesBackend`] is built, to
//!   learn which library it is and how it was compiled.
//! - [`NativeInput`], the per-session input calls (`wtimeout`, `wget_wch`,
//!   `getmouse`) the event assembler drives.
//!
//! [`CursesBackend`] turns those answers into a cached
//! [`BackendProfile`] and uses it to normalize every native read into a
//! canonical [`Event`].
//!
//! # Example
//!
//! ```ignore
//! let backend = CursesBackend::new(library)?;
//! while let Some(event) = backend.read_event(&mut input, 100)? {
//!     handle(event);
//! }
//! ```

use std::sync::OnceLock;

use polycurses_core::attribute::{ColorPair, VideoAttribute};
use polycurses_core::attribute_codec::{self, AbiFamily, PackedAttribute};
use polycurses_core::complex_char::ComplexCharCodec;
use polycurses_core::event::{Event, LogicalKey};
use polycurses_core::key_code::{KeyCodeType, classify};
use polycurses_core::key_table::{KeyMapping, KeyTable};
use polycurses_core::mouse::{MouseProtocol, MouseRawMask};
use polycurses_core::profile::{BackendKind, BackendProfile, ProfileOverride};
use polycurses_core::{CursesError, Result};

// ============================================================================
// Native seams
// ============================================================================

/// What a loaded library reports about itself.
pub trait NativeLibrary {
    /// Which library flavor was loaded.
    fn kind(&self) -> BackendKind;

    /// The library's version string (`curses_version()` for ncurses).
    fn version(&self) -> String;

    /// Width of the library's `chtype` in bits.
    fn chtype_bits(&self) -> u32;
}

/// Input entry points of one native session.
///
/// Methods follow the native convention: a negative return is failure.
pub trait NativeInput {
    /// `wtimeout(stdscr, timeout_ms)`. Negative blocks, zero polls.
    fn set_timeout(&mut self, timeout_ms: i32);

    /// `wget_wch(stdscr, wch)`: returns `OK`, `KEY_CODE_YES` or `ERR`.
    fn read_wide(&mut self, wch: &mut u32) -> i32;

    /// `getmouse(event)`.
    fn get_mouse(&mut self, event: &mut RawMouseEvent) -> i32;
}

/// Fields of the native `MEVENT`, as copied out by the loader.
///
/// Not a layout mirror: `mmask_t` is `unsigned long` on LP64 ABI 5 builds
/// and 32 bits elsewhere. Loaders with a wide mask pass it through
/// [`narrow_mask`](polycurses_core::mouse::narrow_mask).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawMouseEvent {
    /// Device id.
    pub id: i16,
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
    /// Unused by every supported library.
    pub z: i32,
    /// Button and modifier state.
    pub bstate: MouseRawMask,
}

// ============================================================================
// Backend
// ============================================================================

/// Codec dispatcher for one loaded native library.
///
/// The profile is detected on first use and cached for the lifetime of the
/// backend, so every caller (on any thread) sees the same codec set.
#[derive(Debug)]
pub struct CursesBackend<L> {
    library: L,
    overrides: ProfileOverride,
    profile: OnceLock<Result<BackendProfile>>,
}

impl<L: NativeLibrary> CursesBackend<L> {
    /// Build a backend, applying environment overrides
    /// (`POLYCURSES_NCURSES_ABI`, `POLYCURSES_MOUSE_VERSION`).
    ///
    /// Fails when the library is not a supported variant.
    pub fn new(library: L) -> Result<Self> {
        Self::with_overrides(library, ProfileOverride::from_env())
    }

    /// Build a backend with explicit overrides instead of the environment.
    pub fn with_overrides(library: L, overrides: ProfileOverride) -> Result<Self> {
        let backend = Self {
            library,
            overrides,
            profile: OnceLock::new(),
        };
        backend.profile()?;
        Ok(backend)
    }

    /// The detected profile.
    pub fn profile(&self) -> Result<BackendProfile> {
        self.profile
            .get_or_init(|| {
                let detected = BackendProfile::detect(
                    self.library.kind(),
                    &self.library.version(),
                    self.library.chtype_bits(),
                )?;
                Ok(self.overrides.apply_to(detected))
            })
            .clone()
    }

    /// The loaded library.
    #[must_use]
    pub fn library(&self) -> &L {
        &self.library
    }

    /// Attribute layout family.
    pub fn family(&self) -> Result<AbiFamily> {
        Ok(self.profile()?.family)
    }

    /// Key-code table.
    pub fn key_table(&self) -> Result<KeyTable> {
        Ok(self.profile()?.key_table)
    }

    /// Mouse mask scheme.
    pub fn mouse_protocol(&self) -> Result<MouseProtocol> {
        Ok(self.profile()?.mouse)
    }

    /// Complex-character codec for this library.
    pub fn complex_chars(&self) -> Result<ComplexCharCodec> {
        Ok(ComplexCharCodec::new(self.family()?))
    }

    /// Pack attributes and a color pair for this library.
    pub fn encode_attributes(
        &self,
        attrs: VideoAttribute,
        pair: ColorPair,
    ) -> Result<PackedAttribute> {
        Ok(attribute_codec::encode(self.family()?, attrs, pair))
    }

    /// Unpack a value produced by this library's encoder.
    pub fn decode_attributes(
        &self,
        packed: PackedAttribute,
    ) -> Result<(VideoAttribute, ColorPair)> {
        attribute_codec::decode_as(self.family()?, packed)
    }

    /// Wait up to `timeout_ms` for one input event.
    ///
    /// Returns `Ok(None)` on timeout, read failure, or input that carries no
    /// event (an invalid scalar value, a mouse mask with no button or
    /// position bits).
    pub fn read_event<I: NativeInput + ?Sized>(
        &self,
        input: &mut I,
        timeout_ms: i32,
    ) -> Result<Option<Event>> {
        let profile = self.profile()?;
        input.set_timeout(timeout_ms);

        let mut raw = 0u32;
        let status = input.read_wide(&mut raw);

        match classify(profile.key_table, status, raw) {
            KeyCodeType::Unknown => Ok(None),
            KeyCodeType::Character => {
                let event = char::from_u32(raw).map(Event::char);
                if event.is_none() {
                    polycurses_core::trace!(raw, "dropping invalid scalar value");
                }
                Ok(event)
            }
            KeyCodeType::Key => {
                let mapping = profile.key_table.decode(raw);
                if !mapping.is_known() {
                    polycurses_core::trace!(raw, table = ?profile.key_table, "unknown key code");
                }
                Ok(Some(key_event(mapping)))
            }
            KeyCodeType::Mouse => read_mouse(input, profile.mouse),
            KeyCodeType::Resize => Ok(Some(Event::Resize)),
        }
    }
}

fn key_event(mapping: KeyMapping) -> Event {
    match mapping.key {
        LogicalKey::Character => Event::Char {
            text: mapping.ch.to_string(),
            modifiers: mapping.modifiers,
        },
        key => Event::key(key, mapping.modifiers),
    }
}

fn read_mouse<I: NativeInput + ?Sized>(
    input: &mut I,
    protocol: MouseProtocol,
) -> Result<Option<Event>> {
    let mut raw = RawMouseEvent::default();
    let code = input.get_mouse(&mut raw);
    if polycurses_core::failed(code) {
        polycurses_core::warn!(code, "getmouse failed after KEY_MOUSE");
        return Err(CursesError::native("getmouse", code));
    }

    if let Some(action) = protocol.parse(raw.bstate) {
        return Ok(Some(Event::Mouse {
            x: raw.x,
            y: raw.y,
            button: action.button,
            state: action.state,
            modifiers: action.modifiers,
        }));
    }
    if protocol.reports_position(raw.bstate) {
        return Ok(Some(Event::MouseMove {
            x: raw.x,
            y: raw.y,
            modifiers: protocol.modifiers(raw.bstate),
        }));
    }
    polycurses_core::trace!(bstate = raw.bstate, "mouse mask carries no event");
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polycurses_core::event::{ModifierKey, MouseButton, MouseButtonState};
    use polycurses_core::key_table::{ncurses, pdcurses};
    use polycurses_core::profile::NCursesAbi;
    use std::collections::VecDeque;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    struct FakeLibrary {
        kind: BackendKind,
        version: &'static str,
        chtype_bits: u32,
        queries: AtomicUsize,
    }

    impl FakeLibrary {
        fn new(kind: BackendKind, version: &'static str, chtype_bits: u32) -> Self {
            Self {
                kind,
                version,
                chtype_bits,
                queries: AtomicUsize::new(0),
            }
        }
    }

    impl NativeLibrary for FakeLibrary {
        fn kind(&self) -> BackendKind {
            self.queries.fetch_add(1, Ordering::SeqCst);
            self.kind
        }

        fn version(&self) -> String {
            self.version.to_string()
        }

        fn chtype_bits(&self) -> u32 {
            self.chtype_bits
        }
    }

    #[derive(Default)]
    struct ScriptedInput {
        reads: VecDeque<(i32, u32)>,
        mice: VecDeque<(i32, RawMouseEvent)>,
        timeouts: Vec<i32>,
    }

    impl ScriptedInput {
        fn key(mut self, status: i32, raw: u32) -> Self {
            self.reads.push_back((status, raw));
            self
        }

        fn mouse(mut self, code: i32, event: RawMouseEvent) -> Self {
            self.mice.push_back((code, event));
            self
        }
    }

    impl NativeInput for ScriptedInput {
        fn set_timeout(&mut self, timeout_ms: i32) {
            self.timeouts.push(timeout_ms);
        }

        fn read_wide(&mut self, wch: &mut u32) -> i32 {
            match self.reads.pop_front() {
                Some((status, raw)) => {
                    *wch = raw;
                    status
                }
                None => -1,
            }
        }

        fn get_mouse(&mut self, event: &mut RawMouseEvent) -> i32 {
            match self.mice.pop_front() {
                Some((code, raw)) => {
                    *event = raw;
                    code
                }
                None => -1,
            }
        }
    }

    const OK: i32 = 0;
    const NC_YES: i32 = ncurses::KEY_CODE_YES as i32;
    const PDC_YES: i32 = pdcurses::KEY_CODE_YES as i32;

    fn ncurses6() -> CursesBackend<FakeLibrary> {
        CursesBackend::with_overrides(
            FakeLibrary::new(BackendKind::NCurses, "ncurses 6.4.20221231", 32),
            ProfileOverride::new(),
        )
        .unwrap()
    }

    #[test]
    fn profile_is_detected_once() {
        let backend = ncurses6();
        let first = backend.profile().unwrap();
        let second = backend.profile().unwrap();
        assert_eq!(first, second);
        assert_eq!(backend.library().queries.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn concurrent_profile_reads_agree() {
        let backend = Arc::new(ncurses6());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let backend = Arc::clone(&backend);
                std::thread::spawn(move || backend.profile().unwrap())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), BackendProfile::ncurses(NCursesAbi::Abi6));
        }
        assert_eq!(backend.library().queries.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unsupported_library_fails_construction() {
        let err = CursesBackend::with_overrides(
            FakeLibrary::new(BackendKind::PdCursesMod, "4.4.0", 64),
            ProfileOverride::new(),
        )
        .unwrap_err();
        assert!(matches!(err, CursesError::UnsupportedBackend { .. }));
    }

    #[test]
    fn overrides_are_applied() {
        let backend = CursesBackend::with_overrides(
            FakeLibrary::new(BackendKind::NCurses, "ncurses 6.1", 32),
            ProfileOverride::new().ncurses_abi(Some(NCursesAbi::Abi5)),
        )
        .unwrap();
        assert_eq!(backend.key_table().unwrap(), KeyTable::NCursesAbi5);
        assert_eq!(backend.mouse_protocol().unwrap(), MouseProtocol::LegacyV1);
    }

    #[test]
    fn timeout_is_forwarded() {
        let backend = ncurses6();
        let mut input = ScriptedInput::default().key(OK, 'a' as u32);
        backend.read_event(&mut input, 250).unwrap();
        assert_eq!(input.timeouts, vec![250]);
    }

    #[test]
    fn character_read() {
        let backend = ncurses6();
        let mut input = ScriptedInput::default().key(OK, 'ß' as u32);
        assert_eq!(backend.read_event(&mut input, 0).unwrap(), Some(Event::char('ß')));
    }

    #[test]
    fn invalid_scalar_is_no_event() {
        let backend = ncurses6();
        let mut input = ScriptedInput::default().key(OK, 0xD800);
        assert_eq!(backend.read_event(&mut input, 0).unwrap(), None);
    }

    #[test]
    fn failed_read_is_no_event() {
        let backend = ncurses6();
        let mut input = ScriptedInput::default();
        assert_eq!(backend.read_event(&mut input, 0).unwrap(), None);
    }

    #[test]
    fn ctrl_left_on_ncurses6() {
        let backend = ncurses6();
        let mut input = ScriptedInput::default().key(NC_YES, 545);
        assert_eq!(
            backend.read_event(&mut input, 0).unwrap(),
            Some(Event::key(LogicalKey::KeypadLeft, ModifierKey::CTRL))
        );
    }

    #[test]
    fn unknown_key_code() {
        let backend = ncurses6();
        let mut input = ScriptedInput::default().key(NC_YES, 0o777);
        assert_eq!(
            backend.read_event(&mut input, 0).unwrap(),
            Some(Event::key(LogicalKey::Unknown, ModifierKey::NONE))
        );
    }

    #[test]
    fn resize() {
        let backend = ncurses6();
        let mut input = ScriptedInput::default().key(NC_YES, ncurses::KEY_RESIZE);
        assert_eq!(backend.read_event(&mut input, 0).unwrap(), Some(Event::Resize));
    }

    #[test]
    fn pdcurses_alt_letter_is_char() {
        let backend = CursesBackend::with_overrides(
            FakeLibrary::new(BackendKind::PdCurses, "3.9", 32),
            ProfileOverride::new(),
        )
        .unwrap();
        let mut input = ScriptedInput::default().key(PDC_YES, pdcurses::ALT_A + 2);
        assert_eq!(
            backend.read_event(&mut input, 0).unwrap(),
            Some(Event::Char {
                text: "c".into(),
                modifiers: ModifierKey::ALT,
            })
        );
    }

    #[test]
    fn mouse_position_only_is_move() {
        let backend = ncurses6();
        let bstate = MouseProtocol::ModernV2.position_bit()
            | MouseProtocol::ModernV2.modifier_bits(ModifierKey::SHIFT);
        let mut input = ScriptedInput::default()
            .key(NC_YES, ncurses::KEY_MOUSE)
            .mouse(
                OK,
                RawMouseEvent {
                    x: 3,
                    y: 4,
                    bstate,
                    ..RawMouseEvent::default()
                },
            );
        assert_eq!(
            backend.read_event(&mut input, 0).unwrap(),
            Some(Event::MouseMove {
                x: 3,
                y: 4,
                modifiers: ModifierKey::SHIFT,
            })
        );
    }

    #[test]
    fn empty_mouse_mask_is_no_event() {
        let backend = ncurses6();
        let mut input = ScriptedInput::default()
            .key(NC_YES, ncurses::KEY_MOUSE)
            .mouse(OK, RawMouseEvent::default());
        assert_eq!(backend.read_event(&mut input, 0).unwrap(), None);
    }

    #[test]
    fn failed_getmouse_is_error() {
        let backend = ncurses6();
        let mut input = ScriptedInput::default()
            .key(NC_YES, ncurses::KEY_MOUSE)
            .mouse(-1, RawMouseEvent::default());
        let err = backend.read_event(&mut input, 0).unwrap_err();
        assert_eq!(err, CursesError::native("getmouse", -1));
        assert_eq!(err.to_string(), "native call getmouse failed (-1)");
    }

    #[test]
    fn pdcursesmod_mouse() {
        let backend = CursesBackend::with_overrides(
            FakeLibrary::new(BackendKind::PdCursesMod, "4.4.0", 32),
            ProfileOverride::new(),
        )
        .unwrap();
        let p = MouseProtocol::PdCursesModVariant;
        let bstate = p.button_bits(MouseButton::Button2, MouseButtonState::DoubleClicked)
            | p.modifier_bits(ModifierKey::ALT);
        let mut input = ScriptedInput::default()
            .key(PDC_YES, KeyTable::PdCursesMod.native(pdcurses::KEY_MOUSE))
            .mouse(
                OK,
                RawMouseEvent {
                    x: 10,
                    y: 1,
                    bstate,
                    ..RawMouseEvent::default()
                },
            );
        assert_eq!(
            backend.read_event(&mut input, 0).unwrap(),
            Some(Event::Mouse {
                x: 10,
                y: 1,
                button: MouseButton::Button2,
                state: MouseButtonState::DoubleClicked,
                modifiers: ModifierKey::ALT,
            })
        );
    }

    #[test]
    fn attribute_helpers_use_profile_family() {
        let backend = ncurses6();
        let packed = backend.encode_attributes(VideoAttribute::BOLD, 3).unwrap();
        assert_eq!(packed.family(), AbiFamily::NCurses);
        assert_eq!(
            backend.decode_attributes(packed).unwrap(),
            (VideoAttribute::BOLD, 3)
        );
        let foreign = attribute_codec::encode(AbiFamily::PdCursesMod32, VideoAttribute::BOLD, 3);
        assert!(matches!(
            backend.decode_attributes(foreign),
            Err(CursesError::BackendMismatch { .. })
        ));
        assert_eq!(backend.complex_chars().unwrap().family(), AbiFamily::NCurses);
    }
}
