#![forbid(unsafe_code)]

//! Complex (wide) character codec.
//!
//! A complex character is one grapheme cluster plus attributes and a color
//! pair, stored in the backend's `cchar_t`. The native layouts differ:
//!
//! - ncurses: a struct of attributes, up to [`CCHARW_MAX`] code points and an
//!   extended color index ([`NCursesCChar`]).
//! - PDCurses / PDCursesMod: `cchar_t` is a plain `chtype`, so only one code
//!   point survives and attributes share the word with the character.
//!
//! Values are built and taken apart by the native `setcchar` / `getcchar`
//! entry points, reached through a [`CharComposer`]. [`ComplexCharCodec`]
//! validates the text, translates attributes with the attribute codec, and
//! refuses values or composers that belong to another family before any
//! native call is made.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

use crate::attribute::{ColorPair, VideoAttribute};
use crate::attribute_codec::{self, AbiFamily, PackedAttribute};
use crate::error::{CursesError, Result};

/// `CCHARW_MAX` of ncurses: code points stored per cell.
pub const CCHARW_MAX: usize = 5;

/// Mirror of the ncurses `cchar_t` layout.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NCursesCChar {
    /// `attr_t` attributes, including the low color-pair byte.
    pub attr: u32,
    /// Spacing character followed by combining characters, NUL padded.
    pub chars: [u32; CCHARW_MAX],
    /// Extended color pair index.
    pub ext_color: i32,
}

/// Native payload of a complex character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharPayload {
    /// ncurses `cchar_t`.
    NCurses(NCursesCChar),
    /// PDCurses `cchar_t` (a `chtype`).
    Chtype(u32),
}

impl CharPayload {
    /// Zeroed payload in `family`'s layout.
    #[must_use]
    pub const fn empty(family: AbiFamily) -> Self {
        match family {
            AbiFamily::NCurses => Self::NCurses(NCursesCChar {
                attr: 0,
                chars: [0; CCHARW_MAX],
                ext_color: 0,
            }),
            AbiFamily::PdCursesLegacy | AbiFamily::PdCursesMod32 => Self::Chtype(0),
        }
    }

    /// C type of the payload layout.
    #[must_use]
    pub const fn layout(&self) -> &'static str {
        match self {
            Self::NCurses(_) => "cchar_t",
            Self::Chtype(_) => "chtype",
        }
    }
}

/// A complex character tagged with the family that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComplexChar {
    family: AbiFamily,
    payload: CharPayload,
}

impl ComplexChar {
    /// Wrap a payload returned by native code.
    ///
    /// Fails when the payload layout does not belong to `family`.
    pub fn from_native(family: AbiFamily, payload: CharPayload) -> Result<Self> {
        let payload_family_ok = match payload {
            CharPayload::NCurses(_) => family == AbiFamily::NCurses,
            CharPayload::Chtype(_) => family.uses_pdcurses_layout(),
        };
        if !payload_family_ok {
            return Err(CursesError::LayoutMismatch {
                expected: family,
                layout: payload.layout(),
            });
        }
        Ok(Self { family, payload })
    }

    /// Family whose codec produced this value.
    #[must_use]
    pub const fn family(&self) -> AbiFamily {
        self.family
    }

    /// Native payload, for handing to drawing calls.
    #[must_use]
    pub const fn payload(&self) -> &CharPayload {
        &self.payload
    }
}

/// The native `setcchar` / `getcchar` pair of one loaded library.
///
/// Both return native status codes; see [`crate::failed`].
pub trait CharComposer {
    /// Family of the library these calls go to.
    fn family(&self) -> AbiFamily;

    /// `setcchar(out, wch, attrs, pair, NULL)`.
    ///
    /// `wch` holds at most the family's capacity of code points, without the
    /// terminating NUL. `attrs` is already in the family's layout.
    fn set_cchar(&self, out: &mut CharPayload, wch: &[u32], attrs: u32, pair: ColorPair) -> i32;

    /// `getcchar(value, wch, attrs, pair, NULL)`.
    ///
    /// Code points are written NUL terminated when fewer than
    /// [`CCHARW_MAX`].
    fn get_cchar(
        &self,
        value: &CharPayload,
        wch: &mut [u32; CCHARW_MAX],
        attrs: &mut u32,
        pair: &mut ColorPair,
    ) -> i32;
}

/// Complex character codec bound to one family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComplexCharCodec {
    family: AbiFamily,
}

impl ComplexCharCodec {
    /// Codec for values in `family`'s layout.
    #[must_use]
    pub const fn new(family: AbiFamily) -> Self {
        Self { family }
    }

    /// Family this codec encodes for.
    #[must_use]
    pub const fn family(&self) -> AbiFamily {
        self.family
    }

    /// Code points a cell keeps in this family.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        match self.family {
            AbiFamily::NCurses => CCHARW_MAX,
            AbiFamily::PdCursesLegacy | AbiFamily::PdCursesMod32 => 1,
        }
    }

    /// Build a complex character from one grapheme cluster.
    ///
    /// Code points past [`Self::capacity`] are dropped.
    pub fn encode<C: CharComposer + ?Sized>(
        &self,
        composer: &C,
        text: &str,
        attrs: VideoAttribute,
        pair: ColorPair,
    ) -> Result<ComplexChar> {
        self.check_composer(composer)?;
        let wch = self.code_points(text)?;
        let packed = attribute_codec::encode(self.family, attrs, 0).raw();

        let mut payload = CharPayload::empty(self.family);
        let code = composer.set_cchar(&mut payload, &wch, packed, pair);
        if crate::failed(code) {
            return Err(CursesError::native("setcchar", code));
        }
        ComplexChar::from_native(self.family, payload)
    }

    /// Take a complex character apart into text, attributes and pair.
    pub fn decode<C: CharComposer + ?Sized>(
        &self,
        composer: &C,
        value: &ComplexChar,
    ) -> Result<(String, VideoAttribute, ColorPair)> {
        if value.family != self.family {
            return Err(CursesError::BackendMismatch {
                expected: self.family,
                found: value.family,
            });
        }
        self.check_composer(composer)?;

        let mut wch = [0u32; CCHARW_MAX];
        let mut raw_attrs = 0u32;
        let mut pair: ColorPair = 0;
        let code = composer.get_cchar(&value.payload, &mut wch, &mut raw_attrs, &mut pair);
        if crate::failed(code) {
            return Err(CursesError::native("getcchar", code));
        }

        let text = wch
            .iter()
            .take(self.capacity())
            .take_while(|&&cp| cp != 0)
            .map(|&cp| {
                char::from_u32(cp).ok_or_else(|| {
                    CursesError::InvalidCharacter(format!("U+{cp:X} is not a scalar value"))
                })
            })
            .collect::<Result<String>>()?;
        let (attrs, _) = attribute_codec::decode(PackedAttribute::from_raw(self.family, raw_attrs));
        Ok((text, attrs, pair))
    }

    fn check_composer<C: CharComposer + ?Sized>(&self, composer: &C) -> Result<()> {
        let found = composer.family();
        if found == self.family {
            Ok(())
        } else {
            Err(CursesError::BackendMismatch {
                expected: self.family,
                found,
            })
        }
    }

    fn code_points(&self, text: &str) -> Result<Vec<u32>> {
        let mut graphemes = text.graphemes(true);
        if graphemes.next().is_none() {
            return Err(CursesError::InvalidCharacter("empty text".into()));
        }
        if graphemes.next().is_some() {
            return Err(CursesError::InvalidCharacter(format!(
                "{text:?} is more than one grapheme cluster"
            )));
        }
        // setcchar wants a spacing character first.
        if text.chars().next().and_then(UnicodeWidthChar::width) == Some(0) {
            return Err(CursesError::InvalidCharacter(format!(
                "{text:?} starts with a zero-width character"
            )));
        }
        Ok(text.chars().take(self.capacity()).map(u32::from).collect())
    }
}
