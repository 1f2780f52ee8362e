#![forbid(unsafe_code)]

//! Attribute + color-pair packing for each native ABI family.
//!
//! # Layouts
//!
//! | Family | Attributes | Color pair |
//! |--------|------------|------------|
//! | ncurses | bits 16–31, `A_*` values unmodified | bits 8–15 |
//! | PDCurses / PDCursesMod (32-bit `chtype`) | own bit set in bits 16–23 | bits 24–31 |
//!
//! Only the low byte of a color pair is representable through either path.
//! Pairs above 255 need the extended-color calls, which live outside this
//! crate, so they are truncated here.
//!
//! # PDCurses decode quirk
//!
//! PDCurses has no stand-out bit; `A_STANDOUT` is `A_REVERSE | A_BOLD`.
//! When a packed value carries both bits, decoding reports Bold only and
//! drops Reverse. Attribute sets that encode to both bits therefore do not
//! round-trip; [`round_trips`] reports exactly which sets do.

use crate::attribute::{ColorPair, VideoAttribute};
use crate::error::{CursesError, Result};

/// Largest color pair representable in a packed attribute.
pub const MAX_PACKED_PAIR: ColorPair = 255;

/// Binary encoding family of a native library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbiFamily {
    /// ncurses (family A).
    NCurses,
    /// Classic PDCurses with a 32-bit `chtype` (family B, legacy).
    PdCursesLegacy,
    /// PDCursesMod built with a 32-bit `chtype` (family B, modern).
    PdCursesMod32,
}

impl AbiFamily {
    /// Every family, in declaration order.
    pub const ALL: [Self; 3] = [Self::NCurses, Self::PdCursesLegacy, Self::PdCursesMod32];

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NCurses => "ncurses",
            Self::PdCursesLegacy => "PDCurses",
            Self::PdCursesMod32 => "PDCursesMod (32-bit chtype)",
        }
    }

    /// Whether this family packs attributes with the PDCurses bit layout.
    #[must_use]
    pub const fn uses_pdcurses_layout(self) -> bool {
        matches!(self, Self::PdCursesLegacy | Self::PdCursesMod32)
    }
}

impl std::fmt::Display for AbiFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A packed attribute word, tagged with the family whose layout it uses.
///
/// The raw value is only meaningful to the native library of that family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackedAttribute {
    family: AbiFamily,
    raw: u32,
}

impl PackedAttribute {
    /// Tag a raw value obtained from a native call of `family`.
    #[must_use]
    pub const fn from_raw(family: AbiFamily, raw: u32) -> Self {
        Self { family, raw }
    }

    /// The raw word to hand to the native library.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.raw
    }

    /// The family this value was packed for.
    #[must_use]
    pub const fn family(self) -> AbiFamily {
        self.family
    }
}

// ncurses: A_COLOR = NCURSES_BITS(0xFF, 0), NCURSES_ATTR_SHIFT = 8.
const NC_COLOR_SHIFT: u32 = 8;
const NC_COLOR_MASK: u32 = 0x0000_FF00;
const NC_ATTR_MASK: u32 = 0xFFFF_0000;

// PDCurses / PDCursesMod with a 32-bit chtype.
const PDC_ALTCHARSET: u32 = 0x0001_0000;
const PDC_RIGHT: u32 = 0x0002_0000;
const PDC_LEFT: u32 = 0x0004_0000;
const PDC_ITALIC: u32 = 0x0008_0000;
const PDC_UNDERLINE: u32 = 0x0010_0000;
const PDC_REVERSE: u32 = 0x0020_0000;
const PDC_BLINK: u32 = 0x0040_0000;
const PDC_BOLD: u32 = 0x0080_0000;
const PDC_COLOR_SHIFT: u32 = 24;

/// One-to-one flag translations for the PDCurses layout.
/// `STAND_OUT` is handled separately since it maps onto two bits.
const PDC_FLAGS: [(VideoAttribute, u32); 8] = [
    (VideoAttribute::ALT_CHARSET, PDC_ALTCHARSET),
    (VideoAttribute::RIGHT_HIGHLIGHT, PDC_RIGHT),
    (VideoAttribute::LEFT_HIGHLIGHT, PDC_LEFT),
    (VideoAttribute::ITALIC, PDC_ITALIC),
    (VideoAttribute::UNDERLINE, PDC_UNDERLINE),
    (VideoAttribute::REVERSE, PDC_REVERSE),
    (VideoAttribute::BLINK, PDC_BLINK),
    (VideoAttribute::BOLD, PDC_BOLD),
];

#[inline]
const fn pair_byte(pair: ColorPair) -> u32 {
    (pair as u16 as u32) & 0xFF
}

/// Attributes the given family can represent.
#[must_use]
pub fn supported_attributes(family: AbiFamily) -> VideoAttribute {
    match family {
        AbiFamily::NCurses => VideoAttribute::all(),
        AbiFamily::PdCursesLegacy | AbiFamily::PdCursesMod32 => PDC_FLAGS
            .iter()
            .fold(VideoAttribute::STAND_OUT, |acc, (flag, _)| acc | *flag),
    }
}

/// Whether `decode(encode(family, attrs, _))` reproduces `attrs` exactly.
#[must_use]
pub fn round_trips(family: AbiFamily, attrs: VideoAttribute) -> bool {
    if !supported_attributes(family).contains(attrs) {
        return false;
    }
    match family {
        AbiFamily::NCurses => true,
        AbiFamily::PdCursesLegacy | AbiFamily::PdCursesMod32 => {
            !attrs.contains(VideoAttribute::STAND_OUT)
                && !attrs.contains(VideoAttribute::REVERSE | VideoAttribute::BOLD)
        }
    }
}

/// Pack `attrs` and the low byte of `pair` in `family`'s layout.
///
/// Flags the family cannot represent are dropped.
#[must_use]
pub fn encode(family: AbiFamily, attrs: VideoAttribute, pair: ColorPair) -> PackedAttribute {
    let raw = match family {
        AbiFamily::NCurses => (attrs.bits() & NC_ATTR_MASK) | (pair_byte(pair) << NC_COLOR_SHIFT),
        AbiFamily::PdCursesLegacy | AbiFamily::PdCursesMod32 => {
            let mut raw = PDC_FLAGS
                .iter()
                .filter(|(flag, _)| attrs.contains(*flag))
                .fold(0u32, |acc, (_, bit)| acc | bit);
            if attrs.contains(VideoAttribute::STAND_OUT) {
                raw |= PDC_REVERSE | PDC_BOLD;
            }
            raw | (pair_byte(pair) << PDC_COLOR_SHIFT)
        }
    };
    PackedAttribute::from_raw(family, raw)
}

/// Unpack a value using the layout of the family it is tagged with.
///
/// Bits outside the attribute and color fields (character text) are ignored.
#[must_use]
pub fn decode(packed: PackedAttribute) -> (VideoAttribute, ColorPair) {
    let raw = packed.raw();
    match packed.family() {
        AbiFamily::NCurses => (
            VideoAttribute::from_bits_truncate(raw & NC_ATTR_MASK),
            ((raw & NC_COLOR_MASK) >> NC_COLOR_SHIFT) as ColorPair,
        ),
        AbiFamily::PdCursesLegacy | AbiFamily::PdCursesMod32 => {
            let mut attrs = PDC_FLAGS
                .iter()
                .filter(|(_, bit)| raw & bit != 0)
                .fold(VideoAttribute::NONE, |acc, (flag, _)| acc | *flag);
            if attrs.contains(VideoAttribute::REVERSE | VideoAttribute::BOLD) {
                attrs.remove(VideoAttribute::REVERSE);
            }
            (attrs, (raw >> PDC_COLOR_SHIFT) as ColorPair)
        }
    }
}

/// Decode on behalf of `family`'s codec, rejecting values packed for another family.
pub fn decode_as(
    family: AbiFamily,
    packed: PackedAttribute,
) -> Result<(VideoAttribute, ColorPair)> {
    if packed.family() != family {
        return Err(CursesError::BackendMismatch {
            expected: family,
            found: packed.family(),
        });
    }
    Ok(decode(packed))
}
