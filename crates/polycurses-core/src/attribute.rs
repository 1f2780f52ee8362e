#![forbid(unsafe_code)]

//! Backend-independent visual attributes.
//!
//! The flag values are the ncurses `A_*` constants (bits 16–31 of an
//! `attr_t`). Other families translate them bit by bit; see
//! [`crate::attribute_codec`].

use bitflags::bitflags;

/// Index of a registered foreground/background color pair.
///
/// Meaningless without the backend's palette, which is managed outside this crate.
pub type ColorPair = i16;

bitflags! {
    /// Visual attributes applied to drawn text.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct VideoAttribute: u32 {
        /// No attributes.
        const NONE                 = 0;
        /// Best highlighting mode of the terminal.
        const STAND_OUT            = 1 << 16;
        /// Underlined text.
        const UNDERLINE            = 1 << 17;
        /// Reverse video.
        const REVERSE              = 1 << 18;
        /// Blinking text.
        const BLINK                = 1 << 19;
        /// Half bright.
        const DIM                  = 1 << 20;
        /// Extra bright or bold.
        const BOLD                 = 1 << 21;
        /// Alternate character set (line drawing).
        const ALT_CHARSET          = 1 << 22;
        /// Invisible text.
        const INVISIBLE            = 1 << 23;
        /// Protected from modification.
        const PROTECT              = 1 << 24;
        /// `A_HORIZONTAL`.
        const HORIZONTAL_HIGHLIGHT = 1 << 25;
        /// `A_LEFT`.
        const LEFT_HIGHLIGHT       = 1 << 26;
        /// `A_LOW`.
        const LOW_HIGHLIGHT        = 1 << 27;
        /// `A_RIGHT`.
        const RIGHT_HIGHLIGHT      = 1 << 28;
        /// `A_TOP`.
        const TOP_HIGHLIGHT        = 1 << 29;
        /// `A_VERTICAL`.
        const VERTICAL_HIGHLIGHT   = 1 << 30;
        /// Italic text.
        const ITALIC               = 1 << 31;
    }
}

impl Default for VideoAttribute {
    fn default() -> Self {
        Self::NONE
    }
}
