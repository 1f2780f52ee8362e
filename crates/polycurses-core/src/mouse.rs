#![forbid(unsafe_code)]

//! Mouse state mask parsing.
//!
//! `getmouse` reports a `bstate` mask in which every button owns a group of
//! five action bits and the modifiers sit above the last button group. The
//! width of a group and the location of the modifier bits differ between
//! native library versions:
//!
//! | Protocol | Group width | Modifiers |
//! |----------|-------------|-----------|
//! | [`MouseProtocol::LegacyV1`] | 6 | `x << 24`: Ctrl=1, Shift=2, Alt=4, position=8 |
//! | [`MouseProtocol::ModernV2`] | 5 | `x << 25`, same values |
//! | [`MouseProtocol::PdCursesModVariant`] | 5 | Shift=bit 26, Ctrl=27, Alt=28, position=29 |
//!
//! # Priority
//!
//! A mask may carry several button bits at once. Parsing reports exactly one
//! button event: buttons are tested in order 1..=5 and, per button, states in
//! the order Released, Pressed, Clicked, DoubleClicked, TripleClicked. The
//! first match wins.

use crate::event::{ModifierKey, MouseButton, MouseButtonState};

/// Native mouse mask as stored in `MEVENT::bstate`.
pub type MouseRawMask = u32;

/// Narrow a 64-bit `mmask_t` (LP64 ABI 5) to [`MouseRawMask`].
///
/// Every defined bit sits below bit 32, so the upper half is dropped.
#[must_use]
pub const fn narrow_mask(wide: u64) -> MouseRawMask {
    (wide & 0xFFFF_FFFF) as MouseRawMask
}

const LEGACY_BUTTONS: &[MouseButton] = &[
    MouseButton::Button1,
    MouseButton::Button2,
    MouseButton::Button3,
    MouseButton::Button4,
];

/// Bit scheme of a backend's mouse masks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseProtocol {
    /// ncurses ABI 5 (`NCURSES_MOUSE_VERSION == 1`).
    LegacyV1,
    /// ncurses ABI 6 (`NCURSES_MOUSE_VERSION == 2`).
    ModernV2,
    /// PDCurses and PDCursesMod.
    PdCursesModVariant,
}

/// One button event decoded from a mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseAction {
    /// Highest-priority button with a bit set.
    pub button: MouseButton,
    /// First matching state of that button.
    pub state: MouseButtonState,
    /// Modifiers held during the event.
    pub modifiers: ModifierKey,
}

impl MouseProtocol {
    /// Every protocol, in declaration order.
    pub const ALL: [Self; 3] = [Self::LegacyV1, Self::ModernV2, Self::PdCursesModVariant];

    /// Width of one button's action-bit group.
    #[must_use]
    pub const fn shift(self) -> u32 {
        match self {
            Self::LegacyV1 => 6,
            Self::ModernV2 | Self::PdCursesModVariant => 5,
        }
    }

    /// Buttons the scheme reports, in decode priority order.
    ///
    /// Version 1 masks have four buttons; the fifth group holds the
    /// modifiers.
    #[must_use]
    pub fn buttons(self) -> &'static [MouseButton] {
        match self {
            Self::LegacyV1 => LEGACY_BUTTONS,
            Self::ModernV2 | Self::PdCursesModVariant => &MouseButton::ALL,
        }
    }

    /// Mask for `state` of `button`; `0` for buttons the scheme lacks.
    #[must_use]
    pub const fn button_bits(self, button: MouseButton, state: MouseButtonState) -> u32 {
        match (self, button.number()) {
            (Self::LegacyV1, Some(5)) | (_, None) => 0,
            (_, Some(n)) => state.action_bits() << ((n - 1) * self.shift()),
        }
    }

    /// Bit for a single modifier (`SHIFT`, `CTRL` or `ALT`).
    #[must_use]
    pub const fn modifier_bit(self, modifier: ModifierKey) -> u32 {
        let code = if modifier.bits() == ModifierKey::CTRL.bits() {
            1
        } else if modifier.bits() == ModifierKey::SHIFT.bits() {
            2
        } else if modifier.bits() == ModifierKey::ALT.bits() {
            4
        } else {
            return 0;
        };
        match self {
            Self::LegacyV1 | Self::ModernV2 => code << self.modifier_base(),
            Self::PdCursesModVariant => match code {
                1 => 1 << 27,
                2 => 1 << 26,
                _ => 1 << 28,
            },
        }
    }

    /// `REPORT_MOUSE_POSITION`.
    #[must_use]
    pub const fn position_bit(self) -> u32 {
        match self {
            Self::LegacyV1 | Self::ModernV2 => 8 << self.modifier_base(),
            Self::PdCursesModVariant => 1 << 29,
        }
    }

    /// Mask with every bit of `modifiers` set.
    #[must_use]
    pub const fn modifier_bits(self, modifiers: ModifierKey) -> u32 {
        let mut bits = 0;
        if modifiers.contains(ModifierKey::SHIFT) {
            bits |= self.modifier_bit(ModifierKey::SHIFT);
        }
        if modifiers.contains(ModifierKey::CTRL) {
            bits |= self.modifier_bit(ModifierKey::CTRL);
        }
        if modifiers.contains(ModifierKey::ALT) {
            bits |= self.modifier_bit(ModifierKey::ALT);
        }
        bits
    }

    // Modifiers occupy the group after button 4 (v1) or button 5 (v2).
    const fn modifier_base(self) -> u32 {
        match self {
            Self::LegacyV1 => 24,
            Self::ModernV2 | Self::PdCursesModVariant => 25,
        }
    }

    /// Modifier keys present in a mask.
    #[must_use]
    pub const fn modifiers(self, mask: MouseRawMask) -> ModifierKey {
        let mut modifiers = ModifierKey::NONE;
        if mask & self.modifier_bit(ModifierKey::SHIFT) != 0 {
            modifiers = modifiers.union(ModifierKey::SHIFT);
        }
        if mask & self.modifier_bit(ModifierKey::CTRL) != 0 {
            modifiers = modifiers.union(ModifierKey::CTRL);
        }
        if mask & self.modifier_bit(ModifierKey::ALT) != 0 {
            modifiers = modifiers.union(ModifierKey::ALT);
        }
        modifiers
    }

    /// Whether the mask carries the position-report bit.
    #[must_use]
    pub const fn reports_position(self, mask: MouseRawMask) -> bool {
        mask & self.position_bit() != 0
    }

    /// Decode the highest-priority button event in `mask`.
    ///
    /// Returns `None` when no button bit is set (modifier or position-only
    /// masks).
    #[must_use]
    pub fn parse(self, mask: MouseRawMask) -> Option<MouseAction> {
        let modifiers = self.modifiers(mask);
        self.buttons().iter().find_map(|&button| {
            MouseButtonState::ALL
                .into_iter()
                .find(|&state| mask & self.button_bits(button, state) != 0)
                .map(|state| MouseAction {
                    button,
                    state,
                    modifiers,
                })
        })
    }
}
