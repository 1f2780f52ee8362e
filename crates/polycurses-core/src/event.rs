#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! These are the backend-independent values every native key code and mouse
//! mask is normalized into. All events derive `Clone`, `PartialEq`, and `Eq`
//! for use in tests and pattern matching.
//!
//! # Design Notes
//!
//! - Mouse coordinates are reported as the native library gives them
//!   (0-indexed cell positions relative to the screen).
//! - `ModifierKey` uses bitflags for easy combination.
//! - "No event" (poll timeout) is `None` at the read API, not a variant.

use bitflags::bitflags;

/// Canonical input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A plain character was typed.
    Char {
        /// The character, as text.
        text: String,
        /// Modifier keys held during the event.
        modifiers: ModifierKey,
    },

    /// A special key was pressed.
    Key {
        /// The decoded key. [`LogicalKey::Unknown`] for codes outside the table.
        key: LogicalKey,
        /// Modifier keys held during the event.
        modifiers: ModifierKey,
    },

    /// A mouse button changed state.
    Mouse {
        /// Column of the pointer.
        x: i32,
        /// Row of the pointer.
        y: i32,
        /// The button involved.
        button: MouseButton,
        /// What the button did.
        state: MouseButtonState,
        /// Modifier keys held during the event.
        modifiers: ModifierKey,
    },

    /// The pointer moved without a button event (position reporting).
    MouseMove {
        /// Column of the pointer.
        x: i32,
        /// Row of the pointer.
        y: i32,
        /// Modifier keys held during the event.
        modifiers: ModifierKey,
    },

    /// The terminal was resized.
    ///
    /// New dimensions are queried separately by the drawing layer.
    Resize,
}

impl Event {
    /// Character event without modifiers.
    #[must_use]
    pub fn char(ch: char) -> Self {
        Self::Char {
            text: ch.to_string(),
            modifiers: ModifierKey::NONE,
        }
    }

    /// Key event with modifiers.
    #[must_use]
    pub const fn key(key: LogicalKey, modifiers: ModifierKey) -> Self {
        Self::Key { key, modifiers }
    }

    /// Modifiers carried by the event, if any.
    #[must_use]
    pub fn modifiers(&self) -> ModifierKey {
        match self {
            Self::Char { modifiers, .. }
            | Self::Key { modifiers, .. }
            | Self::Mouse { modifiers, .. }
            | Self::MouseMove { modifiers, .. } => *modifiers,
            Self::Resize => ModifierKey::NONE,
        }
    }
}

bitflags! {
    /// Modifier keys that can be held during a key or mouse event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ModifierKey: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Control key.
        const CTRL  = 0b0010;
        /// Alt/Meta key.
        const ALT   = 0b0100;
    }
}

impl Default for ModifierKey {
    fn default() -> Self {
        Self::NONE
    }
}

/// Special keys reported through the native key-code path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LogicalKey {
    /// Code not present in the backend's table.
    #[default]
    Unknown,
    /// See the accompanying character value.
    Character,

    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,

    KeypadUp,
    KeypadDown,
    KeypadLeft,
    KeypadRight,
    KeypadHome,
    KeypadEnd,
    KeypadPageUp,
    KeypadPageDown,
    /// Keypad upper-left (`A1`).
    KeypadUpperLeft,
    /// Keypad upper-right (`A3`).
    KeypadUpperRight,
    /// Keypad center (`B2`).
    KeypadCenter,
    /// Keypad lower-left (`C1`).
    KeypadLowerLeft,
    /// Keypad lower-right (`C3`).
    KeypadLowerRight,

    Insert,
    Delete,
    Backspace,
    Tab,
    Return,
    Escape,
    DeleteLine,
    InsertLine,
    Clear,
    ClearToEndOfLine,
    ClearToEndOfScreen,

    Break,
    Begin,
    Print,
    Help,
    Find,
    Undo,
    Redo,
    Exit,
    Suspend,
    SoftReset,
    Reset,
    SetTab,
    ClearTab,
    ClearAllTabs,
}

impl LogicalKey {
    /// Function key `F<n>` for `n` in `1..=12`.
    #[must_use]
    pub const fn function(n: u8) -> Option<Self> {
        Some(match n {
            1 => Self::F1,
            2 => Self::F2,
            3 => Self::F3,
            4 => Self::F4,
            5 => Self::F5,
            6 => Self::F6,
            7 => Self::F7,
            8 => Self::F8,
            9 => Self::F9,
            10 => Self::F10,
            11 => Self::F11,
            12 => Self::F12,
            _ => return None,
        })
    }
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left button.
    Button1,
    /// Middle button.
    Button2,
    /// Right button.
    Button3,
    /// Fourth button, usually wheel up.
    Button4,
    /// Fifth button, usually wheel down.
    Button5,
    /// Button the mask does not identify.
    Unknown,
}

impl MouseButton {
    /// Buttons in decode priority order.
    pub const ALL: [Self; 5] = [
        Self::Button1,
        Self::Button2,
        Self::Button3,
        Self::Button4,
        Self::Button5,
    ];

    /// 1-based native button number; `None` for [`MouseButton::Unknown`].
    #[must_use]
    pub const fn number(self) -> Option<u32> {
        match self {
            Self::Button1 => Some(1),
            Self::Button2 => Some(2),
            Self::Button3 => Some(3),
            Self::Button4 => Some(4),
            Self::Button5 => Some(5),
            Self::Unknown => None,
        }
    }
}

/// What a mouse button did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButtonState {
    /// `BUTTONn_RELEASED`.
    Released,
    /// `BUTTONn_PRESSED`.
    Pressed,
    /// `BUTTONn_CLICKED`.
    Clicked,
    /// `BUTTONn_DOUBLE_CLICKED`.
    DoubleClicked,
    /// `BUTTONn_TRIPLE_CLICKED`.
    TripleClicked,
}

impl MouseButtonState {
    /// States in decode priority order.
    pub const ALL: [Self; 5] = [
        Self::Released,
        Self::Pressed,
        Self::Clicked,
        Self::DoubleClicked,
        Self::TripleClicked,
    ];

    /// The per-button action bit (`BUTTON_RELEASED` = 1 … `BUTTON_TRIPLE_CLICKED` = 16).
    #[must_use]
    pub const fn action_bits(self) -> u32 {
        match self {
            Self::Released => 0o01,
            Self::Pressed => 0o02,
            Self::Clicked => 0o04,
            Self::DoubleClicked => 0o10,
            Self::TripleClicked => 0o20,
        }
    }
}
