#![forbid(unsafe_code)]

//! Native key-code tables.
//!
//! Each table maps the raw code a backend's `wget_wch` reports alongside
//! `KEY_CODE_YES` to a [`KeyMapping`]. The values are the constants from the
//! libraries' public headers and must match them bit for bit.
//!
//! # Tables
//!
//! | Table | Source |
//! |-------|--------|
//! | [`KeyTable::NCursesAbi5`] | `<curses.h>` `KEY_*` + xterm user-defined keys, ABI 5 numbering |
//! | [`KeyTable::NCursesAbi6`] | as ABI 5, with `kDN`/`kUP` present in the user-defined block |
//! | [`KeyTable::PdCurses`] | PDCurses `curses.h` (`KEY_CODE_YES == 0x100`) |
//! | [`KeyTable::PdCursesMod`] | the PDCurses layout relocated to `KEY_OFFSET == 0xEC00` |
//!
//! # ncurses user-defined keys
//!
//! Modified navigation keys (`kLFT5` = Ctrl+Left, …) are not in `<curses.h>`.
//! ncurses assigns them codes after `KEY_MAX`, numbering the terminfo
//! extended capabilities in alphabetical order. For xterm-compatible
//! descriptions that yields a fixed block starting at 517; ABI 6 terminfo
//! additionally carries the unsuffixed `kDN`/`kUP`, shifting everything after
//! them. Suffixes 3..=7 are the xterm modifier parameters
//! (Alt, Shift+Alt, Ctrl, Shift+Ctrl, Ctrl+Alt).
//!
//! Tables are built once, on first use, from the literal data below.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::event::{LogicalKey, ModifierKey};

/// Key-code table of a native backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyTable {
    /// ncurses built for ABI 5.
    NCursesAbi5,
    /// ncurses built for ABI 6.
    NCursesAbi6,
    /// Classic PDCurses.
    PdCurses,
    /// PDCursesMod.
    PdCursesMod,
}

/// Result of looking a raw code up in a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyMapping {
    /// Decoded key; [`LogicalKey::Character`] when `ch` carries the value.
    pub key: LogicalKey,
    /// Character for [`LogicalKey::Character`] mappings, `'\0'` otherwise.
    pub ch: char,
    /// Modifiers folded into the native code.
    pub modifiers: ModifierKey,
}

impl KeyMapping {
    /// Mapping for codes not present in a table.
    pub const UNKNOWN: Self = Self::new(LogicalKey::Unknown, ModifierKey::NONE);

    /// A special key with modifiers.
    #[must_use]
    pub const fn new(key: LogicalKey, modifiers: ModifierKey) -> Self {
        Self {
            key,
            ch: '\0',
            modifiers,
        }
    }

    /// A character key with modifiers (Alt+letter, keypad symbols).
    #[must_use]
    pub const fn character(ch: char, modifiers: ModifierKey) -> Self {
        Self {
            key: LogicalKey::Character,
            ch,
            modifiers,
        }
    }

    /// Whether the code was found in the table.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self.key, LogicalKey::Unknown)
    }
}

impl Default for KeyMapping {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

const NONE: ModifierKey = ModifierKey::NONE;
const SHIFT: ModifierKey = ModifierKey::SHIFT;
const CTRL: ModifierKey = ModifierKey::CTRL;
const ALT: ModifierKey = ModifierKey::ALT;
const SHIFT_ALT: ModifierKey = ModifierKey::SHIFT.union(ModifierKey::ALT);
const SHIFT_CTRL: ModifierKey = ModifierKey::SHIFT.union(ModifierKey::CTRL);
const CTRL_ALT: ModifierKey = ModifierKey::CTRL.union(ModifierKey::ALT);

/// ncurses `<curses.h>` constants.
pub mod ncurses {
    pub const KEY_CODE_YES: u32 = 0o400;
    pub const KEY_BREAK: u32 = 0o401;
    pub const KEY_DOWN: u32 = 0o402;
    pub const KEY_UP: u32 = 0o403;
    pub const KEY_LEFT: u32 = 0o404;
    pub const KEY_RIGHT: u32 = 0o405;
    pub const KEY_HOME: u32 = 0o406;
    pub const KEY_BACKSPACE: u32 = 0o407;
    pub const KEY_F0: u32 = 0o410;
    pub const KEY_DL: u32 = 0o510;
    pub const KEY_IL: u32 = 0o511;
    pub const KEY_DC: u32 = 0o512;
    pub const KEY_IC: u32 = 0o513;
    pub const KEY_CLEAR: u32 = 0o515;
    pub const KEY_EOS: u32 = 0o516;
    pub const KEY_EOL: u32 = 0o517;
    pub const KEY_SF: u32 = 0o520;
    pub const KEY_SR: u32 = 0o521;
    pub const KEY_NPAGE: u32 = 0o522;
    pub const KEY_PPAGE: u32 = 0o523;
    pub const KEY_STAB: u32 = 0o524;
    pub const KEY_CTAB: u32 = 0o525;
    pub const KEY_CATAB: u32 = 0o526;
    pub const KEY_ENTER: u32 = 0o527;
    pub const KEY_SRESET: u32 = 0o530;
    pub const KEY_RESET: u32 = 0o531;
    pub const KEY_PRINT: u32 = 0o532;
    pub const KEY_A1: u32 = 0o534;
    pub const KEY_A3: u32 = 0o535;
    pub const KEY_B2: u32 = 0o536;
    pub const KEY_C1: u32 = 0o537;
    pub const KEY_C3: u32 = 0o540;
    pub const KEY_BTAB: u32 = 0o541;
    pub const KEY_BEG: u32 = 0o542;
    pub const KEY_END: u32 = 0o550;
    pub const KEY_EXIT: u32 = 0o551;
    pub const KEY_FIND: u32 = 0o552;
    pub const KEY_HELP: u32 = 0o553;
    pub const KEY_REDO: u32 = 0o563;
    pub const KEY_SBEG: u32 = 0o572;
    pub const KEY_SDC: u32 = 0o577;
    pub const KEY_SDL: u32 = 0o600;
    pub const KEY_SEND: u32 = 0o602;
    pub const KEY_SEOL: u32 = 0o603;
    pub const KEY_SEXIT: u32 = 0o604;
    pub const KEY_SFIND: u32 = 0o605;
    pub const KEY_SHELP: u32 = 0o606;
    pub const KEY_SHOME: u32 = 0o607;
    pub const KEY_SIC: u32 = 0o610;
    pub const KEY_SLEFT: u32 = 0o611;
    pub const KEY_SNEXT: u32 = 0o614;
    pub const KEY_SPREVIOUS: u32 = 0o616;
    pub const KEY_SPRINT: u32 = 0o617;
    pub const KEY_SREDO: u32 = 0o620;
    pub const KEY_SRIGHT: u32 = 0o622;
    pub const KEY_SSUSPEND: u32 = 0o625;
    pub const KEY_SUNDO: u32 = 0o626;
    pub const KEY_SUSPEND: u32 = 0o627;
    pub const KEY_UNDO: u32 = 0o630;
    pub const KEY_MOUSE: u32 = 0o631;
    pub const KEY_RESIZE: u32 = 0o632;
    pub const KEY_MAX: u32 = 0o777;

    /// First code ncurses hands out to user-defined (terminfo extended) keys
    /// in xterm descriptions.
    pub const USER_KEY_BASE: u32 = 517;

    /// `KEY_F(n)`.
    #[must_use]
    pub const fn key_f(n: u32) -> u32 {
        KEY_F0 + n
    }
}

/// PDCurses `curses.h` constants. PDCursesMod uses the same values shifted
/// by [`PDCURSESMOD_OFFSET`].
pub mod pdcurses {
    pub const KEY_CODE_YES: u32 = 0x100;
    pub const KEY_BREAK: u32 = 0x101;
    pub const KEY_DOWN: u32 = 0x102;
    pub const KEY_UP: u32 = 0x103;
    pub const KEY_LEFT: u32 = 0x104;
    pub const KEY_RIGHT: u32 = 0x105;
    pub const KEY_HOME: u32 = 0x106;
    pub const KEY_BACKSPACE: u32 = 0x107;
    pub const KEY_F0: u32 = 0x108;
    pub const KEY_DL: u32 = 0x148;
    pub const KEY_IL: u32 = 0x149;
    pub const KEY_DC: u32 = 0x14a;
    pub const KEY_IC: u32 = 0x14b;
    pub const KEY_CLEAR: u32 = 0x14d;
    pub const KEY_EOS: u32 = 0x14e;
    pub const KEY_EOL: u32 = 0x14f;
    pub const KEY_SF: u32 = 0x150;
    pub const KEY_SR: u32 = 0x151;
    pub const KEY_NPAGE: u32 = 0x152;
    pub const KEY_PPAGE: u32 = 0x153;
    pub const KEY_STAB: u32 = 0x154;
    pub const KEY_CTAB: u32 = 0x155;
    pub const KEY_CATAB: u32 = 0x156;
    pub const KEY_ENTER: u32 = 0x157;
    pub const KEY_SRESET: u32 = 0x158;
    pub const KEY_RESET: u32 = 0x159;
    pub const KEY_PRINT: u32 = 0x15a;
    pub const KEY_SHELP: u32 = 0x15d;
    pub const KEY_BTAB: u32 = 0x15f;
    pub const KEY_BEG: u32 = 0x160;
    pub const KEY_END: u32 = 0x166;
    pub const KEY_EXIT: u32 = 0x167;
    pub const KEY_FIND: u32 = 0x168;
    pub const KEY_HELP: u32 = 0x169;
    pub const KEY_REDO: u32 = 0x171;
    pub const KEY_SBEG: u32 = 0x178;
    pub const KEY_SDC: u32 = 0x17d;
    pub const KEY_SDL: u32 = 0x17e;
    pub const KEY_SEND: u32 = 0x180;
    pub const KEY_SEOL: u32 = 0x181;
    pub const KEY_SEXIT: u32 = 0x182;
    pub const KEY_SFIND: u32 = 0x183;
    pub const KEY_SHOME: u32 = 0x184;
    pub const KEY_SIC: u32 = 0x185;
    pub const KEY_SLEFT: u32 = 0x187;
    pub const KEY_SNEXT: u32 = 0x18a;
    pub const KEY_SPREVIOUS: u32 = 0x18c;
    pub const KEY_SPRINT: u32 = 0x18d;
    pub const KEY_SREDO: u32 = 0x18e;
    pub const KEY_SRIGHT: u32 = 0x190;
    pub const KEY_SSUSPEND: u32 = 0x193;
    pub const KEY_SUNDO: u32 = 0x194;
    pub const KEY_SUSPEND: u32 = 0x195;
    pub const KEY_UNDO: u32 = 0x196;

    pub const ALT_0: u32 = 0x197;
    pub const ALT_A: u32 = 0x1a1;
    pub const CTL_LEFT: u32 = 0x1bb;
    pub const CTL_RIGHT: u32 = 0x1bc;
    pub const CTL_PGUP: u32 = 0x1bd;
    pub const CTL_PGDN: u32 = 0x1be;
    pub const CTL_HOME: u32 = 0x1bf;
    pub const CTL_END: u32 = 0x1c0;
    pub const KEY_A1: u32 = 0x1c1;
    pub const KEY_A2: u32 = 0x1c2;
    pub const KEY_A3: u32 = 0x1c3;
    pub const KEY_B1: u32 = 0x1c4;
    pub const KEY_B2: u32 = 0x1c5;
    pub const KEY_B3: u32 = 0x1c6;
    pub const KEY_C1: u32 = 0x1c7;
    pub const KEY_C2: u32 = 0x1c8;
    pub const KEY_C3: u32 = 0x1c9;
    pub const PADSLASH: u32 = 0x1ca;
    pub const PADENTER: u32 = 0x1cb;
    pub const CTL_PADENTER: u32 = 0x1cc;
    pub const ALT_PADENTER: u32 = 0x1cd;
    pub const PADSTOP: u32 = 0x1ce;
    pub const PADSTAR: u32 = 0x1cf;
    pub const PADMINUS: u32 = 0x1d0;
    pub const PADPLUS: u32 = 0x1d1;
    pub const CTL_PADSTOP: u32 = 0x1d2;
    pub const CTL_PADCENTER: u32 = 0x1d3;
    pub const CTL_PADPLUS: u32 = 0x1d4;
    pub const CTL_PADMINUS: u32 = 0x1d5;
    pub const CTL_PADSLASH: u32 = 0x1d6;
    pub const CTL_PADSTAR: u32 = 0x1d7;
    pub const ALT_PADPLUS: u32 = 0x1d8;
    pub const ALT_PADMINUS: u32 = 0x1d9;
    pub const ALT_PADSLASH: u32 = 0x1da;
    pub const ALT_PADSTAR: u32 = 0x1db;
    pub const ALT_PADSTOP: u32 = 0x1dc;
    pub const CTL_INS: u32 = 0x1dd;
    pub const ALT_DEL: u32 = 0x1de;
    pub const ALT_INS: u32 = 0x1df;
    pub const CTL_UP: u32 = 0x1e0;
    pub const CTL_DOWN: u32 = 0x1e1;
    pub const CTL_TAB: u32 = 0x1e2;
    pub const ALT_TAB: u32 = 0x1e3;
    pub const ALT_MINUS: u32 = 0x1e4;
    pub const ALT_EQUAL: u32 = 0x1e5;
    pub const ALT_HOME: u32 = 0x1e6;
    pub const ALT_PGUP: u32 = 0x1e7;
    pub const ALT_PGDN: u32 = 0x1e8;
    pub const ALT_END: u32 = 0x1e9;
    pub const ALT_UP: u32 = 0x1ea;
    pub const ALT_DOWN: u32 = 0x1eb;
    pub const ALT_RIGHT: u32 = 0x1ec;
    pub const ALT_LEFT: u32 = 0x1ed;
    pub const ALT_ENTER: u32 = 0x1ee;
    pub const ALT_ESC: u32 = 0x1ef;
    pub const ALT_BQUOTE: u32 = 0x1f0;
    pub const ALT_LBRACKET: u32 = 0x1f1;
    pub const ALT_RBRACKET: u32 = 0x1f2;
    pub const ALT_SEMICOLON: u32 = 0x1f3;
    pub const ALT_FQUOTE: u32 = 0x1f4;
    pub const ALT_COMMA: u32 = 0x1f5;
    pub const ALT_STOP: u32 = 0x1f6;
    pub const ALT_FSLASH: u32 = 0x1f7;
    pub const ALT_BKSP: u32 = 0x1f8;
    pub const CTL_BKSP: u32 = 0x1f9;
    pub const PAD0: u32 = 0x1fa;
    pub const CTL_PAD0: u32 = 0x1fb;
    pub const ALT_PAD0: u32 = 0x205;
    pub const CTL_DEL: u32 = 0x20f;
    pub const ALT_BSLASH: u32 = 0x210;
    pub const CTL_ENTER: u32 = 0x211;
    pub const SHF_PADENTER: u32 = 0x212;
    pub const SHF_PADSLASH: u32 = 0x213;
    pub const SHF_PADSTAR: u32 = 0x214;
    pub const SHF_PADPLUS: u32 = 0x215;
    pub const SHF_PADMINUS: u32 = 0x216;
    pub const SHF_UP: u32 = 0x217;
    pub const SHF_DOWN: u32 = 0x218;
    pub const SHF_IC: u32 = 0x219;
    pub const SHF_DC: u32 = 0x21a;
    pub const KEY_MOUSE: u32 = 0x21b;
    pub const KEY_RESIZE: u32 = 0x222;
    pub const KEY_SUP: u32 = 0x223;
    pub const KEY_SDOWN: u32 = 0x224;

    /// `KEY_F(n)`.
    #[must_use]
    pub const fn key_f(n: u32) -> u32 {
        KEY_F0 + n
    }
}

/// Distance between PDCursesMod key codes (`KEY_OFFSET + n`, `KEY_OFFSET ==
/// 0xEC00`) and the PDCurses codes they mirror (`0x100 + n`).
pub const PDCURSESMOD_OFFSET: u32 = 0xEC00 - 0x100;

impl KeyTable {
    /// Every table, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::NCursesAbi5,
        Self::NCursesAbi6,
        Self::PdCurses,
        Self::PdCursesMod,
    ];

    /// Read result that marks a function-key code (`KEY_CODE_YES`).
    #[must_use]
    pub const fn function_key_sentinel(self) -> i32 {
        match self {
            Self::NCursesAbi5 | Self::NCursesAbi6 => ncurses::KEY_CODE_YES as i32,
            Self::PdCurses | Self::PdCursesMod => pdcurses::KEY_CODE_YES as i32,
        }
    }

    /// Constant added to every native key code relative to the base layout.
    #[must_use]
    pub const fn offset(self) -> u32 {
        match self {
            Self::PdCursesMod => PDCURSESMOD_OFFSET,
            _ => 0,
        }
    }

    /// Strip the table's offset from a raw native code.
    #[must_use]
    pub const fn normalize(self, raw: u32) -> u32 {
        raw.wrapping_sub(self.offset())
    }

    /// The native code for a base-layout code (inverse of [`Self::normalize`]).
    #[must_use]
    pub const fn native(self, code: u32) -> u32 {
        code.wrapping_add(self.offset())
    }

    /// `KEY_MOUSE` in the base layout.
    #[must_use]
    pub const fn mouse_code(self) -> u32 {
        match self {
            Self::NCursesAbi5 | Self::NCursesAbi6 => ncurses::KEY_MOUSE,
            Self::PdCurses | Self::PdCursesMod => pdcurses::KEY_MOUSE,
        }
    }

    /// `KEY_RESIZE` in the base layout.
    #[must_use]
    pub const fn resize_code(self) -> u32 {
        match self {
            Self::NCursesAbi5 | Self::NCursesAbi6 => ncurses::KEY_RESIZE,
            Self::PdCurses | Self::PdCursesMod => pdcurses::KEY_RESIZE,
        }
    }

    /// Look up a raw native code.
    #[must_use]
    pub fn decode(self, raw: u32) -> KeyMapping {
        let map: &HashMap<u32, KeyMapping> = match self {
            Self::NCursesAbi5 => &NCURSES_ABI5,
            Self::NCursesAbi6 => &NCURSES_ABI6,
            Self::PdCurses | Self::PdCursesMod => &PDCURSES,
        };
        map.get(&self.normalize(raw))
            .copied()
            .unwrap_or(KeyMapping::UNKNOWN)
    }

    /// Number of codes the table maps.
    #[must_use]
    pub fn len(self) -> usize {
        match self {
            Self::NCursesAbi5 => NCURSES_ABI5.len(),
            Self::NCursesAbi6 => NCURSES_ABI6.len(),
            Self::PdCurses | Self::PdCursesMod => PDCURSES.len(),
        }
    }

    /// Iterate over `(native code, mapping)` pairs in ascending code order.
    #[must_use]
    pub fn entries(self) -> Vec<(u32, KeyMapping)> {
        let map: &HashMap<u32, KeyMapping> = match self {
            Self::NCursesAbi5 => &NCURSES_ABI5,
            Self::NCursesAbi6 => &NCURSES_ABI6,
            Self::PdCurses | Self::PdCursesMod => &PDCURSES,
        };
        let mut entries: Vec<_> = map
            .iter()
            .map(|(code, mapping)| (self.native(*code), *mapping))
            .collect();
        entries.sort_unstable_by_key(|(code, _)| *code);
        entries
    }
}

static NCURSES_ABI5: LazyLock<HashMap<u32, KeyMapping>> = LazyLock::new(|| ncurses_table(false));
static NCURSES_ABI6: LazyLock<HashMap<u32, KeyMapping>> = LazyLock::new(|| ncurses_table(true));
static PDCURSES: LazyLock<HashMap<u32, KeyMapping>> = LazyLock::new(pdcurses_table);

// ---------------------------------------------------------------------------
// ncurses
// ---------------------------------------------------------------------------

const NCURSES_KEYS: &[(u32, LogicalKey, ModifierKey)] = {
    use ncurses::*;
    use LogicalKey as K;
    &[
        (KEY_BREAK, K::Break, NONE),
        (KEY_DOWN, K::KeypadDown, NONE),
        (KEY_UP, K::KeypadUp, NONE),
        (KEY_LEFT, K::KeypadLeft, NONE),
        (KEY_RIGHT, K::KeypadRight, NONE),
        (KEY_HOME, K::KeypadHome, NONE),
        (KEY_BACKSPACE, K::Backspace, NONE),
        (KEY_DL, K::DeleteLine, NONE),
        (KEY_IL, K::InsertLine, NONE),
        (KEY_DC, K::Delete, NONE),
        (KEY_IC, K::Insert, NONE),
        (KEY_CLEAR, K::Clear, NONE),
        (KEY_EOS, K::ClearToEndOfScreen, NONE),
        (KEY_EOL, K::ClearToEndOfLine, NONE),
        (KEY_SF, K::KeypadDown, SHIFT),
        (KEY_SR, K::KeypadUp, SHIFT),
        (KEY_NPAGE, K::KeypadPageDown, NONE),
        (KEY_PPAGE, K::KeypadPageUp, NONE),
        (KEY_STAB, K::SetTab, NONE),
        (KEY_CTAB, K::ClearTab, NONE),
        (KEY_CATAB, K::ClearAllTabs, NONE),
        (KEY_ENTER, K::Return, NONE),
        (KEY_SRESET, K::SoftReset, NONE),
        (KEY_RESET, K::Reset, NONE),
        (KEY_PRINT, K::Print, NONE),
        (KEY_A1, K::KeypadUpperLeft, NONE),
        (KEY_A3, K::KeypadUpperRight, NONE),
        (KEY_B2, K::KeypadCenter, NONE),
        (KEY_C1, K::KeypadLowerLeft, NONE),
        (KEY_C3, K::KeypadLowerRight, NONE),
        (KEY_BTAB, K::Tab, SHIFT),
        (KEY_BEG, K::Begin, NONE),
        (KEY_END, K::KeypadEnd, NONE),
        (KEY_EXIT, K::Exit, NONE),
        (KEY_FIND, K::Find, NONE),
        (KEY_HELP, K::Help, NONE),
        (KEY_REDO, K::Redo, NONE),
        (KEY_SBEG, K::Begin, SHIFT),
        (KEY_SDC, K::Delete, SHIFT),
        (KEY_SDL, K::DeleteLine, SHIFT),
        (KEY_SEND, K::KeypadEnd, SHIFT),
        (KEY_SEOL, K::ClearToEndOfLine, SHIFT),
        (KEY_SEXIT, K::Exit, SHIFT),
        (KEY_SFIND, K::Find, SHIFT),
        (KEY_SHELP, K::Help, SHIFT),
        (KEY_SHOME, K::KeypadHome, SHIFT),
        (KEY_SIC, K::Insert, SHIFT),
        (KEY_SLEFT, K::KeypadLeft, SHIFT),
        (KEY_SNEXT, K::KeypadPageDown, SHIFT),
        (KEY_SPREVIOUS, K::KeypadPageUp, SHIFT),
        (KEY_SPRINT, K::Print, SHIFT),
        (KEY_SREDO, K::Redo, SHIFT),
        (KEY_SRIGHT, K::KeypadRight, SHIFT),
        (KEY_SSUSPEND, K::Suspend, SHIFT),
        (KEY_SUNDO, K::Undo, SHIFT),
        (KEY_SUSPEND, K::Suspend, NONE),
        (KEY_UNDO, K::Undo, NONE),
    ]
};

/// Modifier banks of `KEY_F(13)` onwards, twelve keys each. The last bank is
/// cut short by `KEY_F(63)`.
const NCURSES_F_BANKS: [ModifierKey; 6] = [NONE, SHIFT, CTRL, SHIFT_CTRL, ALT, SHIFT_ALT];
const NCURSES_MAX_F: u32 = 63;

/// xterm user-defined capabilities in terminfo (alphabetical) order, with
/// whether the unsuffixed capability exists in ABI 6 descriptions.
const NCURSES_USER_KEYS: [(LogicalKey, bool); 10] = [
    (LogicalKey::Delete, false),        // kDC
    (LogicalKey::KeypadDown, true),     // kDN
    (LogicalKey::KeypadEnd, false),     // kEND
    (LogicalKey::KeypadHome, false),    // kHOM
    (LogicalKey::Insert, false),        // kIC
    (LogicalKey::KeypadLeft, false),    // kLFT
    (LogicalKey::KeypadPageDown, false), // kNXT
    (LogicalKey::KeypadPageUp, false),  // kPRV
    (LogicalKey::KeypadRight, false),   // kRIT
    (LogicalKey::KeypadUp, true),       // kUP
];

/// xterm modifier parameters 3..=7.
const XTERM_SUFFIXES: [ModifierKey; 5] = [ALT, SHIFT_ALT, CTRL, SHIFT_CTRL, CTRL_ALT];

fn ncurses_table(abi6: bool) -> HashMap<u32, KeyMapping> {
    let mut map = HashMap::with_capacity(192);

    for &(code, key, modifiers) in NCURSES_KEYS {
        map.insert(code, KeyMapping::new(key, modifiers));
    }

    for n in 1..=NCURSES_MAX_F {
        let bank = ((n - 1) / 12) as usize;
        let key = LogicalKey::function(((n - 1) % 12 + 1) as u8);
        if let Some(key) = key {
            map.insert(
                ncurses::key_f(n),
                KeyMapping::new(key, NCURSES_F_BANKS[bank]),
            );
        }
    }

    let mut code = ncurses::USER_KEY_BASE;
    for (key, has_plain) in NCURSES_USER_KEYS {
        if abi6 && has_plain {
            map.insert(code, KeyMapping::new(key, SHIFT));
            code += 1;
        }
        for modifiers in XTERM_SUFFIXES {
            map.insert(code, KeyMapping::new(key, modifiers));
            code += 1;
        }
    }

    map
}

// ---------------------------------------------------------------------------
// PDCurses
// ---------------------------------------------------------------------------

const PDCURSES_KEYS: &[(u32, LogicalKey, ModifierKey)] = {
    use pdcurses::*;
    use LogicalKey as K;
    &[
        (KEY_BREAK, K::Break, NONE),
        (KEY_DOWN, K::KeypadDown, NONE),
        (KEY_UP, K::KeypadUp, NONE),
        (KEY_LEFT, K::KeypadLeft, NONE),
        (KEY_RIGHT, K::KeypadRight, NONE),
        (KEY_HOME, K::KeypadHome, NONE),
        (KEY_BACKSPACE, K::Backspace, NONE),
        (KEY_DL, K::DeleteLine, NONE),
        (KEY_IL, K::InsertLine, NONE),
        (KEY_DC, K::Delete, NONE),
        (KEY_IC, K::Insert, NONE),
        (KEY_CLEAR, K::Clear, NONE),
        (KEY_EOS, K::ClearToEndOfScreen, NONE),
        (KEY_EOL, K::ClearToEndOfLine, NONE),
        (KEY_SF, K::KeypadDown, SHIFT),
        (KEY_SR, K::KeypadUp, SHIFT),
        (KEY_NPAGE, K::KeypadPageDown, NONE),
        (KEY_PPAGE, K::KeypadPageUp, NONE),
        (KEY_STAB, K::SetTab, NONE),
        (KEY_CTAB, K::ClearTab, NONE),
        (KEY_CATAB, K::ClearAllTabs, NONE),
        (KEY_ENTER, K::Return, NONE),
        (KEY_SRESET, K::SoftReset, NONE),
        (KEY_RESET, K::Reset, NONE),
        (KEY_PRINT, K::Print, NONE),
        (KEY_SHELP, K::Help, SHIFT),
        (KEY_BTAB, K::Tab, SHIFT),
        (KEY_BEG, K::Begin, NONE),
        (KEY_END, K::KeypadEnd, NONE),
        (KEY_EXIT, K::Exit, NONE),
        (KEY_FIND, K::Find, NONE),
        (KEY_HELP, K::Help, NONE),
        (KEY_REDO, K::Redo, NONE),
        (KEY_SBEG, K::Begin, SHIFT),
        (KEY_SDC, K::Delete, SHIFT),
        (KEY_SDL, K::DeleteLine, SHIFT),
        (KEY_SEND, K::KeypadEnd, SHIFT),
        (KEY_SEOL, K::ClearToEndOfLine, SHIFT),
        (KEY_SEXIT, K::Exit, SHIFT),
        (KEY_SFIND, K::Find, SHIFT),
        (KEY_SHOME, K::KeypadHome, SHIFT),
        (KEY_SIC, K::Insert, SHIFT),
        (KEY_SLEFT, K::KeypadLeft, SHIFT),
        (KEY_SNEXT, K::KeypadPageDown, SHIFT),
        (KEY_SPREVIOUS, K::KeypadPageUp, SHIFT),
        (KEY_SPRINT, K::Print, SHIFT),
        (KEY_SREDO, K::Redo, SHIFT),
        (KEY_SRIGHT, K::KeypadRight, SHIFT),
        (KEY_SSUSPEND, K::Suspend, SHIFT),
        (KEY_SUNDO, K::Undo, SHIFT),
        (KEY_SUSPEND, K::Suspend, NONE),
        (KEY_UNDO, K::Undo, NONE),
        (CTL_LEFT, K::KeypadLeft, CTRL),
        (CTL_RIGHT, K::KeypadRight, CTRL),
        (CTL_PGUP, K::KeypadPageUp, CTRL),
        (CTL_PGDN, K::KeypadPageDown, CTRL),
        (CTL_HOME, K::KeypadHome, CTRL),
        (CTL_END, K::KeypadEnd, CTRL),
        (KEY_A1, K::KeypadUpperLeft, NONE),
        (KEY_A2, K::KeypadUp, NONE),
        (KEY_A3, K::KeypadUpperRight, NONE),
        (KEY_B1, K::KeypadLeft, NONE),
        (KEY_B2, K::KeypadCenter, NONE),
        (KEY_B3, K::KeypadRight, NONE),
        (KEY_C1, K::KeypadLowerLeft, NONE),
        (KEY_C2, K::KeypadDown, NONE),
        (KEY_C3, K::KeypadLowerRight, NONE),
        (PADENTER, K::Return, NONE),
        (CTL_PADENTER, K::Return, CTRL),
        (ALT_PADENTER, K::Return, ALT),
        (CTL_PADCENTER, K::KeypadCenter, CTRL),
        (CTL_INS, K::Insert, CTRL),
        (ALT_DEL, K::Delete, ALT),
        (ALT_INS, K::Insert, ALT),
        (CTL_UP, K::KeypadUp, CTRL),
        (CTL_DOWN, K::KeypadDown, CTRL),
        (CTL_TAB, K::Tab, CTRL),
        (ALT_TAB, K::Tab, ALT),
        (ALT_HOME, K::KeypadHome, ALT),
        (ALT_PGUP, K::KeypadPageUp, ALT),
        (ALT_PGDN, K::KeypadPageDown, ALT),
        (ALT_END, K::KeypadEnd, ALT),
        (ALT_UP, K::KeypadUp, ALT),
        (ALT_DOWN, K::KeypadDown, ALT),
        (ALT_RIGHT, K::KeypadRight, ALT),
        (ALT_LEFT, K::KeypadLeft, ALT),
        (ALT_ENTER, K::Return, ALT),
        (ALT_ESC, K::Escape, ALT),
        (ALT_BKSP, K::Backspace, ALT),
        (CTL_BKSP, K::Backspace, CTRL),
        (CTL_DEL, K::Delete, CTRL),
        (CTL_ENTER, K::Return, CTRL),
        (SHF_PADENTER, K::Return, SHIFT),
        (SHF_UP, K::KeypadUp, SHIFT),
        (SHF_DOWN, K::KeypadDown, SHIFT),
        (SHF_IC, K::Insert, SHIFT),
        (SHF_DC, K::Delete, SHIFT),
        (KEY_SUP, K::KeypadUp, SHIFT),
        (KEY_SDOWN, K::KeypadDown, SHIFT),
    ]
};

/// Keypad and punctuation codes that decode to a character.
const PDCURSES_CHAR_KEYS: &[(u32, char, ModifierKey)] = {
    use pdcurses::*;
    &[
        (PADSLASH, '/', NONE),
        (PADSTOP, '.', NONE),
        (PADSTAR, '*', NONE),
        (PADMINUS, '-', NONE),
        (PADPLUS, '+', NONE),
        (CTL_PADSTOP, '.', CTRL),
        (CTL_PADPLUS, '+', CTRL),
        (CTL_PADMINUS, '-', CTRL),
        (CTL_PADSLASH, '/', CTRL),
        (CTL_PADSTAR, '*', CTRL),
        (ALT_PADPLUS, '+', ALT),
        (ALT_PADMINUS, '-', ALT),
        (ALT_PADSLASH, '/', ALT),
        (ALT_PADSTAR, '*', ALT),
        (ALT_PADSTOP, '.', ALT),
        (ALT_MINUS, '-', ALT),
        (ALT_EQUAL, '=', ALT),
        (ALT_BQUOTE, '`', ALT),
        (ALT_LBRACKET, '[', ALT),
        (ALT_RBRACKET, ']', ALT),
        (ALT_SEMICOLON, ';', ALT),
        (ALT_FQUOTE, '\'', ALT),
        (ALT_COMMA, ',', ALT),
        (ALT_STOP, '.', ALT),
        (ALT_FSLASH, '/', ALT),
        (ALT_BSLASH, '\\', ALT),
        (SHF_PADSLASH, '/', SHIFT),
        (SHF_PADSTAR, '*', SHIFT),
        (SHF_PADPLUS, '+', SHIFT),
        (SHF_PADMINUS, '-', SHIFT),
        (PAD0, '0', NONE),
    ]
};

/// Modifier banks of `KEY_F(13)` onwards on PDCurses, twelve keys each.
const PDCURSES_F_BANKS: [ModifierKey; 4] = [NONE, SHIFT, CTRL, ALT];

fn pdcurses_table() -> HashMap<u32, KeyMapping> {
    let mut map = HashMap::with_capacity(256);

    for &(code, key, modifiers) in PDCURSES_KEYS {
        map.insert(code, KeyMapping::new(key, modifiers));
    }
    for &(code, ch, modifiers) in PDCURSES_CHAR_KEYS {
        map.insert(code, KeyMapping::character(ch, modifiers));
    }

    for (bank, modifiers) in PDCURSES_F_BANKS.into_iter().enumerate() {
        for n in 1..=12u8 {
            if let Some(key) = LogicalKey::function(n) {
                let code = pdcurses::key_f(bank as u32 * 12 + n as u32);
                map.insert(code, KeyMapping::new(key, modifiers));
            }
        }
    }

    for (i, ch) in ('0'..='9').enumerate() {
        map.insert(pdcurses::ALT_0 + i as u32, KeyMapping::character(ch, ALT));
    }
    for (i, ch) in ('a'..='z').enumerate() {
        map.insert(pdcurses::ALT_A + i as u32, KeyMapping::character(ch, ALT));
    }
    // CTL_PAD1..=CTL_PAD9 follow CTL_PAD0, ALT_PAD1..=ALT_PAD9 follow ALT_PAD0.
    for (i, ch) in ('0'..='9').enumerate() {
        map.insert(pdcurses::CTL_PAD0 + i as u32, KeyMapping::character(ch, CTRL));
        map.insert(pdcurses::ALT_PAD0 + i as u32, KeyMapping::character(ch, ALT));
    }

    map
}
