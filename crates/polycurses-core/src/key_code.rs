#![forbid(unsafe_code)]

//! Classification of raw wide-character reads.
//!
//! `wget_wch` reports two values: a status (`ERR`, `OK`, or `KEY_CODE_YES`)
//! and the code it stored. [`classify`] turns that pair into a
//! [`KeyCodeType`] so the event assembler knows which decoder to hand the
//! code to. The function is total: every `i32 × u32` input yields a class.

use crate::key_table::KeyTable;

/// What a raw read represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCodeType {
    /// A character; the code is a Unicode scalar value.
    Character,
    /// A function key; decode with [`KeyTable::decode`].
    Key,
    /// `KEY_MOUSE`; fetch the mouse state.
    Mouse,
    /// `KEY_RESIZE`.
    Resize,
    /// The read failed or timed out.
    Unknown,
}

/// Classify one `wget_wch` result against a key table.
#[must_use]
pub const fn classify(table: KeyTable, read_result: i32, raw: u32) -> KeyCodeType {
    if crate::failed(read_result) {
        return KeyCodeType::Unknown;
    }
    if read_result != table.function_key_sentinel() {
        return KeyCodeType::Character;
    }
    let code = table.normalize(raw);
    if code == table.resize_code() {
        KeyCodeType::Resize
    } else if code == table.mouse_code() {
        KeyCodeType::Mouse
    } else {
        KeyCodeType::Key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key_table::{ncurses, pdcurses};

    const OK: i32 = 0;

    #[test]
    fn failed_read_is_unknown() {
        for table in KeyTable::ALL {
            assert_eq!(classify(table, -1, 'a' as u32), KeyCodeType::Unknown);
            assert_eq!(classify(table, i32::MIN, 0), KeyCodeType::Unknown);
        }
    }

    #[test]
    fn ok_read_is_character() {
        for table in KeyTable::ALL {
            assert_eq!(classify(table, OK, 'a' as u32), KeyCodeType::Character);
            // A key-looking code without the sentinel is still a character.
            assert_eq!(
                classify(table, OK, table.native(table.mouse_code())),
                KeyCodeType::Character
            );
        }
    }

    #[test]
    fn ncurses_sentinels() {
        let yes = ncurses::KEY_CODE_YES as i32;
        for table in [KeyTable::NCursesAbi5, KeyTable::NCursesAbi6] {
            assert_eq!(classify(table, yes, 409), KeyCodeType::Mouse);
            assert_eq!(classify(table, yes, 410), KeyCodeType::Resize);
            assert_eq!(classify(table, yes, ncurses::KEY_UP), KeyCodeType::Key);
        }
    }

    #[test]
    fn pdcurses_sentinels() {
        let yes = pdcurses::KEY_CODE_YES as i32;
        let t = KeyTable::PdCurses;
        assert_eq!(classify(t, yes, 0x21b), KeyCodeType::Mouse);
        assert_eq!(classify(t, yes, 0x222), KeyCodeType::Resize);
        assert_eq!(classify(t, yes, pdcurses::KEY_UP), KeyCodeType::Key);
    }

    #[test]
    fn pdcursesmod_offsets_sentinels() {
        let yes = pdcurses::KEY_CODE_YES as i32;
        let t = KeyTable::PdCursesMod;
        assert_eq!(classify(t, yes, 0xEC00 + 0x11b), KeyCodeType::Mouse);
        assert_eq!(classify(t, yes, 0xEC00 + 0x122), KeyCodeType::Resize);
        // Unshifted sentinels are ordinary key codes here.
        assert_eq!(classify(t, yes, 0x21b), KeyCodeType::Key);
    }

    #[test]
    fn offset_subtraction_wraps() {
        let yes = pdcurses::KEY_CODE_YES as i32;
        assert_eq!(classify(KeyTable::PdCursesMod, yes, 0), KeyCodeType::Key);
        assert_eq!(classify(KeyTable::PdCursesMod, yes, u32::MAX), KeyCodeType::Key);
    }
}
