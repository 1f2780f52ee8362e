//! Environment-driven profile overrides.
//!
//! These tests mutate the process environment, so they live in their own
//! test binary and serialize on `ENV_LOCK`.

use std::env;
use std::sync::Mutex;

use polycurses_core::key_table::KeyTable;
use polycurses_core::mouse::MouseProtocol;
use polycurses_core::profile::{
    BackendProfile, MOUSE_VERSION_ENV, NCURSES_ABI_ENV, NCursesAbi, ProfileOverride,
};

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn set_overrides(abi: Option<&str>, mouse: Option<&str>) {
    // SAFETY: every test in this binary holds ENV_LOCK while touching the
    // environment.
    unsafe {
        match abi {
            Some(value) => env::set_var(NCURSES_ABI_ENV, value),
            None => env::remove_var(NCURSES_ABI_ENV),
        }
        match mouse {
            Some(value) => env::set_var(MOUSE_VERSION_ENV, value),
            None => env::remove_var(MOUSE_VERSION_ENV),
        }
    }
}

#[test]
fn from_env_reads_both_variables() {
    let _guard = ENV_LOCK.lock().expect("env lock poisoned");
    set_overrides(Some("5"), Some("pdcurses"));
    let overrides = ProfileOverride::from_env();
    set_overrides(None, None);

    assert_eq!(overrides.ncurses_abi, Some(NCursesAbi::Abi5));
    assert_eq!(overrides.mouse, Some(MouseProtocol::PdCursesModVariant));
    let profile = overrides.apply_to(BackendProfile::ncurses(NCursesAbi::Abi6));
    assert_eq!(profile.key_table, KeyTable::NCursesAbi5);
    assert_eq!(profile.mouse, MouseProtocol::PdCursesModVariant);
}

#[test]
fn from_env_ignores_invalid_values() {
    let _guard = ENV_LOCK.lock().expect("env lock poisoned");
    set_overrides(Some("seven"), Some("3"));
    let overrides = ProfileOverride::from_env();
    set_overrides(None, None);

    assert!(overrides.is_empty());
}

#[test]
fn from_env_without_variables_is_empty() {
    let _guard = ENV_LOCK.lock().expect("env lock poisoned");
    set_overrides(None, None);
    assert_eq!(ProfileOverride::from_env(), ProfileOverride::new());
}
