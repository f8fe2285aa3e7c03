//! Tests for the settings loader.
//!
//! Responsibilities:
//! - Test builder methods and defaults.
//! - Test environment variable handling and precedence.
//! - Test `.env` reading, `refresh` override semantics, and log hygiene.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Every known provider variable is cleared for the duration of a test.

use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::TempDir;

use crate::constants::{DOTENV_DISABLED_VAR, KNOWN_VARS};


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Run `f` with every provider variable unset, plus the given overrides.
///
/// All touched variables are restored afterwards, including any written
/// by `refresh` inside `f`.
pub fn with_clean_env<R>(overrides: &[(&str, Option<&str>)], f: impl FnOnce() -> R) -> R {
    let mut vars: Vec<(&str, Option<&str>)> = KNOWN_VARS
        .iter()
        .chain(std::iter::once(&DOTENV_DISABLED_VAR))
        .filter(|k| !overrides.iter().any(|(o, _)| o == *k))
        .map(|k| (*k, None))
        .collect();
    vars.extend_from_slice(overrides);
    temp_env::with_vars(vars, f)
}

/// RAII guard for temporarily changing the current working directory.
pub struct CwdGuard {
    original_dir: PathBuf,
}

impl CwdGuard {
    pub fn new(temp_dir: &TempDir) -> Self {
        let original_dir = std::env::current_dir().expect("Failed to get current directory");
        std::env::set_current_dir(temp_dir.path()).expect("Failed to set current directory");
        Self { original_dir }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}
