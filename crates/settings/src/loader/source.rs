//! Key-value sources that stand in for the process environment.
//!
//! Responsibilities:
//! - Define the `EnvSource` seam the loader reads variables through.
//! - Provide the process environment, in-memory maps, and layered lookups.
//! - Read a `.env` file into a map without touching the process environment.
//!
//! Does NOT handle:
//! - Empty-value filtering (see env.rs).
//! - Writing `.env` values into the process environment (see builder.rs).
//!
//! Invariants:
//! - Lookups are case-insensitive; an exact-case match wins over a folded one.
//! - `Layered` returns the first source that has the key, in insertion order.
//! - A value that is not valid UTF-8 is an `InvalidValue` error, never "unset".

use std::collections::BTreeMap;
use std::env::VarError;
use std::ffi::OsString;
use std::fmt;
use std::path::Path;

use super::error::ConfigError;

/// A read-only source of environment-style variables.
pub trait EnvSource {
    /// Look up `key`, returning `Ok(None)` if the source does not define it.
    ///
    /// Fails with `ConfigError::InvalidValue` if the value exists but cannot
    /// be read as a string.
    fn get(&self, key: &str) -> Result<Option<String>, ConfigError>;
}

/// The live process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

fn not_unicode(key: &str) -> ConfigError {
    tracing::warn!(var = key, "Environment value is not valid UTF-8");
    ConfigError::InvalidValue {
        var: key.to_string(),
        message: "must be valid UTF-8".to_string(),
    }
}

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        match std::env::var(key) {
            Ok(value) => return Ok(Some(value)),
            Err(VarError::NotUnicode(_)) => return Err(not_unicode(key)),
            Err(VarError::NotPresent) => {}
        }

        let folded: Option<OsString> = std::env::vars_os().find_map(|(k, v)| {
            k.to_str()
                .filter(|k| k.eq_ignore_ascii_case(key))
                .map(|_| v)
        });
        match folded {
            Some(value) => value.into_string().map(Some).map_err(|_| not_unicode(key)),
            None => Ok(None),
        }
    }
}

/// An owned, isolated set of variables.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: BTreeMap<String, String>,
}

// Values may be secrets; only keys are printed.
impl fmt::Debug for MapEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapEnv")
            .field("keys", &self.vars.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a variable.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Parse a `.env` file into a map.
    ///
    /// Returns `Ok(None)` if the file does not exist. Parse and I/O failures
    /// are reported without the offending line.
    pub fn from_dotenv_file(path: &Path) -> Result<Option<Self>, ConfigError> {
        let iter = match dotenvy::from_path_iter(path) {
            Ok(iter) => iter,
            Err(e) if ConfigError::is_dotenv_not_found(&e) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut vars = BTreeMap::new();
        for item in iter {
            let (key, value) = item?;
            vars.insert(key, value);
        }
        Ok(Some(Self { vars }))
    }
}

impl EnvSource for MapEnv {
    fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        if let Some(value) = self.vars.get(key) {
            return Ok(Some(value.clone()));
        }
        Ok(self
            .vars
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.clone()))
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Sources consulted in order; the first one defining a key wins.
#[derive(Default)]
pub struct Layered {
    layers: Vec<Box<dyn EnvSource>>,
}

impl Layered {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a lower-precedence layer.
    pub fn push(&mut self, source: impl EnvSource + 'static) {
        self.layers.push(Box::new(source));
    }
}

impl EnvSource for Layered {
    fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        for layer in &self.layers {
            if let Some(value) = layer.get(key)? {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        (**self).get(key)
    }
}

impl<S: EnvSource + ?Sized> EnvSource for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        (**self).get(key)
    }
}
