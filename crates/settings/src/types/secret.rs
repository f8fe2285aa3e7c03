//! Masked secret values.
//!
//! Responsibilities:
//! - Wrap `secrecy::SecretString` with a fixed textual representation.
//! - Serialize secrets as the mask so records can be dumped safely.
//!
//! Does NOT handle:
//! - Reading secrets from the environment (see `loader` module).
//!
//! Invariants:
//! - `Display`, `Debug`, and `Serialize` never emit the underlying value.
//! - Non-empty secrets render as `SECRET_MASK`; empty secrets render as "".
//! - The only way to reach the value is `ExposeSecret::expose_secret`.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, Serializer};

use crate::constants::SECRET_MASK;

/// A secret string whose textual form is always masked.
#[derive(Clone)]
pub struct MaskedSecret(SecretString);

impl MaskedSecret {
    /// Wrap a plain string as a secret.
    pub fn new(value: impl Into<String>) -> Self {
        let value: String = value.into();
        Self(SecretString::new(value.into()))
    }

    /// An empty secret, the default for every credential field.
    pub fn empty() -> Self {
        Self::new(String::new())
    }

    /// Whether the underlying value is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.expose_secret().is_empty()
    }

    fn mask(&self) -> &'static str {
        if self.is_empty() { "" } else { SECRET_MASK }
    }
}

impl Default for MaskedSecret {
    fn default() -> Self {
        Self::empty()
    }
}

impl ExposeSecret<str> for MaskedSecret {
    fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}

impl From<SecretString> for MaskedSecret {
    fn from(secret: SecretString) -> Self {
        Self(secret)
    }
}

impl fmt::Display for MaskedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mask())
    }
}

impl fmt::Debug for MaskedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MaskedSecret({:?})", self.mask())
    }
}

impl PartialEq for MaskedSecret {
    fn eq(&self, other: &Self) -> bool {
        self.expose_secret() == other.expose_secret()
    }
}

impl Eq for MaskedSecret {}

impl Serialize for MaskedSecret {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.mask())
    }
}
