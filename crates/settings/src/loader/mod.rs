//! Settings loader for environment variables and `.env` files.
//!
//! Responsibilities:
//! - Load provider settings from an env source and an optional `.env` file.
//! - Provide a builder-pattern `SettingsLoader` for layered resolution.
//! - Provide the `load` and `refresh` entry points.
//!
//! Does NOT handle:
//! - Masking or rendering secrets (see `types` module).
//!
//! Invariants / Assumptions:
//! - Environment values take precedence over `.env` values, except after `refresh`.
//! - The `DOTENV_DISABLED` variable is checked before any `.env` file is read.

mod builder;
mod env;
mod error;
mod source;

#[cfg(test)]
mod tests;

pub use builder::{SettingsLoader, load, refresh};
pub use env::{env_var_or_none, source_var_or_none};
pub use error::ConfigError;
pub use source::{EnvSource, Layered, MapEnv, ProcessEnv};
