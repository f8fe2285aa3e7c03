//! Environment variable parsing for provider settings.
//!
//! Responsibilities:
//! - Read provider variables from an `EnvSource` and apply them to a loader.
//! - Provide helper functions for reading variables with blank-value filtering.
//!
//! Does NOT handle:
//! - `.env` file loading (see builder.rs and source.rs).
//! - Building the final `Settings` (see builder.rs).
//!
//! Invariants:
//! - Empty or whitespace-only values are treated as unset.
//! - Any other value is returned exactly as given, surrounding whitespace included.
//! - Unreadable values propagate as `ConfigError::InvalidValue` naming the variable.

use super::builder::SettingsLoader;
use super::error::ConfigError;
use super::source::{EnvSource, ProcessEnv};
use crate::constants::{
    GROQ_API_KEY, HUGGINGFACE_API_KEY, LANGFUSE_HOST, LANGFUSE_PUBLIC_KEY, LANGFUSE_SECRET_KEY,
    MISTRAL_API_KEY, OLLAMA_API_KEY, OLLAMA_URL, OPENROUTER_API_KEY, OPENROUTER_URL,
    TOGETHER_API_KEY,
};
use crate::types::{MaskedSecret, Provider};

/// Read a process environment variable, returning None if unset, empty, or whitespace-only.
pub fn env_var_or_none(key: &str) -> Result<Option<String>, ConfigError> {
    source_var_or_none(&ProcessEnv, key)
}

/// Read a variable from `source` with the same filtering as [`env_var_or_none`].
pub fn source_var_or_none(
    source: &dyn EnvSource,
    key: &str,
) -> Result<Option<String>, ConfigError> {
    Ok(source.get(key)?.filter(|s| !s.trim().is_empty()))
}

/// Apply variables from `source` to the loader.
///
/// Only variables that are present overwrite loader slots, so builder
/// values set afterwards still take precedence.
pub fn apply_env(loader: &mut SettingsLoader, source: &dyn EnvSource) -> Result<(), ConfigError> {
    let secret = |key: &str| -> Result<Option<MaskedSecret>, ConfigError> {
        Ok(source_var_or_none(source, key)?.map(MaskedSecret::new))
    };

    if let Some(key) = secret(OLLAMA_API_KEY)? {
        loader.set_api_key(Provider::Ollama, Some(key));
    }
    if let Some(url) = source_var_or_none(source, OLLAMA_URL)? {
        loader.set_ollama_url(Some(url));
    }
    if let Some(key) = secret(GROQ_API_KEY)? {
        loader.set_api_key(Provider::Groq, Some(key));
    }
    if let Some(key) = secret(TOGETHER_API_KEY)? {
        loader.set_api_key(Provider::Together, Some(key));
    }
    if let Some(key) = secret(LANGFUSE_SECRET_KEY)? {
        loader.set_api_key(Provider::Langfuse, Some(key));
    }
    if let Some(key) = secret(LANGFUSE_PUBLIC_KEY)? {
        loader.set_langfuse_public_key(Some(key));
    }
    if let Some(host) = source_var_or_none(source, LANGFUSE_HOST)? {
        loader.set_langfuse_host(Some(host));
    }
    if let Some(key) = secret(OPENROUTER_API_KEY)? {
        loader.set_api_key(Provider::OpenRouter, Some(key));
    }
    if let Some(url) = source_var_or_none(source, OPENROUTER_URL)? {
        loader.set_openrouter_url(Some(url));
    }
    if let Some(key) = secret(MISTRAL_API_KEY)? {
        loader.set_api_key(Provider::Mistral, Some(key));
    }
    if let Some(key) = secret(HUGGINGFACE_API_KEY)? {
        loader.set_api_key(Provider::HuggingFace, Some(key));
    }

    Ok(())
}
