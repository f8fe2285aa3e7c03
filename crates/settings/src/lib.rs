//! Provider credentials and endpoints loaded from the environment.
//!
//! This crate builds an immutable [`Settings`] record for several LLM API
//! providers from process environment variables and an optional `.env`
//! file. Credentials are held as [`MaskedSecret`] values whose textual
//! form never reveals the secret.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{
    ConfigError, EnvSource, Layered, MapEnv, ProcessEnv, SettingsLoader, env_var_or_none, load,
    refresh, source_var_or_none,
};
pub use secrecy::ExposeSecret;
pub use types::{
    GroqSettings, HuggingFaceSettings, LangfuseSettings, MaskedSecret, MistralSettings,
    OllamaSettings, OpenRouterSettings, Provider, Settings, TogetherSettings,
};
