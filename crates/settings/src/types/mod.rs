//! Settings type definitions.
//!
//! Responsibilities:
//! - Define the settings record, its provider groups, and the provider enum.
//! - Provide the masked secret wrapper used for every credential field.
//!
//! Does NOT handle:
//! - Loading values from the environment or `.env` files (see `loader` module).
//!
//! Invariants:
//! - All credentials use `MaskedSecret` to prevent accidental logging.

mod provider;
mod secret;
mod settings;

pub use provider::Provider;
pub use secret::MaskedSecret;
pub use settings::{
    GroqSettings, HuggingFaceSettings, LangfuseSettings, MistralSettings, OllamaSettings,
    OpenRouterSettings, Settings, TogetherSettings,
};
