//! The settings record and its provider groups.
//!
//! Responsibilities:
//! - Define the immutable `Settings` record grouped by provider.
//! - Supply the documented default for every field.
//! - Offer provider-generic accessors over the groups.
//!
//! Does NOT handle:
//! - Reading environment variables or `.env` files (see `loader` module).
//! - Decoding variable values (performed by the loader before construction).
//!
//! Invariants:
//! - `Settings::default()` never fails and yields the documented defaults.
//! - `Settings` fields are private; a new record replaces an old one.
//! - Secrets are held as `MaskedSecret` and serialize as the mask.

use serde::Serialize;

use super::provider::Provider;
use super::secret::MaskedSecret;
use crate::constants::{DEFAULT_LANGFUSE_HOST, DEFAULT_OLLAMA_URL, DEFAULT_OPENROUTER_URL};

/// Ollama credentials and endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OllamaSettings {
    pub api_key: MaskedSecret,
    pub url: String,
}

impl Default for OllamaSettings {
    fn default() -> Self {
        Self {
            api_key: MaskedSecret::empty(),
            url: DEFAULT_OLLAMA_URL.to_string(),
        }
    }
}

/// Groq credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroqSettings {
    pub api_key: MaskedSecret,
}

/// Together AI credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TogetherSettings {
    pub api_key: MaskedSecret,
}

/// Langfuse key pair and host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LangfuseSettings {
    pub secret_key: MaskedSecret,
    pub public_key: MaskedSecret,
    pub host: String,
}

impl Default for LangfuseSettings {
    fn default() -> Self {
        Self {
            secret_key: MaskedSecret::empty(),
            public_key: MaskedSecret::empty(),
            host: DEFAULT_LANGFUSE_HOST.to_string(),
        }
    }
}

/// OpenRouter credentials and endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenRouterSettings {
    pub api_key: MaskedSecret,
    pub url: String,
}

impl Default for OpenRouterSettings {
    fn default() -> Self {
        Self {
            api_key: MaskedSecret::empty(),
            url: DEFAULT_OPENROUTER_URL.to_string(),
        }
    }
}

/// Mistral AI credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MistralSettings {
    pub api_key: MaskedSecret,
}

/// Hugging Face credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HuggingFaceSettings {
    pub api_key: MaskedSecret,
}

/// Credentials and endpoints for every supported provider.
///
/// Build one with [`crate::load`], [`crate::refresh`], or
/// [`crate::SettingsLoader`]. The record cannot be modified after
/// construction; reload to pick up changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Settings {
    ollama: OllamaSettings,
    groq: GroqSettings,
    together: TogetherSettings,
    langfuse: LangfuseSettings,
    openrouter: OpenRouterSettings,
    mistral: MistralSettings,
    huggingface: HuggingFaceSettings,
}

impl Settings {
    pub(crate) fn from_groups(
        ollama: OllamaSettings,
        groq: GroqSettings,
        together: TogetherSettings,
        langfuse: LangfuseSettings,
        openrouter: OpenRouterSettings,
        mistral: MistralSettings,
        huggingface: HuggingFaceSettings,
    ) -> Self {
        Self {
            ollama,
            groq,
            together,
            langfuse,
            openrouter,
            mistral,
            huggingface,
        }
    }

    pub fn ollama(&self) -> &OllamaSettings {
        &self.ollama
    }

    pub fn groq(&self) -> &GroqSettings {
        &self.groq
    }

    pub fn together(&self) -> &TogetherSettings {
        &self.together
    }

    pub fn langfuse(&self) -> &LangfuseSettings {
        &self.langfuse
    }

    pub fn openrouter(&self) -> &OpenRouterSettings {
        &self.openrouter
    }

    pub fn mistral(&self) -> &MistralSettings {
        &self.mistral
    }

    pub fn huggingface(&self) -> &HuggingFaceSettings {
        &self.huggingface
    }

    pub fn ollama_url(&self) -> &str {
        &self.ollama.url
    }

    pub fn langfuse_host(&self) -> &str {
        &self.langfuse.host
    }

    pub fn openrouter_url(&self) -> &str {
        &self.openrouter.url
    }

    /// The provider's primary credential (Langfuse: the secret key).
    pub fn api_key(&self, provider: Provider) -> &MaskedSecret {
        match provider {
            Provider::Ollama => &self.ollama.api_key,
            Provider::Groq => &self.groq.api_key,
            Provider::Together => &self.together.api_key,
            Provider::Langfuse => &self.langfuse.secret_key,
            Provider::OpenRouter => &self.openrouter.api_key,
            Provider::Mistral => &self.mistral.api_key,
            Provider::HuggingFace => &self.huggingface.api_key,
        }
    }

    /// The provider's endpoint, for providers that have one.
    pub fn base_url(&self, provider: Provider) -> Option<&str> {
        match provider {
            Provider::Ollama => Some(&self.ollama.url),
            Provider::Langfuse => Some(&self.langfuse.host),
            Provider::OpenRouter => Some(&self.openrouter.url),
            _ => None,
        }
    }

    /// Whether a non-empty credential is present for the provider.
    pub fn is_configured(&self, provider: Provider) -> bool {
        !self.api_key(provider).is_empty()
    }

    /// Providers with a non-empty credential, in record order.
    pub fn configured_providers(&self) -> Vec<Provider> {
        Provider::ALL
            .into_iter()
            .filter(|p| self.is_configured(*p))
            .collect()
    }
}
