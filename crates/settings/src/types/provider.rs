//! External API providers tracked by the settings record.

use std::fmt;

use serde::Serialize;

use crate::constants::{
    GROQ_API_KEY, HUGGINGFACE_API_KEY, LANGFUSE_HOST, LANGFUSE_SECRET_KEY, MISTRAL_API_KEY,
    OLLAMA_API_KEY, OLLAMA_URL, OPENROUTER_API_KEY, OPENROUTER_URL, TOGETHER_API_KEY,
};

/// An external API vendor whose credentials form one field group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    Ollama,
    Groq,
    Together,
    Langfuse,
    OpenRouter,
    Mistral,
    HuggingFace,
}

impl Provider {
    /// All providers, in record order.
    pub const ALL: [Provider; 7] = [
        Provider::Ollama,
        Provider::Groq,
        Provider::Together,
        Provider::Langfuse,
        Provider::OpenRouter,
        Provider::Mistral,
        Provider::HuggingFace,
    ];

    /// Human-readable vendor name.
    pub fn display_name(self) -> &'static str {
        match self {
            Provider::Ollama => "Ollama",
            Provider::Groq => "Groq",
            Provider::Together => "Together AI",
            Provider::Langfuse => "Langfuse",
            Provider::OpenRouter => "OpenRouter",
            Provider::Mistral => "Mistral AI",
            Provider::HuggingFace => "Hugging Face",
        }
    }

    /// Variable holding the provider's primary credential.
    ///
    /// For Langfuse this is the secret key; the public key is not a credential
    /// on its own.
    pub fn api_key_var(self) -> &'static str {
        match self {
            Provider::Ollama => OLLAMA_API_KEY,
            Provider::Groq => GROQ_API_KEY,
            Provider::Together => TOGETHER_API_KEY,
            Provider::Langfuse => LANGFUSE_SECRET_KEY,
            Provider::OpenRouter => OPENROUTER_API_KEY,
            Provider::Mistral => MISTRAL_API_KEY,
            Provider::HuggingFace => HUGGINGFACE_API_KEY,
        }
    }

    /// Variable holding the provider's endpoint, if it has one.
    pub fn base_url_var(self) -> Option<&'static str> {
        match self {
            Provider::Ollama => Some(OLLAMA_URL),
            Provider::Langfuse => Some(LANGFUSE_HOST),
            Provider::OpenRouter => Some(OPENROUTER_URL),
            _ => None,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
