//! Centralized constants for provider settings.
//!
//! Environment variable names and default values live here so the loader,
//! the record types, and the tests agree on a single spelling.

// =============================================================================
// Dotenv
// =============================================================================

/// Default `.env` file name, resolved against the working directory.
pub const DOTENV_FILE_NAME: &str = ".env";

/// Setting this to `1` or `true` skips all `.env` file reading.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

/// Textual representation of any non-empty secret.
pub const SECRET_MASK: &str = "**********";

// =============================================================================
// Ollama
// =============================================================================

pub const OLLAMA_API_KEY: &str = "OLLAMA_API_KEY";
pub const OLLAMA_URL: &str = "OLLAMA_URL";

/// Default Ollama endpoint (OpenAI-compatible API on the local daemon).
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434/v1";

// =============================================================================
// Groq / Together AI
// =============================================================================

pub const GROQ_API_KEY: &str = "GROQ_API_KEY";
pub const TOGETHER_API_KEY: &str = "TOGETHER_API_KEY";

// =============================================================================
// Langfuse
// =============================================================================

pub const LANGFUSE_SECRET_KEY: &str = "LANGFUSE_SECRET_KEY";
pub const LANGFUSE_PUBLIC_KEY: &str = "LANGFUSE_PUBLIC_KEY";
pub const LANGFUSE_HOST: &str = "LANGFUSE_HOST";

/// Default Langfuse host (hosted cloud instance).
pub const DEFAULT_LANGFUSE_HOST: &str = "https://cloud.langfuse.com";

// =============================================================================
// OpenRouter
// =============================================================================

pub const OPENROUTER_API_KEY: &str = "OPENROUTER_API_KEY";
pub const OPENROUTER_URL: &str = "OPENROUTER_URL";

/// Default OpenRouter API endpoint.
pub const DEFAULT_OPENROUTER_URL: &str = "https://openrouter.ai/api/v1";

// =============================================================================
// Mistral AI / Hugging Face
// =============================================================================

pub const MISTRAL_API_KEY: &str = "MISTRAL_API_KEY";
pub const HUGGINGFACE_API_KEY: &str = "HUGGINGFACE_API_KEY";

/// Every variable the loader reads, in record order.
pub const KNOWN_VARS: [&str; 11] = [
    OLLAMA_API_KEY,
    OLLAMA_URL,
    GROQ_API_KEY,
    TOGETHER_API_KEY,
    LANGFUSE_SECRET_KEY,
    LANGFUSE_PUBLIC_KEY,
    LANGFUSE_HOST,
    OPENROUTER_API_KEY,
    OPENROUTER_URL,
    MISTRAL_API_KEY,
    HUGGINGFACE_API_KEY,
];
