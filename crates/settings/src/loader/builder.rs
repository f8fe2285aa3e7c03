//! Settings loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `SettingsLoader` for layered settings resolution.
//! - Support loading from an env source, a `.env` file, and direct builder methods.
//! - Build the final `Settings` record, applying defaults to unset slots.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Parsing `.env` syntax (delegated to dotenvy via source.rs).
//!
//! Invariants / Assumptions:
//! - Precedence is builder methods > env source > `.env` file > defaults.
//! - `load_dotenv()` never writes the process environment.
//! - `load_dotenv_override()` writes the process environment; concurrent callers may race.
//! - `DOTENV_DISABLED` is read through the env source before any `.env` file is read.

use std::path::{Path, PathBuf};

use super::env::apply_env;
use super::error::ConfigError;
use super::source::{EnvSource, MapEnv, ProcessEnv};
use crate::constants::{DOTENV_DISABLED_VAR, DOTENV_FILE_NAME};
use crate::types::{
    GroqSettings, HuggingFaceSettings, LangfuseSettings, MaskedSecret, MistralSettings,
    OllamaSettings, OpenRouterSettings, Provider, Settings, TogetherSettings,
};

/// Loader that builds `Settings` from an env source, a `.env` file, and overrides.
pub struct SettingsLoader {
    source: Option<Box<dyn EnvSource>>,
    env_file: PathBuf,
    dotenv_skipped: bool,
    dotenv: Option<MapEnv>,
    ollama_api_key: Option<MaskedSecret>,
    ollama_url: Option<String>,
    groq_api_key: Option<MaskedSecret>,
    together_api_key: Option<MaskedSecret>,
    langfuse_secret_key: Option<MaskedSecret>,
    langfuse_public_key: Option<MaskedSecret>,
    langfuse_host: Option<String>,
    openrouter_api_key: Option<MaskedSecret>,
    openrouter_url: Option<String>,
    mistral_api_key: Option<MaskedSecret>,
    huggingface_api_key: Option<MaskedSecret>,
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// The env source with the parsed `.env` file layered underneath it.
struct DotenvView<'a> {
    primary: &'a dyn EnvSource,
    dotenv: Option<&'a MapEnv>,
}

impl EnvSource for DotenvView<'_> {
    fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        match self.primary.get(key)? {
            Some(value) => Ok(Some(value)),
            None => match self.dotenv {
                Some(dotenv) => dotenv.get(key),
                None => Ok(None),
            },
        }
    }
}

impl SettingsLoader {
    /// Create a loader reading the process environment and `./.env`.
    pub fn new() -> Self {
        Self {
            source: None,
            env_file: PathBuf::from(DOTENV_FILE_NAME),
            dotenv_skipped: false,
            dotenv: None,
            ollama_api_key: None,
            ollama_url: None,
            groq_api_key: None,
            together_api_key: None,
            langfuse_secret_key: None,
            langfuse_public_key: None,
            langfuse_host: None,
            openrouter_api_key: None,
            openrouter_url: None,
            mistral_api_key: None,
            huggingface_api_key: None,
        }
    }

    /// Read variables from `source` instead of the process environment.
    pub fn with_source(mut self, source: impl EnvSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Override the `.env` file path (relative paths resolve against the working directory).
    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = path.into();
        self
    }

    /// Never read a `.env` file, regardless of `DOTENV_DISABLED`.
    pub fn without_dotenv(mut self) -> Self {
        self.dotenv_skipped = true;
        self
    }

    /// The `.env` file path this loader reads.
    pub fn env_file(&self) -> &Path {
        &self.env_file
    }

    /// Check if dotenv loading is disabled.
    ///
    /// `DOTENV_DISABLED` is read from the injected source when one is set,
    /// otherwise from the process environment.
    fn dotenv_disabled(&self) -> Result<bool, ConfigError> {
        if self.dotenv_skipped {
            return Ok(true);
        }
        let value = match &self.source {
            Some(source) => source.get(DOTENV_DISABLED_VAR)?,
            None => ProcessEnv.get(DOTENV_DISABLED_VAR)?,
        };
        Ok(matches!(value.as_deref(), Some("true") | Some("1")))
    }

    /// Read the `.env` file as a source layered under the environment.
    ///
    /// The process environment is left untouched, and variables already set
    /// in the env source win over values from the file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    pub fn load_dotenv(mut self) -> Result<Self, ConfigError> {
        if self.dotenv_disabled()? {
            return Ok(self);
        }

        self.dotenv = MapEnv::from_dotenv_file(&self.env_file)?;
        if let Some(ref dotenv) = self.dotenv {
            tracing::debug!(
                path = %self.env_file.display(),
                vars = dotenv.len(),
                "Read .env file"
            );
        }
        Ok(self)
    }

    /// Load the `.env` file into the process environment, replacing existing values.
    ///
    /// This mutates process-wide state; concurrent callers are not serialized.
    /// Error handling matches [`SettingsLoader::load_dotenv`].
    pub fn load_dotenv_override(self) -> Result<Self, ConfigError> {
        if self.dotenv_disabled()? {
            return Ok(self);
        }

        match dotenvy::from_path_override(&self.env_file) {
            Ok(()) => {
                tracing::debug!(
                    path = %self.env_file.display(),
                    "Loaded .env file into process environment"
                );
                Ok(self)
            }
            Err(e) if ConfigError::is_dotenv_not_found(&e) => Ok(self),
            Err(e) => Err(e.into()),
        }
    }

    /// Read provider variables from the env source and any loaded `.env` file.
    ///
    /// Fails with `ConfigError::InvalidValue` if a known variable holds a
    /// value that cannot be read as a string.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        let source = self.source.take();
        let dotenv = self.dotenv.take();
        let result = {
            let primary: &dyn EnvSource = match &source {
                Some(s) => &**s,
                None => &ProcessEnv,
            };
            let view = DotenvView {
                primary,
                dotenv: dotenv.as_ref(),
            };
            apply_env(&mut self, &view)
        };
        self.source = source;
        self.dotenv = dotenv;
        result?;
        Ok(self)
    }

    /// Set the Ollama endpoint.
    pub fn with_ollama_url(mut self, url: String) -> Self {
        self.ollama_url = Some(url);
        self
    }

    /// Set the Langfuse host.
    pub fn with_langfuse_host(mut self, host: String) -> Self {
        self.langfuse_host = Some(host);
        self
    }

    /// Set the OpenRouter endpoint.
    pub fn with_openrouter_url(mut self, url: String) -> Self {
        self.openrouter_url = Some(url);
        self
    }

    /// Set a provider's primary credential (Langfuse: the secret key).
    pub fn with_api_key(mut self, provider: Provider, key: String) -> Self {
        self.set_api_key(provider, Some(MaskedSecret::new(key)));
        self
    }

    /// Set the Langfuse public key.
    pub fn with_langfuse_public_key(mut self, key: String) -> Self {
        self.langfuse_public_key = Some(MaskedSecret::new(key));
        self
    }

    /// Build the final settings record.
    ///
    /// Unset slots fall back to their documented defaults; string values are
    /// stored exactly as given.
    pub fn build(self) -> Settings {
        let ollama_defaults = OllamaSettings::default();
        let langfuse_defaults = LangfuseSettings::default();
        let openrouter_defaults = OpenRouterSettings::default();

        let ollama = OllamaSettings {
            api_key: self.ollama_api_key.unwrap_or_default(),
            url: self.ollama_url.unwrap_or(ollama_defaults.url),
        };
        let langfuse = LangfuseSettings {
            secret_key: self.langfuse_secret_key.unwrap_or_default(),
            public_key: self.langfuse_public_key.unwrap_or_default(),
            host: self.langfuse_host.unwrap_or(langfuse_defaults.host),
        };
        let openrouter = OpenRouterSettings {
            api_key: self.openrouter_api_key.unwrap_or_default(),
            url: self.openrouter_url.unwrap_or(openrouter_defaults.url),
        };

        let settings = Settings::from_groups(
            ollama,
            GroqSettings {
                api_key: self.groq_api_key.unwrap_or_default(),
            },
            TogetherSettings {
                api_key: self.together_api_key.unwrap_or_default(),
            },
            langfuse,
            openrouter,
            MistralSettings {
                api_key: self.mistral_api_key.unwrap_or_default(),
            },
            HuggingFaceSettings {
                api_key: self.huggingface_api_key.unwrap_or_default(),
            },
        );

        tracing::debug!(
            configured = ?settings.configured_providers(),
            "Built provider settings"
        );
        settings
    }

    // Internal accessor methods for use by other loader modules

    pub(crate) fn set_api_key(&mut self, provider: Provider, key: Option<MaskedSecret>) {
        let slot = match provider {
            Provider::Ollama => &mut self.ollama_api_key,
            Provider::Groq => &mut self.groq_api_key,
            Provider::Together => &mut self.together_api_key,
            Provider::Langfuse => &mut self.langfuse_secret_key,
            Provider::OpenRouter => &mut self.openrouter_api_key,
            Provider::Mistral => &mut self.mistral_api_key,
            Provider::HuggingFace => &mut self.huggingface_api_key,
        };
        *slot = key;
    }

    pub(crate) fn set_langfuse_public_key(&mut self, key: Option<MaskedSecret>) {
        self.langfuse_public_key = key;
    }

    pub(crate) fn set_ollama_url(&mut self, url: Option<String>) {
        self.ollama_url = url;
    }

    pub(crate) fn set_langfuse_host(&mut self, host: Option<String>) {
        self.langfuse_host = host;
    }

    pub(crate) fn set_openrouter_url(&mut self, url: Option<String>) {
        self.openrouter_url = url;
    }
}

/// Build settings from the process environment and `./.env`.
///
/// Process variables win over `.env` values; the process environment is not
/// modified. Missing variables and a missing `.env` file fall back to defaults.
pub fn load() -> Result<Settings, ConfigError> {
    Ok(SettingsLoader::new().load_dotenv()?.from_env()?.build())
}

/// Reload `./.env` into the process environment with override, then build settings.
///
/// Values in the file replace already-set process variables of the same name.
pub fn refresh() -> Result<Settings, ConfigError> {
    Ok(SettingsLoader::new()
        .load_dotenv_override()?
        .from_env()?
        .build())
}
