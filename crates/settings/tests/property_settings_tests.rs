//! Property-based tests for settings construction and masking.
//!
//! Test coverage:
//! - MaskedSecret: no textual rendering contains the secret
//! - Endpoint URLs: accepted values are stored exactly as given
//! - Settings: identical sources build equal records

use proptest::prelude::*;

use provider_settings::{
    ExposeSecret, MapEnv, MaskedSecret, Provider, Settings, SettingsLoader, constants,
};

/// Strategy for generating API key strings.
fn api_key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{16,48}".prop_map(|s| format!("sk-{}", s))
}

/// Strategy for generating valid endpoint URLs.
fn endpoint_strategy() -> impl Strategy<Value = String> {
    let scheme = prop_oneof![Just("http"), Just("https")];
    let host = prop_oneof![
        Just("localhost".to_string()),
        Just("api.example.com".to_string()),
        Just("llm-gateway.internal".to_string()),
        "[a-z]{3,12}\\.example\\.net",
    ];
    let port = 1024u16..=65535u16;
    let path = prop_oneof![Just(""), Just("/v1"), Just("/api/v1")];

    (scheme, host, port, path)
        .prop_map(|(scheme, host, port, path)| format!("{scheme}://{host}:{port}{path}"))
}

fn build_from(source: MapEnv) -> Settings {
    SettingsLoader::new()
        .without_dotenv()
        .with_source(source)
        .from_env()
        .expect("valid source should build")
        .build()
}

proptest! {
    #[test]
    fn prop_secret_never_rendered(key in api_key_strategy()) {
        let secret = MaskedSecret::new(key.clone());

        prop_assert!(!secret.to_string().contains(&key));
        let debug = format!("{secret:?}");
        prop_assert!(!debug.contains(&key));
        prop_assert!(!serde_json::to_string(&secret).unwrap().contains(&key));
        prop_assert_eq!(secret.expose_secret(), key.as_str());
    }

    #[test]
    fn prop_endpoint_stored_verbatim(url in endpoint_strategy()) {
        let settings = build_from(MapEnv::new().with(constants::OLLAMA_URL, url.clone()));
        prop_assert_eq!(settings.ollama_url(), url.as_str());
    }

    #[test]
    fn prop_identical_sources_build_equal_records(
        groq in api_key_strategy(),
        mistral in api_key_strategy(),
        url in endpoint_strategy(),
    ) {
        let source = MapEnv::new()
            .with(constants::GROQ_API_KEY, groq)
            .with(constants::MISTRAL_API_KEY, mistral)
            .with(constants::OPENROUTER_URL, url);

        let first = build_from(source.clone());
        let second = build_from(source);

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            first.configured_providers(),
            vec![Provider::Groq, Provider::Mistral]
        );
    }
}
