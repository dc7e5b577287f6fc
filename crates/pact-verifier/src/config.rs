//! Verifier configuration.

use crate::error::VerifierError;
use crate::logging::LogLevel;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;
use url::Url;

/// Options that no longer have any effect beyond a deprecation warning.
pub const DEPRECATED_FIELDS: &[&str] = &["providerStatesSetupUrl"];

/// User configuration for a provider verification.
///
/// Fields this crate does not interpret (pact URLs, broker credentials,
/// publishing flags) are kept in `extra` and passed through to the
/// verification runner untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifierOptions {
    /// Base URL of the provider under test.
    #[serde(default)]
    pub provider_base_url: String,

    /// Deprecated: the state-setup URL is computed from the proxy address.
    /// A supplied value still takes precedence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_states_setup_url: Option<String>,

    /// Host the state-setup proxy is reachable on. Defaults to `localhost`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_host: Option<String>,

    /// Verify TLS certificates of the provider. Defaults to `true`.
    #[serde(
        default,
        rename = "validateSSL",
        skip_serializing_if = "Option::is_none"
    )]
    pub validate_ssl: Option<bool>,

    /// Rewrite the Host header to the provider's. Defaults to `false` for
    /// local providers and `true` otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_origin: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LogLevel>,

    /// Additional options forwarded verbatim to the runner.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VerifierOptions {
    pub fn new(provider_base_url: impl Into<String>) -> Self {
        VerifierOptions {
            provider_base_url: provider_base_url.into(),
            ..Default::default()
        }
    }

    /// Load options from a YAML or JSON file. JSON is a subset of YAML, so
    /// both go through the YAML parser.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, VerifierError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let options: VerifierOptions = serde_yaml::from_str(&contents).map_err(|e| {
            VerifierError::configuration(format!("Failed to parse {}: {e}", path.display()))
        })?;
        options.validate()?;
        Ok(options)
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), VerifierError> {
        if self.provider_base_url.trim().is_empty() {
            return Err(VerifierError::configuration(
                "No configuration provided to verifier: 'providerBaseUrl' is required",
            ));
        }
        self.provider_url()?;

        if let Some(host) = &self.proxy_host {
            if host.trim().is_empty() {
                return Err(VerifierError::configuration("'proxyHost' must not be empty"));
            }
        }
        Ok(())
    }

    /// Parsed provider base URL.
    pub fn provider_url(&self) -> Result<Url, VerifierError> {
        Url::parse(&self.provider_base_url).map_err(|e| {
            VerifierError::configuration(format!(
                "Invalid providerBaseUrl '{}': {e}",
                self.provider_base_url
            ))
        })
    }

    /// Names of deprecated options that are set.
    pub fn deprecated_fields_in_use(&self) -> Vec<&'static str> {
        DEPRECATED_FIELDS
            .iter()
            .copied()
            .filter(|field| match *field {
                "providerStatesSetupUrl" => self.provider_states_setup_url.is_some(),
                other => self.extra.contains_key(other),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_deserialize_camel_case() {
        let options: VerifierOptions = serde_json::from_value(json!({
            "providerBaseUrl": "http://localhost:8080",
            "proxyHost": "127.0.0.1",
            "validateSSL": false,
            "changeOrigin": true,
            "logLevel": "debug",
            "pactUrls": ["./pacts/consumer-provider.json"]
        }))
        .unwrap();

        assert_eq!(options.provider_base_url, "http://localhost:8080");
        assert_eq!(options.proxy_host.as_deref(), Some("127.0.0.1"));
        assert_eq!(options.validate_ssl, Some(false));
        assert_eq!(options.change_origin, Some(true));
        assert_eq!(options.log_level, Some(LogLevel::Debug));
        assert_eq!(
            options.extra.get("pactUrls"),
            Some(&json!(["./pacts/consumer-provider.json"]))
        );
    }

    #[test]
    fn test_serialize_keeps_extra_fields_flat() {
        let mut options = VerifierOptions::new("http://localhost:8080");
        options.validate_ssl = Some(true);
        options
            .extra
            .insert("provider".to_string(), json!("animal-service"));

        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(
            value,
            json!({
                "providerBaseUrl": "http://localhost:8080",
                "validateSSL": true,
                "provider": "animal-service"
            })
        );
    }

    #[test]
    fn test_validate_requires_provider_url() {
        let err = VerifierOptions::default().validate().unwrap_err();
        assert!(matches!(err, VerifierError::Configuration(_)));

        let err = VerifierOptions::new("not a url").validate().unwrap_err();
        assert!(err.to_string().contains("Invalid providerBaseUrl"));
    }

    #[test]
    fn test_validate_rejects_blank_proxy_host() {
        let mut options = VerifierOptions::new("http://localhost:8080");
        options.proxy_host = Some(" ".to_string());
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_deprecated_fields_in_use() {
        let mut options = VerifierOptions::new("http://localhost:8080");
        assert!(options.deprecated_fields_in_use().is_empty());

        options.provider_states_setup_url = Some("http://localhost:8080/setup".to_string());
        assert_eq!(options.deprecated_fields_in_use(), vec!["providerStatesSetupUrl"]);
    }

    #[test]
    fn test_from_file_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "providerBaseUrl: http://localhost:8081\nlogLevel: warn\nprovider: animals"
        )
        .unwrap();

        let options = VerifierOptions::from_file(file.path()).unwrap();
        assert_eq!(options.provider_base_url, "http://localhost:8081");
        assert_eq!(options.log_level, Some(LogLevel::Warn));
        assert_eq!(options.extra.get("provider"), Some(&json!("animals")));
    }

    #[test]
    fn test_from_file_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"providerBaseUrl": "https://provider.example.com"}}"#).unwrap();

        let options = VerifierOptions::from_file(file.path()).unwrap();
        assert_eq!(options.provider_base_url, "https://provider.example.com");
    }

    #[test]
    fn test_from_file_missing_url_fails_validation() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "proxyHost: 127.0.0.1").unwrap();
        assert!(VerifierOptions::from_file(file.path()).is_err());
    }
}
