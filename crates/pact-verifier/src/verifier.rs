//! Provider verification orchestration.
//!
//! The verifier owns no HTTP or process machinery of its own. It drives two
//! collaborators:
//!
//! - a [`StateSetupProxy`] that listens in front of the provider and serves
//!   provider-state setup calls on [`STATE_SETUP_PATH`]
//! - a [`VerificationRunner`] that replays the pacts against the proxy and
//!   reports the outcome

use crate::config::VerifierOptions;
use crate::error::VerifierError;
use crate::logging::init_logging;
use crate::net::is_local_address;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::net::SocketAddr;
use tracing::{debug, info, trace, warn};

/// Path the proxy serves provider-state setup requests on.
pub const STATE_SETUP_PATH: &str = "/_pactSetup";

const DEFAULT_ADDRESS: &str = "http://localhost";

/// Keys of the user configuration that are never forwarded to the runner.
const LOCAL_ONLY_FIELDS: &[&str] = &["handlers"];

/// A running state-setup proxy.
#[async_trait]
pub trait ProxyHandle: Send {
    /// Address the proxy is listening on.
    fn address(&self) -> SocketAddr;

    /// Stop listening.
    async fn close(&mut self) -> anyhow::Result<()>;
}

/// Starts the proxy that intercepts provider-state setup calls.
#[async_trait]
pub trait StateSetupProxy: Send + Sync {
    type Handle: ProxyHandle;

    /// Start the proxy, resolving once it is listening.
    async fn start(
        &self,
        options: &VerifierOptions,
        state_setup_path: &str,
    ) -> anyhow::Result<Self::Handle>;
}

/// Runs the verification against the proxied provider.
#[async_trait]
pub trait VerificationRunner: Send + Sync {
    /// Verify pacts with flattened options, returning the runner's report.
    async fn verify_pacts(&self, options: Map<String, Value>) -> anyhow::Result<String>;
}

/// Provider verifier.
#[derive(Debug, Clone)]
pub struct Verifier {
    options: VerifierOptions,
    address: String,
    state_setup_path: String,
}

impl Verifier {
    /// Create a verifier, applying option defaults.
    ///
    /// - `validateSSL` defaults to `true`
    /// - `changeOrigin` defaults to `true` for a non-local provider, else `false`
    /// - the proxy address is `http://<proxyHost>` or `http://localhost`
    pub fn new(mut options: VerifierOptions) -> Result<Self, VerifierError> {
        if let Some(level) = options.log_level {
            init_logging(level);
        }

        options.validate()?;

        for field in options.deprecated_fields_in_use() {
            warn!("{field} is deprecated, and will be removed in future versions");
        }

        options.validate_ssl.get_or_insert(true);

        let address = options
            .proxy_host
            .as_ref()
            .map(|host| format!("http://{host}"))
            .unwrap_or_else(|| DEFAULT_ADDRESS.to_string());

        if options.change_origin.is_none() {
            let local = is_local_provider(&options)?;
            if !local {
                debug!(
                    provider = %options.provider_base_url,
                    "non-local provider address detected, setting 'changeOrigin' to 'true'. This property can be overridden."
                );
            }
            options.change_origin = Some(!local);
        }

        Ok(Verifier {
            options,
            address,
            state_setup_path: STATE_SETUP_PATH.to_string(),
        })
    }

    pub fn options(&self) -> &VerifierOptions {
        &self.options
    }

    /// Scheme and host the proxy is reached on, without a port.
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn state_setup_path(&self) -> &str {
        &self.state_setup_path
    }

    /// Verify the provider.
    ///
    /// Starts the proxy, runs the verification against it, and closes the
    /// proxy whether the run succeeded or not.
    pub async fn verify_provider<P, R>(&self, proxy: &P, runner: &R) -> Result<String, VerifierError>
    where
        P: StateSetupProxy + ?Sized,
        R: VerificationRunner + ?Sized,
    {
        info!("Verifying provider");

        let mut server = proxy
            .start(&self.options, &self.state_setup_path)
            .await
            .map_err(VerifierError::Proxy)?;
        let addr = server.address();
        trace!(%addr, "Proxy is ready");

        let outcome = match self.verification_options(addr.port()) {
            Ok(options) => {
                trace!(options = %serde_json::Value::Object(options.clone()), "Verifying pacts");
                runner
                    .verify_pacts(options)
                    .await
                    .map_err(VerifierError::Verification)
            }
            Err(e) => Err(e),
        };

        match &outcome {
            Ok(_) => trace!("Verification completed, closing server"),
            Err(e) => trace!(error = %e, "Verification failed, closing server"),
        }
        if let Err(e) = server.close().await {
            warn!(error = %e, "Failed to close state setup proxy");
        }

        outcome
    }

    /// Flattened options for the runner, pointing it at the proxy on `port`.
    ///
    /// The computed state-setup URL is a default that a user-supplied
    /// `providerStatesSetupUrl` overrides; `providerBaseUrl` always points at
    /// the proxy.
    pub fn verification_options(&self, port: u16) -> Result<Map<String, Value>, VerifierError> {
        let base = format!("{}:{}", self.address, port);

        let mut options = Map::new();
        options.insert(
            "providerStatesSetupUrl".to_string(),
            Value::String(format!("{base}{}", self.state_setup_path)),
        );

        let user = match serde_json::to_value(&self.options) {
            Ok(Value::Object(map)) => map,
            Ok(other) => {
                return Err(VerifierError::configuration(format!(
                    "Verifier options must serialize to an object, got {other}"
                )))
            }
            Err(e) => {
                return Err(VerifierError::configuration(format!(
                    "Failed to serialize verifier options: {e}"
                )))
            }
        };
        for (key, value) in user {
            if !LOCAL_ONLY_FIELDS.contains(&key.as_str()) {
                options.insert(key, value);
            }
        }

        options.insert("providerBaseUrl".to_string(), Value::String(base));
        Ok(options)
    }
}

fn is_local_provider(options: &VerifierOptions) -> Result<bool, VerifierError> {
    let url = options.provider_url()?;
    Ok(url.host_str().map(is_local_address).unwrap_or(false))
}
