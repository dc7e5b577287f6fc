//! Error types for provider verification.

/// Errors raised while configuring or running a provider verification.
#[derive(Debug, thiserror::Error)]
pub enum VerifierError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Port {port} is unavailable on address {host}")]
    PortUnavailable { port: u16, host: String },

    #[error("Cannot open port {0} on ipv4 or ipv6 interfaces")]
    NoInterfaceAvailable(u16),

    #[error("State setup proxy failed: {0}")]
    Proxy(#[source] anyhow::Error),

    /// The verification runner rejected; carries its failure reason.
    #[error("Verification failed: {0}")]
    Verification(#[source] anyhow::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl VerifierError {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        VerifierError::Configuration(message.into())
    }
}
