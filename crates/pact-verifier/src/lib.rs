//! Provider verification support.
//!
//! Wires a provider verification together: applies option defaults, starts
//! the state-setup proxy, hands the runner a flattened option set pointing at
//! the proxy, and tears the proxy down afterwards. The proxy and the runner
//! are supplied by the caller through [`StateSetupProxy`] and
//! [`VerificationRunner`].
//!
//! # Example
//!
//! ```no_run
//! use pact_verifier::{Verifier, VerifierOptions};
//! # async fn run(
//! #     proxy: &impl pact_verifier::StateSetupProxy,
//! #     runner: &impl pact_verifier::VerificationRunner,
//! # ) -> Result<(), pact_verifier::VerifierError> {
//! let verifier = Verifier::new(VerifierOptions::new("http://localhost:8080"))?;
//! let report = verifier.verify_provider(proxy, runner).await?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
pub mod logging;
pub mod net;
mod verifier;

pub use config::{VerifierOptions, DEPRECATED_FIELDS};
pub use error::VerifierError;
pub use logging::{init_logging, LogLevel};
pub use net::{free_port, is_local_address, is_port_available, port_check, LOCAL_ADDRESSES};
pub use verifier::{
    ProxyHandle, StateSetupProxy, VerificationRunner, Verifier, STATE_SETUP_PATH,
};
