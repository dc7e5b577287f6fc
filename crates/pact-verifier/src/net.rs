//! Network helpers: local address detection and port probing.

use crate::error::VerifierError;
use std::io::ErrorKind;
use tokio::net::TcpListener;
use tracing::{debug, trace};

/// Hosts treated as the local machine.
pub const LOCAL_ADDRESSES: [&str; 4] = ["127.0.0.1", "localhost", "0.0.0.0", "::1"];

/// Check whether `host` refers to the local machine. IPv6 hosts may be given
/// with or without brackets.
pub fn is_local_address(host: &str) -> bool {
    let host = host
        .strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(host);
    LOCAL_ADDRESSES.contains(&host)
}

/// Check that `port` can be bound exclusively on `host`.
///
/// The probe listener is closed before returning.
pub async fn port_check(port: u16, host: &str) -> Result<(), VerifierError> {
    match TcpListener::bind((host, port)).await {
        Ok(listener) => {
            trace!(port, host, "Port is available");
            drop(listener);
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::AddrInUse => Err(VerifierError::PortUnavailable {
            port,
            host: host.to_string(),
        }),
        Err(e) => Err(VerifierError::Io(e)),
    }
}

/// Check that `port` is free on the local interfaces and on `host`.
///
/// Local addresses are probed one at a time, since `localhost` and
/// `127.0.0.1` conflict on most systems. The check fails if every local probe
/// fails; otherwise the requested host decides.
pub async fn is_port_available(port: u16, host: &str) -> Result<(), VerifierError> {
    let mut any_local = false;
    for local in LOCAL_ADDRESSES {
        match port_check(port, local).await {
            Ok(()) => any_local = true,
            Err(e) => debug!(port, host = local, error = %e, "Local port probe failed"),
        }
    }

    if !any_local {
        return Err(VerifierError::NoInterfaceAvailable(port));
    }

    port_check(port, host).await
}

/// Ask the OS for a free port.
pub async fn free_port() -> Result<u16, VerifierError> {
    let listener = TcpListener::bind(("127.0.0.1", 0)).await?;
    let port = listener.local_addr()?.port();
    Ok(port)
}
