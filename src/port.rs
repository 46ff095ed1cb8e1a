//! Ephemeral port allocation

use std::net::TcpListener;

use crate::error::AppResult;

/// Ask the OS for an unused loopback port by binding a probe socket to port 0
/// and reading the assigned address back. The probe is released before
/// returning, so another process could claim the port before the server
/// rebinds it; accepted as a known limitation for a local smoke test.
pub(crate) fn find_free_port() -> AppResult<u16> {
    let probe = TcpListener::bind(("127.0.0.1", 0))?;
    Ok(probe.local_addr()?.port())
}
