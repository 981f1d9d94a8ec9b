//! Error types for the connection layer.

use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

use crate::session::SessionId;

/// Failures surfaced by session management and the reactor.
#[derive(Debug, Error)]
pub enum NetError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("session #{id} is outside the valid range 1..{capacity}")]
    OutOfRange { id: SessionId, capacity: usize },

    #[error("no free session slot (capacity {0})")]
    SlotsExhausted(usize),

    #[error("session #{0} is not registered")]
    UnknownSession(SessionId),

    #[error("connection to {addr} timed out after {timeout:?}")]
    ConnectTimeout { addr: SocketAddr, timeout: Duration },

    /// The readiness wait failed for a reason other than interruption.
    #[error("readiness wait failed: {0}")]
    Poll(#[source] io::Error),
}
