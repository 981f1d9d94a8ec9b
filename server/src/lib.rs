//! # Connection Core
//!
//! This library provides the connection and I/O layer of the game server. It
//! accepts TCP connections, buffers their traffic, decides who may connect,
//! and obfuscates selected packets with the shield cipher. Game logic plugs in
//! through per-session parse hooks.
//!
//! ## Core Responsibilities
//!
//! ### Event Loop
//! [`reactor::Reactor`] runs one pass per call: flush pending output, wait a
//! bounded time for readable sockets, read, flush again, then give every
//! session to its parse hook. Sessions that stop sending are timed out, and
//! peers that fill their read buffer without producing a packet are dropped.
//!
//! ### Session Management
//! Sessions live in a fixed-size table indexed by small integers
//! ([`session::SessionTable`]). Slot 0 is a permanent placeholder. Each
//! session owns a read FIFO and a write FIFO ([`fifo`]) and carries an
//! end-of-file flag that defers closing until output has been flushed.
//!
//! ### Admission Control
//! New connections are checked against allow/deny rules and a per-address
//! burst detector ([`admission`]). Flagged addresses are rejected until the
//! flag expires unless an allow rule names them explicitly.
//!
//! ### Shield
//! When enabled, the first login starts a handshake that seeds three cipher
//! links per connection ([`shield`]). Afterwards selected inbound frames are
//! decoded in the read FIFO and selected outbound frames are encoded as they
//! are committed.
//!
//! ## Architecture Design
//!
//! ### Single-Threaded Event Loop
//! Everything runs on one tokio task. Readiness is polled directly from the
//! sockets, so hooks can borrow the whole reactor mutably and never lock.
//!
//! ### Deferred Close
//! Errors never tear a session down on the spot. They set end-of-file; the
//! next flush sends what is left and the parse hook closes the session.
//!
//! ## Module Organization
//!
//! - [`reactor`]: the loop, listening and outgoing connections
//! - [`session`]: session table, hooks, write commit path
//! - [`fifo`]: read and write buffers
//! - [`admission`]: allow/deny rules and burst detection
//! - [`shield`]: handshake and frame inspection
//! - [`transport`]: socket setup
//! - [`config`]: runtime settings
//! - [`lobby`]: demonstration parse hook

pub mod admission;
pub mod config;
pub mod error;
pub mod fifo;
pub mod lobby;
pub mod reactor;
pub mod session;
pub mod shield;
pub mod transport;

pub use config::ServerConfig;
pub use error::NetError;
pub use reactor::Reactor;
pub use session::{SessionId, SessionTable};
