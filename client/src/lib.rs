//! # Lobby Client Library
//!
//! Client-side counterpart of the connection core. It speaks the same framing
//! as the server, performs the shield handshake and keeps its half of the
//! cipher links in step with the server's.
//!
//! ## Handshake Flow
//!
//! With the shield enabled on the server, a session starts like this:
//!
//! 1. The client sends a login frame in cleartext.
//! 2. The server discards it and replies with an opener carrying three keys.
//! 3. The client seeds its links and sends an encoded acknowledgement.
//! 4. The client sends the login again, now encoded, and the session proceeds.
//!
//! Without the shield, the first login is answered directly.
//!
//! ## Module Organization
//!
//! ### Network Module (`network`)
//! - TCP connection handling
//! - Frame reading for server packet types
//! - Cipher application on send and receive
//!
//! ## Usage Example
//!
//! ```no_run
//! use client::network::ShieldClient;
//!
//! # async fn demo() -> Result<(), client::network::ClientError> {
//! let mut client = ShieldClient::connect("127.0.0.1:6900".parse().unwrap()).await?;
//! client.login("alice", "secret").await?;
//! client.handshake(0x1234_5678, 1).await?;
//! client.login("alice", "secret").await?;
//! let welcome = client.expect_frame().await?;
//! # Ok(())
//! # }
//! ```

pub mod network;
