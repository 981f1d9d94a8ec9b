//! Wire-level pieces shared by the server and client crates: packet codes,
//! handshake frames and the shield cipher.

pub mod cipher;
pub mod matrix;
pub mod packets;

pub use cipher::{CipherLink, CryptLinks, LinkKind};
pub use packets::{
    rule_for, FrameError, InfoFrame, InitAckFrame, InitFrame, PacketRule, ServerType, SyncFrame,
};

/// Largest frame the 16-bit length field can describe.
pub const MAX_FRAME_LEN: usize = 0xffff;
