//! Packet type codes and fixed-layout frames understood by the shield layer.
//!
//! Every frame starts with a little-endian `u16` type code. Dynamic frames follow
//! it with a little-endian `u16` total length. Only the types listed in
//! [`rule_for`] are inspected; everything else belongs to the application parser.

use serde::{Deserialize, Serialize};

pub const SC_SHIELD_INIT: u16 = 0xabcd;
pub const SC_SHIELD_INFO: u16 = 0xbcde;
pub const CS_SHIELD_INIT_ACK: u16 = 0x1002;
pub const CS_SHIELD_SYNC: u16 = 0x2000;

pub const CS_LOGIN: u16 = 0x0064;
pub const CS_LOGIN_DYNAMIC: u16 = 0x0825;
pub const CS_LOGIN_LEGACY: [u16; 5] = [0x0277, 0x02b0, 0x01dd, 0x01fa, 0x027c];
pub const CS_WHISPER_TO: u16 = 0x0096;
pub const CS_WALK_TO_XY: u16 = 0x0437;
pub const CS_USE_SKILL_TO_ID: u16 = 0x0438;
pub const CS_USE_SKILL_TO_POS: u16 = 0x0366;
pub const SC_WHISPER_FROM: u16 = 0x0097;
pub const SC_SET_UNIT_IDLE: u16 = 0x0915;
pub const SC_SET_UNIT_WALKING: u16 = 0x0914;

pub const LOGIN_PACKET_LEN: usize = 55;
pub const INIT_FRAME_LEN: usize = 20;
pub const INIT_ACK_MIN_LEN: usize = 16;
pub const SYNC_FRAME_LEN: usize = 6;
pub const INFO_FRAME_LEN: usize = 6;

/// Identifier advertised in every init frame.
pub const SHIELD_ID: u32 = 0x6e5f_3a21;
/// XOR mask hiding the second copy of the peer's unique id.
pub const UNIQUE_ID_XOR: u32 = 0x3c15_a9f1;
/// Control word carried by a valid sync heartbeat.
pub const SYNC_CONTROL: u32 = 0xddcc_bbaa;
/// Info code sent when the two unique-id copies disagree.
pub const INFO_UNIQUE_ID_MISMATCH: u32 = 3;
/// Info type of a message frame telling the peer its shield is outdated.
pub const INFO_VERSION_TOO_LOW: u16 = 1;
/// Shortest info message frame: header, info type and an empty message.
///
/// Short [`InfoFrame`] codes stay below this, so a reader can tell the two
/// layouts apart by the `u16` after the type code.
pub const INFO_MESSAGE_MIN_LEN: usize = 7;

/// Server role advertised to the peer in the init frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerType {
    Login,
    Char,
    Map,
}

impl ServerType {
    pub fn tag(self) -> u16 {
        match self {
            ServerType::Login => 0xacfe,
            ServerType::Char => 0xbcfe,
            ServerType::Map => 0xccfe,
        }
    }

    pub fn from_tag(tag: u16) -> Option<Self> {
        match tag {
            0xacfe => Some(ServerType::Login),
            0xbcfe => Some(ServerType::Char),
            0xccfe => Some(ServerType::Map),
            _ => None,
        }
    }
}

/// How the shield layer treats a recognized packet type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacketRule {
    /// Sync heartbeat: type + control word, decoded with the sync link.
    Sync,
    /// Outdated login variants; the connection is closed.
    LegacyLogin,
    /// Fixed-size login. Before the handshake it starts one instead.
    Login { len: usize },
    /// Dynamic login. Before the handshake it starts one instead.
    DynamicLogin,
    /// Dynamic client packet ciphered after its length field.
    Dynamic,
    /// Fixed-size client packet ciphered after its type code.
    Fixed { len: usize },
    /// Dynamic server packet ciphered after its length field on the way out.
    Outbound,
    /// Handshake acknowledgement.
    InitAck,
}

impl PacketRule {
    /// Offset of the first ciphered byte within the frame.
    pub fn cipher_offset(self) -> usize {
        match self {
            PacketRule::Sync | PacketRule::Login { .. } | PacketRule::Fixed { .. } => 2,
            PacketRule::DynamicLogin
            | PacketRule::Dynamic
            | PacketRule::Outbound
            | PacketRule::InitAck => 4,
            PacketRule::LegacyLogin => 0,
        }
    }
}

/// Looks up the shield rule for a packet type code.
pub fn rule_for(packet_type: u16) -> Option<PacketRule> {
    let rule = match packet_type {
        CS_SHIELD_SYNC => PacketRule::Sync,
        code if CS_LOGIN_LEGACY.contains(&code) => PacketRule::LegacyLogin,
        CS_LOGIN => PacketRule::Login {
            len: LOGIN_PACKET_LEN,
        },
        CS_LOGIN_DYNAMIC => PacketRule::DynamicLogin,
        CS_WHISPER_TO => PacketRule::Dynamic,
        CS_WALK_TO_XY => PacketRule::Fixed { len: 5 },
        CS_USE_SKILL_TO_ID | CS_USE_SKILL_TO_POS => PacketRule::Fixed { len: 10 },
        SC_WHISPER_FROM | SC_SET_UNIT_IDLE | SC_SET_UNIT_WALKING => PacketRule::Outbound,
        CS_SHIELD_INIT_ACK => PacketRule::InitAck,
        _ => return None,
    };
    Some(rule)
}

/// Errors raised while decoding fixed-layout frames.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error("frame too short: need {need} bytes, have {have}")]
    TooShort { need: usize, have: usize },

    #[error("frame of {0} bytes does not fit a 16-bit length")]
    TooLong(usize),

    #[error("unexpected packet type 0x{0:04x}")]
    UnexpectedType(u16),

    #[error("frame codec failed: {0}")]
    Codec(#[from] bincode::Error),
}

/// Reads a little-endian `u16` at `offset`, if the buffer is long enough.
pub fn read_u16(buf: &[u8], offset: usize) -> Option<u16> {
    let bytes = buf.get(offset..offset + 2)?;
    Some(u16::from_le_bytes([bytes[0], bytes[1]]))
}

/// Reads a little-endian `u32` at `offset`, if the buffer is long enough.
pub fn read_u32(buf: &[u8], offset: usize) -> Option<u32> {
    let bytes = buf.get(offset..offset + 4)?;
    Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

/// Builds a dynamic frame: type, total length, payload.
pub fn dynamic_frame(packet_type: u16, payload: &[u8]) -> Result<Vec<u8>, FrameError> {
    let len = payload.len() + 4;
    let len16 = u16::try_from(len).map_err(|_| FrameError::TooLong(len))?;
    let mut frame = Vec::with_capacity(len);
    frame.extend_from_slice(&packet_type.to_le_bytes());
    frame.extend_from_slice(&len16.to_le_bytes());
    frame.extend_from_slice(payload);
    Ok(frame)
}

/// Width of a fixed name field, NUL terminator included.
pub const NAME_LEN: usize = 24;

/// Packs `name` into a NUL-terminated, zero-padded name field.
pub fn name_field(name: &str) -> [u8; NAME_LEN] {
    let mut field = [0u8; NAME_LEN];
    let bytes = name.as_bytes();
    let n = bytes.len().min(NAME_LEN - 1);
    field[..n].copy_from_slice(&bytes[..n]);
    field
}

/// Text up to the first NUL, lossily decoded.
pub fn read_cstr(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}

/// Fixed-size login request.
///
/// Layout: type, client version (u32), username, password, client type.
pub fn login_frame(version: u32, username: &str, password: &str, client_type: u8) -> Vec<u8> {
    let mut frame = Vec::with_capacity(LOGIN_PACKET_LEN);
    frame.extend_from_slice(&CS_LOGIN.to_le_bytes());
    frame.extend_from_slice(&version.to_le_bytes());
    frame.extend_from_slice(&name_field(username));
    frame.extend_from_slice(&name_field(password));
    frame.push(client_type);
    frame
}

/// Whisper frame: a name field followed by the NUL-terminated message.
///
/// Used for both directions: `CS_WHISPER_TO` carries the target, and
/// `SC_WHISPER_FROM` the sender.
pub fn whisper_frame(packet_type: u16, name: &str, message: &str) -> Result<Vec<u8>, FrameError> {
    let mut payload = Vec::with_capacity(NAME_LEN + message.len() + 1);
    payload.extend_from_slice(&name_field(name));
    payload.extend_from_slice(message.as_bytes());
    payload.push(0);
    dynamic_frame(packet_type, &payload)
}

/// Splits a whisper frame into its name and message.
pub fn parse_whisper(frame: &[u8]) -> Option<(String, String)> {
    let name = frame.get(4..4 + NAME_LEN)?;
    let message = frame.get(4 + NAME_LEN..)?;
    Some((read_cstr(name), read_cstr(message)))
}

/// Info frame with a readable reason: type, length, info type, then the
/// NUL-terminated message. Sent in cleartext.
pub fn info_message_frame(info_type: u16, message: &str) -> Result<Vec<u8>, FrameError> {
    let mut payload = Vec::with_capacity(message.len() + 3);
    payload.extend_from_slice(&info_type.to_le_bytes());
    payload.extend_from_slice(message.as_bytes());
    payload.push(0);
    dynamic_frame(SC_SHIELD_INFO, &payload)
}

/// Splits an info message frame into its info type and message.
///
/// Returns `None` for the short [`InfoFrame`] layout or a truncated frame.
pub fn parse_info_message(frame: &[u8]) -> Option<(u16, String)> {
    if read_u16(frame, 0)? != SC_SHIELD_INFO {
        return None;
    }
    let len = usize::from(read_u16(frame, 2)?);
    if len < INFO_MESSAGE_MIN_LEN || frame.len() < len {
        return None;
    }
    Some((read_u16(frame, 4)?, read_cstr(&frame[6..len])))
}

fn decode_checked<T: for<'de> Deserialize<'de>>(
    buf: &[u8],
    need: usize,
    packet_type: u16,
) -> Result<T, FrameError> {
    if buf.len() < need {
        return Err(FrameError::TooShort {
            need,
            have: buf.len(),
        });
    }
    match read_u16(buf, 0) {
        Some(code) if code == packet_type => Ok(bincode::deserialize(&buf[..need])?),
        Some(code) => Err(FrameError::UnexpectedType(code)),
        None => Err(FrameError::TooShort {
            need,
            have: buf.len(),
        }),
    }
}

/// Handshake opener sent in cleartext by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitFrame {
    pub packet_type: u16,
    pub length: u16,
    pub recv_key: u16,
    pub send_key: u16,
    pub server_type: u16,
    pub shield_id: u32,
    pub min_version: u32,
    pub sync_key: u16,
}

impl InitFrame {
    pub fn new(keys: (u16, u16, u16), server_type: ServerType, min_version: u32) -> Self {
        Self {
            packet_type: SC_SHIELD_INIT,
            length: INIT_FRAME_LEN as u16,
            recv_key: keys.0,
            send_key: keys.1,
            server_type: server_type.tag(),
            shield_id: SHIELD_ID,
            min_version,
            sync_key: keys.2,
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>, FrameError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn decode(buf: &[u8]) -> Result<Self, FrameError> {
        decode_checked(buf, INIT_FRAME_LEN, SC_SHIELD_INIT)
    }
}

/// Peer reply to [`InitFrame`]; everything after the length field is ciphered
/// with the receive link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitAckFrame {
    pub packet_type: u16,
    pub length: u16,
    pub unique_id: u32,
    pub shield_version: u32,
    pub unique_id_obscured: u32,
}

impl InitAckFrame {
    pub fn new(unique_id: u32, shield_version: u32) -> Self {
        Self {
            packet_type: CS_SHIELD_INIT_ACK,
            length: INIT_ACK_MIN_LEN as u16,
            unique_id,
            shield_version,
            unique_id_obscured: unique_id ^ UNIQUE_ID_XOR,
        }
    }

    /// The unique id recovered from the obscured copy.
    pub fn revealed_unique_id(&self) -> u32 {
        self.unique_id_obscured ^ UNIQUE_ID_XOR
    }

    /// Both copies must agree and be nonzero.
    pub fn is_consistent(&self) -> bool {
        let revealed = self.revealed_unique_id();
        self.unique_id != 0 && revealed != 0 && self.unique_id == revealed
    }

    pub fn encode(&self) -> Result<Vec<u8>, FrameError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn decode(buf: &[u8]) -> Result<Self, FrameError> {
        decode_checked(buf, INIT_ACK_MIN_LEN, CS_SHIELD_INIT_ACK)
    }
}

/// Short diagnostic frame, sent in cleartext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoFrame {
    pub packet_type: u16,
    pub code: u32,
}

impl InfoFrame {
    pub fn new(code: u32) -> Self {
        Self {
            packet_type: SC_SHIELD_INFO,
            code,
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>, FrameError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn decode(buf: &[u8]) -> Result<Self, FrameError> {
        decode_checked(buf, INFO_FRAME_LEN, SC_SHIELD_INFO)
    }
}

/// Heartbeat carrying the sync control word (ciphered with the sync link).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncFrame {
    pub packet_type: u16,
    pub control: u32,
}

impl SyncFrame {
    pub fn new() -> Self {
        Self {
            packet_type: CS_SHIELD_SYNC,
            control: SYNC_CONTROL,
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>, FrameError> {
        Ok(bincode::serialize(self)?)
    }
}

impl Default for SyncFrame {
    fn default() -> Self {
        Self::new()
    }
}
