//! Server side of the shield layer: handshake, inbound frame inspection and
//! outbound obfuscation.
//!
//! Inbound frames are inspected in place in the read FIFO. Recognised payload
//! frames are decoded where they sit and handed back to the parse hook as
//! [`Inspection::Ready`]; handshake and heartbeat frames are consumed here.

use std::time::Instant;

use log::{debug, error, info, warn};
use rand::Rng;
use shared::packets::{
    info_message_frame, INFO_UNIQUE_ID_MISMATCH, INFO_VERSION_TOO_LOW, INIT_ACK_MIN_LEN,
    SYNC_CONTROL, SYNC_FRAME_LEN,
};
use shared::{rule_for, CryptLinks, InfoFrame, InitAckFrame, InitFrame, LinkKind, PacketRule, ServerType};

use crate::session::{Session, SessionId, SessionTable};

/// Result of looking at the frame at the head of a read FIFO.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inspection {
    /// Not enough bytes buffered yet.
    Incomplete,
    /// A control frame was handled and skipped; look again.
    Consumed,
    /// A payload frame of `len` bytes is ready at the cursor, decoded if the
    /// connection is shielded. The parse hook must skip it.
    Ready { packet_type: u16, len: usize },
    /// The session was ended.
    Closed,
    /// The type code is not one this layer knows how to frame.
    Unrecognized(u16),
}

/// Length of a dynamic frame, from its header.
fn dynamic_len(session: &Session) -> Option<usize> {
    session.rfifo.u16_at(2).map(usize::from)
}

/// Decodes `range` of the unread input with one of the session's links.
fn decode(session: &mut Session, kind: LinkKind, start: usize, end: usize) {
    let Some(links) = session.shield.links.as_mut() else {
        return;
    };
    if start < end {
        links
            .get_mut(kind)
            .apply(&mut session.rfifo.unread_mut()[start..end]);
    }
}

/// Obfuscates an outbound frame staged in the write FIFO, before commit.
pub(crate) fn protect_outgoing(session: &mut Session, len: usize) {
    let Some(links) = session.shield.links.as_mut() else {
        return;
    };
    let frame = session.wfifo.staged_mut(len);
    let Some(code) = shared::packets::read_u16(frame, 0) else {
        return;
    };
    if rule_for(code) == Some(PacketRule::Outbound) && len > PacketRule::Outbound.cipher_offset() {
        links
            .send
            .apply(&mut frame[PacketRule::Outbound.cipher_offset()..]);
    }
}

impl SessionTable {
    /// Sends the handshake opener and seeds the session's cipher links.
    pub fn start_handshake(&mut self, id: SessionId, server_type: ServerType) -> bool {
        let min_version = self.shield_config().min_version;
        if !self.is_active(id) {
            return false;
        }

        let mut rng = rand::thread_rng();
        let keys: (u16, u16, u16) = (
            rng.gen_range(0..0xffff),
            rng.gen_range(0..0xffff),
            rng.gen_range(0..0xffff),
        );

        let frame = match InitFrame::new(keys, server_type, min_version).encode() {
            Ok(frame) => frame,
            Err(e) => {
                error!("shield: failed to encode init frame for session #{}: {}", id, e);
                return false;
            }
        };
        // the opener goes out before the links are seeded, in cleartext
        self.send(id, &frame);

        let Some(session) = self.get_mut(id) else {
            return false;
        };
        session.shield.links = Some(CryptLinks::seeded(keys.0, keys.1, keys.2));
        session.shield.init_sent = true;
        session.shield.ack_received = false;
        debug!("shield: handshake started on session #{}", id);
        true
    }

    /// Inspects the frame at the head of `id`'s read FIFO.
    pub fn inspect(&mut self, id: SessionId, now: Instant) -> Inspection {
        let shield = self.shield_config().clone();
        let Some(session) = self.get_mut(id) else {
            return Inspection::Closed;
        };
        if session.flags.eof {
            return Inspection::Closed;
        }
        let Some(code) = session.rfifo.u16_at(0) else {
            return Inspection::Incomplete;
        };
        let Some(rule) = rule_for(code) else {
            return Inspection::Unrecognized(code);
        };
        let rest = session.rfifo.rest();
        let ciphered = shield.enabled && session.shield.is_active();

        match rule {
            PacketRule::Outbound => Inspection::Unrecognized(code),
            PacketRule::Sync | PacketRule::LegacyLogin | PacketRule::InitAck if !shield.enabled => {
                Inspection::Unrecognized(code)
            }
            PacketRule::Sync => {
                if rest < SYNC_FRAME_LEN {
                    return Inspection::Incomplete;
                }
                decode(session, LinkKind::Sync, rule.cipher_offset(), SYNC_FRAME_LEN);
                if session.rfifo.u32_at(2) == Some(SYNC_CONTROL) {
                    session.shield.last_sync = Some(now);
                } else {
                    debug!("shield: bad sync control word from session #{}", id);
                }
                session.rfifo.skip(SYNC_FRAME_LEN);
                Inspection::Consumed
            }
            PacketRule::LegacyLogin => {
                info!("shield: outdated login 0x{:04x} on session #{}, closing", code, id);
                self.set_eof(id);
                Inspection::Closed
            }
            PacketRule::Login { len } => {
                if rest < len {
                    return Inspection::Incomplete;
                }
                if shield.enabled && !session.shield.ack_received {
                    session.rfifo.skip(rest);
                    self.start_handshake(id, shield.server_type);
                    return Inspection::Consumed;
                }
                if ciphered {
                    decode(session, LinkKind::Recv, rule.cipher_offset(), len);
                }
                Inspection::Ready { packet_type: code, len }
            }
            PacketRule::DynamicLogin => {
                let Some(len) = dynamic_len(session) else {
                    return Inspection::Incomplete;
                };
                if len < rule.cipher_offset() {
                    warn!("shield: malformed login length {} on session #{}", len, id);
                    self.set_eof(id);
                    return Inspection::Closed;
                }
                if rest < len {
                    return Inspection::Incomplete;
                }
                if shield.enabled && !session.shield.ack_received {
                    session.rfifo.skip(rest);
                    self.start_handshake(id, shield.server_type);
                    return Inspection::Consumed;
                }
                if ciphered {
                    decode(session, LinkKind::Recv, rule.cipher_offset(), len);
                }
                Inspection::Ready { packet_type: code, len }
            }
            PacketRule::Dynamic => {
                let Some(len) = dynamic_len(session) else {
                    return Inspection::Incomplete;
                };
                if len < rule.cipher_offset() {
                    warn!("shield: malformed packet 0x{:04x} (len={}) on session #{}", code, len, id);
                    self.set_eof(id);
                    return Inspection::Closed;
                }
                if rest < len {
                    return Inspection::Incomplete;
                }
                if ciphered {
                    decode(session, LinkKind::Recv, rule.cipher_offset(), len);
                }
                Inspection::Ready { packet_type: code, len }
            }
            PacketRule::Fixed { len } => {
                if rest < len {
                    return Inspection::Incomplete;
                }
                if ciphered {
                    decode(session, LinkKind::Recv, rule.cipher_offset(), len);
                }
                Inspection::Ready { packet_type: code, len }
            }
            PacketRule::InitAck => {
                if !session.shield.init_sent || session.shield.links.is_none() {
                    warn!("shield: init ack before handshake on session #{}, closing", id);
                    self.set_eof(id);
                    return Inspection::Closed;
                }
                let Some(len) = dynamic_len(session) else {
                    return Inspection::Incomplete;
                };
                if len < INIT_ACK_MIN_LEN {
                    warn!("shield: short init ack (len={}) on session #{}", len, id);
                    self.set_eof(id);
                    return Inspection::Closed;
                }
                if rest < len {
                    return Inspection::Incomplete;
                }

                decode(session, LinkKind::Recv, rule.cipher_offset(), len);
                let ack = InitAckFrame::decode(session.rfifo.unread());
                session.rfifo.skip(len);

                let ack = match ack {
                    Ok(ack) => ack,
                    Err(e) => {
                        warn!("shield: unreadable init ack on session #{}: {}", id, e);
                        self.set_eof(id);
                        return Inspection::Closed;
                    }
                };

                session.shield.ack_received = true;
                session.shield.unique_id = ack.unique_id;
                session.shield.version = ack.shield_version;

                if !ack.is_consistent() {
                    info!(
                        "shield: unique id mismatch on session #{} ({:08x} / {:08x})",
                        id,
                        ack.unique_id,
                        ack.revealed_unique_id()
                    );
                    match InfoFrame::new(INFO_UNIQUE_ID_MISMATCH).encode() {
                        Ok(frame) => self.send(id, &frame),
                        Err(e) => error!("shield: failed to encode info frame: {}", e),
                    }
                    self.set_eof(id);
                    return Inspection::Closed;
                }

                if ack.shield_version < shield.min_version {
                    info!(
                        "shield: session #{} runs shield version {}, below the required {}",
                        id, ack.shield_version, shield.min_version
                    );
                    let reason = format!(
                        "Your shield version {} is outdated, version {} or newer is required.",
                        ack.shield_version, shield.min_version
                    );
                    match info_message_frame(INFO_VERSION_TOO_LOW, &reason) {
                        Ok(frame) => self.send(id, &frame),
                        Err(e) => error!("shield: failed to encode info message: {}", e),
                    }
                    self.set_eof(id);
                    return Inspection::Closed;
                }

                debug!(
                    "shield: session #{} acknowledged (unique id {:08x}, version {})",
                    id, ack.unique_id, ack.shield_version
                );
                Inspection::Consumed
            }
        }
    }
}
