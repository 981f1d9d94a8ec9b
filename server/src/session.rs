//! Session table: one slot per connection, indexed by a small integer id.
//!
//! Slot 0 is a permanent placeholder that swallows anything written to it, so
//! code holding a stale or default id never touches a live connection.
//! Every other slot is either empty or holds a [`Session`] with its FIFOs,
//! flags and I/O hooks.

use std::io;
use std::net::{Ipv4Addr, SocketAddr};
use std::task::{Context, Poll};
use std::time::Instant;

use log::{debug, error, warn};
use shared::{CryptLinks, MAX_FRAME_LEN};

use crate::config::ShieldConfig;
use crate::error::NetError;
use crate::fifo::{FifoLimits, ReadFifo, WriteFifo};
use crate::reactor::Reactor;
use crate::shield;
use crate::transport::Transport;

/// Index into the session table.
pub type SessionId = usize;

/// The reserved placeholder slot.
pub const SENTINEL: SessionId = 0;

/// Parses buffered input for one session. May close the session.
pub type ParseHook = fn(&mut Reactor, SessionId);

/// Parse hook that does nothing.
pub fn null_parse(_reactor: &mut Reactor, _id: SessionId) {}

/// What to do when a session's socket turns readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecvHook {
    Null,
    /// Read into the session's read FIFO.
    Fifo,
    /// Accept a pending connection (listeners only).
    Accept,
}

/// How queued output leaves the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendHook {
    Null,
    /// Write from the write FIFO to the socket.
    Fifo,
}

/// Keep-alive state for trusted server links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PingState {
    #[default]
    Idle,
    /// The link stalled; the application should send a ping.
    Requested,
    /// A ping is outstanding.
    Sent,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SessionFlags {
    /// Connection is finished; only a final flush and close remain.
    pub eof: bool,
    /// Trusted server-to-server link: larger FIFOs, no client limits.
    pub server: bool,
    pub ping: PingState,
}

/// Per-connection shield handshake and cipher state.
#[derive(Debug, Clone, Default)]
pub struct ShieldState {
    /// Seeded when the handshake opener is sent.
    pub links: Option<CryptLinks>,
    pub init_sent: bool,
    pub ack_received: bool,
    pub unique_id: u32,
    pub version: u32,
    /// Last valid sync heartbeat.
    pub last_sync: Option<Instant>,
}

impl ShieldState {
    /// Whether payload frames are ciphered on this connection.
    pub fn is_active(&self) -> bool {
        self.links.is_some()
    }
}

/// One connection.
pub struct Session {
    id: SessionId,
    pub rfifo: ReadFifo,
    pub wfifo: WriteFifo,
    pub flags: SessionFlags,
    /// Last time data arrived. `None` disables the stall check.
    pub last_activity: Option<Instant>,
    pub remote: Option<SocketAddr>,
    pub shield: ShieldState,
    pub recv_hook: RecvHook,
    pub send_hook: SendHook,
    pub parse_hook: ParseHook,
    transport: Option<Transport>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("flags", &self.flags)
            .field("remote", &self.remote)
            .field("rfifo", &(self.rfifo.cursor(), self.rfifo.len(), self.rfifo.capacity()))
            .field("wfifo", &(self.wfifo.len(), self.wfifo.capacity()))
            .field("recv_hook", &self.recv_hook)
            .field("send_hook", &self.send_hook)
            .finish_non_exhaustive()
    }
}

impl Session {
    fn new(
        id: SessionId,
        limits: &FifoLimits,
        recv_hook: RecvHook,
        send_hook: SendHook,
        parse_hook: ParseHook,
    ) -> Self {
        Self {
            id,
            rfifo: ReadFifo::new(limits.rfifo_size),
            wfifo: WriteFifo::new(limits.wfifo_size),
            flags: SessionFlags::default(),
            last_activity: None,
            remote: None,
            shield: ShieldState::default(),
            recv_hook,
            send_hook,
            parse_hook,
            transport: None,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn is_eof(&self) -> bool {
        self.flags.eof
    }

    /// IPv4 address of the peer, if it has one.
    pub fn client_ip(&self) -> Option<Ipv4Addr> {
        match self.remote?.ip() {
            std::net::IpAddr::V4(ip) => Some(ip),
            std::net::IpAddr::V6(ip) => ip.to_ipv4_mapped(),
        }
    }

    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.transport.as_ref()?.local_addr().ok()
    }

    /// Hands a socket to the session. Streams start the stall clock.
    pub fn attach(&mut self, transport: Transport, remote: Option<SocketAddr>, now: Instant) {
        if matches!(transport, Transport::Stream(_)) {
            self.last_activity = Some(now);
        }
        self.transport = Some(transport);
        self.remote = remote;
    }

    pub(crate) fn transport_mut(&mut self) -> Option<&mut Transport> {
        self.transport.as_mut()
    }

    /// Closes the socket. The session itself stays in its slot.
    pub(crate) fn shutdown_transport(&mut self) {
        if let Some(transport) = self.transport.take() {
            transport.shutdown();
        }
    }

    /// Reads whatever is available into the read FIFO. Returns `true` if the
    /// session just hit end-of-file.
    pub(crate) fn recv_to_fifo(&mut self, now: Instant) -> bool {
        if self.flags.eof {
            return false;
        }
        let Some(transport) = &self.transport else {
            return false;
        };
        // A zero-length read would look like a closed peer.
        if self.rfifo.space() == 0 {
            return false;
        }

        match transport.try_read(self.rfifo.space_mut()) {
            Ok(0) => {
                self.flags.eof = true;
                true
            }
            Ok(n) => {
                self.rfifo.fill(n);
                self.last_activity = Some(now);
                false
            }
            Err(e) if is_transient(&e) => false,
            Err(e) => {
                debug!("recv_to_fifo: {}, closing connection #{}", e, self.id);
                self.flags.eof = true;
                true
            }
        }
    }

    /// Writes as much queued output as the socket takes. Returns `true` if a
    /// hard error ended the session.
    pub(crate) fn send_from_fifo(&mut self) -> bool {
        if self.wfifo.is_empty() {
            return false;
        }
        let Some(transport) = &self.transport else {
            return false;
        };

        match transport.try_write(self.wfifo.pending()) {
            Ok(n) => {
                self.wfifo.consume(n);
                false
            }
            Err(e) if is_transient(&e) => false,
            Err(e) => {
                debug!("send_from_fifo: {}, ending connection #{}", e, self.id);
                // nothing more can be sent
                self.wfifo.clear();
                let was_eof = self.flags.eof;
                self.flags.eof = true;
                !was_eof
            }
        }
    }
}

fn is_transient(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted
    )
}

/// Sessions with pending output or a fresh end-of-file, in insertion order.
#[derive(Debug, Default)]
struct DirtySet {
    order: Vec<SessionId>,
    member: Vec<bool>,
}

impl DirtySet {
    fn insert(&mut self, id: SessionId) {
        if id >= self.member.len() {
            self.member.resize(id + 1, false);
        }
        if !self.member[id] {
            self.member[id] = true;
            self.order.push(id);
        }
    }

    fn take(&mut self) -> Vec<SessionId> {
        let ids = std::mem::take(&mut self.order);
        for &id in &ids {
            self.member[id] = false;
        }
        ids
    }

    fn contains(&self, id: SessionId) -> bool {
        self.member.get(id).copied().unwrap_or(false)
    }
}

/// Fixed-capacity table of sessions.
pub struct SessionTable {
    slots: Vec<Option<Session>>,
    dirty: DirtySet,
    limits: FifoLimits,
    shield: ShieldConfig,
}

impl SessionTable {
    /// Creates a table with `capacity` slots, including the placeholder.
    pub fn new(capacity: usize, limits: FifoLimits, shield: ShieldConfig) -> Self {
        let capacity = capacity.max(1);
        let mut slots = Vec::with_capacity(capacity);
        slots.push(Some(Session::new(
            SENTINEL,
            &limits,
            RecvHook::Null,
            SendHook::Null,
            null_parse,
        )));
        slots.resize_with(capacity, || None);

        Self {
            slots,
            dirty: DirtySet::default(),
            limits,
            shield,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn limits(&self) -> &FifoLimits {
        &self.limits
    }

    pub fn shield_config(&self) -> &ShieldConfig {
        &self.shield
    }

    pub(crate) fn reconfigure(&mut self, limits: FifoLimits, shield: ShieldConfig) {
        self.limits = limits;
        self.shield = shield;
    }

    /// Turns the shield layer on or off for future frames.
    pub fn set_shield_enabled(&mut self, enabled: bool) {
        self.shield.enabled = enabled;
    }

    /// Installs a fresh session in slot `id`, replacing any previous occupant.
    pub fn create(
        &mut self,
        id: SessionId,
        recv_hook: RecvHook,
        send_hook: SendHook,
        parse_hook: ParseHook,
    ) -> Result<&mut Session, NetError> {
        if id == SENTINEL || id >= self.slots.len() {
            return Err(NetError::OutOfRange {
                id,
                capacity: self.slots.len(),
            });
        }
        if self.slots[id].is_some() {
            warn!("create_session: replacing live session #{}", id);
        }

        let session = Session::new(id, &self.limits, recv_hook, send_hook, parse_hook);
        Ok(self.slots[id].insert(session))
    }

    /// Frees slot `id`. The placeholder slot is never freed.
    pub fn destroy(&mut self, id: SessionId) {
        if id == SENTINEL {
            return;
        }
        if let Some(slot) = self.slots.get_mut(id) {
            *slot = None;
        }
    }

    pub fn is_registered(&self, id: SessionId) -> bool {
        self.get(id).is_some()
    }

    /// Registered and not at end-of-file.
    pub fn is_active(&self, id: SessionId) -> bool {
        self.get(id).is_some_and(|s| !s.flags.eof)
    }

    pub fn get(&self, id: SessionId) -> Option<&Session> {
        self.slots.get(id)?.as_ref()
    }

    pub fn get_mut(&mut self, id: SessionId) -> Option<&mut Session> {
        self.slots.get_mut(id)?.as_mut()
    }

    /// Lowest free slot, never the placeholder.
    pub fn free_slot(&self) -> Option<SessionId> {
        (1..self.slots.len()).find(|&id| self.slots[id].is_none())
    }

    /// Ids of all registered sessions except the placeholder.
    pub fn ids(&self) -> Vec<SessionId> {
        (1..self.slots.len())
            .filter(|&id| self.slots[id].is_some())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.slots.iter().skip(1).filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flags the session as finished. Only affects active sessions.
    pub fn set_eof(&mut self, id: SessionId) {
        if id == SENTINEL {
            return;
        }
        if let Some(session) = self.slots.get_mut(id).and_then(Option::as_mut) {
            if !session.flags.eof {
                session.flags.eof = true;
                self.dirty.insert(id);
            }
        }
    }

    /// Marks the session as a trusted server link and enlarges its FIFOs.
    pub fn set_server_link(&mut self, id: SessionId) -> Result<(), NetError> {
        let size = self.limits.serverlink_size;
        self.get_mut(id)
            .ok_or(NetError::UnknownSession(id))?
            .flags
            .server = true;
        self.realloc_fifo(id, size, size)
    }

    /// Resizes both FIFOs. Each side only changes if its data still fits.
    pub fn realloc_fifo(
        &mut self,
        id: SessionId,
        rfifo_size: usize,
        wfifo_size: usize,
    ) -> Result<(), NetError> {
        let session = self.get_mut(id).ok_or(NetError::UnknownSession(id))?;
        let block = session.wfifo.block();
        session.rfifo.resize(rfifo_size);
        session.wfifo.resize(wfifo_size.div_ceil(block) * block);
        Ok(())
    }

    /// Consumes `n` bytes of input, clamped to what is buffered.
    pub fn skip(&mut self, id: SessionId, n: usize) {
        let Some(session) = self.get_mut(id) else {
            return;
        };
        let rest = session.rfifo.rest();
        if n > rest {
            error!(
                "RFIFOSKIP: skipped past end of read buffer! Adjusting from {} to {} (session #{})",
                n, rest, id
            );
        }
        session.rfifo.skip(n);
    }

    /// Compacts the read FIFO.
    pub fn compact(&mut self, id: SessionId) {
        if let Some(session) = self.get_mut(id) {
            session.rfifo.flush();
        }
    }

    /// Unconsumed input.
    pub fn rest(&self, id: SessionId) -> &[u8] {
        self.get(id).map(|s| s.rfifo.unread()).unwrap_or(&[])
    }

    pub fn read_u16(&self, id: SessionId, offset: usize) -> Option<u16> {
        self.get(id)?.rfifo.u16_at(offset)
    }

    pub fn read_u32(&self, id: SessionId, offset: usize) -> Option<u32> {
        self.get(id)?.rfifo.u32_at(offset)
    }

    /// Returns a writable region of `n` bytes past the queued output, growing
    /// the write FIFO first if needed. Follow with [`Self::commit`].
    pub fn reserve(&mut self, id: SessionId, n: usize) -> Option<&mut [u8]> {
        Some(self.get_mut(id)?.wfifo.reserve(n))
    }

    /// Queues `len` bytes previously written via [`Self::reserve`].
    ///
    /// # Panics
    ///
    /// If the bytes overran the write FIFO, or `len` exceeds the 16-bit frame
    /// limit. Both mean the caller wrote past its reservation.
    pub fn commit(&mut self, id: SessionId, len: usize) {
        // the placeholder is a sink
        if id == SENTINEL {
            return;
        }
        let limits = self.limits;
        let shield_enabled = self.shield.enabled;
        let Some(session) = self.slots.get_mut(id).and_then(Option::as_mut) else {
            return;
        };

        let wfifo = &session.wfifo;
        let code = shared::packets::read_u16(wfifo.staged(len), 0).unwrap_or(0);
        if wfifo.len() + len > wfifo.capacity() {
            error!(
                "WFIFOSET: Write Buffer Overflow. Connection {} ({:?}) has written {} bytes on a {}/{} bytes buffer.",
                id,
                session.remote,
                len,
                wfifo.len(),
                wfifo.capacity()
            );
            debug!("Likely command that caused it: 0x{:x}", code);
            panic!(
                "write buffer overflow on session #{}: {} bytes on a {}/{} byte buffer",
                id,
                len,
                wfifo.len(),
                wfifo.capacity()
            );
        }
        if len > MAX_FRAME_LEN {
            panic!(
                "WFIFOSET: Packet 0x{:x} is too big. (len={}, max={})",
                code, len, MAX_FRAME_LEN
            );
        }
        if len == 0 {
            warn!(
                "WFIFOSET: Attempted to send zero-length packet, most likely 0x{:04x}.",
                code
            );
            return;
        }

        if !session.flags.server {
            if len > limits.max_client_packet {
                error!(
                    "WFIFOSET: Dropped too large client packet 0x{:04x} (length={}, max={}).",
                    code, len, limits.max_client_packet
                );
                return;
            }
            if session.wfifo.len() + len > limits.wfifo_max {
                error!(
                    "WFIFOSET: Maximum write buffer size for client connection {} exceeded, most likely caused by packet 0x{:04x} (len={}, peer={:?}).",
                    id, code, len, session.remote
                );
                if !session.flags.eof {
                    session.flags.eof = true;
                    self.dirty.insert(id);
                }
                return;
            }
        }

        if shield_enabled {
            shield::protect_outgoing(session, len);
        }
        session.wfifo.advance(len);

        // a server link that queued twice its nominal size is flushed now
        if session.flags.server
            && session.wfifo.len() >= 2 * limits.serverlink_size
            && session.send_hook == SendHook::Fifo
        {
            session.send_from_fifo();
        }

        let (reserve, floor) = if session.flags.server {
            (limits.serverlink_size / 4, limits.serverlink_size)
        } else {
            (limits.wfifo_size, limits.wfifo_size)
        };
        session.wfifo.adjust(reserve, floor);

        self.dirty.insert(id);
    }

    /// Copies `bytes` into the write FIFO and commits them.
    pub fn send(&mut self, id: SessionId, bytes: &[u8]) {
        let Some(region) = self.reserve(id, bytes.len()) else {
            return;
        };
        region.copy_from_slice(bytes);
        self.commit(id, bytes.len());
    }

    /// Runs the send hook if output is queued.
    pub fn flush(&mut self, id: SessionId) {
        let Some(session) = self.slots.get_mut(id).and_then(Option::as_mut) else {
            return;
        };
        if session.send_hook == SendHook::Fifo && !session.wfifo.is_empty() && session.send_from_fifo()
        {
            self.dirty.insert(id);
        }
    }

    /// Flushes every session.
    pub fn flush_all(&mut self) {
        for id in 1..self.slots.len() {
            self.flush(id);
        }
    }

    /// Runs the FIFO receive path for `id`.
    pub(crate) fn recv(&mut self, id: SessionId, now: Instant) {
        let Some(session) = self.slots.get_mut(id).and_then(Option::as_mut) else {
            return;
        };
        if session.recv_to_fifo(now) {
            self.dirty.insert(id);
        }
    }

    /// Polls every socket that could take input. Ready when at least one is
    /// readable.
    pub(crate) fn poll_readable(&mut self, cx: &mut Context<'_>) -> Poll<io::Result<Vec<SessionId>>> {
        let mut ready = Vec::new();

        for (id, slot) in self.slots.iter_mut().enumerate().skip(1) {
            let Some(session) = slot else {
                continue;
            };
            if session.flags.eof || session.recv_hook == RecvHook::Null {
                continue;
            }
            if session.recv_hook == RecvHook::Fifo && session.rfifo.space() == 0 {
                continue;
            }
            let Some(transport) = session.transport.as_mut() else {
                continue;
            };
            match transport.poll_readable(cx) {
                Poll::Ready(Ok(())) => ready.push(id),
                Poll::Ready(Err(e)) => return Poll::Ready(Err(e)),
                Poll::Pending => {}
            }
        }

        if ready.is_empty() {
            Poll::Pending
        } else {
            Poll::Ready(Ok(ready))
        }
    }

    pub(crate) fn mark_dirty(&mut self, id: SessionId) {
        self.dirty.insert(id);
    }

    pub(crate) fn take_dirty(&mut self) -> Vec<SessionId> {
        self.dirty.take()
    }

    pub fn is_dirty(&self, id: SessionId) -> bool {
        self.dirty.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fifo::{FIFOSIZE_SERVERLINK, RFIFO_SIZE, WFIFO_MAX, WFIFO_SIZE};

    fn table(capacity: usize) -> SessionTable {
        SessionTable::new(capacity, FifoLimits::default(), ShieldConfig::default())
    }

    fn add(table: &mut SessionTable, id: SessionId) {
        table
            .create(id, RecvHook::Fifo, SendHook::Fifo, null_parse)
            .unwrap();
    }

    #[test]
    fn test_sentinel_is_permanent() {
        let mut table = table(4);
        assert!(table.is_registered(SENTINEL));
        assert!(table.create(SENTINEL, RecvHook::Fifo, SendHook::Fifo, null_parse).is_err());

        table.destroy(SENTINEL);
        assert!(table.is_registered(SENTINEL));
        assert_eq!(table.free_slot(), Some(1));
    }

    #[test]
    fn test_sentinel_swallows_writes() {
        let mut table = table(4);
        table.send(SENTINEL, b"ignored");
        assert!(table.get(SENTINEL).unwrap().wfifo.is_empty());
        assert!(!table.is_dirty(SENTINEL));
    }

    #[test]
    fn test_create_and_destroy() {
        let mut table = table(4);
        add(&mut table, 1);
        add(&mut table, 2);

        assert_eq!(table.free_slot(), Some(3));
        assert_eq!(table.ids(), vec![1, 2]);
        assert_eq!(table.len(), 2);

        table.destroy(1);
        assert!(!table.is_registered(1));
        assert_eq!(table.free_slot(), Some(1));

        assert!(matches!(
            table.create(4, RecvHook::Fifo, SendHook::Fifo, null_parse),
            Err(NetError::OutOfRange { id: 4, capacity: 4 })
        ));
    }

    #[test]
    fn test_new_session_sizes() {
        let mut table = table(4);
        add(&mut table, 1);
        let session = table.get(1).unwrap();
        assert_eq!(session.rfifo.capacity(), RFIFO_SIZE);
        assert_eq!(session.wfifo.capacity(), WFIFO_SIZE);
        assert!(session.last_activity.is_none());
        assert!(!session.shield.is_active());
    }

    #[test]
    fn test_eof_makes_session_inactive() {
        let mut table = table(4);
        add(&mut table, 1);
        assert!(table.is_active(1));

        table.set_eof(1);
        assert!(table.is_registered(1));
        assert!(!table.is_active(1));
        assert!(table.is_dirty(1));

        // unknown ids are ignored
        table.set_eof(3);
        assert!(!table.is_dirty(3));
    }

    #[test]
    fn test_commit_queues_and_marks_dirty() {
        let mut table = table(4);
        add(&mut table, 1);

        let region = table.reserve(1, 4).unwrap();
        region.copy_from_slice(&[0x97, 0x00, 0x04, 0x00]);
        table.commit(1, 4);

        assert_eq!(table.get(1).unwrap().wfifo.pending(), &[0x97, 0x00, 0x04, 0x00]);
        assert!(table.is_dirty(1));
        assert_eq!(table.take_dirty(), vec![1]);
        assert!(!table.is_dirty(1));
    }

    #[test]
    fn test_zero_length_commit_is_ignored() {
        let mut table = table(4);
        add(&mut table, 1);
        table.commit(1, 0);
        assert!(table.get(1).unwrap().wfifo.is_empty());
        assert!(!table.is_dirty(1));
    }

    #[test]
    fn test_oversized_client_frame_is_dropped() {
        let mut table = SessionTable::new(
            4,
            FifoLimits {
                max_client_packet: 16,
                ..FifoLimits::default()
            },
            ShieldConfig::default(),
        );
        add(&mut table, 1);

        table.send(1, &[0u8; 17]);
        assert!(table.get(1).unwrap().wfifo.is_empty());
        assert!(table.is_active(1));

        // server links are exempt
        table.set_server_link(1).unwrap();
        table.send(1, &[0u8; 17]);
        assert_eq!(table.get(1).unwrap().wfifo.len(), 17);
    }

    #[test]
    fn test_client_output_ceiling_sets_eof() {
        let mut table = table(4);
        add(&mut table, 1);

        let chunk = vec![1u8; 0xffff];
        while table.get(1).unwrap().wfifo.len() + chunk.len() <= WFIFO_MAX {
            table.send(1, &chunk);
        }
        assert!(table.is_active(1));

        table.send(1, &chunk);
        assert!(!table.is_active(1));
        assert!(table.get(1).unwrap().wfifo.len() <= WFIFO_MAX);
    }

    #[test]
    fn test_write_capacity_follows_queue() {
        let mut table = table(4);
        add(&mut table, 1);

        table.send(1, &vec![0u8; 40_000]);
        let capacity = table.get(1).unwrap().wfifo.capacity();
        assert_eq!(capacity % WFIFO_SIZE, 0);
        assert!(capacity >= 40_000 + WFIFO_SIZE);
    }

    #[test]
    #[should_panic(expected = "write buffer overflow")]
    fn test_commit_past_capacity_panics() {
        let mut table = table(4);
        add(&mut table, 1);
        table.commit(1, WFIFO_SIZE + 1);
    }

    #[test]
    #[should_panic(expected = "too big")]
    fn test_commit_over_frame_limit_panics() {
        let mut table = table(4);
        add(&mut table, 1);
        table.reserve(1, 0x10000).unwrap();
        table.commit(1, 0x10000);
    }

    #[test]
    fn test_unknown_session_cannot_be_upgraded() {
        let mut table = table(4);
        assert!(matches!(
            table.set_server_link(2),
            Err(NetError::UnknownSession(2))
        ));
        assert!(matches!(
            table.realloc_fifo(9, 64, 64),
            Err(NetError::UnknownSession(9))
        ));
    }

    #[test]
    fn test_server_link_fifos() {
        let mut table = table(4);
        add(&mut table, 1);
        table.set_server_link(1).unwrap();

        let session = table.get(1).unwrap();
        assert!(session.flags.server);
        assert_eq!(session.rfifo.capacity(), FIFOSIZE_SERVERLINK);
        assert_eq!(session.wfifo.capacity(), FIFOSIZE_SERVERLINK);
    }

    #[test]
    fn test_skip_is_clamped() {
        let mut table = table(4);
        add(&mut table, 1);
        table.get_mut(1).unwrap().rfifo.extend_from_slice(b"\x64\x00abc");

        assert_eq!(table.read_u16(1, 0), Some(0x0064));
        table.skip(1, 2);
        assert_eq!(table.rest(1), b"abc");
        table.skip(1, 100);
        assert!(table.rest(1).is_empty());

        table.compact(1);
        assert_eq!(table.get(1).unwrap().rfifo.len(), 0);
    }

    #[test]
    fn test_dirty_set_has_no_duplicates() {
        let mut table = table(8);
        add(&mut table, 3);
        add(&mut table, 5);

        table.send(5, b"ab");
        table.send(3, b"cd");
        table.send(5, b"ef");
        table.set_eof(5);

        assert_eq!(table.take_dirty(), vec![5, 3]);
        assert!(table.take_dirty().is_empty());
    }
}
