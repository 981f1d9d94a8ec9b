//! Single-threaded readiness loop driving every session.
//!
//! One call to [`Reactor::run_once`] is one pass:
//!
//! 1. flush sessions with queued output
//! 2. wait (bounded) until some socket is readable
//! 3. run the receive hook of each readable session
//! 4. flush again
//! 5. for every session: stall check, parse hook, oversize guard, compaction
//!
//! All hooks run on the calling task, so hook code needs no locking.

use std::future::poll_fn;
use std::io;
use std::net::{IpAddr, SocketAddr};
use std::time::{Duration, Instant};

use log::{debug, error, info, warn};
use tokio::net::TcpStream;

use crate::admission::{AdmissionControl, Verdict};
use crate::config::ServerConfig;
use crate::error::NetError;
use crate::session::{
    null_parse, ParseHook, PingState, RecvHook, SendHook, SessionId, SessionTable, SENTINEL,
};
use crate::transport::{self, Transport};

/// Owns the session table and runs the I/O loop.
pub struct Reactor {
    sessions: SessionTable,
    admission: AdmissionControl,
    config: ServerConfig,
    default_parse: ParseHook,
    last_tick: Instant,
}

impl Reactor {
    pub fn new(config: ServerConfig) -> Self {
        let sessions = SessionTable::new(config.max_sessions, config.limits(), config.shield.clone());
        let admission = AdmissionControl::new(config.access.clone());
        Self {
            sessions,
            admission,
            config,
            default_parse: null_parse,
            last_tick: Instant::now(),
        }
    }

    pub fn sessions(&self) -> &SessionTable {
        &self.sessions
    }

    pub fn sessions_mut(&mut self) -> &mut SessionTable {
        &mut self.sessions
    }

    pub fn admission(&self) -> &AdmissionControl {
        &self.admission
    }

    pub fn admission_mut(&mut self) -> &mut AdmissionControl {
        &mut self.admission
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Applies a new configuration. Sessions and connection history survive;
    /// the table's capacity does not change.
    pub fn reload(&mut self, config: ServerConfig) {
        self.sessions.reconfigure(config.limits(), config.shield.clone());
        self.admission.reload(config.access.clone());
        self.config = config;
    }

    /// Parse hook given to accepted connections.
    pub fn set_default_parse(&mut self, parse: ParseHook) {
        self.default_parse = parse;
    }

    /// Time the last readiness wait returned.
    pub fn last_tick(&self) -> Instant {
        self.last_tick
    }

    /// Binds a listening socket and registers it as a session.
    pub fn make_listen_bind(&mut self, addr: SocketAddr) -> Result<SessionId, NetError> {
        let capacity = self.sessions.capacity();
        let id = self
            .sessions
            .free_slot()
            .ok_or(NetError::SlotsExhausted(capacity))?;

        let listener = transport::bind_listener(addr).map_err(|e| {
            error!("make_listen_bind: bind failed on {} ({})!", addr, e);
            e
        })?;
        let bound = listener.local_addr().unwrap_or(addr);

        let session = self
            .sessions
            .create(id, RecvHook::Accept, SendHook::Null, null_parse)?;
        session.attach(Transport::listener(listener), None, self.last_tick);

        info!("Listening on {} (session #{})", bound, id);
        Ok(id)
    }

    /// Opens an outgoing connection and registers it with the default parse
    /// hook.
    pub async fn make_connection(
        &mut self,
        addr: SocketAddr,
        timeout: Duration,
    ) -> Result<SessionId, NetError> {
        let capacity = self.sessions.capacity();
        let id = self
            .sessions
            .free_slot()
            .ok_or(NetError::SlotsExhausted(capacity))?;

        info!("Connecting to {}", addr);
        let stream = match tokio::time::timeout(timeout, TcpStream::connect(addr)).await {
            Ok(Ok(stream)) => stream,
            Ok(Err(e)) => {
                error!("make_connection: connect failed to {} ({})!", addr, e);
                return Err(e.into());
            }
            Err(_) => {
                error!("make_connection: timed out connecting to {}", addr);
                return Err(NetError::ConnectTimeout { addr, timeout });
            }
        };
        if let Err(e) = transport::configure_stream(&stream) {
            warn!("make_connection: failed to set socket options ({})", e);
        }

        let parse = self.default_parse;
        let now = self.last_tick;
        let session = self
            .sessions
            .create(id, RecvHook::Fifo, SendHook::Fifo, parse)?;
        session.attach(Transport::Stream(stream), Some(addr), now);
        Ok(id)
    }

    /// Flushes, shuts down and frees a session.
    pub fn close(&mut self, id: SessionId) {
        if id == SENTINEL || !self.sessions.is_registered(id) {
            return;
        }
        self.sessions.flush(id);
        if let Some(session) = self.sessions.get_mut(id) {
            session.shutdown_transport();
        }
        self.sessions.destroy(id);
        debug!("Closed session #{}", id);
    }

    /// Closes every session.
    pub fn shutdown(&mut self) {
        for id in self.sessions.ids() {
            self.close(id);
        }
    }

    /// Expires stale admission history.
    pub fn sweep_history(&mut self, now: Instant) -> usize {
        let examined = self.admission.sweep(now);
        debug!(
            "connect_check: examined {} history records, {} remain",
            examined,
            self.admission.history_len()
        );
        examined
    }

    /// Runs one pass of the loop, waiting at most `max_wait` for input.
    ///
    /// Only a failed readiness wait is an error; every per-session problem
    /// ends that session instead.
    pub async fn run_once(&mut self, max_wait: Duration) -> Result<(), NetError> {
        self.do_sends();

        let ready = match self.wait_readable(max_wait).await {
            Ok(ready) => ready,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => return Ok(()),
            Err(e) => {
                error!("run_once: readiness wait failed ({})", e);
                return Err(NetError::Poll(e));
            }
        };
        self.last_tick = Instant::now();

        for id in ready {
            self.dispatch_recv(id);
        }

        self.do_sends();

        let stall_time = self.config.stall_duration();
        let rfifo_size = self.config.rfifo_size;
        let last_tick = self.last_tick;
        for id in 1..self.sessions.capacity() {
            let Some(session) = self.sessions.get_mut(id) else {
                continue;
            };

            let stalled = session
                .last_activity
                .is_some_and(|last| last_tick.saturating_duration_since(last) > stall_time);
            if stalled && !session.flags.eof {
                if session.flags.server {
                    if session.flags.ping != PingState::Sent {
                        session.flags.ping = PingState::Requested;
                    }
                } else {
                    info!("Session #{} timed out", id);
                    self.sessions.set_eof(id);
                }
            }

            let Some(parse) = self.sessions.get(id).map(|s| s.parse_hook) else {
                continue;
            };
            parse(self, id);

            // the parse hook may have closed it
            let Some(session) = self.sessions.get(id) else {
                continue;
            };
            if session.rfifo.len() == rfifo_size && session.rfifo.capacity() == rfifo_size {
                warn!("Session #{} filled its read buffer without a complete packet, closing", id);
                self.sessions.set_eof(id);
                continue;
            }
            self.sessions.compact(id);
        }

        Ok(())
    }

    /// Waits until at least one session is readable or `max_wait` passes.
    async fn wait_readable(&mut self, max_wait: Duration) -> io::Result<Vec<SessionId>> {
        let sessions = &mut self.sessions;
        let ready = poll_fn(|cx| sessions.poll_readable(cx));
        match tokio::time::timeout(max_wait, ready).await {
            Ok(result) => result,
            Err(_elapsed) => Ok(Vec::new()),
        }
    }

    fn dispatch_recv(&mut self, id: SessionId) {
        let Some(hook) = self.sessions.get(id).map(|s| s.recv_hook) else {
            return;
        };
        match hook {
            RecvHook::Null => {}
            RecvHook::Fifo => self.sessions.recv(id, self.last_tick),
            RecvHook::Accept => self.connect_client(id),
        }
    }

    /// Flushes sessions with queued output and lets end-of-file sessions
    /// parse (usually to close). Sessions that still have output afterwards
    /// are kept for the next pass.
    fn do_sends(&mut self) {
        for id in self.sessions.take_dirty().into_iter().rev() {
            if !self.sessions.is_registered(id) {
                continue;
            }
            self.sessions.flush(id);

            let Some(session) = self.sessions.get(id) else {
                continue;
            };
            if session.flags.eof {
                let parse = session.parse_hook;
                parse(self, id);
            }

            if let Some(session) = self.sessions.get(id) {
                if !session.flags.eof && !session.wfifo.is_empty() {
                    self.sessions.mark_dirty(id);
                }
            }
        }
    }

    /// Accept hook: takes the pending connection from listener `id`.
    fn connect_client(&mut self, listener: SessionId) {
        let Some(accepted) = self
            .sessions
            .get_mut(listener)
            .and_then(|s| s.transport_mut())
            .and_then(Transport::take_accepted)
        else {
            return;
        };

        let (stream, addr) = match accepted {
            Ok(pair) => pair,
            Err(e) => {
                error!("connect_client: accept failed ({})!", e);
                return;
            }
        };

        let Some(id) = self.sessions.free_slot() else {
            error!(
                "connect_client: no free session slot for {} (capacity {}), dropping it",
                addr,
                self.sessions.capacity()
            );
            return;
        };

        if let Err(e) = transport::configure_stream(&stream) {
            warn!("connect_client: failed to set socket options ({})", e);
        }

        if self.config.access.enabled {
            if let Some(ip) = ipv4_of(addr.ip()) {
                if self.admission.decide(ip, Instant::now()) == Verdict::Reject {
                    debug!("connect_client: rejected connection from {}", addr);
                    return;
                }
            }
        }

        let parse = self.default_parse;
        let now = self.last_tick;
        match self.sessions.create(id, RecvHook::Fifo, SendHook::Fifo, parse) {
            Ok(session) => {
                session.attach(Transport::Stream(stream), Some(addr), now);
                debug!("Connection from {} is session #{}", addr, id);
            }
            Err(e) => error!("connect_client: {}", e),
        }
    }
}

fn ipv4_of(ip: IpAddr) -> Option<std::net::Ipv4Addr> {
    match ip {
        IpAddr::V4(ip) => Some(ip),
        IpAddr::V6(ip) => ip.to_ipv4_mapped(),
    }
}
