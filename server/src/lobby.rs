//! Minimal lobby: greets logins and echoes whispers.
//!
//! Serves as the default parse hook of the server binary and exercises the
//! whole stack: framing, the shield handshake and obfuscated replies.

use log::{debug, info, warn};
use shared::packets::{
    parse_whisper, read_cstr, whisper_frame, CS_LOGIN, CS_LOGIN_DYNAMIC, CS_WHISPER_TO,
    NAME_LEN, SC_WHISPER_FROM,
};

use crate::reactor::Reactor;
use crate::session::SessionId;
use crate::shield::Inspection;

/// Name shown as the sender of server whispers.
pub const SERVER_NAME: &str = "Server";

/// Parse hook for lobby connections.
pub fn lobby_parse(reactor: &mut Reactor, id: SessionId) {
    if !reactor.sessions().is_active(id) {
        reactor.close(id);
        return;
    }

    let now = reactor.last_tick();
    loop {
        match reactor.sessions_mut().inspect(id, now) {
            Inspection::Incomplete | Inspection::Closed => return,
            Inspection::Consumed => {}
            Inspection::Unrecognized(code) => {
                warn!("lobby: unknown packet 0x{:04x} from session #{}, disconnecting", code, id);
                reactor.sessions_mut().set_eof(id);
                return;
            }
            Inspection::Ready { packet_type, len } => {
                let frame = reactor.sessions().rest(id)[..len].to_vec();
                reactor.sessions_mut().skip(id, len);
                handle_frame(reactor, id, packet_type, &frame);
            }
        }
    }
}

fn handle_frame(reactor: &mut Reactor, id: SessionId, packet_type: u16, frame: &[u8]) {
    match packet_type {
        CS_LOGIN => {
            let name = read_cstr(frame.get(6..6 + NAME_LEN).unwrap_or_default());
            info!("lobby: '{}' logged in on session #{}", name, id);
            reply(reactor, id, SERVER_NAME, &format!("welcome, {}", name));
        }
        CS_LOGIN_DYNAMIC => {
            info!("lobby: dynamic login on session #{}", id);
            reply(reactor, id, SERVER_NAME, "welcome");
        }
        CS_WHISPER_TO => match parse_whisper(frame) {
            Some((target, message)) => reply(reactor, id, &target, &message),
            None => debug!("lobby: truncated whisper from session #{}", id),
        },
        other => debug!("lobby: ignoring packet 0x{:04x} from session #{}", other, id),
    }
}

fn reply(reactor: &mut Reactor, id: SessionId, from: &str, message: &str) {
    match whisper_frame(SC_WHISPER_FROM, from, message) {
        Ok(frame) => reactor.sessions_mut().send(id, &frame),
        Err(e) => warn!("lobby: cannot build whisper for session #{}: {}", id, e),
    }
}
