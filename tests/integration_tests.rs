//! Integration tests for the connection core
//!
//! These tests run a real reactor with the lobby parse hook on a loopback
//! socket and talk to it through the client library.

use client::network::{ClientError, Frame, ShieldClient};
use server::lobby::{lobby_parse, SERVER_NAME};
use server::{Reactor, ServerConfig};
use shared::packets::{
    parse_info_message, parse_whisper, read_u32, CS_LOGIN_LEGACY, INFO_UNIQUE_ID_MISMATCH,
    INFO_VERSION_TOO_LOW, SC_SHIELD_INFO, SC_SHIELD_INIT, SC_WHISPER_FROM,
};
use shared::{InitAckFrame, InitFrame};
use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tokio_test::{assert_err, assert_ok};

const STEP: Duration = Duration::from_secs(5);

/// Running lobby server; the loop stops when this is dropped.
struct TestServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn start_server(options: &[(&str, &str)]) -> TestServer {
    let mut config = ServerConfig::default();
    for (name, value) in options {
        config.set_option(name, value).unwrap();
    }

    let mut reactor = Reactor::new(config);
    reactor.set_default_parse(lobby_parse);
    let id = reactor
        .make_listen_bind("127.0.0.1:0".parse().unwrap())
        .unwrap();
    let addr = reactor.sessions().get(id).unwrap().local_addr().unwrap();

    let handle = tokio::spawn(async move {
        while reactor.run_once(Duration::from_millis(5)).await.is_ok() {}
    });
    TestServer { addr, handle }
}

async fn step<T>(fut: impl Future<Output = T>) -> T {
    timeout(STEP, fut).await.expect("step timed out")
}

fn whisper(frame: &Frame) -> (String, String) {
    assert_eq!(frame.packet_type, SC_WHISPER_FROM);
    parse_whisper(&frame.data).unwrap()
}

/// Reads until the server hangs up. A reset counts as a hang-up too.
async fn assert_disconnected(client: &mut ShieldClient) {
    match step(client.read_frame()).await {
        Ok(None) | Err(ClientError::Io(_)) => {}
        other => panic!("expected disconnect, got {:?}", other),
    }
}

/// SHIELD HANDSHAKE TESTS
mod shield_tests {
    use super::*;

    /// Full shielded session: handshake, encoded login, whisper echo, heartbeat
    #[tokio::test]
    async fn shielded_login_and_whisper() {
        let server = start_server(&[("shield_enabled", "on")]);
        let mut client = step(ShieldClient::connect(server.addr)).await.unwrap();

        step(client.login("alice", "secret")).await.unwrap();
        let init = step(client.handshake(0x1234_5678, 1)).await.unwrap();
        assert_eq!(init.packet_type, SC_SHIELD_INIT);
        assert!(client.is_shielded());

        step(client.login("alice", "secret")).await.unwrap();
        let (from, message) = whisper(&step(client.expect_frame()).await.unwrap());
        assert_eq!(from, SERVER_NAME);
        assert_eq!(message, "welcome, alice");

        step(client.whisper("bob", "hello there")).await.unwrap();
        let (from, message) = whisper(&step(client.expect_frame()).await.unwrap());
        assert_eq!(from, "bob");
        assert_eq!(message, "hello there");

        // heartbeats are swallowed; the link stays usable afterwards
        step(client.send_sync()).await.unwrap();
        step(client.whisper("carol", "still here")).await.unwrap();
        let (from, message) = whisper(&step(client.expect_frame()).await.unwrap());
        assert_eq!(from, "carol");
        assert_eq!(message, "still here");
    }

    /// A forged acknowledgement earns an info frame and a disconnect
    #[tokio::test]
    async fn mismatched_ack_is_rejected() {
        let server = start_server(&[("shield_enabled", "on")]);
        let mut client = step(ShieldClient::connect(server.addr)).await.unwrap();

        step(client.login("mallory", "x")).await.unwrap();
        let opener = step(client.expect_frame()).await.unwrap();
        let init = InitFrame::decode(&opener.data).unwrap();
        client.accept_init(&init);

        let mut ack = InitAckFrame::new(0x0bad_cafe, 1);
        ack.unique_id_obscured = 0x1111_1111;
        step(client.send_frame(ack.encode().unwrap())).await.unwrap();

        let info = step(client.expect_frame()).await.unwrap();
        assert_eq!(info.packet_type, SC_SHIELD_INFO);
        assert_eq!(read_u32(&info.data, 2), Some(INFO_UNIQUE_ID_MISMATCH));

        assert_disconnected(&mut client).await;
    }

    /// An acknowledgement nobody asked for ends the connection
    #[tokio::test]
    async fn unsolicited_ack_is_rejected() {
        let server = start_server(&[("shield_enabled", "on")]);
        let mut client = step(ShieldClient::connect(server.addr)).await.unwrap();

        let ack = InitAckFrame::new(0x1234_5678, 1).encode().unwrap();
        step(client.send_raw(&ack)).await.unwrap();
        let _ = step(client.login("oscar", "pw")).await;

        assert_disconnected(&mut client).await;
    }

    /// Peers below the minimum shield version are told why they are dropped
    #[tokio::test]
    async fn outdated_shield_version_is_refused() {
        let server = start_server(&[("shield_enabled", "on"), ("shield_min_version", "3")]);
        let mut client = step(ShieldClient::connect(server.addr)).await.unwrap();

        step(client.login("nina", "pw")).await.unwrap();
        let init = step(client.handshake(0x0102_0304, 2)).await.unwrap();
        assert_eq!(init.packet_type, SC_SHIELD_INIT);

        let info = step(client.expect_frame()).await.unwrap();
        assert_eq!(info.packet_type, SC_SHIELD_INFO);
        let (info_type, _) = parse_info_message(&info.data).unwrap();
        assert_eq!(info_type, INFO_VERSION_TOO_LOW);

        assert_disconnected(&mut client).await;
    }

    /// Outdated login packets are turned away
    #[tokio::test]
    async fn legacy_login_is_closed() {
        let server = start_server(&[("shield_enabled", "on")]);
        let mut client = step(ShieldClient::connect(server.addr)).await.unwrap();

        let mut legacy = CS_LOGIN_LEGACY[1].to_le_bytes().to_vec();
        legacy.extend_from_slice(&[0; 30]);
        step(client.send_raw(&legacy)).await.unwrap();

        assert_disconnected(&mut client).await;
    }
}

/// PLAIN PROTOCOL TESTS
mod plain_tests {
    use super::*;

    /// Without the shield the first login is answered directly
    #[tokio::test]
    async fn plain_login_is_welcomed() {
        let server = start_server(&[]);
        let mut client = step(ShieldClient::connect(server.addr)).await.unwrap();

        step(client.login("dave", "pw")).await.unwrap();
        let (from, message) = whisper(&step(client.expect_frame()).await.unwrap());
        assert_eq!(from, SERVER_NAME);
        assert_eq!(message, "welcome, dave");
        assert!(!client.is_shielded());
    }

    /// Several frames in one segment are all handled, in order
    #[tokio::test]
    async fn pipelined_frames() {
        let server = start_server(&[]);
        let mut client = step(ShieldClient::connect(server.addr)).await.unwrap();

        let mut batch = shared::packets::login_frame(1, "erin", "pw", 0);
        for target in ["one", "two", "three"] {
            batch.extend(
                shared::packets::whisper_frame(shared::packets::CS_WHISPER_TO, target, "x")
                    .unwrap(),
            );
        }
        step(client.send_raw(&batch)).await.unwrap();

        let replies: Vec<String> = {
            let mut names = Vec::new();
            for _ in 0..4 {
                names.push(whisper(&step(client.expect_frame()).await.unwrap()).0);
            }
            names
        };
        assert_eq!(replies, vec![SERVER_NAME, "one", "two", "three"]);
    }

    /// Unknown packets end the session
    #[tokio::test]
    async fn garbage_disconnects() {
        let server = start_server(&[]);
        let mut client = step(ShieldClient::connect(server.addr)).await.unwrap();

        step(client.send_raw(&[0xfe, 0xfe, 0x00, 0x00])).await.unwrap();
        assert_disconnected(&mut client).await;
    }
}

/// ADMISSION CONTROL TESTS
mod admission_tests {
    use super::*;

    async fn welcomed(addr: SocketAddr) -> Result<(), ClientError> {
        let mut client = step(ShieldClient::connect(addr)).await?;
        step(client.login("fred", "pw")).await?;
        let frame = step(client.expect_frame()).await?;
        assert_eq!(whisper(&frame).0, SERVER_NAME);
        Ok(())
    }

    /// A denied address is disconnected without a reply
    #[tokio::test]
    async fn denied_address_is_dropped() {
        let server = start_server(&[("deny", "127.0.0.0/8")]);
        let mut client = step(ShieldClient::connect(server.addr)).await.unwrap();
        let _ = step(client.login("gina", "pw")).await;
        assert_disconnected(&mut client).await;
    }

    /// Connecting faster than the burst threshold gets the address refused
    #[tokio::test]
    async fn burst_is_refused() {
        let server = start_server(&[("ddos_count", "2"), ("ddos_interval", "60000")]);

        assert_ok!(welcomed(server.addr).await);
        assert_ok!(welcomed(server.addr).await);
        assert_err!(welcomed(server.addr).await);
        assert_err!(welcomed(server.addr).await);
    }

    /// Explicitly allowed addresses are still served after a burst
    #[tokio::test]
    async fn allowed_address_survives_burst() {
        let server = start_server(&[
            ("order", "deny,allow"),
            ("allow", "127.0.0.1"),
            ("deny", "all"),
            ("ddos_count", "1"),
            ("ddos_interval", "60000"),
        ]);

        for _ in 0..4 {
            assert_ok!(welcomed(server.addr).await);
        }
    }

    /// With IP rules switched off nothing is refused
    #[tokio::test]
    async fn rules_can_be_disabled() {
        let server = start_server(&[
            ("enable_ip_rules", "off"),
            ("deny", "all"),
            ("ddos_count", "1"),
        ]);

        for _ in 0..3 {
            assert_ok!(welcomed(server.addr).await);
        }
    }
}

/// SESSION LIFECYCLE TESTS
mod lifecycle_tests {
    use super::*;

    /// A full table turns new connections away while existing ones keep working
    #[tokio::test]
    async fn full_table_refuses_extra_clients() {
        let server = start_server(&[("max_sessions", "3")]);

        let mut first = step(ShieldClient::connect(server.addr)).await.unwrap();
        step(first.login("harry", "pw")).await.unwrap();
        whisper(&step(first.expect_frame()).await.unwrap());

        let mut second = step(ShieldClient::connect(server.addr)).await.unwrap();
        let _ = step(second.login("ivy", "pw")).await;
        assert_disconnected(&mut second).await;

        step(first.whisper("jack", "ping")).await.unwrap();
        let (from, _) = whisper(&step(first.expect_frame()).await.unwrap());
        assert_eq!(from, "jack");
    }

    /// Slots freed by departing clients are reused
    #[tokio::test]
    async fn slots_are_reused() {
        let server = start_server(&[("max_sessions", "3")]);

        for name in ["kim", "lee", "max"] {
            let mut client = step(ShieldClient::connect(server.addr)).await.unwrap();
            step(client.login(name, "pw")).await.unwrap();
            let (_, message) = whisper(&step(client.expect_frame()).await.unwrap());
            assert_eq!(message, format!("welcome, {}", name));
            drop(client);
            // give the server a moment to notice the hang-up
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
    }
}
