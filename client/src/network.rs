//! Client side of the wire protocol, including the shield handshake.
//!
//! The client mirrors the server's cipher links: what the server decodes with
//! its receive link, the client encodes with a link seeded the same way, and
//! vice versa for server output.

use std::io;
use std::net::SocketAddr;

use log::{debug, info};
use shared::packets::{
    login_frame, read_u16, whisper_frame, CS_WHISPER_TO, INFO_FRAME_LEN, INFO_MESSAGE_MIN_LEN,
    SC_SHIELD_INFO, SC_SHIELD_INIT,
};
use shared::{
    rule_for, CipherLink, FrameError, InitAckFrame, InitFrame, LinkKind, PacketRule, ServerType,
    SyncFrame,
};
use thiserror::Error;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("frame error: {0}")]
    Frame(#[from] FrameError),

    #[error("unexpected packet 0x{0:04x}")]
    Unexpected(u16),

    #[error("connection closed by server")]
    Closed,
}

/// One frame read from the server, decoded if the connection is shielded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub packet_type: u16,
    pub data: Vec<u8>,
}

/// Client halves of the three cipher links.
#[derive(Debug, Clone)]
struct PeerLinks {
    outgoing: CipherLink,
    incoming: CipherLink,
    sync: CipherLink,
}

impl PeerLinks {
    fn from_init(init: &InitFrame) -> Self {
        Self {
            outgoing: CipherLink::seeded(LinkKind::Recv, init.recv_key),
            incoming: CipherLink::seeded(LinkKind::Send, init.send_key),
            sync: CipherLink::seeded(LinkKind::Sync, init.sync_key),
        }
    }
}

/// TCP connection to a lobby server.
pub struct ShieldClient {
    stream: TcpStream,
    links: Option<PeerLinks>,
    server_type: Option<ServerType>,
}

impl ShieldClient {
    pub async fn connect(addr: SocketAddr) -> Result<Self, ClientError> {
        let stream = TcpStream::connect(addr).await?;
        stream.set_nodelay(true)?;
        info!("Connected to {}", addr);
        Ok(Self {
            stream,
            links: None,
            server_type: None,
        })
    }

    /// Whether a handshake has seeded the cipher links.
    pub fn is_shielded(&self) -> bool {
        self.links.is_some()
    }

    pub fn server_type(&self) -> Option<ServerType> {
        self.server_type
    }

    /// Sends a frame, encoding the regions the server expects to be encoded.
    pub async fn send_frame(&mut self, mut frame: Vec<u8>) -> Result<(), ClientError> {
        if let (Some(links), Some(code)) = (self.links.as_mut(), read_u16(&frame, 0)) {
            let link = match rule_for(code) {
                Some(PacketRule::Sync) => Some(&mut links.sync),
                Some(
                    PacketRule::Login { .. }
                    | PacketRule::DynamicLogin
                    | PacketRule::Dynamic
                    | PacketRule::Fixed { .. }
                    | PacketRule::InitAck,
                ) => Some(&mut links.outgoing),
                _ => None,
            };
            if let (Some(link), Some(rule)) = (link, rule_for(code)) {
                let offset = rule.cipher_offset().min(frame.len());
                link.apply(&mut frame[offset..]);
            }
        }

        self.stream.write_all(&frame).await?;
        Ok(())
    }

    /// Sends raw bytes, bypassing the cipher.
    pub async fn send_raw(&mut self, bytes: &[u8]) -> Result<(), ClientError> {
        self.stream.write_all(bytes).await?;
        Ok(())
    }

    /// Reads the next frame. `None` means the server closed the connection.
    pub async fn read_frame(&mut self) -> Result<Option<Frame>, ClientError> {
        let mut header = [0u8; 2];
        match self.stream.read_exact(&mut header).await {
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
            Err(e) => return Err(e.into()),
        }
        let code = u16::from_le_bytes(header);

        match code {
            SC_SHIELD_INFO | SC_SHIELD_INIT => {}
            code if rule_for(code) == Some(PacketRule::Outbound) => {}
            code => return Err(ClientError::Unexpected(code)),
        }

        let mut data = header.to_vec();
        if code == SC_SHIELD_INFO {
            // the short layout and the message layout share a type code
            data.resize(INFO_FRAME_LEN, 0);
            self.stream.read_exact(&mut data[2..]).await?;
            let total = usize::from(u16::from_le_bytes([data[2], data[3]]));
            if total >= INFO_MESSAGE_MIN_LEN {
                data.resize(total, 0);
                self.stream.read_exact(&mut data[INFO_FRAME_LEN..]).await?;
            }
        } else {
            let mut len = [0u8; 2];
            self.stream.read_exact(&mut len).await?;
            data.extend_from_slice(&len);
            let total = usize::from(u16::from_le_bytes(len));
            if total < 4 {
                return Err(FrameError::TooShort { need: 4, have: total }.into());
            }
            data.resize(total, 0);
            self.stream.read_exact(&mut data[4..]).await?;
        }

        if let Some(links) = self.links.as_mut() {
            if rule_for(code) == Some(PacketRule::Outbound) {
                links.incoming.apply(&mut data[4..]);
            }
        }

        debug!("Received packet 0x{:04x} ({} bytes)", code, data.len());
        Ok(Some(Frame {
            packet_type: code,
            data,
        }))
    }

    /// Reads the next frame, treating a closed connection as an error.
    pub async fn expect_frame(&mut self) -> Result<Frame, ClientError> {
        self.read_frame().await?.ok_or(ClientError::Closed)
    }

    /// Seeds the links from an opener frame received from the server.
    pub fn accept_init(&mut self, init: &InitFrame) {
        self.links = Some(PeerLinks::from_init(init));
        self.server_type = ServerType::from_tag(init.server_type);
    }

    /// Waits for the opener, seeds the links and acknowledges.
    pub async fn handshake(
        &mut self,
        unique_id: u32,
        version: u32,
    ) -> Result<InitFrame, ClientError> {
        let frame = self.expect_frame().await?;
        if frame.packet_type != SC_SHIELD_INIT {
            return Err(ClientError::Unexpected(frame.packet_type));
        }
        let init = InitFrame::decode(&frame.data)?;
        self.accept_init(&init);

        self.send_frame(InitAckFrame::new(unique_id, version).encode()?)
            .await?;
        info!(
            "Shield handshake done ({:?} server, min version {})",
            self.server_type, init.min_version
        );
        Ok(init)
    }

    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), ClientError> {
        self.send_frame(login_frame(1, username, password, 0)).await
    }

    pub async fn whisper(&mut self, target: &str, message: &str) -> Result<(), ClientError> {
        self.send_frame(whisper_frame(CS_WHISPER_TO, target, message)?)
            .await
    }

    /// Heartbeat keeping the sync link in step.
    pub async fn send_sync(&mut self) -> Result<(), ClientError> {
        self.send_frame(SyncFrame::new().encode()?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::packets::{
        info_message_frame, parse_info_message, parse_whisper, INFO_UNIQUE_ID_MISMATCH,
        INFO_VERSION_TOO_LOW, SC_WHISPER_FROM,
    };
    use shared::InfoFrame;
    use tokio::net::TcpListener;

    async fn pair() -> (ShieldClient, TcpStream) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let client = ShieldClient::connect(addr).await.unwrap();
        let (server, _) = listener.accept().await.unwrap();
        (client, server)
    }

    #[tokio::test]
    async fn test_plain_frames_pass_through() {
        let (mut client, mut server) = pair().await;
        client.login("alice", "pw").await.unwrap();

        let mut buf = vec![0u8; 55];
        server.read_exact(&mut buf).await.unwrap();
        assert_eq!(buf, login_frame(1, "alice", "pw", 0));
    }

    #[tokio::test]
    async fn test_handshake_seeds_links_and_acks() {
        let (mut client, mut server) = pair().await;
        let init = InitFrame::new((1, 2, 3), ServerType::Char, 5);
        server.write_all(&init.encode().unwrap()).await.unwrap();

        let seen = client.handshake(0xabcd_0123, 9).await.unwrap();
        assert_eq!(seen, init);
        assert!(client.is_shielded());
        assert_eq!(client.server_type(), Some(ServerType::Char));

        let mut ack = vec![0u8; 16];
        server.read_exact(&mut ack).await.unwrap();
        CipherLink::seeded(LinkKind::Recv, 1).apply(&mut ack[4..]);
        let ack = InitAckFrame::decode(&ack).unwrap();
        assert_eq!(ack.unique_id, 0xabcd_0123);
        assert!(ack.is_consistent());
    }

    #[tokio::test]
    async fn test_shielded_whisper_is_decoded() {
        let (mut client, mut server) = pair().await;
        client.accept_init(&InitFrame::new((1, 2, 3), ServerType::Login, 0));

        let plain = whisper_frame(SC_WHISPER_FROM, "Server", "hi").unwrap();
        let mut wire = plain.clone();
        CipherLink::seeded(LinkKind::Send, 2).apply(&mut wire[4..]);
        server.write_all(&wire).await.unwrap();

        let frame = client.expect_frame().await.unwrap();
        assert_eq!(frame.data, plain);
        assert_eq!(
            parse_whisper(&frame.data),
            Some(("Server".to_string(), "hi".to_string()))
        );
    }

    #[tokio::test]
    async fn test_both_info_layouts_are_read() {
        let (mut client, mut server) = pair().await;
        let message = info_message_frame(INFO_VERSION_TOO_LOW, "too old").unwrap();
        let short = InfoFrame::new(INFO_UNIQUE_ID_MISMATCH).encode().unwrap();
        server.write_all(&message).await.unwrap();
        server.write_all(&short).await.unwrap();

        let frame = client.expect_frame().await.unwrap();
        assert_eq!(frame.data, message);
        assert_eq!(
            parse_info_message(&frame.data),
            Some((INFO_VERSION_TOO_LOW, "too old".to_string()))
        );

        let frame = client.expect_frame().await.unwrap();
        assert_eq!(frame.data, short);
        assert_eq!(InfoFrame::decode(&frame.data).unwrap().code, INFO_UNIQUE_ID_MISMATCH);
    }

    #[tokio::test]
    async fn test_closed_connection_reads_none() {
        let (mut client, server) = pair().await;
        drop(server);
        assert!(client.read_frame().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unknown_packet_is_an_error() {
        let (mut client, mut server) = pair().await;
        server.write_all(&[0x11, 0x11]).await.unwrap();
        assert!(matches!(
            client.read_frame().await,
            Err(ClientError::Unexpected(0x1111))
        ));
    }
}
