use std::net::SocketAddr;

use clap::Parser;
use client::network::{ClientError, ShieldClient};
use log::{info, warn};
use shared::packets::{
    parse_info_message, parse_whisper, read_u32, SC_SHIELD_INFO, SC_SHIELD_INIT, SC_WHISPER_FROM,
};
use shared::{InitAckFrame, InitFrame};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Server address to connect to
    #[arg(short = 's', long, default_value = "127.0.0.1:6900")]
    server: SocketAddr,

    /// Account name to log in with
    #[arg(short = 'u', long, default_value = "player")]
    username: String,

    /// Account password
    #[arg(short = 'p', long, default_value = "password")]
    password: String,

    /// Unique id reported during the shield handshake
    #[arg(long, default_value = "305419896")]
    unique_id: u32,

    /// Whisper to send once logged in, as target:message
    #[arg(short = 'w', long)]
    whisper: Option<String>,
}

/// Logs frames until a whisper arrives.
async fn await_whisper(client: &mut ShieldClient) -> Result<(), ClientError> {
    loop {
        let frame = client.expect_frame().await?;
        match frame.packet_type {
            SC_WHISPER_FROM => {
                if let Some((from, message)) = parse_whisper(&frame.data) {
                    info!("[{}] {}", from, message);
                }
                return Ok(());
            }
            SC_SHIELD_INFO => match parse_info_message(&frame.data) {
                Some((info_type, message)) => {
                    warn!("Server reported shield info {}: {}", info_type, message)
                }
                None => warn!("Server reported shield error: {:?}", read_u32(&frame.data, 2)),
            },
            other => warn!("Ignoring packet 0x{:04x}", other),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    if std::env::var("RUST_LOG").is_err() {
        eprintln!("Set RUST_LOG=info for detailed logging");
    }

    let args = Args::parse();

    info!("Connecting to: {}", args.server);
    let mut client = ShieldClient::connect(args.server).await?;
    client.login(&args.username, &args.password).await?;

    // A shielded server answers the first login with an opener.
    let first = client.expect_frame().await?;
    match first.packet_type {
        SC_SHIELD_INIT => {
            let init = InitFrame::decode(&first.data)?;
            client.accept_init(&init);
            client
                .send_frame(InitAckFrame::new(args.unique_id, 1).encode()?)
                .await?;
            info!("Shield handshake done, logging in again");
            client.login(&args.username, &args.password).await?;
            await_whisper(&mut client).await?;
        }
        SC_WHISPER_FROM => {
            if let Some((from, message)) = parse_whisper(&first.data) {
                info!("[{}] {}", from, message);
            }
        }
        other => warn!("Unexpected first packet 0x{:04x}", other),
    }

    if let Some(whisper) = args.whisper {
        let (target, message) = whisper.split_once(':').unwrap_or(("Server", whisper.as_str()));
        client.whisper(target, message).await?;
        await_whisper(&mut client).await?;
    }

    Ok(())
}
