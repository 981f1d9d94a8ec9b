use std::net::SocketAddr;
use std::time::{Duration, Instant};

use clap::Parser;
use log::{error, info};
use server::lobby::lobby_parse;
use server::{Reactor, ServerConfig};

/// How often stale connection history is swept.
const HISTORY_SWEEP_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Command line arguments
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Server IP address to bind to
    #[clap(short = 'H', long, default_value = "127.0.0.1")]
    host: String,
    /// Server port to listen on
    #[clap(short, long, default_value = "6900")]
    port: u16,
    /// Longest time one loop pass waits for input, in milliseconds
    #[clap(short, long, default_value = "50")]
    tick_ms: u64,
    /// Maximum number of sessions, including the reserved slot
    #[clap(short, long, default_value = "1024")]
    max_sessions: usize,
    /// Enable the shield obfuscation layer
    #[clap(long)]
    shield: bool,
    /// Extra setting as key=value (repeatable), e.g. --option deny=10.0.0.0/8
    #[clap(short, long = "option", value_name = "KEY=VALUE")]
    options: Vec<String>,
}

/// Main-method of the application.
/// Parses command-line arguments, binds the listener and runs the loop until Ctrl+C.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();

    let mut config = ServerConfig {
        max_sessions: args.max_sessions,
        ..ServerConfig::default()
    };
    config.shield.enabled = args.shield;

    let pairs: Vec<(&str, &str)> = args
        .options
        .iter()
        .filter_map(|opt| match opt.split_once('=') {
            Some(pair) => Some(pair),
            None => {
                error!("Ignoring malformed option '{}', expected key=value", opt);
                None
            }
        })
        .collect();
    config.apply_options(pairs);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let mut reactor = Reactor::new(config);
    reactor.set_default_parse(lobby_parse);
    reactor.make_listen_bind(addr)?;

    info!(
        "Server started (shield {})",
        if reactor.config().shield.enabled { "on" } else { "off" }
    );

    let tick = Duration::from_millis(args.tick_ms);
    let mut next_sweep = Instant::now() + Duration::from_secs(1);
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        let now = Instant::now();
        if now >= next_sweep {
            reactor.sweep_history(now);
            next_sweep = now + HISTORY_SWEEP_INTERVAL;
        }
        let max_wait = tick.min(next_sweep.saturating_duration_since(now));

        tokio::select! {
            result = reactor.run_once(max_wait) => {
                if let Err(e) = result {
                    error!("Fatal loop error: {}", e);
                    reactor.shutdown();
                    return Err(e.into());
                }
            }
            _ = &mut shutdown => {
                info!("Received Ctrl+C, shutting down gracefully...");
                break;
            }
        }
    }

    reactor.shutdown();
    Ok(())
}
