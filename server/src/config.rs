//! Runtime configuration for the connection layer.
//!
//! Everything has a usable default. Individual settings can be overridden by
//! name through [`ServerConfig::set_option`], which the server binary feeds
//! from repeated `--option key=value` flags.

use std::time::Duration;

use log::warn;
use shared::ServerType;
use thiserror::Error;

use crate::admission::{AccessOrder, AccessRule, RuleParseError};
use crate::fifo::{FifoLimits, FIFOSIZE_SERVERLINK, RFIFO_SIZE, WFIFO_MAX, WFIFO_SIZE};

/// Smallest accepted stall timeout, in seconds.
pub const MIN_STALL_TIME: u64 = 3;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("invalid value '{value}' for option '{option}'")]
    InvalidValue { option: String, value: String },

    #[error(transparent)]
    Rule(#[from] RuleParseError),
}

/// Admission control settings.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessConfig {
    pub enabled: bool,
    pub order: AccessOrder,
    pub allow: Vec<AccessRule>,
    pub deny: Vec<AccessRule>,
    /// Attempts closer together than this count towards a burst.
    pub burst_interval: Duration,
    /// Attempts within the interval that flag an address.
    pub burst_count: u32,
    /// How long a burst flag lasts.
    pub burst_autoreset: Duration,
    /// Log every rule match.
    pub debug: bool,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            order: AccessOrder::DenyUnlessAllowed,
            allow: Vec::new(),
            deny: Vec::new(),
            burst_interval: Duration::from_millis(3_000),
            burst_count: 10,
            burst_autoreset: Duration::from_millis(600_000),
            debug: false,
        }
    }
}

/// Obfuscation layer settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ShieldConfig {
    pub enabled: bool,
    /// Minimum client shield version advertised in the handshake.
    pub min_version: u32,
    /// Which server role the handshake announces.
    pub server_type: ServerType,
}

impl Default for ShieldConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            min_version: 0,
            server_type: ServerType::Login,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Seconds without traffic before a session is considered stalled.
    pub stall_time: u64,
    /// Session slots, including the reserved slot 0.
    pub max_sessions: usize,
    pub rfifo_size: usize,
    pub wfifo_size: usize,
    pub wfifo_max: usize,
    pub serverlink_fifo_size: usize,
    /// Largest frame a client session may be sent.
    pub max_client_packet: usize,
    pub access: AccessConfig,
    pub shield: ShieldConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            stall_time: 60,
            max_sessions: 1024,
            rfifo_size: RFIFO_SIZE,
            wfifo_size: WFIFO_SIZE,
            wfifo_max: WFIFO_MAX,
            serverlink_fifo_size: FIFOSIZE_SERVERLINK,
            max_client_packet: shared::MAX_FRAME_LEN,
            access: AccessConfig::default(),
            shield: ShieldConfig::default(),
        }
    }
}

/// Parses a yes/no style switch.
pub fn parse_switch(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "yes" | "true" | "1" => Some(true),
        "off" | "no" | "false" | "0" => Some(false),
        _ => None,
    }
}

fn parse_number<T: std::str::FromStr>(option: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        option: option.to_string(),
        value: value.to_string(),
    })
}

fn parse_bool(option: &str, value: &str) -> Result<bool, ConfigError> {
    parse_switch(value).ok_or_else(|| ConfigError::InvalidValue {
        option: option.to_string(),
        value: value.to_string(),
    })
}

/// Parses a comma separated list of rules. Order-sensitive.
///
/// Malformed entries are logged and skipped; the error is only returned when
/// no entry in the list was usable.
fn parse_rules(option: &str, value: &str) -> Result<Vec<AccessRule>, ConfigError> {
    let mut rules = Vec::new();
    let mut first_error = None;
    for entry in value.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        match entry.parse::<AccessRule>() {
            Ok(rule) => rules.push(rule),
            Err(e) => {
                warn!("{}: skipping invalid rule '{}': {}", option, entry, e);
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
    }
    match first_error {
        Some(e) if rules.is_empty() => Err(e.into()),
        _ => Ok(rules),
    }
}

impl ServerConfig {
    /// FIFO bounds derived from this configuration.
    pub fn limits(&self) -> FifoLimits {
        FifoLimits {
            rfifo_size: self.rfifo_size,
            wfifo_size: self.wfifo_size,
            wfifo_max: self.wfifo_max,
            serverlink_size: self.serverlink_fifo_size,
            max_client_packet: self.max_client_packet,
        }
    }

    pub fn stall_duration(&self) -> Duration {
        Duration::from_secs(self.stall_time)
    }

    /// Applies one named setting.
    ///
    /// `allow` and `deny` append to their lists; `allow`/`deny` with the value
    /// `clear` empties them. Stall times below [`MIN_STALL_TIME`] are raised.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        let key = name.trim().to_ascii_lowercase();
        match key.as_str() {
            "stall_time" => {
                let secs: u64 = parse_number(&key, value)?;
                if secs < MIN_STALL_TIME {
                    warn!("stall_time of {} is too low, using {}", secs, MIN_STALL_TIME);
                }
                self.stall_time = secs.max(MIN_STALL_TIME);
            }
            "max_sessions" => self.max_sessions = parse_number::<usize>(&key, value)?.max(2),
            "max_client_packet" => {
                let n: usize = parse_number(&key, value)?;
                self.max_client_packet = n.min(shared::MAX_FRAME_LEN);
            }
            "enable_ip_rules" => self.access.enabled = parse_bool(&key, value)?,
            "order" => self.access.order = value.parse()?,
            "allow" if value.trim().eq_ignore_ascii_case("clear") => self.access.allow.clear(),
            "deny" if value.trim().eq_ignore_ascii_case("clear") => self.access.deny.clear(),
            "allow" => self.access.allow.extend(parse_rules(&key, value)?),
            "deny" => self.access.deny.extend(parse_rules(&key, value)?),
            "ddos_interval" => {
                self.access.burst_interval = Duration::from_millis(parse_number(&key, value)?)
            }
            "ddos_count" => self.access.burst_count = parse_number(&key, value)?,
            "ddos_autoreset" => {
                self.access.burst_autoreset = Duration::from_millis(parse_number(&key, value)?)
            }
            "debug" => self.access.debug = parse_bool(&key, value)?,
            "shield_enabled" => self.shield.enabled = parse_bool(&key, value)?,
            "shield_min_version" => self.shield.min_version = parse_number(&key, value)?,
            "shield_server_type" => {
                self.shield.server_type = match value.trim().to_ascii_lowercase().as_str() {
                    "login" => ServerType::Login,
                    "char" => ServerType::Char,
                    "map" => ServerType::Map,
                    _ => {
                        return Err(ConfigError::InvalidValue {
                            option: key,
                            value: value.to_string(),
                        })
                    }
                }
            }
            _ => return Err(ConfigError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    /// Applies several settings, skipping (and logging) bad ones. Returns how
    /// many were applied.
    pub fn apply_options<'a, I>(&mut self, options: I) -> usize
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut applied = 0;
        for (name, value) in options {
            match self.set_option(name, value) {
                Ok(()) => applied += 1,
                Err(e) => warn!("Ignoring option {}={}: {}", name, value, e),
            }
        }
        applied
    }
}
