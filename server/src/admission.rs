//! Connection admission: static allow/deny rules plus per-address burst
//! detection.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::time::{Duration, Instant};

use log::{debug, info, warn};
use thiserror::Error;

use crate::config::AccessConfig;

/// Number of history buckets, keyed by the low 16 bits of the address.
pub const HISTORY_BUCKETS: usize = 0x10000;

/// Outcome of an admission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Reject,
    Accept,
    /// Accepted by an explicit allow rule; survives burst detection.
    UnconditionalAccept,
}

/// How the allow and deny lists combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessOrder {
    /// `deny,allow`
    #[default]
    DenyUnlessAllowed,
    /// `allow,deny`
    AllowUnlessDenied,
    /// `mutual-failure`: only addresses allowed and not denied get in.
    MutualFailure,
}

impl FromStr for AccessOrder {
    type Err = RuleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "deny,allow" => Ok(AccessOrder::DenyUnlessAllowed),
            "allow,deny" => Ok(AccessOrder::AllowUnlessDenied),
            "mutual-failure" => Ok(AccessOrder::MutualFailure),
            _ => Err(RuleParseError::Order(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleParseError {
    #[error("invalid ip or ip range '{0}'")]
    Rule(String),
    #[error("invalid access order '{0}'")]
    Order(String),
}

/// Address/mask pair. An address matches when `(ip & mask) == (rule.ip & mask)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessRule {
    pub ip: u32,
    pub mask: u32,
}

impl AccessRule {
    pub fn new(ip: Ipv4Addr, mask: u32) -> Self {
        Self {
            ip: u32::from(ip),
            mask,
        }
    }

    /// Matches every address.
    pub fn all() -> Self {
        Self { ip: 0, mask: 0 }
    }

    pub fn matches(&self, ip: u32) -> bool {
        (ip & self.mask) == (self.ip & self.mask)
    }
}

impl fmt::Display for AccessRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", Ipv4Addr::from(self.ip), Ipv4Addr::from(self.mask))
    }
}

/// Parses one dotted quad with up to three digits per octet.
fn parse_quad(s: &str) -> Option<u32> {
    let mut value = 0u32;
    let mut octets = 0;
    for part in s.split('.') {
        if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let octet: u32 = part.parse().ok()?;
        if octet > 255 {
            return None;
        }
        value = (value << 8) | octet;
        octets += 1;
    }
    (octets == 4).then_some(value)
}

impl FromStr for AccessRule {
    type Err = RuleParseError;

    /// Accepts `all`, `a.b.c.d`, `a.b.c.d/m.m.m.m` and `a.b.c.d/bits`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text == "all" {
            return Ok(Self::all());
        }

        let invalid = || RuleParseError::Rule(s.to_string());
        let (addr, mask) = match text.split_once('/') {
            None => (text, None),
            Some((addr, mask)) => (addr, Some(mask)),
        };
        let ip = parse_quad(addr).ok_or_else(invalid)?;

        let mask = match mask {
            None => u32::MAX,
            Some(m) if m.contains('.') => parse_quad(m).ok_or_else(invalid)?,
            Some(m) => {
                let bits: u32 = m.parse().map_err(|_| invalid())?;
                match bits {
                    0 => 0,
                    1..=32 => u32::MAX << (32 - bits),
                    _ => return Err(invalid()),
                }
            }
        };

        Ok(Self { ip, mask })
    }
}

/// Recent connection attempts from one address.
#[derive(Debug, Clone)]
struct ConnectHistory {
    ip: u32,
    tick: Instant,
    count: u32,
    burst: bool,
}

/// Stateful admission controller owned by the reactor.
pub struct AdmissionControl {
    config: AccessConfig,
    history: Vec<Vec<ConnectHistory>>,
}

impl AdmissionControl {
    pub fn new(config: AccessConfig) -> Self {
        Self {
            config,
            history: vec![Vec::new(); HISTORY_BUCKETS],
        }
    }

    pub fn config(&self) -> &AccessConfig {
        &self.config
    }

    /// Replaces the rules and thresholds. Connection history is kept.
    pub fn reload(&mut self, config: AccessConfig) {
        self.config = config;
    }

    /// Verdict from the allow/deny lists alone.
    pub fn static_verdict(&self, ip: u32) -> Verdict {
        let allowed = self.config.allow.iter().find(|rule| rule.matches(ip));
        let denied = self.config.deny.iter().find(|rule| rule.matches(ip));

        if self.config.debug {
            if let Some(rule) = allowed {
                info!("connect_check: Found match of {} with allow rule {}", Ipv4Addr::from(ip), rule);
            }
            if let Some(rule) = denied {
                info!("connect_check: Found match of {} with deny rule {}", Ipv4Addr::from(ip), rule);
            }
        }

        match self.config.order {
            AccessOrder::DenyUnlessAllowed | AccessOrder::AllowUnlessDenied => {
                if allowed.is_some() {
                    Verdict::UnconditionalAccept
                } else if denied.is_some() {
                    Verdict::Reject
                } else {
                    Verdict::Accept
                }
            }
            AccessOrder::MutualFailure => {
                if allowed.is_some() && denied.is_none() {
                    Verdict::UnconditionalAccept
                } else {
                    Verdict::Reject
                }
            }
        }
    }

    /// Decides on a new connection from `ip` and records the attempt.
    pub fn decide(&mut self, ip: Ipv4Addr, now: Instant) -> Verdict {
        let verdict = self.record_attempt(ip, now);
        if self.config.debug {
            match verdict {
                Verdict::Reject => info!("connect_check: Rejected connection from {}", ip),
                Verdict::Accept => info!("connect_check: Accepted connection from {}", ip),
                Verdict::UnconditionalAccept => {
                    info!("connect_check: Accepted connection from {} (allow rule)", ip)
                }
            }
        }
        verdict
    }

    fn record_attempt(&mut self, ip: Ipv4Addr, now: Instant) -> Verdict {
        let addr = u32::from(ip);
        let verdict = self.static_verdict(addr);
        let interval = self.config.burst_interval;
        let threshold = self.config.burst_count;

        let bucket = &mut self.history[(addr & 0xffff) as usize];
        let Some(record) = bucket.iter_mut().find(|h| h.ip == addr) else {
            bucket.push(ConnectHistory {
                ip: addr,
                tick: now,
                count: 0,
                burst: false,
            });
            return verdict;
        };

        if record.burst {
            return Self::demote(verdict);
        }

        if now.saturating_duration_since(record.tick) < interval {
            record.tick = now;
            record.count += 1;
            if record.count >= threshold {
                record.burst = true;
                warn!("connect_check: Connection burst detected from {}!", ip);
                return Self::demote(verdict);
            }
        } else {
            record.tick = now;
            record.count = 0;
        }

        verdict
    }

    /// Flagged addresses keep only explicit allow-list status.
    fn demote(verdict: Verdict) -> Verdict {
        match verdict {
            Verdict::UnconditionalAccept => Verdict::Accept,
            _ => Verdict::Reject,
        }
    }

    /// Drops stale history. Returns how many records were examined.
    ///
    /// Unflagged records expire after three burst intervals, flagged ones after
    /// the auto-reset period.
    pub fn sweep(&mut self, now: Instant) -> usize {
        let stale_after = self.config.burst_interval * 3;
        let reset_after = self.config.burst_autoreset;
        let mut examined = 0;
        let mut removed = 0;

        for bucket in self.history.iter_mut().filter(|b| !b.is_empty()) {
            let before = bucket.len();
            examined += before;
            bucket.retain(|h| {
                let age = now.saturating_duration_since(h.tick);
                let expired = if h.burst {
                    age > reset_after
                } else {
                    age > stale_after
                };
                if expired && h.burst {
                    info!("connect_check: Burst flag on {} has been reset", Ipv4Addr::from(h.ip));
                }
                !expired
            });
            removed += before - bucket.len();
        }

        if removed > 0 && self.config.debug {
            info!("connect_check: swept {} stale history records", removed);
        } else if removed > 0 {
            debug!("connect_check: swept {} stale history records", removed);
        }
        examined
    }

    /// Records currently tracked.
    pub fn history_len(&self) -> usize {
        self.history.iter().map(Vec::len).sum()
    }

    pub fn is_flagged(&self, ip: Ipv4Addr) -> bool {
        let addr = u32::from(ip);
        self.history[(addr & 0xffff) as usize]
            .iter()
            .any(|h| h.ip == addr && h.burst)
    }

    pub fn burst_interval(&self) -> Duration {
        self.config.burst_interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(s: &str) -> AccessRule {
        s.parse().unwrap()
    }

    fn control(order: AccessOrder, allow: &[&str], deny: &[&str]) -> AdmissionControl {
        AdmissionControl::new(AccessConfig {
            enabled: true,
            order,
            allow: allow.iter().map(|s| rule(s)).collect(),
            deny: deny.iter().map(|s| rule(s)).collect(),
            ..AccessConfig::default()
        })
    }

    fn ip(s: &str) -> u32 {
        u32::from(s.parse::<Ipv4Addr>().unwrap())
    }

    #[test]
    fn test_parse_rules() {
        assert_eq!(rule("all"), AccessRule::all());
        assert_eq!(rule("10.0.0.1"), AccessRule { ip: 0x0a00_0001, mask: u32::MAX });
        assert_eq!(
            rule("192.168.0.0/255.255.0.0"),
            AccessRule { ip: 0xc0a8_0000, mask: 0xffff_0000 }
        );
        assert_eq!(rule("10.1.0.0/12").mask, 0xfff0_0000);
        assert_eq!(rule("10.1.0.0/32").mask, u32::MAX);
        assert_eq!(rule("10.1.0.0/0").mask, 0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "10.0.0", "10.0.0.256", "10.0.0.1/33", "1.2.3.4/x", "a.b.c.d", "1234.0.0.1"] {
            assert!(bad.parse::<AccessRule>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn test_parse_order() {
        assert_eq!("deny,allow".parse(), Ok(AccessOrder::DenyUnlessAllowed));
        assert_eq!("allow,deny".parse(), Ok(AccessOrder::AllowUnlessDenied));
        assert_eq!("mutual-failure".parse(), Ok(AccessOrder::MutualFailure));
        assert!("sometimes".parse::<AccessOrder>().is_err());
    }

    #[test]
    fn test_rule_matching() {
        let lan = rule("192.168.0.0/16");
        assert!(lan.matches(ip("192.168.44.1")));
        assert!(!lan.matches(ip("192.169.0.1")));
        assert!(AccessRule::all().matches(ip("8.8.8.8")));
    }

    #[test]
    fn test_static_verdict_table() {
        let both = ["10.0.0.1"];
        for order in [AccessOrder::DenyUnlessAllowed, AccessOrder::AllowUnlessDenied] {
            let ac = control(order, &both, &["10.0.0.0/8"]);
            assert_eq!(ac.static_verdict(ip("10.0.0.1")), Verdict::UnconditionalAccept);
            assert_eq!(ac.static_verdict(ip("10.0.0.2")), Verdict::Reject);
            assert_eq!(ac.static_verdict(ip("11.0.0.1")), Verdict::Accept);
        }

        let ac = control(AccessOrder::MutualFailure, &["10.0.0.0/8"], &["10.0.0.1"]);
        assert_eq!(ac.static_verdict(ip("10.0.0.2")), Verdict::UnconditionalAccept);
        assert_eq!(ac.static_verdict(ip("10.0.0.1")), Verdict::Reject);
        assert_eq!(ac.static_verdict(ip("11.0.0.1")), Verdict::Reject);
    }

    #[test]
    fn test_first_burst_rejection_is_threshold_plus_one() {
        let mut ac = control(AccessOrder::DenyUnlessAllowed, &[], &[]);
        let peer: Ipv4Addr = "1.2.3.4".parse().unwrap();
        let start = Instant::now();

        for attempt in 0..10u64 {
            let now = start + Duration::from_millis(attempt * 10);
            assert_eq!(ac.decide(peer, now), Verdict::Accept, "attempt {}", attempt + 1);
        }
        assert_eq!(ac.decide(peer, start + Duration::from_millis(100)), Verdict::Reject);
        assert!(ac.is_flagged(peer));

        // stays flagged regardless of timing
        assert_eq!(ac.decide(peer, start + Duration::from_secs(60)), Verdict::Reject);
    }

    #[test]
    fn test_debug_logging_keeps_verdicts() {
        let mut ac = AdmissionControl::new(AccessConfig {
            allow: vec![rule("10.0.0.1")],
            deny: vec![rule("10.0.0.0/8")],
            burst_count: 1,
            debug: true,
            ..AccessConfig::default()
        });
        let now = Instant::now();

        assert_eq!(ac.decide("10.0.0.1".parse().unwrap(), now), Verdict::UnconditionalAccept);
        assert_eq!(ac.decide("10.0.0.2".parse().unwrap(), now), Verdict::Reject);
        assert_eq!(ac.decide("11.0.0.1".parse().unwrap(), now), Verdict::Accept);
        // second attempt inside the interval trips the burst flag
        assert_eq!(ac.decide("11.0.0.1".parse().unwrap(), now), Verdict::Reject);
    }

    #[test]
    fn test_slow_attempts_reset_the_count() {
        let mut ac = control(AccessOrder::DenyUnlessAllowed, &[], &[]);
        let peer: Ipv4Addr = "1.2.3.4".parse().unwrap();
        let start = Instant::now();

        for attempt in 0..50u64 {
            let now = start + Duration::from_secs(attempt * 4);
            assert_eq!(ac.decide(peer, now), Verdict::Accept);
        }
        assert!(!ac.is_flagged(peer));
    }

    #[test]
    fn test_allowed_address_survives_burst_flag() {
        let mut ac = control(AccessOrder::DenyUnlessAllowed, &["1.2.3.4"], &["all"]);
        let peer: Ipv4Addr = "1.2.3.4".parse().unwrap();
        let now = Instant::now();

        for _ in 0..10 {
            assert_eq!(ac.decide(peer, now), Verdict::UnconditionalAccept);
        }
        assert_eq!(ac.decide(peer, now), Verdict::Accept);
        assert!(ac.is_flagged(peer));
    }

    #[test]
    fn test_history_buckets_keep_addresses_apart() {
        let mut ac = control(AccessOrder::DenyUnlessAllowed, &[], &[]);
        // same low 16 bits, different addresses
        let a: Ipv4Addr = "10.0.1.2".parse().unwrap();
        let b: Ipv4Addr = "10.9.1.2".parse().unwrap();
        let now = Instant::now();

        for _ in 0..11 {
            ac.decide(a, now);
        }
        assert!(ac.is_flagged(a));
        assert!(!ac.is_flagged(b));
        assert_eq!(ac.decide(b, now), Verdict::Accept);
        assert_eq!(ac.history_len(), 2);
    }

    #[test]
    fn test_sweep_expires_records() {
        let mut ac = control(AccessOrder::DenyUnlessAllowed, &[], &[]);
        let calm: Ipv4Addr = "1.1.1.1".parse().unwrap();
        let noisy: Ipv4Addr = "2.2.2.2".parse().unwrap();
        let start = Instant::now();

        ac.decide(calm, start);
        for _ in 0..11 {
            ac.decide(noisy, start);
        }
        assert_eq!(ac.history_len(), 2);

        // past 3 * interval: only the unflagged record goes
        assert_eq!(ac.sweep(start + Duration::from_secs(10)), 2);
        assert_eq!(ac.history_len(), 1);
        assert!(ac.is_flagged(noisy));

        // past auto-reset: the flag is cleared
        assert_eq!(ac.sweep(start + Duration::from_secs(601)), 1);
        assert_eq!(ac.history_len(), 0);
        assert_eq!(ac.decide(noisy, start + Duration::from_secs(602)), Verdict::Accept);
    }
}
