//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::generator::GeneratorConfig;

const DEFAULT_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_STATIC_DIR: &str = "static";

/// Error returned when an environment variable holds an unusable value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {var}: {message}")]
pub struct ConfigError {
    var: &'static str,
    message: String,
}

impl ConfigError {
    fn new(var: &'static str, message: impl Into<String>) -> Self {
        Self {
            var,
            message: message.into(),
        }
    }
}

/// Runtime configuration for the server binary.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (`BAHNPULSE_ADDR`).
    pub addr: SocketAddr,

    /// JSON station file replacing the built-in table (`BAHNPULSE_STATIONS`).
    pub stations_path: Option<PathBuf>,

    /// Directory served under `/static` (`BAHNPULSE_STATIC_DIR`).
    pub static_dir: PathBuf,

    /// Simulated response time window (`BAHNPULSE_LATENCY_MS`, `MIN-MAX`).
    pub latency: (Duration, Duration),

    /// Fixed RNG seed (`BAHNPULSE_SEED`).
    pub seed: Option<u64>,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary lookup function.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = GeneratorConfig::default();

        let addr_str = lookup("BAHNPULSE_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_str
            .parse()
            .map_err(|_| ConfigError::new("BAHNPULSE_ADDR", format!("not a socket address: {addr_str}")))?;

        let stations_path = lookup("BAHNPULSE_STATIONS")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let static_dir = lookup("BAHNPULSE_STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        let latency = match lookup("BAHNPULSE_LATENCY_MS") {
            Some(s) => parse_latency(&s)?,
            None => (defaults.latency_min, defaults.latency_max),
        };

        let seed = lookup("BAHNPULSE_SEED")
            .map(|s| {
                s.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::new("BAHNPULSE_SEED", format!("not an integer: {s}")))
            })
            .transpose()?;

        Ok(Self {
            addr,
            stations_path,
            static_dir,
            latency,
            seed,
        })
    }

    /// Generator settings with this configuration's latency window.
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            latency_min: self.latency.0,
            latency_max: self.latency.1,
            ..GeneratorConfig::default()
        }
    }
}

/// Parse `MIN-MAX` or a single `N` (milliseconds).
fn parse_latency(s: &str) -> Result<(Duration, Duration), ConfigError> {
    const VAR: &str = "BAHNPULSE_LATENCY_MS";

    let parse = |part: &str| {
        part.trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| ConfigError::new(VAR, format!("not a number of milliseconds: {part}")))
    };

    let (min, max) = match s.split_once('-') {
        Some((min, max)) => (parse(min)?, parse(max)?),
        None => {
            let exact = parse(s)?;
            (exact, exact)
        }
    };

    if min > max {
        return Err(ConfigError::new(VAR, format!("minimum exceeds maximum: {s}")));
    }

    Ok((min, max))
}
