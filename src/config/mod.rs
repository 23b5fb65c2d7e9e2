use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// Where the stub is running. Only affects startup logging and defaults;
/// the decision engine behaves identically everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StubEnvironment {
    Development,
    Ci,
    Production,
}

impl StubEnvironment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "ci" | "test" => Self::Ci,
            _ => Self::Development,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Ci => "ci",
            Self::Production => "production",
        }
    }
}

/// Runtime configuration, read from the environment once at startup. The
/// engine itself is configuration-free; only the listener and the log
/// filter are tunable.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: StubEnvironment,
    pub server: ServerConfig,
    pub log_filter: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment =
            StubEnvironment::parse(&env::var("STUB_ENV").unwrap_or_default());

        let server = ServerConfig {
            host: env::var("STUB_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: match env::var("STUB_PORT") {
                Ok(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort)?,
                Err(_) => 8110,
            },
        };

        let log_filter = env::var("STUB_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server,
            log_filter,
        })
    }
}

/// Listener settings for the HTTP adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "STUB_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "STUB_HOST must parse to an IPv4 or IPv6 address")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
