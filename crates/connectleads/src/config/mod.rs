use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub listings: ListingsConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            listings: ListingsConfig::load()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
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

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Settings for the listing source gateway.
///
/// The presence of `rapidapi_key` decides whether upstream providers are
/// attempted at all; without it the gateway serves synthetic samples. The key
/// is carried here explicitly so tests can build a gateway in the
/// "credentials absent" state without touching process environment.
#[derive(Debug, Clone)]
pub struct ListingsConfig {
    pub rapidapi_key: Option<String>,
    pub attempt_timeout: Duration,
    pub default_limit: usize,
    pub max_limit: usize,
    pub include_data_analyst: bool,
}

impl ListingsConfig {
    fn load() -> Result<Self, ConfigError> {
        let rapidapi_key = env::var("RAPIDAPI_KEY")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        let attempt_timeout = match env::var("LISTINGS_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidTimeout)?;
                Duration::from_secs(secs)
            }
            Err(_) => Self::default().attempt_timeout,
        };

        let default_limit = match env::var("LISTINGS_DEFAULT_LIMIT") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|limit| *limit > 0)
                .ok_or(ConfigError::InvalidLimit)?,
            Err(_) => Self::default().default_limit,
        };

        let include_data_analyst = env::var("LISTINGS_DATA_ANALYST")
            .map(|value| {
                let value = value.trim().to_ascii_lowercase();
                value == "1" || value == "true"
            })
            .unwrap_or(Self::default().include_data_analyst);

        Ok(Self {
            rapidapi_key,
            attempt_timeout,
            default_limit,
            max_limit: Self::default().max_limit,
            include_data_analyst,
        })
    }
}

impl Default for ListingsConfig {
    fn default() -> Self {
        Self {
            rapidapi_key: None,
            attempt_timeout: Duration::from_secs(10),
            default_limit: 10,
            max_limit: 50,
            include_data_analyst: true,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidTimeout,
    InvalidLimit,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidTimeout => {
                write!(f, "LISTINGS_TIMEOUT_SECS must be a whole number of seconds")
            }
            ConfigError::InvalidLimit => {
                write!(f, "LISTINGS_DEFAULT_LIMIT must be a positive integer")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort | ConfigError::InvalidTimeout | ConfigError::InvalidLimit => {
                None
            }
        }
    }
}
