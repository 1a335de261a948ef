//! Server configuration read from the environment.

use std::net::SocketAddr;

use drafter_draft::domain::aggregates::TurnPolicy;

use crate::error::AppError;

/// Port the service listens on when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 8088;

/// Runtime configuration for the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind (`HOST`).
    pub host: String,
    /// Port to bind (`PORT`).
    pub port: u16,
    /// Whether pick requests must come from the current drafter
    /// (`DRAFTER_ENFORCE_TURN`).
    pub turn_policy: TurnPolicy,
}

impl ServerConfig {
    /// Reads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to its
    /// value if set.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => DEFAULT_PORT,
        };

        let turn_policy = match lookup("DRAFTER_ENFORCE_TURN").as_deref() {
            None | Some("" | "0" | "false") => TurnPolicy::Open,
            Some("1" | "true") => TurnPolicy::Enforced,
            Some(other) => {
                return Err(AppError::Config(format!(
                    "DRAFTER_ENFORCE_TURN must be true/false/1/0, got '{other}'"
                )));
            }
        };

        Ok(Self {
            host,
            port,
            turn_policy,
        })
    }

    /// The address to bind.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `host:port` is not a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }
}
