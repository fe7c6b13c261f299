use std::env;
use std::net::SocketAddr;

use crate::error::ConfigError;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3001";

/// Literal older deployments fell back to when `JWT_SECRET` was unset.
const LEGACY_DEFAULT_SECRET: &str = "my-secret-key";

/// HS256 keys shorter than the hash output are accepted but weak.
const RECOMMENDED_SECRET_LEN: usize = 32;

pub struct Config {
    pub jwt_secret: String,
    pub listen_addr: SocketAddr,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("jwt_secret", &"[hidden]")
            .field("listen_addr", &self.listen_addr)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let jwt_secret = lookup("JWT_SECRET").ok_or(ConfigError::MissingSecret)?;

        if jwt_secret.trim().is_empty() {
            return Err(ConfigError::EmptySecret);
        }
        if jwt_secret == LEGACY_DEFAULT_SECRET {
            return Err(ConfigError::InsecureSecret(LEGACY_DEFAULT_SECRET));
        }
        if jwt_secret.len() < RECOMMENDED_SECRET_LEN {
            tracing::warn!(
                len = jwt_secret.len(),
                "JWT_SECRET is shorter than {RECOMMENDED_SECRET_LEN} bytes"
            );
        }

        let raw_addr = lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = raw_addr
            .parse()
            .map_err(|source| ConfigError::InvalidListenAddr {
                value: raw_addr.clone(),
                source,
            })?;

        Ok(Config {
            jwt_secret,
            listen_addr,
        })
    }
}
