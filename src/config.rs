// src/config.rs
use crate::domain::currency;
use std::env;
use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Process-wide settings, read once at startup.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    /// Digits only, as used in `https://wa.me/{number}`.
    pub whatsapp_number: String,
    pub contact_phone: String,
    /// Currency used when a request does not pick one.
    pub default_currency: &'static str,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            whatsapp_number: "1234567890".to_string(),
            contact_phone: "+971 4 123 4567".to_string(),
            default_currency: "USD",
        }
    }
}

impl SiteConfig {
    /// Build the config from `KINGDOM_*` environment variables,
    /// falling back to the defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("KINGDOM_HOST").unwrap_or_else(|| defaults.bind_addr.ip().to_string());
        let port = match lookup("KINGDOM_PORT") {
            Some(raw) => parse_var("KINGDOM_PORT", &raw)?,
            None => defaults.bind_addr.port(),
        };
        let bind_addr = format!("{host}:{port}")
            .parse()
            .map_err(|_| ConfigError::Invalid {
                var: "KINGDOM_HOST",
                value: host.clone(),
            })?;

        let max_workers = match lookup("KINGDOM_WORKERS") {
            Some(raw) => {
                let n: usize = parse_var("KINGDOM_WORKERS", &raw)?;
                if n == 0 {
                    return Err(ConfigError::Invalid {
                        var: "KINGDOM_WORKERS",
                        value: raw,
                    });
                }
                n
            }
            None => defaults.max_workers,
        };

        let whatsapp_number = match lookup("KINGDOM_WHATSAPP") {
            Some(raw) if !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit()) => raw,
            Some(raw) => {
                return Err(ConfigError::Invalid {
                    var: "KINGDOM_WHATSAPP",
                    value: raw,
                })
            }
            None => defaults.whatsapp_number,
        };

        let default_currency = match lookup("KINGDOM_DEFAULT_CURRENCY") {
            Some(raw) => currency::find(&raw)
                .map(|c| c.code)
                .ok_or(ConfigError::Invalid {
                    var: "KINGDOM_DEFAULT_CURRENCY",
                    value: raw,
                })?,
            None => defaults.default_currency,
        };

        Ok(Self {
            bind_addr,
            max_workers,
            whatsapp_number,
            contact_phone: lookup("KINGDOM_CONTACT_PHONE").unwrap_or(defaults.contact_phone),
            default_currency,
        })
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        value: raw.to_string(),
    })
}
