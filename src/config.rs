//! Runtime configuration
//!
//! The API server reads its settings from the environment. The client has
//! nothing to configure beyond the API origin and the poll interval.

use std::time::Duration;

use crate::shared::constants::POLL_INTERVAL;

/// Settings of the screening client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin of the API; empty means same origin
    pub base_url: String,
    pub poll_interval: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            #[cfg(target_arch = "wasm32")]
            base_url: String::new(),
            #[cfg(not(target_arch = "wasm32"))]
            base_url: format!("http://127.0.0.1:{}", crate::shared::constants::DEFAULT_PORT),
            poll_interval: POLL_INTERVAL,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use service::{ConfigError, ServiceConfig};

#[cfg(not(target_arch = "wasm32"))]
mod service {
    use std::net::{IpAddr, Ipv4Addr, SocketAddr};
    use std::time::Duration;

    use thiserror::Error;

    use crate::screening::StageSchedule;
    use crate::shared::constants::{DEFAULT_ANSWER_DELAY, DEFAULT_PING_MESSAGE, DEFAULT_PORT};

    #[derive(Debug, Error, PartialEq, Eq)]
    pub enum ConfigError {
        #[error("Invalid value for {name}: {value}")]
        InvalidValue { name: &'static str, value: String },
    }

    /// Settings of the mock screening service
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ServiceConfig {
        pub bind_addr: IpAddr,
        pub port: u16,
        pub ping_message: String,
        pub schedule: StageSchedule,
        pub answer_delay: Duration,
    }

    impl Default for ServiceConfig {
        fn default() -> Self {
            Self {
                bind_addr: IpAddr::V4(Ipv4Addr::LOCALHOST),
                port: DEFAULT_PORT,
                ping_message: DEFAULT_PING_MESSAGE.to_string(),
                schedule: StageSchedule::default(),
                answer_delay: DEFAULT_ANSWER_DELAY,
            }
        }
    }

    impl ServiceConfig {
        /// Read `BIND_ADDR`, `PORT`, `PING_MESSAGE`, `SCREENING_STAGE_DELAYS_MS`
        /// and `ANSWER_DELAY_MS`, falling back to defaults for unset variables
        pub fn from_env() -> Result<Self, ConfigError> {
            Self::from_lookup(|name| std::env::var(name).ok())
        }

        pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
            let mut config = Self::default();

            if let Some(value) = lookup("BIND_ADDR") {
                config.bind_addr = parse("BIND_ADDR", &value)?;
            }
            if let Some(value) = lookup("PORT") {
                config.port = parse("PORT", &value)?;
            }
            if let Some(value) = lookup("PING_MESSAGE") {
                config.ping_message = value;
            }
            if let Some(value) = lookup("SCREENING_STAGE_DELAYS_MS") {
                config.schedule = StageSchedule::parse_millis(&value).ok_or(
                    ConfigError::InvalidValue {
                        name: "SCREENING_STAGE_DELAYS_MS",
                        value: value.clone(),
                    },
                )?;
            }
            if let Some(value) = lookup("ANSWER_DELAY_MS") {
                config.answer_delay = Duration::from_millis(parse("ANSWER_DELAY_MS", &value)?);
            }

            Ok(config)
        }

        pub fn socket_addr(&self) -> SocketAddr {
            SocketAddr::new(self.bind_addr, self.port)
        }
    }

    fn parse<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
        value.trim().parse().map_err(|_| ConfigError::InvalidValue {
            name,
            value: value.to_string(),
        })
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::collections::HashMap;

        fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
            let vars: HashMap<String, String> = vars
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            move |name| vars.get(name).cloned()
        }

        #[test]
        fn test_defaults() {
            let config = ServiceConfig::from_lookup(lookup(&[])).unwrap();
            assert_eq!(config, ServiceConfig::default());
            assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3001");
            assert_eq!(config.ping_message, "ping");
        }

        #[test]
        fn test_overrides() {
            let config = ServiceConfig::from_lookup(lookup(&[
                ("PORT", "8080"),
                ("PING_MESSAGE", "pong"),
                ("SCREENING_STAGE_DELAYS_MS", "10, 20,30,40"),
                ("ANSWER_DELAY_MS", "0"),
            ]))
            .unwrap();

            assert_eq!(config.port, 8080);
            assert_eq!(config.ping_message, "pong");
            assert_eq!(config.schedule.total(), Duration::from_millis(100));
            assert_eq!(config.answer_delay, Duration::ZERO);
        }

        #[test]
        fn test_invalid_values() {
            let err = ServiceConfig::from_lookup(lookup(&[("PORT", "not-a-port")])).unwrap_err();
            assert_eq!(
                err,
                ConfigError::InvalidValue {
                    name: "PORT",
                    value: "not-a-port".into()
                }
            );

            assert!(ServiceConfig::from_lookup(lookup(&[("SCREENING_STAGE_DELAYS_MS", "1,2")])).is_err());
        }
    }
}
