//! # Relay Configuration
//!
//! Everything the relay needs at startup comes from the process environment.
//! `main` loads an optional `.env` file through `dotenvy` before calling
//! [`RelayConfig::from_env`], so the same variables can live in either place.
//!
//! | variable                    | default                                  |
//! |-----------------------------|------------------------------------------|
//! | `RELAY_HOST`                | `127.0.0.1`                              |
//! | `RELAY_PORT`                | `8080`                                   |
//! | `RODIN_API_BASE`            | `https://hyperhuman.deemos.com/api/v2`   |
//! | `RODIN_API_KEY`             | `vibecoding` (public demo key)           |
//! | `RELAY_TIMEOUT_SECS`        | `60`                                     |
//! | `RELAY_OPEN_BROWSER`        | `true`                                   |
//! | `RELAY_STATIC_DIR`          | unset, serve the embedded bundle         |
//! | `RELAY_PROXY_ALLOWED_HOSTS` | empty, any public host                   |
//! | `RELAY_JSON_LIMIT`          | `10485760` (10 MiB)                      |
//!
//! Invalid values abort startup with a [`ConfigError`] naming the variable.

use std::fmt::Display;
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_API_BASE: &str = "https://hyperhuman.deemos.com/api/v2";
const DEFAULT_API_KEY: &str = "vibecoding";
const DEFAULT_TIMEOUT_SECS: u64 = 60;
const DEFAULT_JSON_LIMIT: usize = 10 * 1024 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key}={value:?} is invalid: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub host: String,
    pub port: u16,
    /// Base URL of the remote generation API, without a trailing slash.
    pub api_base: String,
    pub api_key: String,
    /// Applies to every upstream call, including proxied downloads.
    pub timeout: Duration,
    pub open_browser: bool,
    /// Serve the frontend from this directory instead of the embedded copy.
    pub static_dir: Option<PathBuf>,
    /// Lowercased host names the download proxy may fetch from.
    pub proxy_allowed_hosts: Vec<String>,
    pub json_limit: usize,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            api_base: DEFAULT_API_BASE.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            open_browser: true,
            static_dir: None,
            proxy_allowed_hosts: Vec::new(),
            json_limit: DEFAULT_JSON_LIMIT,
        }
    }
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let api_base = match get("RODIN_API_BASE") {
            Some(value) => parse_base(&value)?,
            None => defaults.api_base,
        };

        Ok(Self {
            host: get("RELAY_HOST").unwrap_or(defaults.host),
            port: parse_or("RELAY_PORT", get("RELAY_PORT"), defaults.port)?,
            api_base,
            api_key: get("RODIN_API_KEY").unwrap_or(defaults.api_key),
            timeout: Duration::from_secs(parse_or(
                "RELAY_TIMEOUT_SECS",
                get("RELAY_TIMEOUT_SECS"),
                DEFAULT_TIMEOUT_SECS,
            )?),
            open_browser: match get("RELAY_OPEN_BROWSER") {
                Some(value) => parse_bool("RELAY_OPEN_BROWSER", &value)?,
                None => defaults.open_browser,
            },
            static_dir: get("RELAY_STATIC_DIR").map(PathBuf::from),
            proxy_allowed_hosts: get("RELAY_PROXY_ALLOWED_HOSTS")
                .map(|list| parse_hosts(&list))
                .unwrap_or_default(),
            json_limit: parse_or("RELAY_JSON_LIMIT", get("RELAY_JSON_LIMIT"), defaults.json_limit)?,
        })
    }

    /// Address the server listens on, as a browsable URL.
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Full upstream URL for one API route.
    pub fn endpoint(&self, route: &str) -> String {
        format!("{}/{}", self.api_base, route.trim_start_matches('/'))
    }

    /// Whether the download proxy may fetch from `host`. An empty allow-list
    /// admits every public host; otherwise exact names and their subdomains
    /// pass, internal ones included.
    pub fn allows_proxy_host(&self, host: &str) -> bool {
        let host = host.trim_start_matches('[').trim_end_matches(']').to_ascii_lowercase();
        if self.proxy_allowed_hosts.is_empty() {
            return !is_internal_host(&host);
        }
        self.proxy_allowed_hosts.iter().any(|allowed| {
            host == *allowed
                || host
                    .strip_suffix(allowed.as_str())
                    .is_some_and(|prefix| prefix.ends_with('.'))
        })
    }
}

/// `localhost` and loopback, private, link-local or unspecified IP literals.
fn is_internal_host(host: &str) -> bool {
    if host == "localhost" || host.ends_with(".localhost") {
        return true;
    }
    match host.parse::<IpAddr>() {
        Ok(IpAddr::V4(ip)) => is_internal_v4(ip),
        Ok(IpAddr::V6(ip)) => {
            let first = ip.segments()[0];
            ip.is_loopback()
                || ip.is_unspecified()
                || first & 0xfe00 == 0xfc00
                || first & 0xffc0 == 0xfe80
                || ip.to_ipv4_mapped().is_some_and(is_internal_v4)
        }
        Err(_) => false,
    }
}

fn is_internal_v4(ip: Ipv4Addr) -> bool {
    ip.is_loopback() || ip.is_private() || ip.is_link_local() || ip.is_unspecified() || ip.is_broadcast()
}

fn parse_or<T>(key: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match value {
        Some(value) => value.parse().map_err(|err: T::Err| ConfigError::Invalid {
            key,
            reason: err.to_string(),
            value,
        }),
        None => Ok(default),
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}

fn parse_base(value: &str) -> Result<String, ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid {
        key: "RODIN_API_BASE",
        value: value.to_string(),
        reason,
    };
    let url = Url::parse(value).map_err(|err| invalid(err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("only http and https are supported".to_string()));
    }
    Ok(value.trim_end_matches('/').to_string())
}

fn parse_hosts(list: &str) -> Vec<String> {
    list.split(',')
        .map(|host| host.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|host| !host.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<RelayConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        RelayConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config(&[]).unwrap();
        assert_eq!(config, RelayConfig::default());
        assert_eq!(config.url(), "http://127.0.0.1:8080");
        assert_eq!(config.endpoint("rodin"), "https://hyperhuman.deemos.com/api/v2/rodin");
    }

    #[test]
    fn reads_every_variable() {
        let config = config(&[
            ("RELAY_HOST", "0.0.0.0"),
            ("RELAY_PORT", "9000"),
            ("RODIN_API_BASE", "http://localhost:3000/api/"),
            ("RODIN_API_KEY", "secret"),
            ("RELAY_TIMEOUT_SECS", "5"),
            ("RELAY_OPEN_BROWSER", "no"),
            ("RELAY_STATIC_DIR", "frontend/dist"),
            ("RELAY_PROXY_ALLOWED_HOSTS", "CDN.example.com, ,.files.test"),
            ("RELAY_JSON_LIMIT", "1024"),
        ])
        .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.endpoint("/status"), "http://localhost:3000/api/status");
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(!config.open_browser);
        assert_eq!(config.static_dir, Some(PathBuf::from("frontend/dist")));
        assert_eq!(config.proxy_allowed_hosts, vec!["cdn.example.com", "files.test"]);
        assert_eq!(config.json_limit, 1024);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = config(&[("RELAY_PORT", "  "), ("RODIN_API_KEY", "")]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.api_key, "vibecoding");
    }

    #[test]
    fn invalid_values_name_the_variable() {
        let err = config(&[("RELAY_PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "RELAY_PORT", .. }));

        let err = config(&[("RELAY_OPEN_BROWSER", "maybe")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "RELAY_OPEN_BROWSER", .. }));

        let err = config(&[("RODIN_API_BASE", "ftp://example.com")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "RODIN_API_BASE", .. }));
    }

    #[test]
    fn proxy_allow_list_matches_hosts_and_subdomains() {
        let open = RelayConfig::default();
        assert!(open.allows_proxy_host("anything.example"));
        assert!(open.allows_proxy_host("8.8.8.8"));

        let config = config(&[("RELAY_PROXY_ALLOWED_HOSTS", "example.com")]).unwrap();
        assert!(config.allows_proxy_host("example.com"));
        assert!(config.allows_proxy_host("CDN.Example.com"));
        assert!(!config.allows_proxy_host("badexample.com"));
        assert!(!config.allows_proxy_host("example.com.evil.test"));
    }

    #[test]
    fn open_allow_list_still_refuses_internal_hosts() {
        let open = RelayConfig::default();
        for host in [
            "localhost",
            "api.localhost",
            "127.0.0.1",
            "10.1.2.3",
            "172.16.0.9",
            "192.168.1.1",
            "169.254.169.254",
            "0.0.0.0",
            "[::1]",
            "[fd00::1]",
            "[fe80::1]",
            "[::ffff:127.0.0.1]",
        ] {
            assert!(!open.allows_proxy_host(host), "{host} should be refused");
        }

        let listed = config(&[("RELAY_PROXY_ALLOWED_HOSTS", "127.0.0.1")]).unwrap();
        assert!(listed.allows_proxy_host("127.0.0.1"));
    }
}
