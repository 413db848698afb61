//! # Wallet Configuration
//!
//! Knobs for extension discovery and the wallet widgets.
//!
//! Defaults are usable as-is. Native tools and tests may override them through
//! `STELLARFORGE_WALLET_*` environment variables ([`WalletConfig::from_env`]);
//! the browser build can hand over a JSON object instead ([`WalletConfig::from_json`]).

use serde::Deserialize;
use std::env;

pub const DEFAULT_INSTALL_URL: &str = "https://freighter.app/";
pub const DEFAULT_COPY_ACK_MS: u32 = 2000;

/// Global names Freighter has been seen under, in probe order.
pub const DEFAULT_BINDING_NAMES: &[&str] = &["freighterApi", "freighter"];

/// Wallet configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WalletConfig {
    /// Page-global names probed for the extension binding
    pub binding_names: Vec<String>,
    /// Where the install prompt sends the user
    pub install_url: String,
    /// Characters kept at the start of a truncated key
    pub truncate_prefix: usize,
    /// Characters kept at the end of a truncated key
    pub truncate_suffix: usize,
    /// Lifetime of the "copied" acknowledgement in milliseconds
    pub copy_ack_ms: u32,
    /// Interval between startup re-probes in milliseconds
    pub probe_retry_ms: u32,
    /// Startup re-probes before giving up on late injection
    pub probe_max_attempts: u32,
    /// Ask for the native balance after connecting
    pub fetch_balance: bool,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            binding_names: DEFAULT_BINDING_NAMES.iter().map(|name| name.to_string()).collect(),
            install_url: DEFAULT_INSTALL_URL.to_string(),
            truncate_prefix: shared::DEFAULT_PREFIX_LEN,
            truncate_suffix: shared::DEFAULT_SUFFIX_LEN,
            copy_ack_ms: DEFAULT_COPY_ACK_MS,
            probe_retry_ms: 500,
            probe_max_attempts: 10,
            fetch_balance: true,
        }
    }
}

impl WalletConfig {
    /// Load configuration, overlaying environment variables on the defaults.
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let binding_names = env::var("STELLARFORGE_WALLET_BINDINGS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or(defaults.binding_names);

        let install_url = env::var("STELLARFORGE_WALLET_INSTALL_URL")
            .unwrap_or(defaults.install_url);

        let config = Self {
            binding_names,
            install_url,
            truncate_prefix: parse_var("STELLARFORGE_WALLET_TRUNCATE_PREFIX", defaults.truncate_prefix)?,
            truncate_suffix: parse_var("STELLARFORGE_WALLET_TRUNCATE_SUFFIX", defaults.truncate_suffix)?,
            copy_ack_ms: parse_var("STELLARFORGE_WALLET_COPY_ACK_MS", defaults.copy_ack_ms)?,
            probe_retry_ms: parse_var("STELLARFORGE_WALLET_PROBE_RETRY_MS", defaults.probe_retry_ms)?,
            probe_max_attempts: parse_var("STELLARFORGE_WALLET_PROBE_ATTEMPTS", defaults.probe_max_attempts)?,
            fetch_balance: env::var("STELLARFORGE_WALLET_FETCH_BALANCE")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(defaults.fetch_balance),
        };

        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON override; missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, String> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|e| format!("Invalid wallet config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.binding_names.is_empty() {
            return Err("At least one extension binding name is required".to_string());
        }

        if self.install_url.trim().is_empty() {
            return Err("install_url must not be empty".to_string());
        }

        let max_part = shared::PUBLIC_KEY_LEN / 2;
        if !(1..=max_part).contains(&self.truncate_prefix) {
            return Err(format!("truncate_prefix must be between 1 and {}", max_part));
        }

        if !(1..=max_part).contains(&self.truncate_suffix) {
            return Err(format!("truncate_suffix must be between 1 and {}", max_part));
        }

        if self.copy_ack_ms == 0 {
            return Err("copy_ack_ms must be greater than 0".to_string());
        }

        if self.probe_retry_ms == 0 {
            return Err("probe_retry_ms must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Message recorded when no extension is found.
    pub fn install_message(&self) -> String {
        format!(
            "Freighter not detected. Install it from {} and refresh the page.",
            self.install_url
        )
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, default: T) -> Result<T, String>
where
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| format!("{} must be a valid number: {}", key, e)),
        Err(_) => Ok(default),
    }
}
