//! # Wallet DTOs
//!
//! Identity data published by the wallet session and read by every widget
//! that shows who is connected (header badge, dropdown, status page).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Network passphrases as reported by Stellar tooling.
pub const PUBLIC_PASSPHRASE: &str = "Public Global Stellar Network ; September 2015";
pub const TESTNET_PASSPHRASE: &str = "Test SDF Network ; September 2015";
pub const FUTURENET_PASSPHRASE: &str = "Test SDF Future Network ; October 2022";
pub const STANDALONE_PASSPHRASE: &str = "Standalone Network ; February 2017";

const HORIZON_URL: &str = "https://horizon.stellar.org";
const HORIZON_TESTNET_URL: &str = "https://horizon-testnet.stellar.org";
const HORIZON_FUTURENET_URL: &str = "https://horizon-futurenet.stellar.org";

/// Logical Stellar network the signing extension is pointed at.
///
/// Anything the extension reports that is not one of the known networks
/// collapses to [`StellarNetwork::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum StellarNetwork {
    Public,
    Testnet,
    Futurenet,
    Standalone,
    #[default]
    #[serde(rename = "Unknown")]
    Unknown,
}

impl StellarNetwork {
    /// Parse a network name such as `"PUBLIC"` or `"testnet"`.
    ///
    /// Also accepts full network passphrases, since some extension versions
    /// only report the passphrase.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        match trimmed.to_ascii_uppercase().as_str() {
            "PUBLIC" | "MAINNET" => return StellarNetwork::Public,
            "TESTNET" => return StellarNetwork::Testnet,
            "FUTURENET" => return StellarNetwork::Futurenet,
            "STANDALONE" => return StellarNetwork::Standalone,
            _ => {}
        }
        Self::from_passphrase(trimmed)
    }

    pub fn from_passphrase(passphrase: &str) -> Self {
        match passphrase {
            PUBLIC_PASSPHRASE => StellarNetwork::Public,
            TESTNET_PASSPHRASE => StellarNetwork::Testnet,
            FUTURENET_PASSPHRASE => StellarNetwork::Futurenet,
            STANDALONE_PASSPHRASE => StellarNetwork::Standalone,
            _ => StellarNetwork::Unknown,
        }
    }

    /// Display label, matching what the extension itself shows.
    pub fn label(&self) -> &'static str {
        match self {
            StellarNetwork::Public => "PUBLIC",
            StellarNetwork::Testnet => "TESTNET",
            StellarNetwork::Futurenet => "FUTURENET",
            StellarNetwork::Standalone => "STANDALONE",
            StellarNetwork::Unknown => "Unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, StellarNetwork::Unknown)
    }

    pub fn is_production(&self) -> bool {
        matches!(self, StellarNetwork::Public)
    }

    /// Public Horizon endpoint for the network, if SDF runs one.
    pub fn horizon_url(&self) -> Option<&'static str> {
        match self {
            StellarNetwork::Public => Some(HORIZON_URL),
            StellarNetwork::Testnet => Some(HORIZON_TESTNET_URL),
            StellarNetwork::Futurenet => Some(HORIZON_FUTURENET_URL),
            StellarNetwork::Standalone | StellarNetwork::Unknown => None,
        }
    }
}

impl fmt::Display for StellarNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Snapshot of the connected account.
///
/// Replaced wholesale on every successful fetch; never patched field by field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletInfo {
    /// Stellar account id (`G...`), already validated by the fetcher
    pub public_key: String,
    pub network: StellarNetwork,
    /// Native balance in XLM as a decimal string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<String>,
}

impl WalletInfo {
    pub fn new(public_key: impl Into<String>, network: StellarNetwork, balance: Option<String>) -> Self {
        Self {
            public_key: public_key.into(),
            network,
            balance,
        }
    }

    /// Warning shown when the extension points at a known test network.
    pub fn network_warning(&self) -> Option<String> {
        if self.network.is_known() && !self.network.is_production() {
            Some(format!("You're connected to {} network", self.network.label()))
        } else {
            None
        }
    }
}
