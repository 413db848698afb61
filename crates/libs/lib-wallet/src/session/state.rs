//! Connection state published by the wallet session.

use shared::WalletInfo;

use crate::error::WalletError;

/// Wallet connection state. Exactly one is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    /// No extension on the page; always a [`WalletError::ExtensionUnavailable`]
    /// carrying the install message
    ExtensionUnavailable(WalletError),
    /// Authorization or account fetch in progress
    Connecting,
    Connected(WalletInfo),
    Error(WalletError),
}

impl ConnectionState {
    /// `ExtensionUnavailable` with `install_message` as its reason.
    pub fn extension_unavailable(install_message: impl Into<String>) -> Self {
        ConnectionState::ExtensionUnavailable(WalletError::ExtensionUnavailable(
            install_message.into(),
        ))
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected(_))
    }

    pub fn is_connecting(&self) -> bool {
        matches!(self, ConnectionState::Connecting)
    }

    pub fn wallet_info(&self) -> Option<&WalletInfo> {
        match self {
            ConnectionState::Connected(info) => Some(info),
            _ => None,
        }
    }

    pub fn public_key(&self) -> Option<&str> {
        self.wallet_info().map(|info| info.public_key.as_str())
    }

    /// The failure behind an `Error` or `ExtensionUnavailable` state.
    pub fn error(&self) -> Option<&WalletError> {
        match self {
            ConnectionState::ExtensionUnavailable(err) | ConnectionState::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Inline message for the UI, if the state has one.
    pub fn message(&self) -> Option<String> {
        match self {
            ConnectionState::ExtensionUnavailable(err) => Some(err.reason().to_string()),
            ConnectionState::Error(err) => Some(err.to_string()),
            _ => None,
        }
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            ConnectionState::Disconnected => "disconnected",
            ConnectionState::ExtensionUnavailable(_) => "extension_unavailable",
            ConnectionState::Connecting => "connecting",
            ConnectionState::Connected(_) => "connected",
            ConnectionState::Error(_) => "error",
        }
    }
}

/// Read-only view of the session in the shape widgets consume.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WalletSnapshot {
    pub wallet_info: Option<WalletInfo>,
    pub is_connected: bool,
    pub is_connecting: bool,
    pub error: Option<String>,
    pub is_freighter_available: bool,
}

impl WalletSnapshot {
    pub fn new(state: &ConnectionState, is_freighter_available: bool) -> Self {
        Self {
            wallet_info: state.wallet_info().cloned(),
            is_connected: state.is_connected(),
            is_connecting: state.is_connecting(),
            error: state.message(),
            is_freighter_available,
        }
    }
}
