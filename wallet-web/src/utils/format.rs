//! # Formatting Utilities for Wallet Web
//!
//! Display strings for the wallet widgets. For key formatting, use
//! [`lib_wallet::WalletSession::format_public_key`] so the configured
//! truncation shape applies; for balances, use
//! [`lib_wallet::presentation::format_xlm_balance`].
//!
//! ## Functions
//!
//! - [`status_label`] - Human label for a connection state
//! - [`network_label`] - Network pill text, `Unknown` when unreadable
//! - [`yes_no`] - Debug panel flag

use lib_wallet::ConnectionState;
use shared::WalletInfo;

/// Human label for a connection state
///
/// # Examples
///
/// ```rust
/// use lib_wallet::ConnectionState;
/// use wallet_web::utils::format::status_label;
///
/// assert_eq!(status_label(&ConnectionState::Connecting), "Connecting...");
/// assert_eq!(status_label(&ConnectionState::Disconnected), "Not connected");
/// ```
pub fn status_label(state: &ConnectionState) -> &'static str {
    match state {
        ConnectionState::Disconnected => "Not connected",
        ConnectionState::ExtensionUnavailable(_) => "Freighter not installed",
        ConnectionState::Connecting => "Connecting...",
        ConnectionState::Connected(_) => "Connected",
        ConnectionState::Error(err) if err.is_user_rejection() => "Request declined",
        ConnectionState::Error(_) => "Connection error",
    }
}

/// Network pill text (e.g. `"TESTNET"`), `"Unknown"` when nothing is connected
pub fn network_label(info: Option<&WalletInfo>) -> String {
    info.map(|info| info.network.label().to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Format a debug flag
pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_wallet::WalletError;
    use shared::StellarNetwork;

    #[test]
    fn test_status_label() {
        let declined = ConnectionState::Error(WalletError::UserRejected("User declined access".into()));
        let failed = ConnectionState::Error(WalletError::AuthorizationFailed("locked".into()));

        assert_eq!(status_label(&declined), "Request declined");
        assert_eq!(status_label(&failed), "Connection error");
        assert_eq!(
            status_label(&ConnectionState::extension_unavailable("")),
            "Freighter not installed"
        );
    }

    #[test]
    fn test_network_label() {
        let info = WalletInfo::new(
            "GA5ZSEJYB37JRC5AVCIA5MOP4RHTM335X2KGX3IHOJAPP5RE34K4KZVN",
            StellarNetwork::Testnet,
            None,
        );
        assert_eq!(network_label(Some(&info)), "TESTNET");
        assert_eq!(network_label(None), "Unknown");
    }

    #[test]
    fn test_yes_no() {
        assert_eq!(yes_no(true), "Yes");
        assert_eq!(yes_no(false), "No");
    }
}
