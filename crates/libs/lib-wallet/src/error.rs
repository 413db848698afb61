//! # Wallet Error Taxonomy
//!
//! Every failure the wallet session can end up in. None of them is fatal:
//! each one is stored in the session state and cleared by `disconnect()`
//! followed by a fresh `connect()`.
//!
//! ## Error Categories
//!
//! | Variant | Expected? | Blocks `Connected`? |
//! |---|---|---|
//! | [`ExtensionUnavailable`](WalletError::ExtensionUnavailable) | yes | yes |
//! | [`UserRejected`](WalletError::UserRejected) | yes | yes |
//! | [`AuthorizationFailed`](WalletError::AuthorizationFailed) | no | yes |
//! | [`InvalidAddress`](WalletError::InvalidAddress) | no | yes |
//! | [`NetworkUnreadable`](WalletError::NetworkUnreadable) | no | no, degrades to `Unknown` |

use thiserror::Error;

/// Convenience type alias for `Result<T, WalletError>`.
pub type Result<T> = std::result::Result<T, WalletError>;

/// Wallet session failure with a human readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// No compatible signing extension was found on the page.
    #[error("Wallet extension not available: {0}")]
    ExtensionUnavailable(String),

    /// The user dismissed or declined the extension prompt.
    #[error("Connection request declined: {0}")]
    UserRejected(String),

    /// The extension failed for a reason other than the user declining.
    #[error("Wallet authorization failed: {0}")]
    AuthorizationFailed(String),

    /// The extension returned something that is not a Stellar account id.
    #[error("Invalid wallet address: {0}")]
    InvalidAddress(String),

    /// The extension could not report its network.
    ///
    /// The fetcher downgrades this to [`shared::StellarNetwork::Unknown`];
    /// it only surfaces when a caller asks for the network directly.
    #[error("Network unreadable: {0}")]
    NetworkUnreadable(String),
}

/// Fieldless category of a [`WalletError`], for matching without the reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ExtensionUnavailable,
    UserRejected,
    AuthorizationFailed,
    InvalidAddress,
    NetworkUnreadable,
}

impl WalletError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WalletError::ExtensionUnavailable(_) => ErrorKind::ExtensionUnavailable,
            WalletError::UserRejected(_) => ErrorKind::UserRejected,
            WalletError::AuthorizationFailed(_) => ErrorKind::AuthorizationFailed,
            WalletError::InvalidAddress(_) => ErrorKind::InvalidAddress,
            WalletError::NetworkUnreadable(_) => ErrorKind::NetworkUnreadable,
        }
    }

    /// The reason without the category prefix.
    pub fn reason(&self) -> &str {
        match self {
            WalletError::ExtensionUnavailable(reason)
            | WalletError::UserRejected(reason)
            | WalletError::AuthorizationFailed(reason)
            | WalletError::InvalidAddress(reason)
            | WalletError::NetworkUnreadable(reason) => reason,
        }
    }

    /// A decline is an expected outcome and should not be rendered as a bug.
    pub fn is_user_rejection(&self) -> bool {
        matches!(self, WalletError::UserRejected(_))
    }
}
