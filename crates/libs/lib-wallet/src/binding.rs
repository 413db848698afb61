//! # Extension Binding
//!
//! Capability interface over whatever object a signing extension injects into
//! the page. Vendors disagree on global names and call shapes, so all of that
//! shape sniffing stays behind [`ExtensionBinding`] implementations; the probe,
//! the fetcher and the session only ever see this trait.
//!
//! Implementations are `?Send`: browser handles cannot leave their thread and
//! the session itself is single threaded.

use async_trait::async_trait;
use shared::StellarNetwork;
use thiserror::Error;

/// Failure reported by an extension call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtensionFailure {
    /// The user closed or declined the prompt
    #[error("{0}")]
    Declined(String),
    /// The extension errored, is locked, or returned garbage
    #[error("{0}")]
    Failed(String),
    /// The binding does not offer this operation
    #[error("{0}")]
    Unsupported(String),
}

const DECLINE_MARKERS: &[&str] = &["reject", "declin", "denied", "deny", "cancel", "dismiss"];

impl ExtensionFailure {
    /// Classify raw vendor error text.
    ///
    /// Extensions report a decline as free text ("The user rejected this
    /// request."), so the wording is the only signal available.
    pub fn classify(message: impl Into<String>) -> Self {
        let message = message.into();
        let lowered = message.to_ascii_lowercase();
        if DECLINE_MARKERS.iter().any(|marker| lowered.contains(marker)) {
            ExtensionFailure::Declined(message)
        } else {
            ExtensionFailure::Failed(message)
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ExtensionFailure::Declined(msg)
            | ExtensionFailure::Failed(msg)
            | ExtensionFailure::Unsupported(msg) => msg,
        }
    }
}

/// Operations a signing extension must offer to back a wallet session.
#[async_trait(?Send)]
pub trait ExtensionBinding {
    /// Global name this binding was found under (e.g. `"freighterApi"`).
    fn binding_name(&self) -> &str;

    /// Synchronous presence check. Must not throw or block.
    fn is_present(&self) -> bool;

    /// Ask the user to authorize this page. May open an extension prompt.
    async fn request_access(&self) -> Result<(), ExtensionFailure>;

    /// Account id of the active extension account.
    async fn get_address(&self) -> Result<String, ExtensionFailure>;

    /// Network name or passphrase the extension is pointed at.
    async fn get_network(&self) -> Result<String, ExtensionFailure>;

    /// Native balance in XLM. Bindings without a balance source return `Ok(None)`.
    async fn get_balance(
        &self,
        _public_key: &str,
        _network: StellarNetwork,
    ) -> Result<Option<String>, ExtensionFailure> {
        Ok(None)
    }
}
