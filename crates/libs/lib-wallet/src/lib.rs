//! # Wallet Library
//!
//! Browser-extension wallet connection manager: extension detection, the
//! connection state machine, account data retrieval and the error taxonomy.
//!
//! The library never touches the browser itself. Hosts hand it
//! [`ExtensionBinding`] implementations (the wasm front end wraps the injected
//! Freighter object; tests use a scripted mock) and drive
//! [`WalletSession::connect`] on their own single-threaded executor.

pub mod binding;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod presentation;
pub mod probe;
pub mod session;

// Re-export commonly used types
pub use binding::{ExtensionBinding, ExtensionFailure};
pub use config::WalletConfig;
pub use error::{ErrorKind, Result, WalletError};
pub use fetcher::AccountFetcher;
pub use presentation::{CopyFeedback, CopyToken};
pub use probe::{BindingStatus, ExtensionProbe};
pub use session::{ConnectionState, SubscriptionId, WalletSession, WalletSnapshot};
pub use shared::{KeyFormat, StellarNetwork, WalletInfo};
