//! # Shared Wallet Data Library
//!
//! Types and helpers shared by the wallet core (`lib-wallet`) and the browser
//! front end (`wallet-web`).
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::wallet`]**: Connected account identity and Stellar networks
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::format_public_key`]**: Truncated or full public key rendering
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::wallet::{StellarNetwork, WalletInfo};
//! use shared::utils::{format_public_key, KeyFormat};
//!
//! let info = WalletInfo::new(
//!     "GA5ZSEJYB37JRC5AVCIA5MOP4RHTM335X2KGX3IHOJAPP5RE34K4KZVN",
//!     StellarNetwork::parse("TESTNET"),
//!     Some("100.5".to_string()),
//! );
//!
//! assert_eq!(format_public_key(&info.public_key, KeyFormat::Truncated), "GA5Z...KZVN");
//! ```

pub mod dto;
pub mod utils;

// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
pub use utils::*;
