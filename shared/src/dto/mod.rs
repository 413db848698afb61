//! # Data Transfer Objects (DTOs)
//!
//! Data structures passed between the wallet core and the widgets that render it.
//!
//! ## Module Organization
//!
//! - [`wallet`] - Connected account identity, Stellar network enumeration
//!
//! ## Serialization Format
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Networks**: Serialize to the upper case names the extension reports (`"PUBLIC"`, `"TESTNET"`)
//!
//! ## Example JSON
//!
//! ```text
//! {
//!   "public_key": "GA5ZSEJYB37JRC5AVCIA5MOP4RHTM335X2KGX3IHOJAPP5RE34K4KZVN",
//!   "network": "TESTNET",
//!   "balance": "100.5"
//! }
//! ```

pub mod wallet;

pub use wallet::*;
