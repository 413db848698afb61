//! # Shared Utility Functions
//!
//! Address formatting used by the wallet core and the web widgets.
//!
//! ## Address Formatting
//!
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - Alias for `format_address` with default parameters
//! - [`format_public_key`] - Render a public key for a display context ([`KeyFormat`])
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_public_key, KeyFormat};
//!
//! let key = "GA5ZSEJYB37JRC5AVCIA5MOP4RHTM335X2KGX3IHOJAPP5RE34K4KZVN";
//! assert_eq!(format_public_key(key, KeyFormat::Truncated), "GA5Z...KZVN");
//! assert_eq!(format_public_key(key, KeyFormat::Full), key);
//! ```

use serde::{Deserialize, Serialize};

pub const DEFAULT_PREFIX_LEN: usize = 4;
pub const DEFAULT_SUFFIX_LEN: usize = 4;

/// Length of a Stellar account strkey (`G...`).
pub const PUBLIC_KEY_LEN: usize = 56;

/// Shown instead of a key when there is nothing to format.
pub const MISSING_KEY_PLACEHOLDER: &str = "(no key)";

const ELLIPSIS: &str = "...";

/// Display context for a public key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeyFormat {
    /// Prefix...suffix form for compact contexts such as the header badge
    #[default]
    Truncated,
    /// The key exactly as given
    Full,
}

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is not longer than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "GA5ZSEJYB37JRC5AVCIA5MOP4RHTM335X2KGX3IHOJAPP5RE34K4KZVN";
/// assert_eq!(format_address(addr, 4, 4), "GA5Z...KZVN");
/// assert_eq!(format_address(addr, 6, 6), "GA5ZSE...K4KZVN");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let char_count = address.chars().count();

    if char_count <= prefix_len.saturating_add(suffix_len) {
        return address.to_string();
    }

    // Count in chars so a stray multi-byte character can never split a slice
    let prefix: String = address.chars().take(prefix_len).collect();
    let suffix: String = address.chars().skip(char_count - suffix_len).collect();

    format!("{}{}{}", prefix, ELLIPSIS, suffix)
}

/// Format a wallet address with default 4-character prefix and suffix.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "GA5ZSEJYB37JRC5AVCIA5MOP4RHTM335X2KGX3IHOJAPP5RE34K4KZVN";
/// assert_eq!(truncate_address(addr), "GA5Z...KZVN");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, DEFAULT_PREFIX_LEN, DEFAULT_SUFFIX_LEN)
}

/// Render a public key for display with the default truncation shape.
///
/// Pure and total: blank input yields [`MISSING_KEY_PLACEHOLDER`], input too
/// short to shorten comes back unchanged. Meant for full keys only; feeding a
/// truncated key back in is not guaranteed to be stable.
pub fn format_public_key(key: &str, mode: KeyFormat) -> String {
    format_public_key_with(key, mode, DEFAULT_PREFIX_LEN, DEFAULT_SUFFIX_LEN)
}

/// [`format_public_key`] with an explicit truncation shape.
pub fn format_public_key_with(
    key: &str,
    mode: KeyFormat,
    prefix_len: usize,
    suffix_len: usize,
) -> String {
    let key = key.trim();
    if key.is_empty() {
        return MISSING_KEY_PLACEHOLDER.to_string();
    }

    match mode {
        KeyFormat::Full => key.to_string(),
        KeyFormat::Truncated => {
            // Truncating must actually shorten the key, otherwise show it whole
            let shortest = prefix_len.saturating_add(suffix_len).saturating_add(ELLIPSIS.len());
            if key.chars().count() <= shortest {
                key.to_string()
            } else {
                format_address(key, prefix_len, suffix_len)
            }
        }
    }
}
