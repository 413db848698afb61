//! # Account Data Fetcher
//!
//! Reads public key, network and balance from an authorized extension and
//! turns them into a [`WalletInfo`].
//!
//! Identity is mandatory: a missing or malformed key fails the fetch. The
//! network is best effort and degrades to [`StellarNetwork::Unknown`]. The
//! balance is optional and simply left out when it cannot be read.

use shared::{StellarNetwork, WalletInfo};
use tracing::{debug, warn};

use crate::binding::{ExtensionBinding, ExtensionFailure};
use crate::error::{Result, WalletError};

/// Length of a Stellar account strkey.
pub const PUBLIC_KEY_LEN: usize = 56;

/// Check that `key` is a Stellar account id (`G...`, base32, valid checksum).
///
/// Returns the trimmed key on success.
pub fn validate_public_key(key: &str) -> Result<String> {
    let key = key.trim();

    if key.is_empty() {
        return Err(WalletError::InvalidAddress(
            "extension returned an empty address".to_string(),
        ));
    }

    if key.len() != PUBLIC_KEY_LEN {
        return Err(WalletError::InvalidAddress(format!(
            "expected {} characters, got {}",
            PUBLIC_KEY_LEN,
            key.chars().count()
        )));
    }

    if !key.starts_with('G') {
        return Err(WalletError::InvalidAddress(
            "account ids start with 'G'".to_string(),
        ));
    }

    if !key.chars().all(|c| c.is_ascii_uppercase() || ('2'..='7').contains(&c)) {
        return Err(WalletError::InvalidAddress(
            "address contains characters outside the base32 alphabet".to_string(),
        ));
    }

    stellar_strkey::ed25519::PublicKey::from_string(key)
        .map_err(|_| WalletError::InvalidAddress("address checksum mismatch".to_string()))?;

    Ok(key.to_string())
}

/// Accept a decimal balance string, trimming insignificant fractional zeros.
///
/// Returns `None` for anything that is not a plain non-negative decimal.
pub fn normalize_balance(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let (whole, fraction) = match raw.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (raw, None),
    };

    let digits_only = |part: &str| part.chars().all(|c| c.is_ascii_digit());
    if whole.is_empty() || !digits_only(whole) {
        return None;
    }

    match fraction {
        None => Some(whole.to_string()),
        Some(fraction) if digits_only(fraction) => {
            let fraction = fraction.trim_end_matches('0');
            if fraction.is_empty() {
                Some(whole.to_string())
            } else {
                Some(format!("{}.{}", whole, fraction))
            }
        }
        Some(_) => None,
    }
}

/// Retrieves account data from an authorized extension binding.
#[derive(Debug, Clone)]
pub struct AccountFetcher {
    fetch_balance: bool,
}

impl Default for AccountFetcher {
    fn default() -> Self {
        Self::new(true)
    }
}

impl AccountFetcher {
    pub fn new(fetch_balance: bool) -> Self {
        Self { fetch_balance }
    }

    /// Fetch a complete [`WalletInfo`], or fail on unusable identity data.
    pub async fn fetch(&self, binding: &dyn ExtensionBinding) -> Result<WalletInfo> {
        let raw_key = binding.get_address().await.map_err(|failure| match failure {
            ExtensionFailure::Declined(msg) => WalletError::UserRejected(msg),
            other => WalletError::InvalidAddress(format!(
                "extension returned no address: {}",
                other.message()
            )),
        })?;
        let public_key = validate_public_key(&raw_key)?;

        let network = match self.read_network(binding).await {
            Ok(network) => network,
            Err(err) => {
                warn!(error = %err, "falling back to Unknown network");
                StellarNetwork::Unknown
            }
        };

        let balance = if self.fetch_balance {
            self.read_balance(binding, &public_key, network).await
        } else {
            None
        };

        debug!(network = %network, has_balance = balance.is_some(), "account data fetched");
        Ok(WalletInfo::new(public_key, network, balance))
    }

    /// Network the extension is pointed at.
    ///
    /// Fails with [`WalletError::NetworkUnreadable`] when the extension cannot
    /// say; an unrecognised answer is `Ok(StellarNetwork::Unknown)`.
    pub async fn read_network(&self, binding: &dyn ExtensionBinding) -> Result<StellarNetwork> {
        let raw = binding
            .get_network()
            .await
            .map_err(|failure| WalletError::NetworkUnreadable(failure.message().to_string()))?;

        if raw.trim().is_empty() {
            return Err(WalletError::NetworkUnreadable(
                "extension reported an empty network".to_string(),
            ));
        }

        Ok(StellarNetwork::parse(&raw))
    }

    async fn read_balance(
        &self,
        binding: &dyn ExtensionBinding,
        public_key: &str,
        network: StellarNetwork,
    ) -> Option<String> {
        match binding.get_balance(public_key, network).await {
            Ok(Some(raw)) => {
                let balance = normalize_balance(&raw);
                if balance.is_none() {
                    warn!(raw = %raw, "dropping malformed balance");
                }
                balance
            }
            Ok(None) => None,
            Err(failure) => {
                warn!(error = %failure, "balance unavailable");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::tests::{MockBinding, KEY, OTHER_KEY};

    #[test]
    fn test_validate_public_key_accepts_account_ids() {
        assert_eq!(validate_public_key(KEY).unwrap(), KEY);
        assert_eq!(validate_public_key(&format!("  {OTHER_KEY} ")).unwrap(), OTHER_KEY);
    }

    #[test]
    fn test_validate_public_key_rejections() {
        let secret_prefix = KEY.replacen('G', "S", 1);
        let lowercase = KEY.to_lowercase().replacen('g', "G", 1);
        let cases = [
            ("", "empty"),
            ("GXYZ...999", "expected 56"),
            (secret_prefix.as_str(), "start with 'G'"),
            (lowercase.as_str(), "base32"),
        ];
        for (input, expected) in cases {
            let err = validate_public_key(input).unwrap_err();
            assert_eq!(err.kind(), crate::ErrorKind::InvalidAddress);
            assert!(err.reason().contains(expected), "{input}: {err}");
        }
    }

    #[test]
    fn test_validate_public_key_checksum() {
        // Same shape as KEY with one payload character changed
        let tampered = KEY.replacen("SEJYB", "SEJYC", 1);
        let err = validate_public_key(&tampered).unwrap_err();
        assert!(err.reason().contains("checksum"));
    }

    #[test]
    fn test_normalize_balance() {
        assert_eq!(normalize_balance("100.5000000").as_deref(), Some("100.5"));
        assert_eq!(normalize_balance("100.5").as_deref(), Some("100.5"));
        assert_eq!(normalize_balance("42.0000000").as_deref(), Some("42"));
        assert_eq!(normalize_balance(" 7 ").as_deref(), Some("7"));
        assert_eq!(normalize_balance("-1"), None);
        assert_eq!(normalize_balance("1e5"), None);
        assert_eq!(normalize_balance(".5"), None);
        assert_eq!(normalize_balance(""), None);
    }

    #[tokio::test]
    async fn test_fetch_complete_account() {
        // Arrange
        let binding = MockBinding::approving("freighterApi").with_balance("100.5000000");
        let fetcher = AccountFetcher::default();

        // Act
        let info = fetcher.fetch(&*binding).await.unwrap();

        // Assert
        assert_eq!(info.public_key, KEY);
        assert_eq!(info.network, StellarNetwork::Testnet);
        assert_eq!(info.balance.as_deref(), Some("100.5"));
    }

    #[tokio::test]
    async fn test_fetch_rejects_malformed_key() {
        let binding = MockBinding::approving("freighterApi").with_address("not-a-stellar-key");

        let err = AccountFetcher::default().fetch(&*binding).await.unwrap_err();

        assert_eq!(err.kind(), crate::ErrorKind::InvalidAddress);
    }

    #[tokio::test]
    async fn test_fetch_unreadable_network_degrades() {
        let binding = MockBinding::approving("freighterApi")
            .with_network_failure("network details unavailable");
        let fetcher = AccountFetcher::default();

        let err = fetcher.read_network(&*binding).await.unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::NetworkUnreadable);

        let info = fetcher.fetch(&*binding).await.unwrap();
        assert_eq!(info.network, StellarNetwork::Unknown);
        assert_eq!(info.public_key, KEY);
    }

    #[tokio::test]
    async fn test_fetch_balance_failures_are_not_fatal() {
        let failing = MockBinding::approving("freighterApi").with_balance_failure("horizon down");
        let info = AccountFetcher::default().fetch(&*failing).await.unwrap();
        assert_eq!(info.balance, None);

        let garbage = MockBinding::approving("freighterApi").with_balance("lots");
        let info = AccountFetcher::default().fetch(&*garbage).await.unwrap();
        assert_eq!(info.balance, None);
    }

    #[tokio::test]
    async fn test_fetch_balance_disabled() {
        let binding = MockBinding::approving("freighterApi").with_balance("5");

        let info = AccountFetcher::new(false).fetch(&*binding).await.unwrap();

        assert_eq!(info.balance, None);
        assert_eq!(binding.balance_calls(), 0);
    }
}
