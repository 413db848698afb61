//! # Connect Tests
//!
//! Outcomes of a single `connect()` call.

use super::*;
use crate::error::{ErrorKind, WalletError};

#[tokio::test]
async fn test_connect_without_extension() {
    // Arrange
    let mock = MockBinding::absent("freighterApi");
    let session = session_with(&mock);
    assert!(!session.is_freighter_available());

    // Act
    let state = session.connect().await;

    // Assert
    let err = state.error().expect("missing extension is reported as a failure");
    assert_eq!(err.kind(), ErrorKind::ExtensionUnavailable);
    assert!(err.reason().contains("freighter.app"));
    assert!(matches!(state, ConnectionState::ExtensionUnavailable(_)));
    assert_eq!(session.state(), state);
    assert_eq!(session.wallet_info(), None);
    assert_eq!(mock.access_calls(), 0);
}

#[tokio::test]
async fn test_connect_success() {
    // Arrange
    let mock = MockBinding::approving("freighterApi")
        .with_network("TESTNET")
        .with_balance("100.5");
    let session = session_with(&mock);

    // Act
    let state = session.connect().await;

    // Assert
    assert!(state.is_connected());
    let info = session.wallet_info().expect("connected session has wallet info");
    assert_eq!(info.public_key, KEY);
    assert_eq!(info.network, StellarNetwork::Testnet);
    assert_eq!(info.balance.as_deref(), Some("100.5"));

    let snapshot = session.snapshot();
    assert!(snapshot.is_connected);
    assert!(!snapshot.is_connecting);
    assert_eq!(snapshot.error, None);
    assert!(snapshot.is_freighter_available);
}

#[tokio::test]
async fn test_connect_passes_through_connecting() {
    // Arrange
    let mock = MockBinding::approving("freighterApi");
    let session = session_with(&mock);
    let seen = record_states(&session);

    // Act
    session.connect().await;

    // Assert
    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0], ConnectionState::Connecting);
    assert!(seen[1].is_connected());
}

#[tokio::test]
async fn test_connect_user_rejected() {
    // Arrange
    let mock = MockBinding::approving("freighterApi").declining("The user rejected this request.");
    let session = session_with(&mock);

    // Act
    let state = session.connect().await;

    // Assert
    let err = state.error().expect("declined connect ends in Error");
    assert_eq!(err.kind(), ErrorKind::UserRejected);
    assert_ne!(err.kind(), ErrorKind::AuthorizationFailed);
    assert!(err.is_user_rejection());
    assert_eq!(session.wallet_info(), None);
    assert_eq!(mock.address_calls(), 0);
}

#[tokio::test]
async fn test_connect_authorization_failed() {
    // Arrange
    let mock = MockBinding::approving("freighterApi").failing("Freighter is locked");
    let session = session_with(&mock);

    // Act
    let state = session.connect().await;

    // Assert
    assert_eq!(
        state,
        ConnectionState::Error(WalletError::AuthorizationFailed("Freighter is locked".to_string()))
    );
    assert!(!state.error().map(WalletError::is_user_rejection).unwrap_or(true));
}

#[tokio::test]
async fn test_connect_invalid_address_blocks_connected() {
    // Arrange
    let mock = MockBinding::approving("freighterApi").with_address("GXYZ...999");
    let session = session_with(&mock);

    // Act
    let state = session.connect().await;

    // Assert
    assert!(!state.is_connected());
    assert_eq!(state.error().map(WalletError::kind), Some(ErrorKind::InvalidAddress));
    assert_eq!(mock.access_calls(), 1);
}

#[tokio::test]
async fn test_connect_unreadable_network_still_connects() {
    // Arrange
    let mock = MockBinding::approving("freighterApi").with_network_failure("no network details");
    let session = session_with(&mock);

    // Act
    let state = session.connect().await;

    // Assert
    assert_eq!(state.wallet_info().map(|info| info.network), Some(StellarNetwork::Unknown));
}

#[tokio::test]
async fn test_connect_reprobes_every_call() {
    // Arrange
    let mock = MockBinding::absent("freighterApi");
    let session = session_with(&mock);
    assert!(matches!(session.connect().await, ConnectionState::ExtensionUnavailable(_)));

    // Act: the extension finishes injecting after page load
    mock.set_present(true);
    let state = session.connect().await;

    // Assert
    assert!(state.is_connected());
}

#[tokio::test]
async fn test_connect_while_connected_does_not_prompt_again() {
    // Arrange
    let mock = MockBinding::approving("freighterApi");
    let session = session_with(&mock);
    let first = session.connect().await;

    // Act
    let second = session.connect().await;

    // Assert
    assert_eq!(first, second);
    assert_eq!(mock.access_calls(), 1);
}

#[tokio::test]
async fn test_connect_while_connected_still_probes() {
    // Arrange
    let mock = MockBinding::approving("freighterApi");
    let session = session_with(&mock);
    session.connect().await;
    let checks_before = mock.presence_checks();
    mock.set_present(false);

    // Act
    let state = session.connect().await;

    // Assert
    assert!(mock.presence_checks() > checks_before);
    assert!(state.is_connected());
    assert_eq!(mock.access_calls(), 1);
}

#[tokio::test]
async fn test_connect_uses_first_present_binding() {
    // Arrange
    let legacy = MockBinding::absent("freighterApi");
    let current = MockBinding::approving("freighter").with_address(OTHER_KEY);
    let session = WalletSession::with_bindings(bindings(&[&legacy, &current]), WalletConfig::default());

    // Act
    let state = session.connect().await;

    // Assert
    assert_eq!(state.public_key(), Some(OTHER_KEY));
    assert_eq!(legacy.access_calls(), 0);
    assert_eq!(current.access_calls(), 1);
}

#[tokio::test]
async fn test_refresh_availability_reconciles_state() {
    // Arrange
    let mock = MockBinding::absent("freighterApi");
    let session = session_with(&mock);

    // Act + Assert: absence while disconnected
    assert!(!session.refresh_availability());
    assert!(matches!(session.state(), ConnectionState::ExtensionUnavailable(_)));

    // A fresh probe that finds the extension is the only way out
    mock.set_present(true);
    assert!(session.refresh_availability());
    assert_eq!(session.state(), ConnectionState::Disconnected);

    // Never disturbs a connected session
    session.connect().await;
    mock.set_present(false);
    assert!(!session.refresh_availability());
    assert!(session.is_connected());
}

#[tokio::test]
async fn test_format_public_key_uses_config() {
    let mock = MockBinding::approving("freighterApi");
    let config = WalletConfig {
        truncate_prefix: 6,
        ..WalletConfig::default()
    };
    let session = WalletSession::with_bindings(bindings(&[&mock]), config);

    assert_eq!(
        session.format_public_key(KEY, shared::KeyFormat::Truncated),
        "GA5ZSE...KZVN"
    );
    assert_eq!(session.format_public_key(KEY, shared::KeyFormat::Full), KEY);
}

#[tokio::test]
async fn test_format_public_key_survives_oversized_shape() {
    // Arrange: built directly, so validate() never ran
    let mock = MockBinding::approving("freighterApi");
    let config = WalletConfig {
        truncate_prefix: usize::MAX,
        truncate_suffix: 0,
        ..WalletConfig::default()
    };
    let session = WalletSession::with_bindings(bindings(&[&mock]), config);

    // Act
    let formatted = session.format_public_key(KEY, shared::KeyFormat::Truncated);

    // Assert
    assert_eq!(formatted, KEY);
}
