//! # Wallet Session
//!
//! Owns the [`ConnectionState`] and is the only thing that mutates it. Widgets
//! read snapshots and subscribe to transitions; the only commands are
//! [`WalletSession::connect`] and [`WalletSession::disconnect`].
//!
//! ## Lifecycle
//!
//! ```text
//!                 connect (no extension)
//! Disconnected ─────────────────────────────▶ ExtensionUnavailable
//!      │  ▲                                        │  fresh probe finds it
//!      │  └────────────────────────────────────────┘
//!      │ connect
//!      ▼
//!  Connecting ──approve + fetch ok──▶ Connected(WalletInfo)
//!      │
//!      └──declined / failed / bad key──▶ Error(WalletError)
//!
//! disconnect() from anywhere ──▶ Disconnected
//! ```
//!
//! ## Concurrency
//!
//! Single threaded and cooperative. The session suspends at two points only:
//! the extension authorization prompt and the account fetch. Every `connect()`
//! bumps an attempt id; `disconnect()` bumps it again. An attempt that resolves
//! after its id stopped being current is counted as stale and never published,
//! which is how an extension prompt that cannot be aborted is "cancelled".
//!
//! A `connect()` issued while an attempt is in flight joins that attempt
//! instead of opening a second prompt.
//!
//! The in-flight attempt only advances while some caller is awaiting a
//! `connect()` future, so hosts should drive it on their executor
//! (`spawn_local` in the browser).

mod state;

#[cfg(test)]
pub(crate) mod tests;

pub use state::{ConnectionState, WalletSnapshot};

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use futures::future::{FutureExt, LocalBoxFuture, Shared};
use shared::utils::{format_public_key_with, KeyFormat};
use tracing::{debug, info, warn};

use crate::binding::{ExtensionBinding, ExtensionFailure};
use crate::config::WalletConfig;
use crate::error::WalletError;
use crate::fetcher::AccountFetcher;
use crate::probe::{BindingStatus, ExtensionProbe};

/// Handle returned by [`WalletSession::subscribe`].
pub type SubscriptionId = u64;

type Listener = Rc<dyn Fn(&ConnectionState)>;
type InFlight = Shared<LocalBoxFuture<'static, ConnectionState>>;

struct Inner {
    state: RefCell<ConnectionState>,
    /// Id of the attempt allowed to publish; bumped by connect and disconnect
    attempt: Cell<u64>,
    in_flight: RefCell<Option<InFlight>>,
    /// Bumped on every published transition
    epoch: Cell<u64>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_subscription: Cell<SubscriptionId>,
    stale_results: Cell<u64>,
    probe: ExtensionProbe,
    fetcher: AccountFetcher,
    config: WalletConfig,
}

/// Cheaply cloneable handle to one page-wide wallet session.
#[derive(Clone)]
pub struct WalletSession {
    inner: Rc<Inner>,
}

impl WalletSession {
    pub fn new(probe: ExtensionProbe, config: WalletConfig) -> Self {
        let fetcher = AccountFetcher::new(config.fetch_balance);
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(ConnectionState::Disconnected),
                attempt: Cell::new(0),
                in_flight: RefCell::new(None),
                epoch: Cell::new(0),
                listeners: RefCell::new(Vec::new()),
                next_subscription: Cell::new(1),
                stale_results: Cell::new(0),
                probe,
                fetcher,
                config,
            }),
        }
    }

    /// Build a session over an ordered list of candidate bindings.
    pub fn with_bindings(bindings: Vec<Rc<dyn ExtensionBinding>>, config: WalletConfig) -> Self {
        Self::new(ExtensionProbe::new(bindings), config)
    }

    pub fn state(&self) -> ConnectionState {
        self.inner.state.borrow().clone()
    }

    pub fn snapshot(&self) -> WalletSnapshot {
        WalletSnapshot::new(&self.inner.state.borrow(), self.is_freighter_available())
    }

    pub fn wallet_info(&self) -> Option<shared::WalletInfo> {
        self.inner.state.borrow().wallet_info().cloned()
    }

    pub fn is_connected(&self) -> bool {
        self.inner.state.borrow().is_connected()
    }

    pub fn is_connecting(&self) -> bool {
        self.inner.state.borrow().is_connecting()
    }

    pub fn error(&self) -> Option<String> {
        self.inner.state.borrow().message()
    }

    /// Live probe; never cached because injection can land at any time.
    pub fn is_freighter_available(&self) -> bool {
        self.inner.probe.is_available()
    }

    pub fn probe_report(&self) -> Vec<BindingStatus> {
        self.inner.probe.report()
    }

    pub fn config(&self) -> &WalletConfig {
        &self.inner.config
    }

    /// Id of the attempt currently allowed to publish.
    pub fn attempt_id(&self) -> u64 {
        self.inner.attempt.get()
    }

    /// Attempts that resolved after being superseded.
    pub fn stale_results(&self) -> u64 {
        self.inner.stale_results.get()
    }

    /// Format a key with this session's configured truncation shape.
    pub fn format_public_key(&self, key: &str, mode: KeyFormat) -> String {
        format_public_key_with(
            key,
            mode,
            self.inner.config.truncate_prefix,
            self.inner.config.truncate_suffix,
        )
    }

    /// Re-probe for the extension and reconcile the availability state.
    ///
    /// Absence moves `Disconnected` and `Error` to `ExtensionUnavailable`;
    /// presence moves `ExtensionUnavailable` back to `Disconnected`. A session
    /// that is connecting or connected is left alone.
    pub fn refresh_availability(&self) -> bool {
        let available = self.inner.probe.is_available();
        let next = match (&*self.inner.state.borrow(), available) {
            (ConnectionState::ExtensionUnavailable(_), true) => Some(ConnectionState::Disconnected),
            (ConnectionState::Disconnected | ConnectionState::Error(_), false) => Some(
                ConnectionState::extension_unavailable(self.inner.config.install_message()),
            ),
            _ => None,
        };

        if let Some(next) = next {
            self.transition(next);
        }
        available
    }

    /// Connect to the extension and publish the outcome.
    ///
    /// Never fails: the outcome, including every error, is the returned state.
    /// Joins the in-flight attempt if there is one. Every other call probes
    /// the page first; an already connected session is then returned as-is
    /// without prompting again, whatever the probe saw.
    pub async fn connect(&self) -> ConnectionState {
        let pending = self.inner.in_flight.borrow().clone();
        if let Some(pending) = pending {
            debug!(attempt = self.attempt_id(), "connect already in flight, joining it");
            return pending.await;
        }

        if self.is_connected() {
            let available = self.inner.probe.is_available();
            debug!(available, "connect on a connected session, keeping the current wallet");
            return self.state();
        }

        let Some(binding) = self.inner.probe.detect() else {
            info!("connect requested but no wallet extension is installed");
            self.transition(ConnectionState::extension_unavailable(
                self.inner.config.install_message(),
            ));
            return self.state();
        };

        let attempt = self.inner.attempt.get() + 1;
        self.inner.attempt.set(attempt);
        info!(attempt, binding = binding.binding_name(), "connecting to wallet extension");

        let attempt_future = run_attempt(
            Rc::downgrade(&self.inner),
            binding,
            self.inner.fetcher.clone(),
            attempt,
        )
        .boxed_local()
        .shared();

        // Registered before publishing Connecting so a listener that calls
        // connect() joins this attempt
        *self.inner.in_flight.borrow_mut() = Some(attempt_future.clone());
        self.transition(ConnectionState::Connecting);

        attempt_future.await
    }

    /// Clear the wallet and return to `Disconnected` from any state.
    ///
    /// Supersedes any in-flight attempt; its eventual result is discarded.
    pub fn disconnect(&self) {
        self.inner.attempt.set(self.inner.attempt.get() + 1);
        if self.inner.in_flight.borrow_mut().take().is_some() {
            debug!(attempt = self.attempt_id(), "disconnect superseded an in-flight connect");
        }
        self.transition(ConnectionState::Disconnected);
    }

    /// Register a listener called synchronously after every transition.
    pub fn subscribe(&self, listener: impl Fn(&ConnectionState) + 'static) -> SubscriptionId {
        let id = self.inner.next_subscription.get();
        self.inner.next_subscription.set(id + 1);
        self.inner.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.inner.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    fn transition(&self, next: ConnectionState) {
        {
            let mut state = self.inner.state.borrow_mut();
            if *state == next {
                return;
            }
            debug!(
                from = state.name(),
                to = next.name(),
                attempt = self.inner.attempt.get(),
                "wallet state transition"
            );
            *state = next.clone();
        }

        let epoch = self.inner.epoch.get() + 1;
        self.inner.epoch.set(epoch);

        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        for listener in listeners {
            listener(&next);
            // A listener published a newer state; it has already reached everyone
            if self.inner.epoch.get() != epoch {
                break;
            }
        }
    }

    /// Publish an attempt's outcome if it is still the current attempt.
    fn settle(&self, attempt: u64, outcome: ConnectionState) -> ConnectionState {
        if !self.record_if_stale(attempt) {
            self.inner.in_flight.borrow_mut().take();
            self.transition(outcome);
        }
        self.state()
    }

    /// Count a superseded attempt. Returns `true` if `attempt` is stale.
    fn record_if_stale(&self, attempt: u64) -> bool {
        let current = self.inner.attempt.get();
        if current == attempt {
            return false;
        }
        self.inner.stale_results.set(self.inner.stale_results.get() + 1);
        debug!(attempt, current, "discarding stale connect result");
        true
    }
}

/// One authorization + fetch attempt. Holds the session weakly so an
/// abandoned prompt does not keep the session alive.
async fn run_attempt(
    session: Weak<Inner>,
    binding: Rc<dyn ExtensionBinding>,
    fetcher: AccountFetcher,
    attempt: u64,
) -> ConnectionState {
    let outcome = match binding.request_access().await {
        Ok(()) => {
            // Skip the fetch entirely if the user already walked away
            match session.upgrade() {
                None => return ConnectionState::Disconnected,
                Some(inner) => {
                    let handle = WalletSession { inner };
                    if handle.record_if_stale(attempt) {
                        return handle.state();
                    }
                }
            }

            match fetcher.fetch(binding.as_ref()).await {
                Ok(info) => ConnectionState::Connected(info),
                Err(err) => {
                    warn!(attempt, error = %err, "wallet authorized but account data unusable");
                    ConnectionState::Error(err)
                }
            }
        }
        Err(ExtensionFailure::Declined(reason)) => {
            info!(attempt, "user declined the wallet connection");
            ConnectionState::Error(WalletError::UserRejected(reason))
        }
        Err(failure) => {
            warn!(attempt, error = %failure, "wallet authorization failed");
            ConnectionState::Error(WalletError::AuthorizationFailed(failure.message().to_string()))
        }
    };

    match session.upgrade() {
        Some(inner) => WalletSession { inner }.settle(attempt, outcome),
        None => ConnectionState::Disconnected,
    }
}
