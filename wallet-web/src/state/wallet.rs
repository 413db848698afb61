//! Wallet state management
//!
//! Bridges the page-wide [`WalletSession`] into Leptos signals. The session
//! stays the only writer of connection state; widgets read the signals and
//! call [`WalletContext::connect`] / [`WalletContext::disconnect`].

use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use js_sys::Reflect;
use leptos::prelude::*;
use lib_wallet::{
    BindingStatus, ConnectionState, ExtensionBinding, KeyFormat, WalletConfig, WalletSession,
    WalletSnapshot,
};
use shared::WalletInfo;
use wasm_bindgen::JsValue;

use crate::services::InjectedFreighter;
use crate::utils::constants::CONFIG_GLOBAL;

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub state: RwSignal<ConnectionState>,
    pub available: RwSignal<bool>,
    session: StoredValue<WalletSession, LocalStorage>,
}

impl WalletContext {
    pub fn new(session: WalletSession) -> Self {
        let state = RwSignal::new(session.state());
        let available = RwSignal::new(session.is_freighter_available());

        session.subscribe(move |next| {
            state.set(next.clone());
            match next {
                ConnectionState::ExtensionUnavailable(_) => available.set(false),
                ConnectionState::Connected(_) => available.set(true),
                _ => {}
            }
        });

        Self {
            state,
            available,
            session: StoredValue::new_local(session),
        }
    }

    fn session(&self) -> WalletSession {
        self.session.with_value(WalletSession::clone)
    }

    pub fn is_connected(&self) -> bool {
        self.state.with(ConnectionState::is_connected)
    }

    pub fn is_connecting(&self) -> bool {
        self.state.with(ConnectionState::is_connecting)
    }

    pub fn wallet_info(&self) -> Option<WalletInfo> {
        self.state.with(|state| state.wallet_info().cloned())
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(ConnectionState::message)
    }

    pub fn is_freighter_available(&self) -> bool {
        self.available.get()
    }

    pub fn snapshot(&self) -> WalletSnapshot {
        self.state
            .with(|state| WalletSnapshot::new(state, self.available.get()))
    }

    /// Live presence of every probed binding, for the debug panel.
    pub fn probe_report(&self) -> Vec<BindingStatus> {
        self.session().probe_report()
    }

    pub fn config(&self) -> WalletConfig {
        self.session.with_value(|session| session.config().clone())
    }

    pub fn format_public_key(&self, key: &str, mode: KeyFormat) -> String {
        self.session
            .with_value(|session| session.format_public_key(key, mode))
    }

    /// Start a connection attempt in the background.
    pub fn connect(&self) {
        let session = self.session();
        let available = self.available;
        available.set(session.is_freighter_available());
        leptos::task::spawn_local(async move {
            let outcome = session.connect().await;
            log::info!("Wallet connect finished: {}", outcome.name());
        });
    }

    pub fn disconnect(&self) {
        self.session().disconnect();
    }

    /// Re-probe a few times after load so late extension injection is noticed.
    pub fn watch_for_extension(&self) {
        let session = self.session();
        let available = self.available;
        let config = session.config().clone();

        leptos::task::spawn_local(async move {
            for attempt in 1..=config.probe_max_attempts {
                let found = session.refresh_availability();
                available.set(found);
                if found {
                    log::info!("Freighter detected after {} probe(s)", attempt);
                    return;
                }
                TimeoutFuture::new(config.probe_retry_ms).await;
            }
            log::warn!(
                "Freighter not detected after {} probes",
                config.probe_max_attempts
            );
        });
    }
}

/// Configuration from `window.stellarforgeWalletConfig`, or the defaults.
pub fn load_config() -> WalletConfig {
    let Some(window) = web_sys::window() else {
        return WalletConfig::default();
    };

    let raw = match Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)) {
        Ok(value) if !value.is_undefined() && !value.is_null() => value,
        _ => return WalletConfig::default(),
    };

    let config = serde_wasm_bindgen::from_value::<WalletConfig>(raw)
        .map_err(|e| e.to_string())
        .and_then(|config| config.validate().map(|()| config));

    match config {
        Ok(config) => {
            log::info!("Loaded wallet config from window.{}", CONFIG_GLOBAL);
            config
        }
        Err(e) => {
            log::warn!("Ignoring window.{}: {}", CONFIG_GLOBAL, e);
            WalletConfig::default()
        }
    }
}

/// Build the page-wide session over every configured binding name.
pub fn create_session(config: WalletConfig) -> WalletSession {
    let bindings: Vec<Rc<dyn ExtensionBinding>> = config
        .binding_names
        .iter()
        .map(|name| Rc::new(InjectedFreighter::new(name.clone())) as Rc<dyn ExtensionBinding>)
        .collect();
    WalletSession::with_bindings(bindings, config)
}

pub fn provide_wallet_context() -> WalletContext {
    let context = WalletContext::new(create_session(load_config()));
    context.watch_for_extension();
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}
