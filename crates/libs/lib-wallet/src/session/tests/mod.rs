//! # Wallet Session Tests
//!
//! Behaviour of the connection state machine against a scripted extension.
//!
//! Interleavings are driven with `futures::join!` and oneshot gates on the
//! mock, so every ordering is deterministic and nothing sleeps.

mod connect;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;
use shared::StellarNetwork;

use super::{ConnectionState, WalletSession};
use crate::binding::{ExtensionBinding, ExtensionFailure};
use crate::config::WalletConfig;

/// Valid Stellar account ids.
pub(crate) const KEY: &str = "GA5ZSEJYB37JRC5AVCIA5MOP4RHTM335X2KGX3IHOJAPP5RE34K4KZVN";
pub(crate) const OTHER_KEY: &str = "GCHPTWXMT3HYF4RLZHWBNRF4MPXLTJ76ISHMSYIWCCDXWUYOQG5MR2AB";

/// Scripted extension binding that counts every call.
pub(crate) struct MockBinding {
    name: String,
    present: Cell<bool>,
    presence_checks: Cell<usize>,
    access: RefCell<Result<(), ExtensionFailure>>,
    access_gate: RefCell<Option<oneshot::Receiver<()>>>,
    address: RefCell<Result<String, ExtensionFailure>>,
    address_gate: RefCell<Option<oneshot::Receiver<()>>>,
    network: RefCell<Result<String, ExtensionFailure>>,
    balance: RefCell<Result<Option<String>, ExtensionFailure>>,
    access_calls: Cell<usize>,
    address_calls: Cell<usize>,
    network_calls: Cell<usize>,
    balance_calls: Cell<usize>,
}

impl MockBinding {
    /// Present extension that approves and reports `KEY` on TESTNET.
    pub(crate) fn approving(name: &str) -> Rc<Self> {
        Rc::new(Self {
            name: name.to_string(),
            present: Cell::new(true),
            presence_checks: Cell::new(0),
            access: RefCell::new(Ok(())),
            access_gate: RefCell::new(None),
            address: RefCell::new(Ok(KEY.to_string())),
            address_gate: RefCell::new(None),
            network: RefCell::new(Ok("TESTNET".to_string())),
            balance: RefCell::new(Ok(None)),
            access_calls: Cell::new(0),
            address_calls: Cell::new(0),
            network_calls: Cell::new(0),
            balance_calls: Cell::new(0),
        })
    }

    /// Not injected (yet).
    pub(crate) fn absent(name: &str) -> Rc<Self> {
        let mock = Self::approving(name);
        mock.present.set(false);
        mock
    }

    pub(crate) fn declining(self: Rc<Self>, message: &str) -> Rc<Self> {
        *self.access.borrow_mut() = Err(ExtensionFailure::Declined(message.to_string()));
        self
    }

    pub(crate) fn failing(self: Rc<Self>, message: &str) -> Rc<Self> {
        *self.access.borrow_mut() = Err(ExtensionFailure::Failed(message.to_string()));
        self
    }

    pub(crate) fn with_address(self: Rc<Self>, address: &str) -> Rc<Self> {
        *self.address.borrow_mut() = Ok(address.to_string());
        self
    }

    pub(crate) fn with_network(self: Rc<Self>, network: &str) -> Rc<Self> {
        *self.network.borrow_mut() = Ok(network.to_string());
        self
    }

    pub(crate) fn with_network_failure(self: Rc<Self>, message: &str) -> Rc<Self> {
        *self.network.borrow_mut() = Err(ExtensionFailure::Failed(message.to_string()));
        self
    }

    pub(crate) fn with_balance(self: Rc<Self>, balance: &str) -> Rc<Self> {
        *self.balance.borrow_mut() = Ok(Some(balance.to_string()));
        self
    }

    pub(crate) fn with_balance_failure(self: Rc<Self>, message: &str) -> Rc<Self> {
        *self.balance.borrow_mut() = Err(ExtensionFailure::Failed(message.to_string()));
        self
    }

    pub(crate) fn set_present(&self, present: bool) {
        self.present.set(present);
    }

    pub(crate) fn allow_access(&self) {
        *self.access.borrow_mut() = Ok(());
    }

    /// Hold the next authorization prompt open until the sender fires (or drops).
    pub(crate) fn gate_access(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.access_gate.borrow_mut() = Some(rx);
        tx
    }

    /// Hold the next address read open until the sender fires (or drops).
    pub(crate) fn gate_address(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.address_gate.borrow_mut() = Some(rx);
        tx
    }

    pub(crate) fn presence_checks(&self) -> usize {
        self.presence_checks.get()
    }

    pub(crate) fn access_calls(&self) -> usize {
        self.access_calls.get()
    }

    pub(crate) fn address_calls(&self) -> usize {
        self.address_calls.get()
    }

    pub(crate) fn network_calls(&self) -> usize {
        self.network_calls.get()
    }

    pub(crate) fn balance_calls(&self) -> usize {
        self.balance_calls.get()
    }
}

#[async_trait(?Send)]
impl ExtensionBinding for MockBinding {
    fn binding_name(&self) -> &str {
        &self.name
    }

    fn is_present(&self) -> bool {
        self.presence_checks.set(self.presence_checks.get() + 1);
        self.present.get()
    }

    async fn request_access(&self) -> Result<(), ExtensionFailure> {
        self.access_calls.set(self.access_calls.get() + 1);
        let gate = self.access_gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.access.borrow().clone()
    }

    async fn get_address(&self) -> Result<String, ExtensionFailure> {
        self.address_calls.set(self.address_calls.get() + 1);
        let gate = self.address_gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.address.borrow().clone()
    }

    async fn get_network(&self) -> Result<String, ExtensionFailure> {
        self.network_calls.set(self.network_calls.get() + 1);
        self.network.borrow().clone()
    }

    async fn get_balance(
        &self,
        _public_key: &str,
        _network: StellarNetwork,
    ) -> Result<Option<String>, ExtensionFailure> {
        self.balance_calls.set(self.balance_calls.get() + 1);
        self.balance.borrow().clone()
    }
}

/// Erase mock types into the candidate list the probe expects.
pub(crate) fn bindings(mocks: &[&Rc<MockBinding>]) -> Vec<Rc<dyn ExtensionBinding>> {
    mocks
        .iter()
        .map(|mock| {
            let binding: Rc<dyn ExtensionBinding> = (*mock).clone();
            binding
        })
        .collect()
}

/// Session over a single mock with default configuration.
pub(crate) fn session_with(mock: &Rc<MockBinding>) -> WalletSession {
    WalletSession::with_bindings(bindings(&[mock]), WalletConfig::default())
}

/// Record every state a session publishes.
pub(crate) fn record_states(session: &WalletSession) -> Rc<RefCell<Vec<ConnectionState>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    session.subscribe(move |state| sink.borrow_mut().push(state.clone()));
    seen
}
