//! Freighter Integration via wasm-bindgen
//!
//! Adapter between the page-global object the Freighter extension injects and
//! the [`ExtensionBinding`] capability the wallet session consumes.
//!
//! Freighter has shipped two API shapes. The 1.x object exposes
//! `isConnected`, `getPublicKey`, `getNetwork` and `setAllowed`, each
//! resolving to a bare value. The 2.x object exposes `requestAccess`,
//! `getAddress` and `getNetworkDetails`, each resolving to an object with an
//! optional `error` field. All shape sniffing stays in this file.

use async_trait::async_trait;
use js_sys::Reflect;
use lib_wallet::{ExtensionBinding, ExtensionFailure};
use shared::StellarNetwork;
use wasm_bindgen::prelude::*;

use crate::services::horizon;

/// Prefix the JS glue puts on errors caused by a missing API method.
const UNSUPPORTED_PREFIX: &str = "unsupported: ";

#[wasm_bindgen(inline_js = "
function api(name) {
    if (typeof window === 'undefined') {
        return null;
    }
    const candidate = window[name];
    return candidate && (typeof candidate === 'object' || typeof candidate === 'function')
        ? candidate
        : null;
}

function requireApi(name) {
    const candidate = api(name);
    if (!candidate) {
        throw new Error('window.' + name + ' is not available');
    }
    return candidate;
}

function errorText(err) {
    if (!err) {
        return null;
    }
    if (typeof err === 'string') {
        return err;
    }
    return err.message || String(err);
}

function unwrap(result, field) {
    if (typeof result === 'string') {
        return result;
    }
    if (result && typeof result === 'object') {
        const failure = errorText(result.error);
        if (failure) {
            throw new Error(failure);
        }
        return result[field] || '';
    }
    return '';
}

export function freighterPresent(name) {
    return api(name) !== null;
}

export async function freighterRequestAccess(name) {
    const freighter = requireApi(name);
    if (typeof freighter.requestAccess === 'function') {
        unwrap(await freighter.requestAccess(), 'address');
        return;
    }
    if (typeof freighter.setAllowed === 'function') {
        const result = await freighter.setAllowed();
        if (result === false) {
            throw new Error('User declined access');
        }
        unwrap(result, 'isAllowed');
        return;
    }
    throw new Error('unsupported: window.' + name + ' has no requestAccess');
}

export async function freighterGetAddress(name) {
    const freighter = requireApi(name);
    if (typeof freighter.getAddress === 'function') {
        return unwrap(await freighter.getAddress(), 'address');
    }
    if (typeof freighter.getPublicKey === 'function') {
        return unwrap(await freighter.getPublicKey(), 'publicKey');
    }
    throw new Error('unsupported: window.' + name + ' has no getAddress');
}

export async function freighterGetNetwork(name) {
    const freighter = requireApi(name);
    if (typeof freighter.getNetworkDetails === 'function') {
        const details = await freighter.getNetworkDetails();
        return unwrap(details, 'network') || unwrap(details, 'networkPassphrase');
    }
    if (typeof freighter.getNetwork === 'function') {
        return unwrap(await freighter.getNetwork(), 'network');
    }
    throw new Error('unsupported: window.' + name + ' has no getNetwork');
}
")]
extern "C" {
    /// Whether `window[name]` holds an extension object
    fn freighterPresent(name: &str) -> bool;

    /// Open the extension's authorization prompt
    #[wasm_bindgen(catch)]
    async fn freighterRequestAccess(name: &str) -> Result<JsValue, JsValue>;

    /// Read the authorized account id
    #[wasm_bindgen(catch)]
    async fn freighterGetAddress(name: &str) -> Result<JsValue, JsValue>;

    /// Read the network name or passphrase
    #[wasm_bindgen(catch)]
    async fn freighterGetNetwork(name: &str) -> Result<JsValue, JsValue>;
}

/// Freighter API injected under one page-global name.
#[derive(Debug, Clone)]
pub struct InjectedFreighter {
    name: String,
}

impl InjectedFreighter {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait(?Send)]
impl ExtensionBinding for InjectedFreighter {
    fn binding_name(&self) -> &str {
        &self.name
    }

    fn is_present(&self) -> bool {
        freighterPresent(&self.name)
    }

    async fn request_access(&self) -> Result<(), ExtensionFailure> {
        freighterRequestAccess(&self.name)
            .await
            .map(|_| ())
            .map_err(to_failure)
    }

    async fn get_address(&self) -> Result<String, ExtensionFailure> {
        let value = freighterGetAddress(&self.name).await.map_err(to_failure)?;
        Ok(value.as_string().unwrap_or_default())
    }

    async fn get_network(&self) -> Result<String, ExtensionFailure> {
        let value = freighterGetNetwork(&self.name).await.map_err(to_failure)?;
        Ok(value.as_string().unwrap_or_default())
    }

    async fn get_balance(
        &self,
        public_key: &str,
        network: StellarNetwork,
    ) -> Result<Option<String>, ExtensionFailure> {
        horizon::fetch_native_balance(public_key, network)
            .await
            .map_err(ExtensionFailure::Failed)
    }
}

/// Classify a rejected promise into an [`ExtensionFailure`].
fn to_failure(err: JsValue) -> ExtensionFailure {
    let message = js_error_message(&err);
    match message.strip_prefix(UNSUPPORTED_PREFIX) {
        Some(rest) => ExtensionFailure::Unsupported(rest.to_string()),
        None => ExtensionFailure::classify(message),
    }
}

fn js_error_message(err: &JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}
