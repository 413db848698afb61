//! Wallet Connect Widget - header badge, dropdown and install prompt

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use lib_wallet::presentation::format_xlm_balance;
use lib_wallet::{CopyFeedback, KeyFormat};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::state::wallet::{use_wallet_context, WalletContext};
use crate::utils::format::{network_label, yes_no};

#[component]
pub fn WalletConnect(
    /// Show the truncated key on the badge instead of "Connected"
    #[prop(optional)]
    show_full_address: bool,
) -> impl IntoView {
    let wallet = use_wallet_context();

    view! {
        <div class="wallet-connect" style="position: relative;">
            {move || {
                if wallet.is_connected() {
                    view! { <ConnectedBadge wallet=wallet show_full_address=show_full_address/> }.into_any()
                } else {
                    view! { <DisconnectedControls wallet=wallet/> }.into_any()
                }
            }}
        </div>
    }
}

#[component]
fn DisconnectedControls(wallet: WalletContext) -> impl IntoView {
    let (show_debug, set_show_debug) = signal(false);
    let install_url = StoredValue::new(wallet.config().install_url);

    let on_connect = move |_| {
        log::debug!(
            "Connect clicked, Freighter available: {}",
            wallet.is_freighter_available()
        );
        wallet.connect();
    };

    view! {
        {move || {
            if wallet.is_freighter_available() {
                view! {
                    <button
                        class="btn wallet-button"
                        disabled=move || wallet.is_connecting()
                        on:click=on_connect
                    >
                        {move || if wallet.is_connecting() { "Connecting..." } else { "Connect Wallet" }}
                    </button>
                }
                .into_any()
            } else {
                view! {
                    <div style="display: flex; align-items: center; gap: 8px;">
                        <button
                            class="btn wallet-install"
                            title="Install Freighter Wallet"
                            on:click=move |_| open_in_new_tab(&install_url.get_value())
                        >
                            "Install Freighter"
                        </button>
                        <button
                            class="debug-toggle"
                            title="Debug info"
                            on:click=move |_| set_show_debug.update(|shown| *shown = !*shown)
                        >
                            "?"
                        </button>
                    </div>
                }
                .into_any()
            }
        }}

        {move || show_debug.get().then(|| view! { <DebugPanel wallet=wallet/> })}

        {move || wallet.error().map(|message| view! {
            <div class="error wallet-error">
                <span>{message}</span>
            </div>
        })}
    }
}

#[component]
fn DebugPanel(wallet: WalletContext) -> impl IntoView {
    let bindings = wallet.probe_report();

    view! {
        <div class="wallet-debug">
            <div>"Freighter Available: " {yes_no(wallet.is_freighter_available())}</div>
            {bindings
                .into_iter()
                .map(|binding| view! {
                    <div>{format!("window.{}: {}", binding.name, yes_no(binding.present))}</div>
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn ConnectedBadge(wallet: WalletContext, show_full_address: bool) -> impl IntoView {
    let (show_dropdown, set_show_dropdown) = signal(false);

    let badge_label = move || match wallet.wallet_info() {
        Some(info) if show_full_address => {
            wallet.format_public_key(&info.public_key, KeyFormat::Truncated)
        }
        _ => "Connected".to_string(),
    };
    let balance = move || {
        wallet
            .wallet_info()
            .and_then(|info| format_xlm_balance(info.balance.as_deref()))
    };

    view! {
        <button
            class="btn wallet-badge"
            on:click=move |_| set_show_dropdown.update(|open| *open = !*open)
        >
            <span class="status-dot"></span>
            <span>{badge_label}</span>
            {move || balance().map(|balance| view! { <span class="balance-pill">{balance}</span> })}
        </button>

        {move || show_dropdown.get().then(|| view! {
            <WalletDropdown wallet=wallet set_open=set_show_dropdown/>
            // Click outside to close
            <div class="dropdown-backdrop" on:click=move |_| set_show_dropdown.set(false)></div>
        })}
    }
}

#[component]
fn WalletDropdown(wallet: WalletContext, set_open: WriteSignal<bool>) -> impl IntoView {
    let copy_feedback = RwSignal::new(CopyFeedback::new(wallet.config().copy_ack_ms));

    let on_copy = move |_| {
        let Some(info) = wallet.wallet_info() else {
            return;
        };
        leptos::task::spawn_local(async move {
            if let Err(e) = copy_to_clipboard(&info.public_key).await {
                log::warn!("Clipboard write failed: {:?}", e);
                return;
            }
            let Some(token) = copy_feedback.try_update(|feedback| feedback.mark_copied()) else {
                return;
            };
            let Some(delay) = copy_feedback.try_with_untracked(|feedback| feedback.delay()) else {
                return;
            };
            TimeoutFuture::new(u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)).await;
            // The dropdown may have closed while the timer ran
            copy_feedback.try_update(|feedback| feedback.expire(token));
        });
    };

    let on_disconnect = move |_| {
        wallet.disconnect();
        set_open.set(false);
    };

    view! {
        <div class="wallet-dropdown">
            <div class="dropdown-header">
                <h3>"Stellar Wallet"</h3>
                <span class="status-connected">"Connected"</span>
            </div>

            <div class="dropdown-body">
                <div>
                    <label>"Public Key"</label>
                    <div style="display: flex; align-items: center; gap: 8px;">
                        <code class="wallet-address">
                            {move || wallet.wallet_info().map(|info| info.public_key)}
                        </code>
                        <button class="copy-button" title="Copy address" on:click=on_copy>
                            {move || copy_feedback.with(|feedback| feedback.label())}
                        </button>
                    </div>
                </div>

                <div>
                    <label>"Network"</label>
                    <span class="network-pill">
                        {move || network_label(wallet.wallet_info().as_ref())}
                    </span>
                </div>

                {move || {
                    wallet
                        .wallet_info()
                        .and_then(|info| format_xlm_balance(info.balance.as_deref()))
                        .map(|balance| view! {
                            <div>
                                <label>"XLM Balance"</label>
                                <span class="balance">{balance}</span>
                            </div>
                        })
                }}

                {move || {
                    wallet
                        .wallet_info()
                        .and_then(|info| info.network_warning())
                        .map(|warning| view! {
                            <div class="warning">
                                <span>{warning}</span>
                            </div>
                        })
                }}
            </div>

            <div class="dropdown-actions">
                <button class="btn btn-danger" on:click=on_disconnect>
                    "Disconnect"
                </button>
            </div>
        </div>
    }
}

/// Open `url` in a new browser tab.
pub fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.open_with_url_and_target(url, "_blank") {
        log::warn!("Failed to open {}: {:?}", url, e);
    }
}

async fn copy_to_clipboard(text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise).await.map(|_| ())
}
