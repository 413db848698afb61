//! Wallet Status Page - full session snapshot

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use lib_wallet::presentation::format_xlm_balance;

use crate::state::wallet::use_wallet_context;
use crate::utils::format::{status_label, yes_no};

#[component]
pub fn StatusPage() -> impl IntoView {
    let wallet = use_wallet_context();
    let navigate = use_navigate();

    let on_disconnect = move |_| {
        wallet.disconnect();
        navigate("/", Default::default());
    };

    view! {
        <div class="app-container" style="display: flex; justify-content: center; align-items: center; min-height: calc(100vh - 60px);">
            <div class="card" style="width: 100%; max-width: 500px; padding: var(--spacing-xl);">
                <h1 class="card-title" style="text-align: center; margin-bottom: var(--spacing-md);">
                    "Wallet Status"
                </h1>

                {move || {
                    let snapshot = wallet.snapshot();
                    let status = wallet.state.with(|state| status_label(state));

                    view! {
                        <dl class="status-grid">
                            <dt>"Status"</dt>
                            <dd>{status}</dd>

                            <dt>"Freighter Available"</dt>
                            <dd>{yes_no(snapshot.is_freighter_available)}</dd>

                            <dt>"Connecting"</dt>
                            <dd>{yes_no(snapshot.is_connecting)}</dd>

                            <dt>"Public Key"</dt>
                            <dd style="font-family: monospace; word-break: break-all;">
                                {snapshot.wallet_info.as_ref().map(|info| info.public_key.clone()).unwrap_or_else(|| "-".to_string())}
                            </dd>

                            <dt>"Network"</dt>
                            <dd>{snapshot.wallet_info.as_ref().map(|info| info.network.label()).unwrap_or("-")}</dd>

                            <dt>"XLM Balance"</dt>
                            <dd>
                                {snapshot
                                    .wallet_info
                                    .as_ref()
                                    .and_then(|info| format_xlm_balance(info.balance.as_deref()))
                                    .unwrap_or_else(|| "-".to_string())}
                            </dd>

                            <dt>"Error"</dt>
                            <dd>{snapshot.error.unwrap_or_else(|| "-".to_string())}</dd>
                        </dl>
                    }
                }}

                <button
                    class="btn btn-danger"
                    style="width: 100%;"
                    disabled=move || !wallet.is_connected()
                    on:click=on_disconnect
                >
                    "Disconnect Wallet"
                </button>
            </div>
        </div>
    }
}
