//! Connect Wallet Page - landing page with the Freighter connection card
//! Split-screen layout with left section (header/subheader) and right section (wallet card)

use leptos::prelude::*;
use lib_wallet::KeyFormat;

use crate::components::FreighterInstallGuide;
use crate::state::wallet::use_wallet_context;
use crate::utils::constants::{APP_NAME, APP_TAGLINE};
use crate::utils::format::status_label;

#[component]
pub fn ConnectPage() -> impl IntoView {
    let wallet = use_wallet_context();

    let on_connect = move |_| wallet.connect();
    let on_disconnect = move |_| wallet.disconnect();

    view! {
        <div class="content-wrapper">
            <div class="left-section">
                <h1 class="main-header">{APP_NAME}</h1>
                <p class="main-subheader">{APP_TAGLINE}</p>
                <p class="signup-text">"connect your Freighter wallet to track your rewards"</p>
            </div>
            <div class="right-section">
                <div class="container">
                    {move || {
                        if !wallet.is_freighter_available() && !wallet.is_connected() {
                            return view! { <FreighterInstallGuide/> }.into_any();
                        }

                        view! {
                            <div class="card">
                                <h1 style="font-size: 32px; margin-bottom: 12px; font-weight: 700;">
                                    "Connect Wallet"
                                </h1>
                                <p class="subtitle">
                                    {move || wallet.state.with(|state| status_label(state))}
                                </p>

                                {move || wallet.error().map(|err| view! {
                                    <div class="error">
                                        <p style="text-align: center;">{err}</p>
                                    </div>
                                })}

                                {move || match wallet.wallet_info() {
                                    Some(info) => view! {
                                        <div>
                                            <div class="success">
                                                <p style="text-align: center; font-weight: bold; margin-bottom: 12px;">
                                                    "Wallet Connected Successfully"
                                                </p>
                                                <div class="wallet-address">
                                                    {wallet.format_public_key(&info.public_key, KeyFormat::Full)}
                                                </div>
                                            </div>
                                            <button class="btn btn-danger" style="width: 100%;" on:click=on_disconnect>
                                                "Disconnect"
                                            </button>
                                        </div>
                                    }
                                    .into_any(),
                                    None => view! {
                                        <button
                                            class="wallet-button"
                                            disabled=move || wallet.is_connecting()
                                            on:click=on_connect
                                        >
                                            <span style="font-weight: 600; flex: 1; text-align: left;">"Freighter"</span>
                                            <span style="font-size: 0.9em; opacity: 0.9;">
                                                {move || if wallet.is_connecting() { "..." } else { "→" }}
                                            </span>
                                        </button>
                                    }
                                    .into_any(),
                                }}
                            </div>
                        }
                        .into_any()
                    }}
                </div>
            </div>
        </div>
    }
}
