//! Freighter Install Guide - shown when no extension is detected

use leptos::prelude::*;

use crate::components::wallet_connect::open_in_new_tab;
use crate::state::wallet::use_wallet_context;

#[component]
pub fn FreighterInstallGuide() -> impl IntoView {
    let wallet = use_wallet_context();
    let install_url = wallet.config().install_url;

    view! {
        <div class="card install-guide">
            <h2 class="card-title">"Connect Your Stellar Wallet"</h2>
            <p class="subtitle">
                "To access farming features and track your rewards, you'll need a Stellar wallet. "
                "We recommend Freighter - the most popular and secure Stellar wallet."
            </p>

            <div class="feature">
                <p class="feature-title">"Secure & Open Source"</p>
                <p class="feature-text">"Non-custodial wallet with full source code transparency"</p>
            </div>
            <div class="feature">
                <p class="feature-title">"Easy Integration"</p>
                <p class="feature-text">"Seamlessly connect to StellarForge Analytics"</p>
            </div>

            <button
                class="btn"
                style="width: 100%;"
                on:click=move |_| open_in_new_tab(&install_url)
            >
                "Install Freighter Wallet"
            </button>

            <p class="hint">
                "Already have Freighter? Refresh the page and click \"Connect Wallet\""
            </p>
        </div>
    }
}
