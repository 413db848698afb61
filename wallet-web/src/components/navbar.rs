//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::WalletConnect;
use crate::utils::constants::APP_NAME;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav>
            <div style="max-width: 1200px; margin: 0 auto; padding: 0 24px; display: flex; justify-content: space-between; align-items: center;">
                <A href="/" attr:class="nav-link-clean">
                    <span class="nav-title">{APP_NAME}</span>
                </A>
                <div style="display: flex; align-items: center; gap: 16px;">
                    <A href="/status" attr:class="nav-link-clean">"Wallet Status"</A>
                    <WalletConnect show_full_address=true/>
                </div>
            </div>
        </nav>
    }
}
