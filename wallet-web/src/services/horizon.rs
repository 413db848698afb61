//! Horizon account lookup for the native XLM balance.

use gloo_net::http::Request;
use serde::Deserialize;
use shared::StellarNetwork;

#[derive(Debug, Deserialize)]
pub struct AccountResponse {
    #[serde(default)]
    pub balances: Vec<AccountBalance>,
}

#[derive(Debug, Deserialize)]
pub struct AccountBalance {
    pub asset_type: String,
    pub balance: String,
}

impl AccountResponse {
    /// Balance of the `native` asset line, if the account holds one.
    pub fn native_balance(&self) -> Option<&str> {
        self.balances
            .iter()
            .find(|line| line.asset_type == "native")
            .map(|line| line.balance.as_str())
    }
}

/// Fetch the native balance of `public_key` on `network`.
///
/// `Ok(None)` when the network has no public Horizon or the account is not
/// funded yet (Horizon answers 404).
pub async fn fetch_native_balance(
    public_key: &str,
    network: StellarNetwork,
) -> Result<Option<String>, String> {
    let Some(base_url) = network.horizon_url() else {
        return Ok(None);
    };

    let url = format!("{}/accounts/{}", base_url, public_key);
    log::debug!("Fetching account balance from: {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status() == 404 {
        return Ok(None);
    }
    if !response.ok() {
        return Err(format!("Horizon API error: {}", response.status()));
    }

    let account: AccountResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(account.native_balance().map(str::to_string))
}
