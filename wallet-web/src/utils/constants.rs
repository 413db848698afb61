//! Application constants

/// Page global an embedding page can set to override the wallet config.
pub const CONFIG_GLOBAL: &str = "stellarforgeWalletConfig";

/// Header branding
pub const APP_NAME: &str = "StellarForge";
pub const APP_TAGLINE: &str = "KALE farming analytics on Stellar";
