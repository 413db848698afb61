//! UI Components

pub mod freighter_install;
pub mod navbar;
pub mod wallet_connect;

pub use freighter_install::FreighterInstallGuide;
pub use navbar::Navbar;
pub use wallet_connect::WalletConnect;
