//! Browser-side services: the injected extension adapter and Horizon lookups.

pub mod freighter;
pub mod horizon;

pub use freighter::InjectedFreighter;
