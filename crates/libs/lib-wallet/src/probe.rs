//! # Extension Probe
//!
//! Answers "is a compatible wallet extension present?" by asking each known
//! binding in turn. Extensions inject after the page's first script runs, so a
//! result is only good for the instant it was taken; callers re-probe instead
//! of caching it.

use std::rc::Rc;

use tracing::debug;

use crate::binding::ExtensionBinding;

/// Presence of one candidate binding, for the debug panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingStatus {
    pub name: String,
    pub present: bool,
}

/// Ordered set of candidate bindings.
#[derive(Clone, Default)]
pub struct ExtensionProbe {
    candidates: Vec<Rc<dyn ExtensionBinding>>,
}

impl ExtensionProbe {
    pub fn new(candidates: Vec<Rc<dyn ExtensionBinding>>) -> Self {
        Self { candidates }
    }

    /// First candidate that currently reports itself present.
    pub fn detect(&self) -> Option<Rc<dyn ExtensionBinding>> {
        let found = self
            .candidates
            .iter()
            .find(|binding| binding.is_present())
            .cloned();

        match &found {
            Some(binding) => debug!(binding = binding.binding_name(), "wallet extension detected"),
            None => debug!(candidates = self.candidates.len(), "no wallet extension detected"),
        }

        found
    }

    pub fn is_available(&self) -> bool {
        self.candidates.iter().any(|binding| binding.is_present())
    }

    /// Presence of every candidate, in probe order.
    pub fn report(&self) -> Vec<BindingStatus> {
        self.candidates
            .iter()
            .map(|binding| BindingStatus {
                name: binding.binding_name().to_string(),
                present: binding.is_present(),
            })
            .collect()
    }
}
