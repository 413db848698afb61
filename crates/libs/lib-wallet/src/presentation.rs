//! # Presentation Helpers
//!
//! Pure helpers the widgets use to render a session. Nothing here touches
//! [`ConnectionState`](crate::ConnectionState).

use std::time::Duration;

pub use shared::utils::{format_public_key, format_public_key_with, KeyFormat};

/// Token identifying one "copied" acknowledgement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyToken(u64);

/// Short-lived "copied" acknowledgement behind a copy button.
///
/// Each copy starts a new generation. The host schedules
/// [`CopyFeedback::expire`] with the returned token after [`CopyFeedback::delay`];
/// a timer from an earlier copy cannot clear a newer acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyFeedback {
    generation: u64,
    copied: bool,
    delay: Duration,
}

impl CopyFeedback {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            generation: 0,
            copied: false,
            delay: Duration::from_millis(u64::from(delay_ms)),
        }
    }

    pub fn mark_copied(&mut self) -> CopyToken {
        self.generation += 1;
        self.copied = true;
        CopyToken(self.generation)
    }

    /// Clear the acknowledgement if `token` is still the latest copy.
    pub fn expire(&mut self, token: CopyToken) -> bool {
        if token.0 != self.generation || !self.copied {
            return false;
        }
        self.copied = false;
        true
    }

    pub fn is_copied(&self) -> bool {
        self.copied
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Label for the copy button.
    pub fn label(&self) -> &'static str {
        if self.copied {
            "Copied!"
        } else {
            "Copy"
        }
    }
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_COPY_ACK_MS)
    }
}

/// `"1,234.5 XLM"`, or `None` when there is no balance to show.
pub fn format_xlm_balance(balance: Option<&str>) -> Option<String> {
    let balance = balance?.trim();
    if balance.is_empty() {
        return None;
    }

    let (whole, fraction) = match balance.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (balance, None),
    };
    if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
        return Some(format!("{balance} XLM"));
    }

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    Some(match fraction {
        Some(fraction) => format!("{grouped}.{fraction} XLM"),
        None => format!("{grouped} XLM"),
    })
}
