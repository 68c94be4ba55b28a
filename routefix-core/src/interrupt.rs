//! Interrupt state shared between the confirmation prompt and the Ctrl-C handler.

use std::sync::atomic::{AtomicBool, Ordering};

static AWAITING_CONFIRMATION: AtomicBool = AtomicBool::new(false);

/// Marks the process as blocked on the confirmation prompt until dropped.
pub struct PromptGuard;

impl PromptGuard {
    pub fn enter() -> Self {
        AWAITING_CONFIRMATION.store(true, Ordering::SeqCst);
        Self
    }
}

impl Drop for PromptGuard {
    fn drop(&mut self) {
        AWAITING_CONFIRMATION.store(false, Ordering::SeqCst);
    }
}

pub fn awaiting_confirmation() -> bool {
    AWAITING_CONFIRMATION.load(Ordering::SeqCst)
}

/// What to tell the operator when Ctrl-C arrives.
///
/// At the prompt nothing has been renamed yet, so the run is reported as
/// cancelled; anywhere else renames may be half applied.
pub fn interrupt_message() -> &'static str {
    if awaiting_confirmation() {
        "Cancelled. No files were renamed."
    } else {
        "Interrupted."
    }
}
