//! Optional cooperative cancellation: the core pipeline exposes none
//! of its own, so this is purely an outer-facade convenience checked
//! between pipeline stages by [`crate::pipeline::find_tables_cancellable`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use pdftable_core::CoreError;

/// A cheaply cloneable flag a caller can fire from another thread to abort
/// an in-progress `find_tables_cancellable` call between stages.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    fired: Arc<AtomicBool>,
}

impl CancelToken {
    /// A token that has not been fired.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire the token. Safe to call from any thread, any number of times.
    pub fn cancel(&self) {
        self.fired.store(true, Ordering::SeqCst);
    }

    /// Whether the token has been fired.
    pub fn is_cancelled(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }

    pub(crate) fn check(&self) -> Result<(), CoreError> {
        if self.is_cancelled() {
            Err(CoreError::Cancelled)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_token_is_not_cancelled() {
        let token = CancelToken::new();
        assert!(!token.is_cancelled());
        assert!(token.check().is_ok());
    }

    #[test]
    fn cancel_is_visible_through_clones() {
        let token = CancelToken::new();
        let clone = token.clone();
        clone.cancel();
        assert!(token.is_cancelled());
        assert!(matches!(token.check(), Err(CoreError::Cancelled)));
    }
}
