//! Cooperative cancellation for in-flight feed runs.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Caller-supplied cancellation signal.
///
/// Cancellation is checked before each product is processed: products
/// already finished stay in the output, later ones are dropped whole, and
/// the run reports `cancelled = true`. No partially-resolved product is ever
/// emitted.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_signal() {
        let token = CancelToken::new();
        let observer = token.clone();
        assert!(!observer.is_cancelled());
        token.cancel();
        assert!(observer.is_cancelled());
    }
}
