//! Cancellation signals.
//!
//! A signal is only ever polled, never awaited: the drain loop checks it
//! once per iteration.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, TryRecvError};
use std::sync::Arc;

/// Externally fired stop request.
pub trait CancelSignal {
    /// Non-blocking check.
    fn is_cancelled(&self) -> bool;
}

/// Cloneable cancellation handle; every clone observes the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancellationFlag {
    fired: Arc<AtomicBool>,
}

impl CancellationFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.fired.store(true, Ordering::Release);
    }
}

impl CancelSignal for CancellationFlag {
    fn is_cancelled(&self) -> bool {
        self.fired.load(Ordering::Acquire)
    }
}

impl CancelSignal for AtomicBool {
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Acquire)
    }
}

/// Fires once a value arrives or every sender is gone.
impl CancelSignal for Receiver<()> {
    fn is_cancelled(&self) -> bool {
        match self.try_recv() {
            Ok(()) | Err(TryRecvError::Disconnected) => true,
            Err(TryRecvError::Empty) => false,
        }
    }
}

/// Signal that never fires.
#[derive(Debug, Clone, Copy, Default)]
pub struct Never;

impl CancelSignal for Never {
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<T: CancelSignal + ?Sized> CancelSignal for &T {
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}

impl<T: CancelSignal + ?Sized> CancelSignal for Arc<T> {
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}
