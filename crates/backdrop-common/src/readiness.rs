//! One-shot readiness signal for values produced by bootstrap code.
//!
//! The publishing side hands a value over exactly once; any number of
//! waiters resolve with a clone of it. Dropping the publisher without
//! publishing resolves every waiter with [`ConfigError::NotReady`].

use tokio::sync::watch;
use tracing::debug;

use crate::ConfigError;

/// Create a linked publisher/readiness pair.
pub fn readiness<T>() -> (Publisher<T>, Readiness<T>) {
    let (tx, rx) = watch::channel(None);
    (Publisher { tx }, Readiness { rx })
}

/// Publishing half. Consumed by [`Publisher::publish`] so a value can only
/// be handed over once.
pub struct Publisher<T> {
    tx: watch::Sender<Option<T>>,
}

impl<T> Publisher<T> {
    pub fn publish(self, value: T) {
        // Stored even when every waiter is already gone.
        self.tx.send_replace(Some(value));
        debug!("readiness published");
    }
}

/// Waiting half. Cheap to clone; every clone observes the same value.
#[derive(Clone)]
pub struct Readiness<T> {
    rx: watch::Receiver<Option<T>>,
}

impl<T: Clone> Readiness<T> {
    /// Resolve once the value has been published.
    pub async fn wait(mut self) -> Result<T, ConfigError> {
        let published = self
            .rx
            .wait_for(Option::is_some)
            .await
            .map_err(|_| ConfigError::NotReady)?;
        published.as_ref().cloned().ok_or(ConfigError::NotReady)
    }
}
