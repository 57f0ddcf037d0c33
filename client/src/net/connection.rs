//! Single-owner handles for long-lived browser connections.
//!
//! SYSTEM CONTEXT
//! ==============
//! The status `EventSource` and the multipart video image each hold a
//! network connection for as long as their component is mounted. Both are
//! parked in a `ConnectionSlot`, which closes the connection exactly once:
//! on an explicit `release` (stream error) or on component cleanup,
//! whichever comes first.
//!
//! Component cleanup must be `Send + Sync`, which the browser handles are
//! not. Cleanup therefore fires a `oneshot` teardown signal and the local
//! task that owns the slot performs the release.

#[cfg(test)]
#[path = "connection_test.rs"]
mod connection_test;

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;

/// A connection that can be torn down.
pub trait Closable {
    fn close(&mut self);
}

/// Shared slot holding at most one open connection.
///
/// Cloning shares the slot, so event handlers and cleanup closures can all
/// release the same connection.
pub struct ConnectionSlot<C: Closable> {
    inner: Rc<RefCell<Option<C>>>,
}

impl<C: Closable> Clone for ConnectionSlot<C> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<C: Closable> Default for ConnectionSlot<C> {
    fn default() -> Self {
        Self { inner: Rc::new(RefCell::new(None)) }
    }
}

impl<C: Closable> ConnectionSlot<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `conn`, closing whatever was there before.
    pub fn install(&self, conn: C) {
        let previous = self.inner.borrow_mut().replace(conn);
        if let Some(mut previous) = previous {
            previous.close();
        }
    }

    pub fn is_open(&self) -> bool {
        self.inner.borrow().is_some()
    }

    /// Close and drop the held connection. Returns `false` if already empty.
    pub fn release(&self) -> bool {
        let taken = self.inner.borrow_mut().take();
        match taken {
            Some(mut conn) => {
                conn.close();
                true
            }
            None => false,
        }
    }
}

/// Hold the connection open until the teardown signal fires, then release it.
///
/// A dropped sender counts as teardown. Returns whether this call was the one
/// that closed the connection.
pub async fn hold_until_teardown<C: Closable>(slot: &ConnectionSlot<C>, teardown: oneshot::Receiver<()>) -> bool {
    if teardown.await.is_err() {
        log::debug!("teardown sender dropped without signalling");
    }
    slot.release()
}

/// Fire a teardown signal from a cleanup closure.
pub fn signal_teardown(tx: oneshot::Sender<()>) {
    if tx.send(()).is_err() {
        log::debug!("teardown receiver already gone");
    }
}
