use super::*;
use std::cell::Cell;

use futures::executor::block_on;

/// Mock transport counting how often it was closed.
struct MockConn {
    closes: Rc<Cell<u32>>,
}

impl Closable for MockConn {
    fn close(&mut self) {
        self.closes.set(self.closes.get() + 1);
    }
}

fn mock() -> (MockConn, Rc<Cell<u32>>) {
    let closes = Rc::new(Cell::new(0));
    (MockConn { closes: Rc::clone(&closes) }, closes)
}

// =============================================================
// ConnectionSlot
// =============================================================

#[test]
fn new_slot_is_empty() {
    let slot = ConnectionSlot::<MockConn>::new();
    assert!(!slot.is_open());
    assert!(!slot.release());
}

#[test]
fn release_closes_exactly_once() {
    let (conn, closes) = mock();
    let slot = ConnectionSlot::new();
    slot.install(conn);
    assert!(slot.is_open());
    assert!(slot.release());
    assert!(!slot.release());
    assert_eq!(closes.get(), 1);
}

#[test]
fn clones_share_the_same_connection() {
    let (conn, closes) = mock();
    let slot = ConnectionSlot::new();
    let handler_copy = slot.clone();
    slot.install(conn);
    assert!(handler_copy.release());
    assert!(!slot.is_open());
    assert!(!slot.release());
    assert_eq!(closes.get(), 1);
}

#[test]
fn install_closes_previous_connection() {
    let (first, first_closes) = mock();
    let (second, second_closes) = mock();
    let slot = ConnectionSlot::new();
    slot.install(first);
    slot.install(second);
    assert_eq!(first_closes.get(), 1);
    assert_eq!(second_closes.get(), 0);
    slot.release();
    assert_eq!(second_closes.get(), 1);
}

// =============================================================
// Teardown
// =============================================================

#[test]
fn teardown_signal_releases_connection() {
    let (conn, closes) = mock();
    let slot = ConnectionSlot::new();
    slot.install(conn);
    let (tx, rx) = oneshot::channel();
    signal_teardown(tx);
    assert!(block_on(hold_until_teardown(&slot, rx)));
    assert_eq!(closes.get(), 1);
}

#[test]
fn dropped_sender_still_releases_connection() {
    let (conn, closes) = mock();
    let slot = ConnectionSlot::new();
    slot.install(conn);
    let (tx, rx) = oneshot::channel::<()>();
    drop(tx);
    assert!(block_on(hold_until_teardown(&slot, rx)));
    assert_eq!(closes.get(), 1);
}

#[test]
fn teardown_after_early_release_does_not_close_twice() {
    let (conn, closes) = mock();
    let slot = ConnectionSlot::new();
    slot.install(conn);
    slot.release();
    let (tx, rx) = oneshot::channel();
    signal_teardown(tx);
    assert!(!block_on(hold_until_teardown(&slot, rx)));
    assert_eq!(closes.get(), 1);
}
