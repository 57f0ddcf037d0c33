//! Transient notifications.
//!
//! DESIGN
//! ======
//! A flat queue of toasts with monotonically increasing ids. The save path
//! pushes a `Loading` toast and later replaces it with the outcome, so only
//! one notification per save is ever on screen.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// How long success/error toasts stay up before auto-dismissal.
pub const TOAST_TTL_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Loading,
    Success,
    Error,
}

impl ToastKind {
    /// Loading toasts stay until replaced; outcomes expire.
    pub fn expires(self) -> bool {
        !matches!(self, ToastKind::Loading)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, kind, message: message.into() });
        id
    }

    /// Swap the toast `id` for a new one, keeping its position.
    ///
    /// Pushes a fresh toast when `id` is already gone.
    pub fn replace(&mut self, id: u64, kind: ToastKind, message: impl Into<String>) -> u64 {
        let message = message.into();
        self.next_id += 1;
        let new_id = self.next_id;
        match self.items.iter_mut().find(|t| t.id == id) {
            Some(slot) => *slot = Toast { id: new_id, kind, message },
            None => self.items.push(Toast { id: new_id, kind, message }),
        }
        new_id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }
}
