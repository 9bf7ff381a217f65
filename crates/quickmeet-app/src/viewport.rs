//! Window-width subscription.
//!
//! The host publishes widths into a [`ViewportSignal`]. A meeting room holds
//! a [`ViewportSubscription`] for its whole lifetime; dropping the room drops
//! the subscription, so the listener is released on every exit path.

use tokio::sync::watch;

/// Host-side publisher of the current window width in pixels.
#[derive(Debug)]
pub struct ViewportSignal {
    tx: watch::Sender<u32>,
}

impl ViewportSignal {
    /// Create a signal holding the initial width.
    pub fn new(initial_width_px: u32) -> Self {
        let (tx, _rx) = watch::channel(initial_width_px);
        Self { tx }
    }

    /// Publish a width. Every subscriber observes a change, even if the
    /// width is unchanged.
    pub fn publish(&self, width_px: u32) {
        self.tx.send_replace(width_px);
    }

    /// Last published width.
    pub fn width_px(&self) -> u32 {
        *self.tx.borrow()
    }

    /// Acquire a subscription. Released when the returned guard drops.
    pub fn subscribe(&self) -> ViewportSubscription {
        ViewportSubscription { rx: self.tx.subscribe() }
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

/// Scoped listener on a [`ViewportSignal`].
#[derive(Debug)]
pub struct ViewportSubscription {
    rx: watch::Receiver<u32>,
}

impl ViewportSubscription {
    /// Latest published width.
    pub fn width_px(&self) -> u32 {
        *self.rx.borrow()
    }

    /// Width published since the last call, if any.
    pub fn take_change(&mut self) -> Option<u32> {
        match self.rx.has_changed() {
            Ok(true) => Some(*self.rx.borrow_and_update()),
            Ok(false) | Err(_) => None,
        }
    }
}
