/// Action queue shared by key handling and effects. The app loop drains it,
/// reducing each action in the stores before effects see it.
use crate::actions::Action;
use tokio::sync::mpsc;

/// Sending half; cloned into effects so follow-up actions join the same queue
#[derive(Clone)]
pub struct Dispatcher {
    tx: mpsc::UnboundedSender<Action>,
}

impl Dispatcher {
    /// Returns the dispatcher and the raw receiver for the app loop
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Queue an action. A closed loop only logs the dropped action.
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.tx.send(action) {
            log::error!("Failed to dispatch action {:?}", e.0);
        }
    }
}

/// Receiving half, owned by the app loop
pub struct ActionReceiver {
    rx: mpsc::UnboundedReceiver<Action>,
}

impl ActionReceiver {
    pub fn new(rx: mpsc::UnboundedReceiver<Action>) -> Self {
        Self { rx }
    }

    /// Wait for the next queued action; `None` once every sender is gone
    pub async fn recv(&mut self) -> Option<Action> {
        self.rx.recv().await
    }

    /// Take an already queued action without waiting
    pub fn try_recv(&mut self) -> Option<Action> {
        self.rx.try_recv().ok()
    }
}
