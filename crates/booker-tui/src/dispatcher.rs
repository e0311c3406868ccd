/// Central dispatcher for the flux architecture.
/// Receives Actions and forwards them to Stores and Effects.
use crate::actions::Action;
use tokio::sync::mpsc;

/// The Dispatcher is responsible for routing Actions to all registered handlers
#[derive(Clone)]
pub struct Dispatcher {
    tx: mpsc::UnboundedSender<Action>,
}

impl Dispatcher {
    /// Create a new Dispatcher with a receiver for processing actions
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Dispatch an action through the system.
    /// This is the main entry point for all state changes
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.tx.send(action) {
            log::error!("Failed to dispatch action {:?}: receiver dropped", e.0);
        }
    }
}

/// ActionReceiver hands queued actions to the app loop one at a time
pub struct ActionReceiver {
    rx: mpsc::UnboundedReceiver<Action>,
}

impl ActionReceiver {
    pub fn new(rx: mpsc::UnboundedReceiver<Action>) -> Self {
        Self { rx }
    }

    /// Receive the next action (waits until one is available)
    pub async fn recv(&mut self) -> Option<Action> {
        self.rx.recv().await
    }

    /// Take an already queued action without waiting
    pub fn try_recv(&mut self) -> Option<Action> {
        self.rx.try_recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::TabId;

    #[tokio::test]
    async fn test_actions_arrive_in_order() {
        let (dispatcher, rx) = Dispatcher::new();
        let mut receiver = ActionReceiver::new(rx);

        dispatcher.dispatch(Action::SwitchTab(TabId::Logs));
        dispatcher.dispatch(Action::Quit);

        assert_eq!(receiver.recv().await, Some(Action::SwitchTab(TabId::Logs)));
        assert_eq!(receiver.recv().await, Some(Action::Quit));
        assert_eq!(receiver.try_recv(), None);
    }

    #[test]
    fn test_dispatch_after_receiver_dropped_does_not_panic() {
        let (dispatcher, rx) = Dispatcher::new();
        drop(rx);
        dispatcher.dispatch(Action::Quit);
    }
}
