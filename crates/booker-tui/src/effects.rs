/// Effects module handles side effects (delivering the selection notification).
/// Effects are triggered by Actions and dispatch new Actions with results
use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::stores::SchedulerStore;
use booker_core::{
    get_booker_setting, ConsultationSelection, GenericError, JsonLinesListener, LogListener,
    SelectionListener,
};
use std::fs::OpenOptions;
use std::sync::Arc;
use tokio::task;

/// Effects handler that executes side effects based on actions
pub struct Effects {
    dispatcher: Dispatcher,
    listeners: Vec<Arc<dyn SelectionListener>>,
    scheduler_store: Option<SchedulerStore>,
}

impl Effects {
    pub fn new(dispatcher: Dispatcher, listeners: Vec<Arc<dyn SelectionListener>>) -> Self {
        Self {
            dispatcher,
            listeners,
            scheduler_store: None,
        }
    }

    pub fn set_scheduler_store(&mut self, store: SchedulerStore) {
        self.scheduler_store = Some(store);
    }

    /// Handle an action and trigger appropriate side effects
    pub fn handle(&self, action: &Action) {
        match action {
            Action::Proceed => self.publish_selection(),
            _ => {
                // No side effects for other actions
            }
        }
    }

    /// Hand the current selection to every listener off the UI thread
    fn publish_selection(&self) {
        let Some(store) = &self.scheduler_store else {
            return;
        };
        let Some(selection) = store.proceed() else {
            log::debug!("Proceed requested while disabled; nothing emitted");
            return;
        };

        let dispatcher = self.dispatcher.clone();
        let listeners = self.listeners.clone();
        task::spawn_blocking(move || {
            match deliver(&listeners, &selection) {
                Ok(()) => dispatcher.dispatch(Action::SelectionEmitted(selection)),
                Err(e) => {
                    log::error!("Failed to deliver consultation selection: {}", e);
                    dispatcher.dispatch(Action::ShowError(e.to_string()));
                }
            }
        });
    }
}

/// Deliver to every listener; the first failure is reported after all have run
fn deliver(
    listeners: &[Arc<dyn SelectionListener>],
    selection: &ConsultationSelection,
) -> Result<(), GenericError> {
    let mut first_err = None;
    for listener in listeners {
        if let Err(e) = listener.on_selection(selection) {
            first_err.get_or_insert(e);
        }
    }
    match first_err {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Listeners configured through the environment: always the log, plus a
/// JSON-lines file when `BOOKER_SELECTION_OUTPUT` is set
pub fn selection_listeners() -> Vec<Arc<dyn SelectionListener>> {
    let mut listeners: Vec<Arc<dyn SelectionListener>> = vec![Arc::new(LogListener)];
    let path = get_booker_setting!(BOOKER_SELECTION_OUTPUT);
    if path.trim().is_empty() {
        return listeners;
    }
    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => {
            log::info!("Consultation selections will be appended to {}", path);
            listeners.push(Arc::new(JsonLinesListener::new(file)));
        }
        Err(e) => log::error!("Cannot open selection output {}: {}", path, e),
    }
    listeners
}
