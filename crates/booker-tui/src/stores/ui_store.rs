/// UIStore manages UI-specific state (active tab, focused panel, help, status line)
use crate::actions::{Action, PanelId, TabId};
use std::sync::{Arc, RwLock};

/// Internal state for UI
#[derive(Debug, Clone)]
pub struct UIState {
    /// Currently active tab
    pub active_tab: TabId,

    /// Currently focused panel on the scheduler tab
    pub focused_panel: PanelId,

    /// Whether help overlay is visible
    pub show_help: bool,

    /// Informational message for the header (last emitted selection)
    pub status_message: Option<String>,

    /// Error message to display (if any)
    pub error_message: Option<String>,

    /// Whether the application should exit
    pub should_exit: bool,
}

impl Default for UIState {
    fn default() -> Self {
        Self {
            active_tab: TabId::Scheduler,
            focused_panel: PanelId::Calendar,
            show_help: false,
            status_message: None,
            error_message: None,
            should_exit: false,
        }
    }
}

/// Store that holds UI-related state
#[derive(Clone)]
pub struct UIStore {
    state: Arc<RwLock<UIState>>,
}

impl UIStore {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(UIState::default())),
        }
    }

    /// Get a read-only snapshot of the current state
    pub fn get_state(&self) -> UIState {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Reducer: handle an action and update state accordingly
    pub fn reduce(&self, action: &Action) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());

        match action {
            Action::SwitchTab(tab_id) => {
                state.active_tab = *tab_id;
            }

            Action::FocusPanel(panel_id) => {
                state.focused_panel = *panel_id;
            }

            // clicking or selecting inside a panel moves focus there too
            Action::SelectDate(_) => {
                state.focused_panel = PanelId::Calendar;
            }
            Action::SelectTimeSlot(_) => {
                state.focused_panel = PanelId::TimeSlots;
            }

            Action::ToggleHelp => {
                state.show_help = !state.show_help;
            }

            Action::SelectionEmitted(selection) => {
                state.error_message = None;
                state.status_message = Some(format!(
                    "Sent {} at {}",
                    selection.date_iso.as_deref().unwrap_or("-"),
                    selection.time_slot.map(|s| s.label()).unwrap_or("-")
                ));
            }

            Action::ShowError(message) => {
                state.error_message = Some(message.clone());
            }

            Action::ClearError => {
                state.error_message = None;
            }

            Action::Quit => {
                state.should_exit = true;
            }

            _ => {
                // Ignore actions not relevant to this store
            }
        }
    }

    /// Check if the application should exit
    pub fn should_exit(&self) -> bool {
        self.get_state().should_exit
    }
}
