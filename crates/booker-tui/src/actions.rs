/// Core Action types for the flux architecture.
/// All state mutations flow through Actions dispatched to the Dispatcher.
use booker_core::{ConsultationSelection, Direction, TimeSlot};
use chrono::NaiveDate;

/// Represents all possible user intents and system events in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // ===== UI Actions (user-initiated) =====
    /// User switched to a different tab
    SwitchTab(TabId),

    /// User changed focus to a different panel
    FocusPanel(PanelId),

    /// User toggled the help overlay
    ToggleHelp,

    // ===== Scheduler Actions (user-initiated) =====
    /// Move the keyboard focus over the day grid by a number of cells
    MoveDayFocus(i32),

    /// Move the keyboard focus over the time-slot list
    MoveSlotFocus(i32),

    /// User picked a day cell
    SelectDate(NaiveDate),

    /// User picked a time slot
    SelectTimeSlot(TimeSlot),

    /// User flipped the calendar one month
    Navigate(Direction),

    /// User pressed the proceed control
    Proceed,

    // ===== System/Effect Actions (emitted by Effects) =====
    /// The selection notification was delivered to every listener
    SelectionEmitted(ConsultationSelection),

    /// Generic error to display to user
    ShowError(String),

    /// Clear any displayed errors
    ClearError,

    /// Application should exit
    Quit,
}

/// Identifies different tabs in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabId {
    Scheduler,
    Logs,
}

/// Identifies the focusable panels of the scheduler tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelId {
    Calendar,
    TimeSlots,
    Proceed,
}

impl PanelId {
    pub fn next(self) -> Self {
        match self {
            Self::Calendar => Self::TimeSlots,
            Self::TimeSlots => Self::Proceed,
            Self::Proceed => Self::Calendar,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Calendar => Self::Proceed,
            Self::TimeSlots => Self::Calendar,
            Self::Proceed => Self::TimeSlots,
        }
    }
}
