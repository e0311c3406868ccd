/// Keyboard and mouse input handling
use crate::actions::{Action, PanelId, TabId};
use crate::stores::{AppLogsStore, SchedulerStore, UIStore};
use crate::ui::SchedulerRegions;
use booker_core::Direction;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::crossterm;

/// Handle keyboard input and return the appropriate Action
pub fn handle_key_event(
    key_event: KeyEvent,
    ui_store: &UIStore,
    scheduler_store: &SchedulerStore,
    app_logs_store: &AppLogsStore,
) -> Option<Action> {
    let ui_state = ui_store.get_state();

    match key_event.code {
        // Global keys
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Esc if ui_state.show_help => Some(Action::ToggleHelp),
        KeyCode::Esc if ui_state.error_message.is_some() => Some(Action::ClearError),

        // Tab switching
        KeyCode::Char('1') => Some(Action::SwitchTab(TabId::Scheduler)),
        KeyCode::Char('2') => Some(Action::SwitchTab(TabId::Logs)),

        // Tab-specific navigation
        _ => match ui_state.active_tab {
            TabId::Scheduler => {
                handle_scheduler_tab_keys(key_event, ui_state.focused_panel, scheduler_store)
            }
            TabId::Logs => handle_logs_tab_keys(key_event, app_logs_store),
        },
    }
}

fn handle_scheduler_tab_keys(
    key_event: KeyEvent,
    focused_panel: PanelId,
    scheduler_store: &SchedulerStore,
) -> Option<Action> {
    match key_event.code {
        KeyCode::Tab => Some(Action::FocusPanel(focused_panel.next())),
        KeyCode::BackTab => Some(Action::FocusPanel(focused_panel.previous())),

        // Month navigation from any panel
        KeyCode::Char('[') | KeyCode::Char('<') => Some(Action::Navigate(Direction::Previous)),
        KeyCode::Char(']') | KeyCode::Char('>') => Some(Action::Navigate(Direction::Next)),

        KeyCode::Char('p') | KeyCode::Char('P') => proceed_if_enabled(scheduler_store),

        _ => match focused_panel {
            PanelId::Calendar => handle_calendar_keys(key_event, scheduler_store),
            PanelId::TimeSlots => handle_time_slot_keys(key_event, scheduler_store),
            PanelId::Proceed => match key_event.code {
                KeyCode::Enter | KeyCode::Char(' ') => proceed_if_enabled(scheduler_store),
                _ => None,
            },
        },
    }
}

fn handle_calendar_keys(key_event: KeyEvent, scheduler_store: &SchedulerStore) -> Option<Action> {
    match key_event.code {
        KeyCode::Char('h') | KeyCode::Left => Some(Action::MoveDayFocus(-1)),
        KeyCode::Char('l') | KeyCode::Right => Some(Action::MoveDayFocus(1)),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveDayFocus(-7)),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveDayFocus(7)),

        // Past and padding days have no target
        KeyCode::Enter | KeyCode::Char(' ') => scheduler_store
            .focused_date_target()
            .map(Action::SelectDate),

        _ => None,
    }
}

fn handle_time_slot_keys(key_event: KeyEvent, scheduler_store: &SchedulerStore) -> Option<Action> {
    match key_event.code {
        KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveSlotFocus(-1)),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveSlotFocus(1)),
        KeyCode::Enter | KeyCode::Char(' ') => {
            scheduler_store.focused_slot().map(Action::SelectTimeSlot)
        }
        _ => None,
    }
}

fn handle_logs_tab_keys(key_event: KeyEvent, app_logs_store: &AppLogsStore) -> Option<Action> {
    match key_event.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app_logs_store.scroll_down(1);
            None // No action needed, store updated directly
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app_logs_store.scroll_up(1);
            None
        }
        KeyCode::PageDown => {
            app_logs_store.scroll_down(10);
            None
        }
        KeyCode::PageUp => {
            app_logs_store.scroll_up(10);
            None
        }
        KeyCode::Char('g') => {
            app_logs_store.scroll_to_bottom();
            None
        }

        _ => None,
    }
}

fn proceed_if_enabled(scheduler_store: &SchedulerStore) -> Option<Action> {
    scheduler_store
        .is_proceed_enabled()
        .then_some(Action::Proceed)
}

/// Handle a left click on the scheduler tab
pub fn handle_mouse_event(
    mouse_event: MouseEvent,
    ui_store: &UIStore,
    regions: &SchedulerRegions,
    scheduler_store: &SchedulerStore,
) -> Option<Action> {
    if mouse_event.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    let ui_state = ui_store.get_state();
    if ui_state.active_tab != TabId::Scheduler || ui_state.show_help {
        return None;
    }
    if !scheduler_store.is_mounted() {
        return None;
    }

    let (col, row) = (mouse_event.column, mouse_event.row);
    if let Some(idx) = regions.cell_at(col, row) {
        return scheduler_store.cell_target(idx).map(Action::SelectDate);
    }
    if let Some(idx) = regions.slot_at(col, row) {
        return scheduler_store.slot_at(idx).map(Action::SelectTimeSlot);
    }
    if regions.is_previous(col, row) {
        return Some(Action::Navigate(Direction::Previous));
    }
    if regions.is_next(col, row) {
        return Some(Action::Navigate(Direction::Next));
    }
    if regions.is_proceed(col, row) {
        return proceed_if_enabled(scheduler_store);
    }
    None
}
