/// SchedulerStore owns the mounted consultation scheduler and the keyboard
/// focus over its day grid and slot list
use crate::actions::Action;
use booker_core::{
    ConsultationScheduler, ConsultationSelection, MonthGrid, SchedulerPhase, SlotButton, TimeSlot,
    GRID_CELLS,
};
use chrono::NaiveDate;
use std::sync::{Arc, RwLock};

/// Snapshot handed to the UI for rendering
#[derive(Debug, Clone)]
pub struct SchedulerState {
    /// None when the scheduler did not mount
    pub grid: Option<MonthGrid>,

    pub slots: Vec<SlotButton>,

    pub phase: Option<SchedulerPhase>,

    pub proceed_enabled: bool,

    pub today: Option<NaiveDate>,

    /// Index into the 42 day cells
    pub focused_cell: usize,

    /// Index into the slot list
    pub focused_slot: usize,
}

struct Inner {
    scheduler: Option<ConsultationScheduler>,
    focused_cell: usize,
    focused_slot: usize,
}

/// Store that holds the scheduler widget
#[derive(Clone)]
pub struct SchedulerStore {
    inner: Arc<RwLock<Inner>>,
}

impl SchedulerStore {
    pub fn new(scheduler: Option<ConsultationScheduler>) -> Self {
        let focused_cell = scheduler
            .as_ref()
            .map(|s| default_focus(&s.calendar()))
            .unwrap_or(0);
        Self {
            inner: Arc::new(RwLock::new(Inner {
                scheduler,
                focused_cell,
                focused_slot: 0,
            })),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.read(|inner| inner.scheduler.is_some())
    }

    /// Get a read-only snapshot of the current state
    pub fn get_state(&self) -> SchedulerState {
        self.read(|inner| match &inner.scheduler {
            Some(s) => SchedulerState {
                grid: Some(s.calendar()),
                slots: s.render_time_slots(),
                phase: Some(s.phase()),
                proceed_enabled: s.is_proceed_enabled(),
                today: Some(s.today()),
                focused_cell: inner.focused_cell,
                focused_slot: inner.focused_slot,
            },
            None => SchedulerState {
                grid: None,
                slots: Vec::new(),
                phase: None,
                proceed_enabled: false,
                today: None,
                focused_cell: 0,
                focused_slot: 0,
            },
        })
    }

    /// Reducer: handle an action and update state accordingly
    pub fn reduce(&self, action: &Action) {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        let Inner {
            scheduler,
            focused_cell,
            focused_slot,
        } = &mut *inner;
        let Some(scheduler) = scheduler.as_mut() else {
            // inert: nothing to update
            return;
        };

        match action {
            Action::MoveDayFocus(delta) => {
                let next = *focused_cell as i64 + *delta as i64;
                *focused_cell = next.clamp(0, GRID_CELLS as i64 - 1) as usize;
            }

            Action::MoveSlotFocus(delta) => {
                let len = scheduler.catalog().len() as i64;
                if len > 0 {
                    *focused_slot = (*focused_slot as i64 + *delta as i64).rem_euclid(len) as usize;
                }
            }

            Action::SelectDate(date) => match scheduler.select_date(*date) {
                Ok(phase) => {
                    log::debug!("Date {} selected, now {:?}", date, phase);
                    if let Some(idx) = scheduler.calendar().index_of(*date) {
                        *focused_cell = idx;
                    }
                }
                Err(e) => log::warn!("Ignoring date selection: {}", e),
            },

            Action::SelectTimeSlot(slot) => match scheduler.select_time_slot(*slot) {
                Ok(phase) => {
                    log::debug!("Time slot {} selected, now {:?}", slot, phase);
                    if let Some(idx) = scheduler.catalog().iter().position(|s| s == slot) {
                        *focused_slot = idx;
                    }
                }
                Err(e) => log::warn!("Ignoring time slot selection: {}", e),
            },

            Action::Navigate(direction) => {
                scheduler.navigate(*direction);
                *focused_cell = default_focus(&scheduler.calendar());
            }

            _ => {
                // Ignore actions not relevant to this store
            }
        }
    }

    /// The notification payload, or None while proceeding is disabled
    pub fn proceed(&self) -> Option<ConsultationSelection> {
        self.read(|inner| inner.scheduler.as_ref().and_then(|s| s.proceed()))
    }

    pub fn is_proceed_enabled(&self) -> bool {
        self.read(|inner| {
            inner
                .scheduler
                .as_ref()
                .map(|s| s.is_proceed_enabled())
                .unwrap_or(false)
        })
    }

    /// Date selected by activating the focused cell, if that cell is selectable
    pub fn focused_date_target(&self) -> Option<NaiveDate> {
        self.cell_target(self.read(|inner| inner.focused_cell))
    }

    /// Date selected by activating cell `idx`, if that cell is selectable
    pub fn cell_target(&self, idx: usize) -> Option<NaiveDate> {
        self.read(|inner| {
            let grid = inner.scheduler.as_ref()?.calendar();
            grid.cells.get(idx).and_then(|c| c.target())
        })
    }

    pub fn focused_slot(&self) -> Option<TimeSlot> {
        self.slot_at(self.read(|inner| inner.focused_slot))
    }

    pub fn slot_at(&self, idx: usize) -> Option<TimeSlot> {
        self.read(|inner| inner.scheduler.as_ref()?.catalog().get(idx).copied())
    }

    fn read<T>(&self, f: impl FnOnce(&Inner) -> T) -> T {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        f(&inner)
    }
}

/// Where keyboard focus lands after a render: the selected cell, else the
/// first selectable one, else the first day of the month
fn default_focus(grid: &MonthGrid) -> usize {
    grid.selected_cell()
        .or_else(|| grid.cells.iter().position(|c| c.is_interactive()))
        .or_else(|| grid.index_of(grid.cursor.first_day()))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use booker_core::{Direction, FixedClock, LocaleLabeler, AVAILABLE_TIME_SLOTS};
    use chrono::FixedOffset;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn june_store() -> SchedulerStore {
        let clock = FixedClock::at_midnight(ymd(2024, 6, 15), FixedOffset::east_opt(0).unwrap());
        let scheduler = ConsultationScheduler::mount(
            &booker_core::AnchorSet::complete(),
            &clock,
            Arc::new(LocaleLabeler::new("en")),
        );
        SchedulerStore::new(scheduler)
    }

    #[test]
    fn test_initial_focus_on_today() {
        let store = june_store();
        let state = store.get_state();
        assert!(store.is_mounted());
        assert!(state.grid.is_some());
        // 6 leading cells + 14 days before the 15th
        assert_eq!(state.focused_cell, 20);
        assert_eq!(store.focused_date_target(), Some(ymd(2024, 6, 15)));
        assert_eq!(state.phase, Some(SchedulerPhase::Initial));
    }

    #[test]
    fn test_disabled_cell_has_no_target() {
        let store = june_store();
        store.reduce(&Action::MoveDayFocus(-1));
        assert_eq!(store.focused_date_target(), None);
        assert_eq!(store.cell_target(0), None);
        assert_eq!(store.cell_target(41), None);
    }

    #[test]
    fn test_focus_clamped_to_grid() {
        let store = june_store();
        store.reduce(&Action::MoveDayFocus(100));
        assert_eq!(store.get_state().focused_cell, 41);
        store.reduce(&Action::MoveDayFocus(-100));
        assert_eq!(store.get_state().focused_cell, 0);
    }

    #[test]
    fn test_slot_focus_wraps() {
        let store = june_store();
        store.reduce(&Action::MoveSlotFocus(-1));
        assert_eq!(store.get_state().focused_slot, 4);
        store.reduce(&Action::MoveSlotFocus(1));
        assert_eq!(store.focused_slot(), Some(AVAILABLE_TIME_SLOTS[0]));
    }

    #[test]
    fn test_full_selection_enables_proceed() {
        let store = june_store();
        store.reduce(&Action::SelectDate(ymd(2024, 6, 20)));
        assert!(!store.is_proceed_enabled());
        assert_eq!(store.proceed(), None);

        store.reduce(&Action::SelectTimeSlot(AVAILABLE_TIME_SLOTS[1]));
        assert!(store.is_proceed_enabled());

        let state = store.get_state();
        assert_eq!(state.phase, Some(SchedulerPhase::ReadyToProceed));
        assert_eq!(state.focused_slot, 1);
        assert!(state.slots[1].active);

        let selection = store.proceed().unwrap();
        assert_eq!(selection.date_iso.as_deref(), Some("2024-06-20T00:00:00.000Z"));
    }

    #[test]
    fn test_rejected_date_keeps_state() {
        let store = june_store();
        store.reduce(&Action::SelectDate(ymd(2024, 6, 1)));
        assert_eq!(store.get_state().phase, Some(SchedulerPhase::Initial));
    }

    #[test]
    fn test_navigation_round_trip_refocuses_selection() {
        let store = june_store();
        store.reduce(&Action::SelectDate(ymd(2024, 6, 20)));
        store.reduce(&Action::Navigate(Direction::Next));

        let july = store.get_state();
        assert_eq!(july.grid.as_ref().unwrap().selected_cell(), None);
        // July 1 2024 is a Monday
        assert_eq!(july.focused_cell, 1);

        store.reduce(&Action::Navigate(Direction::Previous));
        let june = store.get_state();
        assert_eq!(june.grid.as_ref().unwrap().selected_cell(), Some(25));
        assert_eq!(june.focused_cell, 25);
    }

    #[test]
    fn test_inert_store_ignores_actions() {
        let store = SchedulerStore::new(None);
        store.reduce(&Action::SelectTimeSlot(AVAILABLE_TIME_SLOTS[0]));
        store.reduce(&Action::Navigate(Direction::Next));

        let state = store.get_state();
        assert!(!store.is_mounted());
        assert!(state.grid.is_none());
        assert!(state.slots.is_empty());
        assert_eq!(store.proceed(), None);
        assert_eq!(store.focused_slot(), None);
    }

    #[test]
    fn test_emitted_selection_leaves_scheduler_alone() {
        let store = june_store();
        store.reduce(&Action::SelectDate(ymd(2024, 6, 20)));
        store.reduce(&Action::SelectTimeSlot(AVAILABLE_TIME_SLOTS[2]));
        let selection = store.proceed().unwrap();
        let before = store.get_state();

        store.reduce(&Action::SelectionEmitted(selection.clone()));
        let after = store.get_state();
        assert_eq!(after.grid, before.grid);
        assert_eq!(after.phase, Some(SchedulerPhase::ReadyToProceed));
        assert_eq!(after.focused_cell, before.focused_cell);
        assert_eq!(store.proceed(), Some(selection));
    }
}
