/// The consultation scheduler: one month view, one date, one time slot.
///
/// All state is private and only changes through the operations below. Every
/// render is computed from the full state, so calling a render twice without an
/// intervening operation yields identical output.
use crate::anchors::{first_missing, AnchorHost};
use crate::calendar::{build_month_grid, Direction, MonthGrid, ViewCursor};
use crate::clock::Clock;
use crate::exceptions::GenericError;
use crate::locale::{month_year_label, MonthLabeler};
use crate::slots::{SlotButton, TimeSlot, AVAILABLE_TIME_SLOTS};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, SecondsFormat};
use log::{debug, info};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerPhase {
    /// Nothing chosen yet
    Initial,
    /// Exactly one of date or time slot chosen
    PartialSelection,
    ReadyToProceed,
}

/// Payload handed to the next booking step when the user proceeds
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsultationSelection {
    #[serde(rename = "dateISO")]
    pub date_iso: Option<String>,
    #[serde(rename = "timeSlot")]
    pub time_slot: Option<TimeSlot>,
}

#[derive(Clone)]
pub struct ConsultationScheduler {
    today: NaiveDate,
    offset: FixedOffset,
    labeler: Arc<dyn MonthLabeler + Send + Sync>,
    catalog: &'static [TimeSlot],
    cursor: ViewCursor,
    selected_date: Option<NaiveDate>,
    selected_slot: Option<TimeSlot>,
}

impl std::fmt::Debug for ConsultationScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsultationScheduler")
            .field("today", &self.today)
            .field("offset", &self.offset)
            .field("cursor", &self.cursor)
            .field("selected_date", &self.selected_date)
            .field("selected_slot", &self.selected_slot)
            .finish()
    }
}

impl ConsultationScheduler {
    /// Mount against a host. Returns `None` without complaint when the host is
    /// missing any of the required anchors; the widget then simply does not exist.
    pub fn mount(
        host: &impl AnchorHost,
        clock: &impl Clock,
        labeler: Arc<dyn MonthLabeler + Send + Sync>,
    ) -> Option<Self> {
        if let Some(anchor) = first_missing(host) {
            debug!(
                "Scheduler not mounted: {}",
                GenericError::MissingAnchor(anchor)
            );
            return None;
        }
        let scheduler = Self::new(clock.now(), labeler);
        info!(
            "Scheduler mounted for {} ({} time slots)",
            scheduler.today,
            scheduler.catalog.len()
        );
        Some(scheduler)
    }

    /// Build a scheduler for the given "now" without consulting any host
    pub fn new(now: DateTime<FixedOffset>, labeler: Arc<dyn MonthLabeler + Send + Sync>) -> Self {
        let today = now.date_naive();
        Self {
            today,
            offset: *now.offset(),
            labeler,
            catalog: &AVAILABLE_TIME_SLOTS,
            cursor: ViewCursor::from_date(today),
            selected_date: None,
            selected_slot: None,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn cursor(&self) -> ViewCursor {
        self.cursor
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn selected_time_slot(&self) -> Option<TimeSlot> {
        self.selected_slot
    }

    pub fn catalog(&self) -> &'static [TimeSlot] {
        self.catalog
    }

    pub fn render_time_slots(&self) -> Vec<SlotButton> {
        self.catalog
            .iter()
            .map(|slot| SlotButton {
                slot: *slot,
                active: self.selected_slot == Some(*slot),
            })
            .collect()
    }

    /// Render an arbitrary month. The cursor must already be normalised, which
    /// `ViewCursor` guarantees by construction.
    pub fn render_calendar(&self, cursor: ViewCursor) -> MonthGrid {
        let label = month_year_label(self.labeler.as_ref(), cursor.year(), cursor.month());
        build_month_grid(cursor, self.today, self.selected_date, label)
    }

    /// Render the month under the view cursor
    pub fn calendar(&self) -> MonthGrid {
        self.render_calendar(self.cursor)
    }

    /// Select a day of the viewed month that is not in the past. Anything
    /// else is rejected and leaves the state untouched.
    pub fn select_date(&mut self, date: NaiveDate) -> Result<SchedulerPhase, GenericError> {
        if !self.cursor.contains(date) || date < self.today {
            return Err(GenericError::DateNotSelectable(date));
        }
        self.selected_date = Some(date);
        debug!("Selected date {}", date);
        Ok(self.phase())
    }

    pub fn select_time_slot(&mut self, slot: TimeSlot) -> Result<SchedulerPhase, GenericError> {
        if !self.catalog.contains(&slot) {
            return Err(GenericError::UnknownTimeSlot(slot.label().to_string()));
        }
        self.selected_slot = Some(slot);
        debug!("Selected time slot {}", slot);
        Ok(self.phase())
    }

    /// Select a slot by its exact label
    pub fn select_time_slot_label(&mut self, label: &str) -> Result<SchedulerPhase, GenericError> {
        let slot = TimeSlot::find(label)
            .ok_or_else(|| GenericError::UnknownTimeSlot(label.to_string()))?;
        self.select_time_slot(slot)
    }

    /// Move the view one month. Selection is left alone.
    pub fn navigate(&mut self, direction: Direction) -> ViewCursor {
        self.cursor = self.cursor.step(direction);
        debug!(
            "Calendar moved to {}-{:02}",
            self.cursor.year(),
            self.cursor.month() + 1
        );
        self.cursor
    }

    pub fn is_proceed_enabled(&self) -> bool {
        self.selected_date.is_some() && self.selected_slot.is_some()
    }

    pub fn phase(&self) -> SchedulerPhase {
        match (self.selected_date.is_some(), self.selected_slot.is_some()) {
            (false, false) => SchedulerPhase::Initial,
            (true, true) => SchedulerPhase::ReadyToProceed,
            _ => SchedulerPhase::PartialSelection,
        }
    }

    /// Produce the selection notification. `None` while proceeding is disabled.
    pub fn proceed(&self) -> Option<ConsultationSelection> {
        if !self.is_proceed_enabled() {
            debug!("Proceed ignored: selection incomplete");
            return None;
        }
        let selection = ConsultationSelection {
            date_iso: self.selected_date.and_then(|d| self.date_iso(d)),
            time_slot: self.selected_slot,
        };
        info!(
            "Consultation selected: {} at {}",
            selection.date_iso.as_deref().unwrap_or("-"),
            selection.time_slot.map(|s| s.label()).unwrap_or("-")
        );
        Some(selection)
    }

    /// Local midnight of `date` in the scheduler's zone, expressed in UTC
    fn date_iso(&self, date: NaiveDate) -> Option<String> {
        let local = date.and_time(NaiveTime::MIN);
        let utc = local.checked_sub_signed(chrono::Duration::seconds(
            self.offset.local_minus_utc() as i64,
        ))?;
        Some(utc.and_utc().to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchors::{Anchor, AnchorSet};
    use crate::clock::FixedClock;
    use crate::locale::LocaleLabeler;
    use chrono::Datelike;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn scheduler_at(today: NaiveDate, offset_secs: i32) -> ConsultationScheduler {
        let clock = FixedClock::at_midnight(today, FixedOffset::east_opt(offset_secs).unwrap());
        ConsultationScheduler::new(clock.now(), Arc::new(LocaleLabeler::new("en")))
    }

    #[test]
    fn test_mount_requires_every_anchor() {
        let clock = FixedClock::at_midnight(ymd(2024, 6, 15), FixedOffset::east_opt(0).unwrap());
        let labeler = Arc::new(LocaleLabeler::new("ar"));
        for anchor in Anchor::ALL {
            let host = AnchorSet::complete().without(anchor);
            assert!(ConsultationScheduler::mount(&host, &clock, labeler.clone()).is_none());
        }
        assert!(ConsultationScheduler::mount(&AnchorSet::complete(), &clock, labeler).is_some());
    }

    #[test]
    fn test_enablement_quadrants() {
        let mut s = scheduler_at(ymd(2024, 6, 15), 0);
        assert!(!s.is_proceed_enabled());
        assert_eq!(s.phase(), SchedulerPhase::Initial);

        let mut date_only = s.clone();
        date_only.select_date(ymd(2024, 6, 20)).unwrap();
        assert!(!date_only.is_proceed_enabled());
        assert_eq!(date_only.phase(), SchedulerPhase::PartialSelection);

        let mut slot_only = s.clone();
        slot_only.select_time_slot(AVAILABLE_TIME_SLOTS[0]).unwrap();
        assert!(!slot_only.is_proceed_enabled());
        assert_eq!(slot_only.phase(), SchedulerPhase::PartialSelection);

        s.select_date(ymd(2024, 6, 20)).unwrap();
        let phase = s.select_time_slot(AVAILABLE_TIME_SLOTS[0]).unwrap();
        assert_eq!(phase, SchedulerPhase::ReadyToProceed);
        assert!(s.is_proceed_enabled());
    }

    #[test]
    fn test_rejects_past_and_padding_dates() {
        let mut s = scheduler_at(ymd(2024, 6, 15), 0);
        assert_eq!(
            s.select_date(ymd(2024, 6, 14)),
            Err(GenericError::DateNotSelectable(ymd(2024, 6, 14)))
        );
        // July 1 is trailing padding while June is viewed
        assert!(s.select_date(ymd(2024, 7, 1)).is_err());
        assert_eq!(s.selected_date(), None);
        assert!(s.select_date(ymd(2024, 6, 15)).is_ok());
    }

    #[test]
    fn test_reselecting_replaces_selection() {
        let mut s = scheduler_at(ymd(2024, 6, 15), 0);
        s.select_date(ymd(2024, 6, 20)).unwrap();
        s.select_date(ymd(2024, 6, 20)).unwrap();
        assert_eq!(s.calendar().cells.iter().filter(|c| c.selected).count(), 1);

        s.select_date(ymd(2024, 6, 22)).unwrap();
        let grid = s.calendar();
        assert_eq!(grid.cells[grid.selected_cell().unwrap()].date, ymd(2024, 6, 22));
        assert_eq!(grid.cells.iter().filter(|c| c.selected).count(), 1);

        s.select_time_slot(AVAILABLE_TIME_SLOTS[1]).unwrap();
        s.select_time_slot(AVAILABLE_TIME_SLOTS[3]).unwrap();
        let active: Vec<_> = s.render_time_slots().into_iter().filter(|b| b.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].slot, AVAILABLE_TIME_SLOTS[3]);
    }

    #[test]
    fn test_unknown_slot_label_rejected() {
        let mut s = scheduler_at(ymd(2024, 6, 15), 0);
        assert_eq!(
            s.select_time_slot_label("14:00 - 14:30 ( BST )"),
            Err(GenericError::UnknownTimeSlot("14:00 - 14:30 ( BST )".to_string()))
        );
        assert_eq!(s.phase(), SchedulerPhase::Initial);
    }

    #[test]
    fn test_navigate_keeps_selection() {
        let mut s = scheduler_at(ymd(2024, 12, 30), 0);
        s.select_date(ymd(2024, 12, 31)).unwrap();
        assert_eq!(s.navigate(Direction::Next), ViewCursor::new(2025, 0).unwrap());
        assert_eq!(s.selected_date(), Some(ymd(2024, 12, 31)));
        assert_eq!(s.calendar().selected_cell(), None);
        assert_eq!(s.navigate(Direction::Previous), ViewCursor::new(2024, 11).unwrap());
        assert!(s.calendar().selected_cell().is_some());
    }

    #[test]
    fn test_proceed_disabled_is_noop() {
        let mut s = scheduler_at(ymd(2024, 6, 15), 0);
        assert_eq!(s.proceed(), None);
        s.select_time_slot(AVAILABLE_TIME_SLOTS[2]).unwrap();
        assert_eq!(s.proceed(), None);
    }

    #[test]
    fn test_date_iso_uses_local_midnight() {
        let mut s = scheduler_at(ymd(2024, 6, 15), 3600);
        s.select_date(ymd(2024, 6, 20)).unwrap();
        s.select_time_slot(AVAILABLE_TIME_SLOTS[1]).unwrap();
        let selection = s.proceed().unwrap();
        assert_eq!(selection.date_iso.as_deref(), Some("2024-06-19T23:00:00.000Z"));
    }

    #[test]
    fn test_select_date_checks_month_and_today() {
        let mut s = scheduler_at(ymd(2024, 6, 15), 0);
        // padding on either side and a date far away
        assert!(s.select_date(ymd(2024, 5, 31)).is_err());
        assert!(s.select_date(ymd(2024, 7, 6)).is_err());
        assert!(s.select_date(ymd(2030, 6, 20)).is_err());
        assert!(s.select_date(ymd(2024, 6, 30)).is_ok());

        s.navigate(Direction::Next);
        assert!(s.select_date(ymd(2024, 7, 6)).is_ok());
        assert_eq!(s.selected_date(), Some(ymd(2024, 7, 6)));
    }

    #[test]
    fn test_proceed_in_last_viewable_month() {
        let last_year = NaiveDate::MAX.year();
        let mut s = scheduler_at(ymd(last_year, 11, 15), -23 * 3600);
        let november = ViewCursor::new(last_year, 10).unwrap();
        assert_eq!(s.cursor(), november);
        assert_eq!(s.navigate(Direction::Next), november);

        s.select_date(ymd(last_year, 11, 30)).unwrap();
        s.select_time_slot(AVAILABLE_TIME_SLOTS[0]).unwrap();
        let selection = s.proceed().unwrap();
        assert!(selection.date_iso.is_some());
    }

    #[test]
    fn test_today_at_chrono_max_has_nothing_selectable() {
        let mut s = scheduler_at(NaiveDate::MAX, 0);
        assert_eq!(s.cursor(), ViewCursor::new(NaiveDate::MAX.year(), 10).unwrap());
        assert_eq!(s.calendar().selectable_count(), 0);
        assert_eq!(
            s.select_date(NaiveDate::MAX),
            Err(GenericError::DateNotSelectable(NaiveDate::MAX))
        );
    }

    #[test]
    fn test_selection_wire_format() {
        let selection = ConsultationSelection {
            date_iso: Some("2024-06-20T00:00:00.000Z".to_string()),
            time_slot: Some(AVAILABLE_TIME_SLOTS[1]),
        };
        assert_eq!(
            serde_json::to_string(&selection).unwrap(),
            r#"{"dateISO":"2024-06-20T00:00:00.000Z","timeSlot":"10:00 - 10:30 ( BST )"}"#
        );
        let empty = ConsultationSelection {
            date_iso: None,
            time_slot: None,
        };
        assert_eq!(
            serde_json::to_string(&empty).unwrap(),
            r#"{"dateISO":null,"timeSlot":null}"#
        );
    }
}
