use booker_core::{
    AnchorSet, ConsultationScheduler, DayKind, Direction, FixedClock, JsonLinesListener,
    LocaleLabeler, SchedulerPhase, SelectionListener, TimeSlot, ViewCursor, GRID_CELLS,
};
use chrono::{Datelike, FixedOffset, NaiveDate};
use std::sync::Arc;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Widget loaded on Saturday 2024-06-15 with the host clock on UTC
fn mounted_on_june_15() -> ConsultationScheduler {
    let clock = FixedClock::at_midnight(ymd(2024, 6, 15), FixedOffset::east_opt(0).unwrap());
    ConsultationScheduler::mount(
        &AnchorSet::complete(),
        &clock,
        Arc::new(LocaleLabeler::new("ar")),
    )
    .expect("all anchors present")
}

#[test]
fn test_initial_june_layout() {
    let scheduler = mounted_on_june_15();
    assert_eq!(scheduler.cursor(), ViewCursor::new(2024, 5).unwrap());
    assert_eq!(scheduler.phase(), SchedulerPhase::Initial);

    let grid = scheduler.calendar();
    assert_eq!(grid.cells.len(), GRID_CELLS);
    assert_eq!(grid.label, "يونيو ٢٠٢٤");

    let leading: Vec<u32> = grid.cells[..6].iter().map(|c| c.day).collect();
    assert_eq!(leading, vec![26, 27, 28, 29, 30, 31]);
    assert!(grid.cells[..6].iter().all(|c| c.kind == DayKind::OutsideMonth));
    assert!(grid.cells[..6].iter().all(|c| c.date.month() == 5));

    let june = &grid.cells[6..36];
    assert!(june[..15].iter().all(|c| c.kind == DayKind::Past));
    assert!(june[15..].iter().all(|c| c.kind == DayKind::Selectable));
    assert_eq!(grid.selectable_count(), 15);

    let trailing: Vec<u32> = grid.cells[36..].iter().map(|c| c.day).collect();
    assert_eq!(trailing, vec![1, 2, 3, 4, 5, 6]);
    assert!(grid.cells[36..].iter().all(|c| c.kind == DayKind::OutsideMonth));
}

#[test]
fn test_select_and_proceed_emits_notification() {
    let mut scheduler = mounted_on_june_15();
    let grid = scheduler.calendar();
    let day_20 = grid
        .cells
        .iter()
        .find(|c| c.kind != DayKind::OutsideMonth && c.day == 20)
        .and_then(|c| c.target())
        .unwrap();

    assert_eq!(
        scheduler.select_date(day_20).unwrap(),
        SchedulerPhase::PartialSelection
    );
    assert!(!scheduler.is_proceed_enabled());
    assert_eq!(
        scheduler
            .select_time_slot_label("10:00 - 10:30 ( BST )")
            .unwrap(),
        SchedulerPhase::ReadyToProceed
    );

    let listener = JsonLinesListener::new(Vec::new());
    let selection = scheduler.proceed().unwrap();
    listener.on_selection(&selection).unwrap();

    assert_eq!(selection.date_iso.as_deref(), Some("2024-06-20T00:00:00.000Z"));
    assert_eq!(selection.time_slot, TimeSlot::find("10:00 - 10:30 ( BST )"));

    let out = String::from_utf8(listener.into_inner()).unwrap();
    assert_eq!(out.lines().count(), 1);
    assert!(out.contains(r#""timeSlot":"10:00 - 10:30 ( BST )""#));
}

#[test]
fn test_selection_survives_navigation_round_trip() {
    let mut scheduler = mounted_on_june_15();
    scheduler.select_date(ymd(2024, 6, 20)).unwrap();

    scheduler.navigate(Direction::Next);
    let july = scheduler.calendar();
    assert_eq!(july.selected_cell(), None);
    assert_eq!(scheduler.selected_date(), Some(ymd(2024, 6, 20)));

    scheduler.navigate(Direction::Previous);
    let june = scheduler.calendar();
    let idx = june.selected_cell().unwrap();
    assert_eq!(june.cells[idx].date, ymd(2024, 6, 20));
    assert_eq!(june.cells.iter().filter(|c| c.selected).count(), 1);
}

#[test]
fn test_rendering_is_idempotent() {
    let mut scheduler = mounted_on_june_15();
    scheduler.select_date(ymd(2024, 6, 28)).unwrap();
    scheduler
        .select_time_slot_label("12:00 - 12:30 ( BST )")
        .unwrap();

    assert_eq!(scheduler.calendar(), scheduler.calendar());
    assert_eq!(scheduler.render_time_slots(), scheduler.render_time_slots());

    let cursor = ViewCursor::new(2031, 1).unwrap();
    assert_eq!(
        scheduler.render_calendar(cursor),
        scheduler.render_calendar(cursor)
    );
}

#[test]
fn test_later_months_fully_selectable() {
    let mut scheduler = mounted_on_june_15();
    scheduler.navigate(Direction::Next);
    let july = scheduler.calendar();
    assert_eq!(july.selectable_count(), 31);
    assert!(july
        .cells
        .iter()
        .all(|c| c.kind != DayKind::Past));

    // a past month offers nothing
    scheduler.navigate(Direction::Previous);
    scheduler.navigate(Direction::Previous);
    assert_eq!(scheduler.calendar().selectable_count(), 0);
}

#[test]
fn test_missing_anchor_leaves_widget_inert() {
    let clock = FixedClock::at_midnight(ymd(2024, 6, 15), FixedOffset::east_opt(0).unwrap());
    let host = AnchorSet::complete().without(booker_core::Anchor::CalendarGrid);
    assert!(
        ConsultationScheduler::mount(&host, &clock, Arc::new(LocaleLabeler::new("ar"))).is_none()
    );
}
