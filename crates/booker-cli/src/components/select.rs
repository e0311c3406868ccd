use super::resolve_now;
use booker_core::{
    get_booker_setting, ConsultationScheduler, ConsultationSelection, Direction, GenericError,
    JsonLinesListener, LocaleLabeler, LogListener, SelectionListener, ViewCursor,
};
use chrono::NaiveDate;
use std::io;
use std::process::ExitCode;
use std::sync::Arc;

/// Pick a date and a time slot, then proceed. The notification is printed
/// to stdout as one line of JSON
#[derive(clap::Args)]
pub struct SelectArgs {
    /// Consultation date (YYYY-MM-DD)
    #[arg(long, short)]
    pub date: NaiveDate,

    /// Time slot label exactly as listed by `booker slots`
    #[arg(long, short)]
    pub slot: String,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long, short)]
    pub today: Option<NaiveDate>,

    /// Offset of the consultation time zone from UTC, in minutes.
    /// Defaults to BOOKER_UTC_OFFSET_MINUTES when --today is given
    #[arg(long, short, allow_hyphen_values = true)]
    pub utc_offset_minutes: Option<i64>,
}

pub fn handle_select(args: SelectArgs) -> ExitCode {
    let stdout_listener = JsonLinesListener::new(io::stdout());
    let listeners: [&dyn SelectionListener; 2] = [&LogListener, &stdout_listener];
    match run_select(&args, &listeners) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Drive a freshly mounted scheduler through select, select, proceed
pub(crate) fn run_select(
    args: &SelectArgs,
    listeners: &[&dyn SelectionListener],
) -> Result<ConsultationSelection, GenericError> {
    let now = resolve_now(args.today, args.utc_offset_minutes)?;
    let labeler = Arc::new(LocaleLabeler::new(get_booker_setting!(BOOKER_LOCALE)));
    let mut scheduler = ConsultationScheduler::new(now, labeler);

    show_month(&mut scheduler, ViewCursor::from_date(args.date));
    scheduler.select_date(args.date)?;
    scheduler.select_time_slot_label(&args.slot)?;

    let selection = scheduler.proceed().ok_or_else(|| {
        GenericError::RuntimeError("Proceed is disabled for this selection".to_string())
    })?;
    for listener in listeners {
        listener.on_selection(&selection)?;
    }
    Ok(selection)
}

/// Page the calendar one month at a time until `target` is on screen
fn show_month(scheduler: &mut ConsultationScheduler, target: ViewCursor) {
    let index = |c: ViewCursor| c.year() as i64 * 12 + c.month() as i64;
    let steps = index(target) - index(scheduler.cursor());
    let direction = if steps < 0 {
        Direction::Previous
    } else {
        Direction::Next
    };
    for _ in 0..steps.abs() {
        scheduler.navigate(direction);
    }
}
