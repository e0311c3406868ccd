use super::resolve_now;
use booker_core::calendar::WEEKDAY_HEADERS;
use booker_core::{
    get_booker_setting, ConsultationScheduler, DayKind, GenericError, LocaleLabeler, MonthGrid,
    ViewCursor,
};
use chrono::{Datelike, NaiveDate};
use std::process::ExitCode;
use std::sync::Arc;

/// Print the month grid exactly as the scheduler lays it out.
/// Days from neighbouring months end in `.`, days before today in `-`
#[derive(clap::Args)]
pub struct CalendarArgs {
    /// Year to show. Defaults to the current year
    #[arg(long, short)]
    pub year: Option<i32>,

    /// Month to show, 1-12. Defaults to the current month
    #[arg(long, short, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long, short)]
    pub today: Option<NaiveDate>,

    /// Locale tag for the month heading. Defaults to BOOKER_LOCALE
    #[arg(long, short)]
    pub locale: Option<String>,
}

pub fn handle_calendar(args: CalendarArgs) -> ExitCode {
    match month_view(&args) {
        Ok(grid) => {
            print!("{}", render_grid(&grid));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn month_view(args: &CalendarArgs) -> Result<MonthGrid, GenericError> {
    let now = resolve_now(args.today, None)?;
    let locale = args
        .locale
        .clone()
        .unwrap_or_else(|| get_booker_setting!(BOOKER_LOCALE));
    let scheduler = ConsultationScheduler::new(now, Arc::new(LocaleLabeler::new(locale)));

    let today = scheduler.today();
    let year = args.year.unwrap_or(today.year());
    let month = args.month.unwrap_or(today.month());
    let cursor = month
        .checked_sub(1)
        .and_then(|month0| ViewCursor::new(year, month0))
        .ok_or_else(|| GenericError::ParseError(format!("No such month: {year}-{month}")))?;
    Ok(scheduler.render_calendar(cursor))
}

pub(crate) fn render_grid(grid: &MonthGrid) -> String {
    let mut out = format!("{}\n", grid.label);
    for header in WEEKDAY_HEADERS {
        out.push_str(&format!("{:>3} ", header));
    }
    out.push('\n');
    for row in grid.rows() {
        let line: String = row
            .iter()
            .map(|cell| {
                let mark = match (cell.kind, cell.selected) {
                    (DayKind::OutsideMonth, _) => '.',
                    (DayKind::Past, _) => '-',
                    (DayKind::Selectable, true) => '*',
                    (DayKind::Selectable, false) => ' ',
                };
                format!("{:>3}{}", cell.day, mark)
            })
            .collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
