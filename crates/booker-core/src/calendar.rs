/// Month grid model: view cursor, day cell classification and the 42-cell layout
use chrono::{Datelike, Days, NaiveDate};

/// Cells in a rendered month: 6 rows of 7 days
pub const GRID_CELLS: usize = 42;

/// Sunday-first column headers
pub const WEEKDAY_HEADERS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// The month currently shown. `month` is 0-based and always in 0..=11, and
/// the month's 42-cell window always lies inside chrono's date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewCursor {
    year: i32,
    month: u32,
}

impl ViewCursor {
    /// `None` for a month outside 0..=11 or one too close to the ends of
    /// chrono's calendar to lay out
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if month >= 12 {
            return None;
        }
        grid_start(year, month)?;
        Some(Self { year, month })
    }

    /// Cursor on the month of `date`. Dates at the very ends of chrono's
    /// range land on the nearest month that can be laid out.
    pub fn from_date(date: NaiveDate) -> Self {
        let mut cursor = Self {
            year: date.year(),
            month: date.month0(),
        };
        let inward = if date.year() < 0 {
            Direction::Next
        } else {
            Direction::Previous
        };
        while grid_start(cursor.year, cursor.month).is_none() {
            match cursor.raw_step(inward) {
                Some(next) => cursor = next,
                None => break,
            }
        }
        cursor
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Move one month, wrapping December <-> January across the year boundary.
    /// Stays put at the first and last months that can be laid out.
    pub fn step(&self, direction: Direction) -> ViewCursor {
        self.raw_step(direction)
            .and_then(|c| Self::new(c.year, c.month))
            .unwrap_or(*self)
    }

    fn raw_step(&self, direction: Direction) -> Option<ViewCursor> {
        Some(match direction {
            Direction::Next if self.month == 11 => Self {
                year: self.year.checked_add(1)?,
                month: 0,
            },
            Direction::Next => Self {
                year: self.year,
                month: self.month + 1,
            },
            Direction::Previous if self.month == 0 => Self {
                year: self.year.checked_sub(1)?,
                month: 11,
            },
            Direction::Previous => Self {
                year: self.year,
                month: self.month - 1,
            },
        })
    }

    pub fn first_day(&self) -> NaiveDate {
        first_of_month(self.year, self.month)
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month
    }
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap_or(NaiveDate::MIN)
}

/// First cell of the month's grid. `None` unless the whole 42-day window,
/// plus one day either side for offset arithmetic, is representable.
fn grid_start(year: i32, month: u32) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month + 1, 1)?;
    let leading = first.weekday().num_days_from_sunday() as u64;
    let start = first.checked_sub_days(Days::new(leading))?;
    start.checked_sub_days(Days::new(1))?;
    start.checked_add_days(Days::new(GRID_CELLS as u64))?;
    Some(start)
}

/// Number of days in `month` (0-based) of `year`
pub fn days_in_month(year: i32, month: u32) -> u32 {
    ViewCursor { year, month }
        .raw_step(Direction::Next)
        .and_then(|next| NaiveDate::from_ymd_opt(next.year, next.month + 1, 1))
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(31)
}

/// Weekday index of day 1 with Sunday = 0, i.e. the count of leading cells
pub fn leading_days(year: i32, month: u32) -> u32 {
    first_of_month(year, month)
        .weekday()
        .num_days_from_sunday()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    /// Padding from the previous or next month
    OutsideMonth,
    /// In the viewed month but before today
    Past,
    Selectable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub day: u32,
    pub kind: DayKind,
    pub selected: bool,
}

impl DayCell {
    pub fn is_interactive(&self) -> bool {
        self.kind == DayKind::Selectable
    }

    /// Date a click on this cell selects. Disabled cells have none.
    pub fn target(&self) -> Option<NaiveDate> {
        self.is_interactive().then_some(self.date)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub cursor: ViewCursor,
    pub label: String,
    pub cells: Vec<DayCell>,
}

impl MonthGrid {
    pub fn rows(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(7)
    }

    pub fn selected_cell(&self) -> Option<usize> {
        self.cells.iter().position(|c| c.selected)
    }

    pub fn selectable_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_interactive()).count()
    }

    /// Index of the cell showing `date` inside the viewed month
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        self.cells
            .iter()
            .position(|c| c.kind != DayKind::OutsideMonth && c.date == date)
    }
}

/// Lay out the 42 cells for `cursor`: previous-month tail, the month itself,
/// then next-month days up to the end of the sixth row.
pub fn build_month_grid(
    cursor: ViewCursor,
    today: NaiveDate,
    selected: Option<NaiveDate>,
    label: String,
) -> MonthGrid {
    let days = cursor.days_in_month();
    let start = grid_start(cursor.year, cursor.month).unwrap_or_else(|| cursor.first_day());

    let mut cells = Vec::with_capacity(GRID_CELLS);
    for date in start.iter_days().take(GRID_CELLS) {
        let kind = if !cursor.contains(date) {
            DayKind::OutsideMonth
        } else if date < today {
            DayKind::Past
        } else {
            DayKind::Selectable
        };
        cells.push(DayCell {
            date,
            day: date.day(),
            kind,
            selected: kind != DayKind::OutsideMonth && selected == Some(date),
        });
    }
    debug_assert_eq!(
        cells.iter().filter(|c| c.kind != DayKind::OutsideMonth).count(),
        days as usize
    );

    MonthGrid {
        cursor,
        label,
        cells,
    }
}
