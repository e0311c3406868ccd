pub mod anchors;
pub mod calendar;
pub mod clock;
pub mod config;
pub mod exceptions;
pub mod locale;
mod macros;
pub mod notify;
pub mod scheduler;
pub mod slots;

// public api
pub use anchors::{Anchor, AnchorHost, AnchorSet};
pub use calendar::{DayCell, DayKind, Direction, MonthGrid, ViewCursor, GRID_CELLS};
pub use clock::{Clock, FixedClock, SystemClock};
pub use exceptions::GenericError;
pub use locale::{LocaleLabeler, MonthLabeler};
pub use notify::{JsonLinesListener, LogListener, SelectionListener};
pub use scheduler::{ConsultationScheduler, ConsultationSelection, SchedulerPhase};
pub use slots::{SlotButton, TimeSlot, AVAILABLE_TIME_SLOTS};
