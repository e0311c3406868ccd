/// UI module - panels and rendering components
pub mod calendar_panel;
pub mod layout;
pub mod logs_panel;
pub mod proceed_button;
pub mod time_slots_panel;

pub use calendar_panel::CalendarPanel;
pub use layout::{render_layout, scheduler_regions, SchedulerRegions};
pub use logs_panel::LogsPanel;
pub use proceed_button::ProceedButton;
pub use time_slots_panel::TimeSlotsPanel;
