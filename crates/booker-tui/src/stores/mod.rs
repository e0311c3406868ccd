/// Store modules that hold application state.
/// Each store is responsible for a slice of the application state
pub mod app_logs_store;
pub mod scheduler_store;
pub mod ui_store;

pub use app_logs_store::AppLogsStore;
pub use scheduler_store::SchedulerStore;
pub use ui_store::UIStore;
