/// This config file lists out the default values for the main BOOKER env configs.
/// All can be overridden by an ENV var of the same name. These should only be
/// primitive types.
///

/// locale tag used for the calendar month/year header
pub static BOOKER_LOCALE: &'static str = "ar";

/// path that confirmed selections are appended to as JSON lines.
/// Empty means selections are only written to the log
pub static BOOKER_SELECTION_OUTPUT: &'static str = "";

/// interval between terminal input polls in the TUI
pub static BOOKER_TUI_TICK_MS: usize = 16;

/// maximum number of log lines retained by the TUI's in-memory logger
pub static BOOKER_LOG_BUFFER_LINES: usize = 50_000;

/// offset from UTC (in minutes) used when no host clock is available,
/// e.g. for the `select` CLI command without `--utc-offset-minutes`
pub static BOOKER_UTC_OFFSET_MINUTES: i64 = 0;
