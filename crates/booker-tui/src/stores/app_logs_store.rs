/// AppLogsStore manages application logs displayed in the Logs tab
use crate::logger::LogBuffer;
use std::sync::{Arc, RwLock};

/// Internal state for application logs
#[derive(Debug, Clone, Default)]
pub struct AppLogsState {
    /// Formatted log lines
    pub logs: Vec<String>,

    /// Lines scrolled up from the most recent entry
    pub scroll_offset: usize,
}

/// Store that holds application log state
#[derive(Clone)]
pub struct AppLogsStore {
    state: Arc<RwLock<AppLogsState>>,
    log_buffer: LogBuffer,
}

impl AppLogsStore {
    pub fn new(log_buffer: LogBuffer) -> Self {
        Self {
            state: Arc::new(RwLock::new(AppLogsState::default())),
            log_buffer,
        }
    }

    /// Get a read-only snapshot of the current state
    pub fn get_state(&self) -> AppLogsState {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Pull the latest lines from the log buffer
    pub fn refresh(&self) {
        let logs = self.log_buffer.get_logs();
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        state.scroll_offset = state.scroll_offset.min(logs.len());
        state.logs = logs;
    }

    /// Scroll towards the most recent logs
    pub fn scroll_down(&self, amount: usize) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        state.scroll_offset = state.scroll_offset.saturating_sub(amount);
    }

    /// Scroll towards older logs
    pub fn scroll_up(&self, amount: usize) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        state.scroll_offset = state.scroll_offset.saturating_add(amount).min(state.logs.len());
    }

    /// Reset scroll to bottom (most recent logs)
    pub fn scroll_to_bottom(&self) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        state.scroll_offset = 0;
    }
}
