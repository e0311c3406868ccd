/// Logs tab: the in-memory application log, newest at the bottom
use crate::stores::app_logs_store::AppLogsState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct LogsPanel {
    pub logs: Vec<String>,
    pub scroll_offset: usize,
}

impl LogsPanel {
    pub fn from_state(app_logs_state: &AppLogsState) -> Self {
        Self {
            logs: app_logs_state.logs.clone(),
            scroll_offset: app_logs_state.scroll_offset,
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        if self.logs.is_empty() {
            Paragraph::new("No logs yet...")
                .block(panel_block(" Application Logs ".to_string()))
                .style(Style::default().fg(Color::DarkGray))
                .render(area, buf);
            return;
        }

        let inner_height = area.height.saturating_sub(2) as usize;
        let total = self.logs.len();
        let (start, end) = visible_window(total, inner_height, self.scroll_offset);

        let lines: Vec<Line> = self.logs[start..end]
            .iter()
            .map(|log| Line::styled(log.clone(), level_style(log)))
            .collect();

        let title = if total > inner_height {
            format!(" Application Logs [{}/{}] ", end, total)
        } else {
            " Application Logs ".to_string()
        };

        Paragraph::new(lines)
            .block(panel_block(title))
            .render(area, buf);
    }
}

fn panel_block(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::Cyan))
}

/// Range of log lines shown for a panel `height` lines tall, `offset` lines
/// scrolled up from the newest entry
fn visible_window(total: usize, height: usize, offset: usize) -> (usize, usize) {
    let end = total.saturating_sub(offset).max(height.min(total));
    (end.saturating_sub(height), end)
}

fn level_style(line: &str) -> Style {
    if line.contains("] ERROR ") {
        Style::default().fg(Color::Red)
    } else if line.contains("] WARN ") {
        Style::default().fg(Color::Yellow)
    } else if line.contains("] DEBUG ") {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    }
}
