/// Layout manager for the TUI application.
///
/// The scheduler regions computed here double as the widget's anchors: a
/// terminal too small to hold a region is a host without that anchor.
use crate::actions::{PanelId, TabId};
use crate::stores::{AppLogsStore, SchedulerStore, UIStore};
use crate::ui::{CalendarPanel, LogsPanel, ProceedButton, TimeSlotsPanel};
use booker_core::{Anchor, AnchorHost, SchedulerPhase, AVAILABLE_TIME_SLOTS};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Widget, Wrap},
};

/// Narrowest column a day number is drawn in
pub const MIN_CELL_WIDTH: u16 = 3;
/// Slot labels plus the two-column focus marker
const MIN_SLOT_WIDTH: u16 = 23;
const NAV_WIDTH: u16 = 5;

/// Screen regions of the scheduler tab
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchedulerRegions {
    pub calendar: Rect,
    pub previous: Rect,
    pub month_label: Rect,
    pub next: Rect,
    pub weekdays: Rect,
    pub grid: Rect,
    pub slots: Rect,
    pub slot_list: Rect,
    pub proceed: Rect,
}

impl SchedulerRegions {
    /// Width of one day column
    pub fn cell_width(&self) -> u16 {
        (self.grid.width / 7).max(1)
    }

    /// Day cell index under a terminal position
    pub fn cell_at(&self, column: u16, row: u16) -> Option<usize> {
        if !hit(self.grid, column, row) {
            return None;
        }
        let col = (column - self.grid.x) / self.cell_width();
        let line = row - self.grid.y;
        (col < 7 && line < 6).then(|| (line * 7 + col) as usize)
    }

    /// Time slot index under a terminal position
    pub fn slot_at(&self, column: u16, row: u16) -> Option<usize> {
        if !hit(self.slot_list, column, row) {
            return None;
        }
        let idx = (row - self.slot_list.y) as usize;
        (idx < AVAILABLE_TIME_SLOTS.len()).then_some(idx)
    }

    pub fn is_previous(&self, column: u16, row: u16) -> bool {
        hit(self.previous, column, row)
    }

    pub fn is_next(&self, column: u16, row: u16) -> bool {
        hit(self.next, column, row)
    }

    pub fn is_proceed(&self, column: u16, row: u16) -> bool {
        hit(self.proceed, column, row)
    }
}

impl AnchorHost for SchedulerRegions {
    fn has_anchor(&self, anchor: Anchor) -> bool {
        match anchor {
            Anchor::TimeSlots => {
                self.slot_list.width >= MIN_SLOT_WIDTH
                    && self.slot_list.height as usize >= AVAILABLE_TIME_SLOTS.len()
            }
            Anchor::MonthLabel => self.month_label.width > 0 && self.month_label.height > 0,
            Anchor::CalendarGrid => {
                self.grid.width >= 7 * MIN_CELL_WIDTH && self.grid.height >= 6
            }
            Anchor::PreviousMonth => self.previous.width >= 3 && self.previous.height > 0,
            Anchor::NextMonth => self.next.width >= 3 && self.next.height > 0,
            Anchor::Proceed => self.proceed.width >= 12 && self.proceed.height >= 3,
        }
    }
}

fn hit(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Header | Tabs | Body | Footer
fn frame_chunks(area: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Tabs
            Constraint::Min(0),    // Body
            Constraint::Length(3), // Footer
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

fn bordered_inner(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

/// Compute the scheduler tab regions for a whole terminal area
pub fn scheduler_regions(area: Rect) -> SchedulerRegions {
    let body = frame_chunks(area)[2];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(body);
    let calendar = columns[0];

    let calendar_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // < month >
            Constraint::Length(1), // weekday headers
            Constraint::Min(0),    // day grid
        ])
        .split(bordered_inner(calendar));

    let nav = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(NAV_WIDTH),
            Constraint::Min(0),
            Constraint::Length(NAV_WIDTH),
        ])
        .split(calendar_rows[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(columns[1]);

    let grid = calendar_rows[2];
    SchedulerRegions {
        calendar,
        previous: nav[0],
        month_label: nav[1],
        next: nav[2],
        weekdays: calendar_rows[1],
        grid: Rect {
            height: grid.height.min(6),
            ..grid
        },
        slots: right[0],
        slot_list: bordered_inner(right[0]),
        proceed: right[1],
    }
}

/// Render the complete application layout
pub fn render_layout(
    frame: &mut Frame,
    scheduler_store: &SchedulerStore,
    ui_store: &UIStore,
    app_logs_store: &AppLogsStore,
) {
    let area = frame.area();
    let [header, tabs, body, footer] = frame_chunks(area);
    let ui_state = ui_store.get_state();

    render_header(frame.buffer_mut(), header, scheduler_store, ui_store);
    render_tabs(frame, tabs, &ui_state.active_tab);

    match ui_state.active_tab {
        TabId::Scheduler => {
            let state = scheduler_store.get_state();
            // an unmounted scheduler draws nothing at all
            if let Some(grid) = &state.grid {
                let regions = scheduler_regions(area);
                let buf = frame.buffer_mut();
                CalendarPanel {
                    grid,
                    today: state.today,
                    focused_cell: state.focused_cell,
                    is_focused: ui_state.focused_panel == PanelId::Calendar,
                }
                .render(&regions, buf);
                TimeSlotsPanel {
                    slots: &state.slots,
                    focused_slot: state.focused_slot,
                    is_focused: ui_state.focused_panel == PanelId::TimeSlots,
                }
                .render(&regions, buf);
                ProceedButton {
                    enabled: state.proceed_enabled,
                    is_focused: ui_state.focused_panel == PanelId::Proceed,
                }
                .render(regions.proceed, buf);
            }
        }
        TabId::Logs => {
            LogsPanel::from_state(&app_logs_store.get_state()).render(body, frame.buffer_mut());
        }
    }

    render_footer(frame.buffer_mut(), footer, ui_store);

    if ui_state.show_help {
        render_help(frame.buffer_mut(), area);
    }
}

fn render_tabs(frame: &mut Frame, area: Rect, active_tab: &TabId) {
    let tab_titles = vec!["1: Scheduler", "2: Logs"];
    let selected_index = match active_tab {
        TabId::Scheduler => 0,
        TabId::Logs => 1,
    };

    let tabs = Tabs::new(tab_titles)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .select(selected_index)
        .divider("|");

    frame.render_widget(tabs, area);
}

fn render_header(buf: &mut Buffer, area: Rect, scheduler_store: &SchedulerStore, ui_store: &UIStore) {
    let state = scheduler_store.get_state();
    let ui_state = ui_store.get_state();

    let (status, status_color) = match state.phase {
        None => ("Unavailable", Color::DarkGray),
        Some(SchedulerPhase::Initial) => ("Pick a date and a time", Color::White),
        Some(SchedulerPhase::PartialSelection) => ("Almost there", Color::Yellow),
        Some(SchedulerPhase::ReadyToProceed) => ("Ready to proceed", Color::Green),
    };

    let mut spans = vec![
        Span::styled(
            " BOOKER ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | Consultation: "),
        Span::styled(status, Style::default().fg(status_color)),
    ];
    if let Some(err) = &ui_state.error_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(err.clone(), Style::default().fg(Color::Red)));
    } else if let Some(msg) = &ui_state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Green)));
    }

    Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL))
        .render(area, buf);
}

fn render_footer(buf: &mut Buffer, area: Rect, ui_store: &UIStore) {
    let ui_state = ui_store.get_state();

    let help_text = if ui_state.show_help {
        "Press ? to hide help"
    } else {
        match ui_state.active_tab {
            TabId::Scheduler => {
                "q:Quit | 1/2:Switch Tab | Tab:Panel | arrows/hjkl:Move | Enter:Select | [/]:Month | p:Proceed | ?:Help"
            }
            TabId::Logs => "q:Quit | 1/2:Switch Tab | j/k:Scroll | g:Latest | ?:Help",
        }
    };

    Paragraph::new(Line::from(vec![Span::raw(" "), Span::raw(help_text)]))
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL))
        .render(area, buf);
}

fn render_help(buf: &mut Buffer, area: Rect) {
    let popup = centered_rect(60, 60, area);
    Clear.render(popup, buf);

    let lines: Vec<Line> = [
        ("Tab / Shift-Tab", "cycle calendar, time slots, proceed"),
        ("arrows / h j k l", "move over days or slots"),
        ("Enter / Space", "select the focused day or slot"),
        ("[ / ]", "previous / next month"),
        ("p", "proceed with the selected date and time"),
        ("mouse", "click days, slots, < > and Proceed"),
        ("Esc", "dismiss error"),
        ("q", "quit"),
    ]
    .into_iter()
    .map(|(key, desc)| {
        Line::from(vec![
            Span::styled(format!("{key:>18}  "), Style::default().fg(Color::Yellow)),
            Span::raw(desc),
        ])
    })
    .collect();

    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .render(popup, buf);
}

/// Helper function to create a centered rectangle
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use booker_core::anchors::first_missing;

    #[test]
    fn test_regular_terminal_provides_every_anchor() {
        let regions = scheduler_regions(Rect::new(0, 0, 120, 40));
        assert_eq!(first_missing(&regions), None);
        assert_eq!(regions.grid.height, 6);
    }

    #[test]
    fn test_tiny_terminal_misses_anchors() {
        let regions = scheduler_regions(Rect::new(0, 0, 30, 12));
        assert!(first_missing(&regions).is_some());
    }

    #[test]
    fn test_cell_hit_testing() {
        let regions = scheduler_regions(Rect::new(0, 0, 120, 40));
        let w = regions.cell_width();
        let g = regions.grid;

        assert_eq!(regions.cell_at(g.x, g.y), Some(0));
        assert_eq!(regions.cell_at(g.x + w * 6, g.y), Some(6));
        assert_eq!(regions.cell_at(g.x + w, g.y + 2), Some(15));
        assert_eq!(regions.cell_at(g.x, g.y + 6), None);
        assert_eq!(regions.cell_at(g.x.saturating_sub(1), g.y), None);
    }

    #[test]
    fn test_slot_and_button_hit_testing() {
        let regions = scheduler_regions(Rect::new(0, 0, 120, 40));
        let list = regions.slot_list;
        assert_eq!(regions.slot_at(list.x, list.y), Some(0));
        assert_eq!(regions.slot_at(list.x + 3, list.y + 4), Some(4));
        assert_eq!(regions.slot_at(list.x, list.y + 5), None);

        assert!(regions.is_previous(regions.previous.x, regions.previous.y));
        assert!(regions.is_next(regions.next.x, regions.next.y));
        assert!(regions.is_proceed(regions.proceed.x + 1, regions.proceed.y + 1));
        assert!(!regions.is_proceed(regions.grid.x, regions.grid.y));
    }
}
