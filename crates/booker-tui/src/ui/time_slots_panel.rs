use crate::ui::layout::SchedulerRegions;
use booker_core::SlotButton;
use ratatui::{
    buffer::Buffer,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// One button row per catalogued time slot
pub struct TimeSlotsPanel<'a> {
    pub slots: &'a [SlotButton],
    pub focused_slot: usize,
    pub is_focused: bool,
}

impl TimeSlotsPanel<'_> {
    pub fn render(&self, regions: &SchedulerRegions, buf: &mut Buffer) {
        let border_color = if self.is_focused {
            Color::Cyan
        } else {
            Color::White
        };
        Block::default()
            .title(" Select a time ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .render(regions.slots, buf);

        let width = regions.slot_list.width as usize;
        let lines: Vec<Line> = self
            .slots
            .iter()
            .enumerate()
            .map(|(idx, button)| self.slot_line(idx, button, width))
            .collect();
        Paragraph::new(lines).render(regions.slot_list, buf);
    }

    fn slot_line(&self, idx: usize, button: &SlotButton, width: usize) -> Line<'static> {
        let focused = self.is_focused && idx == self.focused_slot;
        let marker = if focused { "> " } else { "  " };
        let label = button.slot.label();
        let pad = width.saturating_sub(marker.width() + label.width());

        let style = if button.active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else if focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::styled(format!("{label}{}", " ".repeat(pad)), style),
        ])
    }
}
