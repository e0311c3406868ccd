use crate::ui::layout::SchedulerRegions;
use booker_core::calendar::WEEKDAY_HEADERS;
use booker_core::{DayCell, DayKind, MonthGrid};
use chrono::NaiveDate;
use ratatui::{
    buffer::Buffer,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Month view with navigation arrows, weekday headers and the 6x7 day grid
pub struct CalendarPanel<'a> {
    pub grid: &'a MonthGrid,
    pub today: Option<NaiveDate>,
    pub focused_cell: usize,
    pub is_focused: bool,
}

impl CalendarPanel<'_> {
    pub fn render(&self, regions: &SchedulerRegions, buf: &mut Buffer) {
        let border_color = if self.is_focused {
            Color::Cyan
        } else {
            Color::White
        };
        Block::default()
            .title(" Select a date ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .render(regions.calendar, buf);

        let nav_style = Style::default().fg(Color::Yellow);
        Paragraph::new(" [<] ")
            .style(nav_style)
            .render(regions.previous, buf);
        Paragraph::new(" [>] ")
            .style(nav_style)
            .render(regions.next, buf);
        Paragraph::new(self.grid.label.as_str())
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .render(regions.month_label, buf);

        let width = regions.cell_width() as usize;
        let weekdays: Vec<Span> = WEEKDAY_HEADERS
            .iter()
            .map(|day| {
                Span::styled(
                    format!("{:^width$}", day),
                    Style::default().fg(Color::Yellow),
                )
            })
            .collect();
        Paragraph::new(Line::from(weekdays)).render(regions.weekdays, buf);

        let lines: Vec<Line> = self
            .grid
            .rows()
            .enumerate()
            .map(|(row, cells)| {
                let spans: Vec<Span> = cells
                    .iter()
                    .enumerate()
                    .map(|(col, cell)| {
                        Span::styled(
                            format!("{:^width$}", cell.day),
                            self.cell_style(cell, row * 7 + col),
                        )
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();
        Paragraph::new(lines).render(regions.grid, buf);
    }

    fn cell_style(&self, cell: &DayCell, idx: usize) -> Style {
        let mut style = match cell.kind {
            DayKind::OutsideMonth => Style::default().fg(Color::DarkGray),
            DayKind::Past => Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
            DayKind::Selectable if Some(cell.date) == self.today => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            DayKind::Selectable => Style::default().fg(Color::White),
        };
        if cell.selected {
            style = Style::default()
                .fg(Color::Yellow)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD);
        }
        if self.is_focused && idx == self.focused_cell {
            style = style.add_modifier(Modifier::REVERSED);
        }
        style
    }
}
