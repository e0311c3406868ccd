use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct ProceedButton {
    pub enabled: bool,
    pub is_focused: bool,
}

impl ProceedButton {
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let style = match (self.enabled, self.is_focused) {
            (true, true) => Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default().fg(Color::Green),
            // disabled
            (false, _) => Style::default().fg(Color::DarkGray),
        };
        let border = if self.is_focused {
            Color::Cyan
        } else {
            Color::White
        };

        Paragraph::new("Proceed")
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            )
            .render(area, buf);
    }
}
