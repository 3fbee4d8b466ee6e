//! KPI card widget.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct KpiCard<'a> {
    pub title: &'a str,
    pub value: usize,
    pub value_style: Style,
    pub border_style: Style,
}

impl<'a> KpiCard<'a> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let value = Span::styled(
            self.value.to_string(),
            self.value_style.add_modifier(Modifier::BOLD),
        );
        let paragraph = Paragraph::new(Line::from(value))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title(self.title)
                    .borders(Borders::ALL)
                    .border_style(self.border_style),
            );
        f.render_widget(paragraph, area);
    }
}
