//! Status selector widget.

use fleet_core::StatusFilter;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub label: String,
    pub active: bool,
}

impl FilterOption {
    /// One option per selector value, keyed by its digit shortcut.
    pub fn for_selection(selected: StatusFilter) -> Vec<FilterOption> {
        StatusFilter::OPTIONS
            .iter()
            .map(|option| FilterOption {
                label: format!("{} {}", option.index(), option.label()),
                active: *option == selected,
            })
            .collect()
    }
}

pub struct FilterBar<'a> {
    pub title: &'a str,
    pub filters: &'a [FilterOption],
    pub active_style: Style,
    pub inactive_style: Style,
}

impl<'a> FilterBar<'a> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let spans: Vec<Span> = self
            .filters
            .iter()
            .map(|filter| {
                let style = if filter.active {
                    self.active_style
                } else {
                    self.inactive_style
                };
                Span::styled(format!(" {} ", filter.label), style)
            })
            .collect();

        let paragraph = Paragraph::new(Line::from(spans))
            .wrap(Wrap { trim: true })
            .block(Block::default().title(self.title).borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }
}
