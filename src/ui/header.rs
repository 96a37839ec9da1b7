use crate::ui::directory::DirectoryState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &DirectoryState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let sort = state.sort();

        let (marker, marker_style) = if state.is_loading() {
            ("…", Style::default().fg(HEADER_SEPARATOR))
        } else {
            ("●", Style::default().fg(STATUS_OK))
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(marker, marker_style),
            Span::styled("  ", text_style),
            Span::styled(
                "Employees",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} total", state.total_records()), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(
                format!(
                    "page {}/{}",
                    state.current_page(),
                    state.page_count().max(1)
                ),
                text_style,
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(
                format!("sort: {} {}", sort.key.label(), sort.direction.arrow()),
                text_style,
            ),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
