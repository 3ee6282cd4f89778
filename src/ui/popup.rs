//! Popup overlay for the file picker.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::app::picker::FilePicker;

use super::layout::centered_fixed;
use super::theme::Theme;

/// Rows of chrome around the entry list: borders, blank line, hint.
const CHROME_ROWS: u16 = 4;

pub struct FilePickerPopup<'a> {
    pub picker: &'a mut FilePicker,
}

impl<'a> Widget for FilePickerPopup<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_fixed(64, area.height.saturating_sub(4).max(8), area);
        Clear.render(popup, buf);

        let block = Block::default()
            .title(format!(" {} ", self.picker.dir.display()))
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));

        let inner = block.inner(popup);
        block.render(popup, buf);

        let list_height = popup.height.saturating_sub(CHROME_ROWS) as usize;
        let mut lines = Vec::new();

        if let Some(ref err) = self.picker.error {
            lines.push(Line::from(Span::styled(format!(" {err}"), Theme::error_style())));
        } else if self.picker.entries.is_empty() {
            lines.push(Line::from(Span::styled(" (empty)", Theme::dim_style())));
        } else {
            let state = &mut self.picker.state;
            state.clamp_scroll(list_height);
            for (i, entry) in self
                .picker
                .entries
                .iter()
                .enumerate()
                .skip(state.offset)
                .take(list_height)
            {
                let (prefix, style) = if i == state.selected {
                    (" ▸ ", Theme::selected_style(true))
                } else if entry.is_dir {
                    ("   ", Theme::folder_style())
                } else {
                    ("   ", Theme::label_style())
                };
                let suffix = if entry.is_dir { "/" } else { "" };
                lines.push(Line::from(Span::styled(
                    format!("{prefix}{}{suffix}", entry.name),
                    style,
                )));
            }
        }

        while lines.len() < list_height {
            lines.push(Line::raw(""));
        }
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "  Enter: open/pick  Bksp: parent  Esc: cancel",
            Theme::dim_style(),
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}
