//! Custom Ratatui widget that renders the [`NavTree`] as an indented,
//! collapsible sidebar.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, StatefulWidget, Widget},
};

use crate::core::nav::NavTree;

use super::theme::Theme;

// ───────────────────────────────────────── state ─────────────

/// Selection and scroll state for a vertical list of rows.  Shared by the
/// sidebar, the form pane and the file picker.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RowState {
    /// Index of the highlighted row.
    pub selected: usize,
    /// Vertical scroll offset (first visible row).
    pub offset: usize,
}

impl RowState {
    pub fn select_next(&mut self, max: usize) {
        if max > 0 && self.selected < max - 1 {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Pull `selected` back inside `0..len`.
    pub fn clamp(&mut self, len: usize) {
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    /// Ensure the selected row is visible within the viewport of `height` rows.
    pub fn clamp_scroll(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + height {
            self.offset = self.selected - height + 1;
        }
    }
}

// ───────────────────────────────────────── widget ────────────

/// The sidebar widget — created fresh each frame.
pub struct NavWidget<'a> {
    tree: &'a NavTree,
    block: Option<Block<'a>>,
    focused: bool,
}

impl<'a> NavWidget<'a> {
    pub fn new(tree: &'a NavTree) -> Self {
        Self {
            tree,
            block: None,
            focused: false,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl<'a> StatefulWidget for NavWidget<'a> {
    type State = RowState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let inner = if let Some(ref block) = self.block {
            let inner = block.inner(area);
            block.clone().render(area, buf);
            inner
        } else {
            area
        };

        let rows = self.tree.visible_nodes();
        state.clamp(rows.len());
        state.clamp_scroll(inner.height as usize);

        let visible_rows = rows
            .iter()
            .enumerate()
            .skip(state.offset)
            .take(inner.height as usize);

        for (i, (row_idx, &node_id)) in visible_rows.enumerate() {
            let node = self.tree.get(node_id);
            let y = inner.y + i as u16;
            let indent = "  ".repeat(node.depth);
            let icon = match (node.children.is_empty(), node.expanded) {
                (true, _) => "  ",
                (false, true) => "▼ ",
                (false, false) => "▶ ",
            };
            let style = if row_idx == state.selected {
                Theme::selected_style(self.focused)
            } else {
                Theme::folder_style()
            };

            let mut spans = vec![
                Span::raw(indent),
                Span::styled(format!("{icon}{}", node.name), style),
            ];
            if !node.widgets.is_empty() {
                spans.push(Span::styled(
                    format!(" ({})", node.widgets.len()),
                    Theme::dim_style(),
                ));
            }
            buf.set_line(inner.x, y, &Line::from(spans), inner.width);
        }
    }
}
