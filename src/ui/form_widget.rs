//! The form pane: one row per widget registered on the current node.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, StatefulWidget, Widget},
};

use crate::app::state::EditBuffer;
use crate::core::{
    registry::{Entry, Registry},
    value::{format_number, Value},
    widget::{slider_ratio, WidgetKind},
};

use super::nav_widget::RowState;
use super::theme::Theme;

const SLIDER_TRACK: usize = 20;
const MAX_LABEL_COLUMN: usize = 24;

pub struct FormWidget<'a> {
    registry: &'a Registry,
    keys: &'a [String],
    editing: Option<&'a EditBuffer>,
    focused: bool,
    block: Option<Block<'a>>,
}

impl<'a> FormWidget<'a> {
    pub fn new(registry: &'a Registry, keys: &'a [String]) -> Self {
        Self {
            registry,
            keys,
            editing: None,
            focused: false,
            block: None,
        }
    }

    pub fn editing(mut self, editing: Option<&'a EditBuffer>) -> Self {
        self.editing = editing;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    fn label_column(&self) -> usize {
        self.keys
            .iter()
            .filter_map(|k| self.registry.entry(k))
            .map(|e| e.label.chars().count())
            .max()
            .unwrap_or(0)
            .min(MAX_LABEL_COLUMN)
    }

    fn row_line(&self, key: &str, entry: &'a Entry, label_col: usize, selected: bool) -> Line<'a> {
        let label_style = if selected {
            Theme::selected_style(self.focused)
        } else {
            Theme::label_style()
        };
        let labelled = |value: Vec<Span<'a>>| {
            let mut spans = vec![Span::styled(
                format!("{:<label_col$} : ", entry.label),
                label_style,
            )];
            spans.extend(value);
            Line::from(spans)
        };
        let text = entry.value.to_string();
        let edit = self
            .editing
            .filter(|e| e.key == key)
            .map(|e| Span::styled(format!("{}▏", e.text), Theme::editing_style()));

        match &entry.kind {
            WidgetKind::Textbox => match edit {
                Some(edit) => labelled(vec![edit]),
                None => labelled(vec![Span::styled(text, Theme::value_style())]),
            },
            WidgetKind::Selector { .. } => labelled(vec![
                Span::styled("◂ ", Theme::dim_style()),
                Span::styled(text, Theme::value_style()),
                Span::styled(" ▸", Theme::dim_style()),
            ]),
            WidgetKind::Slider { min, max, .. } => {
                let value = entry.value.as_f64().unwrap_or(*min);
                let filled = (slider_ratio(value, *min, *max) * SLIDER_TRACK as f64).round() as usize;
                let track = format!(
                    "{}●{}",
                    "━".repeat(filled.min(SLIDER_TRACK)),
                    "─".repeat(SLIDER_TRACK - filled.min(SLIDER_TRACK)),
                );
                let number = edit.unwrap_or_else(|| Span::styled(format_number(value), Theme::value_style()));
                labelled(vec![
                    Span::styled(track, Theme::dim_style()),
                    Span::raw(" "),
                    number,
                    Span::styled(
                        format!("  [{} … {}]", format_number(*min), format_number(*max)),
                        Theme::dim_style(),
                    ),
                ])
            }
            WidgetKind::Checkbox => {
                let mark = if entry.value == Value::Bool(true) { "[x]" } else { "[ ]" };
                Line::from(vec![
                    Span::styled(format!("{mark} "), Theme::value_style()),
                    Span::styled(entry.label.clone(), label_style),
                ])
            }
            WidgetKind::BrowseFile => {
                let shown = match edit {
                    Some(edit) => edit,
                    None if text.is_empty() => Span::styled("<no file>", Theme::dim_style()),
                    None => Span::styled(text, Theme::value_style()),
                };
                labelled(vec![shown, Span::styled("  [Browse]", Theme::dim_style())])
            }
            WidgetKind::Button => {
                let pressed = entry.value == Value::Bool(true);
                let mut spans = vec![Span::styled(
                    format!("[ {} ]", entry.label),
                    if selected {
                        Theme::selected_style(self.focused)
                    } else {
                        Theme::button_style(pressed)
                    },
                )];
                if pressed {
                    spans.push(Span::styled(" ●", Theme::button_style(false)));
                }
                Line::from(spans)
            }
        }
    }
}

impl<'a> StatefulWidget for FormWidget<'a> {
    type State = RowState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let inner = if let Some(ref block) = self.block {
            let inner = block.inner(area);
            block.clone().render(area, buf);
            inner
        } else {
            area
        };

        if self.keys.is_empty() {
            buf.set_line(
                inner.x,
                inner.y,
                &Line::styled("No widgets on this page", Theme::dim_style()),
                inner.width,
            );
            return;
        }

        state.clamp(self.keys.len());
        state.clamp_scroll(inner.height as usize);
        let label_col = self.label_column();

        let visible_rows = self
            .keys
            .iter()
            .enumerate()
            .skip(state.offset)
            .take(inner.height as usize);

        for (i, (row_idx, key)) in visible_rows.enumerate() {
            let Some(entry) = self.registry.entry(key) else {
                continue;
            };
            let line = self.row_line(key, entry, label_col, row_idx == state.selected);
            buf.set_line(inner.x, inner.y + i as u16, &line, inner.width);
        }
    }
}
