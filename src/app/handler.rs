//! Input handling — maps key/mouse events to state mutations.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::picker::{FilePicker, PickOutcome};
use super::state::{ActiveView, AppState, EditBuffer, PaneFocus};
use crate::config::Action;
use crate::core::{
    value::Value,
    widget::{cycle_option, step_slider, WidgetKind},
};
use crate::ui::layout::{point_in_rect, row_in_block, AppLayout};

/// Process a key event, dispatching based on the active view.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }
    // Ctrl+c always quits, regardless of view.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    match state.active_view {
        ActiveView::FilePicker => handle_picker_key(state, key),
        ActiveView::Form if state.editing.is_some() => handle_edit_key(state, key),
        ActiveView::Form => handle_main_key(state, key),
    }
}

fn handle_main_key(state: &mut AppState, key: KeyEvent) {
    let Some(action) = state.config.match_key(key) else {
        return;
    };
    state.status_message = None;

    match action {
        Action::Quit => state.should_quit = true,
        Action::SwitchPane => {
            state.focus = match state.focus {
                PaneFocus::Nav => PaneFocus::Form,
                PaneFocus::Form => PaneFocus::Nav,
            };
        }
        _ => match state.focus {
            PaneFocus::Nav => handle_nav_action(state, action),
            PaneFocus::Form => handle_form_action(state, action),
        },
    }
}

// ── Navigation pane ─────────────────────────────────────────────

fn handle_nav_action(state: &mut AppState, action: Action) {
    let node_id = state.current_node();
    let row = state.current_row();

    match action {
        Action::MoveUp => select_nav_row(state, row.saturating_sub(1)),
        Action::MoveDown => select_nav_row(state, row + 1),
        Action::Increase => {
            let node = state.registry.nav_mut().get_mut(node_id);
            if !node.children.is_empty() {
                node.expanded = true;
            }
        }
        Action::Decrease => {
            let node = state.registry.nav().get(node_id);
            if node.expanded && !node.children.is_empty() {
                state.registry.nav_mut().get_mut(node_id).expanded = false;
            } else if let Some(parent) = node.parent {
                state.select_node(parent);
            }
        }
        Action::Expand => {
            if !state.registry.nav().get(node_id).children.is_empty() {
                state.registry.nav_mut().toggle_expand(node_id);
            }
        }
        Action::Activate => {
            if !state.current_widgets().is_empty() {
                state.focus = PaneFocus::Form;
            }
        }
        Action::SwitchPane | Action::Quit => {}
    }
}

fn select_nav_row(state: &mut AppState, row: usize) {
    let before = state.current_node();
    state.select_nav_row(row);
    if state.current_node() != before {
        tracing::debug!(path = state.current_path(), "navigated");
    }
}

// ── Form pane ───────────────────────────────────────────────────

fn handle_form_action(state: &mut AppState, action: Action) {
    let count = state.current_widgets().len();
    match action {
        Action::MoveUp => state.form_state.select_prev(),
        Action::MoveDown => state.form_state.select_next(count),
        Action::Increase => adjust_selected(state, true),
        Action::Decrease => adjust_selected(state, false),
        Action::Activate => activate_selected(state),
        Action::Expand | Action::SwitchPane | Action::Quit => {}
    }
}

/// Left/Right on a slider or selector; Right on a file field opens the picker.
fn adjust_selected(state: &mut AppState, forward: bool) {
    let Some((key, entry)) = state.selected_widget() else {
        return;
    };
    let new_value = match &entry.kind {
        WidgetKind::Slider { min, max, step } => {
            let current = entry.value.as_f64().unwrap_or(*min);
            Value::Number(step_slider(current, *min, *max, *step, if forward { 1 } else { -1 }))
        }
        WidgetKind::Selector { options } => {
            let current = entry.value.as_str().unwrap_or_default();
            match cycle_option(options, current, forward) {
                Some(next) => Value::Text(next.to_string()),
                None => return,
            }
        }
        WidgetKind::BrowseFile if forward => {
            let key = key.to_string();
            open_picker(state, key);
            return;
        }
        _ => return,
    };
    let key = key.to_string();
    store(state, &key, new_value);
}

/// Enter/Space on the selected widget.
pub fn activate_selected(state: &mut AppState) {
    let Some((key, kind, value)) = state
        .selected_widget()
        .map(|(k, e)| (k.to_string(), e.kind.clone(), e.value.clone()))
    else {
        return;
    };
    match kind {
        WidgetKind::Textbox | WidgetKind::Slider { .. } | WidgetKind::BrowseFile => {
            state.editing = Some(EditBuffer {
                text: value.to_string(),
                key,
            });
        }
        WidgetKind::Selector { .. } => adjust_selected(state, true),
        WidgetKind::Checkbox => {
            let checked = value.as_bool().unwrap_or(false);
            store(state, &key, Value::Bool(!checked));
        }
        WidgetKind::Button => {
            tracing::debug!(path = %key, "button pressed");
            store(state, &key, Value::Bool(true));
        }
    }
}

fn open_picker(state: &mut AppState, key: String) {
    let current = state
        .registry
        .entry(&key)
        .map(|e| e.value.to_string())
        .unwrap_or_default();
    let start = if current.is_empty() {
        std::env::current_dir().unwrap_or_else(|_| ".".into())
    } else {
        current.into()
    };
    state.picker = Some(FilePicker::open(key, &start, state.config.show_hidden));
    state.active_view = ActiveView::FilePicker;
}

fn store(state: &mut AppState, key: &str, value: Value) {
    if let Some(slot) = state.registry.value_mut(key) {
        *slot = value;
    }
}

// ── Text editing (textbox, slider entry, file path) ─────────────

fn handle_edit_key(state: &mut AppState, key: KeyEvent) {
    let Some(edit) = state.editing.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Enter => {
            if let Some(edit) = state.editing.take() {
                commit_edit(state, edit);
            }
        }
        KeyCode::Esc => state.editing = None,
        KeyCode::Backspace => {
            edit.text.pop();
        }
        KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            edit.text.push(c);
        }
        _ => {}
    }
}

/// Store typed text through the holder's coercion; numeric fields reject
/// text that is not a number and keep their old value.
fn commit_edit(state: &mut AppState, edit: EditBuffer) {
    if let Err(e) = state.registry.set(&edit.key, Value::Text(edit.text)) {
        tracing::debug!("edit rejected: {e}");
        state.status_message = Some(format!("Not a number: {}", edit_label(state, &edit.key)));
    }
}

fn edit_label(state: &AppState, key: &str) -> String {
    state
        .registry
        .entry(key)
        .map_or_else(|| key.to_string(), |e| e.label.clone())
}

// ── File picker ─────────────────────────────────────────────────

fn handle_picker_key(state: &mut AppState, key: KeyEvent) {
    let Some(picker) = state.picker.as_mut() else {
        state.active_view = ActiveView::Form;
        return;
    };
    match key.code {
        KeyCode::Esc => close_picker(state),
        KeyCode::Up | KeyCode::Char('k') => picker.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => picker.select_next(),
        KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => {
            picker.parent();
        }
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
            if let PickOutcome::Picked(path) = picker.activate() {
                let target = picker.target.clone();
                store(state, &target, Value::Text(path.display().to_string()));
                close_picker(state);
            }
        }
        _ => {}
    }
}

fn close_picker(state: &mut AppState) {
    state.picker = None;
    state.active_view = ActiveView::Form;
}

// ── Mouse ───────────────────────────────────────────────────────

pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    if state.active_view != ActiveView::Form || state.editing.is_some() {
        return;
    }
    let layout = AppLayout::from_area(state.terminal_area, state.config.nav_width);
    let in_nav = point_in_rect(layout.nav_area, mouse.column, mouse.row);
    let in_form = point_in_rect(layout.form_area, mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if in_nav => {
            state.focus = PaneFocus::Nav;
            let Some(row) = row_in_block(layout.nav_area, mouse.row, state.nav_state.offset) else {
                return;
            };
            select_nav_row(state, row);
        }
        MouseEventKind::Down(MouseButton::Left) if in_form => {
            state.focus = PaneFocus::Form;
            let Some(row) = row_in_block(layout.form_area, mouse.row, state.form_state.offset) else {
                return;
            };
            if row < state.current_widgets().len() {
                state.form_state.selected = row;
                let clicked = state
                    .selected_widget()
                    .map(|(k, e)| (k.to_string(), e.kind.clone()));
                match clicked {
                    Some((_, WidgetKind::Checkbox | WidgetKind::Button)) => activate_selected(state),
                    Some((key, WidgetKind::BrowseFile)) => open_picker(state, key),
                    _ => {}
                }
            }
        }
        MouseEventKind::ScrollUp if in_nav => handle_nav_action(state, Action::MoveUp),
        MouseEventKind::ScrollDown if in_nav => handle_nav_action(state, Action::MoveDown),
        MouseEventKind::ScrollUp if in_form => handle_form_action(state, Action::MoveUp),
        MouseEventKind::ScrollDown if in_form => handle_form_action(state, Action::MoveDown),
        _ => {}
    }
}
