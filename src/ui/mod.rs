//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes the *core* data structures and turns them into cells on
//! the terminal.  It never mutates widget values.

pub mod form_widget;
pub mod layout;
pub mod nav_widget;
pub mod popup;
pub mod theme;

use ratatui::{
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::state::{ActiveView, AppState, PaneFocus};
use form_widget::FormWidget;
use layout::AppLayout;
use nav_widget::NavWidget;
use theme::Theme;

/// Render one full frame from `state`.
pub fn draw(frame: &mut Frame, state: &mut AppState) {
    state.terminal_area = frame.area();
    state.sync_nav_row();
    let layout = AppLayout::from_area(frame.area(), state.config.nav_width);

    let nav_focused = state.focus == PaneFocus::Nav;
    let nav_block = Block::default()
        .title(" Navigation ")
        .title_style(Theme::title_style())
        .borders(Borders::ALL)
        .border_style(Theme::border_style(nav_focused));
    let nav = NavWidget::new(state.registry.nav())
        .focused(nav_focused)
        .block(nav_block);
    frame.render_stateful_widget(nav, layout.nav_area, &mut state.nav_state);

    let current = state.current_node();
    let form_block = Block::default()
        .title(format!(" {} — {} ", state.title, state.current_path()))
        .title_style(Theme::title_style())
        .borders(Borders::ALL)
        .border_style(Theme::border_style(!nav_focused));
    let form = FormWidget::new(&state.registry, &state.registry.nav().get(current).widgets)
        .editing(state.editing.as_ref())
        .focused(!nav_focused)
        .block(form_block);
    frame.render_stateful_widget(form, layout.form_area, &mut state.form_state);

    let hint = state.config.status_bar_hint();
    let status_text = match (&state.editing, &state.status_message) {
        (Some(_), _) => "Enter: commit | Esc: cancel",
        (None, Some(msg)) => msg.as_str(),
        (None, None) => hint.as_str(),
    };
    frame.render_widget(
        Paragraph::new(status_text).style(Theme::status_bar_style()),
        layout.status_area,
    );

    if state.active_view == ActiveView::FilePicker {
        if let Some(picker) = state.picker.as_mut() {
            frame.render_widget(popup::FilePickerPopup { picker }, frame.area());
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::config::AppConfig;
    use crate::core::widget::WidgetKind;

    fn screen(state: &mut AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 16)).unwrap();
        terminal.draw(|f| draw(f, state)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn sample() -> AppState {
        let mut state = AppState::new("Demo".into(), AppConfig::default());
        let reg = &mut state.registry;
        reg.add("Title", WidgetKind::Textbox, "Personal Data".into()).unwrap();
        reg.add("Person/Name", WidgetKind::Textbox, "John Doe".into()).unwrap();
        reg.add("Person/Subscribe", WidgetKind::Checkbox, true.into()).unwrap();
        reg.add("Person/Submit", WidgetKind::Button, false.into()).unwrap();
        reg.add("Option/Country", WidgetKind::Textbox, "Japan".into()).unwrap();
        state
    }

    #[test]
    fn sidebar_lists_folders() {
        let mut state = sample();
        let text = screen(&mut state);
        assert!(text.contains("Root"));
        assert!(text.contains("Person"));
        assert!(text.contains("Option"));
    }

    #[test]
    fn form_shows_current_page_only() {
        let mut state = sample();
        let text = screen(&mut state);
        assert!(text.contains("Personal Data"));
        assert!(!text.contains("John Doe"));

        let person = state.registry.nav().find("/Person").unwrap();
        state.select_node(person);
        let text = screen(&mut state);
        assert!(text.contains("John Doe"));
        assert!(text.contains("[x] Subscribe"));
        assert!(text.contains("[ Submit ]"));
        assert!(!text.contains("Personal Data"));
    }

    #[test]
    fn sidebar_highlight_follows_the_page() {
        let mut state = sample();
        let option = state.registry.nav().find("/Option").unwrap();
        state.select_node(option);
        assert_eq!(state.nav_state.selected, 2);

        state.registry.add("Person/Extra/Note", WidgetKind::Textbox, "".into()).unwrap();
        let text = screen(&mut state);
        assert_eq!(state.nav_state.selected, 3);
        assert!(text.contains("Japan"));
    }

    #[test]
    fn empty_page_says_so() {
        let mut state = AppState::new("Demo".into(), AppConfig::default());
        assert!(screen(&mut state).contains("No widgets on this page"));
    }
}
