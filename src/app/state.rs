//! Central interactive state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use ratatui::layout::Rect;

use super::picker::FilePicker;
use crate::config::AppConfig;
use crate::core::{
    nav::NodeId,
    path::ROOT,
    registry::{Entry, Registry},
};
use crate::ui::nav_widget::RowState;

/// Which view / overlay is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Form,
    FilePicker,
}

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaneFocus {
    #[default]
    Nav,
    Form,
}

/// In-progress text entry for a textbox, slider or file field.  Committed
/// through the registry so slider text must parse as a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    /// Registry key of the widget being edited.
    pub key: String,
    pub text: String,
}

/// Top-level application state.
pub struct AppState {
    /// Window title, shown on the form pane.
    pub title: String,
    pub registry: Registry,
    /// The page shown in the form pane.  Kept as a node id so that new
    /// folders appearing above it in the sidebar do not change the page.
    current: NodeId,
    /// Selection/scroll in the navigation sidebar.  `selected` is derived
    /// from `current` by [`AppState::sync_nav_row`].
    pub nav_state: RowState,
    /// Selection/scroll in the form pane (index into the current node's widgets).
    pub form_state: RowState,
    pub focus: PaneFocus,
    pub active_view: ActiveView,
    pub editing: Option<EditBuffer>,
    pub picker: Option<FilePicker>,
    pub config: AppConfig,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
    /// Set by the quit action; the owner closes the UI when it sees it.
    pub should_quit: bool,
    /// Last drawn terminal size, for mouse hit-testing.
    pub terminal_area: Rect,
}

impl AppState {
    pub fn new(title: String, config: AppConfig) -> Self {
        let registry = Registry::new();
        Self {
            title,
            current: registry.nav().root,
            registry,
            nav_state: RowState::default(),
            form_state: RowState::default(),
            focus: PaneFocus::default(),
            active_view: ActiveView::default(),
            editing: None,
            picker: None,
            config,
            status_message: None,
            should_quit: false,
            terminal_area: Rect::default(),
        }
    }

    /// The navigation node whose widgets the form pane shows.
    pub fn current_node(&self) -> NodeId {
        self.current
    }

    /// Row of the current page among the sidebar's visible nodes.
    pub fn current_row(&self) -> usize {
        self.registry
            .nav()
            .visible_nodes()
            .iter()
            .position(|&n| n == self.current)
            .unwrap_or(0)
    }

    /// Point the sidebar highlight at the current page.  Hidden pages have
    /// their ancestors expanded first.
    pub fn sync_nav_row(&mut self) {
        self.registry.nav_mut().reveal(self.current);
        self.nav_state.selected = self.current_row();
    }

    pub fn current_path(&self) -> &str {
        self.registry
            .nav()
            .nodes
            .get(self.current_node())
            .map_or(ROOT, |n| n.path.as_str())
    }

    /// Registry keys of the widgets on the current page.
    pub fn current_widgets(&self) -> &[String] {
        &self.registry.nav().get(self.current_node()).widgets
    }

    /// The widget highlighted in the form pane, if any.
    pub fn selected_widget(&self) -> Option<(&str, &Entry)> {
        let key = self.current_widgets().get(self.form_state.selected)?;
        self.registry.entry(key).map(|e| (key.as_str(), e))
    }

    /// Select a navigation node by id, expanding its ancestors first.
    pub fn select_node(&mut self, id: NodeId) {
        if self.registry.nav().nodes.get(id).is_none() {
            return;
        }
        if id != self.current {
            self.current = id;
            self.form_state = RowState::default();
        }
        self.sync_nav_row();
    }

    /// Select the node shown at `row` in the sidebar, if there is one.
    pub fn select_nav_row(&mut self, row: usize) {
        let visible = self.registry.nav().visible_nodes();
        if let Some(&id) = visible.get(row) {
            self.select_node(id);
        }
    }
}
