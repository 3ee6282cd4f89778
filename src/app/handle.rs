//! [`ChibiUi`] — the public, path-addressed handle.
//!
//! The caller owns the loop.  Register widgets with the `add_*` methods, then
//! poll [`ChibiUi::alive`] (which also pumps terminal input and redraws) and
//! read or write values by path:
//!
//! ```no_run
//! # fn main() -> chibiui::Result<()> {
//! let mut ui = chibiui::ChibiUi::create("Example", false)?;
//! ui.add_textbox("Person/Name", "John Doe")?;
//! ui.add_button("Person/Submit", false)?;
//! while ui.alive() {
//!     if ui.get("Person/Submit")?.as_bool() == Some(true) {
//!         println!("{}", ui.get("Person/Name")?);
//!         ui.set("Person/Submit", false)?;
//!     }
//!     std::thread::sleep(std::time::Duration::from_millis(10));
//! }
//! # Ok(())
//! # }
//! ```

use std::io::{stderr, Stderr};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, error, warn};

use super::event::{self, AppEvent};
use super::handler;
use super::state::AppState;
use crate::config::AppConfig;
use crate::core::{path, value::Value, widget::WidgetKind};
use crate::error::{Result, UiError};
use crate::ui;

type Backend = CrosstermBackend<Stderr>;

/// A form window whose widgets are addressed by slash-separated paths.
///
/// In headless mode no terminal is touched; registration, `get`/`set`,
/// navigation and input handling behave exactly the same.
pub struct ChibiUi {
    state: AppState,
    terminal: Option<Terminal<Backend>>,
    alive: bool,
}

impl ChibiUi {
    /// Open a UI titled `title`.  With `headless` set nothing is rendered.
    ///
    /// Key bindings come from the user's config file when rendering.
    pub fn create(title: impl Into<String>, headless: bool) -> Result<Self> {
        let config = if headless {
            AppConfig::default()
        } else {
            AppConfig::load()
        };
        Self::with_config(title, headless, config)
    }

    pub fn with_config(title: impl Into<String>, headless: bool, config: AppConfig) -> Result<Self> {
        let title = title.into();
        let terminal = if headless {
            None
        } else {
            Some(setup_terminal()?)
        };
        debug!(%title, headless, "created ui");
        Ok(Self {
            state: AppState::new(title, config),
            terminal,
            alive: true,
        })
    }

    pub fn title(&self) -> &str {
        &self.state.title
    }

    pub fn is_headless(&self) -> bool {
        self.terminal.is_none()
    }

    // ── registration ────────────────────────────────────────────

    fn add(&mut self, path: &str, kind: WidgetKind, initial: Value) -> Result<()> {
        self.ensure_open()?;
        self.state.registry.add(path, kind, initial).map(|_| ())
    }

    /// A single-line text entry.
    pub fn add_textbox(&mut self, path: &str, value: &str) -> Result<()> {
        self.add(path, WidgetKind::Textbox, value.into())
    }

    /// A drop-down style chooser.  `value` does not have to be one of
    /// `options`.
    pub fn add_selector<S: AsRef<str>>(&mut self, path: &str, options: &[S], value: &str) -> Result<()> {
        let options = options.iter().map(|o| o.as_ref().to_string()).collect();
        self.add(path, WidgetKind::Selector { options }, value.into())
    }

    /// A numeric slider over `[min, max]` moved in increments of `step`.
    pub fn add_slider(&mut self, path: &str, min: f64, max: f64, step: f64, value: f64) -> Result<()> {
        self.add(path, WidgetKind::Slider { min, max, step }, value.into())
    }

    pub fn add_checkbox(&mut self, path: &str, value: bool) -> Result<()> {
        self.add(path, WidgetKind::Checkbox, value.into())
    }

    /// A path field with a file picker.  Starts empty.
    pub fn add_browse_file(&mut self, path: &str) -> Result<()> {
        self.add(path, WidgetKind::BrowseFile, Value::Text(String::new()))
    }

    /// A button.  Pressing it sets its value to `true`; the caller resets it.
    pub fn add_button(&mut self, path: &str, value: bool) -> Result<()> {
        self.add(path, WidgetKind::Button, value.into())
    }

    // ── values ──────────────────────────────────────────────────

    pub fn get(&self, path: &str) -> Result<Value> {
        self.ensure_open()?;
        self.state.registry.get(path).cloned()
    }

    pub fn set(&mut self, path: &str, value: impl Into<Value>) -> Result<()> {
        self.ensure_open()?;
        self.state.registry.set(path, value.into()).inspect_err(|e| {
            warn!("set rejected: {e}");
        })
    }

    /// Every registered widget path, sorted.
    pub fn paths(&self) -> Vec<String> {
        self.state.registry.paths()
    }

    /// Number of navigation folders, not counting the root.
    pub fn nav_len(&self) -> usize {
        self.state.registry.nav().len()
    }

    /// Show `message` in the status bar until the next key press.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.state.status_message = Some(message.into());
    }

    // ── navigation ──────────────────────────────────────────────

    /// Show the page at `path` and select it in the sidebar.
    pub fn navigate_to(&mut self, path: &str) -> Result<()> {
        let key = path::normalize(path);
        let Some(id) = self.state.registry.nav().find(&key) else {
            return Err(UiError::NotFound(key));
        };
        self.state.select_node(id);
        debug!(path = %key, "navigate_to");
        Ok(())
    }

    /// Path of the page currently shown.
    pub fn current_path(&self) -> &str {
        self.state.current_path()
    }

    // ── lifecycle ───────────────────────────────────────────────

    /// Pump input, redraw, and report whether the UI is still open.
    ///
    /// Terminal errors close the UI and are logged.
    pub fn alive(&mut self) -> bool {
        match self.tick() {
            Ok(open) => open,
            Err(e) => {
                error!("ui failed: {e}");
                self.close();
                false
            }
        }
    }

    /// Whether the UI is open, without pumping input.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// One cooperative step: apply queued terminal input, then redraw.
    pub fn tick(&mut self) -> Result<bool> {
        if !self.alive {
            return Ok(false);
        }
        if self.terminal.is_some() {
            for ev in event::drain_pending()? {
                self.handle_event(ev);
                if !self.alive {
                    return Ok(false);
                }
            }
        }
        self.draw()?;
        Ok(self.alive)
    }

    /// Apply one input event.  Closes the UI when the quit action fires.
    pub fn handle_event(&mut self, event: AppEvent) {
        if !self.alive {
            return;
        }
        match event {
            AppEvent::Key(k) => handler::handle_key(&mut self.state, k),
            AppEvent::Mouse(m) => handler::handle_mouse(&mut self.state, m),
            AppEvent::Resize(_, _) => {}
        }
        if self.state.should_quit {
            self.close();
        }
    }

    /// Render a frame.  A no-op in headless mode.
    pub fn draw(&mut self) -> Result<()> {
        if let Some(terminal) = self.terminal.as_mut() {
            terminal.draw(|frame| ui::draw(frame, &mut self.state))?;
        }
        Ok(())
    }

    /// Close the window and restore the terminal.  Idempotent.
    pub fn close(&mut self) {
        if !self.alive {
            return;
        }
        self.alive = false;
        if let Some(mut terminal) = self.terminal.take() {
            if let Err(e) = restore_terminal(&mut terminal) {
                error!("failed to restore terminal: {e}");
            }
        }
        debug!(title = %self.state.title, "closed ui");
    }

    fn ensure_open(&self) -> Result<()> {
        if self.alive {
            Ok(())
        } else {
            Err(UiError::Closed)
        }
    }
}

impl Drop for ChibiUi {
    fn drop(&mut self) {
        self.close();
    }
}

// ── terminal setup / teardown ───────────────────────────────────

fn setup_terminal() -> Result<Terminal<Backend>> {
    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    if let Err(e) = execute!(stderr_handle, EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }
    Ok(Terminal::new(CrosstermBackend::new(stderr()))?)
}

fn restore_terminal(terminal: &mut Terminal<Backend>) -> std::io::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn navigate_to_switches_the_page() {
        let mut ui = ChibiUi::create("T", true).unwrap();
        ui.add_textbox("A/B/Field", "x").unwrap();
        ui.add_textbox("C/Field", "y").unwrap();
        assert_eq!(ui.current_path(), "/");
        ui.navigate_to("A/B/").unwrap();
        assert_eq!(ui.current_path(), "/A/B");
        assert!(matches!(ui.navigate_to("/Nope"), Err(UiError::NotFound(p)) if p == "/Nope"));
        assert_eq!(ui.current_path(), "/A/B");
    }

    #[test]
    fn quit_key_closes_headless_ui() {
        let mut ui = ChibiUi::create("T", true).unwrap();
        ui.add_checkbox("Flag", false).unwrap();
        assert!(ui.alive());
        ui.handle_event(key(KeyCode::Char('q')));
        assert!(!ui.alive());
        assert!(matches!(ui.get("Flag"), Err(UiError::Closed)));
        assert!(matches!(ui.add_button("Go", false), Err(UiError::Closed)));
    }

    #[test]
    fn keyboard_press_is_visible_through_get() {
        let mut ui = ChibiUi::create("T", true).unwrap();
        ui.add_button("Person/Submit", false).unwrap();
        ui.navigate_to("Person").unwrap();
        ui.handle_event(key(KeyCode::Tab));
        ui.handle_event(key(KeyCode::Enter));
        assert_eq!(ui.get("Person/Submit").unwrap(), Value::Bool(true));
        ui.set("Person/Submit", false).unwrap();
        assert_eq!(ui.get("Person/Submit").unwrap(), Value::Bool(false));
    }

    #[test]
    fn page_is_kept_when_folders_appear_above_it() {
        let mut ui = ChibiUi::create("T", true).unwrap();
        ui.add_textbox("A/a", "").unwrap();
        ui.add_textbox("B/b", "").unwrap();
        ui.navigate_to("B").unwrap();
        ui.add_textbox("A/X/c", "").unwrap();
        assert_eq!(ui.current_path(), "/B");
        assert_eq!(ui.state.current_widgets(), ["/B/b".to_string()]);
    }

    #[test]
    fn page_is_kept_after_collapse_and_add() {
        let mut ui = ChibiUi::create("T", true).unwrap();
        ui.add_textbox("A/X/a", "").unwrap();
        ui.add_textbox("A/b", "").unwrap();
        ui.navigate_to("A").unwrap();
        ui.handle_event(key(KeyCode::Left));
        assert!(!ui.state.registry.nav().get(ui.state.current_node()).expanded);

        ui.add_textbox("A/Y/c", "").unwrap();
        ui.add_textbox("0/d", "").unwrap();
        assert_eq!(ui.current_path(), "/A");

        ui.handle_event(key(KeyCode::Down));
        assert_eq!(ui.current_path(), "/0");
    }

    #[test]
    fn close_is_idempotent() {
        let mut ui = ChibiUi::create("T", true).unwrap();
        ui.close();
        ui.close();
        assert!(!ui.is_alive());
        assert!(!ui.tick().unwrap());
    }
}
