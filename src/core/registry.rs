//! Path-addressed widget store.
//!
//! Maps a normalised path to the widget registered there and its current
//! [`Value`], and keeps the derived [`NavTree`] in step with registrations.

use std::collections::HashMap;

use tracing::debug;

use super::nav::{NavTree, NodeId};
use super::path::{self, WidgetPath};
use super::value::Value;
use super::widget::WidgetKind;
use crate::error::{Result, UiError};

/// A registered widget.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Label shown next to the widget (last path segment).
    pub label: String,
    pub kind: WidgetKind,
    pub value: Value,
    /// Navigation node the widget is displayed under.
    pub node: NodeId,
}

#[derive(Debug, Default)]
pub struct Registry {
    entries: HashMap<String, Entry>,
    nav: NavTree,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a widget under `raw_path` with an initial value.
    ///
    /// Fails with [`UiError::DuplicatePath`] if the path is taken; the
    /// existing entry is left as it was.
    pub fn add(&mut self, raw_path: &str, kind: WidgetKind, initial: Value) -> Result<String> {
        let wp = WidgetPath::parse(raw_path)?;
        if self.entries.contains_key(&wp.key) {
            return Err(UiError::DuplicatePath(wp.key));
        }
        let value = kind
            .default_value()
            .coerce(initial.clone())
            .ok_or_else(|| UiError::TypeMismatch {
                path: wp.key.clone(),
                expected: kind.default_value().type_name(),
                found: initial.type_name(),
            })?;

        let node = self.nav.ensure_path(&wp.parent);
        self.nav.get_mut(node).widgets.push(wp.key.clone());
        debug!(path = %wp.key, kind = kind.name(), "registered widget");
        self.entries.insert(
            wp.key.clone(),
            Entry {
                label: wp.label,
                kind,
                value,
                node,
            },
        );
        Ok(wp.key)
    }

    pub fn get(&self, raw_path: &str) -> Result<&Value> {
        let key = path::normalize(raw_path);
        self.entries
            .get(&key)
            .map(|e| &e.value)
            .ok_or(UiError::NotFound(key))
    }

    /// Overwrite the value at `raw_path`, coercing it to the holder's type.
    pub fn set(&mut self, raw_path: &str, value: Value) -> Result<()> {
        let key = path::normalize(raw_path);
        let Some(entry) = self.entries.get_mut(&key) else {
            return Err(UiError::NotFound(key));
        };
        let found = value.type_name();
        match entry.value.coerce(value) {
            Some(v) => {
                entry.value = v;
                Ok(())
            }
            None => Err(UiError::TypeMismatch {
                expected: entry.value.type_name(),
                found,
                path: key,
            }),
        }
    }

    /// Look up an entry by its already-normalised key.
    pub fn entry(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    pub(crate) fn value_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key).map(|e| &mut e.value)
    }

    pub fn contains(&self, raw_path: &str) -> bool {
        self.entries.contains_key(&path::normalize(raw_path))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every registered key, sorted.
    pub fn paths(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn nav(&self) -> &NavTree {
        &self.nav
    }

    pub fn nav_mut(&mut self) -> &mut NavTree {
        &mut self.nav
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person() -> Registry {
        let mut reg = Registry::new();
        reg.add("Title", WidgetKind::Textbox, "Personal Data".into()).unwrap();
        reg.add("Person/Name", WidgetKind::Textbox, "John Doe".into()).unwrap();
        reg.add(
            "Person/Age",
            WidgetKind::Slider { min: 0.0, max: 100.0, step: 1.0 },
            30.into(),
        )
        .unwrap();
        reg.add("Person/Submit", WidgetKind::Button, false.into()).unwrap();
        reg.add("Option/Country", WidgetKind::Textbox, "Japan".into()).unwrap();
        reg
    }

    #[test]
    fn get_returns_initial_value() {
        let reg = person();
        assert_eq!(reg.get("/Person/Name").unwrap(), &Value::from("John Doe"));
        assert_eq!(reg.get("Person/Age").unwrap(), &Value::Number(30.0));
        assert_eq!(reg.get("Title").unwrap(), &Value::from("Personal Data"));
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut reg = person();
        reg.set("Person/Submit", true.into()).unwrap();
        assert_eq!(reg.get("/Person/Submit/").unwrap(), &Value::Bool(true));
    }

    #[test]
    fn duplicate_path_is_rejected_and_original_kept() {
        let mut reg = person();
        let err = reg.add("/Person//Name", WidgetKind::Checkbox, true.into()).unwrap_err();
        assert!(matches!(err, UiError::DuplicatePath(p) if p == "/Person/Name"));
        assert_eq!(reg.entry("/Person/Name").unwrap().kind, WidgetKind::Textbox);
        assert_eq!(reg.len(), 5);
    }

    #[test]
    fn unknown_paths_fail() {
        let mut reg = person();
        assert!(matches!(reg.get("Person/Nope"), Err(UiError::NotFound(p)) if p == "/Person/Nope"));
        assert!(matches!(reg.set("Nope", 1.into()), Err(UiError::NotFound(_))));
    }

    #[test]
    fn set_rejects_incompatible_value() {
        let mut reg = person();
        let err = reg.set("Person/Submit", "yes".into()).unwrap_err();
        assert!(matches!(err, UiError::TypeMismatch { expected: "a boolean", .. }));
        assert_eq!(reg.get("Person/Submit").unwrap(), &Value::Bool(false));
    }

    #[test]
    fn nav_tracks_distinct_prefixes() {
        let mut reg = person();
        assert_eq!(reg.nav().len(), 2);
        reg.add("Person/Profile/Bio", WidgetKind::Textbox, "".into()).unwrap();
        assert_eq!(reg.nav().len(), 3);
        let person = reg.nav().find("/Person").unwrap();
        assert_eq!(
            reg.nav().get(person).widgets,
            vec!["/Person/Name", "/Person/Age", "/Person/Submit"]
        );
    }

    #[test]
    fn initial_value_must_fit_the_kind() {
        let mut reg = Registry::new();
        let err = reg.add("Flag", WidgetKind::Checkbox, "on".into()).unwrap_err();
        assert!(matches!(err, UiError::TypeMismatch { .. }));
        assert!(reg.is_empty());
        assert!(reg.nav().is_empty());
    }
}
