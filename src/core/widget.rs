//! Widget kinds and the per-kind value rules.

use super::value::Value;

/// What kind of widget sits at a path, plus its construction parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetKind {
    Textbox,
    Selector { options: Vec<String> },
    Slider { min: f64, max: f64, step: f64 },
    Checkbox,
    BrowseFile,
    Button,
}

impl WidgetKind {
    pub fn name(&self) -> &'static str {
        match self {
            WidgetKind::Textbox => "textbox",
            WidgetKind::Selector { .. } => "selector",
            WidgetKind::Slider { .. } => "slider",
            WidgetKind::Checkbox => "checkbox",
            WidgetKind::BrowseFile => "browse_file",
            WidgetKind::Button => "button",
        }
    }

    /// The empty holder this kind starts from before its initial value.
    pub fn default_value(&self) -> Value {
        match self {
            WidgetKind::Textbox | WidgetKind::Selector { .. } | WidgetKind::BrowseFile => {
                Value::Text(String::new())
            }
            WidgetKind::Slider { min, .. } => Value::Number(*min),
            WidgetKind::Checkbox | WidgetKind::Button => Value::Bool(false),
        }
    }
}

/// Move a slider value by `delta` steps, snapping to the step grid anchored
/// at `min` and clamping to `[min, max]`.
pub fn step_slider(current: f64, min: f64, max: f64, step: f64, delta: i32) -> f64 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    if step <= 0.0 || !step.is_finite() {
        return current.clamp(lo, hi);
    }
    let index = ((current - lo) / step).round() + f64::from(delta);
    let snapped = lo + index * step;
    // Repeated float steps drift (0.1 + 0.2); trim back onto the grid.
    let snapped = lo + ((snapped - lo) / step).round() * step;
    snapped.clamp(lo, hi)
}

/// Fraction of the slider track filled by `value`, in `[0, 1]`.
pub fn slider_ratio(value: f64, min: f64, max: f64) -> f64 {
    if (max - min).abs() < f64::EPSILON {
        return 0.0;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

/// The option after `current`, wrapping around.  An unknown `current` moves
/// to the first (or last, going backwards) option.
pub fn cycle_option<'a>(options: &'a [String], current: &str, forward: bool) -> Option<&'a str> {
    if options.is_empty() {
        return None;
    }
    let len = options.len();
    let next = match options.iter().position(|o| o == current) {
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
        None if forward => 0,
        None => len - 1,
    };
    Some(options[next].as_str())
}
