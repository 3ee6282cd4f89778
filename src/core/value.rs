//! The scalar value holder behind every widget.

use std::fmt;

/// A widget's current value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl Value {
    /// Short name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Text(_) => "text",
            Value::Number(_) => "a number",
            Value::Bool(_) => "a boolean",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Convert `incoming` into the same variant as `self`, if the holder can
    /// store it.  Text accepts anything, numbers accept numeric text, booleans
    /// only accept booleans.
    pub(crate) fn coerce(&self, incoming: Value) -> Option<Value> {
        match (self, incoming) {
            (Value::Text(_), Value::Text(s)) => Some(Value::Text(s)),
            (Value::Text(_), other) => Some(Value::Text(other.to_string())),
            (Value::Number(_), Value::Number(n)) => Some(Value::Number(n)),
            (Value::Number(_), Value::Text(s)) => s.trim().parse().ok().map(Value::Number),
            (Value::Bool(_), Value::Bool(b)) => Some(Value::Bool(b)),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Number(n) => write!(f, "{}", format_number(*n)),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Integral numbers print without a fractional part (`30`, not `30.0`).
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_holder_accepts_anything() {
        let holder = Value::from("");
        assert_eq!(holder.coerce(Value::from(42)), Some(Value::from("42")));
        assert_eq!(holder.coerce(true.into()), Some(Value::from("true")));
    }

    #[test]
    fn number_holder_parses_text() {
        let holder = Value::from(0.0);
        assert_eq!(holder.coerce(" 2.5 ".into()), Some(Value::Number(2.5)));
        assert_eq!(holder.coerce("abc".into()), None);
        assert_eq!(holder.coerce(false.into()), None);
    }

    #[test]
    fn bool_holder_is_strict() {
        let holder = Value::from(false);
        assert_eq!(holder.coerce(true.into()), Some(Value::Bool(true)));
        assert_eq!(holder.coerce("true".into()), None);
    }

    #[test]
    fn numbers_display_compactly() {
        assert_eq!(Value::from(30).to_string(), "30");
        assert_eq!(Value::from(0.25).to_string(), "0.25");
    }
}
