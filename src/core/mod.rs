//! # Core Domain
//!
//! Pure values, no I/O, no state.
//!
//! - `Number`: integer or float, with the calculator's arithmetic rules
//! - `Output`: a computed result, numeric or rendered as text
//! - `CalculatorConfig`: construction-time settings
//! - `CalcError`: the two failure kinds
//! - `Operation`: the method surface, addressable by name

pub mod config;
pub mod error;
pub mod number;
pub mod operation;

use std::fmt;

pub use error::{CalcError, CalcResult};
pub use number::Number;
pub use operation::Operation;

/// A computed result
///
/// Numeric when stringify mode is off, text when it is on.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Number(Number),
    Text(String),
}

impl Output {
    /// Render `value` according to the stringify setting
    pub fn render(value: Number, stringify: bool) -> Self {
        if stringify {
            Output::Text(value.to_string())
        } else {
            Output::Number(value)
        }
    }

    pub fn as_number(&self) -> Option<Number> {
        match self {
            Output::Number(n) => Some(*n),
            Output::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Output::Number(_) => None,
            Output::Text(s) => Some(s),
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Output::Text(_))
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Number(n) => write!(f, "{}", n),
            Output::Text(s) => f.write_str(s),
        }
    }
}

impl From<Number> for Output {
    fn from(value: Number) -> Self {
        Output::Number(value)
    }
}

impl PartialEq<Number> for Output {
    fn eq(&self, other: &Number) -> bool {
        self.as_number().is_some_and(|n| n == *other)
    }
}

impl PartialEq<&str> for Output {
    fn eq(&self, other: &&str) -> bool {
        self.as_text() == Some(*other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_numeric() {
        let out = Output::render(Number::Int(3), false);
        assert_eq!(out, Number::Int(3));
        assert!(!out.is_text());
    }

    #[test]
    fn test_render_text() {
        let out = Output::render(Number::Float(3.0), true);
        assert_eq!(out, "3.0");
        assert_eq!(out.as_number(), None);
    }

    #[test]
    fn test_text_never_equals_number() {
        assert_ne!(Output::Text("3".to_string()), Number::Int(3));
        assert_ne!(Output::Number(Number::Int(3)), "3");
    }
}
