//! # Configuration
//!
//! Construction-time settings for a calculator.
//!
//! Settings are read once when the calculator is built and cannot be
//! changed or read back afterwards.

/// Calculator configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalculatorConfig {
    /// Return computed results as text instead of numbers
    pub stringify: bool,
}

impl CalculatorConfig {
    /// Default configuration: numeric results
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with text results
    pub fn stringified() -> Self {
        Self { stringify: true }
    }

    /// Set stringify mode
    pub fn with_stringify(mut self, stringify: bool) -> Self {
        self.stringify = stringify;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_numeric() {
        assert!(!CalculatorConfig::new().stringify);
        assert!(!CalculatorConfig::default().stringify);
    }

    #[test]
    fn test_builder() {
        assert!(CalculatorConfig::stringified().stringify);
        assert!(CalculatorConfig::new().with_stringify(true).stringify);
        assert!(!CalculatorConfig::stringified().with_stringify(false).stringify);
    }
}
