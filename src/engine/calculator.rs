//! # Calculator Engine
//!
//! The main calculator.
//!
//! This struct wires together:
//! - Configuration (stringify mode, fixed at construction)
//! - Memory register (Register port)
//!
//! And exposes the arithmetic and memory operations.

use tracing::debug;

use crate::adapters::register::SlotRegister;
use crate::core::config::CalculatorConfig;
use crate::core::{CalcError, CalcResult, Number, Operation, Output};
use crate::ports::Register;

/// The calculator
///
/// Arithmetic results come back as [`Output`]: numeric by default, text
/// when built in stringify mode. The stringify setting cannot be read or
/// changed after construction.
pub struct Calculator {
    stringify: bool,

    /// Memory backend (Register port)
    register: Box<dyn Register>,
}

impl Calculator {
    /// Create a calculator with the default register
    pub fn new(config: CalculatorConfig) -> Self {
        Self::with_register(config, Box::new(SlotRegister::new()))
    }

    /// Create a calculator that returns text results
    pub fn stringified() -> Self {
        Self::new(CalculatorConfig::stringified())
    }

    /// Create with a custom register
    pub fn with_register(config: CalculatorConfig, register: Box<dyn Register>) -> Self {
        Self {
            stringify: config.stringify,
            register,
        }
    }

    fn render(&self, value: Number) -> Output {
        Output::render(value, self.stringify)
    }

    // ========================================================================
    // ARITHMETIC
    // ========================================================================

    pub fn add(&self, a: impl Into<Number>, b: impl Into<Number>) -> CalcResult<Output> {
        let (a, b) = (a.into(), b.into());
        debug!(%a, %b, "add");
        Ok(self.render(a + b))
    }

    pub fn subtract(&self, a: impl Into<Number>, b: impl Into<Number>) -> CalcResult<Output> {
        let (a, b) = (a.into(), b.into());
        debug!(%a, %b, "subtract");
        Ok(self.render(a - b))
    }

    pub fn multiply(&self, a: impl Into<Number>, b: impl Into<Number>) -> CalcResult<Output> {
        let (a, b) = (a.into(), b.into());
        debug!(%a, %b, "multiply");
        Ok(self.render(a * b))
    }

    /// Divide `a` by `b`
    ///
    /// Fails with `InvalidArgument` when `b` is zero, in either mode.
    /// Exact divisions give an integer, others a float.
    pub fn divide(&self, a: impl Into<Number>, b: impl Into<Number>) -> CalcResult<Output> {
        let (a, b) = (a.into(), b.into());
        debug!(%a, %b, "divide");
        let quotient = a.divide(b).inspect_err(|e| debug!(%a, %b, error = %e, "divide rejected"))?;
        Ok(self.render(quotient))
    }

    /// Raise `a` to the power `b`; always a float
    pub fn pow(&self, a: impl Into<Number>, b: impl Into<Number>) -> CalcResult<Output> {
        let (a, b) = (a.into(), b.into());
        debug!(%a, %b, "pow");
        Ok(self.render(a.pow(b)))
    }

    /// Square root of `a`
    ///
    /// Fails with `InvalidArgument` for negative input. Integral roots are
    /// integers; others are rounded to two decimal places.
    pub fn sqrt(&self, a: impl Into<Number>) -> CalcResult<Output> {
        let a = a.into();
        debug!(%a, "sqrt");
        let root = a.sqrt().inspect_err(|e| debug!(%a, error = %e, "sqrt rejected"))?;
        Ok(self.render(root))
    }

    // ========================================================================
    // MEMORY
    // ========================================================================

    /// Store `value` in memory, replacing what was there
    ///
    /// Returns the stored value as a number, even in stringify mode.
    pub fn set_memory(&mut self, value: impl Into<Number>) -> Number {
        let value = value.into();
        debug!(%value, "memory store");
        self.register.store(value)
    }

    /// Read memory and clear it
    ///
    /// Returns `None` when nothing is stored. The value is stringified in
    /// stringify mode.
    pub fn memory(&mut self) -> Option<Output> {
        let value = self.register.take();
        debug!(present = value.is_some(), "memory recall");
        value.map(|v| self.render(v))
    }

    // ========================================================================
    // DISPATCH
    // ========================================================================

    /// Run an operation by name
    ///
    /// `name` is one of the [`Operation`] names. Unknown names, including
    /// `"stringify"`, fail with `UnsupportedOperation`; a wrong number of
    /// arguments fails with `InvalidArgument`. Returns `None` only when
    /// reading empty memory.
    pub fn invoke(&mut self, name: &str, args: &[Number]) -> CalcResult<Option<Output>> {
        let op: Operation = name
            .parse()
            .inspect_err(|_| debug!(name, "unsupported operation"))?;

        match (op, args) {
            (Operation::Add, &[a, b]) => self.add(a, b).map(Some),
            (Operation::Subtract, &[a, b]) => self.subtract(a, b).map(Some),
            (Operation::Multiply, &[a, b]) => self.multiply(a, b).map(Some),
            (Operation::Divide, &[a, b]) => self.divide(a, b).map(Some),
            (Operation::Pow, &[a, b]) => self.pow(a, b).map(Some),
            (Operation::Sqrt, &[a]) => self.sqrt(a).map(Some),
            (Operation::ReadMemory, &[]) => Ok(self.memory()),
            (Operation::WriteMemory, &[value]) => Ok(Some(Output::Number(self.set_memory(value)))),
            (op, args) => Err(CalcError::InvalidArgument(format!(
                "wrong number of arguments for {} (given {}, expected {})",
                op,
                args.len(),
                op.arity()
            ))),
        }
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(CalculatorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::register::SharedRegister;

    #[test]
    fn test_calculator_default_is_numeric() {
        let calc = Calculator::default();
        assert_eq!(calc.add(1, 2).unwrap(), Number::Int(3));
    }

    #[test]
    fn test_calculator_fresh_memory_is_empty() {
        let mut calc = Calculator::default();
        assert_eq!(calc.memory(), None);
    }

    #[test]
    fn test_calculator_stringified() {
        let calc = Calculator::stringified();
        assert_eq!(calc.add(1, 2).unwrap(), "3");
        assert_eq!(calc.divide(2, 3).unwrap(), "0.6666666666666666");
    }

    #[test]
    fn test_calculator_errors_not_stringified() {
        let calc = Calculator::stringified();
        assert!(matches!(calc.divide(2, 0), Err(CalcError::InvalidArgument(_))));
        assert!(matches!(calc.sqrt(-1), Err(CalcError::InvalidArgument(_))));
    }

    #[test]
    fn test_calculator_set_memory_returns_number_in_stringify_mode() {
        let mut calc = Calculator::stringified();
        assert_eq!(calc.set_memory(8), Number::Int(8));
        assert_eq!(calc.memory(), Some(Output::Text("8".to_string())));
        assert_eq!(calc.memory(), None);
    }

    #[test]
    fn test_calculator_shared_register() {
        let register = SharedRegister::new();
        let mut a = Calculator::with_register(CalculatorConfig::new(), Box::new(register.clone()));
        let mut b = Calculator::with_register(CalculatorConfig::stringified(), Box::new(register));

        a.set_memory(7);
        assert_eq!(b.memory(), Some(Output::Text("7".to_string())));
        assert_eq!(a.memory(), None);
    }

    #[test]
    fn test_invoke_dispatches_by_name() {
        let mut calc = Calculator::default();

        assert_eq!(
            calc.invoke("multiply", &[Number::Int(2), Number::Int(3)]).unwrap(),
            Some(Output::Number(Number::Int(6)))
        );
        assert_eq!(
            calc.invoke("memory=", &[Number::Int(8)]).unwrap(),
            Some(Output::Number(Number::Int(8)))
        );
        assert_eq!(
            calc.invoke("memory", &[]).unwrap(),
            Some(Output::Number(Number::Int(8)))
        );
        assert_eq!(calc.invoke("memory", &[]).unwrap(), None);
    }

    #[test]
    fn test_invoke_stringify_is_unsupported() {
        let mut calc = Calculator::stringified();
        assert_eq!(
            calc.invoke("stringify", &[]),
            Err(CalcError::UnsupportedOperation("stringify".to_string()))
        );
    }

    #[test]
    fn test_invoke_wrong_arity() {
        let mut calc = Calculator::default();
        assert!(matches!(
            calc.invoke("add", &[Number::Int(1)]),
            Err(CalcError::InvalidArgument(_))
        ));
        assert!(matches!(
            calc.invoke("memory", &[Number::Int(1)]),
            Err(CalcError::InvalidArgument(_))
        ));
    }
}
