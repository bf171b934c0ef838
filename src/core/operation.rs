//! # Operations
//!
//! The calculator's method surface as data, for dispatch by name.
//! Anything not listed here is an unsupported operation.

use std::fmt;
use std::str::FromStr;

use super::error::CalcError;

/// A named calculator operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Pow,
    Sqrt,
    /// Read and clear the memory register
    ReadMemory,
    /// Overwrite the memory register
    WriteMemory,
}

impl Operation {
    /// Every supported operation
    pub const ALL: [Operation; 8] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Pow,
        Operation::Sqrt,
        Operation::ReadMemory,
        Operation::WriteMemory,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Pow => "pow",
            Operation::Sqrt => "sqrt",
            Operation::ReadMemory => "memory",
            Operation::WriteMemory => "memory=",
        }
    }

    /// Number of numeric arguments the operation takes
    pub fn arity(&self) -> usize {
        match self {
            Operation::Add
            | Operation::Subtract
            | Operation::Multiply
            | Operation::Divide
            | Operation::Pow => 2,
            Operation::Sqrt | Operation::WriteMemory => 1,
            Operation::ReadMemory => 0,
        }
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Operation::Add),
            "subtract" => Ok(Operation::Subtract),
            "multiply" => Ok(Operation::Multiply),
            "divide" => Ok(Operation::Divide),
            "pow" => Ok(Operation::Pow),
            "sqrt" => Ok(Operation::Sqrt),
            "memory" => Ok(Operation::ReadMemory),
            "memory=" | "set_memory" => Ok(Operation::WriteMemory),
            other => Err(CalcError::UnsupportedOperation(other.to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
