//! # memocalc
//!
//! A basic arithmetic calculator with a one-slot memory register.
//!
//! Six operations (add, subtract, multiply, divide, pow, sqrt) plus a memory
//! register that holds one value and clears on read. A calculator built in
//! stringify mode returns every computed result as text.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        memocalc                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  CORE (pure values, no I/O)                                 │
//! │    Number, Output, CalculatorConfig, CalcError, Operation   │
//! │                                                              │
//! │  PORTS (trait contracts)                                     │
//! │    Register                                                  │
//! │                                                              │
//! │  ADAPTERS (swappable implementations)                       │
//! │    Register: Slot, Shared                                   │
//! │    API: Python bindings                                      │
//! │                                                              │
//! │  ENGINE (orchestration)                                      │
//! │    Calculator - the main entry point                        │
//! │                                                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use memocalc::{Calculator, Number};
//!
//! let mut calc = Calculator::default();
//! assert_eq!(calc.divide(4, 2).unwrap(), Number::Int(2));
//! assert_eq!(calc.sqrt(8).unwrap(), Number::Float(2.83));
//!
//! calc.set_memory(8);
//! assert_eq!(calc.memory().unwrap(), Number::Int(8));
//! assert!(calc.memory().is_none());
//!
//! let text = Calculator::stringified();
//! assert_eq!(text.pow(3, 3).unwrap(), "27.0");
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Core domain - pure values, no I/O
/// Contains: Number, Output, CalculatorConfig, CalcError, Operation
pub mod core;

/// Port definitions - trait contracts for adapters
/// Contains: Register trait
pub mod ports;

/// Adapter implementations - swappable components
/// Contains: register, python submodules
pub mod adapters;

/// Engine - orchestration layer
/// Contains: Calculator main struct
pub mod engine;

// ============================================================================
// PYTHON BINDINGS (when enabled)
// ============================================================================

#[cfg(feature = "python")]
pub use adapters::python::*;

// ============================================================================
// RE-EXPORTS (public API)
// ============================================================================

// Core types
pub use crate::core::{CalcError, CalcResult, Number, Operation, Output};
pub use crate::core::config::CalculatorConfig;

// Port traits
pub use crate::ports::Register;

// Adapters
pub use crate::adapters::register::{SharedRegister, SlotRegister};

// Engine
pub use crate::engine::Calculator;
