//! # Engine
//!
//! The orchestration layer that wires everything together.
//!
//! This is where:
//! - Configuration is applied
//! - The register adapter is connected to its port
//! - The calculator's method surface is exposed

mod calculator;

pub use calculator::Calculator;
