//! # Adapters
//!
//! Swappable implementations of port traits, plus the outer surfaces.
//!
//! - Register adapters: Slot (plain), Shared (lock-guarded, cloneable)
//! - Python bindings (when enabled)
//!
//! Register adapters can be swapped without changing the engine.

pub mod register;

#[cfg(feature = "python")]
pub mod python;
