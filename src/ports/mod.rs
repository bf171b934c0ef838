//! # Ports
//!
//! Trait contracts that adapters implement.
//!
//! - `Register`: the calculator's single memory slot

use crate::core::Number;

/// A single-slot memory register
///
/// Holds at most one number. Reading is destructive: `take` always leaves
/// the register empty, whether or not it held a value.
pub trait Register: Send {
    /// Store `value`, replacing any previous content. Returns `value`.
    fn store(&mut self, value: Number) -> Number;

    /// Remove and return the stored value
    fn take(&mut self) -> Option<Number>;

    /// Check whether the register holds nothing
    fn is_empty(&self) -> bool;
}
