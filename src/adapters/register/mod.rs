//! # Register Adapters
//!
//! Implementations of the Register port.
//!
//! Available adapters:
//! - `SlotRegister` - owned `Option` slot (default)
//! - `SharedRegister` - one slot shared by several calculators, across threads

mod shared;
mod slot;

pub use shared::SharedRegister;
pub use slot::SlotRegister;
