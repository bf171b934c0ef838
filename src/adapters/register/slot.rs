//! # Slot Register Adapter
//!
//! The default memory register: an owned `Option<Number>`.

use crate::core::Number;
use crate::ports::Register;

/// In-process single-slot register
#[derive(Debug, Clone, Default)]
pub struct SlotRegister {
    slot: Option<Number>,
}

impl SlotRegister {
    /// Create an empty register
    pub fn new() -> Self {
        Self::default()
    }
}

impl Register for SlotRegister {
    fn store(&mut self, value: Number) -> Number {
        self.slot = Some(value);
        value
    }

    fn take(&mut self) -> Option<Number> {
        self.slot.take()
    }

    fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}
