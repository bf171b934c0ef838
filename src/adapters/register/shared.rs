//! # Shared Register Adapter
//!
//! One memory slot behind a lock, handed out as cloneable handles.
//!
//! Every clone refers to the same slot, so calculators built with clones of
//! one `SharedRegister` share their memory. Each `store` and `take` is a
//! single critical section; a value stored once is taken by exactly one
//! reader.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::core::Number;
use crate::ports::Register;

/// Lock-guarded single-slot register
#[derive(Debug, Clone, Default)]
pub struct SharedRegister {
    slot: Arc<Mutex<Option<Number>>>,
}

impl SharedRegister {
    /// Create an empty shared register
    pub fn new() -> Self {
        Self::default()
    }

    /// Look at the stored value without clearing it
    pub fn peek(&self) -> Option<Number> {
        *self.slot.lock()
    }
}

impl Register for SharedRegister {
    fn store(&mut self, value: Number) -> Number {
        *self.slot.lock() = Some(value);
        value
    }

    fn take(&mut self) -> Option<Number> {
        self.slot.lock().take()
    }

    fn is_empty(&self) -> bool {
        self.slot.lock().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clones_share_slot() {
        let mut writer = SharedRegister::new();
        let mut reader = writer.clone();

        writer.store(Number::Int(8));
        assert_eq!(reader.peek(), Some(Number::Int(8)));

        assert_eq!(reader.take(), Some(Number::Int(8)));
        assert!(writer.is_empty());
    }

    #[test]
    fn test_single_reader_across_threads() {
        let mut register = SharedRegister::new();
        register.store(Number::Int(42));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let mut handle = register.clone();
                thread::spawn(move || handle.take())
            })
            .collect();

        let taken: Vec<_> = handles
            .into_iter()
            .filter_map(|h| h.join().unwrap())
            .collect();

        assert_eq!(taken, vec![Number::Int(42)]);
        assert!(register.is_empty());
    }
}
