//! Ordered record of which options have been set or changed.
//!
//! Only options listed here are written back to the rc file, in the order
//! they were first recorded.

/// Ordered, duplicate-free list of option-table indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeLedger {
    order: Vec<usize>,
}

impl ChangeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `index` unless it is already recorded. Returns `true` if added.
    pub fn remember(&mut self, index: usize) -> bool {
        if self.order.contains(&index) {
            return false;
        }
        self.order.push(index);
        true
    }

    pub fn contains(&self, index: usize) -> bool {
        self.order.contains(&index)
    }

    pub fn clear(&mut self) {
        self.order.clear();
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Recorded indices in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().copied()
    }
}
