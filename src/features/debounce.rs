//! Keyed, replaceable scheduled work
//!
//! Scheduling a key hands out a [`Ticket`]; only the most recent ticket of
//! each key may fire. The timer itself lives in the app layer, which sleeps
//! and then asks [`Debouncer::fire`] whether the ticket is still current.

use std::collections::HashMap;
use std::hash::Hash;

/// Handle for one scheduled run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket<K> {
    pub key: K,
    pub generation: u64,
}

#[derive(Debug, Clone)]
pub struct Debouncer<K> {
    next_generation: u64,
    pending: HashMap<K, u64>,
}

impl<K: Eq + Hash + Clone> Debouncer<K> {
    pub fn new() -> Self {
        Self {
            next_generation: 0,
            pending: HashMap::new(),
        }
    }

    /// Schedule `key`, superseding any ticket already pending for it
    pub fn schedule(&mut self, key: K) -> Ticket<K> {
        self.next_generation += 1;
        self.pending.insert(key.clone(), self.next_generation);
        Ticket {
            key,
            generation: self.next_generation,
        }
    }

    /// True when `ticket` is the latest for its key; firing consumes it
    pub fn fire(&mut self, ticket: &Ticket<K>) -> bool {
        match self.pending.get(&ticket.key) {
            Some(&generation) if generation == ticket.generation => {
                self.pending.remove(&ticket.key);
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self, key: &K) {
        self.pending.remove(key);
    }

    pub fn is_pending(&self, key: &K) -> bool {
        self.pending.contains_key(key)
    }
}

impl<K: Eq + Hash + Clone> Default for Debouncer<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_fires() {
        let mut debouncer = Debouncer::new();
        let first = debouncer.schedule("suggest");
        let second = debouncer.schedule("suggest");

        assert!(!debouncer.fire(&first));
        assert!(debouncer.fire(&second));
        // Consumed
        assert!(!debouncer.fire(&second));
        assert!(!debouncer.is_pending(&"suggest"));
    }

    #[test]
    fn test_keys_are_independent() {
        let mut debouncer = Debouncer::new();
        let a = debouncer.schedule("a");
        let b = debouncer.schedule("b");
        let _a2 = debouncer.schedule("a");

        assert!(!debouncer.fire(&a));
        assert!(debouncer.fire(&b));
        assert!(debouncer.is_pending(&"a"));
    }

    #[test]
    fn test_cancel_drops_pending_ticket() {
        let mut debouncer = Debouncer::new();
        let ticket = debouncer.schedule(1u8);
        debouncer.cancel(&1);
        assert!(!debouncer.fire(&ticket));
    }
}
