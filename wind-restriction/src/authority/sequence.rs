//! Identifier sequences.

use std::sync::atomic::{AtomicU64, Ordering};

/// A source of unique, strictly increasing identifiers.
///
/// Implementations must never hand out the same value twice, including when
/// called from several threads at once. Once no larger identifier remains the
/// sequence is exhausted and stays exhausted.
pub trait IdSequence {
    /// Allocate the next identifier, or `None` if the sequence is exhausted.
    fn next_id(&self) -> Option<u64>;
}

/// Lock-free counter sequence, starting at 1 unless seeded.
///
/// `u64::MAX` is never issued; it marks the exhausted sequence.
///
/// # Examples
///
/// ```
/// use wind_restriction::authority::{AtomicSequence, IdSequence};
///
/// let seq = AtomicSequence::starting_at(40);
/// assert_eq!(seq.next_id(), Some(40));
/// assert_eq!(seq.next_id(), Some(41));
///
/// let last = AtomicSequence::starting_at(u64::MAX - 1);
/// assert_eq!(last.next_id(), Some(u64::MAX - 1));
/// assert_eq!(last.next_id(), None);
/// ```
#[derive(Debug)]
pub struct AtomicSequence {
    next: AtomicU64,
}

impl AtomicSequence {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Create a sequence whose first identifier is `first`.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// The identifier the next call to `next_id` will return.
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::SeqCst)
    }

    /// Restart the sequence at `first`.
    ///
    /// Only for tests and fresh deployments: identifiers issued before the
    /// reset may be issued again.
    pub fn reset(&self, first: u64) {
        self.next.store(first, Ordering::SeqCst);
    }
}

impl Default for AtomicSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSequence for AtomicSequence {
    fn next_id(&self) -> Option<u64> {
        self.next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_add(1))
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn starts_at_one() {
        let seq = AtomicSequence::new();
        assert_eq!(seq.next_id(), Some(1));
        assert_eq!(seq.next_id(), Some(2));
        assert_eq!(seq.peek(), 3);
    }

    #[test]
    fn reset_restarts() {
        let seq = AtomicSequence::default();
        seq.next_id();
        seq.next_id();
        seq.reset(100);
        assert_eq!(seq.next_id(), Some(100));
    }

    #[test]
    fn concurrent_allocation_never_duplicates() {
        let seq = Arc::new(AtomicSequence::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let seq = Arc::clone(&seq);
                thread::spawn(move || (0..1000).map(|_| seq.next_id().unwrap()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "duplicate id {id}");
            }
        }
        assert_eq!(seen.len(), 8000);
        assert_eq!(seq.peek(), 8001);
    }

    #[test]
    fn exhausted_sequence_never_wraps() {
        let seq = AtomicSequence::starting_at(u64::MAX - 2);
        assert_eq!(seq.next_id(), Some(u64::MAX - 2));
        assert_eq!(seq.next_id(), Some(u64::MAX - 1));
        assert_eq!(seq.next_id(), None);
        assert_eq!(seq.next_id(), None);
        assert_eq!(seq.peek(), u64::MAX);
    }

    #[test]
    fn seeded_at_max_issues_nothing() {
        let seq = AtomicSequence::starting_at(u64::MAX);
        assert_eq!(seq.next_id(), None);
    }

    #[test]
    fn concurrent_allocation_near_exhaustion() {
        let seq = Arc::new(AtomicSequence::starting_at(u64::MAX - 100));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let seq = Arc::clone(&seq);
                thread::spawn(move || (0..50).filter_map(|_| seq.next_id()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "duplicate id {id}");
            }
        }
        assert_eq!(seen.len(), 100);
        assert!(seen.iter().all(|&id| id >= u64::MAX - 100 && id < u64::MAX));
    }
}
