//! Deadline timers owned by the engine.
//!
//! Timers never call back into anything; the engine polls for due entries on
//! each tick. Cancelling a timer removes it, so a superseded transition can
//! never fire later.

use smallvec::SmallVec;

/// Handle for a scheduled timer. Handles are never reused within a queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimerId(u64);

#[derive(Clone, Copy, Debug, PartialEq)]
struct Pending<K> {
    id: TimerId,
    deadline_ms: f64,
    kind: K,
}

#[derive(Debug)]
pub struct TimerQueue<K> {
    pending: SmallVec<[Pending<K>; 4]>,
    next_id: u64,
}

impl<K> Default for TimerQueue<K> {
    fn default() -> Self {
        Self {
            pending: SmallVec::new(),
            next_id: 1,
        }
    }
}

impl<K: Copy> TimerQueue<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, deadline_ms: f64, kind: K) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            id,
            deadline_ms,
            kind,
        });
        id
    }

    /// Returns `false` if the timer already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.pending.iter().position(|p| p.id == id) {
            Some(i) => {
                self.pending.remove(i);
                true
            }
            None => false,
        }
    }

    /// Drop every pending timer, returning how many there were.
    pub fn cancel_all(&mut self) -> usize {
        let n = self.pending.len();
        self.pending.clear();
        n
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|p| p.id == id)
    }

    pub fn deadline(&self, id: TimerId) -> Option<f64> {
        self.pending
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.deadline_ms)
    }

    /// Remove and return the earliest timer whose deadline is at or before
    /// `now_ms`, along with that deadline.
    pub fn pop_due(&mut self, now_ms: f64) -> Option<(TimerId, K, f64)> {
        let (i, _) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.deadline_ms <= now_ms)
            .min_by(|(_, a), (_, b)| a.deadline_ms.total_cmp(&b.deadline_ms))?;
        let p = self.pending.remove(i);
        Some((p.id, p.kind, p.deadline_ms))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_deadline_order_regardless_of_schedule_order() {
        let mut q = TimerQueue::new();
        q.schedule(300.0, 'c');
        q.schedule(100.0, 'a');
        q.schedule(200.0, 'b');
        assert_eq!(q.pop_due(50.0), None);
        assert_eq!(q.pop_due(1_000.0).map(|(_, k, _)| k), Some('a'));
        assert_eq!(q.pop_due(1_000.0).map(|(_, k, _)| k), Some('b'));
        assert_eq!(q.pop_due(1_000.0).map(|(_, k, d)| (k, d)), Some(('c', 300.0)));
        assert!(q.is_empty());
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut q = TimerQueue::new();
        let id = q.schedule(10.0, ());
        assert!(q.cancel(id));
        assert!(!q.cancel(id));
        assert_eq!(q.pop_due(f64::MAX), None);
    }

    #[test]
    fn ids_are_not_reused_after_cancel_all() {
        let mut q = TimerQueue::new();
        let a = q.schedule(10.0, ());
        assert_eq!(q.cancel_all(), 1);
        let b = q.schedule(10.0, ());
        assert_ne!(a, b);
        assert!(!q.is_pending(a));
        assert_eq!(q.deadline(b), Some(10.0));
    }
}
