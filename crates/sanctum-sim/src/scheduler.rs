//! Cancellable one-shot tasks due at a wall-clock time.
//!
//! Every scheduled task gets a `TaskId` that is never reused, even across
//! `clear`. Owners keep the id of the task they care about and compare it
//! when the task fires, so a task that outlived its purpose is ignored.

/// Handle to a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

#[derive(Debug)]
struct Scheduled<T> {
    id: TaskId,
    due_secs: f64,
    task: T,
}

/// Pending deferred work, ordered by due time then by scheduling order.
#[derive(Debug)]
pub struct Scheduler<T> {
    next_id: u64,
    pending: Vec<Scheduled<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            pending: Vec::new(),
        }
    }

    /// Schedule `task` to become due at `due_secs`.
    pub fn schedule(&mut self, due_secs: f64, task: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.pending.push(Scheduled { id, due_secs, task });
        id
    }

    /// Drop a pending task. Returns false if it already ran or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|s| s.id != id);
        self.pending.len() != before
    }

    pub fn is_pending(&self, id: TaskId) -> bool {
        self.pending.iter().any(|s| s.id == id)
    }

    /// Remove and return every task due at or before `now_secs`.
    pub fn drain_due(&mut self, now_secs: f64) -> Vec<(TaskId, T)> {
        if !self.pending.iter().any(|s| s.due_secs <= now_secs) {
            return Vec::new();
        }

        let (mut due, rest): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|s| s.due_secs <= now_secs);
        self.pending = rest;

        due.sort_by(|a, b| a.due_secs.total_cmp(&b.due_secs).then(a.id.cmp(&b.id)));
        due.into_iter().map(|s| (s.id, s.task)).collect()
    }

    /// Drop every pending task. Ids keep counting up.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drains_in_due_order() {
        let mut s = Scheduler::new();
        s.schedule(2.0, "late");
        s.schedule(1.0, "early");
        s.schedule(5.0, "future");

        let due: Vec<_> = s.drain_due(2.0).into_iter().map(|(_, t)| t).collect();
        assert_eq!(due, vec!["early", "late"]);
        assert_eq!(s.len(), 1);
        assert!(s.drain_due(4.9).is_empty());
    }

    #[test]
    fn test_ties_keep_schedule_order() {
        let mut s = Scheduler::new();
        let a = s.schedule(1.0, 'a');
        let b = s.schedule(1.0, 'b');
        let drained = s.drain_due(1.0);
        assert_eq!(drained, vec![(a, 'a'), (b, 'b')]);
    }

    #[test]
    fn test_cancel() {
        let mut s = Scheduler::new();
        let id = s.schedule(1.0, ());
        assert!(s.is_pending(id));
        assert!(s.cancel(id));
        assert!(!s.cancel(id));
        assert!(s.drain_due(10.0).is_empty());
    }

    #[test]
    fn test_ids_not_reused_after_clear() {
        let mut s = Scheduler::new();
        let first = s.schedule(1.0, ());
        s.clear();
        assert!(s.is_empty());
        let second = s.schedule(1.0, ());
        assert_ne!(first, second);
    }
}
