// src/application/scheduler.rs
use tracing::trace;

/// Identifies a scheduled task so it can be cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

/// A task whose due time was reached during [`DeferredScheduler::advance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiredTask<T> {
    pub handle: TaskHandle,
    pub due: u64,
    pub task: T,
}

#[derive(Debug)]
struct Pending<T> {
    handle: TaskHandle,
    due: u64,
    task: T,
}

/// Deferred tasks on a virtual timeline measured in milliseconds.
///
/// Nothing fires on its own. Whoever owns the scheduler moves time forward with
/// [`advance`](Self::advance) and handles the tasks that come due, which keeps
/// timing fully deterministic under test.
#[derive(Debug)]
pub struct DeferredScheduler<T> {
    now: u64,
    next_handle: u64,
    pending: Vec<Pending<T>>,
}

impl<T> DeferredScheduler<T> {
    pub fn new() -> Self {
        Self {
            now: 0,
            next_handle: 0,
            pending: Vec::new(),
        }
    }

    /// Current position on the virtual timeline.
    pub fn now(&self) -> u64 {
        self.now
    }

    pub fn schedule(&mut self, task: T, delay_ms: u64) -> TaskHandle {
        let handle = TaskHandle(self.next_handle);
        self.next_handle += 1;
        let due = self.now.saturating_add(delay_ms);
        trace!(?handle, due, "Scheduled deferred task");
        self.pending.push(Pending { handle, due, task });
        handle
    }

    /// Returns `false` when the task already fired or was cancelled before.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.handle != handle);
        let cancelled = self.pending.len() != before;
        if cancelled {
            trace!(?handle, "Cancelled deferred task");
        }
        cancelled
    }

    /// Drop every pending task, returning how many were cancelled.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.pending.len();
        self.pending.clear();
        count
    }

    pub fn is_scheduled(&self, handle: TaskHandle) -> bool {
        self.pending.iter().any(|p| p.handle == handle)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Earliest due time among pending tasks.
    pub fn next_due(&self) -> Option<u64> {
        self.pending.iter().map(|p| p.due).min()
    }

    /// Milliseconds from now until the earliest pending task comes due.
    pub fn time_until_next(&self) -> Option<u64> {
        self.next_due().map(|due| due.saturating_sub(self.now))
    }

    /// Move time forward by `elapsed_ms` and return every task that came due,
    /// ordered by due time and then by scheduling order.
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<FiredTask<T>> {
        self.now = self.now.saturating_add(elapsed_ms);
        let now = self.now;

        let (due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|p| p.due <= now);
        self.pending = waiting;

        let mut fired: Vec<FiredTask<T>> = due
            .into_iter()
            .map(|p| FiredTask {
                handle: p.handle,
                due: p.due,
                task: p.task,
            })
            .collect();
        fired.sort_by_key(|f| (f.due, f.handle.0));
        fired
    }
}

impl<T> Default for DeferredScheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_task_when_advancing_short_of_delay_then_nothing_fires() {
        // Arrange
        let mut scheduler = DeferredScheduler::new();
        scheduler.schedule("save", 1000);

        // Act
        let fired = scheduler.advance(999);

        // Assert
        assert!(fired.is_empty());
        assert_eq!(scheduler.time_until_next(), Some(1));
    }

    #[test]
    fn given_task_when_advancing_to_delay_then_fires_at_due_time() {
        let mut scheduler = DeferredScheduler::new();
        scheduler.advance(250);
        let handle = scheduler.schedule("save", 1000);

        let fired = scheduler.advance(1000);

        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].handle, handle);
        assert_eq!(fired[0].due, 1250);
        assert_eq!(fired[0].task, "save");
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn given_cancelled_task_when_advancing_then_it_never_fires() {
        let mut scheduler = DeferredScheduler::new();
        let handle = scheduler.schedule("save", 10);

        assert!(scheduler.cancel(handle));
        assert!(!scheduler.cancel(handle));
        assert!(scheduler.advance(100).is_empty());
    }

    #[test]
    fn given_several_tasks_when_advancing_past_all_then_fire_in_due_order() {
        let mut scheduler = DeferredScheduler::new();
        scheduler.schedule("late", 300);
        scheduler.schedule("early", 100);
        scheduler.schedule("tie-first", 200);
        scheduler.schedule("tie-second", 200);

        let fired: Vec<_> = scheduler.advance(500).into_iter().map(|f| f.task).collect();

        assert_eq!(fired, vec!["early", "tie-first", "tie-second", "late"]);
    }

    #[test]
    fn given_pending_tasks_when_cancelling_all_then_queue_is_empty() {
        let mut scheduler = DeferredScheduler::new();
        scheduler.schedule(1, 10);
        scheduler.schedule(2, 20);

        assert_eq!(scheduler.cancel_all(), 2);
        assert_eq!(scheduler.next_due(), None);
        assert_eq!(scheduler.time_until_next(), None);
    }
}
