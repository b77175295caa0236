//! One-shot delayed tasks driven by the fixed game tick.
//!
//! At most one task of each kind is pending at a time: scheduling a kind that
//! is already pending cancels the earlier one first. Every scheduled task gets
//! a [`TaskHandle`] that can be used to cancel it before it fires.

use arrayvec::ArrayVec;

/// Follow-up transitions the controller can schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScheduledTask {
    /// Move on to the next level after a reveal.
    AdvanceLevel,
    /// Stop shaking the images after a wrong answer.
    ClearShake,
}

impl ScheduledTask {
    /// Number of distinct task kinds (and so the pending capacity).
    pub const COUNT: usize = 2;

    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduledTask::AdvanceLevel => "advanceLevel",
            ScheduledTask::ClearShake => "clearShake",
        }
    }
}

/// Identifies one scheduled task instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Pending {
    handle: TaskHandle,
    task: ScheduledTask,
    due_at_ms: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Scheduler {
    now_ms: u64,
    next_id: u32,
    pending: ArrayVec<Pending, { ScheduledTask::COUNT }>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds of game time seen so far.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Schedule `task` to fire `delay_ms` from now, replacing a pending task of the same kind.
    pub fn schedule(&mut self, task: ScheduledTask, delay_ms: u32) -> TaskHandle {
        self.cancel_task(task);

        let handle = TaskHandle(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);

        // One slot per kind, and the kind was just removed.
        self.pending.push(Pending {
            handle,
            task,
            due_at_ms: self.now_ms + delay_ms as u64,
        });
        handle
    }

    /// Cancel a specific task instance. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.handle != handle);
        self.pending.len() != before
    }

    /// Cancel whatever task of this kind is pending.
    pub fn cancel_task(&mut self, task: ScheduledTask) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.task != task);
        self.pending.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn is_pending(&self, task: ScheduledTask) -> bool {
        self.pending.iter().any(|p| p.task == task)
    }

    /// Milliseconds until `task` fires, if it is pending.
    pub fn remaining_ms(&self, task: ScheduledTask) -> Option<u64> {
        self.pending
            .iter()
            .find(|p| p.task == task)
            .map(|p| p.due_at_ms.saturating_sub(self.now_ms))
    }

    /// Advance game time and return the tasks that came due, earliest first.
    pub fn tick(&mut self, elapsed_ms: u32) -> ArrayVec<ScheduledTask, { ScheduledTask::COUNT }> {
        self.now_ms += elapsed_ms as u64;

        let mut due: ArrayVec<Pending, { ScheduledTask::COUNT }> = ArrayVec::new();
        let now = self.now_ms;
        self.pending.retain(|p| {
            if p.due_at_ms <= now {
                due.push(*p);
                false
            } else {
                true
            }
        });
        due.sort_unstable_by_key(|p| (p.due_at_ms, p.handle.0));

        due.iter().map(|p| p.task).collect()
    }
}
