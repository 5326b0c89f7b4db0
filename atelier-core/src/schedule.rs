//! Timed transition effects with key-based supersession.
//!
//! The UI sequences short visual transitions (fade-out before a content
//! swap, staggered card entrances, focus-after-reveal) with fire-and-forget
//! timers. Rather than letting a rapid pair of selections race two timers
//! for the same pane, every task carries a [`TaskKey`]: scheduling with a
//! key that is already pending replaces the stale task, so the most recent
//! request is the one that fires.
//!
//! Time is injected by the caller, which keeps the scheduler deterministic
//! under test and leaves the event loop free to pick its own poll cadence.

use std::time::{Duration, Instant};

/// Which transition a scheduled task belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionGroup {
    /// Hide → rebuild → show swap of the detail and visual panes.
    Swap,
    /// Staggered entrance of sub-project cards, one task per card index.
    Reveal,
    /// Moving keyboard focus to the first card once the reveal settles.
    Focus,
}

/// Identity of a scheduled task: its transition group plus an index for
/// groups that fan out per item (card reveals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskKey {
    pub group: TransitionGroup,
    pub index: usize,
}

impl TaskKey {
    pub const fn of(group: TransitionGroup) -> Self {
        Self { group, index: 0 }
    }

    pub const fn indexed(group: TransitionGroup, index: usize) -> Self {
        Self { group, index }
    }
}

#[derive(Debug)]
struct Entry<E> {
    key: TaskKey,
    due: Instant,
    effect: E,
}

/// A queue of pending timed effects.
#[derive(Debug)]
pub struct Scheduler<E> {
    entries: Vec<Entry<E>>,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Scheduler<E> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Schedule `effect` to fire `delay` after `now`. A pending task with
    /// the same key is superseded, so the newest request wins.
    pub fn schedule(&mut self, key: TaskKey, now: Instant, delay: Duration, effect: E) {
        self.entries.retain(|entry| entry.key != key);
        self.entries.push(Entry {
            key,
            due: now + delay,
            effect,
        });
    }

    /// Drop the pending task with this key, if any.
    pub fn cancel(&mut self, key: TaskKey) {
        self.entries.retain(|entry| entry.key != key);
    }

    /// Drop every pending task in a group (e.g. all card reveals when a new
    /// list render begins).
    pub fn cancel_group(&mut self, group: TransitionGroup) {
        self.entries.retain(|entry| entry.key.group != group);
    }

    /// Whether nothing is pending.
    pub fn is_idle(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deadline of the soonest pending task, for event-loop poll timeouts.
    pub fn next_due(&self) -> Option<Instant> {
        self.entries.iter().map(|entry| entry.due).min()
    }

    /// Drain every effect due at `now`, in deadline order.
    pub fn poll(&mut self, now: Instant) -> Vec<E> {
        let mut fired = Vec::new();
        let mut pending = Vec::new();
        for entry in self.entries.drain(..) {
            if entry.due <= now {
                fired.push(entry);
            } else {
                pending.push(entry);
            }
        }
        self.entries = pending;
        fired.sort_by_key(|entry| entry.due);
        fired.into_iter().map(|entry| entry.effect).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_fires_in_deadline_order() {
        let now = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(TaskKey::indexed(TransitionGroup::Reveal, 1), now, 80 * MS, "b");
        scheduler.schedule(TaskKey::indexed(TransitionGroup::Reveal, 0), now, 40 * MS, "a");

        assert_eq!(scheduler.poll(now + 10 * MS), Vec::<&str>::new());
        assert_eq!(scheduler.poll(now + 100 * MS), vec!["a", "b"]);
        assert!(scheduler.is_idle());
    }

    #[test]
    fn test_same_key_supersedes() {
        let now = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(TaskKey::of(TransitionGroup::Swap), now, 140 * MS, "first");
        scheduler.schedule(TaskKey::of(TransitionGroup::Swap), now + 50 * MS, 140 * MS, "second");

        // The first swap would have fired at now+140; only the second remains.
        assert_eq!(scheduler.poll(now + 150 * MS), Vec::<&str>::new());
        assert_eq!(scheduler.poll(now + 200 * MS), vec!["second"]);
    }

    #[test]
    fn test_cancel_group_clears_stagger() {
        let now = Instant::now();
        let mut scheduler = Scheduler::new();
        for index in 0..4 {
            scheduler.schedule(
                TaskKey::indexed(TransitionGroup::Reveal, index),
                now,
                40 * MS * (index as u32 + 1),
                index,
            );
        }
        scheduler.schedule(TaskKey::of(TransitionGroup::Swap), now, 140 * MS, 99);

        scheduler.cancel_group(TransitionGroup::Reveal);
        assert_eq!(scheduler.poll(now + 500 * MS), vec![99]);
    }

    #[test]
    fn test_next_due_tracks_soonest() {
        let now = Instant::now();
        let mut scheduler = Scheduler::new();
        assert!(scheduler.next_due().is_none());

        scheduler.schedule(TaskKey::of(TransitionGroup::Swap), now, 140 * MS, ());
        scheduler.schedule(TaskKey::of(TransitionGroup::Focus), now, 20 * MS, ());
        assert_eq!(scheduler.next_due(), Some(now + 20 * MS));
    }
}
