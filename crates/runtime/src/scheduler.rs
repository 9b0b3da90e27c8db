//! Timed-event queue on a virtual millisecond clock.
//!
//! Every timer the machine needs (spin ticks, auto-stop, deceleration steps,
//! settles, evaluation, batch pacing) goes through one [`Scheduler`]. Events
//! fire in `(due, insertion order)` order, so two events due at the same
//! millisecond always fire in the order they were scheduled.
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use slot_core::Millis;

/// Handle used to cancel a scheduled event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// An event popped from the queue together with the time it was due.
#[derive(Debug)]
pub struct Fired<E> {
    pub id: TimerId,
    pub due: Millis,
    pub event: E,
}

struct Entry<E> {
    due: Millis,
    id: TimerId,
    event: E,
}

impl<E> PartialEq for Entry<E> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.id == other.id
    }
}

impl<E> Eq for Entry<E> {}

impl<E> PartialOrd for Entry<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for Entry<E> {
    // Reversed so the max-heap pops the earliest (due, id) first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.id.0.cmp(&self.id.0))
    }
}

pub struct Scheduler<E> {
    now: Millis,
    next_id: u64,
    queue: BinaryHeap<Entry<E>>,
    live: HashSet<TimerId>,
}

impl<E> Scheduler<E> {
    pub fn new() -> Self {
        Self {
            now: Millis::ZERO,
            next_id: 0,
            queue: BinaryHeap::new(),
            live: HashSet::new(),
        }
    }

    /// Current virtual time: the due time of the event being handled, or the
    /// last time passed to [`Scheduler::advance_clock`].
    pub fn now(&self) -> Millis {
        self.now
    }

    /// Schedules `event` at an absolute time. Times in the past fire on the
    /// next poll.
    pub fn schedule_at(&mut self, due: Millis, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.queue.push(Entry {
            due: due.max(self.now),
            id,
            event,
        });
        self.live.insert(id);
        id
    }

    pub fn schedule_after(&mut self, delay: Millis, event: E) -> TimerId {
        self.schedule_at(self.now + delay, event)
    }

    /// Cancels a pending event. Returns `false` if it already fired or was
    /// cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.live.remove(&id)
    }

    /// Pops the next live event due at or before `until`, moving the clock to
    /// its due time.
    pub fn pop_due(&mut self, until: Millis) -> Option<Fired<E>> {
        while self.queue.peek().is_some_and(|entry| entry.due <= until) {
            let entry = self.queue.pop()?;
            if self.live.remove(&entry.id) {
                self.now = self.now.max(entry.due);
                return Some(Fired {
                    id: entry.id,
                    due: entry.due,
                    event: entry.event,
                });
            }
        }
        None
    }

    /// Due time of the earliest live event.
    pub fn next_due(&mut self) -> Option<Millis> {
        while let Some(entry) = self.queue.peek() {
            if self.live.contains(&entry.id) {
                return Some(entry.due);
            }
            self.queue.pop();
        }
        None
    }

    /// Moves the clock forward; never backwards.
    pub fn advance_clock(&mut self, to: Millis) {
        self.now = self.now.max(to);
    }

    /// Number of live (scheduled, not cancelled, not fired) events.
    pub fn pending(&self) -> usize {
        self.live.len()
    }

    /// Drops every pending event. Returns how many were released.
    pub fn clear(&mut self) -> usize {
        let released = self.live.len();
        self.queue.clear();
        self.live.clear();
        released
    }
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}
