//! Deferred actions on a logical clock.
//!
//! The engines never wait. A screen that needs "hide these cards in 1.5 s" or
//! "expire this round after 2 s" queues the action here and feeds elapsed
//! frame time into [`Schedule::advance`], which hands back whatever fell due.
//! Dropping the schedule cancels everything.

use std::collections::BTreeMap;

use log::trace;
use serde::{Deserialize, Serialize};

/// Work a game screen defers until after a display delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeferredAction {
    HideMemoryCards([usize; 2]),
    ResetPairFlips,
    ExpireWhackRound { round: u32 },
    SpawnNextWhackRound,
    AdvanceQuestion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(u64);

#[derive(Debug, Clone)]
pub struct Schedule<A> {
    now_ms: u64,
    next_id: u64,
    // Keyed by (due time, id) so equal due times fire in insertion order.
    queue: BTreeMap<(u64, u64), A>,
}

impl<A> Default for Schedule<A> {
    fn default() -> Self {
        Schedule { now_ms: 0, next_id: 0, queue: BTreeMap::new() }
    }
}

impl<A> Schedule<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, after_ms: u64, action: A) -> TaskId {
        let id = self.next_id;
        self.next_id += 1;
        let due = self.now_ms.saturating_add(after_ms);
        self.queue.insert((due, id), action);
        trace!("task {id} scheduled for t={due}ms");
        TaskId(id)
    }

    /// Drop a pending task. Returns `false` if it already fired or never existed.
    pub fn cancel(&mut self, task: TaskId) -> bool {
        let key = self.queue.keys().find(|(_, id)| *id == task.0).copied();
        match key {
            Some(key) => self.queue.remove(&key).is_some(),
            None => false,
        }
    }

    /// Move the clock forward and return every action now due, earliest first.
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<A> {
        self.now_ms = self.now_ms.saturating_add(elapsed_ms);
        let later = match self.now_ms.checked_add(1) {
            Some(cutoff) => self.queue.split_off(&(cutoff, 0)),
            None => BTreeMap::new(),
        };
        let due = std::mem::replace(&mut self.queue, later);
        due.into_values().collect()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }
}
