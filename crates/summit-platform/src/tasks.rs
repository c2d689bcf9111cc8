//! Deferred-work task queue.
//!
//! Endpoints enqueue tasks instead of doing slow work inline; a worker
//! handler drains the queue out of band. The only task the service
//! defers today is the conference-creation confirmation email.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use summit_core::{Error, Result};

/// A unit of deferred work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// Send the organizer a confirmation email for a newly created
    /// conference.
    SendConfirmationEmail {
        /// Recipient address
        email: String,
        /// Human-readable summary of the created conference
        summary: String,
    },
}

/// FIFO queue of deferred tasks.
///
/// Cheap to clone; clones share the same underlying queue.
#[derive(Clone, Default)]
pub struct TaskQueue {
    inner: Arc<Mutex<VecDeque<Task>>>,
}

impl TaskQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a task to the back of the queue.
    pub fn push(&self, task: Task) -> Result<()> {
        let mut queue = self.inner.lock().map_err(|_| Error::LockPoisoned)?;
        queue.push_back(task);
        Ok(())
    }

    /// Removes and returns the task at the front of the queue.
    pub fn pop(&self) -> Result<Option<Task>> {
        let mut queue = self.inner.lock().map_err(|_| Error::LockPoisoned)?;
        Ok(queue.pop_front())
    }

    /// Number of queued tasks.
    pub fn len(&self) -> usize {
        self.inner.lock().map(|q| q.len()).unwrap_or(0)
    }

    /// True when no tasks are queued.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
