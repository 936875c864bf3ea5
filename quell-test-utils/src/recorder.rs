// Copyright 2025 Quell Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::Arc;

use parking_lot::Mutex;

/// Records every invocation a decorator lets through.
///
/// Hand [`callback`](Recorder::callback) to a wrapper and assert on
/// [`values`](Recorder::values) / [`count`](Recorder::count) afterwards.
/// The recorder side stays in the test while the callback side moves into
/// the driver task.
pub struct Recorder<A> {
    invocations: Arc<Mutex<Vec<A>>>,
}

impl<A> Clone for Recorder<A> {
    fn clone(&self) -> Self {
        Self {
            invocations: Arc::clone(&self.invocations),
        }
    }
}

impl<A> Default for Recorder<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Recorder<A> {
    pub fn new() -> Self {
        Self {
            invocations: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of invocations recorded so far.
    pub fn count(&self) -> usize {
        self.invocations.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Removes and returns everything recorded so far.
    pub fn take(&self) -> Vec<A> {
        std::mem::take(&mut *self.invocations.lock())
    }
}

impl<A: Send + 'static> Recorder<A> {
    /// Callback to hand to a decorator; every actual invocation is
    /// appended to the log.
    pub fn callback(&self) -> impl FnMut(A) + Send + 'static {
        let invocations = Arc::clone(&self.invocations);
        move |args| invocations.lock().push(args)
    }
}

impl<A: Clone> Recorder<A> {
    /// Snapshot of everything recorded so far.
    pub fn values(&self) -> Vec<A> {
        self.invocations.lock().clone()
    }
}
