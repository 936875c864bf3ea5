// Copyright 2025 Quell Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::clone::Clone;
use core::cmp::Ord;
use core::fmt::Debug;
use core::future::Future;
use core::marker::{Copy, Send, Sync};
use core::ops::{Add, Sub};
use core::time::Duration;

/// A one-shot deferred-execution primitive plus a monotonic clock.
///
/// Implementations are cheap, stateless handles; every call to
/// [`sleep_future`](Timer::sleep_future) produces an independent one-shot
/// timer. Deadline arithmetic is expressed through the associated
/// [`Instant`](Timer::Instant) type so callers can re-derive the remaining
/// wait after being interrupted.
pub trait Timer: Clone + Default + Send + Sync + Debug + 'static {
    /// Future that resolves once the requested duration has elapsed.
    type Sleep: Future<Output = ()>;

    /// Monotonic point in time, comparable and shiftable by [`Duration`].
    type Instant: Copy
        + Debug
        + Ord
        + Send
        + Sync
        + Add<Duration, Output = Self::Instant>
        + Sub<Duration, Output = Self::Instant>
        + Sub<Self::Instant, Output = Duration>;

    /// Returns a future that completes `duration` from now.
    fn sleep_future(&self, duration: Duration) -> Self::Sleep;

    /// Returns the current instant of this timer's clock.
    fn now(&self) -> Self::Instant;
}
