// Copyright 2025 Quell Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;

use futures::channel::mpsc;
use futures::future::{self, Either};
use futures::pin_mut;
use futures::StreamExt;
use quell_runtime::Timer;

use crate::driver;
use crate::DefaultTimer;

/// Normalized throttle configuration consumed by the driver loop.
#[derive(Clone, Copy, Debug)]
struct ThrottleConfig {
    interval: Duration,
}

/// Builder for throttled wrappers.
///
/// Throttle caps invocation frequency to at most once per `interval`:
///
/// - The first call while idle fires immediately with its own arguments.
/// - While calls keep arriving, the callback fires once per `interval`,
///   always with the most recent arguments seen - intermediate calls only
///   overwrite the latest-arguments slot, they are never queued.
/// - Once no call arrives for a full `interval`, the wrapper returns to
///   idle and the next call fires immediately again.
///
/// # Example
///
/// ```rust,no_run
/// use quell::Throttle;
/// use std::time::Duration;
///
/// # async fn example() {
/// let scroll = Throttle::new(Duration::from_millis(100))
///     .wrap(|offset: u32| println!("rendering at offset {offset}"));
/// scroll.call(0);
/// scroll.call(40); // retained; fires when the interval elapses
/// # }
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Throttle {
    config: ThrottleConfig,
}

impl Throttle {
    /// Creates a throttle with the given minimum spacing between
    /// invocations.
    pub fn new(interval: Duration) -> Self {
        Self {
            config: ThrottleConfig { interval },
        }
    }

    /// Wraps `callback` using the default timer for the active runtime.
    ///
    /// Must be called from within the runtime, as the returned handle is
    /// backed by a spawned driver task.
    pub fn wrap<A, F>(self, callback: F) -> Throttled<A>
    where
        A: Send + 'static,
        F: FnMut(A) + Send + 'static,
    {
        self.wrap_with_timer(callback, DefaultTimer::default())
    }

    /// Wraps `callback` with an explicit [`Timer`] implementation.
    pub fn wrap_with_timer<A, F, TM>(self, callback: F, timer: TM) -> Throttled<A>
    where
        A: Send + 'static,
        F: FnMut(A) + Send + 'static,
        TM: Timer,
        TM::Sleep: Send,
    {
        let (calls, receiver) = mpsc::unbounded();
        driver::spawn(run(self.config, callback, timer, receiver));
        Throttled { calls }
    }
}

/// Throttles `callback` with the default timer.
///
/// Shorthand for `Throttle::new(interval).wrap(callback)`.
pub fn throttle<A, F>(callback: F, interval: Duration) -> Throttled<A>
where
    A: Send + 'static,
    F: FnMut(A) + Send + 'static,
{
    Throttle::new(interval).wrap(callback)
}

/// Handle to a throttled callback.
///
/// Clones share the wrapped instance's gate and latest-arguments slot;
/// handles produced by separate [`Throttle::wrap`] calls are fully
/// independent.
#[derive(Debug)]
pub struct Throttled<A> {
    calls: mpsc::UnboundedSender<A>,
}

impl<A> Clone for Throttled<A> {
    fn clone(&self) -> Self {
        Self {
            calls: self.calls.clone(),
        }
    }
}

impl<A> Throttled<A> {
    /// Records a call with the given arguments.
    ///
    /// The arguments overwrite the latest-arguments slot; whether they are
    /// delivered now, at the next gate expiry, or superseded by a newer
    /// call is decided by the throttle window. This method never blocks.
    pub fn call(&self, args: A) {
        if self.calls.unbounded_send(args).is_err() {
            crate::warn!("throttled callback invoked after its driver stopped; call dropped");
        }
    }
}

/// Driver loop owning the gate and the latest-arguments slot.
///
/// The original "reschedule myself while arguments keep appearing" chain is
/// restated here as one loop: an expired gate either consumes the latest
/// arguments and re-arms, or clears itself and goes idle.
async fn run<A, F, TM>(
    config: ThrottleConfig,
    mut callback: F,
    timer: TM,
    mut calls: mpsc::UnboundedReceiver<A>,
) where
    F: FnMut(A),
    TM: Timer,
{
    let mut gate: Option<TM::Instant> = None;
    let mut latest: Option<A> = None;
    let mut closed = false;

    loop {
        match gate {
            // Idle: the next call fires immediately.
            None => {
                if closed {
                    return;
                }
                match calls.next().await {
                    Some(args) => {
                        callback(args);
                        gate = Some(timer.now() + config.interval);
                    }
                    None => closed = true,
                }
            }
            // Gated: retain the freshest arguments until the gate expires.
            Some(until) => {
                let sleep = timer.sleep_future(driver::remaining(&timer, until));
                pin_mut!(sleep);
                if closed {
                    // Last handle dropped; finish the firing chain.
                    sleep.await;
                    gate = expire(&mut callback, &timer, config.interval, &mut latest);
                } else {
                    match future::select(calls.next(), sleep).await {
                        Either::Left((Some(args), _)) => latest = Some(args),
                        Either::Left((None, _)) => closed = true,
                        Either::Right(((), _)) => {
                            gate = expire(&mut callback, &timer, config.interval, &mut latest);
                        }
                    }
                }
            }
        }
    }
}

/// Gate expiry: fire with the retained arguments and re-arm, or go idle.
fn expire<A, F, TM>(
    callback: &mut F,
    timer: &TM,
    interval: Duration,
    latest: &mut Option<A>,
) -> Option<TM::Instant>
where
    F: FnMut(A),
    TM: Timer,
{
    match latest.take() {
        Some(args) => {
            callback(args);
            Some(timer.now() + interval)
        }
        None => None,
    }
}
