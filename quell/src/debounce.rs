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

/// Normalized debounce configuration consumed by the driver loop.
#[derive(Clone, Copy, Debug)]
struct DebounceConfig {
    delay: Duration,
    invoke_asap: bool,
}

/// Builder for debounced wrappers.
///
/// Debounce collapses a burst of calls into a single invocation of the
/// wrapped callback:
///
/// - **Trailing edge** (default): only the last call in a burst fires,
///   `delay` after the burst has gone quiet, with that call's arguments.
/// - **Leading edge** ([`invoke_asap`](Debounce::invoke_asap)): the first
///   call in a burst fires synchronously and subsequent calls within
///   `delay` are suppressed; each suppressed call extends the lockout.
///
/// Every call cancels any armed timer and re-arms it for `delay` from now;
/// a wrapped instance never has more than one timer outstanding.
///
/// # Example
///
/// ```rust,no_run
/// use quell::Debounce;
/// use std::time::Duration;
///
/// # async fn example() {
/// let resize = Debounce::new(Duration::from_millis(150))
///     .invoke_asap(true)
///     .wrap(|(w, h): (u32, u32)| println!("layout for {w}x{h}"));
/// resize.call((1280, 720));
/// # }
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Debounce {
    config: DebounceConfig,
}

impl Debounce {
    /// Creates a trailing-edge debounce with the given quiet period.
    pub fn new(delay: Duration) -> Self {
        Self {
            config: DebounceConfig {
                delay,
                invoke_asap: false,
            },
        }
    }

    /// Selects leading-edge firing: the first call of a burst invokes the
    /// callback immediately and the rest of the burst is suppressed.
    #[must_use]
    pub fn invoke_asap(mut self, invoke_asap: bool) -> Self {
        self.config.invoke_asap = invoke_asap;
        self
    }

    /// Wraps `callback` using the default timer for the active runtime.
    ///
    /// Must be called from within the runtime, as the returned handle is
    /// backed by a spawned driver task.
    pub fn wrap<A, F>(self, callback: F) -> Debounced<A>
    where
        A: Send + 'static,
        F: FnMut(A) + Send + 'static,
    {
        self.wrap_with_timer(callback, DefaultTimer::default())
    }

    /// Wraps `callback` with an explicit [`Timer`] implementation.
    pub fn wrap_with_timer<A, F, TM>(self, callback: F, timer: TM) -> Debounced<A>
    where
        A: Send + 'static,
        F: FnMut(A) + Send + 'static,
        TM: Timer,
        TM::Sleep: Send,
    {
        let (calls, receiver) = mpsc::unbounded();
        driver::spawn(run(self.config, callback, timer, receiver));
        Debounced { calls }
    }
}

/// Debounces `callback` at the trailing edge with the default timer.
///
/// Shorthand for `Debounce::new(delay).wrap(callback)`.
pub fn debounce<A, F>(callback: F, delay: Duration) -> Debounced<A>
where
    A: Send + 'static,
    F: FnMut(A) + Send + 'static,
{
    Debounce::new(delay).wrap(callback)
}

/// Handle to a debounced callback.
///
/// Clones share the wrapped instance's single timer slot; handles produced
/// by separate [`Debounce::wrap`] calls are fully independent.
#[derive(Debug)]
pub struct Debounced<A> {
    calls: mpsc::UnboundedSender<A>,
}

impl<A> Clone for Debounced<A> {
    fn clone(&self) -> Self {
        Self {
            calls: self.calls.clone(),
        }
    }
}

impl<A> Debounced<A> {
    /// Records a call with the given arguments.
    ///
    /// Whether and when the wrapped callback actually runs is decided by
    /// the debounce window; this method itself never blocks.
    pub fn call(&self, args: A) {
        if self.calls.unbounded_send(args).is_err() {
            crate::warn!("debounced callback invoked after its driver stopped; call dropped");
        }
    }
}

/// Driver loop owning the timer slot and the pending-arguments slot.
async fn run<A, F, TM>(
    config: DebounceConfig,
    mut callback: F,
    timer: TM,
    mut calls: mpsc::UnboundedReceiver<A>,
) where
    F: FnMut(A),
    TM: Timer,
{
    let mut deadline: Option<TM::Instant> = None;
    let mut pending: Option<A> = None;

    loop {
        match deadline {
            // Idle: wait for the first call of the next burst.
            None => match calls.next().await {
                Some(args) => {
                    if config.invoke_asap {
                        callback(args);
                    } else {
                        pending = Some(args);
                    }
                    deadline = Some(timer.now() + config.delay);
                }
                None => return,
            },
            // Armed: race the next call against the deadline.
            Some(at) => {
                let sleep = timer.sleep_future(driver::remaining(&timer, at));
                pin_mut!(sleep);
                match future::select(calls.next(), sleep).await {
                    Either::Left((Some(args), _)) => {
                        // Cancel-and-reschedule; the newest call owns the
                        // pending slot. A leading-edge burst already fired.
                        if !config.invoke_asap {
                            pending = Some(args);
                        }
                        deadline = Some(timer.now() + config.delay);
                    }
                    Either::Left((None, _)) => {
                        // Last handle dropped with a window armed; the
                        // scheduled firing still happens.
                        timer.sleep_future(driver::remaining(&timer, at)).await;
                        if !config.invoke_asap {
                            if let Some(args) = pending.take() {
                                callback(args);
                            }
                        }
                        return;
                    }
                    Either::Right(((), _)) => {
                        deadline = None;
                        if !config.invoke_asap {
                            if let Some(args) = pending.take() {
                                callback(args);
                            }
                        }
                    }
                }
            }
        }
    }
}
