// Copyright 2025 Quell Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::future::Future;
use std::time::Duration;

use quell_runtime::Timer;

/// Spawns a decorator driver on the ambient runtime.
#[cfg(feature = "runtime-tokio")]
pub(crate) fn spawn<F>(future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    tokio::spawn(future);
}

/// Spawns a decorator driver on the ambient runtime.
#[cfg(all(feature = "runtime-smol", not(feature = "runtime-tokio")))]
pub(crate) fn spawn<F>(future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    smol::spawn(future).detach();
}

/// Time left until `deadline`, clamped at zero.
///
/// Drivers re-derive the remaining wait whenever a call interrupts an armed
/// timer, so the deadline may already have passed by the time this runs.
pub(crate) fn remaining<TM: Timer>(timer: &TM, deadline: TM::Instant) -> Duration {
    let now = timer.now();
    if now >= deadline {
        Duration::ZERO
    } else {
        deadline - now
    }
}
