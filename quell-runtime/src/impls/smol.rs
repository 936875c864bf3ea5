// Copyright 2025 Quell Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[cfg(feature = "runtime-smol")]
use crate::timer::Timer;

/// Timer backed by `async-io`, usable from smol executors.
#[cfg(feature = "runtime-smol")]
#[derive(Clone, Debug, Default)]
pub struct SmolTimer;

#[cfg(feature = "runtime-smol")]
pub struct SmolSleep {
    timer: async_io::Timer,
}

#[cfg(feature = "runtime-smol")]
impl SmolSleep {
    fn new(duration: std::time::Duration) -> Self {
        Self {
            timer: async_io::Timer::after(duration),
        }
    }
}

#[cfg(feature = "runtime-smol")]
impl core::future::Future for SmolSleep {
    type Output = ();

    fn poll(
        mut self: core::pin::Pin<&mut Self>,
        cx: &mut core::task::Context<'_>,
    ) -> core::task::Poll<Self::Output> {
        core::pin::Pin::new(&mut self.timer).poll(cx).map(|_| ())
    }
}

#[cfg(feature = "runtime-smol")]
impl Timer for SmolTimer {
    type Sleep = SmolSleep;

    type Instant = std::time::Instant;

    fn sleep_future(&self, duration: std::time::Duration) -> Self::Sleep {
        SmolSleep::new(duration)
    }

    fn now(&self) -> Self::Instant {
        std::time::Instant::now()
    }
}
