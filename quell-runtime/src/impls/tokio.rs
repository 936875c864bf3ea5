// Copyright 2025 Quell Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[cfg(feature = "runtime-tokio")]
use std::time::Duration;

#[cfg(feature = "runtime-tokio")]
use crate::timer::Timer;

/// Timer backed by the tokio time driver.
///
/// `now()` reads `tokio::time::Instant`, so deadlines computed against it
/// follow the virtual clock when tests run under `tokio::time::pause`.
#[cfg(feature = "runtime-tokio")]
#[derive(Clone, Debug, Default)]
pub struct TokioTimer;

#[cfg(feature = "runtime-tokio")]
impl Timer for TokioTimer {
    type Sleep = tokio::time::Sleep;

    type Instant = tokio::time::Instant;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        tokio::time::sleep(duration)
    }

    fn now(&self) -> Self::Instant {
        tokio::time::Instant::now()
    }
}

#[cfg(all(test, feature = "runtime-tokio"))]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn sleep_follows_the_paused_clock() {
        let timer = TokioTimer;
        let before = timer.now();

        timer.sleep_future(Duration::from_millis(250)).await;

        assert_eq!(timer.now() - before, Duration::from_millis(250));
    }
}
