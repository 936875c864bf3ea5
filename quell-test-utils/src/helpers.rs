// Copyright 2025 Quell Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;

use tokio::time::advance;

/// Lets spawned driver tasks observe everything already sent to them.
///
/// Repeated yields are enough on a current-thread runtime, which is where
/// the timing tests run (`tokio::time::pause` requires it).
pub async fn settle() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}

/// Advances the paused clock and lets driver tasks react to fired timers.
///
/// Settles before advancing so that calls already sent are processed at the
/// pre-advance instant, then settles again so expiries run before the test
/// asserts.
pub async fn advance_and_settle(duration: Duration) {
    settle().await;
    advance(duration).await;
    settle().await;
}
