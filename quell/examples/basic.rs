// Copyright 2025 Quell Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Debounce a "search box" and throttle a "scroll handler".
//!
//! Run with: `cargo run --example basic`

use std::time::Duration;

use quell::{debounce, throttle};
use tokio::time::sleep;

#[tokio::main]
async fn main() {
    // Keystrokes arrive every 50ms; only the final query is sent, 200ms
    // after typing stops.
    let search = debounce(
        |text: String| println!("searching for: {text}"),
        Duration::from_millis(200),
    );
    for text in ["r", "ru", "rus", "rust"] {
        search.call(text.to_string());
        sleep(Duration::from_millis(50)).await;
    }
    sleep(Duration::from_millis(300)).await;

    // Scroll events arrive every 30ms; rendering happens at most every
    // 100ms, always at the newest offset.
    let scroll = throttle(
        |offset: u32| println!("rendering at offset {offset}"),
        Duration::from_millis(100),
    );
    for step in 0..10u32 {
        scroll.call(step * 40);
        sleep(Duration::from_millis(30)).await;
    }
    sleep(Duration::from_millis(200)).await;
}
