// Copyright 2025 Quell Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;

use quell::{debounce, with_context, Debounce};
use quell_test_utils::{
    advance_and_settle, settle,
    test_data::{query_rust, query_rust_async, query_rust_async_timers, Query},
    Recorder,
};

#[tokio::test(start_paused = true)]
async fn trailing_burst_collapses_to_last_call() -> anyhow::Result<()> {
    // Arrange
    let recorder = Recorder::new();
    let wrapped = debounce(recorder.callback(), Duration::from_millis(500));

    // Act & Assert
    wrapped.call(query_rust());
    settle().await;
    assert!(recorder.is_empty());

    advance_and_settle(Duration::from_millis(300)).await;
    wrapped.call(query_rust_async());
    advance_and_settle(Duration::from_millis(499)).await;
    assert!(recorder.is_empty());

    advance_and_settle(Duration::from_millis(1)).await;
    assert_eq!(recorder.values(), vec![query_rust_async()]);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn trailing_timer_resets_on_every_call() -> anyhow::Result<()> {
    // Arrange
    let recorder = Recorder::new();
    let wrapped = debounce(recorder.callback(), Duration::from_millis(500));

    // Act & Assert
    wrapped.call(query_rust());
    advance_and_settle(Duration::from_millis(100)).await;

    wrapped.call(query_rust_async());
    advance_and_settle(Duration::from_millis(100)).await;

    wrapped.call(query_rust_async_timers());
    advance_and_settle(Duration::from_millis(100)).await;
    assert!(recorder.is_empty());

    // Quiet period runs from the last call, not the first.
    advance_and_settle(Duration::from_millis(400)).await;
    assert_eq!(recorder.values(), vec![query_rust_async_timers()]);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn leading_edge_fires_first_call_and_suppresses_the_burst() -> anyhow::Result<()> {
    // Arrange
    let recorder = Recorder::new();
    let wrapped = Debounce::new(Duration::from_millis(500))
        .invoke_asap(true)
        .wrap(recorder.callback());

    // Act & Assert
    wrapped.call(query_rust());
    settle().await;
    assert_eq!(recorder.take(), vec![query_rust()]);

    wrapped.call(query_rust_async());
    settle().await;
    assert!(recorder.is_empty());

    // No trailing invocation once the burst goes quiet.
    advance_and_settle(Duration::from_millis(500)).await;
    assert!(recorder.is_empty());

    // Idle again: the next call fires immediately.
    wrapped.call(query_rust_async_timers());
    settle().await;
    assert_eq!(recorder.values(), vec![query_rust_async_timers()]);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn leading_edge_lockout_extends_with_each_suppressed_call() -> anyhow::Result<()> {
    // Arrange
    let recorder = Recorder::new();
    let wrapped = Debounce::new(Duration::from_millis(500))
        .invoke_asap(true)
        .wrap(recorder.callback());

    // Act & Assert
    wrapped.call(query_rust());
    settle().await;
    assert_eq!(recorder.count(), 1);

    // Suppressed call at 300 re-arms the lockout until 800.
    advance_and_settle(Duration::from_millis(300)).await;
    wrapped.call(query_rust_async());
    settle().await;

    // 600 is past the first call's own window but inside the extended one.
    advance_and_settle(Duration::from_millis(300)).await;
    wrapped.call(query_rust_async());
    settle().await;
    assert_eq!(recorder.count(), 1);

    advance_and_settle(Duration::from_millis(600)).await;
    wrapped.call(query_rust_async_timers());
    settle().await;
    assert_eq!(
        recorder.values(),
        vec![query_rust(), query_rust_async_timers()]
    );

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn context_without_edge_flag_matches_explicit_trailing() -> anyhow::Result<()> {
    // Arrange
    let legacy_recorder = Recorder::new();
    let mut legacy_record = legacy_recorder.callback();
    let explicit_recorder = Recorder::new();
    let mut explicit_record = explicit_recorder.callback();

    // Legacy convention: a context supplied without touching the flag.
    let legacy = Debounce::new(Duration::from_millis(100)).wrap(with_context(
        String::from("form"),
        move |ctx, query: Query| legacy_record(format!("{ctx}:{}", query.text)),
    ));
    let explicit = Debounce::new(Duration::from_millis(100))
        .invoke_asap(false)
        .wrap(with_context(
            String::from("form"),
            move |ctx, query: Query| explicit_record(format!("{ctx}:{}", query.text)),
        ));

    // Act
    for wrapped in [&legacy, &explicit] {
        wrapped.call(query_rust());
        wrapped.call(query_rust_async());
    }
    advance_and_settle(Duration::from_millis(100)).await;

    // Assert
    assert_eq!(legacy_recorder.values(), vec!["form:rust async".to_string()]);
    assert_eq!(legacy_recorder.values(), explicit_recorder.values());

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn context_receiver_is_passed_mutably_to_every_invocation() -> anyhow::Result<()> {
    // Arrange
    let recorder = Recorder::new();
    let mut record = recorder.callback();
    let wrapped = Debounce::new(Duration::from_millis(100)).wrap(with_context(
        0usize,
        move |invocations, query: Query| {
            *invocations += 1;
            record(format!("{invocations}:{}", query.text));
        },
    ));

    // Act
    wrapped.call(query_rust());
    advance_and_settle(Duration::from_millis(100)).await;
    wrapped.call(query_rust_async());
    advance_and_settle(Duration::from_millis(100)).await;

    // Assert
    assert_eq!(
        recorder.values(),
        vec!["1:rust".to_string(), "2:rust async".to_string()]
    );

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn instances_from_one_builder_have_independent_timers() -> anyhow::Result<()> {
    // Arrange
    let builder = Debounce::new(Duration::from_millis(500));
    let first_recorder = Recorder::new();
    let second_recorder = Recorder::new();
    let first = builder.wrap(first_recorder.callback());
    let second = builder.wrap(second_recorder.callback());

    // Act & Assert
    first.call(query_rust());
    advance_and_settle(Duration::from_millis(250)).await;
    second.call(query_rust_async());

    // First fires at 500; the second instance's window is untouched by it.
    advance_and_settle(Duration::from_millis(250)).await;
    assert_eq!(first_recorder.values(), vec![query_rust()]);
    assert!(second_recorder.is_empty());

    advance_and_settle(Duration::from_millis(250)).await;
    assert_eq!(second_recorder.values(), vec![query_rust_async()]);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn dropping_the_handle_still_fires_the_armed_window() -> anyhow::Result<()> {
    // Arrange
    let recorder = Recorder::new();
    let wrapped = debounce(recorder.callback(), Duration::from_millis(500));

    // Act
    wrapped.call(query_rust());
    settle().await;
    drop(wrapped);
    settle().await;
    assert!(recorder.is_empty());

    advance_and_settle(Duration::from_millis(500)).await;

    // Assert
    assert_eq!(recorder.values(), vec![query_rust()]);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn calls_after_the_driver_stopped_are_dropped() -> anyhow::Result<()> {
    // Arrange: a callback whose panic propagates into and kills the driver.
    let recorder = Recorder::new();
    let mut record = recorder.callback();
    let wrapped = debounce(
        move |query: Query| {
            record(query);
            panic!("downstream failure");
        },
        Duration::from_millis(100),
    );

    // Act
    wrapped.call(query_rust());
    advance_and_settle(Duration::from_millis(100)).await;
    assert_eq!(recorder.values(), vec![query_rust()]);

    wrapped.call(query_rust_async());
    advance_and_settle(Duration::from_millis(100)).await;

    // Assert: the later call is dropped, not delivered.
    assert_eq!(recorder.values(), vec![query_rust()]);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn zero_delay_still_collapses_a_burst() -> anyhow::Result<()> {
    // Arrange
    let recorder = Recorder::new();
    let wrapped = debounce(recorder.callback(), Duration::ZERO);

    // Act
    wrapped.call(query_rust());
    wrapped.call(query_rust_async());
    settle().await;

    // Assert: one invocation per burst, not one per call.
    assert_eq!(recorder.values(), vec![query_rust_async()]);

    Ok(())
}
