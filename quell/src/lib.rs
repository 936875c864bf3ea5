// Copyright 2025 Quell Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Debounce and throttle decorators for callbacks, with a runtime-agnostic
//! timer abstraction.
//!
//! Both decorators wrap a callback into a cheap, clonable handle whose
//! `call` method is rate-limited:
//!
//! - **Debounce** collapses a burst of calls into a single invocation, at
//!   the trailing edge (after the burst has been quiet for `delay`) or at
//!   the leading edge (`invoke_asap`).
//! - **Throttle** spaces invocations at least `interval` apart, always
//!   firing with the most recent arguments seen during the interval.
//!
//! Each wrapped instance owns exactly one timer slot; all timer state lives
//! in a driver task spawned on the ambient runtime, so handles can be
//! called from any thread without locking.
//!
//! # Runtime Support
//!
//! Enable runtime-specific features in your `Cargo.toml`:
//! - `runtime-tokio` (default) - tokio timers and spawning
//! - `runtime-smol` - smol spawning with `async-io` timers
//!
//! # Example
//!
//! ```rust,no_run
//! use quell::{throttle, Debounce};
//! use std::time::Duration;
//!
//! # async fn example() {
//! // Collapse a burst of search inputs into one query.
//! let search = Debounce::new(Duration::from_millis(300))
//!     .wrap(|text: String| println!("searching for {text}"));
//! search.call("rust".to_string());
//! search.call("rust async".to_string());
//!
//! // At most one repaint per 100ms, always with the newest offset.
//! let scroll = throttle(
//!     |offset: u32| println!("rendering at offset {offset}"),
//!     Duration::from_millis(100),
//! );
//! scroll.call(42);
//! scroll.call(84);
//! # }
//! ```

mod context;
mod logging;

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
mod debounce;
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
mod driver;
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
mod throttle;

pub mod prelude;

pub use context::with_context;
pub use quell_runtime::{timer, Timer};

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use debounce::{debounce, Debounce, Debounced};
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use throttle::{throttle, Throttle, Throttled};

#[cfg(feature = "runtime-tokio")]
pub use quell_runtime::impls::tokio::TokioTimer;

/// Timer selected by the active runtime feature, used by the `wrap`
/// convenience methods.
#[cfg(feature = "runtime-tokio")]
pub type DefaultTimer = TokioTimer;

#[cfg(all(feature = "runtime-smol", not(feature = "runtime-tokio")))]
pub use quell_runtime::impls::smol::SmolTimer;

/// Timer selected by the active runtime feature, used by the `wrap`
/// convenience methods.
#[cfg(all(feature = "runtime-smol", not(feature = "runtime-tokio")))]
pub type DefaultTimer = SmolTimer;
