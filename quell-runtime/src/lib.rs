// Copyright 2025 Quell Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime abstraction for the quell decorators.
//!
//! The decorators in the `quell` crate need exactly two things from the host
//! runtime: "sleep for a duration" and "what time is it". The [`Timer`]
//! trait captures both; the [`impls`] module provides implementations for
//! the supported runtimes behind feature flags:
//!
//! - `runtime-tokio` (default) - [`TokioTimer`](impls::tokio::TokioTimer)
//! - `runtime-smol` - [`SmolTimer`](impls::smol::SmolTimer)

pub mod impls;
pub mod timer;

pub use timer::Timer;
