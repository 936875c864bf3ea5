// Copyright 2025 Quell Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for the quell workspace.
//!
//! The timing tests all follow the same shape: pause the tokio clock, feed
//! calls into a wrapper, advance virtual time, and assert what the wrapped
//! callback actually saw. This crate provides the pieces:
//!
//! - [`Recorder`] - an `FnMut` fixture that logs every invocation the
//!   decorator lets through.
//! - [`settle`] / [`advance_and_settle`] - pump helpers that let the
//!   spawned driver tasks observe sends and fired timers deterministically
//!   on a current-thread runtime.
//! - [`test_data`] - named argument fixtures shared across the tests.
//!
//! Development and testing only; not for production code.

pub mod helpers;
pub mod recorder;
pub mod test_data;

pub use helpers::{advance_and_settle, settle};
pub use recorder::Recorder;
