// Copyright 2025 Quell Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting the decorators and the timer abstraction.
//!
//! ```ignore
//! use quell::prelude::*;
//!
//! let search = Debounce::new(Duration::from_millis(300)).wrap(send_query);
//! let scroll = throttle(render, Duration::from_millis(100));
//! ```

pub use crate::with_context;
pub use quell_runtime::Timer;

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use crate::{debounce, throttle, Debounce, Debounced, DefaultTimer, Throttle, Throttled};
