// Copyright 2025 Quell Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Named argument fixtures shared across the workspace tests.

/// A search query, the canonical "arguments" payload in the tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub text: String,
}

impl Query {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

pub fn query_rust() -> Query {
    Query::new("rust")
}

pub fn query_rust_async() -> Query {
    Query::new("rust async")
}

pub fn query_rust_async_timers() -> Query {
    Query::new("rust async timers")
}
