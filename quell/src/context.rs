// Copyright 2025 Quell Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Binds an owned receiver to a callback.
///
/// The receiver is fixed at wrap time and passed mutably into every actual
/// invocation, like a `this` binding. Combine with either decorator:
///
/// ```rust,no_run
/// use quell::{with_context, Debounce};
/// use std::time::Duration;
///
/// struct SearchBox {
///     queries_sent: usize,
/// }
///
/// # async fn example() {
/// let search_box = SearchBox { queries_sent: 0 };
/// let search = Debounce::new(Duration::from_millis(300)).wrap(with_context(
///     search_box,
///     |ctx, text: String| {
///         ctx.queries_sent += 1;
///         println!("query #{}: {text}", ctx.queries_sent);
///     },
/// ));
/// search.call("rust".to_string());
/// # }
/// ```
pub fn with_context<C, A, F>(mut context: C, mut callback: F) -> impl FnMut(A)
where
    F: FnMut(&mut C, A),
{
    move |args| callback(&mut context, args)
}
