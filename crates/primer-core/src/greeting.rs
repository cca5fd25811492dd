//! Greeting formatting.

/// Returns `"Hello, {name}!"` with `name` inserted verbatim.
///
/// No trimming or escaping is applied; an empty name yields `"Hello, !"`.
#[must_use]
pub fn greet(name: &str) -> String {
    format!("Hello, {name}!")
}
