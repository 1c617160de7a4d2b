//! Configuration errors

/// Errors raised at the interaction-handling boundary.
///
/// These are programmer/configuration errors, not data errors: the
/// caller wired an unknown value into a dropdown or axis select. They
/// fail fast rather than defaulting, so a mis-rendered chart cannot go
/// unnoticed.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown measure '{0}' (expected one of: pop, lifeExp, gdpPercap)")]
    UnknownMeasure(String),
}
