// Assertion error type

use thiserror::Error;

/// Prefix every failed check renders with
pub const ASSERTION_ERROR: &str = "Assertion Error";

/// Raised by every failing check.
///
/// Renders as `Assertion Error` or `Assertion Error: <message>`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", render(.message.as_deref()))]
pub struct AssertionError {
    message: Option<String>,
}

pub type Result<T = ()> = std::result::Result<T, AssertionError>;

impl AssertionError {
    /// Build an error from an optional caller message.
    /// An empty message counts as no message.
    pub fn new(message: Option<&str>) -> Self {
        Self {
            message: message.filter(|m| !m.is_empty()).map(str::to_owned),
        }
    }

    /// The caller-supplied message, if any
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

fn render(message: Option<&str>) -> String {
    match message {
        Some(m) => format!("{}: {}", ASSERTION_ERROR, m),
        None => ASSERTION_ERROR.to_string(),
    }
}
