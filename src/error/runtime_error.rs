#[derive(Debug, Clone, PartialEq, Eq)]
/// A runtime failure surfaced to the host.
///
/// Inside the evaluator, errors are ordinary values that propagate through
/// every construct; this wrapper is only created at the host boundary, when
/// a script's final result turns out to be such an error value.
pub struct RuntimeError {
    /// The error text, without the `ERROR: ` prefix.
    pub message: String,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ERROR: {}", self.message)
    }
}

impl std::error::Error for RuntimeError {}
