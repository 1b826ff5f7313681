/// Errors raised while turning source text into an AST.
///
/// # Responsibilities
/// - Defines [`ParseError`] with one variant per syntactic failure mode.
/// - Defines [`ParseFailure`], the aggregate the parser hands back so that
///   every recorded error reaches the caller, not just the first.
pub mod parse_error;
/// Errors raised while evaluating a program.
///
/// # Responsibilities
/// - Defines [`RuntimeError`], the host-facing wrapper around an error value
///   produced during evaluation.
pub mod runtime_error;

pub use parse_error::{ParseError, ParseFailure};
pub use runtime_error::RuntimeError;
