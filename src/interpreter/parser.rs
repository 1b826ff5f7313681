/// The heart of the Pratt parser: parser state, the precedence ladder, and
/// the expression loop that folds infix operators by binding power.
pub mod core;
/// Infix position: binary operators, call argument lists, and indexing.
pub mod infix;
/// Prefix position: literals, identifiers, prefix operators, grouping, `if`
/// expressions, function literals, and array/hash literals.
pub mod prefix;
/// Statement forms: `let`, `return`, expression statements, and blocks.
pub mod statement;

pub use self::core::{Parser, Precedence, parse};
