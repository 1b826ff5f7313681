/// Built-in functions scripts can call by name, such as `len` and `push`.
pub mod builtin;
/// Array literals, hash literals, and the index operator.
pub mod collection;
/// The dispatch core: statements, blocks, literals, prefix operators,
/// identifiers, conditionals, and return/error unwinding.
pub mod core;
/// Function application: argument evaluation, closures, and arity checks.
pub mod function;
/// Binary operators on integers, strings, and everything else.
pub mod infix;

pub use self::core::{FALSE, NULL, TRUE, eval_program};
