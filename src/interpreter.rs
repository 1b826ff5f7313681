/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST, evaluates expressions and statements,
/// manages lexical environments, applies functions and builtins, and turns
/// failures into error values that propagate by themselves. It is the core
/// execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles bindings, closures, control flow, and return unwinding.
/// - Produces error values such as `type mismatch: INTEGER + BOOLEAN`.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// corresponding to a meaningful language element such as an integer, string,
/// identifier, operator, delimiter, or keyword. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line numbers.
/// - Handles integer and string literals, identifiers, and operators.
/// - Marks unrecognized characters as illegal tokens instead of failing.
pub mod lexer;
/// The object module defines the runtime values produced by evaluation.
///
/// This module declares every value the evaluator can produce, from integers
/// and strings to functions, arrays, and hash tables, along with the lexical
/// environment that bindings live in.
///
/// # Responsibilities
/// - Defines the `Object` enum and all supported value variants.
/// - Implements hash keys for values usable in hash tables.
/// - Provides the chainable `Environment` that makes closures work.
pub mod object;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a Pratt (top-down operator-precedence) parser: it processes
/// the token stream produced by the lexer and constructs an AST in which
/// operator precedence and associativity are already resolved.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Enforces the precedence ladder from `==`/`!=` up to calls and indexing.
/// - Records every syntax error with its location and keeps going.
pub mod parser;
