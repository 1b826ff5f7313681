//! # quill
//!
//! quill is a small, dynamically typed scripting language written in Rust.
//! It has integers, booleans, strings, arrays, hash tables, first-class
//! functions with closures, and error values that propagate by themselves.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::{cell::RefCell, rc::Rc};

use crate::{
    error::{ParseFailure, RuntimeError},
    interpreter::{
        evaluator::eval_program,
        lexer::tokenize,
        object::{Environment, Object},
        parser::parse,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the statement and expression types that represent
/// the syntactic structure of source code as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
/// - Renders every node to a canonical, fully parenthesized string form.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines the errors a host can receive from the crate: syntax
/// errors recorded by the parser and the wrapper around runtime error
/// values. It standardizes error reporting and carries source lines for
/// debugging and user feedback.
///
/// # Responsibilities
/// - Defines error types for every host-visible failure mode.
/// - Attaches line numbers and fixed, testable messages.
/// - Integrates with the standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, the runtime object
/// model, and the environment chain to provide a complete runtime for
/// source code evaluation. It exposes the public API for interpreting and
/// executing programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and objects.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of values and errors between phases.
pub mod interpreter;

/// Evaluates a source string against a caller-owned environment and returns
/// the resulting value.
///
/// Bindings created by the script live on in `env`, which is what a REPL
/// uses to keep state across inputs. Runtime failures come back as an
/// ordinary [`Object::Error`] value, not as an `Err`; only syntax errors
/// fail the call.
///
/// # Errors
/// Returns a [`ParseFailure`] listing every syntax error in `source`.
///
/// # Examples
/// ```
/// use quill::{
///     eval_source,
///     interpreter::object::{Environment, Object},
/// };
///
/// let env = Environment::new();
/// let result = eval_source("let double = fn(x) { x * 2 }; double(21)", &env);
/// assert_eq!(result, Ok(Object::Integer(42)));
///
/// // `double` is still bound for the next input.
/// let result = eval_source("double(5)", &env);
/// assert_eq!(result, Ok(Object::Integer(10)));
/// ```
pub fn eval_source(source: &str,
                   env: &Rc<RefCell<Environment>>)
                   -> Result<Object, ParseFailure> {
    let tokens = tokenize(source);
    let program = parse(&tokens)?;

    Ok(eval_program(&program, env))
}

/// Returns the final evaluation result after execution.
///
/// This function parses and executes all statements in the provided source
/// string in a fresh environment. If execution succeeds, it returns
/// `Ok(())`; otherwise, it returns an error with details about the failure.
/// With `auto_print` set, the final value is printed unless it is `null`.
///
/// # Errors
/// Returns an error if the source fails to parse or if the script's result
/// is an error value.
///
/// # Examples
/// ```
/// use quill::get_result;
///
/// // Simple expression: the result will be calculated and no error should occur.
/// let source = "let result = 2 + 2;";
/// let res = get_result(source, false);
/// assert!(res.is_ok());
///
/// // Example with an intentional error (unknown identifier).
/// let source = "let y = x + 1;"; // 'x' is not defined
/// let res = get_result(source, false);
/// assert!(res.is_err());
/// ```
pub fn get_result(source: &str, auto_print: bool) -> Result<(), Box<dyn std::error::Error>> {
    let env = Environment::new();

    match eval_source(source, &env)? {
        Object::Error(message) => Err(Box::new(RuntimeError { message })),
        result => {
            if auto_print && result != Object::Null {
                println!("{result}");
            }
            Ok(())
        },
    }
}
