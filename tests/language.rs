use std::fs;

use quill::{
    eval_source, get_result,
    interpreter::object::{Environment, Object},
};

fn eval(source: &str) -> Object {
    let env = Environment::new();
    eval_source(source, &env).unwrap_or_else(|failure| {
                                 panic!("parse failed for {source:?}:\n{failure}")
                             })
}

fn assert_integer(source: &str, expected: i64) {
    assert_eq!(eval(source), Object::Integer(expected), "source: {source:?}");
}

fn assert_boolean(source: &str, expected: bool) {
    assert_eq!(eval(source), Object::Boolean(expected), "source: {source:?}");
}

fn assert_null(source: &str) {
    assert_eq!(eval(source), Object::Null, "source: {source:?}");
}

fn assert_error(source: &str, expected: &str) {
    match eval(source) {
        Object::Error(message) => assert_eq!(message, expected, "source: {source:?}"),
        other => panic!("expected error {expected:?} for {source:?}, got {other}"),
    }
}

fn assert_success(src: &str) {
    if let Err(e) = get_result(src, false) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if get_result(src, false).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

#[test]
fn integer_arithmetic() {
    assert_integer("5", 5);
    assert_integer("10", 10);
    assert_integer("-5", -5);
    assert_integer("-10", -10);
    assert_integer("5 + 5 + 5 + 5 - 10", 10);
    assert_integer("2 * 2 * 2 * 2 * 2", 32);
    assert_integer("-50 + 100 + -50", 0);
    assert_integer("5 * 2 + 10", 20);
    assert_integer("5 + 2 * 10", 25);
    assert_integer("20 + 2 * -10", 0);
    assert_integer("50 / 2 * 2 + 10", 60);
    assert_integer("2 * (5 + 10)", 30);
    assert_integer("3 * 3 * 3 + 10", 37);
    assert_integer("3 * (3 * 3) + 10", 37);
    assert_integer("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50);
}

#[test]
fn integer_arithmetic_wraps_at_the_64_bit_boundary() {
    assert_integer("9223372036854775807 + 1", i64::MIN);
    assert_integer("-9223372036854775807 - 2", i64::MAX);
}

#[test]
fn division_truncates_toward_zero() {
    assert_integer("7 / 2", 3);
    assert_integer("-7 / 2", -3);
}

#[test]
fn boolean_expressions() {
    assert_boolean("true", true);
    assert_boolean("false", false);
    assert_boolean("1 < 2", true);
    assert_boolean("1 > 2", false);
    assert_boolean("1 < 1", false);
    assert_boolean("1 > 1", false);
    assert_boolean("1 == 1", true);
    assert_boolean("1 != 1", false);
    assert_boolean("1 == 2", false);
    assert_boolean("1 != 2", true);
    assert_boolean("true == true", true);
    assert_boolean("false == false", true);
    assert_boolean("true == false", false);
    assert_boolean("true != false", true);
    assert_boolean("false != true", true);
    assert_boolean("(1 < 2) == true", true);
    assert_boolean("(1 < 2) == false", false);
    assert_boolean("(1 > 2) == true", false);
    assert_boolean("(1 > 2) == false", true);
}

#[test]
fn bang_operator() {
    assert_boolean("!true", false);
    assert_boolean("!false", true);
    assert_boolean("!5", false);
    assert_boolean("!0", false);
    assert_boolean("!!true", true);
    assert_boolean("!!false", false);
    assert_boolean("!!5", true);
}

#[test]
fn if_else_expressions() {
    assert_integer("if (true) { 10 }", 10);
    assert_null("if (false) { 10 }");
    assert_integer("if (1) { 10 }", 10);
    assert_integer("if (0) { 10 }", 10);
    assert_integer("if (1 < 2) { 10 }", 10);
    assert_null("if (1 > 2) { 10 }");
    assert_integer("if (1 > 2) { 10 } else { 20 }", 20);
    assert_integer("if (1 < 2) { 10 } else { 20 }", 10);
}

#[test]
fn else_if_chains() {
    assert_integer("if (false) { 1 } else if (true) { 2 } else { 3 }", 2);
    assert_integer("if (false) { 1 } else if (false) { 2 } else { 3 }", 3);
    assert_null("if (false) { 1 } else if (false) { 2 }");
}

#[test]
fn return_statements_unwind() {
    assert_integer("return 10;", 10);
    assert_integer("return 10; 9;", 10);
    assert_integer("return 2 * 5; 9;", 10);
    assert_integer("9; return 2 * 5; 9;", 10);
    assert_integer("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", 10);
    assert_null("9; return; 9;");
}

#[test]
fn error_messages_are_verbatim() {
    assert_error("5 + true;", "type mismatch: INTEGER + BOOLEAN");
    assert_error("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN");
    assert_error("-true", "unknown operator: -BOOLEAN");
    assert_error("true + false;", "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("if (10 > 1) { true + false; }", "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
                 "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("foobar", "identifier not found: foobar");
    assert_error("\"Hello\" - \"World\"", "unknown operator: STRING - STRING");
    assert_error("{\"name\": \"quill\"}[fn(x) { x }];", "unusable as hash key: FUNCTION");
    assert_error("{fn(x) { x }: 1}", "unusable as hash key: FUNCTION");
    assert_error("999 / 0", "division by zero");
    assert_error("5(3)", "not a function: INTEGER");
    assert_error("5[0]", "index operator not supported: INTEGER");
}

#[test]
fn composite_values_have_no_equality_operator() {
    assert_error("[1, 2] == [1, 2]", "unknown operator: ARRAY == ARRAY");
    assert_error("[1] != [2]", "unknown operator: ARRAY != ARRAY");
    assert_error("{1: 1} == {1: 1}", "unknown operator: HASH == HASH");
    assert_error("fn(x) { x } != fn(x) { x }", "unknown operator: FUNCTION != FUNCTION");
}

#[test]
fn null_compares_equal_to_itself() {
    assert_boolean("if (false) { 1 } == if (false) { 2 }", true);
    assert_boolean("if (false) { 1 } != if (false) { 2 }", false);
    assert_error("if (false) { 1 } + if (false) { 2 }", "unknown operator: NULL + NULL");
}

#[test]
fn errors_propagate_through_every_construct() {
    assert_error("let x = 5 + true; x;", "type mismatch: INTEGER + BOOLEAN");
    assert_error("[1, 2 + true, 3]", "type mismatch: INTEGER + BOOLEAN");
    assert_error("len(5 + true)", "type mismatch: INTEGER + BOOLEAN");
    assert_error("(fn(x) { x })(foobar)", "identifier not found: foobar");
    assert_error("!(5 + true)", "type mismatch: INTEGER + BOOLEAN");
    assert_error("if (5 + true) { 1 }", "type mismatch: INTEGER + BOOLEAN");
    assert_error("{1: foobar}", "identifier not found: foobar");
}

#[test]
fn let_statements_bind_values() {
    assert_integer("let a = 5; a;", 5);
    assert_integer("let a = 5 * 5; a;", 25);
    assert_integer("let a = 5; let b = a; b;", 5);
    assert_integer("let a = 5; let b = a; let c = a + b + 5; c;", 15);
}

#[test]
fn functions_apply() {
    assert_integer("let identity = fn(x) { x; }; identity(5);", 5);
    assert_integer("let identity = fn(x) { return x; }; identity(5);", 5);
    assert_integer("let double = fn(x) { x * 2; }; double(5);", 10);
    assert_integer("let add = fn(x, y) { x + y; }; add(5, 5);", 10);
    assert_integer("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", 20);
    assert_integer("fn(x) { x; }(5)", 5);
}

#[test]
fn return_stops_at_the_call_boundary() {
    assert_integer("let f = fn() { return 1; 2; }; f() + 10;", 11);
}

#[test]
fn call_arity_is_checked() {
    assert_error("fn(x, y) { x + y }(1)", "wrong number of arguments. got=1, want=2");
    assert_error("fn() { 1 }(1, 2)", "wrong number of arguments. got=2, want=0");
}

#[test]
fn closures_capture_their_defining_environment() {
    assert_integer("let newAdder = fn(x) { fn(y) { x + y }; }; \
                    let addTwo = newAdder(2); addTwo(2);",
                   4);
    assert_integer("let counter = fn(x) { if (x > 3) { x } else { counter(x + 1) } }; \
                    counter(0);",
                   4);
}

#[test]
fn parameters_shadow_outer_bindings() {
    assert_integer("let x = 10; let f = fn(x) { x; }; f(5);", 5);
    assert_integer("let x = 10; let f = fn(x) { x; }; f(5); x;", 10);
}

#[test]
fn string_operations() {
    assert_eq!(eval("\"Hello World!\""), Object::Str("Hello World!".to_string()));
    assert_eq!(eval("\"Hello\" + \" \" + \"World!\""),
               Object::Str("Hello World!".to_string()));
    assert_boolean("\"a\" == \"a\"", true);
    assert_boolean("\"a\" == \"b\"", false);
    assert_boolean("\"a\" != \"b\"", true);
}

#[test]
fn builtin_len() {
    assert_integer("len(\"\")", 0);
    assert_integer("len(\"four\")", 4);
    assert_integer("len(\"hello world\")", 11);
    assert_integer("len([1, 2, 3])", 3);
    assert_integer("len([])", 0);
    assert_error("len(1)", "argument to `len` not supported, got INTEGER");
    assert_error("len(\"one\", \"two\")", "wrong number of arguments. got=2, want=1");
}

#[test]
fn builtin_array_helpers() {
    assert_integer("first([1, 2, 3])", 1);
    assert_null("first([])");
    assert_error("first(1)", "argument to `first` must be ARRAY, got INTEGER");
    assert_integer("last([1, 2, 3])", 3);
    assert_null("last([])");
    assert_eq!(eval("rest([1, 2, 3])"), eval("[2, 3]"));
    assert_null("rest([])");
    assert_eq!(eval("push([], 1)"), eval("[1]"));
    assert_integer("let a = [1]; let b = push(a, 2); len(a)", 1);
    assert_integer("let a = [1]; let b = push(a, 2); len(b)", 2);
}

#[test]
fn bindings_shadow_builtins() {
    assert_integer("let len = 5; len", 5);
}

#[test]
fn array_literals_and_indexing() {
    assert_eq!(eval("[1, 2 * 2, 3 + 3]"), eval("[1, 4, 6]"));
    assert_integer("[1, 2, 3][0]", 1);
    assert_integer("[1, 2, 3][1]", 2);
    assert_integer("[1, 2, 3][2]", 3);
    assert_integer("let i = 0; [1][i];", 1);
    assert_integer("[1, 2, 3][1 + 1];", 3);
    assert_integer("let myArray = [1, 2, 3]; myArray[2];", 3);
    assert_integer("let myArray = [1, 2, 3]; myArray[0] + myArray[1] + myArray[2];", 6);
    assert_integer("let myArray = [1, 2, 3]; let i = myArray[0]; myArray[i]", 2);
    assert_null("[1, 2, 3][3]");
    assert_null("[1, 2, 3][-1]");
}

#[test]
fn hash_literals_evaluate_keys_and_values() {
    let source = "let two = \"two\";
        {
            \"one\": 10 - 9,
            two: 1 + 1,
            \"thr\" + \"ee\": 6 / 2,
            4: 4,
            true: 5,
            false: 6
        }";
    let expected = "{\"one\": 1, \"two\": 2, \"three\": 3, 4: 4, true: 5, false: 6}";
    assert_eq!(eval(source), eval(expected));
}

#[test]
fn hash_indexing() {
    assert_integer("{\"foo\": 5}[\"foo\"]", 5);
    assert_null("{\"foo\": 5}[\"bar\"]");
    assert_integer("let key = \"foo\"; {\"foo\": 5}[key]", 5);
    assert_null("{}[\"foo\"]");
    assert_integer("{5: 5}[5]", 5);
    assert_integer("{true: 5}[true]", 5);
    assert_integer("{false: 5}[false]", 5);
    assert_null("{1: 1}[true]");
    assert_integer("{\"k\": 1, \"k\": 2}[\"k\"]", 2);
}

#[test]
fn inspect_forms() {
    assert_eq!(eval("fn(x) { x; }").to_string(), "fn(x) {\nx\n}");
    assert_eq!(eval("foobar").to_string(), "ERROR: identifier not found: foobar");
    assert_eq!(eval("[1, 2 + 3]").to_string(), "[1, 5]");
    assert_eq!(eval("if (false) { 1 }").to_string(), "null");
    assert_eq!(eval("len").to_string(), "builtin function");
}

#[test]
fn higher_order_functions() {
    let map = "let map = fn(arr, f) {
            let iter = fn(arr, accumulated) {
                if (len(arr) == 0) {
                    accumulated
                } else {
                    iter(rest(arr), push(accumulated, f(first(arr))))
                }
            };
            iter(arr, []);
        };
        map([1, 2, 3], fn(x) { x * 2 })";
    assert_eq!(eval(map), eval("[2, 4, 6]"));

    let reduce = "let reduce = fn(arr, initial, f) {
            let iter = fn(arr, result) {
                if (len(arr) == 0) {
                    result
                } else {
                    iter(rest(arr), f(result, first(arr)))
                }
            };
            iter(arr, initial);
        };
        reduce([1, 2, 3, 4], 0, fn(sum, el) { sum + el })";
    assert_integer(reduce, 10);
}

#[test]
fn host_interface_reports_failures() {
    assert_success("let x = 1 + 2; x == 3;");
    assert_failure("foobar");
    assert_failure("let x 5;");
    assert_failure("1 / 0");
    assert_failure("5 + true;");
}

#[test]
fn repl_does_not_echo_null_results() {
    use std::{
        io::Write,
        process::{Command, Stdio},
    };

    let mut child = Command::new(env!("CARGO_BIN_EXE_quill")).stdin(Stdio::piped())
                                                             .stdout(Stdio::piped())
                                                             .spawn()
                                                             .expect("failed to start the repl");
    child.stdin
         .as_mut()
         .expect("repl stdin should be piped")
         .write_all(b"let x = 5;\nx + 1\n")
         .expect("failed to write to the repl");

    let output = child.wait_with_output().expect("failed to wait for the repl");
    let stdout = String::from_utf8(output.stdout).expect("repl output should be utf-8");

    assert!(!stdout.contains("null"), "stdout: {stdout:?}");
    assert!(stdout.contains('6'), "stdout: {stdout:?}");
}

#[test]
fn test_script_file() {
    let script = fs::read_to_string("tests/example.ql").expect("missing file");
    assert_success(&script);

    let env = Environment::new();
    let result = eval_source(&script, &env).expect("script should parse");
    assert_eq!(result, Object::Str("Hello, Ada!".to_string()));
}
