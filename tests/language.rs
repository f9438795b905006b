use std::fs;

use amython::{Error, ErrorKind, Interpreter, ast::Position};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn example_programs_produce_expected_output() {
    let root = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/programs");
    let mut count = 0;

    for entry in WalkDir::new(root).into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "amy"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                             panic!("Failed to read {expected_path:?}: {e}")
                                                         });

        count += 1;
        match run(&source) {
            Ok(output) => assert_eq!(output, expected, "output of {path:?}"),
            Err(e) => panic!("Program {path:?} failed:\n{source}\nError: {e}"),
        }
    }

    assert!(count > 0, "No programs found in {root}");
}

fn run(src: &str) -> Result<String, Error> {
    let mut interpreter = Interpreter::new(Vec::new());
    interpreter.interpret(src)?;
    Ok(String::from_utf8_lossy(&interpreter.into_output()).into_owned())
}

fn program(body: &str) -> String {
    format!("PROGRAM test {{\n{body}\n}}")
}

fn assert_output(body: &str, expected: &str) {
    match run(&program(body)) {
        Ok(output) => assert_eq!(output, expected),
        Err(e) => panic!("Script failed: {e}\n{body}"),
    }
}

fn assert_failure(body: &str, kind: ErrorKind) -> Error {
    match run(&program(body)) {
        Ok(output) => panic!("Script succeeded but was expected to fail with {kind}, printed {output:?}"),
        Err(e) => {
            assert_eq!(e.kind(), kind, "unexpected error: {e}");
            e
        },
    }
}

#[test]
fn countdown_prints_each_value() {
    assert_output("def countdown(n) {\n  while (n > 0) { print(n) n = n - 1 }\n}\ncountdown(5)",
                  "5\n4\n3\n2\n1\n");
}

#[test]
fn global_while_loop_counts_down() {
    assert_eq!(run("PROGRAM demo { x = 5 while (x > 0) { print(x) x = x - 1 } }").unwrap(),
               "5\n4\n3\n2\n1\n");
}

#[test]
fn integer_and_float_arithmetic() {
    assert_output("print(2 + 3, 7 - 10, 6 * 7)", "5 -3 42\n");
    assert_output("print(2.5 + 1, 1.5 * 2, 3.0)", "3.5 3.0 3.0\n");
    assert_output("print(0.1 + 0.2)", "0.30000000000000004\n");
    assert_output("print(.5 * 4)", "2.0\n");
}

#[test]
fn truncating_and_true_division() {
    assert_output("print(7 / 2, -7 / 2, 7.0 / 2)", "3 -3 3.5\n");
    assert_output("print(7 // 2, 4 // 2, 1 // 0)", "3.5 2.0 inf\n");
    assert_output("print(1.0 / 0, 1 / 0.0)", "inf inf\n");
}

#[test]
fn integer_division_by_zero_fails() {
    let err = assert_failure("x = 1\ny = x / 0", ErrorKind::ZeroDivisionError);
    assert_eq!(err.position(), Some(Position::new(3, 7)));
}

#[test]
fn operator_precedence_and_associativity() {
    assert_output("print(2 + 3 * 4, (2 + 3) * 4, 10 - 4 - 3, 12 / 2 / 3)", "14 20 3 2\n");
    assert_output("print(- -3, -(2 + 1), +4)", "3 -3 4\n");
    assert_output("x = 3\ny = --x\nprint(y, -.5)", "3 -0.5\n");
}

#[test]
fn integer_arithmetic_wraps() {
    assert_output("print(9223372036854775807 + 1)", "-9223372036854775808\n");
}

#[test]
fn booleans_promote_to_integers() {
    assert_output("print(True + True, -True, False * 3, True == 1)", "2 -1 0 True\n");
}

#[test]
fn comparisons_yield_booleans() {
    assert_output("print(1 < 2, 2.5 >= 3, 1 == 1.0, 1 != 1, 3 <= 3, 4 > 3.5)",
                  "True False True False True True\n");
}

#[test]
fn integer_comparisons_are_exact() {
    assert_output("print(9007199254740993 == 9007199254740992, 9007199254740993 > 9007199254740992, 9007199254740993 != 9007199254740992)",
                  "False True True\n");
    assert_output("print(9223372036854775807 > 9223372036854775806, -9223372036854775807 < -9223372036854775806)",
                  "True True\n");
}

#[test]
fn predicates_coerce_numbers() {
    assert_output("n = 3\nwhile (n) { print(n) n = n - 1 }", "3\n2\n1\n");
    assert_output("if (0.0) { print(1) } else { print(2) }", "2\n");
}

#[test]
fn block_value_is_last_statement_and_return_does_not_stop_it() {
    assert_output("def f() { return 1 return 2 }\nprint(f())", "2\n");
    assert_output("def f() { return 1 print(9) }\nf()", "9\n");
}

#[test]
fn if_statement_yields_branch_value() {
    assert_output("def sign(x) {\n  if (x < 0) { return -1 } else { return 1 }\n}\nprint(sign(-5), sign(3))",
                  "-1 1\n");
}

#[test]
fn recursion() {
    assert_output("def fact(n) {\n  if (n < 2) { return 1 } else { return n * fact(n - 1) }\n}\nprint(fact(10))",
                  "3628800\n");
}

#[test]
fn builtin_functions() {
    assert_output("print(min(3, 1.5, 2), max(3, 1.5, 2))", "1.5 3\n");
    assert_output("print(sum(1, 2, 3), sum(1, 2.0), sum(True, 1))", "6 3.0 2\n");
    assert_output("print(abs(-4), abs(-2.5), abs(True))", "4 2.5 1\n");
}

#[test]
fn min_and_max_return_the_original_argument() {
    assert_output("print(min(1, 1.0), min(1.0, 1), max(True, 0))", "1 1.0 True\n");
}

#[test]
fn print_joins_arguments_with_spaces() {
    assert_output("print()\nprint(1)\nprint(1, 2.0, False)", "\n1\n1 2.0 False\n");
}

#[test]
fn callables_and_program_name_render() {
    assert_output("def f() { return 1 }\ng = lambda (x): { return x }\nprint(f, g, print, test)",
                  "<function f> <lambda g> <built-in function print> <program test>\n");
}

#[test]
fn lambdas_are_callable_through_their_defining_name() {
    assert_output("square = lambda (x): { return x * x }\nprint(square(4))", "16\n");
    assert_output("add = lambda (a, b): { return a + b }\nprint(add(2, 5))", "7\n");
}

#[test]
fn lambda_sees_locals_of_the_frame_that_binds_it() {
    assert_output("def outer() {\n  y = 10\n  f = lambda (): { return y }\n  return f()\n}\nprint(outer())",
                  "10\n");
}

#[test]
fn nested_function_sees_enclosing_locals() {
    assert_output("def h() {\n  def g() { return z }\n  z = 5\n  return g()\n}\nprint(h())",
                  "5\n");
}

#[test]
fn global_function_does_not_see_caller_locals() {
    let err = assert_failure("def g() { return z }\ndef h() { z = 5 return g() }\nprint(h())",
                             ErrorKind::NameError);
    assert!(err.to_string().contains("'z'"), "{err}");
}

#[test]
fn lambda_called_under_another_name_fails() {
    let err = assert_failure("def make() {\n  inc = lambda (x): { return x + 1 }\n  return inc\n}\nf = make()\nprint(f(1))",
                             ErrorKind::NameError);
    assert!(err.to_string().contains("'inc'"), "{err}");
}

#[test]
fn assignments_bind_in_the_current_frame() {
    assert_output("x = 1\ndef f() { x = 2 return x }\nprint(f(), x)", "2 1\n");
}

#[test]
fn unknown_name_is_a_name_error() {
    let err = assert_failure("print(y)", ErrorKind::NameError);
    assert!(err.to_string().contains("name 'y' not found"), "{err}");
    assert_eq!(err.position(), Some(Position::new(2, 7)));

    assert_failure("undefined(1)", ErrorKind::NameError);
}

#[test]
fn argument_count_mismatch_is_a_syntax_error() {
    let err = assert_failure("def f() { return 1 }\nprint(f(1))", ErrorKind::SyntaxError);
    assert!(err.to_string().contains("required 0, but got 1"), "{err}");

    let err = assert_failure("g = lambda (a, b): { return a }\ng(1)", ErrorKind::SyntaxError);
    assert!(err.to_string().contains("required 2, but got 1"), "{err}");
}

#[test]
fn builtin_arity_is_a_type_error() {
    let err = assert_failure("x = min()", ErrorKind::TypeError);
    assert!(err.to_string().contains("min requires at least 1 argument but got 0"), "{err}");

    let err = assert_failure("x = abs(1, 2)", ErrorKind::TypeError);
    assert!(err.to_string().contains("abs requires exactly 1 argument but got 2"), "{err}");

    assert_failure("x = sum()", ErrorKind::TypeError);
}

#[test]
fn calling_a_non_callable_is_a_type_error() {
    assert_failure("x = 1\nx(2)", ErrorKind::TypeError);
    assert_failure("test()", ErrorKind::TypeError);
}

#[test]
fn builtins_can_be_shadowed_by_assignment() {
    assert_failure("print = 3\nprint(1)", ErrorKind::TypeError);
    assert_output("def f() { min = 7 return min }\nprint(f(), min(2, 1))", "7 1\n");
}

#[test]
fn valueless_call_in_expression_is_a_type_error() {
    let err = assert_failure("def f() { x = 1 }\ny = f()", ErrorKind::TypeError);
    assert!(err.to_string().contains("'f' did not return a value"), "{err}");

    assert_failure("y = print(1) + 1", ErrorKind::TypeError);
}

#[test]
fn callables_are_not_numbers() {
    assert_failure("x = print + 1", ErrorKind::TypeError);
    assert_failure("def f() { return 1 }\nx = -f", ErrorKind::TypeError);
    assert_failure("if (print) { x = 1 } else { x = 2 }", ErrorKind::TypeError);
    assert_failure("x = max(1, print)", ErrorKind::TypeError);
    assert_failure("x = sum(test)", ErrorKind::TypeError);
    assert_failure("x = abs(abs)", ErrorKind::TypeError);
}

#[test]
fn comments_are_ignored_and_keep_line_numbers() {
    assert_output("/* a comment */ print(1) /* spanning\n several\n lines */ print(2)",
                  "1\n2\n");

    let err = assert_failure("/* one\ntwo */\nprint(y)", ErrorKind::NameError);
    assert_eq!(err.position(), Some(Position::new(4, 7)));
}

#[test]
fn syntax_errors() {
    assert_failure("x = !", ErrorKind::SyntaxError);
    assert_failure("x = 3.1.4", ErrorKind::SyntaxError);
    assert_failure("x = 1 /* never closed", ErrorKind::SyntaxError);
    assert_failure("x + 1", ErrorKind::SyntaxError);
    assert_failure("x = 1 < 2 < 3", ErrorKind::SyntaxError);
    assert_failure("if (1) { x = 1 }", ErrorKind::SyntaxError);
    assert_failure("x = y-1", ErrorKind::SyntaxError);
    assert_failure("elif (1) { x = 1 }", ErrorKind::SyntaxError);
}

#[test]
fn content_after_the_program_is_rejected() {
    assert!(matches!(run("PROGRAM demo { x = 1 } y").map_err(|e| e.kind()),
                     Err(ErrorKind::SyntaxError)));
    assert!(matches!(run("PROGRAM demo { x = 1 }\n\n  /* trailing comment */\n"), Ok(_)));
}

#[test]
fn nothing_runs_when_parsing_fails() {
    let mut interpreter = Interpreter::new(Vec::new());
    let err = interpreter.interpret("PROGRAM demo { print(1) x = }").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::SyntaxError);
    assert!(interpreter.output().is_empty());
}

#[test]
fn frames_are_unwound_after_a_runtime_error() {
    let mut interpreter = Interpreter::new(Vec::new());
    let err = interpreter.interpret("PROGRAM demo {\n  def f(n) { if (n > 0) { return f(n - 1) } else { return 1 / 0 } }\n  print(f(3))\n}")
                         .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ZeroDivisionError);
    assert_eq!(interpreter.stack().depth(), 1);
}

#[test]
fn empty_program_runs() {
    assert_eq!(run("PROGRAM empty {}").unwrap(), "");
}
