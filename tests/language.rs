use std::{fs, process::Command};

use skiff::interpret;
use walkdir::WalkDir;

/// Runs a script and returns its rendered result strings.
fn run(src: &str) -> Vec<String> {
    interpret(src).unwrap_or_else(|e| panic!("Script failed: {e}\nSource:\n{src}"))
}

fn assert_success(src: &str) {
    if let Err(e) = interpret(src) {
        panic!("Script failed: {e}\nSource:\n{src}");
    }
}

fn assert_failure_containing(src: &str, needle: &str) {
    match interpret(src) {
        Ok(results) => {
            panic!("Script succeeded ({results:?}) but was expected to fail:\n{src}")
        },
        Err(e) => {
            let message = e.to_string();
            assert!(message.contains(needle),
                    "expected error containing {needle:?}, got: {message}");
        },
    }
}

/// Writes the script to a temp file and runs the compiled binary on it, so
/// tests can observe real stdout/stderr and the exit status.
fn run_binary(src: &str, file_name: &str) -> std::process::Output {
    let path = std::env::temp_dir().join(format!("{}-{file_name}", std::process::id()));
    fs::write(&path, src).expect("failed to write temp script");

    let output = Command::new(env!("CARGO_BIN_EXE_skiff")).arg(&path)
                                                          .output()
                                                          .expect("failed to run skiff");
    let _ = fs::remove_file(&path);
    output
}

#[test]
fn arithmetic_and_grouping() {
    assert_eq!(run("1 + 2 * 3;"), vec!["7"]);
    assert_eq!(run("(1 + 2) * 3;"), vec!["9"]);
    assert_eq!(run("10 / 4;"), vec!["2.5"]);
    assert_eq!(run("8 - 5;"), vec!["3"]);
}

#[test]
fn number_rendering_is_canonical() {
    assert_eq!(run("0.5;"), vec!["0.5"]);
    assert_eq!(run("2.0;"), vec!["2"]);
    assert_eq!(run("100;"), vec!["100"]);
}

#[test]
fn declaration_and_print() {
    assert_eq!(run("var x = 1; print(x + 2);"), vec!["1", "3"]);
}

#[test]
fn string_concatenation() {
    assert_eq!(run("var s = \"hi\"; print(s + \" world\");"), vec!["hi", "hi world"]);
    assert_eq!(run("\"a\" + 1;"), vec!["a1"]);
    assert_eq!(run("1 + \"a\";"), vec!["1a"]);
}

#[test]
fn addition_on_unsupported_types_is_error() {
    assert_failure_containing("true + 1;", "Type error");
    assert_failure_containing("nil + \"x\";", "Type error");
}

#[test]
fn empty_program_has_no_results() {
    assert!(run("").is_empty());
}

#[test]
fn assignment_contributes_the_new_value() {
    assert_eq!(run("var x; x = 1;"), vec!["null", "1"]);
}

#[test]
fn comparisons_are_numeric_for_numbers() {
    assert_eq!(run("10 > 9;"), vec!["true"]);
    assert_eq!(run("1 == 1.0;"), vec!["true"]);
    assert_eq!(run("2 <= 2;"), vec!["true"]);
    assert_eq!(run("1 != 2;"), vec!["true"]);
}

#[test]
fn comparisons_are_lexicographic_for_strings() {
    assert_eq!(run("\"10\" > \"9\";"), vec!["false"]);
    assert_eq!(run("\"a\" != \"b\";"), vec!["true"]);
    assert_eq!(run("\"abc\" == \"abc\";"), vec!["true"]);
}

#[test]
fn division_by_zero_follows_ieee() {
    assert_eq!(run("1 / 0;"), vec!["inf"]);
    assert_eq!(run("-1 / 0;"), vec!["-inf"]);
    assert_eq!(run("0 / 0;"), vec!["NaN"]);
}

#[test]
fn unary_operators() {
    assert_eq!(run("!true;"), vec!["false"]);
    assert_eq!(run("!0;"), vec!["true"]);
    assert_eq!(run("!3;"), vec!["false"]);
    assert_eq!(run("!\"\";"), vec!["true"]);
    assert_eq!(run("!\"x\";"), vec!["false"]);
    assert_eq!(run("-(-2);"), vec!["2"]);
    assert_failure_containing("!nil;", "Type error");
    assert_failure_containing("-\"x\";", "Type error");
}

#[test]
fn and_short_circuits_on_falsy_left() {
    assert_eq!(run("var a = 0; false && (a = 1); print(a);"), vec!["0", "false", "0"]);
    assert_eq!(run("var a = 0; true && (a = 1); print(a);"), vec!["0", "true", "1"]);
}

#[test]
fn or_short_circuits_on_truthy_left() {
    assert_eq!(run("var a = 0; true || (a = 2); print(a);"), vec!["0", "true", "0"]);
    assert_eq!(run("var a = 0; false || (a = 2); print(a);"), vec!["0", "true", "2"]);
}

#[test]
fn nullish_coalescing_replaces_only_nil() {
    assert_eq!(run("var x; var y = x ?? 5; print(y);"), vec!["null", "5", "5"]);
    assert_eq!(run("3 ?? 5;"), vec!["3"]);
    assert_eq!(run("false ?? 5;"), vec!["false"]);
}

#[test]
fn ternary_selects_one_branch() {
    assert_eq!(run("var x = 5; x > 3 ? \"big\" : \"small\";"), vec!["5", "big"]);
    assert_eq!(run("var x = 1; x > 3 ? \"big\" : \"small\";"), vec!["1", "small"]);
}

#[test]
fn blocks_shadow_and_restore() {
    assert_eq!(run("var x = 1; { var x = 2; print(x); } print(x);"),
               vec!["1", "2", "2", "1"]);
}

#[test]
fn block_locals_do_not_leak() {
    assert_failure_containing("var x = 1; { var y = 2; } y;", "Undefined variable 'y'");
}

#[test]
fn if_contributes_no_results() {
    assert_eq!(run("var a = 0; if (a == 0) { print(\"z\"); } else { print(\"nz\"); }"),
               vec!["0"]);
}

#[test]
fn for_loop_appends_in_iteration_order() {
    assert_eq!(run("var i = 0; for (i = 0; i < 3; i = i + 1) { print(i); }"),
               vec!["0", "0", "1", "2"]);
}

#[test]
fn for_initializer_is_loop_local() {
    assert_failure_containing("for (var i = 0; i < 2; i = i + 1) { } i;",
                              "Undefined variable 'i'");
}

#[test]
fn while_desugars_to_for() {
    assert_eq!(run("var i = 0; while (i < 3) { i = i + 1; } print(i);"),
               vec!["0", "1", "2", "3", "3"]);
}

#[test]
fn function_call_binds_parameters() {
    assert_eq!(run("fun add(a, b) { return a + b; } print(add(2, 5));"), vec!["7"]);
}

#[test]
fn recursion_works() {
    assert_eq!(run("fun fib(n) { if (n < 2) { return n; } return fib(n - 1) + fib(n - 2); } print(fib(10));"),
               vec!["55"]);
}

#[test]
fn return_stops_the_body() {
    assert_eq!(run("fun f() { return 1; print(\"never\"); } print(f());"), vec!["1"]);
}

#[test]
fn bare_return_and_missing_return_yield_nil() {
    assert_eq!(run("fun f() { return; } print(f());"), vec!["null"]);
    assert_eq!(run("fun f() { 1 + 1; } print(f());"), vec!["null"]);
}

#[test]
fn functions_are_values() {
    assert_eq!(run("fun f() { return 7; } var g = f; print(g());"), vec!["<fun f>", "7"]);
}

#[test]
fn parameters_do_not_leak() {
    assert_failure_containing("fun f(a) { return a; } f(1); a;", "Undefined variable 'a'");
}

#[test]
fn wrong_arity_is_error() {
    assert_failure_containing("fun f(x) { return x; } f(1, 2);",
                              "Expected 1 argument(s) but found 2");
}

#[test]
fn calling_a_non_function_is_error() {
    assert_failure_containing("var x = 1; x();", "Only functions can be called");
}

#[test]
fn function_cannot_overwrite_existing_binding() {
    assert_failure_containing("var g = 1; { fun g() { return 2; } }", "already defined");
}

#[test]
fn const_reassignment_is_a_parse_error() {
    assert_failure_containing("const k = 5; k = 6;", "Cannot reassign constant 'k'");
}

#[test]
fn const_bindings_still_read_normally() {
    assert_eq!(run("const k = 5; print(k + 1);"), vec!["5", "6"]);
}

#[test]
fn environment_enforces_const_at_runtime() {
    use skiff::interpreter::{environment::Environment, value::Value};

    let mut env = Environment::new();
    env.define("k", Value::Number(5.0), true, 1).unwrap();
    assert!(env.assign("k", Value::Number(6.0), 2).is_err());
}

#[test]
fn return_outside_function_is_error() {
    assert_failure_containing("return 1;", "outside of a function");
}

#[test]
fn missing_semicolon_is_reported() {
    assert_failure_containing("var x = 1", "Expected ';'");
}

#[test]
fn missing_closing_paren_is_reported() {
    assert_failure_containing("print(1;", "closing parenthesis");
}

#[test]
fn declaration_needs_an_identifier() {
    assert_failure_containing("var 1 = 2;", "expected identifier");
}

#[test]
fn assignment_to_undeclared_name_is_reported() {
    assert_failure_containing("x = 1;", "Undefined variable 'x'");
}

#[test]
fn duplicate_declaration_is_reported() {
    assert_failure_containing("var x = 1; var x = 2;", "already declared");
}

#[test]
fn recovery_surfaces_multiple_diagnostics() {
    match interpret("x = 1; y = 2;") {
        Ok(_) => panic!("expected a parse failure"),
        Err(e) => {
            let message = e.to_string();
            assert!(message.contains("'x'"), "missing first diagnostic: {message}");
            assert!(message.contains("'y'"), "missing second diagnostic: {message}");
        },
    }
}

#[test]
fn unknown_characters_are_lexer_errors() {
    assert_failure_containing("var x = @;", "Unexpected token");
}

#[test]
fn comments_are_skipped_but_count_lines() {
    assert_eq!(run("// hello\nvar x = 1; /* multi\nline */ print(x);"), vec!["1", "1"]);
    assert_failure_containing("var x = 1;\n// comment\nz = 1;", "line 3");
}

#[test]
fn sample_scripts_run_clean() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "sk"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        count += 1;

        if let Err(e) = interpret(&source) {
            panic!("Sample script {path:?} failed: {e}");
        }
    }

    assert!(count > 0, "No sample scripts found in tests/scripts");
}

#[test]
fn fibonacci_script_produces_the_sequence() {
    let source = fs::read_to_string("tests/scripts/fibonacci.sk").expect("missing file");
    let results = run(&source);
    // fib(7), printed on the last pass through the loop.
    assert!(results.contains(&"13".to_string()), "results: {results:?}");
}

#[test]
fn binary_prints_selected_branch() {
    let output = run_binary("var a = 0; if (a == 0) { print(\"z\"); } else { print(\"nz\"); }",
                            "branch.sk");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "z\n");
}

#[test]
fn binary_selects_elif_arm() {
    let output = run_binary("var a = 2; if (a == 1) { print(\"one\"); } elif (a == 2) { print(\"two\"); } else { print(\"other\"); }",
                            "elif.sk");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "two\n");
}

#[test]
fn binary_prints_loop_in_order() {
    let output = run_binary("var i = 0; for (i = 0; i < 3; i = i + 1) { print(i); }",
                            "loop.sk");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "0\n1\n2\n");
}

#[test]
fn binary_skips_statements_after_return() {
    let output = run_binary("fun f() { return 1; print(\"never\"); } print(f());",
                            "early-return.sk");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "1\n");
}

#[test]
fn binary_exits_nonzero_on_const_reassignment() {
    let output = run_binary("const k = 5; k = 6;", "const.sk");
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 1"), "stderr: {stderr}");
    assert!(stderr.contains("Cannot reassign constant 'k'"), "stderr: {stderr}");
}

#[test]
fn interactive_sessions_keep_state_between_lines() {
    let mut session = skiff::Interpreter::new();

    assert_eq!(session.run("var x = 1;").unwrap(), vec!["1"]);
    assert_eq!(session.run("x = x + 1;").unwrap(), vec!["2"]);
    assert!(session.run("var x = 3;").is_err()); // still a duplicate
}

#[test]
fn fibonacci_via_while_loop() {
    assert_success(
                   r#"
        var a = 0;
        var b = 1;
        var steps = 0;
        while (steps < 10) {
            var next = a + b;
            a = b;
            b = next;
            steps = steps + 1;
        }
        print(a);
    "#,
    );
}
