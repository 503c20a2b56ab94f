use std::fs;

use minilox::{RunError, interpreter::lexer::scan, run_to};
use walkdir::WalkDir;

/// Runs a script and returns everything it printed.
fn run_capture(src: &str) -> Result<String, RunError> {
    let mut out = Vec::new();
    run_to(src, &mut out, false)?;
    Ok(String::from_utf8(out).expect("script output was not UTF-8"))
}

fn assert_prints(src: &str, expected: &str) {
    match run_capture(src) {
        Ok(output) => assert_eq!(output, expected, "Script: {src}"),
        Err(e) => panic!("Script failed: {e}\nScript: {src}"),
    }
}

fn assert_success(src: &str) {
    if let Err(e) = run_capture(src) {
        panic!("Script failed: {e}\nScript: {src}");
    }
}

fn assert_failure(src: &str) -> RunError {
    match run_capture(src) {
        Ok(output) => {
            panic!("Script succeeded but was expected to fail.\nScript: {src}\nOutput: {output}")
        },
        Err(e) => e,
    }
}

#[test]
fn demo_scripts_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "lox"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = run_capture(&content) {
            panic!("Demo script {path:?} failed:\n{content}\nError: {e}");
        }
    }

    assert!(count > 0, "No demo scripts found in demos/");
}

#[test]
fn numbers_print_with_one_decimal_when_integral() {
    assert_prints("print 3;", "3.0\n");
    assert_prints("print 3.1400;", "3.14\n");
    assert_prints("print -0.5;", "-0.5\n");
}

#[test]
fn arithmetic_is_left_associative() {
    assert_prints("print 1 - 2 - 3;", "-4.0\n");
    assert_prints("print 12 / 2 / 3;", "2.0\n");
    assert_prints("print 1 + 2 * 3;", "7.0\n");
    assert_prints("print (1 + 2) * 3;", "9.0\n");
}

#[test]
fn division_by_zero_follows_ieee() {
    assert_prints("print 1 / 0;", "inf\n");
    assert_prints("print -1 / 0;", "-inf\n");
    assert_prints("print 0 / 0;", "NaN\n");
}

#[test]
fn string_concatenation() {
    assert_prints(r#"print "foo" + "bar";"#, "foobar\n");
    assert_prints(r#"print "" + "x";"#, "x\n");
}

#[test]
fn comparisons_and_equality() {
    assert_prints("print 1 < 2;", "true\n");
    assert_prints("print 2 <= 2;", "true\n");
    assert_prints("print 3 > 4;", "false\n");
    assert_prints("print 1 == 1.0;", "true\n");
    assert_prints("print 1 != 2;", "true\n");
    assert_prints(r#"print "a" == "a";"#, "true\n");
    // Mixed types are unequal, never an error.
    assert_prints(r#"print 1 == "1";"#, "false\n");
    assert_prints("print nil == nil;", "true\n");
    assert_prints("print nil == 3;", "false\n");
    assert_prints("print 3 == nil;", "false\n");
}

#[test]
fn legacy_nil_equality_is_opt_in() {
    let mut out = Vec::new();
    run_to("print nil == 3; print 3 == nil;", &mut out, true).unwrap();

    // Only a *left* nil operand hits the historical rule.
    assert_eq!(String::from_utf8(out).unwrap(), "true\nfalse\n");
}

#[test]
fn truthiness() {
    assert_prints("print !nil;", "true\n");
    assert_prints("print !false;", "true\n");
    assert_prints("print !0;", "false\n");
    assert_prints(r#"print !"";"#, "false\n");
    assert_prints("print !!nil;", "false\n");
}

#[test]
fn unary_negation() {
    assert_prints("print -3;", "-3.0\n");
    assert_prints("print --3;", "3.0\n");
    assert_prints("print -(1 + 2);", "-3.0\n");
}

#[test]
fn variables_declare_read_and_assign() {
    assert_prints("var x = 5; print x;", "5.0\n");
    assert_prints("var x; print x;", "nil\n");
    assert_prints("var x = 5; x = x + 1; print x;", "6.0\n");
    // Assignment is an expression yielding the assigned value.
    assert_prints("var x; print x = 7;", "7.0\n");
    // Re-declaration in the same scope overwrites.
    assert_prints("var x = 1; var x = 2; print x;", "2.0\n");
}

#[test]
fn blocks_scope_and_shadow() {
    assert_prints("var x = 1; { var x = 2; print x; } print x;", "2.0\n1.0\n");
    assert_prints("var x = 1; { x = 5; } print x;", "5.0\n");
    assert_prints("{ var y = 1; { var z = 2; print y + z; } }", "3.0\n");
}

#[test]
fn block_bindings_do_not_leak() {
    let e = assert_failure("{ var y = 1; } print y;");
    assert!(matches!(e, RunError::Runtime(_)));
    assert_eq!(e.to_string(), "[line 1] Error: Undefined variable 'y'.");
}

#[test]
fn right_operand_evaluates_before_left() {
    // The assignment in the right operand runs first, so the left read of
    // `x` already sees 2.
    assert_prints("var x = 1; print x + (x = 2);", "4.0\n");
    assert_prints("var x = 1; print (x = 2) + x;", "3.0\n");
}

#[test]
fn runtime_errors_report_message_and_exit_code() {
    let e = assert_failure("print -\"muffin\";");
    assert_eq!(e.to_string(), "[line 1] Error: Operand must be a number.");
    assert_eq!(e.exit_code(), 70);

    let e = assert_failure(r#"print "a" < "b";"#);
    assert_eq!(e.to_string(), "[line 1] Error: Operands must be numbers.");

    let e = assert_failure(r#"print "1" + 2;"#);
    assert_eq!(e.to_string(),
               "[line 1] Error: Operands must be two numbers or two strings.");

    let e = assert_failure("print ghost;");
    assert_eq!(e.to_string(), "[line 1] Error: Undefined variable 'ghost'.");

    let e = assert_failure("ghost = 1;");
    assert_eq!(e.to_string(), "[line 1] Error: Undefined variable 'ghost'.");
}

#[test]
fn runtime_error_keeps_earlier_output() {
    let mut out = Vec::new();
    let result = run_to("print 1; print ghost;", &mut out, false);

    assert!(result.is_err());
    assert_eq!(String::from_utf8(out).unwrap(), "1.0\n");
}

#[test]
fn parse_errors_are_fail_fast() {
    let e = assert_failure("(1 + 2");
    assert_eq!(e.to_string(), "[line 1] Error: Expect ')' after expression.");
    assert_eq!(e.exit_code(), 65);

    let e = assert_failure("print ();");
    assert_eq!(e.to_string(), "[line 1] Error: Empty group");

    let e = assert_failure("1 + 2 = 3;");
    assert_eq!(e.to_string(), "[line 1] Error: Invalid assignment target.");

    let e = assert_failure("print 1");
    assert_eq!(e.to_string(), "[line 1] Error: Expect ';' after value.");

    let e = assert_failure("1 + 2");
    assert_eq!(e.to_string(), "[line 1] Error: Expect ';' after expression.");

    let e = assert_failure("var x = 1;\nvar = 2;");
    assert_eq!(e.to_string(), "[line 2] Error: Expect variable name.");

    let e = assert_failure("{ print 1;");
    assert_eq!(e.to_string(), "[line 1] Error: Expect '}' after block.");
}

#[test]
fn lexical_errors_accumulate() {
    let e = assert_failure("var x = @ 1 # 2;");
    assert_eq!(e.exit_code(), 65);
    assert_eq!(e.to_string(),
               "[line 1] Error: Unexpected character: @\n[line 1] Error: Unexpected character: #");
}

#[test]
fn unterminated_string_reports_starting_line() {
    let e = assert_failure("print 1;\nprint \"oops;");
    assert_eq!(e.to_string(), "[line 2] Error: Unterminated string.");
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    assert_prints("// nothing here\nprint 1; // trailing\n\n// done", "1.0\n");
}

#[test]
fn error_lines_count_newlines() {
    let e = assert_failure("var a = 1;\nvar b = 2;\nprint c;");
    assert_eq!(e.to_string(), "[line 3] Error: Undefined variable 'c'.");
}

#[test]
fn multi_line_strings_keep_line_numbers() {
    assert_prints("print \"a\nb\";\nprint 2;", "a\nb\n2.0\n");
    // An error after the literal is reported on the post-string line.
    let e = assert_failure("var s = \"a\nb\";\nprint d;");
    assert_eq!(e.to_string(), "[line 3] Error: Undefined variable 'd'.");
}

#[test]
fn assignment_is_right_associative() {
    assert_prints("var a; var b; a = b = 3; print a; print b;", "3.0\n3.0\n");
}

#[test]
fn grouping_nests() {
    assert_success("print ((((1))));");
    assert_prints("print (1 + (2 * (3 - 1)));", "5.0\n");
}

#[test]
fn parse_mode_renders_s_expressions() {
    let program = minilox::parse_source("print -(1 + 2) * 3;").unwrap();
    assert_eq!(program[0].to_string(), "(print (* (- (group (+ 1.0 2.0))) 3.0))");

    let program = minilox::parse_source("var x = 1; { x = 2; }").unwrap();
    assert_eq!(program[0].to_string(), "(var x 1.0)");
    assert_eq!(program[1].to_string(), "(block (= x 2.0))");
}

#[test]
fn rescanning_reconstructed_lexemes_is_stable() {
    let src = r#"var x = 5.50; { x = (x + 1.25) * 2; print x >= 2; } print "done" != nil;"#;

    let (tokens, errors) = scan(src);
    assert!(errors.is_empty());

    // Rebuild a program from the raw lexemes and scan it again; the token
    // kinds and lexemes must come back unchanged.
    let rebuilt = tokens.iter()
                        .map(|(token, _)| token.lexeme())
                        .collect::<Vec<_>>()
                        .join(" ");
    let (rescanned, errors) = scan(&rebuilt);
    assert!(errors.is_empty());

    let original: Vec<_> = tokens.into_iter().map(|(token, _)| token).collect();
    let roundtrip: Vec<_> = rescanned.into_iter().map(|(token, _)| token).collect();
    assert_eq!(original, roundtrip);
}

#[test]
fn keywords_are_reserved() {
    // `class` scans as a keyword, so it cannot be used as a variable name.
    assert_failure("var class = 1;");
    assert_failure("print while;");
}
