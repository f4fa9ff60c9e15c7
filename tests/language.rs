use std::fs;

use subscripta::{Expression, error::EvalError, evaluate_source};
use walkdir::WalkDir;

#[test]
fn case_files_work() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "case"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let case = parse_case(&content);
        count += 1;

        match (evaluate_source(&case.expression, &case.values), case.expect) {
            (Ok(value), Some(expected)) => {
                assert!((value - expected).abs() < 1e-9,
                        "{path:?}: '{}' gave {value}, expected {expected}",
                        case.expression);
            },
            (Err(_), None) => {},
            (Ok(value), None) => {
                panic!("{path:?}: '{}' gave {value} but was expected to fail",
                       case.expression)
            },
            (Err(e), Some(_)) => panic!("{path:?}: '{}' failed: {e}", case.expression),
        }
    }

    assert!(count > 0, "No case files found in tests/cases");
}

/// A scenario file: the expression on its first line, then a `--- values`
/// section and a `--- expect` section holding a number or `error`.
struct Case {
    expression: String,
    values:     String,
    expect:     Option<f64>,
}

fn parse_case(content: &str) -> Case {
    let mut expression = String::new();
    let mut values = String::new();
    let mut expect = String::new();
    let mut section = "expression";

    for line in content.lines() {
        match line.trim() {
            "--- values" => section = "values",
            "--- expect" => section = "expect",
            _ => {
                let target = match section {
                    "expression" => &mut expression,
                    "values" => &mut values,
                    _ => &mut expect,
                };
                target.push_str(line);
                target.push('\n');
            },
        }
    }

    let expect = match expect.trim() {
        "error" => None,
        number => Some(number.parse().unwrap_or_else(|_| panic!("bad expectation {number:?}"))),
    };
    Case { expression: expression.trim().to_string(),
           values,
           expect }
}

fn assert_result(expression: &str, values: &str, expected: f64) {
    match evaluate_source(expression, values) {
        Ok(value) => assert_eq!(value, expected, "'{expression}'"),
        Err(e) => panic!("'{expression}' failed: {e}"),
    }
}

fn assert_failure(expression: &str, values: &str) {
    if evaluate_source(expression, values).is_ok() {
        panic!("'{expression}' succeeded but was expected to fail")
    }
}

#[test]
fn constant_arithmetic() {
    assert_result("2+3*4", "", 14.0);
    assert_result("(2+3)*4", "", 20.0);
    assert_result("(1+2)*(3-1)", "", 6.0);
    assert_result("100 / 8", "", 12.5);
    assert_result("9 - 3 - 3", "", 3.0);
}

#[test]
fn scalars_and_arrays() {
    assert_result("A[2]+B", "A 3 (2,7)\nB 5", 12.0);
    assert_result("varx + vary * A[1]", "varx 3\nvary 2\nA 2 (1,10)", 23.0);
    assert_result("A[0]", "A 4 (1,1)", 0.0);
}

#[test]
fn subscripts_are_expressions() {
    let values = "a 3\nb 2\nA 6 (0,1) (1,2) (2,3) (3,4) (4,5) (5,6)";
    assert_result("A[a+b]", values, 6.0);
    assert_result("A[a*b-1] - A[(a-b)]", values, 4.0);
    assert_result("A[A[A[0]]]", values, 3.0);
    assert_result("A[a/b]", values, 2.0);
}

#[test]
fn unlisted_values_default_to_zero() {
    assert_result("x + y", "x 4", 4.0);
    assert_result("x + 1", "", 1.0);
}

#[test]
fn index_out_of_range_is_error() {
    assert_failure("A[5]", "A 3 (0,1)");
    assert_failure("A[3-4]", "A 3 (0,1)");
}

#[test]
fn malformed_expression_is_error() {
    assert_failure("(1+2", "");
    assert_failure("1+", "");
    assert_failure("-1", "");
    assert_failure("1 2", "");
}

#[test]
fn bad_value_source_is_error() {
    assert_failure("x", "x five");
    assert_failure("A[0]", "A 2 (0,1.5)");
}

#[test]
fn expression_lifecycle_is_repeatable() {
    let mut expr = Expression::new("k * A[k-1]");
    expr.discover();
    expr.load_values_str("k 2\nA 2 (1,21)").unwrap();
    assert_eq!(expr.evaluate().unwrap(), 42.0);
    assert_eq!(expr.evaluate().unwrap(), 42.0);

    expr.load_values_str("k 1\nA 1 (0,5)").unwrap();
    assert_eq!(expr.evaluate().unwrap(), 5.0);
}

#[test]
fn evaluate_before_load_uses_zeroes() {
    let mut expr = Expression::new("x + 3");
    expr.discover();
    assert_eq!(expr.evaluate().unwrap(), 3.0);
}

#[test]
fn evaluate_before_discover_reports_unknown_variable() {
    let expr = Expression::new("x + 3");
    assert!(matches!(expr.evaluate(), Err(EvalError::UnknownVariable { .. })));
}
