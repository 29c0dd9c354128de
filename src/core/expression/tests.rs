//! Tests for the expression engine

use pretty_assertions::assert_eq;

use super::*;
use crate::utils::error::MatexError;

fn compact(input: &str) -> String {
    expression_to_latex(input, &Config::default()).unwrap()
}

fn pretty(input: &str) -> String {
    expression_to_latex(input, &Config::pretty()).unwrap()
}

#[test]
fn test_term_compact_and_pretty() {
    assert_eq!(compact("3*3+sqrt(sqrt(a))"), r"9+\sqrt{\sqrt{a}}");
    assert_eq!(pretty("3*3+sqrt(sqrt(a))"), r"9 + \sqrt{\sqrt{a}}");
}

#[test]
fn test_equation_chain() {
    assert_eq!(compact("f=0=3*3+sqrt(sqrt(a))"), r"f=0=9+\sqrt{\sqrt{a}}");
    assert_eq!(pretty("f=0=3*3+sqrt(sqrt(a))"), r"f = 0 = 9 + \sqrt{\sqrt{a}}");
}

#[test]
fn test_equation_with_whitespace() {
    assert_eq!(pretty("0 = 3*2-sqrt(x)"), r"0 = 6 - \sqrt{x}");
}

#[test]
fn test_literal_only_expressions() {
    assert_eq!(compact("1+2*3"), "7");
    assert_eq!(compact("(1+2)*3"), "9");
    assert_eq!(compact("7/2"), "3.5");
    assert_eq!(compact("sqrt(2*8)"), "4");
    assert_eq!(compact("2-5"), "-3");
    assert_eq!(pretty("10/4"), "2.5");
}

#[test]
fn test_sides_fold_independently() {
    let equation = fold_equation(parse("2*2=a+1*1").unwrap()).unwrap();
    assert_eq!(equation.sides.len(), 2);
    assert_eq!(equation.sides[0], Expr::Number(4.0));
    assert_eq!(
        equation.sides[1],
        Expr::binary(BinaryOp::Add, Expr::ident("a"), Expr::Number(1.0))
    );
}

#[test]
fn test_parentheses_are_preserved_where_needed() {
    assert_eq!(compact("(a+b)*c"), r"(a+b)\cdot{}c");
    assert_eq!(compact("a-(b-c)"), "a-(b-c)");
    assert_eq!(compact("a-(b+c)"), "a-(b+c)");
    assert_eq!(compact("(a-b)-c"), "a-b-c");
    assert_eq!(compact("a/(b*c)"), r"a/(b\cdot{}c)");
    assert_eq!(compact("a+(-3)"), "a+(-3)");
    assert_eq!(compact("-(a+b)"), "-(a+b)");
    assert_eq!(pretty("a*(b+1)"), r"a \cdot (b + 1)");
}

#[test]
fn test_nested_functions() {
    assert_eq!(compact("sqrt(sqrt(sqrt(x)))"), r"\sqrt{\sqrt{\sqrt{x}}}");
    assert_eq!(pretty("sqrt(a+2*2)"), r"\sqrt{a + 4}");
    assert_eq!(compact("sin(x)+cos(0)"), r"\sin{x}+1");
}

#[test]
fn test_unary_minus() {
    assert_eq!(compact("-a"), "-a");
    assert_eq!(compact("--a"), "-(-a)");
    assert_eq!(compact("+a"), "a");
    assert_eq!(compact("-2*3"), "-6");
}

#[test]
fn test_parse_errors() {
    let cases = [
        ("(a+b", "unclosed"),
        ("a+b)", "unmatched"),
        ("a+", "missing an operand"),
        ("*a", "missing an operand"),
        ("foo(a)", "unrecognized function"),
        ("", "empty"),
        ("a==b", "empty"),
        ("a=", "empty"),
        ("()", "empty parentheses"),
        ("a b", "unexpected"),
    ];

    for (input, expected) in cases {
        let err = parse(input).unwrap_err();
        assert!(
            err.message.contains(expected),
            "Expected '{}' to fail with '{}', got '{}'",
            input,
            expected,
            err
        );
    }
}

#[test]
fn test_parse_error_column_points_into_full_input() {
    let err = parse("x = (a").unwrap_err();
    assert_eq!(err.column, Some(5));
}

#[test]
fn test_division_by_literal_zero() {
    let err = expression_to_latex("1/0", &Config::default()).unwrap_err();
    assert!(matches!(err, MatexError::Evaluation { .. }));
}

#[test]
fn test_parse_error_surfaces_through_pipeline() {
    let err = expression_to_latex("sqrt(", &Config::default()).unwrap_err();
    assert!(matches!(err, MatexError::Parse(_)));
}

#[test]
fn test_pretty_flag_only_changes_spacing() {
    let inputs = ["a+b-c", "x=2*y", "1+sqrt(z)/w"];
    for input in inputs {
        let compact = compact(input);
        let pretty_text = pretty(input);
        assert_eq!(pretty_text.replace(' ', ""), compact.replace("{}", ""));
    }
}

#[test]
fn test_deep_nesting() {
    let depth = 200;
    let input = format!("{}a{}", "sqrt(".repeat(depth), ")".repeat(depth));
    let expected = format!("{}a{}", r"\sqrt{".repeat(depth), "}".repeat(depth));
    assert_eq!(compact(&input), expected);

    let input = format!("{}1{}", "(-".repeat(depth), ")".repeat(depth));
    assert_eq!(compact(&input), "1");
}
