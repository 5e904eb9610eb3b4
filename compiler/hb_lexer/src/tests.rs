use super::*;
use hb_ir::ExprKind;
use pretty_assertions::assert_eq;

fn parse(source: &str) -> Vec<Statement> {
    match parse_program(source) {
        Ok(stmts) => stmts,
        Err(err) => panic!("unexpected parse error: {err}"),
    }
}

#[test]
fn assignment_drops_keyword() {
    let stmts = parse(r#"var $x "hello""#);
    assert_eq!(stmts.len(), 1);
    assert_eq!(stmts[0].kind(), StmtKind::Assignment);
    assert_eq!(
        stmts[0].expressions(),
        &[
            Expression::variable("$x", "x"),
            Expression::constant("\"hello\"", "hello"),
        ]
    );
}

#[test]
fn operator_drops_keyword() {
    let stmts = parse("operator + $a $b");
    assert_eq!(stmts[0].kind(), StmtKind::Operator);
    assert_eq!(stmts[0].expressions().len(), 3);
    assert_eq!(stmts[0].expressions()[0].value(), "+");
}

#[test]
fn call_keeps_callee_as_first_expression() {
    let stmts = parse("println a b");
    assert_eq!(stmts[0].kind(), StmtKind::FunctionCall);
    let values: Vec<&str> = stmts[0].expressions().iter().map(Expression::value).collect();
    assert_eq!(values, vec!["println", "a", "b"]);
}

#[test]
fn keyword_alone_is_legal() {
    let stmts = parse("var\noperator");
    assert_eq!(stmts.len(), 2);
    assert!(stmts[0].expressions().is_empty());
    assert!(stmts[1].expressions().is_empty());
}

#[test]
fn full_line_comment_produces_nothing() {
    assert!(parse(": just a comment").is_empty());
    assert!(parse("   :indented comment").is_empty());
    assert_eq!(parse(":c\nnoop\n:c").len(), 1);
}

#[test]
fn statement_source_is_trimmed_line() {
    let stmts = parse("  println   hi  ;noop");
    assert_eq!(stmts[0].source(), "println   hi");
    assert_eq!(stmts[1].source(), "noop");
}

#[test]
fn inline_comment_truncates_arguments() {
    let stmts = parse("println hi :trailing comment more words");
    let values: Vec<&str> = stmts[0].expressions().iter().map(Expression::value).collect();
    assert_eq!(values, vec!["println", "hi"]);
}

#[test]
fn inline_comment_right_after_keyword() {
    let stmts = parse("var :nothing here");
    assert_eq!(stmts[0].kind(), StmtKind::Assignment);
    assert!(stmts[0].expressions().is_empty());
}

#[test]
fn quoted_argument_with_escaped_quote() {
    let stmts = parse(r#"println "hello\"world""#);
    let args = &stmts[0].expressions()[1..];
    assert_eq!(args.len(), 1);
    assert_eq!(args[0].kind(), ExprKind::Constant);
    assert_eq!(args[0].value(), "hello\"world");
}

#[test]
fn escaped_dollar_is_constant() {
    let stmts = parse(r"println \$literal");
    let arg = &stmts[0].expressions()[1];
    assert_eq!(arg.kind(), ExprKind::Constant);
    assert_eq!(arg.value(), "$literal");
}

#[test]
fn quoted_keyword_is_a_call() {
    let stmts = parse(r#""var" a"#);
    assert_eq!(stmts[0].kind(), StmtKind::FunctionCall);
    assert_eq!(stmts[0].expressions()[0].value(), "var");
}

#[test]
fn keyword_with_trailing_text_is_a_call() {
    let stmts = parse("variable x");
    assert_eq!(stmts[0].kind(), StmtKind::FunctionCall);
}

#[test]
fn mixed_terminators() {
    let stmts = parse("var $a 1; var $b 2\nprintln $a $b");
    let kinds: Vec<StmtKind> = stmts.iter().map(Statement::kind).collect();
    assert_eq!(
        kinds,
        vec![StmtKind::Assignment, StmtKind::Assignment, StmtKind::FunctionCall]
    );
}

#[test]
fn parse_line_skips_blank_and_comment() {
    assert_eq!(parse_line("   "), Ok(None));
    assert_eq!(parse_line(":x"), Ok(None));
}

#[test]
fn unclosed_string_splits_at_escaped_quote() {
    let stmts = parse(r#"println "a\"b c"#);
    assert_eq!(
        stmts[0].expressions(),
        &[
            Expression::constant("println", "println"),
            Expression::constant(r#""a\""#, "a\\"),
            Expression::constant("b", "b"),
            Expression::constant("c", "c"),
        ]
    );
}
