use super::*;
use pretty_assertions::assert_eq;

fn texts(line: &str) -> Vec<&str> {
    tokenize(line).iter().map(|t| t.text).collect()
}

fn kinds(line: &str) -> Vec<TokenKind> {
    tokenize(line).iter().map(|t| t.kind).collect()
}

#[test]
fn whitespace_separates_bare_tokens() {
    assert_eq!(texts("var $x 5"), vec!["var", "$x", "5"]);
    assert_eq!(texts("  a \t  b  "), vec!["a", "b"]);
}

#[test]
fn empty_line_has_no_tokens() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("   \t").is_empty());
}

#[test]
fn quoted_string_keeps_spaces() {
    assert_eq!(texts(r#"println "hello world" x"#), vec!["println", "\"hello world\"", "x"]);
    assert_eq!(
        kinds(r#"println "hello world" x"#),
        vec![TokenKind::Bare, TokenKind::Quoted, TokenKind::Bare]
    );
}

#[test]
fn escaped_quote_does_not_close() {
    assert_eq!(texts(r#"println "hello\"world""#), vec!["println", r#""hello\"world""#]);
}

#[test]
fn escaped_backslash_before_closing_quote() {
    assert_eq!(texts(r#""a\\" b"#), vec![r#""a\\""#, "b"]);
}

#[test]
fn quoted_and_bare_may_touch() {
    assert_eq!(texts(r#""abc"def"#), vec!["\"abc\"", "def"]);
    assert_eq!(kinds(r#""abc"def"#), vec![TokenKind::Quoted, TokenKind::Bare]);
}

#[test]
fn quote_inside_bare_token_is_plain() {
    assert_eq!(texts(r#"abc"d e""#), vec!["abc\"d", "e\""]);
    assert_eq!(kinds(r#"abc"d e""#), vec![TokenKind::Bare, TokenKind::Bare]);
}

#[test]
fn unterminated_quote_falls_back_to_bare() {
    assert_eq!(texts(r#""abc def"#), vec!["\"abc", "def"]);
    assert_eq!(kinds(r#""abc def"#), vec![TokenKind::Bare, TokenKind::Bare]);
    assert_eq!(texts(r#"x ""#), vec!["x", "\""]);
    assert_eq!(kinds(r#"x ""#), vec![TokenKind::Bare, TokenKind::Bare]);
}

#[test]
fn unclosed_string_closes_on_last_escaped_quote() {
    assert_eq!(texts(r#"println "a\"b c"#), vec!["println", r#""a\""#, "b", "c"]);
    assert_eq!(
        kinds(r#"println "a\"b c"#),
        vec![TokenKind::Bare, TokenKind::Quoted, TokenKind::Bare, TokenKind::Bare]
    );
    let tokens = tokenize(r#""a\""#);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Quoted);
    assert_eq!(tokens[0].body(), "a\\");
}

#[test]
fn unclosed_string_prefers_the_last_quote() {
    assert_eq!(
        texts(r#""x\" y\" z"#),
        vec![r#""x\" y\""#, "z"]
    );
    assert_eq!(texts(r#""q\"\"#), vec![r#""q\""#, "\\"]);
}

#[test]
fn empty_quoted_string() {
    let tokens = tokenize(r#"println """#);
    assert_eq!(tokens[1].kind, TokenKind::Quoted);
    assert_eq!(tokens[1].body(), "");
}

#[test]
fn body_strips_quotes_only_for_quoted() {
    let tokens = tokenize(r#""in side" bare"#);
    assert_eq!(tokens[0].body(), "in side");
    assert_eq!(tokens[1].body(), "bare");
}

#[test]
fn multibyte_text() {
    assert_eq!(texts("println héllo \"wörld ✓\""), vec!["println", "héllo", "\"wörld ✓\""]);
    assert_eq!(texts(r#""\é" x"#), vec![r#""\é""#, "x"]);
}
