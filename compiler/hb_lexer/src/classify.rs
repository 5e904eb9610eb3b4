//! Token to expression conversion.

use hb_ir::Expression;

use crate::escape::{comment_start, unescape_quoted};
use crate::scanner::{Token, TokenKind};
use crate::ParseError;

/// Classify a bare token by its leading sigil.
///
/// - `$name` - variable reference to `name`
/// - `\text` - literal `text` (escapes a leading `$` or `\`)
/// - anything else - the literal token text
///
/// Returns `None` for an empty token.
pub(crate) fn classify(token: &str) -> Option<Expression> {
    let expr = if let Some(name) = token.strip_prefix('$') {
        Expression::variable(token, name)
    } else if let Some(literal) = token.strip_prefix('\\') {
        Expression::constant(token, literal)
    } else if token.is_empty() {
        return None;
    } else {
        Expression::constant(token, token)
    };
    Some(expr)
}

/// Convert a line's tokens into expressions.
///
/// An unescaped `:` in a bare token starts an inline comment: the token
/// is cut there and nothing after it on the line is kept. If the cut
/// leaves the token empty, it is dropped too.
pub(crate) fn parse_expressions(
    tokens: &[Token<'_>],
    line: &str,
) -> Result<Vec<Expression>, ParseError> {
    let mut expressions = Vec::with_capacity(tokens.len());

    for token in tokens {
        match token.kind {
            TokenKind::Quoted => {
                expressions.push(Expression::constant(token.text, unescape_quoted(token.body())));
            }
            TokenKind::Bare => {
                let (text, comment) = match comment_start(token.text) {
                    Some(cut) => (&token.text[..cut], true),
                    None => (token.text, false),
                };
                if comment && text.is_empty() {
                    break;
                }
                let expr = classify(text).ok_or_else(|| ParseError::UnclassifiableToken {
                    token: text.to_string(),
                    line: line.to_string(),
                })?;
                expressions.push(expr);
                if comment {
                    break;
                }
            }
        }
    }

    Ok(expressions)
}
