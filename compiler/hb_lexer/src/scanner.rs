//! Single-pass tokenizer for one statement line.
//!
//! A token is either a double-quoted string (honoring `\"` and `\\`,
//! ending at the first unescaped `"`) or a maximal run of non-whitespace
//! characters.
//!
//! When no unescaped `"` closes a string, it closes on the last `"` of the
//! line instead, treating that quote's backslash as plain text: the line
//! `println "a\"b c` yields `println`, `"a\"`, `b`, `c`. A `"` with no
//! later quote at all does not start a string; the token falls back to a
//! bare run.

/// How a token was delimited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// `"..."`, quotes included in the text.
    Quoted,
    /// A run of non-whitespace characters.
    Bare,
}

/// A raw token borrowed from its line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    /// The text between the quotes of a [`TokenKind::Quoted`] token.
    ///
    /// For bare tokens this is the whole text.
    pub fn body(&self) -> &'a str {
        match self.kind {
            TokenKind::Quoted => &self.text[1..self.text.len() - 1],
            TokenKind::Bare => self.text,
        }
    }
}

/// Split a line into tokens, left to right.
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while let Some(start) = next_token_start(line, pos) {
        let tail = &line[start..];
        let token = match quoted_len(tail) {
            Some(len) => Token {
                kind: TokenKind::Quoted,
                text: &tail[..len],
            },
            None => Token {
                kind: TokenKind::Bare,
                text: bare_run(tail),
            },
        };
        pos = start + token.text.len();
        tokens.push(token);
    }

    tokens
}

fn next_token_start(line: &str, from: usize) -> Option<usize> {
    line[from..]
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map(|(i, _)| from + i)
}

fn bare_run(tail: &str) -> &str {
    let len = tail.find(char::is_whitespace).unwrap_or(tail.len());
    &tail[..len]
}

/// Length of the quoted string at the start of `tail`, both quotes included.
///
/// `None` when `tail` does not start with `"` or has no other `"` to
/// close on.
fn quoted_len(tail: &str) -> Option<usize> {
    let bytes = tail.as_bytes();
    if bytes.first() != Some(&b'"') {
        return None;
    }

    let mut pos = 1;
    while let Some(offset) = memchr::memchr2(b'"', b'\\', &bytes[pos..]) {
        let at = pos + offset;
        if bytes[at] == b'"' {
            return Some(at + 1);
        }
        // Backslash: the next character is taken verbatim, whatever it is.
        let Some(escaped) = tail[at + 1..].chars().next() else {
            break;
        };
        pos = at + 1 + escaped.len_utf8();
    }

    // Every later quote was escaped. Close on the last one.
    memchr::memrchr(b'"', &bytes[1..]).map(|i| i + 2)
}

#[cfg(test)]
mod tests;
