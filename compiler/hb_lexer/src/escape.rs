//! Escape handling for quoted strings and inline comments.

/// Unescape the body of a quoted token (without its surrounding quotes).
///
/// Recognized escapes: `\"` and `\\`. Any other backslash sequence is
/// kept literally, e.g. `\n` stays as the two characters `\` `n`.
pub(crate) fn unescape_quoted(body: &str) -> String {
    let mut result = String::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some(esc @ ('"' | '\\')) => result.push(esc),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }

    result
}

/// Byte offset of the first unescaped `:` in a bare token.
///
/// A colon preceded by an odd run of backslashes is escaped and does not
/// start a comment.
pub(crate) fn comment_start(token: &str) -> Option<usize> {
    let bytes = token.as_bytes();
    let mut from = 0;

    while let Some(offset) = memchr::memchr(b':', &bytes[from..]) {
        let at = from + offset;
        let backslashes = bytes[..at].iter().rev().take_while(|&&b| b == b'\\').count();
        if backslashes % 2 == 0 {
            return Some(at);
        }
        from = at + 1;
    }

    None
}
