//! Splitting source text into statement lines.
//!
//! Both `\n` and `;` terminate a statement. Each piece is trimmed and
//! blank pieces are dropped. A `;` inside a quoted string still splits:
//! terminators are found before any tokenizing happens.

/// Iterator over the trimmed, non-blank statement lines of a source blob.
pub struct SourceLines<'a> {
    rest: &'a str,
    done: bool,
}

impl<'a> SourceLines<'a> {
    /// Iterate the statement lines of `source`.
    pub fn new(source: &'a str) -> Self {
        SourceLines {
            rest: source,
            done: false,
        }
    }
}

impl<'a> Iterator for SourceLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while !self.done {
            let piece = match memchr::memchr2(b'\n', b';', self.rest.as_bytes()) {
                Some(at) => {
                    let piece = &self.rest[..at];
                    self.rest = &self.rest[at + 1..];
                    piece
                }
                None => {
                    self.done = true;
                    self.rest
                }
            };

            let trimmed = piece.trim();
            if !trimmed.is_empty() {
                return Some(trimmed);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(source: &str) -> Vec<&str> {
        SourceLines::new(source).collect()
    }

    #[test]
    fn splits_on_newline_and_semicolon() {
        assert_eq!(lines("a\nb;c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn drops_blank_pieces() {
        assert_eq!(lines("\n\n  ;; \t\na\n\n"), vec!["a"]);
        assert!(lines("").is_empty());
        assert!(lines("   ").is_empty());
    }

    #[test]
    fn trims_each_piece() {
        assert_eq!(lines("  println hi  \r\n\tnoop "), vec!["println hi", "noop"]);
    }

    #[test]
    fn semicolon_inside_quotes_still_splits() {
        assert_eq!(lines("println \"a;b\""), vec!["println \"a", "b\""]);
    }
}
