//! Parse errors.

/// A token that could not be turned into an expression.
///
/// The scanner never yields empty tokens, so in practice this only
/// surfaces if that invariant is broken.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unable to parse token '{token}' in '{line}'")]
    UnclassifiableToken { token: String, line: String },
}
