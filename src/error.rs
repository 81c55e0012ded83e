use crate::parser::ParserError;


/// Top-level error for everything this crate can reject.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A dice count or side count of zero.
    #[error("Zero value not allowed")]
    ZeroValue,

    /// The command text failed to parse.
    #[error("Parser error - {0}")]
    Parser(#[from] ParserError)
}
