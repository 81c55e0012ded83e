use crate::Error as SemanticError;


/// Everything that can go wrong while turning command text into a
/// [`RollStatement`](crate::RollStatement).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParserError {
    /// Wraps the failure with the scanner position it was detected at.
    #[error("At position {0} - {1}")]
    AtPosition(usize, Box<ParserError>),

    /// The token stream diverged from the grammar.
    #[error("found {found:?}, expected {expected}")]
    UnexpectedToken {
        /// Literal text of the offending token, empty at end of input.
        found: String,
        /// The token class or rule the grammar required.
        expected: &'static str,
    },

    /// The scanner hit a character outside the language.
    #[error("Illegal character: {0:?}")]
    IllegalCharacter(String),

    /// A number literal does not fit the dice field width.
    #[error("Invalid number: {0}")]
    Number(#[from] std::num::ParseIntError),

    /// Grammatically valid input rejected by an invariant check.
    #[error("Semantic error - {0}")]
    Semantic(Box<SemanticError>),
}

impl ParserError {
    /// The underlying error, reaching through [`ParserError::AtPosition`].
    pub fn err(&self) -> &Self {
        match self {
            ParserError::AtPosition(_, err) => err.as_ref(),
            other => other
        }
    }

    /// The recorded scanner position, if any.
    pub fn pos(&self) -> Option<&usize> {
        match self {
            ParserError::AtPosition(position, _) => Some(position),
            _ => None
        }
    }

    /// Attaches a scanner position unless one is already recorded.
    pub fn at_pos(self, position: usize) -> Self {
        match self {
            ParserError::AtPosition(_, _) => self,
            other => ParserError::AtPosition(position, Box::new(other))
        }
    }
}

impl From<SemanticError> for ParserError {
    fn from(err: SemanticError) -> Self {
        ParserError::Semantic(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, ParserError>;
