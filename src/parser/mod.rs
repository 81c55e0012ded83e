mod error;
mod lexer;
mod ast;
mod parse;
#[cfg(test)]
mod str_test_strategies;

pub use error::ParserError;
pub(crate) use lexer::{Lexer, Token, TokenKind};
pub use ast::{RollStatement, DiceSegment, DiceRoll, Modifier, Operator};
pub use parse::{Parser, parse, parse_command};
