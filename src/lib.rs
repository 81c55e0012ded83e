//! A parsing front end for tabletop dice notation.
//!
//! Raw chat or voice text goes in ("roll 2d6+1d4-2(fire)"), a structured
//! [`RollStatement`] or a [`ParserError`] comes out. Rolling the dice is the
//! caller's business; this crate only decides what the text means.

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]


#[cfg(test)]
mod ast_test_strategies;

mod error;
mod normalize;
mod parser;

pub use error::Error;
pub use normalize::{normalize, ensure_roll_keyword, prepare};
pub use parser::{
    ParserError, Parser,
    RollStatement, DiceSegment, DiceRoll,
    Modifier, Operator,
    parse, parse_command
};
