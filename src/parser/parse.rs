use crate::normalize::prepare;
use crate::parser::error::{ParserError, Result};
use crate::parser::{DiceRoll, DiceSegment, Lexer, Modifier, Operator, RollStatement, Token, TokenKind};


/// A recursive-descent parser for dice-notation commands.
///
/// The parser takes a command string, tokenizes it and consumes the token
/// stream through a two-token window (`current` plus `peek`), building a
/// [`RollStatement`] for the grammar `ROLL segment { op segment }`. The
/// window is what lets it tell a dice-run continuation ("+1d4") from a flat
/// modifier ("+3") without backtracking.
#[derive(Debug)]
pub struct Parser {
    lexer: Lexer,
    current: Token,
    peek: Token
}

impl Parser {
    /// Creates a new `Parser` for the given command string.
    ///
    /// Construction never fails; an empty or meaningless input surfaces as
    /// an error from [`Parser::parse`] instead.
    ///
    /// # Examples
    /// ```
    /// use dicelang::Parser;
    ///
    /// let mut parser = Parser::new("roll 2d6+3");
    /// assert!(parser.parse().is_ok());
    /// ```
    pub fn new(input: &str) -> Self {
        let mut lexer = Lexer::new(input);
        let current = Self::next_meaningful(&mut lexer);
        let peek = Self::next_meaningful(&mut lexer);

        Self { lexer, current, peek }
    }

    /// Parses the entire input into a [`RollStatement`].
    ///
    /// # Errors
    /// Returns a [`ParserError`] at the first point the input diverges from
    /// the grammar; no partial statement is ever produced. The error is
    /// wrapped with positional information using [`ParserError::at_pos()`].
    ///
    /// Get a reference to the wrapped error with [`ParserError::err()`].
    /// Get the position at which the error was found with [`ParserError::pos()`].
    ///
    /// # Examples
    /// ```
    /// use dicelang::{Parser, ParserError};
    ///
    /// let mut parser = Parser::new("roll 2d6+3(fire)");
    /// let statement = parser.parse().unwrap();
    /// assert_eq!(statement.to_string(), "roll 2d6+3(fire)");
    ///
    /// let mut invalid = Parser::new("2d6+3");
    /// let err = invalid.parse().unwrap_err();
    /// assert!(matches!(err.err(), ParserError::UnexpectedToken { .. }));
    /// ```
    pub fn parse(&mut self) -> Result<RollStatement> {
        self.parse_statement()
            .map_err(|err| err.at_pos(self.lexer.position))
    }

    // Whitespace tokens are skipped here and only here, so an ILLEGAL token
    // always reaches the grammar and becomes an error.
    fn next_meaningful(lexer: &mut Lexer) -> Token {
        loop {
            let token = lexer.next_token();
            if token.kind != TokenKind::Whitespace {
                return token;
            }
        }
    }

    fn next_token(&mut self) {
        self.current = std::mem::replace(&mut self.peek, Self::next_meaningful(&mut self.lexer));
    }

    fn parse_statement(&mut self) -> Result<RollStatement> {
        if self.current.kind != TokenKind::Roll {
            return Err(unexpected(&self.current, "ROLL"));
        }
        self.next_token();

        let mut segments = Vec::new();
        let mut segment = DiceSegment {
            rolls: vec![self.parse_dice_roll()?],
            modifier: None,
            damage_type: None,
        };

        loop {
            match self.current.kind {
                TokenKind::End => break,

                TokenKind::Operator => {
                    let operator = self.operator();
                    if !matches!(self.peek.kind, TokenKind::Number | TokenKind::D) {
                        return Err(unexpected(&self.peek, "NUMBER or D"));
                    }
                    self.next_token();

                    // With the operator consumed, the window shows whether a
                    // D participates: another dice roll, or a bare number
                    // acting as the segment's flat modifier.
                    let starts_roll =
                        self.current.kind == TokenKind::D || self.peek.kind == TokenKind::D;
                    let open = segment.modifier.is_none() && segment.damage_type.is_none();

                    if starts_roll || !open {
                        let roll = self.parse_dice_roll()?;
                        if operator == Operator::Add && open {
                            segment.rolls.push(roll);
                        } else {
                            // The operator was a segment separator; it is
                            // not stored.
                            segments.push(segment);
                            segment = DiceSegment {
                                rolls: vec![roll],
                                modifier: None,
                                damage_type: None,
                            };
                        }
                    } else {
                        let value = self.number()?;
                        self.next_token();
                        segment.modifier = Some(Modifier { operator, value });
                    }
                }

                TokenKind::OpenParen => {
                    if segment.damage_type.is_some() {
                        return Err(unexpected(&self.current, "OPERATOR or END"));
                    }
                    self.next_token();

                    if self.current.kind != TokenKind::Ident {
                        return Err(unexpected(&self.current, "IDENT"));
                    }
                    let damage_type = self.current.literal.clone();
                    self.next_token();

                    if self.current.kind != TokenKind::CloseParen {
                        return Err(unexpected(&self.current, "CLOSE_PAREN"));
                    }
                    self.next_token();

                    segment.damage_type = Some(damage_type);
                }

                _ => return Err(unexpected(&self.current, "OPERATOR, OPEN_PAREN or END")),
            }
        }

        segments.push(segment);
        Ok(RollStatement { segments })
    }

    fn parse_dice_roll(&mut self) -> Result<DiceRoll> {
        let count = match self.current.kind {
            TokenKind::D => 1,
            TokenKind::Number => {
                let count = self.number()?;
                self.next_token();

                if self.current.kind != TokenKind::D {
                    return Err(unexpected(&self.current, "D"));
                }
                count
            }
            _ => return Err(unexpected(&self.current, "NUMBER or D")),
        };
        self.next_token();

        if self.current.kind != TokenKind::Number {
            return Err(unexpected(&self.current, "NUMBER"));
        }
        let sides = self.number()?;
        self.next_token();

        Ok(DiceRoll::new(count, sides)?)
    }

    fn number(&self) -> Result<u32> {
        Ok(self.current.literal.parse()?)
    }

    fn operator(&self) -> Operator {
        match Operator::from_symbol(&self.current.literal) {
            Some(operator) => operator,
            None => unreachable!("{:?}", self.current.literal),
        }
    }
}

fn unexpected(token: &Token, expected: &'static str) -> ParserError {
    if token.kind == TokenKind::Illegal {
        return ParserError::IllegalCharacter(token.literal.clone());
    }

    ParserError::UnexpectedToken {
        found: token.literal.clone(),
        expected,
    }
}


/// Parses a dice-notation command directly into a [`RollStatement`].
/// This is a convenience function that creates a [`Parser`] and calls its
/// `parse` method.
///
/// The input is taken as-is: it must already contain the `roll` keyword, and
/// bracket repair is the caller's business (see [`crate::normalize()`] and
/// [`parse_command`]).
///
/// # Errors
/// Returns a [`ParserError`] if any syntax error is encountered, wrapped
/// with positional information using [`ParserError::at_pos()`].
///
/// Get a reference to the wrapped error with [`ParserError::err()`].
/// Get the position at which the error was found with [`ParserError::pos()`].
///
/// # Examples
/// ```
/// use dicelang::parse;
///
/// let statement = parse("roll 1d8+1d4-2(fire)").unwrap();
/// assert_eq!(statement.segments.len(), 1);
/// assert_eq!(statement.segments[0].rolls.len(), 2);
/// assert_eq!(statement.segments[0].damage_type.as_deref(), Some("fire"));
/// ```
pub fn parse(input: &str) -> Result<RollStatement> {
    Parser::new(input).parse()
}


/// Runs the full intake pipeline on raw user text and parses the result:
/// brackets are balanced and the `roll` keyword is prefixed when missing
/// (see [`crate::prepare()`]) before the text reaches the parser.
///
/// # Errors
/// Returns a [`ParserError`] when the repaired text still fails to parse.
///
/// # Examples
/// ```
/// use dicelang::parse_command;
///
/// let statement = parse_command("2d8+4(fire").unwrap();
/// assert_eq!(statement.to_string(), "roll 2d8+4(fire)");
/// ```
pub fn parse_command(input: &str) -> Result<RollStatement> {
    parse(&prepare(input))
}
