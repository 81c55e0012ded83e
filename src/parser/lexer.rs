#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    Illegal,
    Whitespace,
    Roll,
    OpenParen,
    CloseParen,
    Operator,
    D,
    Number,
    Ident,
    End,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }
}


#[derive(Debug)]
pub(crate) struct Lexer {
    input: Vec<char>,
    pub position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    pub fn next_token(&mut self) -> Token {
        if self.position >= self.input.len() {
            return Token::new(TokenKind::End, "");
        }

        let ch = self.input[self.position];

        match ch {
            ' ' | '\t' | '\n' => Token::new(TokenKind::Whitespace, self.read_run(is_space)),
            '(' => {
                self.position += 1;
                Token::new(TokenKind::OpenParen, ch)
            }
            ')' => {
                self.position += 1;
                Token::new(TokenKind::CloseParen, ch)
            }
            '+' | '-' | '*' | '/' => {
                self.position += 1;
                Token::new(TokenKind::Operator, ch)
            }
            '0'..='9' => Token::new(TokenKind::Number, self.read_run(is_digit)),
            'a'..='z' | 'A'..='Z' => self.read_word(),
            _ => {
                self.position += 1;
                Token::new(TokenKind::Illegal, ch)
            }
        }
    }

    // A lone d/D separates dice count from sides and outranks identifier
    // scanning, even when flush against digits ("2d6"). A d starting a
    // longer letter run is an ordinary identifier ("dark").
    fn read_word(&mut self) -> Token {
        let ch = self.input[self.position];
        let next_is_letter = self
            .input
            .get(self.position + 1)
            .is_some_and(|&next| is_letter(next));

        if matches!(ch, 'd' | 'D') && !next_is_letter {
            self.position += 1;
            return Token::new(TokenKind::D, ch);
        }

        let literal = self.read_run(is_letter);
        if literal.eq_ignore_ascii_case("roll") {
            Token::new(TokenKind::Roll, literal)
        } else {
            Token::new(TokenKind::Ident, literal)
        }
    }

    fn read_run(&mut self, accept: fn(char) -> bool) -> String {
        let start = self.position;
        while self.position < self.input.len() && accept(self.input[self.position]) {
            self.position += 1;
        }

        self.input[start..self.position].iter().collect()
    }
}

fn is_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n')
}

fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}
