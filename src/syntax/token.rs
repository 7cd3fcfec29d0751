use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operator {
    Plus,
    Minus,
    Mul,
    Div,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Assoc {
    Left,
}

pub(crate) type Precedence = u8;

impl Operator {
    pub fn precedence(self) -> Precedence {
        match self {
            Self::Plus | Self::Minus => 10,
            Self::Mul | Self::Div => 20,
        }
    }

    pub fn assoc(self) -> Assoc {
        match self {
            Self::Plus | Self::Minus | Self::Mul | Self::Div => Assoc::Left,
        }
    }

    pub fn get(self) -> (Precedence, Assoc) {
        (self.precedence(), self.assoc())
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Keyword {
    Print,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    Number(i64),
    Op(Operator),
    Kw(Keyword),
    Id,

    LParen,
    RParen,

    Eq,
    Semicolon,

    Eof,
}

/// Trace name of the token class, as shown by `quill tokens`.
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Number(_) => "NUMBER",
            Self::Op(Operator::Plus) => "PLUS",
            Self::Op(Operator::Minus) => "MINUS",
            Self::Op(Operator::Mul) => "STAR",
            Self::Op(Operator::Div) => "SLASH",
            Self::Kw(Keyword::Print) => "KW_PRINT",
            Self::Id => "IDENT",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::Eq => "EQUAL",
            Self::Semicolon => "SEMI",
            Self::Eof => "END",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token<'src> {
    pub kind: TokenKind,
    /// Exact source text; empty for `Eof`.
    pub lexeme: &'src str,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, lexeme: &'src str) -> Self {
        Self { kind, lexeme }
    }

    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "")
    }
}
