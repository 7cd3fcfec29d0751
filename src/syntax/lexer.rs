use std::{iter::Peekable, str::CharIndices};

use crate::error::{ErrorKind, PResult};

use super::token::{Keyword, Operator, Token, TokenKind};

pub(crate) struct Lexer<'src> {
    src: &'src str,
    chars: Peekable<CharIndices<'src>>,
}

/// Yields every token up to, but not including, `Eof`.
impl<'src> Iterator for Lexer<'src> {
    type Item = PResult<Token<'src>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(Token {
                kind: TokenKind::Eof,
                ..
            }) => None,
            other => Some(other),
        }
    }
}

impl<'src> Lexer<'src> {
    pub fn new(src: &'src str) -> Self {
        Self {
            src,
            chars: src.char_indices().peekable(),
        }
    }

    /// Produces the next token. Once the source is exhausted every call
    /// returns `Eof`.
    pub fn next_token(&mut self) -> PResult<Token<'src>> {
        self.skip_whitespace();

        let token = match self.chars.next() {
            None => Token::eof(),
            Some((off, c)) => match c {
                '+' => self.single(off, TokenKind::Op(Operator::Plus)),
                '-' => self.single(off, TokenKind::Op(Operator::Minus)),
                '*' => self.single(off, TokenKind::Op(Operator::Mul)),
                '/' => self.single(off, TokenKind::Op(Operator::Div)),
                '=' => self.single(off, TokenKind::Eq),
                '(' => self.single(off, TokenKind::LParen),
                ')' => self.single(off, TokenKind::RParen),
                ';' => self.single(off, TokenKind::Semicolon),
                c if c.is_ascii_digit() => self.read_number(off)?,
                c if Self::is_id_start(c) => self.read_id(off),
                c => {
                    return Err(ErrorKind::LexError(format!(
                        "unexpected character '{c}'"
                    )))
                }
            },
        };

        log::trace!("{} {:?}", token.kind, token.lexeme);
        Ok(token)
    }

    #[inline]
    fn bump(&mut self) {
        let _ = self.chars.next();
    }

    fn skip_whitespace(&mut self) {
        while let Some(&(_, c)) = self.chars.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.bump();
        }
    }

    fn single(&self, off: usize, kind: TokenKind) -> Token<'src> {
        Token::new(kind, &self.src[off..off + 1])
    }

    fn slice_until<P>(&mut self, from_off: usize, predicate: P) -> &'src str
    where
        P: Fn(char) -> bool,
    {
        while let Some(&(off, c)) = self.chars.peek() {
            if predicate(c) {
                return &self.src[from_off..off];
            }
            self.bump();
        }
        &self.src[from_off..self.src.len()]
    }

    fn read_number(&mut self, from_off: usize) -> PResult<Token<'src>> {
        let s = self.slice_until(from_off, |c| !c.is_ascii_digit());
        match s.parse::<i64>() {
            Ok(v) => Ok(Token::new(TokenKind::Number(v), s)),
            Err(_) => Err(ErrorKind::LexError(format!(
                "integer literal '{s}' out of range"
            ))),
        }
    }

    fn read_id(&mut self, from_off: usize) -> Token<'src> {
        let s = self.slice_until(from_off, |c| !Self::is_id_part(c));
        match s {
            "print" => Token::new(TokenKind::Kw(Keyword::Print), s),
            _ => Token::new(TokenKind::Id, s),
        }
    }

    fn is_id_start(c: char) -> bool {
        c.is_ascii_alphabetic() || c == '_'
    }

    fn is_id_part(c: char) -> bool {
        Self::is_id_start(c) || c.is_ascii_digit()
    }
}

#[cfg(test)]
mod test {
    use super::{
        super::token::{Keyword, Operator, TokenKind},
        Lexer,
    };
    use crate::error::ErrorKind;

    fn kinds(s: &str) -> Vec<TokenKind> {
        Lexer::new(s)
            .map(|t| t.unwrap().kind)
            .collect()
    }

    #[test]
    fn read_number() {
        let tokens = kinds("48 7 1024 \n9\t8");
        let expected = &[
            TokenKind::Number(48),
            TokenKind::Number(7),
            TokenKind::Number(1024),
            TokenKind::Number(9),
            TokenKind::Number(8),
        ];

        assert_eq!(tokens, expected);
    }

    #[test]
    fn read_statement() {
        let mut lexer = Lexer::new("x_1 = (y + 20) * 3 / -z;");
        let tokens: Vec<_> = lexer.by_ref().map(|t| t.unwrap()).collect();
        let expected = &[
            (TokenKind::Id, "x_1"),
            (TokenKind::Eq, "="),
            (TokenKind::LParen, "("),
            (TokenKind::Id, "y"),
            (TokenKind::Op(Operator::Plus), "+"),
            (TokenKind::Number(20), "20"),
            (TokenKind::RParen, ")"),
            (TokenKind::Op(Operator::Mul), "*"),
            (TokenKind::Number(3), "3"),
            (TokenKind::Op(Operator::Div), "/"),
            (TokenKind::Op(Operator::Minus), "-"),
            (TokenKind::Id, "z"),
            (TokenKind::Semicolon, ";"),
        ];

        let actual: Vec<_> = tokens.iter().map(|t| (t.kind, t.lexeme)).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn print_is_keyword_only_when_exact() {
        let tokens = kinds("print printer _print");
        assert_eq!(
            tokens,
            &[TokenKind::Kw(Keyword::Print), TokenKind::Id, TokenKind::Id]
        );
    }

    #[test]
    fn eof_is_repeated() {
        let mut lexer = Lexer::new("  1 ");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Number(1));
        for _ in 0..3 {
            let token = lexer.next_token().unwrap();
            assert_eq!(token.kind, TokenKind::Eof);
            assert_eq!(token.lexeme, "");
        }
    }

    #[test]
    fn unexpected_character() {
        let mut lexer = Lexer::new("48$7");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Number(48));
        assert_eq!(
            lexer.next_token(),
            Err(ErrorKind::LexError("unexpected character '$'".into()))
        );
    }

    #[test]
    fn number_out_of_range() {
        let mut lexer = Lexer::new("99999999999999999999");
        assert!(matches!(lexer.next_token(), Err(ErrorKind::LexError(_))));
    }

    #[test]
    fn max_number() {
        assert_eq!(
            kinds("9223372036854775807"),
            &[TokenKind::Number(i64::MAX)]
        );
    }
}
