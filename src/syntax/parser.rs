use crate::{
    error::{ErrorKind, PResult},
    syntax::{
        lexer::Lexer,
        stmt::{Program, Statement},
        token::{Keyword, Token, TokenKind},
        ExprParser,
    },
};

pub(crate) struct Parser<'src> {
    lexer: Lexer<'src>,
    pub(super) cur: Token<'src>,
}

impl<'src> Parser<'src> {
    pub fn new(src: &'src str) -> PResult<Self> {
        let mut lexer = Lexer::new(src);
        let cur = lexer.next_token()?;
        Ok(Self { lexer, cur })
    }

    /// Parses statements until end of input. The first error aborts the
    /// whole parse.
    pub fn parse_program(&mut self) -> PResult<Program<'src>> {
        let mut statements = vec![];

        while self.cur.kind != TokenKind::Eof {
            let stmt = self.parse_stmt()?;
            log::debug!("parsed `{stmt}`");
            statements.push(stmt);
        }

        Ok(Program { statements })
    }

    fn parse_stmt(&mut self) -> PResult<Statement<'src>> {
        match self.cur.kind {
            TokenKind::Kw(Keyword::Print) => {
                self.bump()?;
                let expr = self.parse_expr()?;
                self.expect(TokenKind::Semicolon, "';'")?;

                Ok(Statement::Print(expr))
            }
            TokenKind::Id => {
                let id = self.cur.lexeme;
                self.bump()?;

                self.expect(TokenKind::Eq, "'='")?;
                let expr = self.parse_expr()?;
                self.expect(TokenKind::Semicolon, "';'")?;

                Ok(Statement::Assignment { id, value: expr })
            }
            _ => Err(self.error("expected a statement (assignment or print)")),
        }
    }

    #[inline(always)]
    pub(super) fn bump(&mut self) -> PResult<()> {
        self.cur = self.lexer.next_token()?;
        Ok(())
    }

    pub(super) fn expect(&mut self, expected: TokenKind, what: &str) -> PResult<()> {
        if self.cur.kind != expected {
            return Err(self.error(&format!("expected {what}")));
        }
        self.bump()
    }

    pub(super) fn error(&self, message: &str) -> ErrorKind {
        ErrorKind::ParseError {
            message: message.to_string(),
            token: self.cur.lexeme.to_string(),
        }
    }
}
