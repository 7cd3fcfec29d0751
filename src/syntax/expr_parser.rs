use crate::error::PResult;

use super::{
    token::{Assoc, Operator, Precedence, TokenKind},
    ExprParser, Expression, Parser,
};

impl<'src> ExprParser<'src> for Parser<'src> {
    fn parse_expr(&mut self) -> PResult<Box<Expression<'src>>> {
        self.parse_expr_with_precedence(1)
    }

    fn parse_expr_with_precedence(
        &mut self,
        min_prec: Precedence,
    ) -> PResult<Box<Expression<'src>>> {
        let mut lhs = self.parse_unary_expr()?;

        while let TokenKind::Op(op) = self.cur.kind {
            let (prec, assoc) = op.get();

            if prec < min_prec {
                break;
            }
            self.bump()?;

            let new_min_prec = if assoc == Assoc::Left { prec + 1 } else { prec };
            let rhs = self.parse_expr_with_precedence(new_min_prec)?;

            lhs = Box::new(Expression::Binary { lhs, op, rhs });
        }

        Ok(lhs)
    }

    fn parse_unary_expr(&mut self) -> PResult<Box<Expression<'src>>> {
        if self.cur.kind == TokenKind::Op(Operator::Minus) {
            self.bump()?;
            let expr = self.parse_unary_expr()?;
            return Ok(Box::new(Expression::Unary(expr)));
        }
        self.parse_factor()
    }

    fn parse_factor(&mut self) -> PResult<Box<Expression<'src>>> {
        let expr = match self.cur.kind {
            TokenKind::Number(v) => Expression::Number(v),
            TokenKind::Id => Expression::VarRef(self.cur.lexeme),
            TokenKind::LParen => {
                self.bump()?;
                let expr = self.parse_expr()?;
                self.expect(TokenKind::RParen, "')'")?;
                return Ok(expr);
            }
            _ => return Err(self.error("expected NUMBER, IDENT, or '('")),
        };
        self.bump()?;
        Ok(Box::new(expr))
    }
}
