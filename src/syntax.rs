mod expr;
mod expr_parser;
mod lexer;
mod parser;
mod stmt;
mod token;

pub(crate) use expr::Expression;
pub(crate) use lexer::Lexer;
pub(crate) use parser::Parser;
pub(crate) use stmt::{Program, Statement};
pub(crate) use token::{Operator, TokenKind};

use crate::error::PResult;
use token::Precedence;

pub(crate) trait ExprParser<'src> {
    fn parse_expr(&mut self) -> PResult<Box<Expression<'src>>>;
    fn parse_expr_with_precedence(
        &mut self,
        min_prec: Precedence,
    ) -> PResult<Box<Expression<'src>>>;
    fn parse_unary_expr(&mut self) -> PResult<Box<Expression<'src>>>;
    fn parse_factor(&mut self) -> PResult<Box<Expression<'src>>>;
}
