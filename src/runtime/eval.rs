use std::io::{self, Write};

use super::env::Environment;
use crate::{
    error::{ErrorKind, PResult},
    syntax::{Expression, Operator, Parser, Program, Statement},
};

pub(crate) struct Interpreter<'src, W: Write> {
    global_env: Environment<'src>,
    out: W,
}

impl<'src> Interpreter<'src, io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl<'src, W: Write> Interpreter<'src, W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            global_env: Environment::new(),
            out,
        }
    }

    /// Parses all of `src` before executing anything, so lex and parse
    /// errors never produce output.
    pub fn eval(self, src: &'src str) -> PResult<()> {
        let program = Parser::new(src)?.parse_program()?;
        self.run(program)
    }

    /// Executes the statements in order. The first error stops the run;
    /// lines printed before it stay written.
    pub fn run(mut self, program: Program<'src>) -> PResult<()> {
        for stmt in &program.statements {
            self.exec_stmt(stmt)?;
        }
        Ok(())
    }

    fn exec_stmt(&mut self, stmt: &Statement<'src>) -> PResult<()> {
        match stmt {
            Statement::Assignment { id, value } => {
                let value = self.eval_expr(value)?;
                log::debug!("{id} = {value}");
                self.global_env.insert(*id, value);
            }
            Statement::Print(value) => {
                let value = self.eval_expr(value)?;
                writeln!(self.out, "{value}").map_err(|why| {
                    ErrorKind::RuntimeError(format!("failed to write output: {why}"))
                })?;
            }
        }
        Ok(())
    }

    fn eval_expr(&self, expr: &Expression) -> PResult<i64> {
        match expr {
            Expression::Number(v) => Ok(*v),
            Expression::Unary(expr) => Ok(self.eval_expr(expr)?.wrapping_neg()),
            Expression::Binary { lhs, op, rhs } => {
                let lhs = self.eval_expr(lhs)?;
                let rhs = self.eval_expr(rhs)?;

                match op {
                    Operator::Plus => Ok(lhs.wrapping_add(rhs)),
                    Operator::Minus => Ok(lhs.wrapping_sub(rhs)),
                    Operator::Mul => Ok(lhs.wrapping_mul(rhs)),
                    Operator::Div => {
                        if rhs == 0 {
                            return Err(ErrorKind::RuntimeError("division by zero".into()));
                        }
                        Ok(lhs.wrapping_div(rhs))
                    }
                }
            }
            Expression::VarRef(id) => {
                if let Some(value) = self.global_env.get(id) {
                    return Ok(value);
                }
                Err(ErrorKind::RuntimeError(format!(
                    "undefined variable '{id}'"
                )))
            }
        }
    }
}
