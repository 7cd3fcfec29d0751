use std::fmt;

use crate::syntax::expr::Expression;

#[derive(Debug, PartialEq, Eq, Clone)]
pub(crate) enum Statement<'src> {
    /// Declares `id` on first use, overwrites it afterwards.
    Assignment {
        id: &'src str,
        value: Box<Expression<'src>>,
    },
    Print(Box<Expression<'src>>),
}

impl fmt::Display for Statement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assignment { id, value } => write!(f, "{id} = {value};"),
            Self::Print(value) => write!(f, "print {value};"),
        }
    }
}

/// The parsed source, statements in source order.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub(crate) struct Program<'src> {
    pub statements: Vec<Statement<'src>>,
}

impl fmt::Display for Program<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.statements
            .iter()
            .try_for_each(|stmt| writeln!(f, "{stmt}"))
    }
}
