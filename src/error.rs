use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone)]
pub(crate) enum ErrorKind {
    LexError(String),
    /// `token` is the literal text of the token the parser stopped at.
    ParseError { message: String, token: String },
    RuntimeError(String),
}

pub(crate) type PResult<T> = Result<T, ErrorKind>;

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LexError(message) => write!(f, "Lex error: {message}"),
            Self::ParseError { message, token } => {
                write!(f, "Parse error: {message} (at token '{token}')")
            }
            Self::RuntimeError(message) => write!(f, "Runtime error: {message}"),
        }
    }
}

impl std::error::Error for ErrorKind {}
