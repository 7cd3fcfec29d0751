mod cli;
mod error;
mod runtime;
mod syntax;

use std::{fmt::Write as _, path::Path, process, time::Instant};

use clap::Parser as _;

use cli::{Cli, Command};
use error::PResult;
use runtime::eval::Interpreter;
use syntax::{Lexer, Parser, TokenKind};

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(why) = execute(&cli.command) {
        eprintln!("{why}");
        process::exit(1);
    }
}

fn execute(command: &Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Run { file } => {
            let src = read_file(file)?;
            let now = Instant::now();
            Interpreter::new().eval(&src)?;
            log::info!("Duration: {:.2?}", now.elapsed());
        }
        Command::Tokens { file } => print!("{}", emit_tokens(&read_file(file)?)?),
        Command::Ast { file } => print!("{}", emit_ast(&read_file(file)?)?),
    }
    Ok(())
}

fn read_file(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))
}

/// One line per token, identifiers and numbers annotated with their value.
fn emit_tokens(src: &str) -> PResult<String> {
    let mut out = String::new();

    for token in Lexer::new(src) {
        let token = token?;
        let _ = match token.kind {
            TokenKind::Id => writeln!(out, "{}({})", token.kind, token.lexeme),
            TokenKind::Number(v) => writeln!(out, "{}({v})", token.kind),
            kind => writeln!(out, "{kind}"),
        };
    }
    let _ = writeln!(out, "{}", TokenKind::Eof);

    Ok(out)
}

fn emit_ast(src: &str) -> PResult<String> {
    let program = Parser::new(src)?.parse_program()?;
    Ok(program.to_string())
}

#[cfg(test)]
mod test {
    use super::{emit_ast, emit_tokens};
    use crate::error::ErrorKind;

    #[test]
    fn token_trace() {
        let trace = emit_tokens("x = 2 + 3;\nprint (x) * 4 / -1;").unwrap();
        let expected = "IDENT(x)\nEQUAL\nNUMBER(2)\nPLUS\nNUMBER(3)\nSEMI\n\
                        KW_PRINT\nLPAREN\nIDENT(x)\nRPAREN\nSTAR\nNUMBER(4)\nSLASH\nMINUS\nNUMBER(1)\nSEMI\n\
                        END\n";
        assert_eq!(trace, expected);
    }

    #[test]
    fn token_trace_lex_error() {
        assert_eq!(
            emit_tokens("x = @;"),
            Err(ErrorKind::LexError("unexpected character '@'".into()))
        );
    }

    #[test]
    fn ast_dump() {
        let text = emit_ast("y = -x * 4 + 1; print y;").unwrap();
        assert_eq!(text, "y = (((-x) * 4) + 1);\nprint y;\n");
    }

    #[test]
    fn error_line_format() {
        let err = emit_ast("x 5;").unwrap_err();
        assert_eq!(err.to_string(), "Parse error: expected '=' (at token '5')");
    }
}
