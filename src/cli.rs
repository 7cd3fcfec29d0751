#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Command {
    /// Execute a program, printing its output
    Run { file: std::path::PathBuf },

    /// Print the token stream of a file, one token per line
    Tokens { file: std::path::PathBuf },

    /// Parse a file and pretty-print its syntax tree
    Ast { file: std::path::PathBuf },
}
