//! Errors surfaced by the `exprua` commands.

use std::io;

use exprua_lexer::ConfigError;

/// Everything that can make a command fail. The lexer itself cannot.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Source file (or stdin) could not be read.
    #[error("{}", describe_input_error(.path, .source))]
    Input {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("cannot serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot write output: {0}")]
    Output(#[from] io::Error),
}

fn describe_input_error(path: &str, err: &io::Error) -> String {
    match err.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {err}"),
    }
}
