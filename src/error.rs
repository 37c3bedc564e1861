use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid hotel description in '{file}': {message}")]
#[diagnostic(
    code(hotel_cycles::input_parse_error),
    help("The input must be: room count, corridor count, then one `from to` pair per corridor")
)]
pub struct InputParseError {
    pub file: String,
    pub message: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("here")]
    pub span: Option<SourceSpan>,
}

#[derive(Error, Debug, Diagnostic)]
pub enum HotelError {
    #[error("Corridor {from} -> {to} references a room outside 1..={room_count}")]
    #[diagnostic(
        code(hotel_cycles::invalid_corridor),
        severity(Warning),
        help("The corridor was dropped; room identifiers start at 1")
    )]
    InvalidCorridor {
        from: i64,
        to: i64,
        room_count: usize,
    },

    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(hotel_cycles::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}'")]
    #[diagnostic(
        code(hotel_cycles::io_error),
        help("Check that the directory exists and you have write permissions")
    )]
    FileWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    InputParseError(Box<InputParseError>),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(hotel_cycles::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(hotel_cycles::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(hotel_cycles::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(hotel_cycles::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}
