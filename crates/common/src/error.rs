use std::path::PathBuf;

use thiserror::Error;

/// 致命错误：记录日志后终止进程
#[derive(Error, Debug)]
pub enum ListingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot open input '{}': {source}", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot write '{}': {source}", path.display())]
    Artifact {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to marshal to JSON: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// 单行解析错误：该行被跳过，处理继续
#[derive(Error, Debug)]
pub enum LineError {
    #[error("expected at least 4 fields, found {found}")]
    MissingFields { found: usize },

    #[error("invalid modification timestamp '{value}': {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("invalid file size '{value}': {source}")]
    InvalidSize {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("line is not valid UTF-8: {source}")]
    InvalidUtf8 {
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("invalid timestamp '{value}' in filename: {source}")]
    InvalidContentTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
