use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MemexError {
    #[error("Folder '{folder}' not found under docs/. Existing: {available}")]
    UnknownFolder { folder: String, available: String },

    #[error("File already exists: {}. Use --force to overwrite.", .0.display())]
    FileExists(PathBuf),

    #[error("no YAML front matter found")]
    NoFrontMatter,

    #[error("malformed YAML front matter: {0}")]
    MalformedFrontMatter(String),

    #[error("Expected JSON array of strings, e.g. '[\"🤖 tech\",\"🐧 linux\"]', got: {0}")]
    InvalidExplicitList(String),

    #[error("Failed to parse {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error("Unknown timezone: {0}")]
    InvalidTimezone(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, MemexError>;
