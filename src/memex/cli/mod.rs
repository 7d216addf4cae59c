//! # CLI Layer
//!
//! One UI client for memex. This is the only place that reads the terminal,
//! prints, or decides exit codes. Handlers in `main.rs` call the API and hand
//! the resulting `CmdResult` to [`print`].

pub mod print;
pub mod prompt;

use memex::api::MemexPaths;
use std::path::{Path, PathBuf};

/// File arguments are taken relative to the working directory when they exist
/// there, and relative to the repository root otherwise.
pub fn resolve_file(cwd: &Path, paths: &MemexPaths, raw: &str) -> PathBuf {
    let local = cwd.join(raw);
    if local.exists() {
        local
    } else {
        paths.resolve(raw)
    }
}

pub fn resolve_files(cwd: &Path, paths: &MemexPaths, raw: &[String]) -> Vec<PathBuf> {
    raw.iter().map(|r| resolve_file(cwd, paths, r)).collect()
}
