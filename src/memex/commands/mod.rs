use crate::config::CONFIG_FILENAME;
use crate::model::FrontMatter;
use std::path::{Path, PathBuf};

pub mod clean;
pub mod helpers;
pub mod init;
pub mod new;
pub mod taxa;
pub mod touch;

const DOCS_DIR: &str = "docs";
const TAXONOMY_PATH: &str = "docs/_data/taxonomy.yml";

/// Locations inside the documentation repository.
#[derive(Debug, Clone)]
pub struct MemexPaths {
    pub root: PathBuf,
}

impl MemexPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn docs_dir(&self) -> PathBuf {
        self.root.join(DOCS_DIR)
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILENAME)
    }

    pub fn taxonomy_file(&self) -> PathBuf {
        self.resolve(TAXONOMY_PATH)
    }

    /// Map a repo-relative path string to an absolute location.
    ///
    /// Absolute paths are returned as-is. Relative ones may use `/` or `\` and
    /// are joined onto the repo root; empty segments are dropped.
    pub fn resolve(&self, pathish: &str) -> PathBuf {
        let trimmed = pathish.trim();
        let candidate = Path::new(trimmed);
        if candidate.is_absolute() {
            return candidate.to_path_buf();
        }
        trimmed
            .split(['/', '\\'])
            .filter(|part| !part.is_empty())
            .fold(self.root.clone(), |acc, part| acc.join(part))
    }

    /// Path relative to the repo root for display, or the path itself if outside it.
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Files written by the command
    pub affected_paths: Vec<PathBuf>,
    pub front_matter: Option<FrontMatter>,
    /// Taxonomy entries (key, value) for listing
    pub taxa: Vec<(String, String)>,
    pub changed: Vec<String>,
    pub skipped: Vec<String>,
    /// Text meant for stdout as-is (e.g. cleaned file content)
    pub outputs: Vec<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.affected_paths = paths;
        self
    }

    pub fn with_front_matter(mut self, fm: FrontMatter) -> Self {
        self.front_matter = Some(fm);
        self
    }

    pub fn with_taxa(mut self, taxa: Vec<(String, String)>) -> Self {
        self.taxa = taxa;
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Error))
    }
}
