use crate::clock::{self, Clock};
use crate::commands::{CmdMessage, CmdResult, MemexPaths};
use crate::error::{MemexError, Result};
use crate::frontmatter;
use crate::model::{Field, FieldValue};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    /// Re-render and stamp `last_update`.
    Touch,
    /// Re-render only.
    Fmt,
}

/// Rewrite the front matter of `text`, leaving the body untouched.
///
/// With a `stamp`, `last_update` is set to it; otherwise only formatting changes.
pub fn touch(text: &str, stamp: Option<&str>) -> Result<String> {
    let parts = frontmatter::split(text)?;
    let mut fm = frontmatter::parse(parts.front)?;
    if let Some(stamp) = stamp {
        fm.set(Field::LastUpdate, FieldValue::Text(stamp.to_string()));
    }
    let front = frontmatter::render(&fm)?;
    Ok(frontmatter::compose(&front, parts.body))
}

pub fn run(paths: &MemexPaths, files: &[PathBuf], clock: &Clock, mode: EditMode) -> Result<CmdResult> {
    if files.is_empty() {
        return Err(MemexError::Api("No files given".to_string()));
    }

    let stamp = match mode {
        EditMode::Touch => Some(clock::timestamp(&clock.now())),
        EditMode::Fmt => None,
    };

    let mut result = CmdResult::default();
    for file in files {
        let shown = paths.display_path(file);
        match edit_file(file, stamp.as_deref()) {
            Ok(true) => {
                let verb = match mode {
                    EditMode::Touch => "Touched",
                    EditMode::Fmt => "Formatted",
                };
                result.add_message(CmdMessage::success(format!("{} {}", verb, shown)));
                result.changed.push(shown);
                result.affected_paths.push(file.clone());
            }
            Ok(false) => {
                result.add_message(CmdMessage::info(format!("Unchanged {}", shown)));
                result.skipped.push(shown);
            }
            Err(e) => {
                result.add_message(CmdMessage::error(format!("{}: {}", shown, e)));
            }
        }
    }
    Ok(result)
}

/// Returns whether the file was rewritten.
fn edit_file(path: &Path, stamp: Option<&str>) -> Result<bool> {
    let original = fs::read_to_string(path)?;
    let updated = touch(&original, stamp)?;
    if updated == original {
        return Ok(false);
    }
    fs::write(path, updated)?;
    log::debug!("rewrote front matter of {}", path.display());
    Ok(true)
}
