use crate::commands::{CmdMessage, CmdResult, MemexPaths};
use crate::error::{MemexError, Result};
use crate::text::clean_punctuation;
use std::fs;
use std::path::PathBuf;

/// Clean each file. Without `write`, the cleaned text goes to `outputs`.
pub fn run(paths: &MemexPaths, files: &[PathBuf], write: bool) -> Result<CmdResult> {
    if files.is_empty() {
        return Err(MemexError::Api("No files given".to_string()));
    }

    let mut result = CmdResult::default();
    for file in files {
        let shown = paths.display_path(file);
        let text = match fs::read_to_string(file) {
            Ok(text) => text,
            Err(e) => {
                result.add_message(CmdMessage::error(format!("{}: {}", shown, e)));
                continue;
            }
        };
        let fixed = clean_punctuation(&text);

        if !write {
            result.outputs.push(fixed);
            continue;
        }
        if fixed == text {
            result.skipped.push(shown);
            continue;
        }
        if let Err(e) = fs::write(file, &fixed) {
            result.add_message(CmdMessage::error(format!("{}: {}", shown, e)));
            continue;
        }
        result.add_message(CmdMessage::success(format!("Scrubbed {}", shown)));
        result.changed.push(shown);
        result.affected_paths.push(file.clone());
    }
    Ok(result)
}
