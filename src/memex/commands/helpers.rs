use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MemexError, Result};
use crate::store::{Taxonomy, TaxonomyStore};
use std::fs;
use std::path::Path;

/// Subfolders of `docs/` that never hold posts.
pub const EXCLUDED_FOLDERS: &[&str] = &["_data", "assets"];

/// Sorted names of the post folders under `docs_dir`.
pub fn list_docs_subfolders(docs_dir: &Path) -> Result<Vec<String>> {
    if !docs_dir.exists() {
        return Ok(Vec::new());
    }
    let mut folders = Vec::new();
    for entry in fs::read_dir(docs_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if !EXCLUDED_FOLDERS.contains(&name.as_str()) {
            folders.push(name);
        }
    }
    folders.sort();
    Ok(folders)
}

/// Strip a trailing `.md` and one leading `YYYY-MM-DD-` date prefix.
pub fn sanitize_slug(slug: &str) -> String {
    let mut s = slug.trim();
    if s.len() >= 3 && s.is_char_boundary(s.len() - 3) && s[s.len() - 3..].eq_ignore_ascii_case(".md")
    {
        s = &s[..s.len() - 3];
    }
    strip_date_prefix(s).to_string()
}

fn strip_date_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    if bytes.len() < 11 {
        return s;
    }
    let is_date = bytes[..11].iter().enumerate().all(|(i, b)| match i {
        4 | 7 | 10 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    if is_date { &s[11..] } else { s }
}

/// Parse an explicit `--cats`/`--tags` value. Absent or empty means "not given".
pub fn parse_explicit_list(raw: Option<&str>) -> Result<Option<Vec<String>>> {
    match raw {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => serde_json::from_str::<Vec<String>>(s)
            .map(Some)
            .map_err(|_| MemexError::InvalidExplicitList(s.to_string())),
    }
}

/// Load the taxonomy, downgrading a parse failure to a warning and an empty taxonomy.
pub fn load_taxonomy<S: TaxonomyStore>(store: &S, result: &mut CmdResult) -> Result<Taxonomy> {
    match store.load() {
        Ok(taxonomy) => Ok(taxonomy),
        Err(e @ MemexError::ConfigParse { .. }) => {
            result.add_message(CmdMessage::warning(format!(
                "{}; using an empty taxonomy",
                e
            )));
            Ok(Taxonomy::default())
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn sanitize_strips_suffix_and_date() {
        assert_eq!(sanitize_slug("2025-01-01-old-name"), "old-name");
        assert_eq!(sanitize_slug("2025-01-01-old-name.md"), "old-name");
        assert_eq!(sanitize_slug("  notes.MD "), "notes");
        assert_eq!(sanitize_slug("plain-slug"), "plain-slug");
    }

    #[test]
    fn sanitize_strips_only_one_date() {
        assert_eq!(sanitize_slug("2025-01-01-2024-02-02-x"), "2024-02-02-x");
    }

    #[test]
    fn sanitize_leaves_near_dates_alone() {
        assert_eq!(sanitize_slug("2025-1-01-x"), "2025-1-01-x");
        assert_eq!(sanitize_slug("2025-01-01"), "2025-01-01");
        assert_eq!(sanitize_slug("2025-01-01x"), "2025-01-01x");
        assert_eq!(sanitize_slug("2025-01-01-"), "");
    }

    #[test]
    fn sanitize_handles_multibyte_input() {
        assert_eq!(sanitize_slug("é"), "é");
        assert_eq!(sanitize_slug("日本語-ノート.md"), "日本語-ノート");
    }

    #[test]
    fn explicit_list_parsing() {
        assert_eq!(parse_explicit_list(None).unwrap(), None);
        assert_eq!(parse_explicit_list(Some("")).unwrap(), None);
        assert_eq!(parse_explicit_list(Some("[]")).unwrap(), Some(vec![]));
        assert_eq!(
            parse_explicit_list(Some(r#"["🤖 tech","🐧 linux"]"#)).unwrap(),
            Some(vec!["🤖 tech".to_string(), "🐧 linux".to_string()])
        );
    }

    #[test]
    fn explicit_list_rejects_non_string_arrays() {
        for bad in ["tech", "[1, 2]", r#"{"a": "b"}"#, r#"["a", null]"#] {
            assert!(matches!(
                parse_explicit_list(Some(bad)),
                Err(MemexError::InvalidExplicitList(_))
            ));
        }
    }

    #[test]
    fn lists_folders_excluding_data_and_assets() {
        let dir = TempDir::new().unwrap();
        for name in ["linux", "_data", "assets", "git", "LLM"] {
            fs::create_dir_all(dir.path().join(name)).unwrap();
        }
        fs::write(dir.path().join("index.md"), "").unwrap();

        let folders = list_docs_subfolders(dir.path()).unwrap();
        assert_eq!(folders, vec!["LLM", "git", "linux"]);
    }

    #[test]
    fn missing_docs_dir_has_no_folders() {
        let dir = TempDir::new().unwrap();
        assert!(list_docs_subfolders(&dir.path().join("docs")).unwrap().is_empty());
    }
}
