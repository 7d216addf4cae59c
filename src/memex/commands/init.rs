use crate::commands::{CmdMessage, CmdResult, MemexPaths};
use crate::error::Result;
use std::fs;
use std::path::Path;

pub const DEFAULT_SETTINGS: &str = r#"timezone: "Africa/Abidjan"
frontmatter_defaults:
  layout: "post"
  img_path: "/assets/img/posts/"
  math: true
  toc: true
  comments: true
  image: ""
titlecase:
  acronym_map:
    nmap: "Nmap"
    cli: "CLI"
    lan: "LAN"
    llm: "LLM"
    iot: "IoT"
    wifi: "Wi-Fi"
  lil_words: [a, an, and, for, in, of, on, or, the, to, with]
dir_rules:
  "docs/aws/**":
    categories: ["🤖 tech", "✈️ aws"]
  "docs/cheatsheets/**":
    categories: ["🤖 tech", "📖 cheatsheet"]
  "docs/drafts/**":
    categories: ["📝 drafts"]
  "docs/git/**":
    categories: ["🤖 tech", "🧙 git"]
  "docs/homenet/**":
    categories: ["🤖 tech", "🏠 homenet"]
  "docs/learning_routes/**":
    categories: ["🤖 tech", "📚 learning_routes"]
  "docs/linux/**":
    categories: ["🤖 tech", "🐧 linux"]
  "docs/LLM/**":
    categories: ["🤖 tech", "🤖 LLM"]
  "docs/opsec/**":
    categories: ["🤖 tech", "💳 opsec"]
  "docs/proxy/**":
    categories: ["🤖 tech", "✈️ proxy"]
"#;

pub const DEFAULT_TAXONOMY: &str = r#"categories:
  "🤖 tech": "🤖 tech"
  "✈️ aws": "✈️ aws"
  "📖 cheatsheet": "📖 cheatsheet"
  "📝 drafts": "📝 drafts"
  "🧙 git": "🧙 git"
  "🏠 homenet": "🏠 homenet"
  "🐧 linux": "🐧 linux"
  "🤖 LLM": "🤖 LLM"
  "💳 opsec": "💳 opsec"
  "✈️ proxy": "✈️ proxy"

tags:
  "🐧 Linux": "🐧 Linux"
  "🖥️ CLI": "🖥️ CLI"
  "🛜 IoT": "🛜 IoT"
  "🔀 LAN": "🔀 LAN"
  "🧙🏻 Git": "🧙🏻 Git"
  "🕵🏻️ Nmap": "🕵🏻️ Nmap"
  "📷 Cam": "📷 Cam"
  "🔒 Privacy": "🔒 Privacy"
"#;

pub fn run(paths: &MemexPaths, force: bool) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let targets = [
        (paths.config_file(), DEFAULT_SETTINGS),
        (paths.taxonomy_file(), DEFAULT_TAXONOMY),
    ];

    for (path, content) in targets {
        let shown = paths.display_path(&path);
        if path.exists() && !force {
            result.add_message(CmdMessage::info(format!(
                "Skipped {}, already exists",
                shown
            )));
            result.skipped.push(shown);
            continue;
        }
        write_default(&path, content)?;
        result.add_message(CmdMessage::success(format!("Wrote {}", shown)));
        result.changed.push(shown);
        result.affected_paths.push(path);
    }
    Ok(result)
}

fn write_default(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    log::debug!("wrote default {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemexConfig;
    use crate::rules::infer_categories;
    use crate::store::fs::FileTaxonomyStore;
    use crate::store::TaxonomyStore;
    use tempfile::TempDir;

    #[test]
    fn writes_both_files_and_they_load() {
        let dir = TempDir::new().unwrap();
        let paths = MemexPaths::new(dir.path());

        let result = run(&paths, false).unwrap();
        assert_eq!(result.changed, vec![".memex.yml", "docs/_data/taxonomy.yml"]);

        let config = MemexConfig::load(paths.config_file()).unwrap();
        assert_eq!(config.timezone.as_deref(), Some("Africa/Abidjan"));
        assert_eq!(
            infer_categories("linux", &config.dir_rules()),
            vec!["🤖 tech", "🐧 linux"]
        );
        assert_eq!(
            config.title_case().title_from_slug("wifi-for-the-cli"),
            "Wi-Fi for the CLI"
        );

        let taxonomy = FileTaxonomyStore::new(paths.taxonomy_file()).load().unwrap();
        assert_eq!(taxonomy.categories.len(), 10);
        assert_eq!(taxonomy.tags.len(), 8);
    }

    #[test]
    fn existing_files_are_kept_without_force() {
        let dir = TempDir::new().unwrap();
        let paths = MemexPaths::new(dir.path());
        fs::write(paths.config_file(), "timezone: UTC\n").unwrap();

        let result = run(&paths, false).unwrap();
        assert_eq!(result.skipped, vec![".memex.yml"]);
        assert_eq!(result.changed, vec!["docs/_data/taxonomy.yml"]);
        assert_eq!(
            fs::read_to_string(paths.config_file()).unwrap(),
            "timezone: UTC\n"
        );

        let forced = run(&paths, true).unwrap();
        assert_eq!(forced.changed.len(), 2);
        assert_eq!(
            fs::read_to_string(paths.config_file()).unwrap(),
            DEFAULT_SETTINGS
        );
    }
}
