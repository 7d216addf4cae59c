use crate::clock::{self, Clock};
use crate::commands::helpers::{list_docs_subfolders, load_taxonomy, sanitize_slug};
use crate::commands::{CmdMessage, CmdResult, MemexPaths};
use crate::config::MemexConfig;
use crate::error::{MemexError, Result};
use crate::frontmatter;
use crate::model::{FrontMatter, Section};
use crate::rules::infer_categories;
use crate::store::{Taxonomy, TaxonomyStore};
use std::fs;
use std::path::{Path, PathBuf};

/// Body written below the front matter of a fresh document.
const NEW_BODY: &str = "\n\n";

/// What the caller asked for. Explicit lists override inference when present.
#[derive(Debug, Clone, Default)]
pub struct NewDocument {
    pub slug: String,
    pub folder: String,
    pub categories: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub force: bool,
    pub no_backup: bool,
}

pub fn run<S: TaxonomyStore>(
    store: &S,
    paths: &MemexPaths,
    config: &MemexConfig,
    clock: &Clock,
    request: NewDocument,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let folders = list_docs_subfolders(&paths.docs_dir())?;
    if !folders.iter().any(|f| f == &request.folder) {
        return Err(MemexError::UnknownFolder {
            folder: request.folder,
            available: folders.join(", "),
        });
    }

    let slug = sanitize_slug(&request.slug);
    if slug.is_empty() {
        return Err(MemexError::Api(format!(
            "'{}' leaves an empty slug once the date prefix and .md suffix are removed",
            request.slug.trim()
        )));
    }

    let now = clock.now();
    let stamp = clock::timestamp(&now);
    let title = config.title_case().title_from_slug(&slug);

    let explicit_categories = request.categories.is_some();
    let categories = match request.categories {
        Some(explicit) => explicit,
        None => {
            let inferred = infer_categories(&request.folder, &config.dir_rules());
            log::debug!("inferred categories for {}: {:?}", request.folder, inferred);
            inferred
        }
    };
    let tags = request.tags.unwrap_or_default();

    let taxonomy = load_taxonomy(store, &mut result)?;
    // Inferred categories come from settings and are not checked.
    if explicit_categories {
        warn_unknown(&taxonomy, Section::Categories, &categories, &mut result);
    }
    warn_unknown(&taxonomy, Section::Tags, &tags, &mut result);

    let fm = FrontMatter::for_new_document(
        &config.frontmatter_defaults,
        title.clone(),
        &stamp,
        categories.clone(),
        tags.clone(),
    );

    let filename = format!("{}-{}.md", clock::iso_date(&now), slug);
    let target = paths.docs_dir().join(&request.folder).join(filename);

    if target.exists() {
        if !request.force {
            return Err(MemexError::FileExists(target));
        }
        if request.no_backup {
            result.add_message(CmdMessage::warning(format!(
                "Overwriting {} without a backup",
                paths.display_path(&target)
            )));
        } else {
            let backup = backup_path(&target, &clock::backup_stamp(&now));
            fs::copy(&target, &backup)?;
            result.add_message(CmdMessage::warning(format!(
                "Backed up existing file to {}",
                paths.display_path(&backup)
            )));
        }
    }

    let front = frontmatter::render(&fm)?;
    fs::write(&target, frontmatter::compose(&front, NEW_BODY))?;
    log::debug!("wrote {}", target.display());

    result.add_message(CmdMessage::success(format!(
        "Created {}",
        paths.display_path(&target)
    )));
    result.add_message(CmdMessage::info(format!("title: {}", title)));
    result.add_message(CmdMessage::info(format!(
        "categories: [{}]",
        categories.join(", ")
    )));
    result.add_message(CmdMessage::info(format!("tags: [{}]", tags.join(", "))));

    Ok(result
        .with_affected_paths(vec![target])
        .with_front_matter(fm))
}

/// `<name>.md.bak.<stamp>` next to `target`.
fn backup_path(target: &Path, stamp: &str) -> PathBuf {
    let mut name = target.file_name().unwrap_or_default().to_os_string();
    name.push(format!(".bak.{}", stamp));
    target.with_file_name(name)
}

fn warn_unknown(taxonomy: &Taxonomy, section: Section, values: &[String], result: &mut CmdResult) {
    let known = taxonomy.section(section);
    if known.is_empty() {
        return;
    }
    for value in values.iter().filter(|v| !known.contains_key(v.as_str())) {
        result.add_message(CmdMessage::warning(format!(
            "'{}' is not in the {} taxonomy",
            value,
            section.short_name()
        )));
    }
}
