use crate::error::{MemexError, Result};
use crate::rules::DirRule;
use crate::title::TitleCase;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = ".memex.yml";

const DEFAULT_LAYOUT: &str = "post";
const DEFAULT_IMG_PATH: &str = "/assets/img/posts/";

/// Repository settings, stored in `.memex.yml` at the repo root.
///
/// Every section is optional; a `null` section behaves like a missing one.
/// Keys we don't use are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemexConfig {
    /// IANA zone name used for timestamps, e.g. "Africa/Abidjan"
    pub timezone: Option<String>,

    #[serde(deserialize_with = "nullable")]
    pub frontmatter_defaults: FrontMatterDefaults,

    #[serde(deserialize_with = "nullable")]
    pub titlecase: TitleCaseConfig,

    /// Folder glob -> categories, in file order
    #[serde(deserialize_with = "nullable")]
    pub dir_rules: IndexMap<String, Option<DirRuleConfig>>,
}

/// Values copied into every new document. Absent fields use hard-coded defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatterDefaults {
    pub layout: Option<String>,
    pub img_path: Option<String>,
    pub math: Option<bool>,
    pub toc: Option<bool>,
    pub comments: Option<bool>,
    pub image: Option<String>,
}

impl FrontMatterDefaults {
    pub fn layout(&self) -> &str {
        self.layout.as_deref().unwrap_or(DEFAULT_LAYOUT)
    }

    pub fn img_path(&self) -> &str {
        self.img_path.as_deref().unwrap_or(DEFAULT_IMG_PATH)
    }

    pub fn math(&self) -> bool {
        self.math.unwrap_or(true)
    }

    pub fn toc(&self) -> bool {
        self.toc.unwrap_or(true)
    }

    pub fn comments(&self) -> bool {
        self.comments.unwrap_or(true)
    }

    pub fn image(&self) -> &str {
        self.image.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleCaseConfig {
    #[serde(deserialize_with = "nullable")]
    pub acronym_map: IndexMap<String, String>,

    #[serde(deserialize_with = "nullable")]
    pub lil_words: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirRuleConfig {
    #[serde(deserialize_with = "nullable")]
    pub categories: Vec<String>,
}

/// Treat an explicit YAML `null` the same as a missing value.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl MemexConfig {
    /// Load settings from `path`, or return defaults if the file is missing or blank.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content).map_err(|e| MemexError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn dir_rules(&self) -> Vec<DirRule> {
        self.dir_rules
            .iter()
            .map(|(pattern, rule)| {
                let categories = rule.as_ref().map(|r| r.categories.clone());
                DirRule::new(pattern.clone(), categories.unwrap_or_default())
            })
            .collect()
    }

    pub fn title_case(&self) -> TitleCase {
        TitleCase::new(
            self.titlecase
                .acronym_map
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
            self.titlecase.lil_words.iter().cloned(),
        )
    }
}
