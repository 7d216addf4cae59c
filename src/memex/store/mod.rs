//! # Taxonomy Storage
//!
//! The taxonomy is the controlled vocabulary offered when tagging documents. It
//! is a single YAML file with a `categories` and a `tags` section, each mapping a
//! display string to itself:
//!
//! ```yaml
//! categories:
//!   🤖 tech: 🤖 tech
//!   🐧 linux: 🐧 linux
//! tags:
//!   🔒 Privacy: 🔒 Privacy
//! ```
//!
//! Storage sits behind the [`TaxonomyStore`] trait so command logic can be tested
//! against [`memory::InMemoryTaxonomyStore`] while the CLI uses
//! [`fs::FileTaxonomyStore`].
//!
//! Every mutation is a full read-modify-write of the file. There is no locking:
//! two concurrent invocations can lose one writer's change.

use crate::config::nullable;
use crate::error::Result;
use crate::model::{Section, TaxaAction};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub mod fs;
pub mod memory;

pub type TaxonomySection = IndexMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Taxonomy {
    #[serde(deserialize_with = "nullable")]
    pub categories: TaxonomySection,
    #[serde(deserialize_with = "nullable")]
    pub tags: TaxonomySection,
}

/// Outcome of an add/remove, each list in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaxaChange {
    pub changed: Vec<String>,
    pub skipped: Vec<String>,
}

impl Taxonomy {
    pub fn section(&self, section: Section) -> &TaxonomySection {
        match section {
            Section::Categories => &self.categories,
            Section::Tags => &self.tags,
        }
    }

    pub fn section_mut(&mut self, section: Section) -> &mut TaxonomySection {
        match section {
            Section::Categories => &mut self.categories,
            Section::Tags => &mut self.tags,
        }
    }

    pub fn update<I: AsRef<str>>(
        &mut self,
        section: Section,
        action: TaxaAction,
        values: &[I],
    ) -> TaxaChange {
        let entries = self.section_mut(section);
        let mut change = TaxaChange::default();

        for value in values {
            let value = value.as_ref().to_string();
            let applied = match action {
                TaxaAction::Add if entries.contains_key(&value) => false,
                TaxaAction::Add => {
                    entries.insert(value.clone(), value.clone());
                    true
                }
                TaxaAction::Remove => entries.shift_remove(&value).is_some(),
            };
            if applied {
                change.changed.push(value);
            } else {
                change.skipped.push(value);
            }
        }

        change
    }
}

/// Abstract interface for taxonomy persistence.
pub trait TaxonomyStore {
    /// Load the taxonomy. A missing backing resource yields an empty taxonomy;
    /// unparseable content is a `ConfigParse` error.
    fn load(&self) -> Result<Taxonomy>;

    /// Replace the stored taxonomy with `taxonomy`.
    fn save(&mut self, taxonomy: &Taxonomy) -> Result<()>;

    /// Human readable location, for messages
    fn location(&self) -> String;
}
