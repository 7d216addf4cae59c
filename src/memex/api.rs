//! # API Facade
//!
//! The single entry point for memex operations. It holds everything a command
//! needs for one invocation (taxonomy store, repo paths, settings, clock) and
//! dispatches to `commands/*.rs`.
//!
//! Like the command layer, the API never prints. It returns `CmdResult`s whose
//! messages the CLI renders.
//!
//! `MemexApi<S: TaxonomyStore>` is generic over the taxonomy backend:
//! - Production: `MemexApi<FileTaxonomyStore>`
//! - Testing: `MemexApi<InMemoryTaxonomyStore>`

use crate::clock::Clock;
use crate::commands;
use crate::commands::touch::EditMode;
use crate::config::MemexConfig;
use crate::error::Result;
use crate::model::{Section, TaxaAction};
use crate::rules;
use crate::store::TaxonomyStore;
use std::path::PathBuf;

pub struct MemexApi<S: TaxonomyStore> {
    store: S,
    paths: commands::MemexPaths,
    config: MemexConfig,
    clock: Clock,
}

impl<S: TaxonomyStore> MemexApi<S> {
    pub fn new(store: S, paths: commands::MemexPaths, config: MemexConfig, clock: Clock) -> Self {
        Self {
            store,
            paths,
            config,
            clock,
        }
    }

    pub fn new_document(&self, request: NewDocument) -> Result<commands::CmdResult> {
        commands::new::run(&self.store, &self.paths, &self.config, &self.clock, request)
    }

    /// Folders under `docs/` that can receive a new document.
    pub fn folders(&self) -> Result<Vec<String>> {
        commands::helpers::list_docs_subfolders(&self.paths.docs_dir())
    }

    pub fn infer_categories(&self, folder: &str) -> Vec<String> {
        rules::infer_categories(folder, &self.config.dir_rules())
    }

    pub fn touch(&self, files: &[PathBuf]) -> Result<commands::CmdResult> {
        commands::touch::run(&self.paths, files, &self.clock, EditMode::Touch)
    }

    pub fn fmt(&self, files: &[PathBuf]) -> Result<commands::CmdResult> {
        commands::touch::run(&self.paths, files, &self.clock, EditMode::Fmt)
    }

    pub fn list_taxa(&self, section: Section) -> Result<commands::CmdResult> {
        commands::taxa::list(&self.store, section)
    }

    pub fn add_taxa(&mut self, section: Section, values: &[String]) -> Result<commands::CmdResult> {
        commands::taxa::update(&mut self.store, section, TaxaAction::Add, values)
    }

    pub fn remove_taxa(
        &mut self,
        section: Section,
        values: &[String],
    ) -> Result<commands::CmdResult> {
        commands::taxa::update(&mut self.store, section, TaxaAction::Remove, values)
    }

    pub fn init(&self, force: bool) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths, force)
    }

    pub fn clean(&self, files: &[PathBuf], write: bool) -> Result<commands::CmdResult> {
        commands::clean::run(&self.paths, files, write)
    }

    pub fn paths(&self) -> &commands::MemexPaths {
        &self.paths
    }
}

pub use commands::new::NewDocument;
pub use commands::{CmdMessage, CmdResult, MemexPaths, MessageLevel};
