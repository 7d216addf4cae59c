use super::{Taxonomy, TaxonomyStore};
use crate::error::{MemexError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Taxonomy backed by a YAML file, normally `docs/_data/taxonomy.yml`.
pub struct FileTaxonomyStore {
    path: PathBuf,
}

impl FileTaxonomyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl TaxonomyStore for FileTaxonomyStore {
    fn load(&self) -> Result<Taxonomy> {
        if !self.path.exists() {
            return Ok(Taxonomy::default());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Taxonomy::default());
        }
        serde_yaml::from_str(&content).map_err(|e| MemexError::ConfigParse {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    fn save(&mut self, taxonomy: &Taxonomy) -> Result<()> {
        self.ensure_parent()?;
        let content = serde_yaml::to_string(taxonomy)?;
        fs::write(&self.path, content)?;
        log::debug!("saved taxonomy to {}", self.path.display());
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
