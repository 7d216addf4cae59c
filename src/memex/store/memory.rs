use super::{Taxonomy, TaxonomyStore};
use crate::error::Result;

/// In-memory taxonomy for testing. Does NOT persist data.
#[derive(Default)]
pub struct InMemoryTaxonomyStore {
    taxonomy: Taxonomy,
    saves: usize,
}

impl InMemoryTaxonomyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_taxonomy(taxonomy: Taxonomy) -> Self {
        Self { taxonomy, saves: 0 }
    }

    /// Number of times `save` was called.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl TaxonomyStore for InMemoryTaxonomyStore {
    fn load(&self) -> Result<Taxonomy> {
        Ok(self.taxonomy.clone())
    }

    fn save(&mut self, taxonomy: &Taxonomy) -> Result<()> {
        self.taxonomy = taxonomy.clone();
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
