use crate::filter::Filter;
use crate::source::{json_body, read_document};
use crate::wine::{CatalogRow, Wine};
use serde::Deserialize;
use sommelier_core::{ParseResult, Result};
use sommelier_similarity::{RankedResult, Ranker};
use std::path::Path;
use tracing::{debug, info, warn};

/// A catalog document holds either compact rows or full wine objects
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogEntry {
    Row(CatalogRow),
    Full(Wine),
}

impl From<CatalogEntry> for Wine {
    fn from(entry: CatalogEntry) -> Self {
        match entry {
            CatalogEntry::Row(row) => row.into(),
            CatalogEntry::Full(wine) => wine,
        }
    }
}

/// Keep wines whose vector covers the seven dimensions, logging the rest
pub(crate) fn retain_scorable(wines: &mut Vec<Wine>, context: &str) {
    let before = wines.len();
    wines.retain(|wine| {
        let ok = wine.has_full_vector();
        if !ok {
            warn!(
                "Skipping {:?} in {}: vector has {} entries",
                wine.name,
                context,
                wine.vector.len()
            );
        }
        ok
    });
    if wines.len() != before {
        warn!("Skipped {} of {} wines in {}", before - wines.len(), before, context);
    }
}

/// In-memory wine catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    wines: Vec<Wine>,
}

impl Catalog {
    pub fn new(wines: Vec<Wine>) -> Self {
        Self { wines }
    }

    /// Parse a catalog document
    pub fn from_json_str(source: &str) -> Result<Self> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json_body(source))?;
        let mut wines: Vec<Wine> = entries.into_iter().map(Wine::from).collect();
        retain_scorable(&mut wines, "catalog");
        Ok(Self { wines })
    }

    /// Load a catalog document from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let catalog = Self::from_json_str(&read_document(path)?)?;
        info!("Loaded {} wines from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.wines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wines.is_empty()
    }

    pub fn wines(&self) -> &[Wine] {
        &self.wines
    }

    pub fn iter(&self) -> impl Iterator<Item = &Wine> {
        self.wines.iter()
    }

    /// Wines passing `filter`, in catalog order
    pub fn select<F: Filter + ?Sized>(&self, filter: &F) -> Vec<&Wine> {
        self.wines.iter().filter(|wine| filter.matches(wine)).collect()
    }

    /// Pre-select with the query filters, then rank by taste similarity
    pub fn recommend(&self, query: &ParseResult, ranker: &Ranker) -> Vec<RankedResult<&Wine>> {
        let candidates = self.select(&query.filters);
        debug!("{} of {} wines pass filters {:?}", candidates.len(), self.len(), query.filters);
        ranker.rank(&query.target, candidates)
    }
}
