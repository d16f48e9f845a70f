//! Store inventory
//!
//! Stores with coordinates and the wines they stock. Supports nearest-store
//! lookups and recommendations across every store's shelf.

use crate::catalog::retain_scorable;
use crate::filter::Filter;
use crate::source::{json_body, read_document};
use crate::wine::Wine;
use serde::{Deserialize, Serialize};
use sommelier_core::{Error, ParseResult, Result, Tasted};
use sommelier_similarity::{distance_miles, RankedResult, Ranker};
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub wines: Vec<Wine>,
}

impl Store {
    /// Miles from the given coordinates to this store
    pub fn distance_from(&self, lat: f64, lng: f64) -> f64 {
        distance_miles(lat, lng, self.lat, self.lng)
    }
}

/// A store paired with its distance from the caller
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StoreDistance<'a> {
    pub store: &'a Store,
    pub miles: f64,
}

/// A wine on a specific store's shelf
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StockedWine<'a> {
    pub store_id: &'a str,
    pub store_name: &'a str,
    pub miles: f64,
    pub wine: &'a Wine,
}

impl Tasted for StockedWine<'_> {
    fn taste(&self) -> &[f32] {
        &self.wine.vector
    }
}

#[derive(Debug, Clone, Default)]
pub struct Inventory {
    stores: Vec<Store>,
}

impl Inventory {
    pub fn new(stores: Vec<Store>) -> Self {
        Self { stores }
    }

    /// Parse an inventory document (an array of stores)
    pub fn from_json_str(source: &str) -> Result<Self> {
        let mut stores: Vec<Store> = serde_json::from_str(json_body(source))?;
        for store in &mut stores {
            retain_scorable(&mut store.wines, &store.name);
        }
        Ok(Self { stores })
    }

    /// Load an inventory document from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let inventory = Self::from_json_str(&read_document(path)?)?;
        info!(
            "Loaded {} stores with {} wines from {:?}",
            inventory.stores.len(),
            inventory.wine_count(),
            path
        );
        Ok(inventory)
    }

    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    pub fn wine_count(&self) -> usize {
        self.stores.iter().map(|s| s.wines.len()).sum()
    }

    pub fn store(&self, id: &str) -> Result<&Store> {
        self.stores
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| Error::StoreNotFound(id.to_string()))
    }

    /// Every store with its distance, closest first
    pub fn nearest(&self, lat: f64, lng: f64) -> Vec<StoreDistance<'_>> {
        let mut out: Vec<StoreDistance<'_>> = self
            .stores
            .iter()
            .map(|store| StoreDistance {
                store,
                miles: store.distance_from(lat, lng),
            })
            .collect();
        out.sort_by(|a, b| a.miles.total_cmp(&b.miles));
        out
    }

    /// Stores within `radius_miles`, closest first
    pub fn within(&self, lat: f64, lng: f64, radius_miles: f64) -> Vec<StoreDistance<'_>> {
        let mut out = self.nearest(lat, lng);
        out.retain(|s| s.miles <= radius_miles);
        out
    }

    /// Rank the filtered wines of every store against the query target
    pub fn recommend(
        &self,
        query: &ParseResult,
        ranker: &Ranker,
        lat: f64,
        lng: f64,
    ) -> Vec<RankedResult<StockedWine<'_>>> {
        let filters = &query.filters;
        let candidates: Vec<StockedWine<'_>> = self
            .nearest(lat, lng)
            .into_iter()
            .flat_map(|StoreDistance { store, miles }| {
                store
                    .wines
                    .iter()
                    .filter(move |wine| filters.matches(wine))
                    .map(move |wine| StockedWine {
                        store_id: &store.id,
                        store_name: &store.name,
                        miles,
                        wine,
                    })
            })
            .collect();

        debug!("{} stocked wines pass filters {:?}", candidates.len(), filters);
        ranker.rank(&query.target, candidates)
    }
}
