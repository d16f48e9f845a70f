use serde::{Deserialize, Serialize};
use sommelier_core::{Tasted, DIMENSIONS};

/// A wine with its taste vector and catalog metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wine {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grape: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colour: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default)]
    pub vector: Vec<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<String>,
}

impl Wine {
    pub fn new(name: impl Into<String>, vector: Vec<f32>) -> Self {
        Self {
            name: name.into(),
            grape: None,
            country: None,
            colour: None,
            region: None,
            price: None,
            vector,
            brand: None,
            description: None,
            subtype: None,
            rating: None,
            rating_count: None,
            confidence: None,
        }
    }

    pub fn with_grape(mut self, grape: impl Into<String>) -> Self {
        self.grape = Some(grape.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_colour(mut self, colour: impl Into<String>) -> Self {
        self.colour = Some(colour.into());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// True when the vector covers exactly the seven taste dimensions
    pub fn has_full_vector(&self) -> bool {
        self.vector.len() == DIMENSIONS
    }
}

impl Tasted for Wine {
    fn taste(&self) -> &[f32] {
        &self.vector
    }
}

/// Compact catalog row: `[name, grape, country, colour, [vector]]`.
/// Empty strings mean unknown.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogRow(pub String, pub String, pub String, pub String, pub Vec<f32>);

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

impl From<CatalogRow> for Wine {
    fn from(row: CatalogRow) -> Self {
        let CatalogRow(name, grape, country, colour, vector) = row;
        let mut wine = Wine::new(name, vector);
        wine.grape = non_empty(grape);
        wine.country = non_empty(country);
        wine.colour = non_empty(colour);
        wine
    }
}
