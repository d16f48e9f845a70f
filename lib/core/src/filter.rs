// Categorical and price constraints extracted from a prompt
use serde::{Deserialize, Serialize};

/// Optional-field filter record. A `None` field is unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colour: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grape: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_max: Option<f64>,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field is constrained
    pub fn is_empty(&self) -> bool {
        self.colour.is_none()
            && self.grape.is_none()
            && self.country.is_none()
            && self.region.is_none()
            && self.price_min.is_none()
            && self.price_max.is_none()
    }

    /// The price bounds as a pair, when a price rule matched
    pub fn price_range(&self) -> Option<(f64, f64)> {
        match (self.price_min, self.price_max) {
            (Some(min), Some(max)) => Some((min, max)),
            (Some(min), None) => Some((min, f64::INFINITY)),
            (None, Some(max)) => Some((0.0, max)),
            (None, None) => None,
        }
    }

    pub fn with_colour(mut self, colour: impl Into<String>) -> Self {
        self.colour = Some(colour.into());
        self
    }

    pub fn with_grape(mut self, grape: impl Into<String>) -> Self {
        self.grape = Some(grape.into());
        self
    }

    /// Set the country and, when given, the region
    pub fn with_origin(mut self, country: impl Into<String>, region: Option<&str>) -> Self {
        self.country = Some(country.into());
        self.region = region.map(str::to_string);
        self
    }

    pub fn with_price(mut self, min: f64, max: f64) -> Self {
        self.price_min = Some(min);
        self.price_max = Some(max);
        self
    }
}
