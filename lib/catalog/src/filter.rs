// Catalog pre-selection from parsed filters
use crate::wine::Wine;
use sommelier_core::Filters;

pub trait Filter {
    fn matches(&self, wine: &Wine) -> bool;
}

/// Known (present and non-blank) attribute value
fn known(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn same_label(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// A constrained attribute the wine does not carry never excludes it
impl Filter for Filters {
    fn matches(&self, wine: &Wine) -> bool {
        if let (Some(want), Some(have)) = (self.colour.as_deref(), known(&wine.colour)) {
            if !same_label(want, have) {
                return false;
            }
        }

        if let (Some(want), Some(have)) = (self.grape.as_deref(), known(&wine.grape)) {
            if !have.to_lowercase().contains(&want.to_lowercase()) {
                return false;
            }
        }

        if let (Some(want), Some(have)) = (self.country.as_deref(), known(&wine.country)) {
            if !same_label(want, have) {
                return false;
            }
        }

        if let (Some(want), Some(have)) = (self.region.as_deref(), known(&wine.region)) {
            if !same_label(want, have) {
                return false;
            }
        }

        if let (Some((min, max)), Some(price)) = (self.price_range(), wine.price) {
            if price < min || price > max {
                return false;
            }
        }

        true
    }
}
