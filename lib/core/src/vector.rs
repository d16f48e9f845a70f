use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// Number of taste dimensions in every vector
pub const DIMENSIONS: usize = 7;

/// Value assumed for any dimension that has no information
pub const NEUTRAL_VALUE: f32 = 0.5;

/// Target used when a prompt carries no taste signal at all:
/// dry-leaning, medium-bodied and fruity.
pub const DEFAULT_TARGET: [f32; DIMENSIONS] = [0.55, 0.55, 0.12, 0.60, 0.70, 0.40, 0.40];

/// A taste dimension. The declaration order is the vector layout shared by
/// the parser, the scorer, the explainer and the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Tannin,
    Acidity,
    Sweetness,
    Body,
    Fruit,
    Oak,
    Spice,
}

impl Dimension {
    /// All dimensions in vector order
    pub const ALL: [Dimension; DIMENSIONS] = [
        Dimension::Tannin,
        Dimension::Acidity,
        Dimension::Sweetness,
        Dimension::Body,
        Dimension::Fruit,
        Dimension::Oak,
        Dimension::Spice,
    ];

    /// Position of this dimension inside a taste vector
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Dimension::Tannin => "tannin",
            Dimension::Acidity => "acidity",
            Dimension::Sweetness => "sweetness",
            Dimension::Body => "body",
            Dimension::Fruit => "fruit",
            Dimension::Oak => "oak",
            Dimension::Spice => "spice",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A complete 7-dimensional taste vector
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct TasteVector {
    data: [f32; DIMENSIONS],
}

impl TasteVector {
    #[inline]
    #[must_use]
    pub const fn new(data: [f32; DIMENSIONS]) -> Self {
        Self { data }
    }

    /// The vector returned for prompts without any taste signal
    #[inline]
    #[must_use]
    pub const fn default_target() -> Self {
        Self::new(DEFAULT_TARGET)
    }

    /// Every dimension at the neutral value
    #[inline]
    #[must_use]
    pub const fn neutral() -> Self {
        Self::new([NEUTRAL_VALUE; DIMENSIONS])
    }

    /// Build a vector from a possibly short slice, filling missing
    /// dimensions with [`NEUTRAL_VALUE`]. Entries past the seventh are ignored.
    #[must_use]
    pub fn from_partial(values: &[f32]) -> Self {
        let mut data = [NEUTRAL_VALUE; DIMENSIONS];
        for (slot, value) in data.iter_mut().zip(values) {
            *slot = *value;
        }
        Self { data }
    }

    #[inline]
    pub fn get(&self, dimension: Dimension) -> f32 {
        self.data[dimension.index()]
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    #[inline]
    #[must_use]
    pub fn to_array(&self) -> [f32; DIMENSIONS] {
        self.data
    }

    /// Iterate `(dimension, value)` pairs in vector order
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f32)> + '_ {
        Dimension::ALL.iter().map(move |d| (*d, self.data[d.index()]))
    }
}

impl Default for TasteVector {
    fn default() -> Self {
        Self::default_target()
    }
}

impl From<[f32; DIMENSIONS]> for TasteVector {
    fn from(data: [f32; DIMENSIONS]) -> Self {
        Self::new(data)
    }
}

impl TryFrom<&[f32]> for TasteVector {
    type Error = Error;

    /// Strict conversion: the slice must hold exactly seven values
    fn try_from(values: &[f32]) -> Result<Self> {
        let data: [f32; DIMENSIONS] = values.try_into().map_err(|_| Error::InvalidDimension {
            expected: DIMENSIONS,
            actual: values.len(),
        })?;
        Ok(Self { data })
    }
}

impl Index<Dimension> for TasteVector {
    type Output = f32;

    fn index(&self, dimension: Dimension) -> &f32 {
        &self.data[dimension.index()]
    }
}

/// Value of `dimension` in a candidate vector of arbitrary length.
/// Absent positions read as [`NEUTRAL_VALUE`].
#[inline]
pub fn value_or_neutral(values: &[f32], dimension: Dimension) -> f32 {
    values.get(dimension.index()).copied().unwrap_or(NEUTRAL_VALUE)
}

/// Anything that carries a taste vector and can be scored against a target
pub trait Tasted {
    fn taste(&self) -> &[f32];
}

impl Tasted for TasteVector {
    fn taste(&self) -> &[f32] {
        self.as_slice()
    }
}

impl Tasted for Vec<f32> {
    fn taste(&self) -> &[f32] {
        self
    }
}

impl Tasted for [f32] {
    fn taste(&self) -> &[f32] {
        self
    }
}

impl Tasted for [f32; DIMENSIONS] {
    fn taste(&self) -> &[f32] {
        self
    }
}

impl<T: Tasted + ?Sized> Tasted for &T {
    fn taste(&self) -> &[f32] {
        (**self).taste()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_order() {
        let names: Vec<&str> = Dimension::ALL.iter().map(|d| d.name()).collect();
        assert_eq!(
            names,
            vec!["tannin", "acidity", "sweetness", "body", "fruit", "oak", "spice"]
        );
        for (i, d) in Dimension::ALL.iter().enumerate() {
            assert_eq!(d.index(), i);
        }
    }

    #[test]
    fn test_from_partial_fills_neutral() {
        let v = TasteVector::from_partial(&[0.9, 0.1]);
        assert_eq!(v.get(Dimension::Tannin), 0.9);
        assert_eq!(v.get(Dimension::Acidity), 0.1);
        assert_eq!(v[Dimension::Spice], NEUTRAL_VALUE);

        let long = TasteVector::from_partial(&[0.0; 12]);
        assert_eq!(long.as_slice().len(), DIMENSIONS);
    }

    #[test]
    fn test_try_from_slice() {
        let v = TasteVector::try_from(&DEFAULT_TARGET[..]).unwrap();
        assert_eq!(v, TasteVector::default_target());

        let err = TasteVector::try_from(&[0.5f32, 0.5][..]).unwrap_err();
        assert!(matches!(err, Error::InvalidDimension { expected: 7, actual: 2 }));
    }

    #[test]
    fn test_value_or_neutral() {
        assert_eq!(value_or_neutral(&[0.0, 0.2], Dimension::Tannin), 0.0);
        assert_eq!(value_or_neutral(&[0.0, 0.2], Dimension::Oak), NEUTRAL_VALUE);
        assert_eq!(value_or_neutral(&[], Dimension::Tannin), NEUTRAL_VALUE);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let json = serde_json::to_string(&TasteVector::neutral()).unwrap();
        assert_eq!(json, "[0.5,0.5,0.5,0.5,0.5,0.5,0.5]");

        let back: TasteVector = serde_json::from_str("[0.55,0.55,0.12,0.6,0.7,0.4,0.4]").unwrap();
        assert_eq!(back, TasteVector::default_target());
    }
}
