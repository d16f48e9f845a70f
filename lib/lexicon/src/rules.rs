//! Rule primitives
//!
//! A rule pairs a case-insensitive [`Pattern`] with an effect. Taste rules
//! contribute target values to one or more dimensions and are all applied;
//! categorical rules live in a [`RuleTable`] where the first match in table
//! order wins.

use regex::{Captures, Regex};
use sommelier_core::{Dimension, Error, Result};

/// Case-insensitive pattern evaluated against normalized prompt text
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Match any of `alternatives` as whole words.
    ///
    /// Alternatives are literal text (escaped), so multi-word phrases such as
    /// `"pinot noir"` and hyphenated terms such as `"off-dry"` work as written.
    pub fn words(alternatives: &[&str]) -> Result<Self> {
        if alternatives.is_empty() {
            return Err(Error::InvalidPattern("empty alternative list".to_string()));
        }
        let body = alternatives
            .iter()
            .map(|a| regex::escape(a))
            .collect::<Vec<_>>()
            .join("|");
        Self::regex(&format!(r"\b(?:{})\b", body))
    }

    /// Compile an unanchored regular expression, case-insensitive
    pub fn regex(source: &str) -> Result<Self> {
        let regex = Regex::new(&format!("(?i){}", source))
            .map_err(|e| Error::InvalidPattern(format!("{}: {}", source, e)))?;
        Ok(Self { regex })
    }

    #[inline]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    #[inline]
    pub fn captures<'t>(&self, text: &'t str) -> Option<Captures<'t>> {
        self.regex.captures(text)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// A rule that pulls one or more dimensions toward target values
#[derive(Debug, Clone)]
pub struct TasteRule {
    pattern: Pattern,
    contributions: Vec<(Dimension, f32)>,
}

impl TasteRule {
    /// Contribution values must be finite and within [0, 1]
    pub fn new(pattern: Pattern, contributions: &[(Dimension, f32)]) -> Result<Self> {
        for (dimension, value) in contributions {
            if !(0.0..=1.0).contains(value) {
                return Err(Error::InvalidConfig(format!(
                    "{} target for {} must be within [0, 1], got {}",
                    dimension,
                    pattern.as_str(),
                    value
                )));
            }
        }
        Ok(Self {
            pattern,
            contributions: contributions.to_vec(),
        })
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn contributions(&self) -> &[(Dimension, f32)] {
        &self.contributions
    }

    #[inline]
    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// A pattern with a fixed categorical outcome
#[derive(Debug, Clone)]
pub struct CategoricalRule<T> {
    pub pattern: Pattern,
    pub outcome: T,
}

impl<T> CategoricalRule<T> {
    pub fn new(pattern: Pattern, outcome: T) -> Self {
        Self { pattern, outcome }
    }
}

/// Ordered priority list of categorical rules
#[derive(Debug, Clone)]
pub struct RuleTable<T> {
    rules: Vec<CategoricalRule<T>>,
}

impl<T> Default for RuleTable<T> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

impl<T> RuleTable<T> {
    pub fn new(rules: Vec<CategoricalRule<T>>) -> Self {
        Self { rules }
    }

    /// Append a rule at the lowest priority
    pub fn push(&mut self, pattern: Pattern, outcome: T) {
        self.rules.push(CategoricalRule::new(pattern, outcome));
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rules(&self) -> &[CategoricalRule<T>] {
        &self.rules
    }

    /// First rule in table order whose pattern matches, together with its captures
    pub fn first_match<'t>(&self, text: &'t str) -> Option<(&CategoricalRule<T>, Captures<'t>)> {
        self.rules
            .iter()
            .find_map(|rule| rule.pattern.captures(text).map(|caps| (rule, caps)))
    }

    /// Outcome of the first matching rule
    pub fn first_outcome(&self, text: &str) -> Option<&T> {
        self.rules
            .iter()
            .find(|rule| rule.pattern.is_match(text))
            .map(|rule| &rule.outcome)
    }
}
