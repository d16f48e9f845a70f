//! Prompt parser
//!
//! Turns a free-text prompt into a [`ParseResult`]. Parsing is total: any
//! string, including the empty one, produces a well-formed result.

use crate::tables::RuleTables;
use smallvec::SmallVec;
use sommelier_core::{Dimension, Filters, ParseResult, TasteVector, DIMENSIONS, NEUTRAL_VALUE};
use tracing::debug;

/// Per-dimension list of contributed target values
type Contributions = [SmallVec<[f32; 4]>; DIMENSIONS];

/// Applies [`RuleTables`] to prompts
#[derive(Debug, Clone, Copy)]
pub struct PromptParser<'a> {
    tables: &'a RuleTables,
}

impl PromptParser<'static> {
    /// Parser over the process-wide built-in tables
    pub fn new() -> Self {
        Self {
            tables: RuleTables::global(),
        }
    }
}

impl Default for PromptParser<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> PromptParser<'a> {
    /// Parser over caller-supplied tables
    pub fn with_tables(tables: &'a RuleTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &'a RuleTables {
        self.tables
    }

    /// Parse a prompt into a target vector and filters
    pub fn parse(&self, prompt: &str) -> ParseResult {
        let text = prompt.to_lowercase();
        let target = self.taste_target(&text);
        let filters = self.extract_filters(&text);

        debug!("Parsed prompt ({} chars): target {:?}, filters {:?}", prompt.len(), target, filters);

        ParseResult::new(target, filters)
    }

    /// Aggregate every matching taste rule into a target vector.
    ///
    /// Patterns are case-insensitive, so `text` may be in any case.
    pub fn taste_target(&self, text: &str) -> TasteVector {
        let mut contributions: Contributions = Default::default();
        let mut hits = 0usize;

        for rule in self.tables.taste.iter().filter(|rule| rule.matches(text)) {
            hits += 1;
            for (dimension, value) in rule.contributions() {
                contributions[dimension.index()].push(*value);
            }
        }

        debug!("{} taste rules matched", hits);

        let has_signal = contributions.iter().any(|values| !values.is_empty());
        if !has_signal {
            return TasteVector::default_target();
        }

        let mut data = [NEUTRAL_VALUE; DIMENSIONS];
        for dimension in Dimension::ALL {
            let values = &contributions[dimension.index()];
            if !values.is_empty() {
                data[dimension.index()] = values.iter().sum::<f32>() / values.len() as f32;
            }
        }
        TasteVector::new(data)
    }

    /// Run the four categorical passes. Each pass stops at its own first
    /// match and is independent of the others.
    ///
    /// Patterns are case-insensitive, so `text` may be in any case.
    pub fn extract_filters(&self, text: &str) -> Filters {
        let mut filters = Filters::new();

        if let Some(colour) = self.tables.colour.first_outcome(text) {
            filters.colour = Some((*colour).to_string());
        }

        if let Some(grape) = self.tables.grape.first_outcome(text) {
            filters.grape = Some((*grape).to_string());
        }

        if let Some(origin) = self.tables.region.first_outcome(text) {
            filters.country = Some(origin.country.to_string());
            filters.region = origin.region.map(str::to_string);
        }

        if let Some((rule, caps)) = self.tables.price.first_match(text) {
            if let Some((min, max)) = (rule.outcome)(&caps) {
                filters.price_min = Some(min);
                filters.price_max = Some(max);
            }
        }

        filters
    }
}

/// Parse `prompt` with the built-in tables
pub fn parse_prompt(prompt: &str) -> ParseResult {
    PromptParser::new().parse(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Pattern, TasteRule};
    use sommelier_core::DEFAULT_TARGET;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_empty_prompt_uses_default_target() {
        let result = parse_prompt("");
        assert_eq!(result.target.to_array(), DEFAULT_TARGET);
        assert!(result.filters.is_empty());
    }

    #[test]
    fn test_unmatched_prompt_keeps_filters() {
        // Colour and price extracted without any taste signal
        let result = parse_prompt("something red under $25");
        assert_eq!(result.target.to_array(), DEFAULT_TARGET);
        assert_eq!(result.filters.colour.as_deref(), Some("Red"));
        assert_eq!(result.filters.price_max, Some(25.0));
    }

    #[test]
    fn test_cabernet() {
        let result = parse_prompt("cabernet");
        let t = result.target;

        assert_close(t[Dimension::Tannin], 0.80);
        assert_close(t[Dimension::Body], 0.80);
        assert_close(t[Dimension::Fruit], 0.65);
        assert_close(t[Dimension::Oak], 0.65);
        assert_eq!(t[Dimension::Acidity], NEUTRAL_VALUE);
        assert_eq!(t[Dimension::Sweetness], NEUTRAL_VALUE);
        assert_eq!(t[Dimension::Spice], NEUTRAL_VALUE);

        assert_eq!(result.filters.colour.as_deref(), Some("Red"));
        assert_eq!(result.filters.grape.as_deref(), Some("cabernet sauvignon"));
    }

    #[test]
    fn test_contributions_are_averaged() {
        // light: body 0.25, tannin 0.25; bold: tannin 0.80, body 0.75
        let t = parse_prompt("light but bold").target;
        assert_close(t[Dimension::Body], (0.25 + 0.75) / 2.0);
        assert_close(t[Dimension::Tannin], (0.25 + 0.80) / 2.0);
        assert_eq!(t[Dimension::Oak], NEUTRAL_VALUE);
    }

    #[test]
    fn test_overlapping_words_both_contribute() {
        // "off-dry" also matches the bare "dry" rule across the hyphen
        let t = parse_prompt("off-dry").target;
        assert_close(t[Dimension::Sweetness], (0.08 + 0.40) / 2.0);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(parse_prompt("FRUITY Malbec"), parse_prompt("fruity malbec"));
    }

    #[test]
    fn test_full_example() {
        let result = parse_prompt("red wine, bordeaux, under $30");
        let f = &result.filters;

        assert_eq!(f.colour.as_deref(), Some("Red"));
        assert_eq!(f.country.as_deref(), Some("France"));
        assert_eq!(f.region.as_deref(), Some("Bordeaux"));
        assert_eq!(f.price_min, Some(0.0));
        assert_eq!(f.price_max, Some(30.0));
        assert!(f.grape.is_none());
    }

    #[test]
    fn test_independent_categorical_passes() {
        let f = parse_prompt("a white from italy, or maybe a syrah, about $40").filters;
        assert_eq!(f.colour.as_deref(), Some("White"));
        assert_eq!(f.grape.as_deref(), Some("syrah"));
        assert_eq!(f.country.as_deref(), Some("Italy"));
        assert!(f.region.is_none());
        assert!((f.price_min.unwrap() - 28.0).abs() < 1e-9);
        assert!((f.price_max.unwrap() - 52.0).abs() < 1e-9);
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(parse_prompt("red wine, bordeaux, under $30")).unwrap();
        let filters = &value["filters"];

        assert_eq!(filters["colour"], "Red");
        assert_eq!(filters["country"], "France");
        assert_eq!(filters["region"], "Bordeaux");
        assert_eq!(filters["priceMin"], 0.0);
        assert_eq!(filters["priceMax"], 30.0);
        assert!(filters.get("grape").is_none());
        assert!(filters.get("price_min").is_none());
        assert_eq!(value["target"].as_array().unwrap().len(), DIMENSIONS);
    }

    #[test]
    fn test_mixed_case_text_without_parse() {
        let parser = PromptParser::new();
        let filters = parser.extract_filters("A Crisp RIESLING from Mosel");
        assert_eq!(filters.grape.as_deref(), Some("riesling"));
        assert_eq!(filters.region.as_deref(), Some("Mosel"));
        assert_eq!(parser.taste_target("CRISP"), parser.taste_target("crisp"));
    }

    #[test]
    fn test_idempotent() {
        let prompt = "a fruity, full-bodied red under $20";
        assert_eq!(parse_prompt(prompt), parse_prompt(prompt));
    }

    #[test]
    fn test_target_always_in_unit_range() {
        let prompts = [
            "",
            "sweet dry light heavy crisp mellow bold silky fruity earthy oaky unoaked spicy",
            "cabernet pinot noir merlot chardonnay riesling sauvignon blanc malbec syrah",
            "rosé from the rhône",
            "🍷🍷🍷",
            "$$$ -- to to 12345678901234567890",
        ];
        for prompt in prompts {
            let target = parse_prompt(prompt).target;
            assert_eq!(target.as_slice().len(), DIMENSIONS);
            for value in target.as_slice() {
                assert!(value.is_finite() && (0.0..=1.0).contains(value), "{} in {:?}", value, prompt);
            }
        }
    }

    #[test]
    fn test_custom_tables() {
        let mut tables = RuleTables::default();
        tables.taste.push(
            TasteRule::new(Pattern::words(&["tannic"]).unwrap(), &[(Dimension::Tannin, 1.0)]).unwrap(),
        );
        tables.colour.push(Pattern::words(&["orange"]).unwrap(), "Orange");

        let parser = PromptParser::with_tables(&tables);
        let result = parser.parse("tannic orange wine");

        assert_eq!(result.target[Dimension::Tannin], 1.0);
        assert_eq!(result.target[Dimension::Body], NEUTRAL_VALUE);
        assert_eq!(result.filters.colour.as_deref(), Some("Orange"));
        assert!(result.filters.grape.is_none());
    }
}
