//! Built-in rule tables
//!
//! Five tables, built once per process and shared read-only:
//!
//! | table  | evaluation            | outcome                         |
//! |--------|-----------------------|---------------------------------|
//! | taste  | every match applies   | dimension targets               |
//! | colour | first match wins      | colour label                    |
//! | grape  | first match wins      | canonical grape name            |
//! | region | first match wins      | country, optional region        |
//! | price  | first match wins      | `[min, max]` from the match     |
//!
//! Categorical order is a priority encoding: in the colour table the
//! explicit colour words come before the grape-derived colours, and in the
//! region table named regions come before bare country names.

use crate::rules::{CategoricalRule, Pattern, RuleTable, TasteRule};
use regex::Captures;
use sommelier_core::Dimension::{self, Acidity, Body, Fruit, Oak, Spice, Sweetness, Tannin};
use sommelier_core::Result;
use std::sync::OnceLock;

/// Upper bound used by open-ended price rules such as "over $X"
pub const OPEN_PRICE_CEILING: f64 = 9999.0;

/// Country and optional region emitted by a region rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Origin {
    pub country: &'static str,
    pub region: Option<&'static str>,
}

/// Turns the captures of a price pattern into `(min, max)`
pub type PriceExtractor = fn(&Captures<'_>) -> Option<(f64, f64)>;

type TasteEntry = (&'static [&'static str], &'static [(Dimension, f32)]);

const TASTE_RULES: &[TasteEntry] = &[
    // Body / weight
    (&["light", "light-bodied", "lightweight", "thin", "delicate"], &[(Body, 0.25), (Tannin, 0.25)]),
    (&["medium-bodied", "medium body", "balanced"], &[(Body, 0.55)]),
    (&["full-bodied", "full body", "big", "heavy", "rich", "robust"], &[(Body, 0.85), (Tannin, 0.70)]),
    // Sweetness
    (&["dry", "bone dry", "very dry", "brut"], &[(Sweetness, 0.08)]),
    (&["off-dry", "slightly sweet", "hint of sweet"], &[(Sweetness, 0.40)]),
    (&["sweet", "dessert wine"], &[(Sweetness, 0.75)]),
    // Acidity
    (&["crisp", "bright", "zesty", "tart", "acidic", "refreshing"], &[(Acidity, 0.80)]),
    (&["mellow", "round", "soft", "smooth"], &[(Acidity, 0.35), (Tannin, 0.25)]),
    // Tannin
    (&["tannic", "bold", "structured", "grippy", "powerful"], &[(Tannin, 0.80), (Body, 0.75)]),
    (&["silky", "velvety", "gentle", "easy drinking", "easy-drinking"], &[(Tannin, 0.20)]),
    // Fruit
    (&["fruity", "fruit-forward", "fruit forward", "juicy", "jammy"], &[(Fruit, 0.85)]),
    (&["earthy", "mineral", "minerally", "savory", "savoury"], &[(Fruit, 0.30), (Spice, 0.55)]),
    // Oak
    (&["oaky", "oaked", "vanilla", "toasty", "buttery"], &[(Oak, 0.75)]),
    (&["unoaked", "un-oaked", "no oak", "stainless"], &[(Oak, 0.08)]),
    // Spice
    (&["spicy", "peppery", "complex", "herbal"], &[(Spice, 0.75)]),
    // Grape profiles
    (&["cabernet"], &[(Tannin, 0.80), (Body, 0.80), (Fruit, 0.65), (Oak, 0.65)]),
    (&["pinot noir"], &[(Tannin, 0.35), (Acidity, 0.70), (Body, 0.45), (Fruit, 0.80)]),
    (&["merlot"], &[(Tannin, 0.55), (Body, 0.65), (Fruit, 0.75), (Oak, 0.50)]),
    (&["chardonnay"], &[(Tannin, 0.05), (Acidity, 0.60), (Body, 0.60), (Fruit, 0.70), (Oak, 0.50)]),
    (&["riesling"], &[(Tannin, 0.03), (Acidity, 0.85), (Sweetness, 0.30), (Fruit, 0.80)]),
    (&["sauvignon blanc"], &[(Tannin, 0.05), (Acidity, 0.85), (Body, 0.40), (Fruit, 0.75)]),
    (&["malbec"], &[(Tannin, 0.65), (Body, 0.80), (Fruit, 0.80), (Oak, 0.55)]),
    (&["syrah", "shiraz"], &[(Tannin, 0.72), (Body, 0.82), (Fruit, 0.75), (Spice, 0.78)]),
    (&["pinot grigio"], &[(Tannin, 0.05), (Acidity, 0.70), (Body, 0.35), (Fruit, 0.65)]),
    (&["moscato"], &[(Tannin, 0.03), (Acidity, 0.55), (Sweetness, 0.70), (Body, 0.30), (Fruit, 0.85)]),
    (&["zinfandel"], &[(Tannin, 0.60), (Body, 0.75), (Fruit, 0.85), (Spice, 0.65)]),
    (&["prosecco"], &[(Tannin, 0.03), (Acidity, 0.70), (Sweetness, 0.25), (Body, 0.30), (Fruit, 0.70)]),
    (&["sangiovese"], &[(Tannin, 0.65), (Acidity, 0.70), (Body, 0.65), (Fruit, 0.65), (Spice, 0.55)]),
    (&["tempranillo"], &[(Tannin, 0.60), (Body, 0.70), (Fruit, 0.65), (Oak, 0.60), (Spice, 0.55)]),
    // Colour profiles
    (&["red wine"], &[(Tannin, 0.60), (Body, 0.65), (Fruit, 0.70), (Oak, 0.45)]),
    (&["white wine"], &[(Tannin, 0.05), (Acidity, 0.65), (Body, 0.40), (Fruit, 0.70)]),
    (&["rose", "rosé"], &[(Tannin, 0.15), (Acidity, 0.60), (Body, 0.35), (Fruit, 0.75)]),
];

const COLOUR_RULES: &[(&[&str], &str)] = &[
    (&["red"], "Red"),
    (&["white"], "White"),
    (&["rose", "rosé", "rosado"], "Rose"),
    (&["sparkling"], "Sparkling"),
    (
        &[
            "cabernet", "merlot", "pinot noir", "syrah", "shiraz", "malbec",
            "tempranillo", "sangiovese", "nebbiolo", "zinfandel",
        ],
        "Red",
    ),
    (
        &[
            "chardonnay", "riesling", "sauvignon blanc", "pinot grigio", "pinot gris",
            "gewurztraminer", "viognier", "moscato",
        ],
        "White",
    ),
    (&["prosecco"], "Sparkling"),
];

const GRAPE_RULES: &[(&[&str], &str)] = &[
    (&["cabernet sauvignon"], "cabernet sauvignon"),
    (&["cabernet"], "cabernet sauvignon"),
    (&["pinot noir"], "pinot noir"),
    (&["merlot"], "merlot"),
    (&["chardonnay"], "chardonnay"),
    (&["riesling"], "riesling"),
    (&["sauvignon blanc"], "sauvignon blanc"),
    (&["malbec"], "malbec"),
    (&["syrah", "shiraz"], "syrah"),
    (&["pinot grigio"], "pinot grigio"),
    (&["moscato"], "moscato"),
    (&["zinfandel"], "zinfandel"),
    (&["prosecco"], "glera"),
    (&["sangiovese"], "sangiovese"),
    (&["tempranillo"], "tempranillo"),
    (&["nebbiolo"], "nebbiolo"),
    (&["gewurztraminer"], "gewurztraminer"),
    (&["viognier"], "viognier"),
];

const REGION_RULES: &[(&[&str], &str, Option<&str>)] = &[
    (&["bordeaux"], "France", Some("Bordeaux")),
    (&["burgundy", "bourgogne"], "France", Some("Burgundy")),
    (&["rhone", "rhône"], "France", Some("Rhone")),
    (&["napa"], "United States", Some("California")),
    (&["california"], "United States", Some("California")),
    (&["oregon"], "United States", Some("Oregon")),
    (&["finger lakes"], "United States", Some("New York")),
    (&["tuscany", "toscana"], "Italy", Some("Tuscany")),
    (&["piedmont", "piemonte"], "Italy", Some("Piedmont")),
    (&["rioja"], "Spain", Some("Rioja")),
    (&["mendoza"], "Argentina", Some("Mendoza")),
    (&["marlborough"], "New Zealand", Some("Marlborough")),
    (&["barossa"], "Australia", Some("South Australia")),
    (&["mosel"], "Germany", Some("Mosel")),
    (&["douro"], "Portugal", Some("Douro")),
    // Country only
    (&["italy", "italian"], "Italy", None),
    (&["france", "french"], "France", None),
    (&["spain", "spanish"], "Spain", None),
    (&["australia", "australian"], "Australia", None),
    (&["argentina", "argentine", "argentinian"], "Argentina", None),
    (&["chile", "chilean"], "Chile", None),
    (&["south africa", "south african"], "South Africa", None),
];

const PRICE_RULES: &[(&str, PriceExtractor)] = &[
    (r"under\s*\$?([0-9]+)", up_to),
    (r"below\s*\$?([0-9]+)", up_to),
    (r"less than\s*\$?([0-9]+)", up_to),
    (r"\$?([0-9]+)\s*[-–to]+\s*\$?([0-9]+)", between),
    (r"around\s*\$?([0-9]+)", around),
    (r"about\s*\$?([0-9]+)", around),
    (r"over\s*\$?([0-9]+)", at_least),
    (r"above\s*\$?([0-9]+)", at_least),
];

fn amount(caps: &Captures<'_>, group: usize) -> Option<f64> {
    caps.get(group)?.as_str().parse().ok()
}

fn up_to(caps: &Captures<'_>) -> Option<(f64, f64)> {
    Some((0.0, amount(caps, 1)?))
}

fn between(caps: &Captures<'_>) -> Option<(f64, f64)> {
    Some((amount(caps, 1)?, amount(caps, 2)?))
}

fn around(caps: &Captures<'_>) -> Option<(f64, f64)> {
    let x = amount(caps, 1)?;
    Some((x * 0.7, x * 1.3))
}

fn at_least(caps: &Captures<'_>) -> Option<(f64, f64)> {
    Some((amount(caps, 1)?, OPEN_PRICE_CEILING))
}

/// The five rule tables used by the prompt parser
#[derive(Debug, Clone, Default)]
pub struct RuleTables {
    pub taste: Vec<TasteRule>,
    pub colour: RuleTable<&'static str>,
    pub grape: RuleTable<&'static str>,
    pub region: RuleTable<Origin>,
    pub price: RuleTable<PriceExtractor>,
}

static BUILTIN_TABLES: OnceLock<RuleTables> = OnceLock::new();

impl RuleTables {
    /// Compile the built-in tables
    pub fn builtin() -> Result<Self> {
        let taste = TASTE_RULES
            .iter()
            .map(|(words, contributions)| TasteRule::new(Pattern::words(words)?, contributions))
            .collect::<Result<Vec<_>>>()?;

        let colour = labelled(COLOUR_RULES)?;
        let grape = labelled(GRAPE_RULES)?;

        let region = REGION_RULES
            .iter()
            .map(|(words, country, region)| -> Result<_> {
                Ok(CategoricalRule::new(
                    Pattern::words(words)?,
                    Origin { country: *country, region: *region },
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        let price = PRICE_RULES
            .iter()
            .map(|(source, extractor)| -> Result<_> {
                Ok(CategoricalRule::new(Pattern::regex(source)?, *extractor))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            taste,
            colour,
            grape,
            region: RuleTable::new(region),
            price: RuleTable::new(price),
        })
    }

    /// Process-wide built-in tables, compiled on first use
    pub fn global() -> &'static RuleTables {
        BUILTIN_TABLES.get_or_init(|| {
            // Built-in patterns are literals covered by `test_builtin_tables_compile`
            RuleTables::builtin().expect("built-in rule tables must compile")
        })
    }
}

fn labelled(entries: &[(&[&str], &'static str)]) -> Result<RuleTable<&'static str>> {
    let rules = entries
        .iter()
        .map(|(words, label)| -> Result<_> {
            Ok(CategoricalRule::new(Pattern::words(words)?, *label))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(RuleTable::new(rules))
}
