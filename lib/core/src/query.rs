use crate::filter::Filters;
use crate::vector::TasteVector;
use serde::{Deserialize, Serialize};

/// Structured query produced from one prompt: a ranking target plus
/// the filters the catalog should pre-select with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    pub target: TasteVector,
    pub filters: Filters,
}

impl ParseResult {
    pub fn new(target: TasteVector, filters: Filters) -> Self {
        Self { target, filters }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_result_json_shape() {
        let result = ParseResult::new(
            TasteVector::default_target(),
            Filters::new().with_colour("White"),
        );
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["target"].as_array().map(|a| a.len()), Some(7));
        assert_eq!(value["filters"], json!({"colour": "White"}));
    }
}
