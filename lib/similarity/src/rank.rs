//! Ranking of candidate items against a target vector
//!
//! Scores every candidate with [`similarity`], drops those under the
//! configured floor, keeps the best `top_k` and attaches a match reason.

use crate::distance::similarity;
use crate::explain::match_reason;
use rayon::prelude::*;
use serde::Serialize;
use sommelier_core::{RankingConfig, Result, TasteVector, Tasted};
use tracing::debug;

/// Candidate sets at least this large are scored on the rayon pool
const PARALLEL_THRESHOLD: usize = 4096;

/// A scored candidate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResult<T> {
    pub item: T,
    /// Similarity to the target in `[0, 1]`
    pub score: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Ranks candidates by taste similarity
#[derive(Debug, Clone, Default)]
pub struct Ranker {
    config: RankingConfig,
}

impl Ranker {
    /// Create a ranker after validating its configuration
    pub fn new(config: RankingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Score, filter, sort and truncate `candidates`.
    ///
    /// Results are sorted by score descending; equal scores keep input order.
    pub fn rank<T>(&self, target: &TasteVector, candidates: Vec<T>) -> Vec<RankedResult<T>>
    where
        T: Tasted + Send,
    {
        let total = candidates.len();
        let min_score = self.config.min_score;

        let keep = |item: T| {
            let score = similarity(target, item.taste());
            (score >= min_score).then_some((item, score))
        };

        let mut scored: Vec<(T, f32)> = if total >= PARALLEL_THRESHOLD {
            candidates.into_par_iter().filter_map(keep).collect()
        } else {
            candidates.into_iter().filter_map(keep).collect()
        };

        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(self.config.top_k);

        debug!("Ranked {} candidates, kept {}", total, scored.len());

        scored
            .into_iter()
            .map(|(item, score)| {
                let reason = self
                    .config
                    .explain
                    .then(|| match_reason(target, item.taste()));
                RankedResult { item, score, reason }
            })
            .collect()
    }
}

/// Summary statistics for one ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingStats {
    /// Number of candidates considered
    pub candidates_count: usize,
    /// Number of results returned
    pub results_count: usize,
    /// Average score of results
    pub avg_score: f32,
    /// Score of best result
    pub best_score: f32,
    /// Match reason of the best result
    pub top_reason: Option<String>,
}

impl RankingStats {
    /// Compute stats from results sorted best first
    pub fn compute<T>(results: &[RankedResult<T>], candidates_count: usize) -> Self {
        let Some(best) = results.first() else {
            return Self {
                candidates_count,
                results_count: 0,
                avg_score: 0.0,
                best_score: 0.0,
                top_reason: None,
            };
        };

        let avg_score = results.iter().map(|r| r.score).sum::<f32>() / results.len() as f32;

        Self {
            candidates_count,
            results_count: results.len(),
            avg_score,
            best_score: best.score,
            top_reason: best.reason.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sommelier_core::Error;

    struct Bottle {
        name: &'static str,
        vector: Vec<f32>,
    }

    impl Tasted for Bottle {
        fn taste(&self) -> &[f32] {
            &self.vector
        }
    }

    fn bottle(name: &'static str, vector: &[f32]) -> Bottle {
        Bottle { name, vector: vector.to_vec() }
    }

    fn target() -> TasteVector {
        TasteVector::new([0.8, 0.5, 0.1, 0.8, 0.7, 0.6, 0.5])
    }

    #[test]
    fn test_rank_sorting() {
        let ranker = Ranker::default();
        let candidates = vec![
            bottle("far", &[0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 1.0]),
            bottle("exact", &[0.8, 0.5, 0.1, 0.8, 0.7, 0.6, 0.5]),
            bottle("near", &[0.7, 0.5, 0.2, 0.8, 0.7, 0.5, 0.5]),
        ];

        let results = ranker.rank(&target(), candidates);
        let names: Vec<&str> = results.iter().map(|r| r.item.name).collect();

        assert_eq!(names, vec!["exact", "near", "far"]);
        assert_eq!(results[0].score, 1.0);
        assert!(results.iter().all(|r| r.reason.is_some()));
    }

    #[test]
    fn test_ties_keep_input_order() {
        let ranker = Ranker::default();
        let same = [0.5f32; 7];
        let candidates = vec![bottle("a", &same), bottle("b", &same), bottle("c", &same)];

        let results = ranker.rank(&target(), candidates);
        let names: Vec<&str> = results.iter().map(|r| r.item.name).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_top_k_and_min_score() {
        let config = RankingConfig::default().with_top_k(1).with_min_score(0.5);
        let ranker = Ranker::new(config).unwrap();
        let candidates = vec![
            bottle("far", &[0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 1.0]),
            bottle("near", &[0.7, 0.5, 0.2, 0.8, 0.7, 0.5, 0.5]),
            bottle("exact", &[0.8, 0.5, 0.1, 0.8, 0.7, 0.6, 0.5]),
        ];

        let results = ranker.rank(&target(), candidates);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].item.name, "exact");
    }

    #[test]
    fn test_without_explanations() {
        let ranker = Ranker::new(RankingConfig::default().with_explain(false)).unwrap();
        let results = ranker.rank(&target(), vec![vec![0.5f32; 7]]);
        assert!(results[0].reason.is_none());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = Ranker::new(RankingConfig::default().with_top_k(0)).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_parallel_path_matches_sequential() {
        let ranker = Ranker::new(RankingConfig::default().with_top_k(5)).unwrap();
        let candidates: Vec<Vec<f32>> = (0..PARALLEL_THRESHOLD + 10)
            .map(|i| {
                let x = (i % 100) as f32 / 100.0;
                vec![x, 1.0 - x, x, x, 1.0 - x, x, 0.5]
            })
            .collect();

        let parallel = ranker.rank(&target(), candidates.clone());
        let sequential = ranker.rank(&target(), candidates[..PARALLEL_THRESHOLD - 1].to_vec());

        // The first PARALLEL_THRESHOLD - 1 items already contain every distinct vector
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_stats() {
        let ranker = Ranker::default();
        let candidates = vec![
            bottle("exact", &[0.8, 0.5, 0.1, 0.8, 0.7, 0.6, 0.5]),
            bottle("near", &[0.7, 0.5, 0.2, 0.8, 0.7, 0.5, 0.5]),
        ];
        let results = ranker.rank(&target(), candidates);
        let stats = RankingStats::compute(&results, 2);

        assert_eq!(stats.candidates_count, 2);
        assert_eq!(stats.results_count, 2);
        assert_eq!(stats.best_score, 1.0);
        assert!(stats.avg_score < 1.0 && stats.avg_score > 0.9);
        assert_eq!(stats.top_reason, results[0].reason);
    }

    #[test]
    fn test_empty_stats() {
        let stats = RankingStats::compute::<Vec<f32>>(&[], 5);
        assert_eq!(stats.candidates_count, 5);
        assert_eq!(stats.results_count, 0);
        assert_eq!(stats.best_score, 0.0);
        assert!(stats.top_reason.is_none());
    }

    #[test]
    fn test_result_serialization() {
        let result = RankedResult {
            item: "Chateau Test",
            score: 0.9,
            reason: Some("bold tannins".to_string()),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["item"], "Chateau Test");
        assert_eq!(json["reason"], "bold tannins");
    }
}
