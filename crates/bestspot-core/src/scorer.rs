// crates/bestspot-core/src/scorer.rs

use crate::config::{PreferenceRange, ScoringConstants};
use crate::types::{CriterionScore, Measurement};

/// Scores a single zone/criterion pair against a preference range.
///
/// Missing data earns the full no-data penalty (the user asked for this
/// criterion and the zone cannot answer). Values inside `[min, max]` earn
/// the maximum score. Values outside lose `out_of_range_factor` points per
/// unit of distance from the nearest bound, floored at zero.
///
/// Pure function: no side effects, no I/O.
pub fn score_criterion(
    actual: Measurement,
    range: &PreferenceRange,
    constants: &ScoringConstants,
) -> CriterionScore {
    let Measurement::Measured(value) = actual else {
        return CriterionScore {
            value: constants.no_data_penalty,
            met: false,
        };
    };

    if range.contains(value) {
        return CriterionScore {
            value: constants.max_score,
            met: true,
        };
    }

    let diff = if value < range.min {
        range.min - value
    } else {
        value - range.max
    };
    let score = (constants.max_score - diff * constants.out_of_range_factor).max(0.0);
    CriterionScore { value: score, met: false }
}
