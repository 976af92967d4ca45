// crates/bestspot-core/src/feels_like.rs

use std::cmp::Ordering;

use bestspot_parser::FeelsLikeEntry;

use crate::types::Measurement;

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Ambient-to-perceived temperature lookup table, built once per session and
/// immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct FeelsLikeTable {
    entries: Vec<FeelsLikeEntry>,
}

impl FeelsLikeTable {
    /// Sorts by ambient temperature ascending. The sort is stable, so among
    /// equal ambient keys the original row order is preserved and the
    /// first-seen tie-break of `lookup` stays well defined.
    pub fn new(mut entries: Vec<FeelsLikeEntry>) -> Self {
        entries.sort_by(|a, b| {
            a.ambient_temp
                .partial_cmp(&b.ambient_temp)
                .unwrap_or(Ordering::Equal)
        });
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Perceived temperature for an ambient reading: the `feels_like` value
    /// of the entry with minimal absolute ambient difference, rounded to two
    /// decimal places. On an exact distance tie the entry encountered first
    /// during the scan wins. `Unavailable` when the table is empty or the
    /// input has no numeric value.
    pub fn lookup(&self, ambient: Measurement) -> Measurement {
        let Measurement::Measured(target) = ambient else {
            return Measurement::Unavailable;
        };

        let mut best: Option<(f64, f64)> = None;
        for entry in &self.entries {
            let diff = (entry.ambient_temp - target).abs();
            match best {
                Some((best_diff, _)) if diff >= best_diff => {}
                _ => best = Some((diff, entry.feels_like)),
            }
        }

        match best {
            Some((_, feels_like)) => Measurement::Measured(round2(feels_like)),
            None => Measurement::Unavailable,
        }
    }
}
