// crates/bestspot-core/src/ranker.rs

use std::cmp::Ordering;
use std::collections::HashMap;

use bestspot_parser::ZoneReading;
use tracing::{debug, warn};

use crate::config::{EngineConfig, PreferenceRange, ScoringConstants};
use crate::duration::describe_duration;
use crate::feels_like::FeelsLikeTable;
use crate::scorer::score_criterion;
use crate::stats::office_hours_average;
use crate::types::{
    Measurement, PreferenceSelection, Rank, ScoredZone, SensorKind, SensorTriple,
};

/// Placeholder markers used, in slot order, when fewer than three real zones
/// exist.
const PLACEHOLDER_MARKERS: [&str; 3] = ["No Data", "Unavailable", "Fallback"];

/// Scores every zone in the union of the three sensor datasets and returns
/// exactly three ranked entries, padding with placeholder zones when the
/// data cannot fill the podium. The ranker owns `ScoredZone` creation; it
/// performs no storage.
pub fn rank_zones(
    readings: &SensorTriple<Vec<ZoneReading>>,
    feels_like: &FeelsLikeTable,
    selection: &PreferenceSelection,
    config: &EngineConfig,
) -> Vec<ScoredZone> {
    let resolved = resolve_selection(selection, config);

    // Union of zone ids in first-encountered order: light, noise, then
    // temperature. This order is the final tie-break of the ranking.
    let mut union_order: Vec<&str> = Vec::new();
    let mut by_zone: SensorTriple<HashMap<&str, &ZoneReading>> = SensorTriple::default();
    for kind in SensorKind::ALL {
        let map = by_zone.get_mut(kind);
        for reading in readings.get(kind) {
            let zone_id = reading.zone_id.as_str();
            if map.insert(zone_id, reading).is_some() {
                warn!(sensor = %kind, zone = zone_id, "duplicate zone row, keeping the last one");
            }
            if !union_order.contains(&zone_id) {
                union_order.push(zone_id);
            }
        }
    }

    let mut scored: Vec<ScoredZone> = union_order
        .iter()
        .map(|zone_id| score_zone(zone_id, &by_zone, feels_like, &resolved, config))
        .collect();

    debug!(zones = scored.len(), "scored union of sensor datasets");

    // Stable sort: full ties keep the union enumeration order.
    scored.sort_by(|a, b| {
        b.comfort_score
            .partial_cmp(&a.comfort_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.criteria_met_count.cmp(&a.criteria_met_count))
    });

    let mut ranked: Vec<ScoredZone> = Vec::with_capacity(3);
    for (position, mut zone) in scored.into_iter().take(3).enumerate() {
        zone.rank = positional_rank(position);
        ranked.push(zone);
    }
    while ranked.len() < 3 {
        ranked.push(placeholder_zone(ranked.len()));
    }
    ranked
}

struct ResolvedSelection {
    ranges: SensorTriple<Option<PreferenceRange>>,
    selected_count: u32,
}

/// Maps selected option names to their threshold ranges. Unknown option
/// names are not an error: they are logged and treated as unselected so the
/// pipeline always produces a well-formed result.
fn resolve_selection(selection: &PreferenceSelection, config: &EngineConfig) -> ResolvedSelection {
    let mut ranges: SensorTriple<Option<PreferenceRange>> = SensorTriple::default();
    let mut selected_count = 0u32;

    let names: SensorTriple<Option<&String>> = SensorTriple {
        light: selection.lighting.as_ref(),
        noise: selection.noise.as_ref(),
        temperature: selection.temperature.as_ref(),
    };

    for kind in SensorKind::ALL {
        let Some(option) = names.get(kind) else {
            continue;
        };
        match config.range_for(kind, option) {
            Some(range) => {
                *ranges.get_mut(kind) = Some(*range);
                selected_count += 1;
            }
            None => warn!(
                family = %kind,
                option = option.as_str(),
                "unknown preference option, treating the family as unselected"
            ),
        }
    }

    ResolvedSelection {
        ranges,
        selected_count,
    }
}

fn score_zone(
    zone_id: &str,
    by_zone: &SensorTriple<HashMap<&str, &ZoneReading>>,
    feels_like: &FeelsLikeTable,
    resolved: &ResolvedSelection,
    config: &EngineConfig,
) -> ScoredZone {
    let mut averages: SensorTriple<Measurement> = SensorTriple {
        light: Measurement::Unavailable,
        noise: Measurement::Unavailable,
        temperature: Measurement::Unavailable,
    };
    for kind in SensorKind::ALL {
        if let Some(reading) = by_zone.get(kind).get(zone_id) {
            *averages.get_mut(kind) =
                office_hours_average(reading, &config.period_weights, &config.office_hours);
        }
    }

    let feels_like_temp = feels_like.lookup(averages.temperature);

    let mut original_comfort_score = 0.0;
    let mut criteria_met_count = 0u32;
    let mut scores: SensorTriple<Option<f64>> = SensorTriple::default();
    let mut met_criteria: SensorTriple<bool> = SensorTriple::default();
    let mut duration_text: SensorTriple<Option<String>> = SensorTriple::default();

    for kind in SensorKind::ALL {
        let Some(range) = resolved.ranges.get(kind) else {
            continue;
        };
        let score = score_criterion(*averages.get(kind), range, &config.scoring);
        original_comfort_score += score.value;
        *scores.get_mut(kind) = Some(score.value);
        *met_criteria.get_mut(kind) = score.met;
        if score.met {
            criteria_met_count += 1;
        }
        *duration_text.get_mut(kind) = by_zone.get(kind).get(zone_id).map(|reading| {
            describe_duration(reading, range, &config.period_weights, &config.office_hours)
        });
    }

    let comfort_score = normalize_comfort(
        original_comfort_score,
        resolved.selected_count,
        criteria_met_count,
        &config.scoring,
    );

    ScoredZone {
        zone_id: zone_id.to_string(),
        light: averages.light,
        noise: averages.noise,
        temperature: averages.temperature,
        feels_like_temp,
        original_comfort_score,
        comfort_score,
        criteria_met_count,
        scores,
        met_criteria,
        duration_text,
        // Placeholder until the final ranking pass assigns positions.
        rank: Rank::InfoUnavailable,
    }
}

/// Normalizes the raw comfort score into `[0, 1]`.
fn normalize_comfort(original: f64, selected: u32, met: u32, constants: &ScoringConstants) -> f64 {
    if selected == 0 {
        return bucket_score(original);
    }
    if met == selected {
        return 1.0;
    }
    if met > 0 {
        return 0.5 + (f64::from(met) / f64::from(selected)) * 0.5;
    }

    // No criteria met but data was scored: rescale between the theoretical
    // minimum and maximum, then cap below 0.4.
    let min = f64::from(selected) * constants.no_data_penalty;
    let max = f64::from(selected) * constants.max_score;
    let span = max - min;
    if span <= 0.0 {
        return 0.0;
    }
    ((original - min) / span).clamp(0.0, 1.0) * 0.4
}

/// Bucketed heuristic used when no preferences were selected at all. The
/// raw-score thresholds (250/150/50/0) are inherited product behavior; do
/// not retune without product input.
fn bucket_score(original: f64) -> f64 {
    if original >= 250.0 {
        1.0
    } else if original >= 150.0 {
        0.8
    } else if original >= 50.0 {
        0.6
    } else if original > 0.0 {
        0.4
    } else if original == 0.0 {
        0.2
    } else {
        0.0
    }
}

fn positional_rank(position: usize) -> Rank {
    match position {
        0 => Rank::BestMatch,
        1 => Rank::SecondChoice,
        _ => Rank::ThirdChoice,
    }
}

fn placeholder_zone(slot: usize) -> ScoredZone {
    let marker = PLACEHOLDER_MARKERS[slot.min(PLACEHOLDER_MARKERS.len() - 1)];
    ScoredZone {
        zone_id: format!("Zone {} ({})", slot + 1, marker),
        light: Measurement::Unavailable,
        noise: Measurement::Unavailable,
        temperature: Measurement::Unavailable,
        feels_like_temp: Measurement::Unavailable,
        original_comfort_score: f64::NEG_INFINITY,
        comfort_score: 0.0,
        criteria_met_count: 0,
        scores: SensorTriple::default(),
        met_criteria: SensorTriple::default(),
        duration_text: SensorTriple::default(),
        rank: Rank::InfoUnavailable,
    }
}
