// crates/bestspot-core/src/pipeline.rs

use bestspot_parser::{parse_feels_like, parse_zone_readings, ZoneReading};
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::feels_like::FeelsLikeTable;
use crate::ranker::rank_zones;
use crate::types::{PreferenceSelection, Recommendation, SensorKind, SensorTriple};

/// Raw CSV texts for one recommendation run. `None` means the source could
/// not be fetched; the pipeline treats it as an empty dataset.
#[derive(Debug, Clone, Default)]
pub struct SensorCsvBundle {
    pub light: Option<String>,
    pub noise: Option<String>,
    pub temperature: Option<String>,
    pub feels_like: Option<String>,
}

/// Runs the full scoring pipeline: parse, average, score, rank. Infallible
/// by design — every malformed or missing input degrades to an empty dataset
/// with a diagnostic, and the output always holds exactly three entries.
/// Deterministic for identical inputs.
pub fn recommend(
    bundle: &SensorCsvBundle,
    selection: &PreferenceSelection,
    config: &EngineConfig,
) -> Recommendation {
    let readings = SensorTriple {
        light: parse_or_empty(SensorKind::Light, bundle.light.as_deref()),
        noise: parse_or_empty(SensorKind::Noise, bundle.noise.as_deref()),
        temperature: parse_or_empty(SensorKind::Temperature, bundle.temperature.as_deref()),
    };

    let feels_like_entries = match bundle.feels_like.as_deref() {
        Some(text) => match parse_feels_like(text) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(error = %err, "failed to parse feels-like CSV, lookups will return N/A");
                Vec::new()
            }
        },
        None => Vec::new(),
    };
    let feels_like = FeelsLikeTable::new(feels_like_entries);

    let zones = rank_zones(&readings, &feels_like, selection, config);
    Recommendation { zones }
}

fn parse_or_empty(kind: SensorKind, text: Option<&str>) -> Vec<ZoneReading> {
    let Some(text) = text else {
        debug!(sensor = %kind, "no CSV supplied, treating as empty dataset");
        return Vec::new();
    };
    match parse_zone_readings(text) {
        Ok(readings) => {
            debug!(sensor = %kind, zones = readings.len(), "parsed sensor dataset");
            readings
        }
        Err(err) => {
            warn!(
                sensor = %kind,
                error = %err,
                "failed to parse sensor CSV, continuing with empty dataset"
            );
            Vec::new()
        }
    }
}
