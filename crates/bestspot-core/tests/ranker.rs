use bestspot_core::config::EngineConfig;
use bestspot_core::feels_like::FeelsLikeTable;
use bestspot_core::ranker::rank_zones;
use bestspot_core::types::{Measurement, PreferenceSelection, Rank, SensorTriple};
use bestspot_parser::{FeelsLikeEntry, TimeKey, ZoneReading};

fn hourly_reading(zone_id: &str, value: f64) -> ZoneReading {
    let mut reading = ZoneReading::new(zone_id);
    for hour in 0u8..24 {
        reading.push(TimeKey::Hour(hour), Some(value));
    }
    reading
}

fn select_all() -> PreferenceSelection {
    PreferenceSelection {
        lighting: Some("well-lit".to_string()),
        noise: Some("focus-work".to_string()),
        temperature: Some("stable-comfortable".to_string()),
    }
}

fn datasets(
    light: Vec<ZoneReading>,
    noise: Vec<ZoneReading>,
    temperature: Vec<ZoneReading>,
) -> SensorTriple<Vec<ZoneReading>> {
    SensorTriple {
        light,
        noise,
        temperature,
    }
}

#[test]
fn zone_meeting_all_criteria_scores_one_and_ranks_first() {
    let readings = datasets(
        vec![hourly_reading("A", 700.0), hourly_reading("B", 100.0)],
        vec![hourly_reading("A", 40.0), hourly_reading("B", 80.0)],
        vec![hourly_reading("A", 22.0), hourly_reading("B", 30.0)],
    );

    let ranked = rank_zones(
        &readings,
        &FeelsLikeTable::default(),
        &select_all(),
        &EngineConfig::default(),
    );

    assert_eq!(ranked.len(), 3);
    assert_eq!(ranked[0].zone_id, "A");
    assert_eq!(ranked[0].comfort_score, 1.0);
    assert_eq!(ranked[0].criteria_met_count, 3);
    assert_eq!(ranked[0].rank, Rank::BestMatch);
    assert!(ranked[0].met_criteria.light);
    assert!(ranked[0].met_criteria.noise);
    assert!(ranked[0].met_criteria.temperature);
    assert_eq!(ranked[0].scores.light, Some(100.0));
}

#[test]
fn partially_met_zone_uses_ratio_formula() {
    // Light and temperature met, noise far off: 0.5 + (2/3) * 0.5.
    let readings = datasets(
        vec![hourly_reading("A", 700.0)],
        vec![hourly_reading("A", 80.0)],
        vec![hourly_reading("A", 22.0)],
    );

    let ranked = rank_zones(
        &readings,
        &FeelsLikeTable::default(),
        &select_all(),
        &EngineConfig::default(),
    );

    let expected = 0.5 + (2.0 / 3.0) * 0.5;
    assert!((ranked[0].comfort_score - expected).abs() < 1e-12);
    assert_eq!(ranked[0].criteria_met_count, 2);
}

#[test]
fn zone_with_no_met_criteria_caps_below_point_four() {
    // 380 lux against well-lit (501-1000): raw score 0, rescaled to
    // ((0 - -200) / 300) * 0.4.
    let readings = datasets(vec![hourly_reading("A", 380.0)], Vec::new(), Vec::new());
    let selection = PreferenceSelection {
        lighting: Some("well-lit".to_string()),
        ..Default::default()
    };

    let ranked = rank_zones(
        &readings,
        &FeelsLikeTable::default(),
        &selection,
        &EngineConfig::default(),
    );

    let expected = (200.0 / 300.0) * 0.4;
    assert!((ranked[0].comfort_score - expected).abs() < 1e-12);
    assert!(ranked[0].comfort_score <= 0.4);
    assert_eq!(ranked[0].criteria_met_count, 0);
}

#[test]
fn missing_dataset_for_selected_family_earns_penalty() {
    // Zone only exists in the light dataset but noise is selected too.
    let readings = datasets(vec![hourly_reading("A", 700.0)], Vec::new(), Vec::new());
    let selection = PreferenceSelection {
        lighting: Some("well-lit".to_string()),
        noise: Some("focus-work".to_string()),
        ..Default::default()
    };

    let ranked = rank_zones(
        &readings,
        &FeelsLikeTable::default(),
        &selection,
        &EngineConfig::default(),
    );

    assert_eq!(ranked[0].zone_id, "A");
    assert_eq!(ranked[0].scores.noise, Some(-200.0));
    assert_eq!(ranked[0].noise, Measurement::Unavailable);
    // One of two selected criteria met.
    assert_eq!(ranked[0].comfort_score, 0.75);
}

#[test]
fn no_zone_data_yields_three_placeholders() {
    let ranked = rank_zones(
        &SensorTriple::default(),
        &FeelsLikeTable::default(),
        &select_all(),
        &EngineConfig::default(),
    );

    assert_eq!(ranked.len(), 3);
    assert_eq!(ranked[0].zone_id, "Zone 1 (No Data)");
    assert_eq!(ranked[1].zone_id, "Zone 2 (Unavailable)");
    assert_eq!(ranked[2].zone_id, "Zone 3 (Fallback)");
    for zone in &ranked {
        assert_eq!(zone.rank, Rank::InfoUnavailable);
        assert_eq!(zone.comfort_score, 0.0);
        assert_eq!(zone.original_comfort_score, f64::NEG_INFINITY);
    }
}

#[test]
fn fewer_than_three_zones_are_padded() {
    let readings = datasets(vec![hourly_reading("Solo", 700.0)], Vec::new(), Vec::new());
    let selection = PreferenceSelection {
        lighting: Some("well-lit".to_string()),
        ..Default::default()
    };

    let ranked = rank_zones(
        &readings,
        &FeelsLikeTable::default(),
        &selection,
        &EngineConfig::default(),
    );

    assert_eq!(ranked.len(), 3);
    assert_eq!(ranked[0].zone_id, "Solo");
    assert_eq!(ranked[0].rank, Rank::BestMatch);
    assert_eq!(ranked[1].zone_id, "Zone 2 (Unavailable)");
    assert_eq!(ranked[1].rank, Rank::InfoUnavailable);
    assert_eq!(ranked[2].zone_id, "Zone 3 (Fallback)");
}

#[test]
fn no_selection_buckets_and_keeps_union_order() {
    let readings = datasets(
        vec![hourly_reading("First", 500.0), hourly_reading("Second", 600.0)],
        vec![hourly_reading("Third", 40.0)],
        Vec::new(),
    );

    let ranked = rank_zones(
        &readings,
        &FeelsLikeTable::default(),
        &PreferenceSelection::default(),
        &EngineConfig::default(),
    );

    // No preferences selected: every real zone lands in the same bucket
    // (raw score 0 -> 0.2) and the union enumeration order is preserved.
    let ids: Vec<&str> = ranked.iter().map(|z| z.zone_id.as_str()).collect();
    assert_eq!(ids, vec!["First", "Second", "Third"]);
    for zone in &ranked {
        assert_eq!(zone.comfort_score, 0.2);
    }
    assert_eq!(ranked[0].rank, Rank::BestMatch);
    assert_eq!(ranked[1].rank, Rank::SecondChoice);
    assert_eq!(ranked[2].rank, Rank::ThirdChoice);
}

#[test]
fn zone_present_in_single_dataset_is_still_scored() {
    let readings = datasets(
        vec![hourly_reading("Lit", 700.0)],
        vec![hourly_reading("Loud", 80.0)],
        vec![hourly_reading("Warm", 26.0)],
    );

    let ranked = rank_zones(
        &readings,
        &FeelsLikeTable::default(),
        &select_all(),
        &EngineConfig::default(),
    );

    let ids: Vec<&str> = ranked.iter().map(|z| z.zone_id.as_str()).collect();
    assert!(ids.contains(&"Lit"));
    assert!(ids.contains(&"Loud"));
    assert!(ids.contains(&"Warm"));
    for zone in &ranked {
        assert!(zone.comfort_score >= 0.0 && zone.comfort_score <= 1.0);
    }
}

#[test]
fn feels_like_is_looked_up_from_temperature_average() {
    let table = FeelsLikeTable::new(vec![
        FeelsLikeEntry {
            ambient_temp: 20.0,
            feels_like: 19.0,
        },
        FeelsLikeEntry {
            ambient_temp: 25.0,
            feels_like: 26.0,
        },
    ]);
    let readings = datasets(Vec::new(), Vec::new(), vec![hourly_reading("A", 24.0)]);

    let ranked = rank_zones(
        &readings,
        &table,
        &PreferenceSelection::default(),
        &EngineConfig::default(),
    );

    assert_eq!(ranked[0].temperature, Measurement::Measured(24.0));
    assert_eq!(ranked[0].feels_like_temp, Measurement::Measured(26.0));
}

#[test]
fn unknown_preference_option_is_treated_as_unselected() {
    let readings = datasets(vec![hourly_reading("A", 700.0)], Vec::new(), Vec::new());
    let selection = PreferenceSelection {
        lighting: Some("blinding".to_string()),
        ..Default::default()
    };

    let ranked = rank_zones(
        &readings,
        &FeelsLikeTable::default(),
        &selection,
        &EngineConfig::default(),
    );

    // Falls back to the no-selection bucket path.
    assert_eq!(ranked[0].scores.light, None);
    assert_eq!(ranked[0].comfort_score, 0.2);
}
