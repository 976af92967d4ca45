// crates/bestspot-core/src/duration.rs

use bestspot_parser::{TimeKey, ZoneReading};

use crate::config::{OfficeHours, PeriodWeights, PreferenceRange};

/// Qualitative estimate of how much of the working day a zone satisfies a
/// preference range. Display text only; never feeds back into scoring.
pub fn describe_duration(
    reading: &ZoneReading,
    range: &PreferenceRange,
    weights: &PeriodWeights,
    office_hours: &OfficeHours,
) -> String {
    if reading.is_hourly() {
        hourly_duration(reading, range, office_hours)
    } else {
        period_duration(reading, range, weights)
    }
}

/// Descriptive-period variant: ratio of suitable periods among the
/// positively weighted ones with numeric data, bucketed into qualitative
/// phrases.
pub fn period_duration(
    reading: &ZoneReading,
    range: &PreferenceRange,
    weights: &PeriodWeights,
) -> String {
    let mut considered = 0u32;
    let mut suitable = 0u32;

    for sample in &reading.series {
        let TimeKey::Period(period) = sample.key else {
            continue;
        };
        if weights.weight(period) <= 0.0 {
            continue;
        }
        let Some(value) = sample.value else {
            continue;
        };
        considered += 1;
        if range.contains(value) {
            suitable += 1;
        }
    }

    if considered == 0 {
        return "N/A (no readings for the main periods)".to_string();
    }

    let ratio = f64::from(suitable) / f64::from(considered);
    if suitable == considered {
        "Consistently throughout main periods".to_string()
    } else if ratio >= 0.75 {
        "Most of the main periods".to_string()
    } else if ratio >= 0.5 {
        "About half of the main periods".to_string()
    } else if suitable > 0 {
        "Some of the main periods".to_string()
    } else {
        "Infrequently during main periods".to_string()
    }
}

/// Hourly variant: counts office hours whose reading falls inside the range.
pub fn hourly_duration(
    reading: &ZoneReading,
    range: &PreferenceRange,
    office_hours: &OfficeHours,
) -> String {
    let start = office_hours.start;
    let end = office_hours.end;

    let mut considered = 0u32;
    let mut suitable = 0u32;
    for hour in office_hours.hours() {
        let Some(value) = reading.value_at(&TimeKey::Hour(hour)) else {
            continue;
        };
        considered += 1;
        if range.contains(value) {
            suitable += 1;
        }
    }

    if considered == 0 {
        format!("N/A (no readings between {start}:00-{end}:00)")
    } else if suitable == considered {
        format!("Consistently from {start}:00-{end}:00")
    } else if suitable > 0 {
        format!("Approximately {suitable} hour(s) between {start}:00-{end}:00")
    } else {
        format!("Not typically within the preferred range between {start}:00-{end}:00")
    }
}
