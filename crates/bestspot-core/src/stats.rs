// crates/bestspot-core/src/stats.rs

use bestspot_parser::{TimeKey, ZoneReading};

use crate::config::{OfficeHours, PeriodWeights};
use crate::types::Measurement;

/// Office-hours average of a zone's time series.
///
/// Period-keyed series use the configured contribution weights: the weighted
/// sum over positively weighted periods with numeric data, divided by the
/// summed weights. Hour-keyed series use the unweighted mean over office
/// hours. Either way the result is `Unavailable` (never NaN) when no
/// qualifying data exists.
pub fn office_hours_average(
    reading: &ZoneReading,
    weights: &PeriodWeights,
    office_hours: &OfficeHours,
) -> Measurement {
    let mut weighted_sum = 0.0;
    let mut weight_total = 0.0;
    let mut hourly_sum = 0.0;
    let mut hourly_count = 0u32;

    for sample in &reading.series {
        let Some(value) = sample.value else {
            continue;
        };
        match sample.key {
            TimeKey::Period(period) => {
                let weight = weights.weight(period);
                if weight > 0.0 {
                    weighted_sum += value * weight;
                    weight_total += weight;
                }
            }
            TimeKey::Hour(hour) => {
                if office_hours.contains(hour) {
                    hourly_sum += value;
                    hourly_count += 1;
                }
            }
        }
    }

    if weight_total > 0.0 {
        Measurement::Measured(weighted_sum / weight_total)
    } else if hourly_count > 0 {
        Measurement::Measured(hourly_sum / f64::from(hourly_count))
    } else {
        Measurement::Unavailable
    }
}
