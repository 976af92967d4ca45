use tracing::{debug, warn};

use crate::errors::ParserError;
use crate::model::{DayPeriod, TimeKey, ZoneReading};
use crate::registry::{CsvLayout, ZoneLayoutParser};

use super::common::{
    find_header_record, is_blank, is_zone_id_header, parse_hour_label, parse_optional_f64,
    read_records,
};

/// Layout B: one row per zone, one column per hour label "0".."23".
///
/// ```text
/// Zone,0,1,2,...,23
/// 8,18.2,18.1,...,19.0
/// ```
pub struct ZoneHourlyParser;

impl ZoneHourlyParser {
    const NAME: &'static str = "ZONE_ROWS_HOURLY";
}

impl ZoneLayoutParser for ZoneHourlyParser {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn layout(&self) -> CsvLayout {
        CsvLayout::ZoneRowsHourly
    }

    fn parse(&self, content: &str) -> Result<Vec<ZoneReading>, ParserError> {
        let records = read_records(Self::NAME, content)?;

        let (header_idx, header) =
            find_header_record(&records, |record| {
                record.get(0).is_some_and(is_zone_id_header)
            })
            .ok_or_else(|| ParserError::LayoutMismatch {
                layout: Self::NAME,
                reason: "no header row with a Zone/Zones first column".to_string(),
            })?;

        let mut columns: Vec<Option<u8>> = vec![None; header.len()];
        let mut hour_count = 0usize;
        for (idx, name) in header.iter().enumerate().skip(1) {
            if let Some(hour) = parse_hour_label(name) {
                columns[idx] = Some(hour);
                hour_count += 1;
            } else if DayPeriod::try_from(name).is_ok() {
                return Err(ParserError::LayoutMismatch {
                    layout: Self::NAME,
                    reason: format!("column '{}' is a day period, not an hour label", name.trim()),
                });
            } else {
                debug!(column = name.trim(), "ignoring unrecognized hour column");
            }
        }

        if hour_count == 0 {
            return Err(ParserError::LayoutMismatch {
                layout: Self::NAME,
                reason: "header contains no hour-label columns".to_string(),
            });
        }

        let mut readings = Vec::new();
        for (offset, record) in records.iter().enumerate().skip(header_idx + 1) {
            if is_blank(record) {
                continue;
            }
            let line = offset + 1;
            if record.len() != header.len() {
                warn!(
                    line,
                    expected = header.len(),
                    found = record.len(),
                    "skipping row with mismatched field count"
                );
                continue;
            }

            let zone_id = record.get(0).unwrap_or_default().trim();
            if zone_id.is_empty() {
                warn!(line, "skipping row with empty zone id");
                continue;
            }

            let mut reading = ZoneReading::new(zone_id);
            for (idx, hour) in columns.iter().enumerate() {
                if let Some(hour) = hour {
                    let cell = record.get(idx).unwrap_or_default();
                    reading.push(TimeKey::Hour(*hour), parse_optional_f64(cell));
                }
            }
            readings.push(reading);
        }

        if readings.is_empty() {
            return Err(ParserError::EmptyData { layout: Self::NAME });
        }
        Ok(readings)
    }
}
