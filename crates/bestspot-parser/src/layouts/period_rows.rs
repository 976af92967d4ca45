use tracing::{debug, warn};

use crate::errors::ParserError;
use crate::model::{DayPeriod, TimeKey, ZoneReading};
use crate::registry::{CsvLayout, ZoneLayoutParser};

use super::common::{
    find_header_record, is_blank, is_zone_id_header, parse_hour_label, parse_optional_f64,
    read_records,
};

/// Layout A: one row per zone, one column per named day period.
///
/// ```text
/// Zones,Early Morning,Morning,Afternoon,Evening,Late evening,Night
/// 8,420,700,710,680,150,20
/// ```
pub struct PeriodRowsParser;

impl PeriodRowsParser {
    const NAME: &'static str = "PERIOD_ROWS";
}

impl ZoneLayoutParser for PeriodRowsParser {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn layout(&self) -> CsvLayout {
        CsvLayout::PeriodRows
    }

    fn parse(&self, content: &str) -> Result<Vec<ZoneReading>, ParserError> {
        let records = read_records(Self::NAME, content)?;

        let (header_idx, header) =
            find_header_record(&records, |record| {
                record.get(0).is_some_and(is_zone_id_header)
            })
            .ok_or_else(|| ParserError::LayoutMismatch {
                layout: Self::NAME,
                reason: "no header row with a Zones/Zone first column".to_string(),
            })?;

        // Column classification: recognized periods keep their index, hour
        // labels mean this is the hourly layout, anything else is ignored.
        let mut columns: Vec<Option<DayPeriod>> = vec![None; header.len()];
        let mut period_count = 0usize;
        for (idx, name) in header.iter().enumerate().skip(1) {
            if let Ok(period) = DayPeriod::try_from(name) {
                columns[idx] = Some(period);
                period_count += 1;
            } else if parse_hour_label(name).is_some() {
                return Err(ParserError::LayoutMismatch {
                    layout: Self::NAME,
                    reason: format!("column '{}' is an hour label, not a day period", name.trim()),
                });
            } else {
                debug!(column = name.trim(), "ignoring unrecognized period column");
            }
        }

        if period_count == 0 {
            return Err(ParserError::InvalidHeader {
                layout: Self::NAME,
                message: "header contains no recognized day-period columns".to_string(),
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
            for (idx, period) in columns.iter().enumerate() {
                if let Some(period) = period {
                    let cell = record.get(idx).unwrap_or_default();
                    reading.push(TimeKey::Period(*period), parse_optional_f64(cell));
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
