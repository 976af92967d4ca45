use tracing::warn;

use crate::errors::ParserError;
use crate::model::{TimeKey, ZoneReading};
use crate::registry::{CsvLayout, ZoneLayoutParser};

use super::common::{find_header_record, is_blank, is_hour_header, parse_optional_f64, read_records};

/// Layout C: one row per hour, one column per zone. The header row may be
/// preceded by title lines and is located by scanning the first few lines
/// for a case-insensitive "hour" column.
///
/// ```text
/// Average noise level by hour (dBA)
/// Hour,8,Lobby,Quiet Corner
/// 0,32,40,28
/// ```
pub struct HourRowsParser;

impl HourRowsParser {
    const NAME: &'static str = "HOUR_ROWS";
}

/// Per-zone accumulation bucket. Samples are gathered here row by row and
/// turned into `ZoneReading`s in a separate finalization pass, so no reading
/// is mutated while rows are still being consumed.
struct ZoneBucket {
    zone_id: String,
    samples: Vec<(u8, Option<f64>)>,
}

impl ZoneLayoutParser for HourRowsParser {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn layout(&self) -> CsvLayout {
        CsvLayout::HourRows
    }

    fn parse(&self, content: &str) -> Result<Vec<ZoneReading>, ParserError> {
        let records = read_records(Self::NAME, content)?;

        let (header_idx, header) =
            find_header_record(&records, |record| record.iter().any(is_hour_header)).ok_or_else(
                || ParserError::LayoutMismatch {
                    layout: Self::NAME,
                    reason: "no header row with an 'hour' column in the first lines".to_string(),
                },
            )?;

        let hour_col = header
            .iter()
            .position(is_hour_header)
            .expect("header predicate guarantees an hour column");

        // Every other non-empty header cell names a zone column.
        let mut buckets: Vec<ZoneBucket> = Vec::new();
        let mut zone_cols: Vec<(usize, usize)> = Vec::new(); // (column index, bucket index)
        for (idx, name) in header.iter().enumerate() {
            if idx == hour_col {
                continue;
            }
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            zone_cols.push((idx, buckets.len()));
            buckets.push(ZoneBucket {
                zone_id: name.to_string(),
                samples: Vec::new(),
            });
        }

        if buckets.is_empty() {
            return Err(ParserError::InvalidHeader {
                layout: Self::NAME,
                message: "header contains no zone columns".to_string(),
            });
        }

        let mut seen_hours = [false; 24];
        let mut rows_used = 0usize;
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

            let hour_cell = record.get(hour_col).unwrap_or_default().trim();
            let Some(hour) = hour_cell.parse::<u8>().ok().filter(|h| *h <= 23) else {
                warn!(line, cell = hour_cell, "skipping row with invalid hour value");
                continue;
            };
            if seen_hours[hour as usize] {
                warn!(line, hour, "skipping duplicate hour row");
                continue;
            }
            seen_hours[hour as usize] = true;

            for (col_idx, bucket_idx) in &zone_cols {
                let cell = record.get(*col_idx).unwrap_or_default();
                buckets[*bucket_idx]
                    .samples
                    .push((hour, parse_optional_f64(cell)));
            }
            rows_used += 1;
        }

        if rows_used == 0 {
            return Err(ParserError::EmptyData { layout: Self::NAME });
        }

        // Finalization pass: buckets become readings in zone-column order,
        // each series in the row order of the source file.
        let readings = buckets
            .into_iter()
            .map(|bucket| {
                let mut reading = ZoneReading::new(bucket.zone_id);
                for (hour, value) in bucket.samples {
                    reading.push(TimeKey::Hour(hour), value);
                }
                reading
            })
            .collect();

        Ok(readings)
    }
}
