use crate::errors::{LayoutAttempt, ParserError};
use crate::layouts::{
    is_hour_header, is_zone_id_header, parse_hour_label, HourRowsParser, PeriodRowsParser,
    ZoneHourlyParser, HEADER_SCAN_LINES,
};
use crate::model::{DayPeriod, ZoneReading};

/// Discriminated parse-strategy tag produced by layout sniffing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsvLayout {
    PeriodRows,
    ZoneRowsHourly,
    HourRows,
}

pub trait ZoneLayoutParser {
    fn name(&self) -> &'static str;
    fn layout(&self) -> CsvLayout;
    fn parse(&self, content: &str) -> Result<Vec<ZoneReading>, ParserError>;
}

/// Sniffs the first few lines of `content` and decides which layout parser
/// should handle it. This only inspects header shapes; the chosen parser
/// still validates the full structure itself.
pub fn detect_layout(content: &str) -> Result<CsvLayout, ParserError> {
    let mut attempts = Vec::new();

    for line in content.lines().take(HEADER_SCAN_LINES) {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();

        if fields.iter().any(|field| is_hour_header(field)) {
            return Ok(CsvLayout::HourRows);
        }

        let Some(first) = fields.first() else {
            continue;
        };
        if !is_zone_id_header(first) {
            continue;
        }

        let hour_columns = fields
            .iter()
            .skip(1)
            .filter(|field| parse_hour_label(field).is_some())
            .count();
        let period_columns = fields
            .iter()
            .skip(1)
            .filter(|field| DayPeriod::try_from(**field).is_ok())
            .count();

        if hour_columns > 0 {
            return Ok(CsvLayout::ZoneRowsHourly);
        }
        if period_columns > 0 {
            return Ok(CsvLayout::PeriodRows);
        }
        attempts.push(LayoutAttempt::new(
            "ZONE_ROWS",
            "zone header row has neither hour labels nor day-period columns",
        ));
    }

    attempts.push(LayoutAttempt::new(
        "HEADER_SCAN",
        format!("no recognizable header in the first {HEADER_SCAN_LINES} lines"),
    ));
    Err(ParserError::NoMatchingLayout { attempts })
}

/// Parses zone time-series readings from any of the supported CSV layouts.
pub fn parse_zone_readings(content: &str) -> Result<Vec<ZoneReading>, ParserError> {
    let parser: &dyn ZoneLayoutParser = match detect_layout(content)? {
        CsvLayout::PeriodRows => &PeriodRowsParser,
        CsvLayout::ZoneRowsHourly => &ZoneHourlyParser,
        CsvLayout::HourRows => &HourRowsParser,
    };
    parser.parse(content)
}

/// Tries each supplied parser in order, collecting layout mismatches until
/// one succeeds. Errors other than a mismatch are surfaced immediately.
pub fn parse_with_layouts(
    content: &str,
    parsers: &[&dyn ZoneLayoutParser],
) -> Result<Vec<ZoneReading>, ParserError> {
    let mut attempts = Vec::new();

    for parser in parsers {
        match parser.parse(content) {
            Ok(readings) => return Ok(readings),
            Err(ParserError::LayoutMismatch { reason, .. }) => {
                attempts.push(LayoutAttempt::new(parser.name(), reason));
            }
            Err(err) => return Err(err),
        }
    }

    Err(ParserError::NoMatchingLayout { attempts })
}
