use csv::StringRecord;

use crate::errors::ParserError;

/// Number of leading lines inspected when looking for a header row.
pub(crate) const HEADER_SCAN_LINES: usize = 5;

/// Reads every record of `content` with the relaxed settings all layouts
/// share: no header handling, flexible field counts, CRLF or LF endings.
pub(crate) fn read_records(
    layout: &'static str,
    content: &str,
) -> Result<Vec<StringRecord>, ParserError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|err| ParserError::Csv {
            layout,
            source: err,
        })?;
        records.push(record);
    }
    Ok(records)
}

pub(crate) fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|field| field.trim().is_empty())
}

/// Lenient numeric cell parse: empty, "N/A", "NA", and "NaN" variants as
/// well as anything non-numeric become `None` rather than an error.
pub(crate) fn parse_optional_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("n/a")
        || trimmed.eq_ignore_ascii_case("na")
        || trimmed.eq_ignore_ascii_case("nan")
    {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|parsed| parsed.is_finite())
}

/// Hour column labels are the bare strings "0".."23".
pub(crate) fn parse_hour_label(value: &str) -> Option<u8> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<u8>().ok().filter(|hour| *hour <= 23)
}

pub(crate) fn is_zone_id_header(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.eq_ignore_ascii_case("zones") || trimmed.eq_ignore_ascii_case("zone")
}

pub(crate) fn is_hour_header(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("hour")
}

/// Locates the first record within the scan window for which `matches`
/// returns true. Returns the record's index alongside a reference to it.
pub(crate) fn find_header_record<'a>(
    records: &'a [StringRecord],
    matches: impl Fn(&StringRecord) -> bool,
) -> Option<(usize, &'a StringRecord)> {
    records
        .iter()
        .take(HEADER_SCAN_LINES)
        .enumerate()
        .find(|(_, record)| matches(record))
}
