use tracing::warn;

use crate::errors::ParserError;
use crate::model::FeelsLikeEntry;

use super::common::{find_header_record, is_blank, read_records};

const NAME: &str = "FEELS_LIKE";

fn is_ambient_header(value: &str) -> bool {
    let lower = value.trim().to_ascii_lowercase();
    lower == "ta"
        || lower.starts_with("ta ")
        || lower.starts_with("ta(")
        || lower.starts_with("ta_")
}

fn is_feels_like_header(value: &str) -> bool {
    value.trim().to_ascii_lowercase().contains("feels like")
}

/// Parses the dedicated ambient-to-perceived temperature CSV. The header row
/// (within the first lines) must contain an ambient `Ta` column and a column
/// whose name contains "feels like". Rows that fail the numeric parse are
/// dropped with a diagnostic; the returned entries are in source row order.
pub fn parse_feels_like(content: &str) -> Result<Vec<FeelsLikeEntry>, ParserError> {
    let records = read_records(NAME, content)?;

    let (header_idx, header) = find_header_record(&records, |record| {
        record.iter().any(is_ambient_header) && record.iter().any(is_feels_like_header)
    })
    .ok_or_else(|| ParserError::InvalidHeader {
        layout: NAME,
        message: "no header row with 'Ta' and 'feels like' columns in the first lines".to_string(),
    })?;

    let ambient_col = header
        .iter()
        .position(is_ambient_header)
        .expect("header predicate guarantees an ambient column");
    let feels_col = header
        .iter()
        .position(is_feels_like_header)
        .expect("header predicate guarantees a feels-like column");

    let mut entries = Vec::new();
    for (offset, record) in records.iter().enumerate().skip(header_idx + 1) {
        if is_blank(record) {
            continue;
        }
        let line = offset + 1;

        let ambient = record
            .get(ambient_col)
            .and_then(|cell| cell.trim().parse::<f64>().ok())
            .filter(|value| value.is_finite());
        let feels = record
            .get(feels_col)
            .and_then(|cell| cell.trim().parse::<f64>().ok())
            .filter(|value| value.is_finite());

        match (ambient, feels) {
            (Some(ambient_temp), Some(feels_like)) => entries.push(FeelsLikeEntry {
                ambient_temp,
                feels_like,
            }),
            _ => warn!(line, "dropping feels-like row with non-numeric values"),
        }
    }

    Ok(entries)
}
