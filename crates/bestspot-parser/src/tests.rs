use std::fs;
use std::path::PathBuf;

use crate::errors::ParserError;
use crate::layouts::{HourRowsParser, PeriodRowsParser, ZoneHourlyParser};
use crate::model::{DayPeriod, TimeKey};
use crate::parse_feels_like;
use crate::registry::{
    detect_layout, parse_with_layouts, parse_zone_readings, CsvLayout, ZoneLayoutParser,
};

fn fixture(path: &str) -> String {
    let base = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let full_path = base.join("tests/data").join(path);
    fs::read_to_string(&full_path)
        .unwrap_or_else(|err| panic!("failed to read fixture {}: {}", full_path.display(), err))
}

#[test]
fn detects_all_fixture_layouts() {
    assert_eq!(
        detect_layout(&fixture("light_by_period.csv")).unwrap(),
        CsvLayout::PeriodRows
    );
    assert_eq!(
        detect_layout(&fixture("temperature_hourly.csv")).unwrap(),
        CsvLayout::ZoneRowsHourly
    );
    assert_eq!(
        detect_layout(&fixture("noise_by_hour.csv")).unwrap(),
        CsvLayout::HourRows
    );
}

#[test]
fn parses_period_rows_fixture() {
    let readings = parse_zone_readings(&fixture("light_by_period.csv")).expect("period parse");

    assert_eq!(readings.len(), 3);
    assert_eq!(readings[0].zone_id, "8");

    // Six recognized period columns, in header order; the "Notes" column is
    // not a time column and must not appear.
    let keys: Vec<TimeKey> = readings[0].series.iter().map(|sample| sample.key).collect();
    let expected: Vec<TimeKey> = DayPeriod::ALL.iter().map(|p| TimeKey::Period(*p)).collect();
    assert_eq!(keys, expected);

    assert_eq!(
        readings[0].value_at(&TimeKey::Period(DayPeriod::Morning)),
        Some(700.0)
    );

    // Empty cell stays present as a null entry.
    let quiet = &readings[2];
    assert_eq!(quiet.zone_id, "Quiet Corner");
    assert_eq!(quiet.series.len(), 6);
    assert_eq!(quiet.value_at(&TimeKey::Period(DayPeriod::Evening)), None);
}

#[test]
fn period_parser_rejects_hourly_file() {
    let err = PeriodRowsParser
        .parse(&fixture("temperature_hourly.csv"))
        .unwrap_err();
    assert!(matches!(err, ParserError::LayoutMismatch { .. }), "{err}");
}

#[test]
fn parses_zone_hourly_fixture_and_skips_short_row() {
    let readings = parse_zone_readings(&fixture("temperature_hourly.csv")).expect("hourly parse");

    // The "Broken" row has 4 fields against a 25-column header and is skipped.
    let zone_ids: Vec<&str> = readings.iter().map(|r| r.zone_id.as_str()).collect();
    assert_eq!(zone_ids, vec!["8", "Lobby", "Quiet Corner"]);

    let zone8 = &readings[0];
    assert_eq!(zone8.series.len(), 24);
    assert!(zone8.is_hourly());
    assert_eq!(zone8.value_at(&TimeKey::Hour(8)), Some(22.0));
    assert_eq!(zone8.value_at(&TimeKey::Hour(0)), Some(18.0));

    // Non-numeric cell is a null entry, not a missing one.
    let quiet = &readings[2];
    assert_eq!(quiet.series.len(), 24);
    assert_eq!(quiet.value_at(&TimeKey::Hour(12)), None);
}

#[test]
fn parses_hour_rows_fixture() {
    let readings = parse_zone_readings(&fixture("noise_by_hour.csv")).expect("hour-rows parse");

    // Zones come from the header columns, in column order.
    let zone_ids: Vec<&str> = readings.iter().map(|r| r.zone_id.as_str()).collect();
    assert_eq!(zone_ids, vec!["8", "Lobby", "Quiet Corner"]);

    for reading in &readings {
        assert_eq!(reading.series.len(), 24);
    }
    assert_eq!(readings[0].value_at(&TimeKey::Hour(12)), Some(60.0));
    assert_eq!(readings[1].value_at(&TimeKey::Hour(12)), Some(70.0));
}

#[test]
fn hour_rows_tolerates_crlf_endings() {
    let content = "Hour,Desk A,Desk B\r\n0,41,35\r\n1,42,36\r\n";
    let readings = HourRowsParser.parse(content).expect("CRLF parse");
    assert_eq!(readings.len(), 2);
    assert_eq!(readings[0].zone_id, "Desk A");
    assert_eq!(readings[0].series.len(), 2);
    assert_eq!(readings[0].value_at(&TimeKey::Hour(1)), Some(42.0));
}

#[test]
fn hour_rows_skips_invalid_and_duplicate_hours() {
    let content = "Hour,A\n0,10\nmidnight,11\n0,12\n25,13\n1,14\n";
    let readings = HourRowsParser.parse(content).expect("parse");
    assert_eq!(readings.len(), 1);
    // "midnight", the duplicate 0 and the out-of-range 25 are all skipped.
    assert_eq!(readings[0].series.len(), 2);
    assert_eq!(readings[0].value_at(&TimeKey::Hour(0)), Some(10.0));
    assert_eq!(readings[0].value_at(&TimeKey::Hour(1)), Some(14.0));
}

#[test]
fn period_rows_skip_mismatched_rows_without_aborting() {
    let content = "Zones,Morning,Afternoon\nA,500,600\nB,410\nC,305,295\n";
    let readings = PeriodRowsParser.parse(content).expect("parse");
    let zone_ids: Vec<&str> = readings.iter().map(|r| r.zone_id.as_str()).collect();
    assert_eq!(zone_ids, vec!["A", "C"]);
}

#[test]
fn header_only_file_is_empty_data() {
    let err = ZoneHourlyParser.parse("Zone,8,9,10\n").unwrap_err();
    assert!(matches!(err, ParserError::EmptyData { .. }), "{err}");
}

#[test]
fn unrecognized_content_yields_no_matching_layout() {
    let content = "just,some,random\nvalues,1,2\n";
    let err = detect_layout(content).unwrap_err();
    assert!(matches!(err, ParserError::NoMatchingLayout { .. }), "{err}");

    let err = parse_zone_readings(content).unwrap_err();
    assert!(matches!(err, ParserError::NoMatchingLayout { .. }), "{err}");
}

#[test]
fn parse_with_layouts_collects_mismatch_attempts() {
    let parsers: [&dyn ZoneLayoutParser; 2] = [&ZoneHourlyParser, &PeriodRowsParser];

    let readings =
        parse_with_layouts(&fixture("light_by_period.csv"), &parsers).expect("fallback parse");
    assert_eq!(readings.len(), 3);

    let err = parse_with_layouts("nonsense\n", &parsers).unwrap_err();
    match err {
        ParserError::NoMatchingLayout { attempts } => assert_eq!(attempts.len(), 2),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn parses_feels_like_fixture_dropping_bad_rows() {
    let entries = parse_feels_like(&fixture("feels_like.csv")).expect("feels-like parse");
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[1].ambient_temp, 20.0);
    assert_eq!(entries[1].feels_like, 19.0);
    assert_eq!(entries[3].feels_like, 33.1);
}

#[test]
fn feels_like_without_header_is_an_error() {
    let err = parse_feels_like("a,b\n1,2\n").unwrap_err();
    assert!(matches!(err, ParserError::InvalidHeader { .. }), "{err}");
}
