mod common;
mod feels_like;
mod hour_rows;
mod period_rows;
mod zone_hourly;

pub use feels_like::parse_feels_like;
pub use hour_rows::HourRowsParser;
pub use period_rows::PeriodRowsParser;
pub use zone_hourly::ZoneHourlyParser;

pub(crate) use common::{is_hour_header, is_zone_id_header, parse_hour_label, HEADER_SCAN_LINES};
