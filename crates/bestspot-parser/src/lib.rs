pub mod errors;
pub mod layouts;
pub mod model;
mod registry;

pub use errors::{LayoutAttempt, ParserError};
pub use layouts::parse_feels_like;
pub use model::{DayPeriod, FeelsLikeEntry, TimeKey, TimeSample, ZoneReading};
pub use registry::{
    detect_layout, parse_with_layouts, parse_zone_readings, CsvLayout, ZoneLayoutParser,
};

#[cfg(test)]
mod tests;
