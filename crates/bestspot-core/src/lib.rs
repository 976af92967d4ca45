pub mod config;
pub mod duration;
pub mod error;
pub mod feels_like;
pub mod pipeline;
pub mod ranker;
pub mod scorer;
pub mod stats;
pub mod types;
