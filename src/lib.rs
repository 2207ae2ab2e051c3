pub mod config;
pub mod error;
pub mod geo_math;
pub mod raw;
pub mod summarizer;
pub mod utils;
