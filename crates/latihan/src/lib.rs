pub mod calculator;
pub mod catalog;
pub mod config;
pub mod directory;
pub mod error;
pub mod leads;
pub mod seo;
pub mod telemetry;
