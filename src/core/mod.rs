//! Core pipeline: configuration, attribution, analyses, exports

pub mod attribution;
pub mod config;
pub mod contracts;
pub mod error;
pub mod export;
pub mod investor;
pub mod lobbying;
pub mod stocks;
pub mod summary;
pub mod timeline;

pub use config::Config;
