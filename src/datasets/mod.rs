//! Dataset row types and the loaded-table container
//!
//! One module per CSV dataset, mirroring the file layout of the data
//! directory. Every row type implements [`Record`] so the loader can name
//! the dataset and validate its header before deserializing.

pub mod component;
pub mod contract;
pub mod infrastructure;
pub mod loader;
pub mod lobbying;
pub mod manufacturer;
pub mod operation;
pub mod shareholder;
pub mod stake;
pub mod stock;
pub mod system;
pub mod timeseries;

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::core::error::DatasetError;

pub use component::SystemComponent;
pub use contract::FmsContract;
pub use infrastructure::InfrastructureRow;
pub use lobbying::LobbyingRecord;
pub use manufacturer::Manufacturer;
pub use operation::OperationRecord;
pub use shareholder::Shareholder;
pub use stake::OwnershipStake;
pub use stock::StockQuote;
pub use system::System;
pub use timeseries::TimeseriesRow;

/// Common interface for dataset row types
pub trait Record: DeserializeOwned {
    /// File stem of the CSV this row type is read from (e.g. "manufacturers")
    const DATASET: &'static str;

    /// Columns that must be present in the header row
    const REQUIRED: &'static [&'static str];
}

/// All input tables, loaded once per run and read-only thereafter
#[derive(Debug)]
pub struct Tables {
    pub systems: Vec<System>,
    pub manufacturers: Vec<Manufacturer>,
    pub shareholders: Vec<Shareholder>,
    pub stakes: Vec<OwnershipStake>,
    pub components: Vec<SystemComponent>,
    pub infrastructure: Vec<InfrastructureRow>,
    pub operations: Vec<OperationRecord>,
    pub timeseries: Vec<TimeseriesRow>,
    pub contracts: Vec<FmsContract>,
    pub stocks: Vec<StockQuote>,
    pub lobbying: Vec<LobbyingRecord>,
}

impl Tables {
    /// Load every dataset from the data directory, failing fast on the
    /// first missing file, missing column, or malformed row.
    pub fn load(data_dir: &Path) -> Result<Self, DatasetError> {
        Ok(Self {
            systems: loader::load(data_dir)?,
            manufacturers: loader::load(data_dir)?,
            shareholders: loader::load(data_dir)?,
            stakes: loader::load(data_dir)?,
            components: loader::load(data_dir)?,
            infrastructure: loader::load(data_dir)?,
            operations: loader::load(data_dir)?,
            timeseries: loader::load(data_dir)?,
            contracts: loader::load(data_dir)?,
            stocks: loader::load(data_dir)?,
            lobbying: loader::load(data_dir)?,
        })
    }
}
