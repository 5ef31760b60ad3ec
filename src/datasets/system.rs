//! Weapons system dataset - one row per documented system

use serde::{Deserialize, Serialize};

use crate::datasets::Record;

/// A weapons system (aircraft, munition family, targeting suite, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct System {
    /// Dataset-wide identifier (e.g. "SYS-F35")
    pub system_id: String,

    /// Human-readable name
    pub system_name: String,

    /// Category label (e.g. "fighter_aircraft", "guided_munition")
    pub system_type: String,
}

impl Record for System {
    const DATASET: &'static str = "military_systems";
    const REQUIRED: &'static [&'static str] = &["system_id", "system_name", "system_type"];
}
