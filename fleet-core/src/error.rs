//! Error types for fleet data.

use thiserror::Error;

/// A vehicle list that breaks the canonical-list invariants.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FleetError {
    #[error("Duplicate vehicle id: {id}")]
    DuplicateId { id: String },

    #[error("Vehicle {id} has a non-finite {field}: {value}")]
    NonFinite {
        id: String,
        field: &'static str,
        value: f64,
    },

    #[error("Vehicle id must not be empty")]
    EmptyId,
}

pub type FleetResult<T> = Result<T, FleetError>;
