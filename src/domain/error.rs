use thiserror::Error;

#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("distance matrix is empty")]
    EmptyMatrix,

    #[error("row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("distance from {from} to {to} is invalid: {value}")]
    InvalidDistance { from: usize, to: usize, value: f64 },

    #[error("diagonal entry for node {node} is {value}, expected 0")]
    NonZeroDiagonal { node: usize, value: f64 },

    #[error("depot {depot} is outside the {nodes} nodes of the network")]
    DepotOutOfRange { depot: usize, nodes: usize },

    #[error("at least one vehicle is required")]
    NoVehicles,

    #[error("node {node} is outside the {nodes} nodes of the network")]
    NodeOutOfRange { node: usize, nodes: usize },

    #[error("unknown output format '{name}'")]
    UnknownFormat { name: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NetworkError>;
