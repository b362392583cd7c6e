use thiserror::Error;

/// Error types for the compute module
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComputeError {
    /// A declared column is absent from the dataset
    #[error("Missing column '{column}' in {dataset} dataset")]
    MissingColumn {
        dataset: &'static str,
        column: String,
    },

    /// A cell that should hold a number does not
    #[error("Invalid number '{value}' in column '{column}'")]
    InvalidNumber { column: String, value: String },

    /// A cell that should hold a YYYY-MM-DD date does not
    #[error("Invalid date '{value}' in column '{column}'")]
    InvalidDate { column: String, value: String },
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
