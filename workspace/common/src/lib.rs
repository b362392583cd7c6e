//! Common transport-layer types shared between the backend and its consumers.
//! These structs describe the JSON payloads returned by the HTTP handlers so
//! clients can deserialize API responses without duplicating shapes.

mod row;
mod summary;

pub use row::Row;
pub use summary::{DashboardSummary, DateRange, PENDING};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic API response wrapper used by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}
