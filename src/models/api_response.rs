use serde::Serialize;

use crate::errors::ApiError;

// Generic API Response wrapper. The scaffold's one handler answers in plain
// text, so only the failure side of the envelope is populated today.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: String,
    pub code: u16,
    pub result: Option<T>,
    pub error: Option<ApiError>,
}
