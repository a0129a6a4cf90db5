//! Request types for the shared crate
//!
//! Every mutating endpoint receives its payload wrapped as `{ "data": { ... } }`.

use serde::{Deserialize, Serialize};

/// Request body envelope
///
/// `data` is optional so a body without it can be rejected with a
/// domain error instead of a decode failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> DataEnvelope<T> {
    /// Wrap a payload
    pub fn new(data: T) -> Self {
        Self { data: Some(data) }
    }

    /// Unwrap the payload, or fail with "Data Missing!"
    pub fn into_data(self) -> crate::AppResult<T> {
        self.data
            .ok_or_else(|| crate::AppError::invalid_request("Data Missing!"))
    }
}
