//! Shared types for the reservation service
//!
//! Wire models, error codes and response envelopes used by the server
//! and by any client talking to its JSON API.

pub mod error;
pub mod models;
pub mod request;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use request::DataEnvelope;
