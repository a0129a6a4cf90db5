//! Unified error system
//!
//! This module provides the error handling used by every endpoint:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: `{ "data": ... }` success envelope
//! - [`ErrorBody`]: `{ "status", "code", "message" }` failure body
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 4xxx: Reservation errors
//! - 7xxx: Table errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::with_message(ErrorCode::ClosedDay, "Restaurant is closed on Tuesdays");
//! assert_eq!(err.http_status().as_u16(), 400);
//!
//! let err = AppError::table_not_found(12);
//! assert_eq!(err.http_status().as_u16(), 404);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult, ErrorBody, created, ok};
