// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Response types for REST APIv1

mod error;

pub use error::{json_error_handler, ApiError};

pub const CODE_INCOMPLETE_DATA: &str = "incomplete_data";
pub const CODE_INVALID_STATUS: &str = "invalid_status";
pub const CODE_INVALID_LENGTH: &str = "invalid_length";
pub const CODE_INVALID_VALUE: &str = "invalid_value";
pub const CODE_VALUE_REQUIRED: &str = "value_required";

/// Fallback for requests that match no route
pub async fn not_found() -> Result<actix_web::HttpResponse, ApiError> {
    Err(ApiError::not_found())
}
