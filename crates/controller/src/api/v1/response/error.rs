// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Error response types for REST APIv1
use super::{CODE_INCOMPLETE_DATA, CODE_INVALID_LENGTH, CODE_INVALID_VALUE, CODE_VALUE_REQUIRED};
use actix_web::error::JsonPayloadError;
use actix_web::http::header::{self, HeaderValue};
use actix_web::http::StatusCode;
use actix_web::HttpRequest;
use actix_web::{body::BoxBody, HttpResponse, ResponseError};
use database::DatabaseError;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use validator::ValidationErrors;

/// Error handler for the actix JSON extractor
///
/// Gets called when a incoming request results in an [`JsonPayloadError`].
/// Returns a `Bad Request` [`ApiError`] error with an appropriate error code and message.
pub fn json_error_handler(err: JsonPayloadError, _: &HttpRequest) -> actix_web::error::Error {
    let error_code = match err {
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            "payload_overflow"
        }
        JsonPayloadError::ContentType => "invalid_content_type",
        JsonPayloadError::Deserialize(_) | JsonPayloadError::Serialize(_) => "invalid_json",
        _ => "invalid_payload",
    };
    ApiError::bad_request()
        .with_code(error_code)
        .with_message(err.to_string())
        .into()
}

#[derive(Debug, Serialize)]
pub struct ValidationErrorEntry {
    /// The field related to the error
    /// It's a struct level error when no field is set
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<Cow<'static, str>>,
    /// Machine readable error message
    code: Cow<'static, str>,
    /// Human readable error message
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<Cow<'static, str>>,
}

/// The JSON body of every error response
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    // Machine readable error code
    code: Cow<'static, str>,
    // Human readable message
    error: Cow<'static, str>,
    // Invalid fields of the request, only set for validation errors
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<ValidationErrorEntry>,
}

/// The default REST API error
///
/// Can be build via the associated functions to represent various HTTP errors. Each
/// HTTP error has their default error code and message that get send in a JSON body.
/// The error code and message can be overwritten when creating an error.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    fn new_standard<T>(status: StatusCode, code: T, message: T) -> Self
    where
        T: Into<Cow<'static, str>>,
    {
        Self {
            status,
            body: ErrorBody {
                success: false,
                code: code.into(),
                error: message.into(),
                errors: Vec::new(),
            },
        }
    }

    /// Override the default code for an error
    pub fn with_code<T>(mut self, code: T) -> Self
    where
        T: Into<Cow<'static, str>>,
    {
        self.body.code = code.into();
        self
    }

    /// Override the default message for an error
    pub fn with_message<T>(mut self, message: T) -> Self
    where
        T: Into<Cow<'static, str>>,
    {
        self.body.error = message.into();
        self
    }

    /// Create a new 400 Bad Request error
    pub fn bad_request() -> Self {
        Self::new_standard(
            StatusCode::BAD_REQUEST,
            "bad_request",
            "Invalid request due to malformed syntax",
        )
    }

    /// Create a new 400 Bad Request error for a submission that lacks required values
    pub fn incomplete_data() -> Self {
        Self::incomplete_data_entries::<ValidationErrorEntry, _>([])
    }

    /// Create a new 400 Bad Request error for a submission that lacks required values
    ///
    /// The JSON body for this error additionally contains a list of errors for each invalid field.
    pub fn incomplete_data_entries<T, I>(errors: I) -> Self
    where
        T: Into<ValidationErrorEntry>,
        I: IntoIterator<Item = T>,
    {
        let mut error = Self::new_standard(
            StatusCode::BAD_REQUEST,
            CODE_INCOMPLETE_DATA,
            "Data tidak lengkap",
        );
        error.body.errors = errors.into_iter().map(Into::into).collect();
        error
    }

    /// Create a new 404 Not Found error
    pub fn not_found() -> Self {
        Self::new_standard(
            StatusCode::NOT_FOUND,
            "not_found",
            "A requested resource could not be found",
        )
    }

    /// Create a new 500 Internal Server Error
    pub fn internal() -> Self {
        Self::new_standard(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_server_error",
            "An internal server error occurred",
        )
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ErrorBody {
            code,
            error,
            errors,
            ..
        } = &self.body;

        write!(f, "status={}, code={}, message={}", self.status, code, error)?;

        if !errors.is_empty() {
            write!(
                f,
                ", errors={}",
                serde_json::to_string(errors)
                    .unwrap_or_else(|_| "unserializable errors".to_string())
            )?;
        }

        Ok(())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        let mut response = HttpResponse::new(self.status_code());

        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        let body = match serde_json::to_string(&self.body) {
            Ok(body) => body,
            Err(e) => {
                log::error!("Unable to serialize API error body, {}", e);
                r#"{"success":false}"#.to_string()
            }
        };

        response.set_body(BoxBody::new(body))
    }
}

impl From<crate::BlockingError> for ApiError {
    fn from(e: crate::BlockingError) -> Self {
        log::error!("REST API threw internal error from blocking error: {}", e);
        Self::internal()
    }
}

impl From<DatabaseError> for ApiError {
    fn from(db_error: DatabaseError) -> Self {
        match db_error {
            DatabaseError::NotFound => Self::not_found(),
            e => {
                log::error!("REST API threw internal error from database error: {}", e);
                Self::internal()
            }
        }
    }
}

impl From<ValidationErrors> for ApiError {
    /// Creates a 400 Bad Request response from the [`ValidationErrors`]
    ///
    /// Each validation error is mapped to a field. Errors of nested structs or lists are
    /// reported as a single invalid value of the containing field.
    fn from(validation_errors: ValidationErrors) -> Self {
        let mut entries = Vec::with_capacity(validation_errors.errors().len());

        collect_validation_errors(validation_errors, &mut entries);

        Self::incomplete_data_entries(entries)
    }
}

/// Convert [`ValidationErrors`] into multiple [`ValidationErrorEntries`](ValidationErrorEntry) and collect them in `entries`
fn collect_validation_errors(
    validation_errors: ValidationErrors,
    entries: &mut Vec<ValidationErrorEntry>,
) {
    let errors = validation_errors.into_errors();

    for (field, error_kind) in errors {
        let field = match field {
            "__all__" => None,
            field => Some(field.into()),
        };

        match error_kind {
            validator::ValidationErrorsKind::Field(v) => {
                for error in v {
                    let code = convert_validation_code(&error.code);

                    entries.push(ValidationErrorEntry {
                        field: field.clone(),
                        code: Cow::Borrowed(code),
                        message: error.message,
                    });
                }
            }
            validator::ValidationErrorsKind::Struct(_)
            | validator::ValidationErrorsKind::List(_) => entries.push(ValidationErrorEntry {
                field,
                code: Cow::Borrowed(CODE_INVALID_VALUE),
                message: None,
            }),
        };
    }
}

fn convert_validation_code(code: &str) -> &'static str {
    match code {
        "length" => CODE_INVALID_LENGTH,
        "required" => CODE_VALUE_REQUIRED,
        _ => CODE_INVALID_VALUE,
    }
}
