use actix_web::error::QueryPayloadError;
use actix_web::HttpRequest;
use validator::Validate;

use crate::errors::AppError;

pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate().map_err(AppError::from)
}

/// Turns query-string extraction failures into the JSON 400 body.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::InvalidArgument(err.to_string()).into()
}
