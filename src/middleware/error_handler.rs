use crate::utils::error::CustomError;
use actix_web::error::QueryPayloadError;
use actix_web::middleware::ErrorHandlerResponse;
use actix_web::{HttpRequest, ResponseError, Result, dev::ServiceResponse};
use log::debug;

/// Largest create/update body accepted, in bytes.
pub const MAX_BODY_BYTES: usize = 256 * 1024;

/// Replaces the framework's plain-text 413 with the JSON error body.
pub fn payload_too_large<B>(res: ServiceResponse<B>) -> Result<ErrorHandlerResponse<B>> {
    let new_response = CustomError::PayloadTooLarge.error_response();
    let (req, _) = res.into_parts();
    let res = ServiceResponse::new(req, new_response.map_into_right_body());

    Ok(ErrorHandlerResponse::Response(res))
}

pub fn query_error(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!("Unreadable query string {:?}: {}", req.query_string(), err);
    CustomError::InvalidQuery.into()
}
