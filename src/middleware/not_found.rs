use crate::utils::error::CustomError;
use actix_web::{HttpRequest, error::PathError};
use log::debug;

/// Fallback for requests that match no route.
pub async fn not_found(req: HttpRequest) -> Result<&'static str, CustomError> {
    debug!("No route for {} {}", req.method(), req.path());
    Err(CustomError::RouteNotFound)
}

/// A path segment that fails to parse (e.g. a non-integer post id) is
/// treated as an unrouted request.
pub fn path_error(err: PathError, req: &HttpRequest) -> actix_web::Error {
    debug!("Unroutable path {}: {}", req.path(), err);
    CustomError::RouteNotFound.into()
}
