use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use log::debug;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CustomError {
    #[error("Invalid sort field. Must be 'title' or 'content'.")]
    InvalidSortField,

    #[error("Invalid direction. Must be 'asc' or 'desc'.")]
    InvalidDirection,

    #[error("Missing fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid JSON body.")]
    InvalidBody,

    #[error("Post with id {0} not found.")]
    PostNotFound(u64),

    #[error("Invalid query string.")]
    InvalidQuery,

    #[error("Request body too large.")]
    PayloadTooLarge,

    #[error("Route does not exist.")]
    RouteNotFound,
}

impl ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match *self {
            CustomError::InvalidSortField => StatusCode::BAD_REQUEST,
            CustomError::InvalidDirection => StatusCode::BAD_REQUEST,
            CustomError::MissingFields(..) => StatusCode::BAD_REQUEST,
            CustomError::InvalidBody => StatusCode::BAD_REQUEST,
            CustomError::PostNotFound(..) => StatusCode::NOT_FOUND,
            CustomError::InvalidQuery => StatusCode::BAD_REQUEST,
            CustomError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            CustomError::RouteNotFound => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        debug!("Rejecting request: {}", self);

        HttpResponse::build(self.status_code()).json(json!({
            "error": self.to_string(),
        }))
    }
}
