use crate::middleware::error_handler::{MAX_BODY_BYTES, query_error};
use crate::middleware::not_found::path_error;
use crate::post::post_index::post_routes;
use actix_web::web;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(path_error))
        .app_data(web::QueryConfig::default().error_handler(query_error))
        .app_data(web::PayloadConfig::new(MAX_BODY_BYTES));
    cfg.service(web::scope("/api").configure(post_routes));
}
