use actix_cors::Cors;

/// Cross-origin requests are accepted from anywhere, on every route.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allow_any_method()
        .allow_any_header()
}
