use super::post_controller::{create_post, delete_post, get_posts, search_posts, update_post};
use actix_web::web;

pub fn post_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/posts")
            .service(
                web::resource("")
                    .route(web::get().to(get_posts))
                    .route(web::post().to(create_post)),
            )
            // Must precede "/{id}", which would otherwise swallow "search".
            .service(web::resource("/search").route(web::get().to(search_posts)))
            .service(
                web::resource("/{id}")
                    .route(web::put().to(update_post))
                    .route(web::delete().to(delete_post)),
            ),
    );
}
