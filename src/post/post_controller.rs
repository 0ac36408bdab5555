use crate::post::post_model::{
    CreatePostRequest, ListPostsQuery, SearchPostsQuery, UpdatePostRequest,
};
use crate::post::post_service::PostService;
use crate::utils::error::CustomError;
use actix_web::{HttpResponse, web};
use log::debug;

/// GET /api/posts?sort=<title|content>&direction=<asc|desc>
pub async fn get_posts(
    post_service: web::Data<PostService>,
    query: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse, CustomError> {
    let order = ListPostsQuery::from_pairs(&query).into_order()?;
    debug!("Listing posts with order {:?}", order);

    let posts = post_service.list_posts(order).await;
    Ok(HttpResponse::Ok().json(posts))
}

/// POST /api/posts
pub async fn create_post(
    post_service: web::Data<PostService>,
    body: web::Bytes,
) -> Result<HttpResponse, CustomError> {
    let new_post = CreatePostRequest::from_body(&body).validate()?;

    let post = post_service.create_post(new_post).await;
    Ok(HttpResponse::Created().json(post))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    post_id: web::Path<u64>,
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, CustomError> {
    let post_id = post_id.into_inner();
    post_service.delete_post(post_id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("Post with id {} has been deleted successfully.", post_id),
    })))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    post_id: web::Path<u64>,
    post_service: web::Data<PostService>,
    body: web::Bytes,
) -> Result<HttpResponse, CustomError> {
    // The body is checked before the post is looked up.
    let changes = UpdatePostRequest::from_body(&body)?;

    let post = post_service.update_post(post_id.into_inner(), changes).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// GET /api/posts/search?title=<substring>&content=<substring>
pub async fn search_posts(
    post_service: web::Data<PostService>,
    query: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse, CustomError> {
    let filter = SearchPostsQuery::from_pairs(&query).into_filter();
    debug!("Searching posts with {:?}", filter);

    let posts = post_service.search_posts(&filter).await;
    Ok(HttpResponse::Ok().json(posts))
}
