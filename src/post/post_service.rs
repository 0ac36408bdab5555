use crate::post::post_model::{NewPost, Post, PostFilter, PostOrder, UpdatePostRequest};
use crate::utils::error::CustomError;
use log::info;
use tokio::sync::Mutex;

struct PostCollection {
    posts: Vec<Post>,
    next_id: u64,
}

/// In-memory post store. Every operation holds the lock for its whole
/// read-modify-write sequence.
pub struct PostService {
    collection: Mutex<PostCollection>,
}

impl PostService {
    /// The two posts every fresh process starts with.
    pub fn seeded() -> Self {
        Self::from_posts(vec![
            Post::new(1, "First post", "This is the first post."),
            Post::new(2, "Second post", "This is the second post."),
        ])
    }

    /// `posts` must have unique ids; the counter resumes after the largest.
    pub fn from_posts(posts: Vec<Post>) -> Self {
        let next_id = posts.iter().map(|post| post.id).max().map_or(1, |id| id + 1);
        PostService {
            collection: Mutex::new(PostCollection { posts, next_id }),
        }
    }

    pub async fn list_posts(&self, order: Option<PostOrder>) -> Vec<Post> {
        let mut posts = self.collection.lock().await.posts.clone();
        if let Some(order) = order {
            posts.sort_by(|a, b| order.compare(a, b));
        }
        posts
    }

    pub async fn create_post(&self, new_post: NewPost) -> Post {
        let mut collection = self.collection.lock().await;

        let post = Post {
            id: collection.next_id,
            title: new_post.title,
            content: new_post.content,
        };
        collection.posts.push(post.clone());
        collection.next_id += 1;

        info!("Created post {}", post.id);
        post
    }

    pub async fn delete_post(&self, id: u64) -> Result<(), CustomError> {
        let mut collection = self.collection.lock().await;

        let index = collection
            .posts
            .iter()
            .position(|post| post.id == id)
            .ok_or(CustomError::PostNotFound(id))?;
        collection.posts.remove(index);

        info!("Deleted post {}", id);
        Ok(())
    }

    pub async fn update_post(
        &self,
        id: u64,
        changes: UpdatePostRequest,
    ) -> Result<Post, CustomError> {
        let mut collection = self.collection.lock().await;

        let post = collection
            .posts
            .iter_mut()
            .find(|post| post.id == id)
            .ok_or(CustomError::PostNotFound(id))?;
        changes.apply_to(post);

        info!("Updated post {}", id);
        Ok(post.clone())
    }

    pub async fn search_posts(&self, filter: &PostFilter) -> Vec<Post> {
        self.collection
            .lock()
            .await
            .posts
            .iter()
            .filter(|post| filter.matches(post))
            .cloned()
            .collect()
    }
}
