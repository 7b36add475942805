use std::time::Duration;

use reqwest::{Client, Url};

use super::error::ApiError;
use crate::model::Post;

/// HTTP client for the posts service.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    posts_url: Url,
}

impl ApiClient {
    /// Builds a client for the service at `base_url`.
    ///
    /// The `post` endpoint is resolved once here. A base URL with a
    /// path prefix keeps it: `http://host/api` serves
    /// `http://host/api/post`. Every request is bounded by `timeout`
    /// so a hung submission always completes one way or the other.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let mut base = Url::parse(base_url).map_err(|e| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let posts_url = base.join("post").map_err(|e| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::BuildClient)?;
        Ok(Self { http, posts_url })
    }

    /// Returns the resolved posts endpoint, for display.
    pub fn posts_url(&self) -> &str {
        self.posts_url.as_str()
    }

    /// Publishes one post.
    ///
    /// Any 2xx status counts as success; the response body is logged at
    /// debug level and not otherwise consumed.
    pub async fn create_post(&self, post: &Post) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.posts_url.clone())
            .json(post)
            .send()
            .await?
            .error_for_status()?;
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(%status, body, "posts service accepted post");
        Ok(())
    }

    /// Fetches every stored post.
    pub async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        let posts = self
            .http
            .get(self.posts_url.clone())
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Post>>()
            .await?;
        Ok(posts)
    }
}
