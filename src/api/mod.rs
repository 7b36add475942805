//! HTTP access to the posts service.
//!
//! One `post` endpoint serves both directions: POST publishes a new
//! post, GET returns every stored post.

mod client;
mod error;

pub use client::ApiClient;
pub use error::ApiError;
