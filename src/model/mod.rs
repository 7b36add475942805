mod post;
mod validation;

pub use post::{Post, PostField};
pub use validation::{ValidationError, field_error, validate_required};
