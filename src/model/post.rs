use std::fmt;

use serde::{Deserialize, Serialize};

use super::validation::{ValidationError, validate_required};

/// One of the three editable fields of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PostField {
    #[default]
    Title,
    Content,
    Author,
}

static ALL_FIELDS: &[PostField] = &[PostField::Title, PostField::Content, PostField::Author];

impl PostField {
    /// Returns the label shown in the form and used in validation messages.
    pub fn label(&self) -> &'static str {
        match self {
            PostField::Title => "Title",
            PostField::Content => "Content",
            PostField::Author => "Author",
        }
    }

    /// Returns all fields in form display order.
    pub fn all() -> &'static [PostField] {
        ALL_FIELDS
    }

    /// Returns the next field in tab order, wrapping past the last.
    pub fn next(&self) -> PostField {
        match self {
            PostField::Title => PostField::Content,
            PostField::Content => PostField::Author,
            PostField::Author => PostField::Title,
        }
    }

    /// Returns the previous field in tab order, wrapping past the first.
    pub fn prev(&self) -> PostField {
        match self {
            PostField::Title => PostField::Author,
            PostField::Content => PostField::Title,
            PostField::Author => PostField::Content,
        }
    }
}

#[mutants::skip]
impl fmt::Display for PostField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single post record as exchanged with the posts service.
///
/// Field values are kept exactly as the user typed them; validation
/// trims only to decide whether a field is blank. The service assigns
/// identifiers, so none is carried here, and unknown fields in service
/// responses are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl Post {
    /// Creates a new post, validating that every field is non-blank.
    pub fn new(title: String, content: String, author: String) -> Result<Self, ValidationError> {
        validate_required(PostField::Title, &title)?;
        validate_required(PostField::Content, &content)?;
        validate_required(PostField::Author, &author)?;
        Ok(Self {
            title,
            content,
            author,
        })
    }
}
