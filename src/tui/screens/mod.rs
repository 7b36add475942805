//! TUI screen implementations.

pub mod compose;
pub mod help;
pub mod posts;

pub use compose::{ComposeState, draw_compose};
pub use help::{HelpState, draw_help};
pub use posts::{PostListState, draw_posts};
