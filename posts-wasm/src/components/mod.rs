pub(crate) mod blog_posts;
pub(crate) mod error_message;
