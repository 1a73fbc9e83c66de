pub mod create_post;
pub mod delete_post;
pub mod list_posts;

pub use create_post::create_post;
pub use delete_post::delete_post;
pub use list_posts::list_posts;
