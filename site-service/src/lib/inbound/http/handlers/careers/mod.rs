pub mod create_career;
pub mod delete_career;
pub mod get_career;
pub mod list_careers;

pub use create_career::create_career;
pub use delete_career::delete_career;
pub use get_career::get_career;
pub use list_careers::list_careers;
