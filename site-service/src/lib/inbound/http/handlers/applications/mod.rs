pub mod list_applications;
pub mod list_job_applications;
pub mod my_applications;
pub mod submit_application;
pub mod update_status;

pub use list_applications::list_applications;
pub use list_job_applications::list_job_applications;
pub use my_applications::my_applications;
pub use submit_application::submit_application;
pub use update_status::update_status;
