pub mod list_services;

pub use list_services::list_services;
