pub mod delete_contact;
pub mod list_contacts;
pub mod submit_contact;

pub use delete_contact::delete_contact;
pub use list_contacts::list_contacts;
pub use submit_contact::submit_contact;
