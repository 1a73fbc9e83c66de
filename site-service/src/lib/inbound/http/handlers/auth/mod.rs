pub mod current_user;
pub mod home;
pub mod login;
pub mod register;
pub mod test_email;

pub use current_user::current_user;
pub use home::home;
pub use login::login;
pub use register::register;
pub use test_email::test_email;
