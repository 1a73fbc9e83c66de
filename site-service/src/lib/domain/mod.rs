pub mod application;
pub mod blog;
pub mod career;
pub mod catalog;
pub mod contact;
pub mod errors;
pub mod mail;
pub mod models;
pub mod user;
