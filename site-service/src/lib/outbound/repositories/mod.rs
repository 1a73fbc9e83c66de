pub mod application;
pub mod blog;
pub mod career;
pub mod catalog;
pub mod contact;
pub mod user;

pub use application::PostgresApplicationRepository;
pub use blog::PostgresBlogRepository;
pub use career::PostgresCareerRepository;
pub use catalog::PostgresCatalogRepository;
pub use contact::PostgresContactRepository;
pub use user::PostgresUserRepository;
