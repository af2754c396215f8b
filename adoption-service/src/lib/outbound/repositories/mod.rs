pub mod adoption_form;
pub mod user;

pub use adoption_form::PostgresAdoptionFormRepository;
pub use user::PostgresUserRepository;
