pub mod adoption;
pub mod user;
