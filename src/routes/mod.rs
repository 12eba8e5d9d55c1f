pub mod admin;
pub mod greeting;
