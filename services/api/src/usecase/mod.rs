pub mod address;
pub mod route;
pub mod telephone;
pub mod user;
