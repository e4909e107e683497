pub mod address;
pub mod health;
pub mod route;
pub mod telephone;
pub mod user;
