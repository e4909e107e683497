//! sea-orm entities for the Viabus API tables.

pub mod addresses;
pub mod routes;
pub mod telephones;
pub mod users;
