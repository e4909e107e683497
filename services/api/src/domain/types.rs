use chrono::{DateTime, Utc};

/// A registered user. Root aggregate for [`Address`] and [`Telephone`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub cpf: String,
    pub name: String,
    pub email: String,
    pub photo_url: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// User fields supplied by a client. `id` and `created_at` are assigned on insert.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub cpf: String,
    pub name: String,
    pub email: String,
    pub photo_url: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// The subset of user fields an update is allowed to overwrite.
#[derive(Debug, Clone)]
pub struct UserIdentity {
    pub name: String,
    pub email: String,
    pub cpf: String,
}

/// Postal address owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub id: i64,
    pub user_id: i64,
    pub street: String,
    pub number: i32,
    pub complement: Option<String>,
    pub neighborhood: String,
    pub city_name: String,
    pub state: String,
    pub cep: String,
}

#[derive(Debug, Clone)]
pub struct AddressFields {
    pub street: String,
    pub number: i32,
    pub complement: Option<String>,
    pub neighborhood: String,
    pub city_name: String,
    pub state: String,
    pub cep: String,
}

/// Phone number owned by a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Telephone {
    pub id: i64,
    pub user_id: i64,
    pub phone_number: String,
}

/// Bus route, optionally associated with a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub id: i64,
    pub name: String,
    pub distance: f64,
    pub duration: f64,
    pub user_id: Option<i64>,
}

/// Every writable route field. Updates replace all of them.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteFields {
    pub name: String,
    pub distance: f64,
    pub duration: f64,
    pub user_id: Option<i64>,
}
