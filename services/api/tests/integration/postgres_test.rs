//! Runs against a real Postgres when `TEST_DATABASE_URL` is set; each test
//! returns early otherwise.

use std::sync::Arc;

use chrono::Utc;
use sea_orm::{Database, DatabaseConnection};
use tokio::sync::OnceCell;
use uuid::Uuid;

use viabus_api::domain::repository::{
    AddressRepository, RouteRepository, TelephoneRepository, UserRepository,
};
use viabus_api::domain::types::{NewUser, UserIdentity};
use viabus_api::error::ApiServiceError;
use viabus_api::infra::db::{
    DbAddressRepository, DbRouteRepository, DbTelephoneRepository, DbUserRepository,
};
use viabus_api_migration::{Migrator, MigratorTrait};

use crate::helpers::{address_fields, route_fields};

static MIGRATED: OnceCell<()> = OnceCell::const_new();

async fn connect() -> Option<Arc<DatabaseConnection>> {
    let url = std::env::var("TEST_DATABASE_URL").ok()?;
    let db = Database::connect(&url).await.unwrap();
    MIGRATED
        .get_or_init(|| async {
            Migrator::up(&db, None).await.unwrap();
        })
        .await;
    Some(Arc::new(db))
}

fn unique_user() -> NewUser {
    let tag = Uuid::new_v4().simple().to_string();
    NewUser {
        cpf: tag[..15].to_owned(),
        name: "Ana".to_owned(),
        email: format!("{tag}@x.com"),
        photo_url: None,
        role: "user".to_owned(),
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn should_reject_duplicate_cpf() {
    let Some(db) = connect().await else { return };
    let users = DbUserRepository { db };
    let first = users.create(&unique_user()).await.unwrap();

    let mut second = unique_user();
    second.cpf = first.cpf.clone();
    let result = users.create(&second).await;

    assert!(
        matches!(result, Err(ApiServiceError::ConstraintViolation(_))),
        "expected ConstraintViolation, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_second_address() {
    let Some(db) = connect().await else { return };
    let user = DbUserRepository { db: Arc::clone(&db) }
        .create(&unique_user())
        .await
        .unwrap();
    let addresses = DbAddressRepository { db };
    addresses.create(user.id, &address_fields()).await.unwrap();

    let result = addresses.create(user.id, &address_fields()).await;

    assert!(matches!(
        result,
        Err(ApiServiceError::ConstraintViolation(_))
    ));
}

#[tokio::test]
async fn should_update_identity_and_keep_other_columns() {
    let Some(db) = connect().await else { return };
    let users = DbUserRepository { db };
    let user = users.create(&unique_user()).await.unwrap();
    let fresh = unique_user();

    let updated = users
        .update_identity(
            user.id,
            &UserIdentity {
                name: "Ana Maria".to_owned(),
                email: fresh.email.clone(),
                cpf: fresh.cpf.clone(),
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "Ana Maria");
    assert_eq!(updated.email, fresh.email);
    assert_eq!(updated.role, user.role);
    assert_eq!(updated.created_at, user.created_at);
}

#[tokio::test]
async fn should_cascade_user_delete() {
    let Some(db) = connect().await else { return };
    let users = DbUserRepository { db: Arc::clone(&db) };
    let addresses = DbAddressRepository { db: Arc::clone(&db) };
    let telephones = DbTelephoneRepository { db: Arc::clone(&db) };
    let routes = DbRouteRepository { db };

    let user = users.create(&unique_user()).await.unwrap();
    addresses.create(user.id, &address_fields()).await.unwrap();
    let phone = telephones.create(user.id, "555-1").await.unwrap();
    let route = routes.create(&route_fields(Some(user.id))).await.unwrap();

    assert!(users.delete(user.id).await.unwrap());

    assert_eq!(users.find_by_id(user.id).await.unwrap(), None);
    assert_eq!(addresses.find_by_user_id(user.id).await.unwrap(), None);
    assert_eq!(telephones.find_by_id(phone.id).await.unwrap(), None);
    let route = routes.find_by_id(route.id).await.unwrap().unwrap();
    assert_eq!(route.user_id, None);
}
