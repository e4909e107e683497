use viabus_api::error::ApiServiceError;
use viabus_api::usecase::address::{
    CreateAddressUseCase, GetAddressUseCase, UpdateAddressInput, UpdateAddressUseCase,
};
use viabus_api::usecase::user::CreateUserUseCase;

use crate::helpers::{InMemoryStore, address_fields, ana};

async fn store_with_user() -> (InMemoryStore, i64) {
    let store = InMemoryStore::new();
    let user = CreateUserUseCase {
        repo: store.clone(),
    }
    .execute(ana())
    .await
    .unwrap();
    (store, user.id)
}

#[tokio::test]
async fn should_return_none_for_user_without_address() {
    let (store, user_id) = store_with_user().await;
    let address = GetAddressUseCase { repo: store }
        .execute(user_id)
        .await
        .unwrap();
    assert!(address.is_none());
}

#[tokio::test]
async fn should_create_address_linked_to_user() {
    let (store, user_id) = store_with_user().await;
    let created = CreateAddressUseCase {
        users: store.clone(),
        addresses: store.clone(),
    }
    .execute(user_id, address_fields())
    .await
    .unwrap();
    assert_eq!(created.user_id, user_id);

    let fetched = GetAddressUseCase { repo: store }
        .execute(user_id)
        .await
        .unwrap();
    assert_eq!(fetched, Some(created));
}

#[tokio::test]
async fn should_reject_second_address_for_same_user() {
    let (store, user_id) = store_with_user().await;
    let usecase = CreateAddressUseCase {
        users: store.clone(),
        addresses: store.clone(),
    };
    usecase.execute(user_id, address_fields()).await.unwrap();

    let result = usecase.execute(user_id, address_fields()).await;

    assert!(
        matches!(result, Err(ApiServiceError::ConstraintViolation(_))),
        "expected ConstraintViolation, got {result:?}"
    );
}

#[tokio::test]
async fn should_return_user_not_found_for_unknown_user() {
    let store = InMemoryStore::new();
    let result = CreateAddressUseCase {
        users: store.clone(),
        addresses: store,
    }
    .execute(77, address_fields())
    .await;
    assert!(matches!(result, Err(ApiServiceError::UserNotFound)));
}

#[tokio::test]
async fn should_merge_only_street_and_city_name() {
    let (store, user_id) = store_with_user().await;
    let original = CreateAddressUseCase {
        users: store.clone(),
        addresses: store.clone(),
    }
    .execute(user_id, address_fields())
    .await
    .unwrap();

    let updated = UpdateAddressUseCase {
        repo: store.clone(),
    }
    .execute(
        user_id,
        UpdateAddressInput {
            street: "Av. Boa Viagem".to_owned(),
            city_name: "Jaboatão".to_owned(),
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.street, "Av. Boa Viagem");
    assert_eq!(updated.city_name, "Jaboatão");
    assert_eq!(updated.number, original.number);
    assert_eq!(updated.complement, original.complement);
    assert_eq!(updated.neighborhood, original.neighborhood);
    assert_eq!(updated.state, original.state);
    assert_eq!(updated.cep, original.cep);

    let fetched = GetAddressUseCase { repo: store }
        .execute(user_id)
        .await
        .unwrap();
    assert_eq!(fetched, Some(updated));
}

#[tokio::test]
async fn should_return_address_not_found_when_updating_missing_address() {
    let (store, user_id) = store_with_user().await;
    let result = UpdateAddressUseCase { repo: store }
        .execute(
            user_id,
            UpdateAddressInput {
                street: "Rua Nova".to_owned(),
                city_name: "Olinda".to_owned(),
            },
        )
        .await;
    assert!(matches!(result, Err(ApiServiceError::AddressNotFound)));
}
