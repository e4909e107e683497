use viabus_api::domain::types::RouteFields;
use viabus_api::error::ApiServiceError;
use viabus_api::usecase::route::{
    CreateRouteUseCase, DeleteRouteUseCase, GetRouteUseCase, ListRoutesUseCase,
    UpdateRouteUseCase,
};
use viabus_api::usecase::user::{CreateUserUseCase, DeleteUserUseCase};

use crate::helpers::{InMemoryStore, ana, route_fields};

#[tokio::test]
async fn should_create_route_without_owner() {
    let store = InMemoryStore::new();
    let route = CreateRouteUseCase {
        users: store.clone(),
        routes: store.clone(),
    }
    .execute(route_fields(None))
    .await
    .unwrap();
    assert_eq!(route.user_id, None);

    let fetched = GetRouteUseCase { repo: store }
        .execute(route.id)
        .await
        .unwrap();
    assert_eq!(fetched, route);
}

#[tokio::test]
async fn should_reject_unknown_owner() {
    let store = InMemoryStore::new();
    let result = CreateRouteUseCase {
        users: store.clone(),
        routes: store.clone(),
    }
    .execute(route_fields(Some(8)))
    .await;
    assert!(matches!(result, Err(ApiServiceError::UserNotFound)));
    assert!(
        ListRoutesUseCase { repo: store }
            .execute()
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn should_replace_all_fields_on_update() {
    let store = InMemoryStore::new();
    let owner = CreateUserUseCase {
        repo: store.clone(),
    }
    .execute(ana())
    .await
    .unwrap();
    let route = CreateRouteUseCase {
        users: store.clone(),
        routes: store.clone(),
    }
    .execute(route_fields(None))
    .await
    .unwrap();

    let replacement = RouteFields {
        name: "Linha 043".to_owned(),
        distance: 9.75,
        duration: 31.0,
        user_id: Some(owner.id),
    };
    let updated = UpdateRouteUseCase {
        users: store.clone(),
        routes: store.clone(),
    }
    .execute(route.id, replacement.clone())
    .await
    .unwrap();

    assert_eq!(updated.id, route.id);
    assert_eq!(updated.name, replacement.name);
    assert_eq!(updated.distance, replacement.distance);
    assert_eq!(updated.duration, replacement.duration);
    assert_eq!(updated.user_id, Some(owner.id));
}

#[tokio::test]
async fn should_return_route_not_found_for_missing_route() {
    let store = InMemoryStore::new();
    let get = GetRouteUseCase {
        repo: store.clone(),
    }
    .execute(5)
    .await;
    assert!(matches!(get, Err(ApiServiceError::RouteNotFound)));

    let update = UpdateRouteUseCase {
        users: store.clone(),
        routes: store.clone(),
    }
    .execute(5, route_fields(None))
    .await;
    assert!(matches!(update, Err(ApiServiceError::RouteNotFound)));

    let delete = DeleteRouteUseCase { repo: store }.execute(5).await;
    assert!(matches!(delete, Err(ApiServiceError::RouteNotFound)));
}

#[tokio::test]
async fn should_delete_route() {
    let store = InMemoryStore::new();
    let route = CreateRouteUseCase {
        users: store.clone(),
        routes: store.clone(),
    }
    .execute(route_fields(None))
    .await
    .unwrap();

    DeleteRouteUseCase {
        repo: store.clone(),
    }
    .execute(route.id)
    .await
    .unwrap();

    let result = GetRouteUseCase { repo: store }.execute(route.id).await;
    assert!(matches!(result, Err(ApiServiceError::RouteNotFound)));
}

#[tokio::test]
async fn should_keep_route_when_owner_is_deleted() {
    let store = InMemoryStore::new();
    let owner = CreateUserUseCase {
        repo: store.clone(),
    }
    .execute(ana())
    .await
    .unwrap();
    let route = CreateRouteUseCase {
        users: store.clone(),
        routes: store.clone(),
    }
    .execute(route_fields(Some(owner.id)))
    .await
    .unwrap();

    DeleteUserUseCase {
        repo: store.clone(),
    }
    .execute(owner.id)
    .await
    .unwrap();

    let route = GetRouteUseCase { repo: store }
        .execute(route.id)
        .await
        .unwrap();
    assert_eq!(route.user_id, None);
}

#[tokio::test]
async fn should_report_missing_route_even_with_unknown_owner() {
    let store = InMemoryStore::new();
    let result = UpdateRouteUseCase {
        users: store.clone(),
        routes: store,
    }
    .execute(99, route_fields(Some(5)))
    .await;
    assert!(
        matches!(result, Err(ApiServiceError::RouteNotFound)),
        "expected RouteNotFound, got {result:?}"
    );
}
