use std::sync::Arc;

use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel as _, QueryFilter,
    QueryOrder, TransactionTrait,
    sea_query::Expr,
};

use viabus_api_schema::{addresses, routes, telephones, users};

use crate::domain::repository::{
    AddressRepository, RouteRepository, TelephoneRepository, UserRepository,
};
use crate::domain::types::{
    Address, AddressFields, NewUser, Route, RouteFields, Telephone, User, UserIdentity,
};
use crate::error::ApiServiceError;

fn db_err(context: &'static str) -> impl Fn(DbErr) -> ApiServiceError {
    move |err| ApiServiceError::from_db(err, context)
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: Arc<DatabaseConnection>,
}

impl UserRepository for DbUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, ApiServiceError> {
        let models = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(&*self.db)
            .await
            .map_err(db_err("list users"))?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, ApiServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(db_err("find user by id"))?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &NewUser) -> Result<User, ApiServiceError> {
        let model = users::ActiveModel {
            id: NotSet,
            cpf: Set(user.cpf.clone()),
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            photo_url: Set(user.photo_url.clone()),
            role: Set(user.role.clone()),
            created_at: Set(user.created_at),
        }
        .insert(&*self.db)
        .await
        .map_err(db_err("create user"))?;
        Ok(user_from_model(model))
    }

    async fn update_identity(
        &self,
        id: i64,
        identity: &UserIdentity,
    ) -> Result<Option<User>, ApiServiceError> {
        let identity = identity.clone();
        self.db
            .transaction::<_, Option<User>, ApiServiceError>(move |txn| {
                Box::pin(async move {
                    let Some(model) = users::Entity::find_by_id(id)
                        .one(txn)
                        .await
                        .map_err(db_err("find user for update"))?
                    else {
                        return Ok(None);
                    };
                    let mut user = model.into_active_model();
                    user.name = Set(identity.name);
                    user.email = Set(identity.email);
                    user.cpf = Set(identity.cpf);
                    let model = user.update(txn).await.map_err(db_err("update user"))?;
                    Ok(Some(user_from_model(model)))
                })
            })
            .await
            .map_err(|e| ApiServiceError::from_txn(e, "update user"))
    }

    async fn delete(&self, id: i64) -> Result<bool, ApiServiceError> {
        self.db
            .transaction::<_, bool, ApiServiceError>(move |txn| {
                Box::pin(async move {
                    telephones::Entity::delete_many()
                        .filter(telephones::Column::UserId.eq(id))
                        .exec(txn)
                        .await
                        .map_err(db_err("delete user telephones"))?;
                    addresses::Entity::delete_many()
                        .filter(addresses::Column::UserId.eq(id))
                        .exec(txn)
                        .await
                        .map_err(db_err("delete user address"))?;
                    // routes outlive their owner
                    routes::Entity::update_many()
                        .col_expr(routes::Column::UserId, Expr::value(Option::<i64>::None))
                        .filter(routes::Column::UserId.eq(id))
                        .exec(txn)
                        .await
                        .map_err(db_err("detach user routes"))?;
                    let result = users::Entity::delete_by_id(id)
                        .exec(txn)
                        .await
                        .map_err(db_err("delete user"))?;
                    Ok(result.rows_affected > 0)
                })
            })
            .await
            .map_err(|e| ApiServiceError::from_txn(e, "delete user"))
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        cpf: model.cpf,
        name: model.name,
        email: model.email,
        photo_url: model.photo_url,
        role: model.role,
        created_at: model.created_at,
    }
}

// ── Address repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAddressRepository {
    pub db: Arc<DatabaseConnection>,
}

impl AddressRepository for DbAddressRepository {
    async fn find_by_user_id(&self, user_id: i64) -> Result<Option<Address>, ApiServiceError> {
        let model = addresses::Entity::find()
            .filter(addresses::Column::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(db_err("find address by user id"))?;
        Ok(model.map(address_from_model))
    }

    async fn create(
        &self,
        user_id: i64,
        fields: &AddressFields,
    ) -> Result<Address, ApiServiceError> {
        let model = addresses::ActiveModel {
            id: NotSet,
            user_id: Set(user_id),
            street: Set(fields.street.clone()),
            number: Set(fields.number),
            complement: Set(fields.complement.clone()),
            neighborhood: Set(fields.neighborhood.clone()),
            city_name: Set(fields.city_name.clone()),
            state: Set(fields.state.clone()),
            cep: Set(fields.cep.clone()),
        }
        .insert(&*self.db)
        .await
        .map_err(db_err("create address"))?;
        Ok(address_from_model(model))
    }

    async fn update_street_city(
        &self,
        user_id: i64,
        street: &str,
        city_name: &str,
    ) -> Result<Option<Address>, ApiServiceError> {
        let street = street.to_owned();
        let city_name = city_name.to_owned();
        self.db
            .transaction::<_, Option<Address>, ApiServiceError>(move |txn| {
                Box::pin(async move {
                    let Some(model) = addresses::Entity::find()
                        .filter(addresses::Column::UserId.eq(user_id))
                        .one(txn)
                        .await
                        .map_err(db_err("find address for update"))?
                    else {
                        return Ok(None);
                    };
                    let mut address = model.into_active_model();
                    address.street = Set(street);
                    address.city_name = Set(city_name);
                    let model = address
                        .update(txn)
                        .await
                        .map_err(db_err("update address"))?;
                    Ok(Some(address_from_model(model)))
                })
            })
            .await
            .map_err(|e| ApiServiceError::from_txn(e, "update address"))
    }
}

fn address_from_model(model: addresses::Model) -> Address {
    Address {
        id: model.id,
        user_id: model.user_id,
        street: model.street,
        number: model.number,
        complement: model.complement,
        neighborhood: model.neighborhood,
        city_name: model.city_name,
        state: model.state,
        cep: model.cep,
    }
}

// ── Telephone repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbTelephoneRepository {
    pub db: Arc<DatabaseConnection>,
}

impl TelephoneRepository for DbTelephoneRepository {
    async fn list_by_user_id(&self, user_id: i64) -> Result<Vec<Telephone>, ApiServiceError> {
        let models = telephones::Entity::find()
            .filter(telephones::Column::UserId.eq(user_id))
            .order_by_asc(telephones::Column::Id)
            .all(&*self.db)
            .await
            .map_err(db_err("list telephones by user id"))?;
        Ok(models.into_iter().map(telephone_from_model).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Telephone>, ApiServiceError> {
        let model = telephones::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(db_err("find telephone by id"))?;
        Ok(model.map(telephone_from_model))
    }

    async fn create(
        &self,
        user_id: i64,
        phone_number: &str,
    ) -> Result<Telephone, ApiServiceError> {
        let model = telephones::ActiveModel {
            id: NotSet,
            user_id: Set(user_id),
            phone_number: Set(phone_number.to_owned()),
        }
        .insert(&*self.db)
        .await
        .map_err(db_err("create telephone"))?;
        Ok(telephone_from_model(model))
    }

    async fn delete_owned(&self, user_id: i64, id: i64) -> Result<(), ApiServiceError> {
        self.db
            .transaction::<_, (), ApiServiceError>(move |txn| {
                Box::pin(async move {
                    let telephone = telephones::Entity::find_by_id(id)
                        .one(txn)
                        .await
                        .map_err(db_err("find telephone for delete"))?
                        .ok_or(ApiServiceError::TelephoneNotFound)?;
                    if telephone.user_id != user_id {
                        return Err(ApiServiceError::TelephoneNotOwned);
                    }
                    telephones::Entity::delete_by_id(id)
                        .exec(txn)
                        .await
                        .map_err(db_err("delete telephone"))?;
                    Ok(())
                })
            })
            .await
            .map_err(|e| ApiServiceError::from_txn(e, "delete telephone"))
    }
}

fn telephone_from_model(model: telephones::Model) -> Telephone {
    Telephone {
        id: model.id,
        user_id: model.user_id,
        phone_number: model.phone_number,
    }
}

// ── Route repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRouteRepository {
    pub db: Arc<DatabaseConnection>,
}

impl RouteRepository for DbRouteRepository {
    async fn find_all(&self) -> Result<Vec<Route>, ApiServiceError> {
        let models = routes::Entity::find()
            .order_by_asc(routes::Column::Id)
            .all(&*self.db)
            .await
            .map_err(db_err("list routes"))?;
        Ok(models.into_iter().map(route_from_model).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Route>, ApiServiceError> {
        let model = routes::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(db_err("find route by id"))?;
        Ok(model.map(route_from_model))
    }

    async fn create(&self, fields: &RouteFields) -> Result<Route, ApiServiceError> {
        let model = routes::ActiveModel {
            id: NotSet,
            name: Set(fields.name.clone()),
            distance: Set(fields.distance),
            duration: Set(fields.duration),
            user_id: Set(fields.user_id),
        }
        .insert(&*self.db)
        .await
        .map_err(db_err("create route"))?;
        Ok(route_from_model(model))
    }

    async fn update(
        &self,
        id: i64,
        fields: &RouteFields,
    ) -> Result<Option<Route>, ApiServiceError> {
        let fields = fields.clone();
        self.db
            .transaction::<_, Option<Route>, ApiServiceError>(move |txn| {
                Box::pin(async move {
                    let Some(model) = routes::Entity::find_by_id(id)
                        .one(txn)
                        .await
                        .map_err(db_err("find route for update"))?
                    else {
                        return Ok(None);
                    };
                    let mut route = model.into_active_model();
                    route.name = Set(fields.name);
                    route.distance = Set(fields.distance);
                    route.duration = Set(fields.duration);
                    route.user_id = Set(fields.user_id);
                    let model = route.update(txn).await.map_err(db_err("update route"))?;
                    Ok(Some(route_from_model(model)))
                })
            })
            .await
            .map_err(|e| ApiServiceError::from_txn(e, "update route"))
    }

    async fn delete(&self, id: i64) -> Result<bool, ApiServiceError> {
        let result = routes::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(db_err("delete route"))?;
        Ok(result.rows_affected > 0)
    }
}

fn route_from_model(model: routes::Model) -> Route {
    Route {
        id: model.id,
        name: model.name,
        distance: model.distance,
        duration: model.duration,
        user_id: model.user_id,
    }
}
