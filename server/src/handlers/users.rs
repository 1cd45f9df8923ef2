//! `/users` and `/users/{id}`. Users cannot be updated or deleted.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::{list_collection, load, JsonBody, Listing};
use crate::error::ApiError;
use crate::links::{BaseUrl, Links};
use crate::password::hash_password;
use crate::store::{to_document, Database};

/// A user as it sits in the store. `password` is always the hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct UserRecord {
    email: String,
    password: String,
    #[serde(default)]
    name: String,
}

/// `POST /users` body.
///
/// Email uniqueness is not enforced.
#[derive(Deserialize)]
pub struct NewUser {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

/// User view. The stored password hash is part of it.
#[derive(Debug, Serialize)]
pub struct UserView {
    pub email: String,
    pub name: String,
    pub password: String,
    pub links: Links,
}

impl UserView {
    fn new(record: UserRecord, self_link: String) -> Self {
        Self {
            email: record.email,
            name: record.name,
            password: record.password,
            links: Links::to_self(self_link),
        }
    }
}

pub async fn list_users(
    State(db): State<Database>,
    base: BaseUrl,
) -> Result<Json<Listing>, ApiError> {
    list_collection(db.users.as_ref(), &base).await.map(Json)
}

pub async fn create_user(
    State(db): State<Database>,
    base: BaseUrl,
    JsonBody(input): JsonBody<NewUser>,
) -> Result<(StatusCode, Json<UserView>), ApiError> {
    let email = input
        .email
        .ok_or_else(|| ApiError::Validation("email is required".to_string()))?;
    // Checked after email, and as a request-format error rather than a 422.
    let password = input
        .password
        .ok_or_else(|| ApiError::BadRequest("password is required".to_string()))?;

    let record = UserRecord {
        email,
        password: hash_password(&password),
        name: input.name.unwrap_or_default(),
    };

    let id = db.users.insert_one(to_document(&record)?).await?;
    tracing::debug!(%id, email = %record.email, "user created");

    Ok((StatusCode::CREATED, Json(UserView::new(record, base.join(id)))))
}

pub async fn get_user(
    State(db): State<Database>,
    Path(raw_id): Path<String>,
    base: BaseUrl,
) -> Result<Json<UserView>, ApiError> {
    let (_, record) = load::<UserRecord>(db.users.as_ref(), &raw_id).await?;
    Ok(Json(UserView::new(record, base.as_str().to_string())))
}
