//! Wire DTOs.

use serde::{Deserialize, Serialize};

/// The `links` member of every response body. Absent links are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub todos: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<String>,
}

/// Body of `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryPoint {
    pub links: Links,
}

/// Body of a collection listing: one self link per item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub items: Vec<String>,
    pub links: Links,
}

/// A todo as returned by create, get, update and delete. Reads title-case
/// `title`; the create response echoes it as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoView {
    pub title: String,
    pub description: String,
    pub links: Links,
}

/// A user as returned by create and get. `password` carries the
/// server-side hash, never the plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserView {
    pub email: String,
    pub name: String,
    pub password: String,
    pub links: Links,
}

/// Request payload for `POST /todos`. An omitted description is stored empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTodo {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Request payload for `PATCH` on a todo. Only the description can change,
/// and the server accepts it only when it is non-empty and alphanumeric.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoPatch {
    pub description: String,
}

/// Request payload for `POST /users`. `Debug` redacts the password.
#[derive(Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .finish()
    }
}
