//! Stateless request builder and response parser for the hypermedia API.
//!
//! # Design
//! `ApiClient` holds only a `base_url`. Collection operations are built from
//! it; item operations take the self link the server returned, so the client
//! follows links rather than formatting ids into paths. Each operation is
//! split into a `build_*` method producing an `HttpRequest` and a `parse_*`
//! method consuming an `HttpResponse`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{EntryPoint, Listing, NewTodo, NewUser, TodoPatch, TodoView, UserView};

/// Synchronous, stateless client for the hypermedia API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_entry_point(&self) -> HttpRequest {
        get(format!("{}/", self.base_url))
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        get(format!("{}/todos", self.base_url))
    }

    pub fn build_create_todo(&self, input: &NewTodo) -> Result<HttpRequest, ClientError> {
        with_json(HttpMethod::Post, format!("{}/todos", self.base_url), input)
    }

    pub fn build_list_users(&self) -> HttpRequest {
        get(format!("{}/users", self.base_url))
    }

    pub fn build_create_user(&self, input: &NewUser) -> Result<HttpRequest, ClientError> {
        with_json(HttpMethod::Post, format!("{}/users", self.base_url), input)
    }

    /// GET any item (todo or user) by its self link.
    pub fn build_get(&self, self_link: &str) -> HttpRequest {
        get(self_link.to_string())
    }

    pub fn build_update_todo(&self, self_link: &str, patch: &TodoPatch) -> Result<HttpRequest, ClientError> {
        with_json(HttpMethod::Patch, self_link.to_string(), patch)
    }

    pub fn build_delete_todo(&self, self_link: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: self_link.to_string(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_entry_point(&self, response: HttpResponse) -> Result<EntryPoint, ClientError> {
        parse_json(&response, 200)
    }

    /// Parses a todo or user listing.
    pub fn parse_listing(&self, response: HttpResponse) -> Result<Listing, ClientError> {
        parse_json(&response, 200)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<TodoView, ClientError> {
        parse_json(&response, 201)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<TodoView, ClientError> {
        parse_json(&response, 200)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<TodoView, ClientError> {
        parse_json(&response, 200)
    }

    /// The server sends the deleted todo's final view with its 204, but
    /// transports are free to drop a 204 body, so it is optional here.
    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<Option<TodoView>, ClientError> {
        check_status(&response, 204)?;
        if response.body.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&response.body)
            .map(Some)
            .map_err(ClientError::Deserialization)
    }

    pub fn parse_create_user(&self, response: HttpResponse) -> Result<UserView, ClientError> {
        parse_json(&response, 201)
    }

    pub fn parse_get_user(&self, response: HttpResponse) -> Result<UserView, ClientError> {
        parse_json(&response, 200)
    }
}

fn get(url: String) -> HttpRequest {
    HttpRequest {
        method: HttpMethod::Get,
        url,
        headers: Vec::new(),
        body: None,
    }
}

fn with_json<T: Serialize>(method: HttpMethod, url: String, input: &T) -> Result<HttpRequest, ClientError> {
    let body = serde_json::to_string(input).map_err(ClientError::Serialization)?;
    Ok(HttpRequest {
        method,
        url,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: Some(body),
    })
}

fn parse_json<T: DeserializeOwned>(response: &HttpResponse, expected: u16) -> Result<T, ClientError> {
    check_status(response, expected)?;
    serde_json::from_str(&response.body).map_err(ClientError::Deserialization)
}

/// Map non-success status codes to the appropriate `ClientError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ClientError> {
    match response.status {
        status if status == expected => Ok(()),
        404 => Err(ClientError::NotFound),
        422 => Err(ClientError::Unprocessable),
        status => Err(ClientError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}
