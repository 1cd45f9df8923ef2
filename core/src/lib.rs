//! Synchronous client core for the todo/user hypermedia API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip.
//!
//! # Design
//! - `ApiClient` is stateless. It holds only `base_url`.
//! - Items are addressed by the self links the server hands out, never by
//!   ids the client assembles itself.
//! - DTOs are defined independently from the server crate; the integration
//!   test catches schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::ApiClient;
pub use error::ClientError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{EntryPoint, Links, Listing, NewTodo, NewUser, TodoPatch, TodoView, UserView};
