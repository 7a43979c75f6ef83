//! Wire models of the blog API.

pub mod auth;
pub mod id;
pub mod post;
pub mod user;

pub use auth::{LoginRequest, LoginResponse, RegisterRequest};
pub use id::Id;
pub use post::{client_date, format_client_date, Post, PostFields, PostPatch, PostPayload};
pub use user::User;
