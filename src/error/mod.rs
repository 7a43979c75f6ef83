//! Error handling for blogdeck.
//!
//! - **Error Categories**: coarse classification used for logging
//! - **Domain-specific Errors**: network, session and validation errors
//! - **Unified Error Type**: `BlogError` consolidates them
//! - **Flow Errors**: `FlowError` pairs a fixed user-facing message with
//!   the cause, which is how every flow reports failure
//!
//! # Example
//!
//! ```ignore
//! use blogdeck::error::{FlowResult, ResultExt};
//!
//! async fn load(api: &BlogApi) -> FlowResult<Vec<Post>> {
//!     api.list_posts().await.or_notice("Failed to load posts")
//! }
//! ```

mod blog_error;
mod category;
mod flow;
mod network;
mod result;
mod validation;

pub use blog_error::BlogError;
pub use category::ErrorCategory;
pub use flow::FlowError;
pub use network::NetworkError;
pub use result::{BlogResult, FlowResult, ResultExt};
pub use validation::ValidationError;
