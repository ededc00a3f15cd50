//! HTTP surface of the roster service.
//!
//! Exposes the service facade as a small JSON API built on [Axum]:
//!
//! - [`router`] -- route table and layer stack
//! - [`handlers`] -- request decoding and response encoding
//! - [`middleware`] -- request id, request span, and access log
//! - [`server`] -- bind, serve, and graceful shutdown
//! - [`state`] -- shared application state
//! - [`error`] -- error-to-response mapping
//!
//! [Axum]: https://docs.rs/axum

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerError, serve, shutdown_signal, start_server};
pub use state::AppState;
