//! JobGrid platform API.
//!
//! The binary in `main.rs` wires this together; the library exists so
//! integration tests can build the router without starting a server.

pub mod api_doc;
pub mod auth;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod setup;
pub mod state;
pub mod telemetry;
pub mod validation;

pub use error::{ErrorResponse, HttpAppError};
