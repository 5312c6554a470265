//! JWT authentication: token issuing, verification, password hashing, and the
//! middleware that guards protected routes.

pub mod jwt;
pub mod middleware;
pub mod models;
pub mod password;
