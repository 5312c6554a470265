//! Postgres repositories for the JobGrid platform.
//!
//! Each repository is a cheap-to-clone wrapper around the shared `PgPool`.
//! All methods return `jobgrid_core::AppError` so callers deal with one error
//! type; unique-constraint violations are translated into domain conflicts
//! here rather than leaking database errors upward.

pub mod db;

pub use db::{
    NotificationRepository, ProfileRepository, SavedJobRepository, StoredUpload,
    TransactionGuard, UserRepository,
};
