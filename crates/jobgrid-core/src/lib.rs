//! Core types for the JobGrid platform.
//!
//! This crate holds the domain models, configuration, constants, and the
//! unified `AppError` type shared by the database, storage, search, and API
//! crates. It deliberately contains no I/O beyond reading the environment.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;

pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
