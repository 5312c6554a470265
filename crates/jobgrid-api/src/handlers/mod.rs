//! HTTP request handlers, grouped by domain.

pub mod auth;
pub mod files;
pub mod notifications;
pub mod onboarding;
pub mod profile;
pub mod saved_jobs;
pub mod search;
pub mod uploads;
