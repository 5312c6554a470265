//! Application-wide constants.

/// Maximum number of jobs a single user may have saved at once.
pub const SAVED_JOBS_LIMIT: i64 = 50;

/// Message returned when a user tries to save a job beyond the limit.
/// Clients match on this string, so it must not drift.
pub const SAVED_JOBS_LIMIT_MESSAGE: &str =
    "Saved jobs limit reached. You can save up to 50 jobs.";

/// Default page size for job search results.
pub const DEFAULT_SEARCH_LIMIT: u32 = 10;

/// Hard upper bound on the job search page size.
pub const MAX_SEARCH_LIMIT: u32 = 100;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_message_mentions_the_limit() {
        assert!(SAVED_JOBS_LIMIT_MESSAGE.contains(&SAVED_JOBS_LIMIT.to_string()));
    }
}
