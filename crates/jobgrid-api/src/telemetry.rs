//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// Honors `RUST_LOG` when set; otherwise defaults to debug-level output for
/// our crates and the HTTP layer while keeping sqlx quiet. Production gets
/// JSON lines for log shippers, everything else a compact console format.
///
/// Reads `ENVIRONMENT` directly because this runs before configuration is
/// loaded, so config errors are logged too.
pub fn init_telemetry() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(
            "jobgrid_api=debug,jobgrid_db=debug,jobgrid_storage=debug,jobgrid_search=debug,tower_http=debug,sqlx=warn",
        )
    });

    let is_production = std::env::var("ENVIRONMENT")
        .map(|e| matches!(e.to_lowercase().as_str(), "production" | "prod"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);
    if is_production {
        registry
            .with(tracing_subscriber::fmt::layer().json().flatten_event(true))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().compact().with_target(true))
            .init();
    }
}
