use jobgrid_core::Config;

// Use mimalloc as the global allocator for better performance and lower fragmentation,
// especially when running on musl-based systems inside containers.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    jobgrid_api::telemetry::init_telemetry();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize the application (database, storage, search, routes)
    let (_state, router) = jobgrid_api::setup::initialize_app(config.clone()).await?;

    // Start the server
    jobgrid_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
