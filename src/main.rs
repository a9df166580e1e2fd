use dotenvy::dotenv;
use retail_planner::{
    config::{seed, settings},
    core::report,
    errors::{Error, Result},
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file, non-fatal since env vars can be set externally
    dotenv().ok();

    // 3. Load seed data and build the planning state
    let seed_path = settings::get_seed_path();
    let seed_data = seed::load_or_sample(&seed_path)
        .inspect_err(|e| error!("Failed to load seed data from {}: {}", seed_path.display(), e))?;
    let state = seed::build_state(seed_data)
        .inspect_err(|e| error!("Seed data rejected: {}", e))?;
    info!(
        stores = state.stores().len(),
        skus = state.skus().len(),
        weeks = state.weeks().len(),
        "Planning state ready"
    );

    // 4. Print the weekly chart for the selected (or first) store
    let store = match settings::get_chart_store() {
        Some(id) => state.store(&id).ok_or(Error::NotFound { kind: "store", id })?,
        None => match state.stores().first() {
            Some(store) => store,
            None => {
                info!("No stores configured, nothing to chart");
                return Ok(());
            }
        },
    };

    let aggregates = state.aggregate_by_week(&store.id);
    print!("{}", report::render_store_chart(store, &aggregates)?);
    Ok(())
}
