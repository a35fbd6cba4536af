use std::net::SocketAddr;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use nextbus_server::cache::{CacheConfig, CachedTransit};
use nextbus_server::form::FormController;
use nextbus_server::nextrip::{NexTripClient, NexTripConfig};
use nextbus_server::web::{AppState, create_router};

/// How often to refresh the route list (24 hours).
const ROUTE_REFRESH_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Build the NexTrip client, honoring an optional base URL override
    let mut config = NexTripConfig::new();
    if let Ok(url) = std::env::var("NEXTRIP_BASE_URL") {
        config = config.with_base_url(url);
    }
    let client = NexTripClient::new(config).expect("Failed to create NexTrip client");
    let cached = CachedTransit::new(client, &CacheConfig::default());

    // Fetch the route list (fail fast if unavailable)
    println!("Fetching route list...");
    let controller = FormController::connect(cached)
        .await
        .expect("Failed to fetch route list");
    println!("Loaded {} routes", controller.routes().len());

    let state = AppState::new(controller);

    // Spawn background task to refresh the route list daily
    let refresh_state = state.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(ROUTE_REFRESH_INTERVAL);
        interval.tick().await; // First tick is immediate, skip it
        loop {
            interval.tick().await;
            let mut controller = refresh_state.controller.lock().await;
            match controller.refresh_routes().await {
                Ok(count) => println!("Refreshed route list: {} routes", count),
                Err(e) => eprintln!("Failed to refresh route list: {}", e),
            }
        }
    });

    let static_dir = std::env::var("NEXTBUS_STATIC_DIR").unwrap_or_else(|_| "static".to_string());
    let app = create_router(state, &static_dir);

    let addr: SocketAddr = std::env::var("NEXTBUS_ADDR")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000)));

    println!("Next Bus Finder listening on http://{addr}");
    println!();
    println!("Open http://{addr} in your browser for the web interface.");
    println!();
    println!("Endpoints:");
    println!("  GET  /health  - Health check");
    println!("  GET  /        - The form page");
    println!("  POST /        - Apply field edits / find the next bus");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
