use tracing::info;
use tracing_subscriber::EnvFilter;

use wind_restriction::authority::AuthorityBuilder;
use wind_restriction::config::ServerConfig;
use wind_restriction::scenarios::{self, reference_scenarios};
use wind_restriction::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("wind_restriction=info")),
        )
        .init();

    let config = ServerConfig::from_env().expect("Invalid server configuration");

    // `demo` runs the reference scenarios and exits
    if std::env::args().nth(1).as_deref() == Some("demo") {
        let builder =
            AuthorityBuilder::starting_at(config.advisory_seq_start, config.authority_seq_start);
        let scenarios = reference_scenarios().expect("Reference scenarios are invalid");
        print!("{}", scenarios::run(&scenarios, &builder));
        return;
    }

    let state = AppState::from_config(&config);
    let app = create_router(state);

    let addr = config.bind_addr;
    info!(%addr, "Wind restriction authority service listening");
    println!("API Endpoints:");
    println!("  GET  /health    - Health check");
    println!("  POST /evaluate  - Evaluate a train and issue authority if granted");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
