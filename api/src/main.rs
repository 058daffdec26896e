use api::middleware::log_request;
use api::routes::routes;
use axum::middleware::from_fn;
use db::connect;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tracing_appender::rolling;
use util::{config::AppConfig, state::AppState};

#[tokio::main]
async fn main() {
    let config = AppConfig::global().clone();

    // Load configuration and initialize logging
    let _log_guard = init_logging(&config.log_file, &config.log_level, config.log_to_stdout);

    // Set up dependencies
    let db = connect().await.expect("Failed to connect to database");
    let app_state = AppState::new(db);

    // Build app router
    let app = routes(app_state)
        .layer(from_fn(log_request))
        .layer(CorsLayer::very_permissive());

    // Start server
    let addr: SocketAddr = config.bind_address().parse().expect("Invalid address");

    tracing::info!(env = %config.env, "Starting {} on http://{}", config.project_name, addr);
    println!("Starting {} on http://{}", config.project_name, addr);

    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("Server crashed");
}

fn init_logging(
    log_file: &str,
    log_level: &str,
    log_to_stdout: bool,
) -> tracing_appender::non_blocking::WorkerGuard {
    use std::fs;
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    fs::create_dir_all("logs").ok();

    let file_appender = rolling::daily("logs", log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true);

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_target(true)
        .with_thread_ids(true);

    // `services` logs through the `log` facade; the default `tracing-log`
    // bridge installed by `init()` forwards those records.
    let env_filter = EnvFilter::try_new(log_level)
        .unwrap_or_else(|_| EnvFilter::new("api=info,services=info,db=info"));

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer);

    if log_to_stdout {
        registry.with(stdout_layer).init();
    } else {
        registry.init();
    }

    guard
}
