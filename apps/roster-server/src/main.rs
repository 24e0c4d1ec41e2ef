use tracing::info;
use tracing_subscriber::EnvFilter;

mod api;
mod app_state;
mod config;
mod openapi;
mod responses;
mod router;
mod spreadsheet;

pub(crate) use app_state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // OPENAPI_OUT=path dumps the generated document and exits; used by doc
    // tooling, not at runtime.
    if let Some(path) = openapi_export_path() {
        let doc = <openapi::ApiDoc as utoipa::OpenApi>::openapi().to_pretty_json()?;
        std::fs::write(&path, doc)?;
        return Ok(());
    }

    init_tracing();

    let cfg = match config::http_config_from_env() {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    };

    let (router, endpoints) = router::build_router();
    let state = AppState::new(roster_events::Bus::new(cfg.events_capacity), endpoints);
    state.bus().publish(
        roster_topics::TOPIC_SERVICE_START,
        &serde_json::json!({"version": env!("CARGO_PKG_VERSION")}),
    );

    let app = router
        .with_state(state)
        .layer(tower_http::cors::CorsLayer::permissive())
        .layer(tower_http::trace::TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(cfg.addr).await?;
    info!(addr = %cfg.addr, "roster server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

fn openapi_export_path() -> Option<String> {
    std::env::var("OPENAPI_OUT")
        .ok()
        .filter(|p| !p.trim().is_empty())
}

fn init_tracing() {
    let filter = std::env::var("ROSTER_LOG")
        .ok()
        .map(EnvFilter::new)
        .unwrap_or_else(|| {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        });
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut term = signal(SignalKind::terminate()).expect("install SIGTERM handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = term.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }

    info!("shutdown signal received");
}
