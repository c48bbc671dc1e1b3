//! Backend entry-point: wires the REST endpoints, health probes, and
//! OpenAPI docs over in-memory storage.

use actix_web::web;
use color_eyre::eyre::WrapErr;
use ortho_config::OrthoConfig;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::server::{AppSettings, create_server};

fn init_tracing(json: bool) {
    let builder = fmt().with_env_filter(EnvFilter::from_default_env());
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = result {
        eprintln!("tracing init failed: {e}");
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let settings = AppSettings::load().wrap_err("failed to load settings")?;
    init_tracing(settings.log_json);

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), &settings)
        .wrap_err_with(|| format!("failed to bind {}:{}", settings.bind(), settings.port()))?;

    info!(bind = %settings.bind(), port = settings.port(), "server listening");
    server.await.wrap_err("server terminated abnormally")?;
    health_state.mark_unhealthy();
    Ok(())
}
