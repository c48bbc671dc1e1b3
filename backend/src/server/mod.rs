//! Server construction and middleware wiring.

mod settings;

pub use settings::AppSettings;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetricsBuilder;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::Error;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{
    confessions, eating_spots, events, forum, notices, reviews, study_spots,
};
use crate::middleware::Trace;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

/// Malformed JSON bodies answer in the standard failure envelope rather
/// than actix's plain-text default.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        Error::invalid_request(format!("invalid JSON payload: {err}")).into()
    })
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let api = web::scope("/api")
        .configure(study_spots::configure)
        .configure(eating_spots::configure)
        .configure(confessions::configure)
        .configure(reviews::configure)
        .configure(notices::configure)
        .configure(events::configure)
        .configure(forum::configure);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

#[cfg(feature = "metrics")]
fn make_metrics() -> std::io::Result<actix_web_prom::PrometheusMetrics> {
    use prometheus::{IntGauge, Opts, Registry};

    let registry = Registry::new();
    let build_info = IntGauge::with_opts(
        Opts::new("quadrangle_build_info", "Build metadata of the running binary")
            .const_label("version", env!("CARGO_PKG_VERSION")),
    )
    .map_err(|e| std::io::Error::other(format!("Prometheus metrics setup failed: {e}")))?;
    build_info.set(1);
    registry
        .register(Box::new(build_info))
        .map_err(|e| std::io::Error::other(format!("Prometheus metrics setup failed: {e}")))?;

    PrometheusMetricsBuilder::new("quadrangle")
        .registry(registry)
        .endpoint("/metrics")
        .build()
        .map_err(|e| std::io::Error::other(format!("Prometheus metrics setup failed: {e}")))
}

/// Construct the HTTP server over in-memory storage.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    settings: &AppSettings,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(HttpState::in_memory());

    #[cfg(feature = "metrics")]
    let prometheus = make_metrics()?;

    let server = HttpServer::new(move || {
        let app = build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        });

        #[cfg(feature = "metrics")]
        let app = app.wrap(prometheus.clone());

        app
    })
    .bind(settings.bind_addr())?
    .run();

    health_state.mark_ready();
    Ok(server)
}
