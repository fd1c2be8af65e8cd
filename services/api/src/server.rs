use crate::cli::ServeArgs;
use crate::infra::{
    gate_policy_from, AppState, InMemoryLocationStore, InMemoryProfileRepository,
    InMemorySlotRepository, InMemoryUserDirectory,
};
use crate::routes::with_marketplace_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;
use tutoria::config::AppConfig;
use tutoria::error::AppError;
use tutoria::location::{DistanceGate, LocationService};
use tutoria::profiles::ProfileService;
use tutoria::scheduling::AvailabilityService;
use tutoria::telemetry;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let slot_repository = Arc::new(InMemorySlotRepository::default());
    let availability_service = Arc::new(AvailabilityService::new(slot_repository.clone()));

    let location_store = Arc::new(InMemoryLocationStore::default());
    let gate = DistanceGate::with_policy(gate_policy_from(&config.gate));
    let location_service = Arc::new(LocationService::new(gate, location_store));

    let profile_repository = Arc::new(InMemoryProfileRepository::default());
    let user_directory = Arc::new(InMemoryUserDirectory::default());
    let profile_service = Arc::new(ProfileService::new(
        profile_repository,
        user_directory,
        slot_repository,
    ));

    let app = with_marketplace_routes(availability_service, location_service, profile_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "tutoring marketplace service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
