use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryAssessmentRepository, InMemoryReviewNotifier};
use crate::routes::with_assessment_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;
use vendor_risk::assessment::{AssessmentService, FormEnum, IntakeError, ScoringStrategy};
use vendor_risk::config::AppConfig;
use vendor_risk::error::AppError;
use vendor_risk::telemetry;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(raw) = args.strategy.take() {
        config.assessment.default_strategy =
            ScoringStrategy::from_form(&raw).ok_or(IntakeError::InvalidEnum {
                field: "strategy",
                value: raw,
            })?;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryAssessmentRepository::default());
    let notifier = Arc::new(InMemoryReviewNotifier::default());
    let assessment_service = Arc::new(AssessmentService::new(
        repository,
        notifier,
        config.assessment.default_strategy,
    ));

    let app = with_assessment_routes(assessment_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        default_strategy = config.assessment.default_strategy.label(),
        "vendor risk service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
