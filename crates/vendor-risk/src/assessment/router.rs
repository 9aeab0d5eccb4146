use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::classification::ClassificationResult;
use super::domain::{AssessmentId, FormEnum, RiskLevel, SupplierTypeCode};
use super::intake::{IntakeError, QuestionnaireForm, SupplierWizardState};
use super::recommendations::recommended_actions;
use super::repository::{AssessmentRepository, AssessmentStatusView, ReviewNotifier};
use super::schedule::ReassessmentSchedule;
use super::scoring::{score_risk, ScoreComponent, ScoringStrategy};
use super::service::{AssessmentService, AssessmentSubmission, ReviewRequest};
use crate::error::AppError;

/// Ad-hoc scoring request used by the live preview in the wizards.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RiskScoreRequest {
    pub strategy: Option<String>,
    pub questionnaire: QuestionnaireForm,
    pub is_technology: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskScoreResponse {
    pub strategy: ScoringStrategy,
    pub score: u8,
    pub risk_level: RiskLevel,
    pub description: &'static str,
    pub components: Vec<ScoreComponent>,
    pub recommended_actions: Vec<String>,
}

/// Page size of the reviewer queue.
pub const REVIEW_QUEUE_LIMIT: usize = 50;

#[derive(Debug, Clone, Deserialize)]
pub struct ReassessmentRequest {
    pub code: String,
    pub from: NaiveDate,
}

/// Router builder exposing classification, scoring, and assessment endpoints.
pub fn assessment_router<R, N>(service: Arc<AssessmentService<R, N>>) -> Router
where
    R: AssessmentRepository + 'static,
    N: ReviewNotifier + 'static,
{
    Router::new()
        .route("/api/v1/classification", post(classification_handler))
        .route("/api/v1/risk-score", post(risk_score_handler::<R, N>))
        .route("/api/v1/reassessment", post(reassessment_handler))
        .route("/api/v1/assessments", post(submit_handler::<R, N>))
        .route("/api/v1/review-queue", get(review_queue_handler::<R, N>))
        .route(
            "/api/v1/assessments/:assessment_id",
            get(status_handler::<R, N>).put(complete_handler::<R, N>),
        )
        .route(
            "/api/v1/assessments/:assessment_id/review",
            post(review_handler::<R, N>),
        )
        .with_state(service)
}

pub(crate) async fn classification_handler(
    axum::Json(state): axum::Json<SupplierWizardState>,
) -> Result<axum::Json<ClassificationResult>, AppError> {
    Ok(axum::Json(state.classify()?))
}

pub(crate) async fn risk_score_handler<R, N>(
    State(service): State<Arc<AssessmentService<R, N>>>,
    axum::Json(request): axum::Json<RiskScoreRequest>,
) -> Result<axum::Json<RiskScoreResponse>, AppError>
where
    R: AssessmentRepository + 'static,
    N: ReviewNotifier + 'static,
{
    let strategy = match request.strategy.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => {
            ScoringStrategy::from_form(raw).ok_or_else(|| IntakeError::InvalidEnum {
                field: "strategy",
                value: raw.to_string(),
            })?
        }
        _ => service.default_strategy(),
    };

    let questionnaire = request.questionnaire.into_response()?;
    let risk = score_risk(strategy, &questionnaire);
    Ok(axum::Json(RiskScoreResponse {
        strategy,
        score: risk.score,
        risk_level: risk.risk_level,
        description: risk.description,
        recommended_actions: recommended_actions(risk.risk_level, request.is_technology),
        components: risk.components,
    }))
}

pub(crate) async fn reassessment_handler(
    axum::Json(request): axum::Json<ReassessmentRequest>,
) -> Result<axum::Json<ReassessmentSchedule>, AppError> {
    let code =
        SupplierTypeCode::from_form(&request.code).ok_or_else(|| IntakeError::InvalidEnum {
            field: "code",
            value: request.code.clone(),
        })?;
    Ok(axum::Json(ReassessmentSchedule::compute(code, request.from)?))
}

pub(crate) async fn submit_handler<R, N>(
    State(service): State<Arc<AssessmentService<R, N>>>,
    axum::Json(submission): axum::Json<AssessmentSubmission>,
) -> Result<(StatusCode, axum::Json<AssessmentStatusView>), AppError>
where
    R: AssessmentRepository + 'static,
    N: ReviewNotifier + 'static,
{
    let today = Local::now().date_naive();
    let record = service.submit(submission, today)?;
    Ok((StatusCode::ACCEPTED, axum::Json(record.status_view())))
}

pub(crate) async fn status_handler<R, N>(
    State(service): State<Arc<AssessmentService<R, N>>>,
    Path(assessment_id): Path<String>,
) -> Result<axum::Json<AssessmentStatusView>, AppError>
where
    R: AssessmentRepository + 'static,
    N: ReviewNotifier + 'static,
{
    let record = service.get(&AssessmentId(assessment_id))?;
    Ok(axum::Json(record.status_view()))
}

pub(crate) async fn complete_handler<R, N>(
    State(service): State<Arc<AssessmentService<R, N>>>,
    Path(assessment_id): Path<String>,
    axum::Json(submission): axum::Json<AssessmentSubmission>,
) -> Result<axum::Json<AssessmentStatusView>, AppError>
where
    R: AssessmentRepository + 'static,
    N: ReviewNotifier + 'static,
{
    let today = Local::now().date_naive();
    let record = service.complete(&AssessmentId(assessment_id), submission, today)?;
    Ok(axum::Json(record.status_view()))
}

pub(crate) async fn review_queue_handler<R, N>(
    State(service): State<Arc<AssessmentService<R, N>>>,
) -> Result<axum::Json<Vec<AssessmentStatusView>>, AppError>
where
    R: AssessmentRepository + 'static,
    N: ReviewNotifier + 'static,
{
    let records = service.pending(REVIEW_QUEUE_LIMIT)?;
    Ok(axum::Json(
        records.iter().map(|record| record.status_view()).collect(),
    ))
}

pub(crate) async fn review_handler<R, N>(
    State(service): State<Arc<AssessmentService<R, N>>>,
    Path(assessment_id): Path<String>,
    axum::Json(request): axum::Json<ReviewRequest>,
) -> Result<axum::Json<AssessmentStatusView>, AppError>
where
    R: AssessmentRepository + 'static,
    N: ReviewNotifier + 'static,
{
    let today = Local::now().date_naive();
    let record = service.review(&AssessmentId(assessment_id), request, today)?;
    Ok(axum::Json(record.status_view()))
}
