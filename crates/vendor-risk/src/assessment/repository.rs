use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::classification::ClassificationResult;
use super::domain::{
    AssessmentId, AssessmentStatus, QuestionnaireResponse, ReviewDecision, RiskLevel,
    SupplierProfile, SupplierTypeCode,
};
use super::schedule::ReassessmentSchedule;
use super::scoring::{RiskScore, ScoringStrategy};

/// Repository record holding the questionnaire, computed results, and review.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentRecord {
    pub assessment_id: AssessmentId,
    pub supplier: SupplierProfile,
    pub questionnaire: QuestionnaireResponse,
    pub strategy: ScoringStrategy,
    pub status: AssessmentStatus,
    pub classification: Option<ClassificationResult>,
    pub risk: RiskScore,
    pub recommended_actions: Vec<String>,
    pub schedule: Option<ReassessmentSchedule>,
    pub review: Option<ReviewDecision>,
    pub submitted_on: NaiveDate,
}

impl AssessmentRecord {
    /// Reviewer override when present, otherwise the computed level.
    pub fn effective_risk_level(&self) -> RiskLevel {
        self.review
            .as_ref()
            .and_then(|review| review.dpo_adjusted_risk_level)
            .unwrap_or(self.risk.risk_level)
    }

    /// Columns written next to the supplier row.
    pub fn persisted_fields(&self) -> PersistedRiskFields {
        PersistedRiskFields {
            supplier_type: self.classification.map(|result| result.code),
            risk_score: self.risk.score,
            risk_level: self.risk.risk_level,
            risk_description: self.risk.description,
            dpo_adjusted_risk_level: self
                .review
                .as_ref()
                .and_then(|review| review.dpo_adjusted_risk_level),
        }
    }

    pub fn status_view(&self) -> AssessmentStatusView {
        AssessmentStatusView {
            assessment_id: self.assessment_id.clone(),
            supplier_name: self.supplier.name.clone(),
            status: self.status.label(),
            strategy: self.strategy.label(),
            supplier_type: self.classification.map(|result| result.code.label()),
            supplier_type_description: self.classification.map(|result| result.description),
            risk_score: self.risk.score,
            risk_level: self.risk.risk_level.label(),
            effective_risk_level: self.effective_risk_level().label(),
            risk_description: self.risk.description,
            recommended_actions: self.recommended_actions.clone(),
            next_assessment_date: self
                .schedule
                .map(|schedule| schedule.next_assessment_date),
        }
    }
}

/// Computed risk as persisted on the supplier/assessment row. The reviewer
/// override lives in its own column so the computed values stay auditable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PersistedRiskFields {
    pub supplier_type: Option<SupplierTypeCode>,
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub risk_description: &'static str,
    pub dpo_adjusted_risk_level: Option<RiskLevel>,
}

/// Storage abstraction injected into the assessment service.
pub trait AssessmentRepository: Send + Sync {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError>;
    fn update(&self, record: AssessmentRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError>;
    fn pending(&self, limit: usize) -> Result<Vec<AssessmentRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound hook fired when a review is recorded (e-mail, chat, ticketing).
pub trait ReviewNotifier: Send + Sync {
    fn publish(&self, notice: ReviewNotice) -> Result<(), NotifierError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewNotice {
    pub template: String,
    pub assessment_id: AssessmentId,
    pub details: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum NotifierError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}

/// Public status payload returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentStatusView {
    pub assessment_id: AssessmentId,
    pub supplier_name: String,
    pub status: &'static str,
    pub strategy: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_type_description: Option<&'static str>,
    pub risk_score: u8,
    pub risk_level: &'static str,
    pub effective_risk_level: &'static str,
    pub risk_description: &'static str,
    pub recommended_actions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_assessment_date: Option<NaiveDate>,
}
