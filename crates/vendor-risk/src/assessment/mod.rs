//! Supplier risk assessment: classification, scoring, and reassessment cadence.
//!
//! The classifier, the scoring strategies, the recommendation tables and the
//! scheduler are pure functions over the canonical [`QuestionnaireResponse`].
//! Intake adapters, the repository boundary, the service and the router wrap
//! them for the portal.

pub mod classification;
pub mod domain;
pub mod intake;
pub mod recommendations;
pub mod repository;
pub mod router;
pub mod schedule;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use classification::{classify, classify_supplier_type, ClassificationResult};
pub use domain::{
    Answer, AssessmentId, AssessmentStatus, ContractType, Criticality, DataType, DataVolume,
    EvaluationFrequency, FormEnum, GovernanceProgram, GrcControls, IncidentHistory, LogRetention,
    QuestionnaireResponse, ReportTimeframe, ReviewDecision, ReviewVerdict, RiskLevel,
    Subcontracting, SupplierProfile, SupplierTypeCode,
};
pub use intake::{GrcForm, IntakeError, QuestionnaireForm, SupplierWizardState};
pub use recommendations::recommended_actions;
pub use repository::{
    AssessmentRecord, AssessmentRepository, AssessmentStatusView, NotifierError,
    PersistedRiskFields, RepositoryError, ReviewNotice, ReviewNotifier,
};
pub use router::{
    assessment_router, ReassessmentRequest, RiskScoreRequest, RiskScoreResponse,
    REVIEW_QUEUE_LIMIT,
};
pub use schedule::{next_assessment_date, ReassessmentSchedule, ScheduleError};
pub use scoring::{
    score_risk, RiskScore, RiskScoringEngine, ScoreComponent, ScoreFactor, ScoringStrategy,
    MAX_SCORE,
};
pub use service::{
    AssessmentService, AssessmentServiceError, AssessmentSubmission, ReviewRequest,
};
