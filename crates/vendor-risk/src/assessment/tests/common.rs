use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::assessment::domain::{
    Answer, AssessmentId, AssessmentStatus, Criticality, DataType, DataVolume,
    EvaluationFrequency, GovernanceProgram, GrcControls, IncidentHistory, LogRetention,
    QuestionnaireResponse, ReportTimeframe, Subcontracting, SupplierProfile,
};
use crate::assessment::intake::{GrcForm, QuestionnaireForm};
use crate::assessment::repository::{
    AssessmentRecord, AssessmentRepository, NotifierError, RepositoryError, ReviewNotice,
    ReviewNotifier,
};
use crate::assessment::scoring::ScoringStrategy;
use crate::assessment::service::{AssessmentService, AssessmentSubmission, ReviewRequest};
use crate::assessment::ReviewVerdict;

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn today() -> NaiveDate {
    date(2024, 1, 31)
}

pub(super) fn supplier(is_technology: bool) -> SupplierProfile {
    SupplierProfile {
        name: "Nuvem Serviços Digitais Ltda".to_string(),
        document: "12.345.678/0001-90".to_string(),
        is_technology,
        contact_email: Some("privacidade@nuvem.example".to_string()),
    }
}

/// Every GRC answer at its best-practice value.
pub(super) fn best_practice_controls() -> GrcControls {
    GrcControls {
        has_dpo: Some(true),
        has_privacy_policy: Some(true),
        governance_program: Some(GovernanceProgram::Full),
        encryption_at_rest: Some(true),
        encryption_in_transit: Some(true),
        mfa: Some(true),
        log_retention: Some(LogRetention::OverTwelveMonths),
        recent_pentest: Some(true),
        incident_response_plan: Some(true),
        report_timeframe: Some(ReportTimeframe::Under12h),
        drp_tested: Some(true),
        has_subprocessors: Some(false),
        subprocessor_evaluation: None,
        subprocessor_contract_clauses: None,
        subject_rights_channel: Some(true),
        subject_rights_response_days: Some(5),
        international_transfer: Some(false),
        transfer_mechanisms: Vec::new(),
        certifications: vec!["ISO 27001".to_string()],
        external_audits: Some(true),
        violation_history: Some(false),
        periodic_risk_assessment: Some(true),
        security_kpis: Some("MTTR < 4h".to_string()),
        agrees_to_audits: Some(true),
    }
}

/// Every legacy answer at its best-practice value.
pub(super) fn best_practice_response() -> QuestionnaireResponse {
    QuestionnaireResponse {
        data_type: Some(DataType::None),
        volume: Some(DataVolume::Low),
        criticality: Some(Criticality::NonCritical),
        policy: Answer::Yes,
        certification: Answer::Yes,
        subcontracting: Subcontracting::None,
        incidents: Some(IncidentHistory::None),
        contract_type: None,
        grc: best_practice_controls(),
    }
}

pub(super) fn subprocessor_controls() -> GrcControls {
    GrcControls {
        has_subprocessors: Some(true),
        subprocessor_evaluation: Some(EvaluationFrequency::Always),
        subprocessor_contract_clauses: Some(true),
        ..GrcControls::default()
    }
}

pub(super) fn questionnaire_form() -> QuestionnaireForm {
    QuestionnaireForm {
        data_type: Some("sensitive".to_string()),
        volume: Some("high".to_string()),
        criticality: Some("critical".to_string()),
        policy: Some("yes".to_string()),
        certification: Some("no".to_string()),
        subcontracting: Some("identified".to_string()),
        incidents: Some("resolved".to_string()),
        contract_type: Some("continuous".to_string()),
        grc: Some(GrcForm {
            has_dpo: Some(true),
            has_privacy_policy: Some(true),
            governance_program: Some("partial".to_string()),
            encryption_in_transit: Some(true),
            log_retention: Some("6-12 months".to_string()),
            certifications: vec!["ISO 27001".to_string(), "  ".to_string()],
            ..GrcForm::default()
        }),
    }
}

pub(super) fn submission() -> AssessmentSubmission {
    AssessmentSubmission {
        supplier: supplier(true),
        questionnaire: questionnaire_form(),
        strategy: None,
        draft: false,
    }
}

pub(super) fn approval(level: Option<&str>) -> ReviewRequest {
    ReviewRequest {
        reviewer: "dpo@portal.example".to_string(),
        verdict: ReviewVerdict::Approve,
        dpo_adjusted_risk_level: level.map(str::to_string),
        notes: Some("Controles validados em reunião".to_string()),
    }
}

pub(super) fn build_service() -> (
    AssessmentService<MemoryRepository, MemoryNotifier>,
    Arc<MemoryRepository>,
    Arc<MemoryNotifier>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let notifier = Arc::new(MemoryNotifier::default());
    let service =
        AssessmentService::new(repository.clone(), notifier.clone(), ScoringStrategy::Legacy);
    (service, repository, notifier)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<AssessmentId, AssessmentRecord>>>,
}

impl AssessmentRepository for MemoryRepository {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.assessment_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.assessment_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: AssessmentRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.assessment_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn pending(&self, limit: usize) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| record.status == AssessmentStatus::Submitted)
            .take(limit)
            .cloned()
            .collect())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryNotifier {
    events: Arc<Mutex<Vec<ReviewNotice>>>,
}

impl MemoryNotifier {
    pub(super) fn events(&self) -> Vec<ReviewNotice> {
        self.events.lock().expect("notifier mutex poisoned").clone()
    }
}

impl ReviewNotifier for MemoryNotifier {
    fn publish(&self, notice: ReviewNotice) -> Result<(), NotifierError> {
        self.events
            .lock()
            .expect("notifier mutex poisoned")
            .push(notice);
        Ok(())
    }
}

pub(super) struct FailingNotifier;

impl ReviewNotifier for FailingNotifier {
    fn publish(&self, _notice: ReviewNotice) -> Result<(), NotifierError> {
        Err(NotifierError::Transport("smtp down".to_string()))
    }
}

pub(super) struct ConflictRepository;

impl AssessmentRepository for ConflictRepository {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _record: AssessmentRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    fn fetch(&self, _id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Ok(None)
    }

    fn pending(&self, _limit: usize) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl AssessmentRepository for UnavailableRepository {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: AssessmentRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn pending(&self, _limit: usize) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
