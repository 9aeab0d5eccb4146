use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;
use vendor_risk::assessment::{
    AssessmentId, AssessmentRecord, AssessmentRepository, AssessmentStatus, NotifierError,
    RepositoryError, ReviewNotice, ReviewNotifier,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryAssessmentRepository {
    records: Arc<Mutex<HashMap<AssessmentId, AssessmentRecord>>>,
}

impl InMemoryAssessmentRepository {
    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<AssessmentId, AssessmentRecord>>, RepositoryError>
    {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))
    }
}

impl AssessmentRepository for InMemoryAssessmentRepository {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        let mut guard = self.lock()?;
        if guard.contains_key(&record.assessment_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.assessment_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: AssessmentRecord) -> Result<(), RepositoryError> {
        let mut guard = self.lock()?;
        if guard.contains_key(&record.assessment_id) {
            guard.insert(record.assessment_id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Ok(self.lock()?.get(id).cloned())
    }

    fn pending(&self, limit: usize) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        let guard = self.lock()?;
        let mut pending: Vec<AssessmentRecord> = guard
            .values()
            .filter(|record| record.status == AssessmentStatus::Submitted)
            .cloned()
            .collect();
        pending.sort_by_key(queue_position);
        pending.truncate(limit);
        Ok(pending)
    }
}

/// First-in-first-out key: submission date, then the numeric id sequence.
fn queue_position(record: &AssessmentRecord) -> (NaiveDate, u64) {
    let sequence = record
        .assessment_id
        .0
        .strip_prefix("asm-")
        .and_then(|digits| digits.parse().ok())
        .unwrap_or(u64::MAX);
    (record.submitted_on, sequence)
}

/// Keeps review notices in memory and mirrors them to the log.
#[derive(Default, Clone)]
pub(crate) struct InMemoryReviewNotifier {
    events: Arc<Mutex<Vec<ReviewNotice>>>,
}

impl ReviewNotifier for InMemoryReviewNotifier {
    fn publish(&self, notice: ReviewNotice) -> Result<(), NotifierError> {
        info!(
            template = %notice.template,
            assessment_id = %notice.assessment_id.0,
            "review notice queued"
        );
        let mut guard = self
            .events
            .lock()
            .map_err(|_| NotifierError::Transport("notifier mutex poisoned".to_string()))?;
        guard.push(notice);
        Ok(())
    }
}

impl InMemoryReviewNotifier {
    pub(crate) fn events(&self) -> Vec<ReviewNotice> {
        self.events
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
