use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{info, warn};

use super::classification::classify;
use super::domain::{
    AssessmentId, AssessmentStatus, FormEnum, ReviewDecision, ReviewVerdict, RiskLevel,
    SupplierProfile,
};
use super::intake::{classification_inputs, IntakeError, QuestionnaireForm};
use super::recommendations::recommended_actions;
use super::repository::{
    AssessmentRecord, AssessmentRepository, RepositoryError, ReviewNotice, ReviewNotifier,
};
use super::schedule::{ReassessmentSchedule, ScheduleError};
use super::scoring::{score_risk, ScoringStrategy};

/// Supplier questionnaire as posted by the portal.
#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentSubmission {
    pub supplier: SupplierProfile,
    pub questionnaire: QuestionnaireForm,
    /// Overrides the service default when present.
    #[serde(default)]
    pub strategy: Option<String>,
    /// Drafts may leave any question unanswered.
    #[serde(default)]
    pub draft: bool,
}

/// Staff decision on a submitted assessment.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewRequest {
    pub reviewer: String,
    pub verdict: ReviewVerdict,
    #[serde(default)]
    pub dpo_adjusted_risk_level: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Service composing intake, the scoring core, storage, and review notices.
pub struct AssessmentService<R, N> {
    repository: Arc<R>,
    notifier: Arc<N>,
    default_strategy: ScoringStrategy,
}

static ASSESSMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_assessment_id() -> AssessmentId {
    let id = ASSESSMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AssessmentId(format!("asm-{id:06}"))
}

impl<R, N> AssessmentService<R, N>
where
    R: AssessmentRepository + 'static,
    N: ReviewNotifier + 'static,
{
    pub fn new(repository: Arc<R>, notifier: Arc<N>, default_strategy: ScoringStrategy) -> Self {
        Self {
            repository,
            notifier,
            default_strategy,
        }
    }

    pub fn default_strategy(&self) -> ScoringStrategy {
        self.default_strategy
    }

    /// Run intake and the scoring core, then store the record.
    pub fn submit(
        &self,
        submission: AssessmentSubmission,
        today: NaiveDate,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        let record = self.build_record(next_assessment_id(), submission, today)?;
        let stored = self.repository.insert(record)?;
        info!(
            assessment_id = %stored.assessment_id.0,
            status = stored.status.label(),
            strategy = stored.strategy.label(),
            risk_score = stored.risk.score,
            risk_level = stored.risk.risk_level.label(),
            "assessment stored"
        );
        Ok(stored)
    }

    /// Replace a draft's answers. The record stays a draft while
    /// `submission.draft` is set, otherwise it moves to Submitted.
    pub fn complete(
        &self,
        assessment_id: &AssessmentId,
        submission: AssessmentSubmission,
        today: NaiveDate,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        let current = self.get(assessment_id)?;
        if current.status != AssessmentStatus::Draft {
            warn!(
                assessment_id = %assessment_id.0,
                status = current.status.label(),
                "draft update rejected for assessment outside draft status"
            );
            return Err(AssessmentServiceError::InvalidTransition {
                status: current.status.label(),
            });
        }

        let record = self.build_record(current.assessment_id, submission, today)?;
        self.repository.update(record.clone())?;
        info!(
            assessment_id = %record.assessment_id.0,
            status = record.status.label(),
            risk_score = record.risk.score,
            "draft updated"
        );
        Ok(record)
    }

    fn build_record(
        &self,
        assessment_id: AssessmentId,
        submission: AssessmentSubmission,
        today: NaiveDate,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        let strategy = match submission.strategy.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => {
                ScoringStrategy::from_form(raw).ok_or_else(|| IntakeError::InvalidEnum {
                    field: "strategy",
                    value: raw.to_string(),
                })?
            }
            _ => self.default_strategy,
        };

        let questionnaire = submission.questionnaire.into_response()?;

        let classification = match classification_inputs(&questionnaire) {
            Some((volume, sensitivity)) => {
                Some(classify(volume, sensitivity, questionnaire.contract_type))
            }
            None if submission.draft => None,
            None => {
                let field = if questionnaire.volume.is_none() {
                    "data_volume"
                } else {
                    "data_sensitivity"
                };
                return Err(IntakeError::MissingField(field).into());
            }
        };

        let risk = score_risk(strategy, &questionnaire);
        let actions = recommended_actions(risk.risk_level, submission.supplier.is_technology);
        let schedule = classification
            .map(|result| ReassessmentSchedule::compute(result.code, today))
            .transpose()?;

        let status = if submission.draft {
            AssessmentStatus::Draft
        } else {
            AssessmentStatus::Submitted
        };

        Ok(AssessmentRecord {
            assessment_id,
            supplier: submission.supplier,
            questionnaire,
            strategy,
            status,
            classification,
            risk,
            recommended_actions: actions,
            schedule,
            review: None,
            submitted_on: today,
        })
    }

    pub fn get(
        &self,
        assessment_id: &AssessmentId,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        let record = self
            .repository
            .fetch(assessment_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Submitted assessments awaiting review.
    pub fn pending(&self, limit: usize) -> Result<Vec<AssessmentRecord>, AssessmentServiceError> {
        Ok(self.repository.pending(limit)?)
    }

    /// Record a reviewer decision. The computed risk is left untouched; an
    /// override is stored on the review itself.
    pub fn review(
        &self,
        assessment_id: &AssessmentId,
        request: ReviewRequest,
        today: NaiveDate,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        let mut record = self.get(assessment_id)?;

        if record.status != AssessmentStatus::Submitted {
            warn!(
                assessment_id = %assessment_id.0,
                status = record.status.label(),
                "review rejected for assessment outside submitted status"
            );
            return Err(AssessmentServiceError::InvalidTransition {
                status: record.status.label(),
            });
        }

        let dpo_adjusted_risk_level = match request.dpo_adjusted_risk_level.as_deref() {
            Some(raw) if !raw.trim().is_empty() => Some(RiskLevel::from_form(raw).ok_or_else(
                || IntakeError::InvalidEnum {
                    field: "dpo_adjusted_risk_level",
                    value: raw.trim().to_string(),
                },
            )?),
            _ => None,
        };

        record.status = match request.verdict {
            ReviewVerdict::Approve => AssessmentStatus::Approved,
            ReviewVerdict::Reject => AssessmentStatus::Rejected,
        };

        if request.verdict == ReviewVerdict::Approve {
            record.schedule = record
                .classification
                .map(|result| ReassessmentSchedule::compute(result.code, today))
                .transpose()?;
        }

        record.review = Some(ReviewDecision {
            reviewer: request.reviewer,
            verdict: request.verdict,
            dpo_adjusted_risk_level,
            notes: request.notes,
            reviewed_on: today,
        });

        self.repository.update(record.clone())?;

        let mut details = BTreeMap::new();
        details.insert("supplier".to_string(), record.supplier.name.clone());
        details.insert("status".to_string(), record.status.label().to_string());
        details.insert(
            "risk_level".to_string(),
            record.effective_risk_level().label().to_string(),
        );
        if let Some(schedule) = &record.schedule {
            details.insert(
                "next_assessment_date".to_string(),
                schedule.next_assessment_date.to_string(),
            );
        }
        let template = match request.verdict {
            ReviewVerdict::Approve => "assessment_approved",
            ReviewVerdict::Reject => "assessment_rejected",
        };
        // The decision is already stored; a lost notice must not fail the review.
        if let Err(error) = self.notifier.publish(ReviewNotice {
            template: template.to_string(),
            assessment_id: record.assessment_id.clone(),
            details,
        }) {
            warn!(
                assessment_id = %record.assessment_id.0,
                template,
                %error,
                "review notice not delivered"
            );
        }

        info!(
            assessment_id = %record.assessment_id.0,
            status = record.status.label(),
            effective_risk_level = record.effective_risk_level().label(),
            "assessment reviewed"
        );
        Ok(record)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("assessment in status `{status}` does not allow this transition")]
    InvalidTransition { status: &'static str },
}
