//! Adapters turning wizard form state into the canonical questionnaire.
//!
//! Two front-end wizards feed the core: the questionnaire wizard posts the
//! full answer set ([`QuestionnaireForm`]) while the older supplier wizard only
//! tracks the live-classification inputs ([`SupplierWizardState`]). Both are
//! reduced to a [`QuestionnaireResponse`] here so classification and scoring
//! only ever see one shape.

use serde::{Deserialize, Serialize};

use super::classification::{classify, ClassificationResult};
use super::domain::{
    Answer, ContractType, Criticality, DataType, DataVolume, EvaluationFrequency, FormEnum,
    GovernanceProgram, GrcControls, IncidentHistory, LogRetention, QuestionnaireResponse,
    ReportTimeframe, Subcontracting,
};

/// Rejections raised while reading wizard input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("field `{field}` holds unsupported value {value:?}")]
    InvalidEnum { field: &'static str, value: String },
    #[error("field `{0}` is required")]
    MissingField(&'static str),
}

fn present(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

pub(crate) fn parse_optional<T: FormEnum>(
    field: &'static str,
    raw: Option<&str>,
) -> Result<Option<T>, IntakeError> {
    match present(raw) {
        None => Ok(None),
        Some(value) => T::from_form(value)
            .map(Some)
            .ok_or_else(|| IntakeError::InvalidEnum {
                field,
                value: value.to_string(),
            }),
    }
}

pub(crate) fn parse_required<T: FormEnum>(
    field: &'static str,
    raw: Option<&str>,
) -> Result<T, IntakeError> {
    parse_optional(field, raw)?.ok_or(IntakeError::MissingField(field))
}

fn parse_or_default<T: FormEnum + Default>(
    field: &'static str,
    raw: Option<&str>,
) -> Result<T, IntakeError> {
    Ok(parse_optional(field, raw)?.unwrap_or_default())
}

fn non_blank(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect()
}

/// Payload posted by the questionnaire wizard. Enum answers travel as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuestionnaireForm {
    pub data_type: Option<String>,
    pub volume: Option<String>,
    pub criticality: Option<String>,
    pub policy: Option<String>,
    pub certification: Option<String>,
    pub subcontracting: Option<String>,
    pub incidents: Option<String>,
    pub contract_type: Option<String>,
    pub grc: Option<GrcForm>,
}

impl QuestionnaireForm {
    /// Parse every answer. Blank answers fall back to their unknown default.
    pub fn into_response(self) -> Result<QuestionnaireResponse, IntakeError> {
        let data_type: Option<DataType> = parse_optional("data_type", self.data_type.as_deref())?;
        let volume: Option<DataVolume> = parse_optional("volume", self.volume.as_deref())?;
        let criticality: Option<Criticality> =
            parse_optional("criticality", self.criticality.as_deref())?;
        let policy: Answer = parse_or_default("policy", self.policy.as_deref())?;
        let certification: Answer =
            parse_or_default("certification", self.certification.as_deref())?;
        let subcontracting: Subcontracting =
            parse_or_default("subcontracting", self.subcontracting.as_deref())?;
        let incidents: Option<IncidentHistory> =
            parse_optional("incidents", self.incidents.as_deref())?;
        let contract_type: Option<ContractType> =
            parse_optional("contract_type", self.contract_type.as_deref())?;
        let grc = match self.grc {
            Some(form) => form.into_controls()?,
            None => GrcControls::default(),
        };

        Ok(QuestionnaireResponse {
            data_type,
            volume,
            criticality,
            policy,
            certification,
            subcontracting,
            incidents,
            contract_type,
            grc,
        })
    }
}

/// GRC section of the questionnaire wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GrcForm {
    pub has_dpo: Option<bool>,
    pub has_privacy_policy: Option<bool>,
    pub governance_program: Option<String>,
    pub encryption_at_rest: Option<bool>,
    pub encryption_in_transit: Option<bool>,
    pub mfa: Option<bool>,
    pub log_retention: Option<String>,
    pub recent_pentest: Option<bool>,
    pub incident_response_plan: Option<bool>,
    pub report_timeframe: Option<String>,
    pub drp_tested: Option<bool>,
    pub has_subprocessors: Option<bool>,
    pub subprocessor_evaluation: Option<String>,
    pub subprocessor_contract_clauses: Option<bool>,
    pub subject_rights_channel: Option<bool>,
    pub subject_rights_response_days: Option<u16>,
    pub international_transfer: Option<bool>,
    pub transfer_mechanisms: Vec<String>,
    pub certifications: Vec<String>,
    pub external_audits: Option<bool>,
    pub violation_history: Option<bool>,
    pub periodic_risk_assessment: Option<bool>,
    pub security_kpis: Option<String>,
    pub agrees_to_audits: Option<bool>,
}

impl GrcForm {
    pub fn into_controls(self) -> Result<GrcControls, IntakeError> {
        let governance_program: Option<GovernanceProgram> =
            parse_optional("governance_program", self.governance_program.as_deref())?;
        let log_retention: Option<LogRetention> =
            parse_optional("log_retention", self.log_retention.as_deref())?;
        let report_timeframe: Option<ReportTimeframe> =
            parse_optional("report_timeframe", self.report_timeframe.as_deref())?;
        let subprocessor_evaluation: Option<EvaluationFrequency> = parse_optional(
            "subprocessor_evaluation",
            self.subprocessor_evaluation.as_deref(),
        )?;

        Ok(GrcControls {
            has_dpo: self.has_dpo,
            has_privacy_policy: self.has_privacy_policy,
            governance_program,
            encryption_at_rest: self.encryption_at_rest,
            encryption_in_transit: self.encryption_in_transit,
            mfa: self.mfa,
            log_retention,
            recent_pentest: self.recent_pentest,
            incident_response_plan: self.incident_response_plan,
            report_timeframe,
            drp_tested: self.drp_tested,
            has_subprocessors: self.has_subprocessors,
            subprocessor_evaluation,
            subprocessor_contract_clauses: self.subprocessor_contract_clauses,
            subject_rights_channel: self.subject_rights_channel,
            subject_rights_response_days: self.subject_rights_response_days,
            international_transfer: self.international_transfer,
            transfer_mechanisms: non_blank(self.transfer_mechanisms),
            certifications: non_blank(self.certifications),
            external_audits: self.external_audits,
            violation_history: self.violation_history,
            periodic_risk_assessment: self.periodic_risk_assessment,
            security_kpis: self
                .security_kpis
                .map(|text| text.trim().to_string())
                .filter(|text| !text.is_empty()),
            agrees_to_audits: self.agrees_to_audits,
        })
    }
}

/// Live-classification props kept by the older supplier wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SupplierWizardState {
    pub data_volume: Option<String>,
    pub data_sensitivity: Option<String>,
    pub contract_type: Option<String>,
}

impl SupplierWizardState {
    pub fn into_response(self) -> Result<QuestionnaireResponse, IntakeError> {
        Ok(QuestionnaireResponse {
            volume: parse_optional("data_volume", self.data_volume.as_deref())?,
            data_type: parse_optional("data_sensitivity", self.data_sensitivity.as_deref())?,
            contract_type: parse_optional("contract_type", self.contract_type.as_deref())?,
            ..QuestionnaireResponse::default()
        })
    }

    /// Classify the wizard state; both axes must be answered.
    pub fn classify(&self) -> Result<ClassificationResult, IntakeError> {
        let volume: DataVolume = parse_required("data_volume", self.data_volume.as_deref())?;
        let sensitivity: DataType =
            parse_required("data_sensitivity", self.data_sensitivity.as_deref())?;
        let contract_type: Option<ContractType> =
            parse_optional("contract_type", self.contract_type.as_deref())?;
        Ok(classify(volume, sensitivity, contract_type))
    }
}

/// Classification inputs read from a canonical response, if both are present.
pub(crate) fn classification_inputs(
    response: &QuestionnaireResponse,
) -> Option<(DataVolume, DataType)> {
    Some((response.volume?, response.data_type?))
}
