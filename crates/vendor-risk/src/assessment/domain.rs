use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for stored assessments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssessmentId(pub String);

/// Enumerations collected by the intake wizards.
///
/// Form values arrive as free text, so every enum can be read from the raw
/// wizard vocabulary. Matching ignores case, surrounding whitespace, and the
/// `-`/`_`/space separators used interchangeably by the two wizards.
pub trait FormEnum: Sized {
    fn from_form(raw: &str) -> Option<Self>;
}

pub(crate) fn normalize(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '-' || c == ' ' { '_' } else { c })
        .collect()
}

/// Sensitivity of the personal data the supplier handles.
///
/// The older supplier wizard used `non-sensitive`/`regular`; both vocabularies
/// land on the same variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    #[serde(alias = "non_sensitive")]
    None,
    #[serde(alias = "regular")]
    Common,
    Sensitive,
}

impl DataType {
    pub const ALL: [DataType; 3] = [DataType::None, DataType::Common, DataType::Sensitive];
}

impl FormEnum for DataType {
    fn from_form(raw: &str) -> Option<Self> {
        match normalize(raw).as_str() {
            "none" | "non_sensitive" | "nonsensitive" => Some(Self::None),
            "common" | "regular" => Some(Self::Common),
            "sensitive" => Some(Self::Sensitive),
            _ => None,
        }
    }
}

/// Volume of data subjects processed by the supplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataVolume {
    Low,
    Medium,
    High,
    Massive,
}

impl DataVolume {
    pub const ALL: [DataVolume; 4] = [
        DataVolume::Low,
        DataVolume::Medium,
        DataVolume::High,
        DataVolume::Massive,
    ];
}

impl FormEnum for DataVolume {
    fn from_form(raw: &str) -> Option<Self> {
        match normalize(raw).as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "massive" => Some(Self::Massive),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criticality {
    NonCritical,
    Critical,
}

impl FormEnum for Criticality {
    fn from_form(raw: &str) -> Option<Self> {
        match normalize(raw).as_str() {
            "non_critical" | "noncritical" => Some(Self::NonCritical),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }
}

/// Tri-state answer for yes/no questions that may be left open on drafts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    Yes,
    No,
    #[default]
    Unknown,
}

impl FormEnum for Answer {
    fn from_form(raw: &str) -> Option<Self> {
        match normalize(raw).as_str() {
            "yes" | "sim" => Some(Self::Yes),
            "no" | "nao" | "não" => Some(Self::No),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subcontracting {
    None,
    Identified,
    #[default]
    Unknown,
}

impl FormEnum for Subcontracting {
    fn from_form(raw: &str) -> Option<Self> {
        match normalize(raw).as_str() {
            "none" => Some(Self::None),
            "identified" => Some(Self::Identified),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentHistory {
    None,
    Resolved,
    Unresolved,
}

impl FormEnum for IncidentHistory {
    fn from_form(raw: &str) -> Option<Self> {
        match normalize(raw).as_str() {
            "none" => Some(Self::None),
            "resolved" => Some(Self::Resolved),
            "unresolved" => Some(Self::Unresolved),
            _ => None,
        }
    }
}

/// Contract modality captured alongside the classification inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    Continuous,
    Punctual,
}

impl FormEnum for ContractType {
    fn from_form(raw: &str) -> Option<Self> {
        match normalize(raw).as_str() {
            "continuous" => Some(Self::Continuous),
            "punctual" => Some(Self::Punctual),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GovernanceProgram {
    Full,
    Partial,
    None,
}

impl FormEnum for GovernanceProgram {
    fn from_form(raw: &str) -> Option<Self> {
        match normalize(raw).as_str() {
            "full" => Some(Self::Full),
            "partial" => Some(Self::Partial),
            "none" => Some(Self::None),
            _ => None,
        }
    }
}

/// Retention band for security logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogRetention {
    OverTwelveMonths,
    SixToTwelveMonths,
    UnderSixMonths,
    None,
}

impl FormEnum for LogRetention {
    fn from_form(raw: &str) -> Option<Self> {
        match normalize(raw).as_str() {
            "over_twelve_months" | "more_than_12_months" | ">12" => Some(Self::OverTwelveMonths),
            "six_to_twelve_months" | "6_12_months" | "6_12" => Some(Self::SixToTwelveMonths),
            "under_six_months" | "less_than_6_months" | "<6" => Some(Self::UnderSixMonths),
            "none" => Some(Self::None),
            _ => None,
        }
    }
}

/// How quickly the supplier commits to reporting an incident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportTimeframe {
    Under12h,
    Under24h,
    Under48h,
    Over48h,
}

impl FormEnum for ReportTimeframe {
    fn from_form(raw: &str) -> Option<Self> {
        match normalize(raw).as_str() {
            "under12h" | "under_12h" | "<12h" => Some(Self::Under12h),
            "under24h" | "under_24h" | "<24h" => Some(Self::Under24h),
            "under48h" | "under_48h" | "<48h" => Some(Self::Under48h),
            "over48h" | "over_48h" | ">48h" => Some(Self::Over48h),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationFrequency {
    Always,
    Sometimes,
    Never,
}

impl FormEnum for EvaluationFrequency {
    fn from_form(raw: &str) -> Option<Self> {
        match normalize(raw).as_str() {
            "always" => Some(Self::Always),
            "sometimes" => Some(Self::Sometimes),
            "never" => Some(Self::Never),
            _ => None,
        }
    }
}

/// Extended governance, risk and compliance answers used by the GRC strategy.
///
/// `None` means the question was not answered yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrcControls {
    pub has_dpo: Option<bool>,
    pub has_privacy_policy: Option<bool>,
    pub governance_program: Option<GovernanceProgram>,
    pub encryption_at_rest: Option<bool>,
    pub encryption_in_transit: Option<bool>,
    pub mfa: Option<bool>,
    pub log_retention: Option<LogRetention>,
    pub recent_pentest: Option<bool>,
    pub incident_response_plan: Option<bool>,
    pub report_timeframe: Option<ReportTimeframe>,
    pub drp_tested: Option<bool>,
    pub has_subprocessors: Option<bool>,
    pub subprocessor_evaluation: Option<EvaluationFrequency>,
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

/// Canonical questionnaire shape consumed by classification and scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionnaireResponse {
    pub data_type: Option<DataType>,
    pub volume: Option<DataVolume>,
    pub criticality: Option<Criticality>,
    pub policy: Answer,
    pub certification: Answer,
    pub subcontracting: Subcontracting,
    pub incidents: Option<IncidentHistory>,
    pub contract_type: Option<ContractType>,
    pub grc: GrcControls,
}

/// Four-tier supplier type, ordered from most to least critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SupplierTypeCode {
    A,
    B,
    C,
    D,
}

impl SupplierTypeCode {
    pub const fn description(self) -> &'static str {
        match self {
            SupplierTypeCode::A => "CRÍTICO",
            SupplierTypeCode::B => "SIGNIFICATIVO",
            SupplierTypeCode::C => "MODERADO",
            SupplierTypeCode::D => "BÁSICO",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            SupplierTypeCode::A => "A",
            SupplierTypeCode::B => "B",
            SupplierTypeCode::C => "C",
            SupplierTypeCode::D => "D",
        }
    }
}

impl FormEnum for SupplierTypeCode {
    fn from_form(raw: &str) -> Option<Self> {
        match normalize(raw).as_str() {
            "a" => Some(Self::A),
            "b" => Some(Self::B),
            "c" => Some(Self::C),
            "d" => Some(Self::D),
            _ => None,
        }
    }
}

/// Risk band derived from a numeric score. Ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::Critical,
    ];

    /// Fixed bands: 75+ low, 50..75 medium, 30..50 high, below 30 critical.
    pub const fn from_score(score: u8) -> Self {
        if score >= 75 {
            RiskLevel::Low
        } else if score >= 50 {
            RiskLevel::Medium
        } else if score >= 30 {
            RiskLevel::High
        } else {
            RiskLevel::Critical
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            RiskLevel::Low => {
                "Risco baixo: o fornecedor demonstra controles adequados de proteção de dados."
            }
            RiskLevel::Medium => {
                "Risco médio: existem lacunas pontuais que exigem acompanhamento."
            }
            RiskLevel::High => {
                "Risco alto: lacunas relevantes de governança ou segurança precisam ser tratadas."
            }
            RiskLevel::Critical => {
                "Risco crítico: o tratamento de dados pelo fornecedor não deve prosseguir sem mitigação imediata."
            }
        }
    }
}

impl FormEnum for RiskLevel {
    fn from_form(raw: &str) -> Option<Self> {
        match normalize(raw).as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }
}

/// Supplier identity attached to an assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierProfile {
    pub name: String,
    /// CNPJ of the supplier.
    pub document: String,
    #[serde(default)]
    pub is_technology: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
}

/// Lifecycle of an assessment record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStatus {
    Draft,
    Submitted,
    Approved,
    Rejected,
}

impl AssessmentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            AssessmentStatus::Draft => "draft",
            AssessmentStatus::Submitted => "submitted",
            AssessmentStatus::Approved => "approved",
            AssessmentStatus::Rejected => "rejected",
        }
    }
}

/// Reviewer verdict recorded during approval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewVerdict {
    Approve,
    Reject,
}

/// Outcome of a staff review, stored next to the computed risk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewDecision {
    pub reviewer: String,
    pub verdict: ReviewVerdict,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dpo_adjusted_risk_level: Option<RiskLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub reviewed_on: NaiveDate,
}
