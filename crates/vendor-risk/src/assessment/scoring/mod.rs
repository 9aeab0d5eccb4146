mod grc;
mod legacy;

use serde::{Deserialize, Serialize};

use super::domain::{normalize, FormEnum, QuestionnaireResponse, RiskLevel};

pub const MAX_SCORE: u8 = 100;

/// Point table applied to a questionnaire.
///
/// The supplier form uses the seven-factor legacy table; the dedicated GRC
/// assessment uses the eight-category GRC table. Callers pick one explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringStrategy {
    #[default]
    Legacy,
    Grc,
}

impl ScoringStrategy {
    pub const fn label(self) -> &'static str {
        match self {
            ScoringStrategy::Legacy => "legacy",
            ScoringStrategy::Grc => "grc",
        }
    }
}

impl FormEnum for ScoringStrategy {
    fn from_form(raw: &str) -> Option<Self> {
        match normalize(raw).as_str() {
            "legacy" => Some(Self::Legacy),
            "grc" => Some(Self::Grc),
            _ => None,
        }
    }
}

/// Scoring factor a component was credited under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    DataType,
    Volume,
    Criticality,
    PrivacyPolicy,
    Certification,
    Subcontracting,
    Incidents,
    Governance,
    TechnicalSecurity,
    IncidentContinuity,
    SubjectRights,
    InternationalTransfer,
    CertificationsAudits,
    ContinuousMonitoring,
}

/// Discrete contribution to a score, kept so reviewers can audit the total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub points: u8,
    pub notes: String,
}

/// Weighted score, band, and the breakdown that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskScore {
    pub score: u8,
    pub risk_level: RiskLevel,
    pub description: &'static str,
    pub components: Vec<ScoreComponent>,
}

impl RiskScore {
    fn from_tally(tally: Tally) -> Self {
        let score = tally.total.min(MAX_SCORE as u16) as u8;
        let risk_level = RiskLevel::from_score(score);
        Self {
            score,
            risk_level,
            description: risk_level.description(),
            components: tally.components,
        }
    }
}

#[derive(Default)]
pub(crate) struct Tally {
    components: Vec<ScoreComponent>,
    total: u16,
}

impl Tally {
    fn award(&mut self, factor: ScoreFactor, points: u8, notes: impl Into<String>) {
        self.total += points as u16;
        self.components.push(ScoreComponent {
            factor,
            points,
            notes: notes.into(),
        });
    }
}

/// Stateless engine bound to one strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskScoringEngine {
    strategy: ScoringStrategy,
}

impl RiskScoringEngine {
    pub fn new(strategy: ScoringStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> ScoringStrategy {
        self.strategy
    }

    pub fn score(&self, response: &QuestionnaireResponse) -> RiskScore {
        score_risk(self.strategy, response)
    }
}

/// Score a questionnaire under the given strategy. Unanswered questions earn
/// zero points; the call never fails.
pub fn score_risk(strategy: ScoringStrategy, response: &QuestionnaireResponse) -> RiskScore {
    let tally = match strategy {
        ScoringStrategy::Legacy => legacy::score_questionnaire(response),
        ScoringStrategy::Grc => grc::score_controls(&response.grc),
    };
    RiskScore::from_tally(tally)
}
