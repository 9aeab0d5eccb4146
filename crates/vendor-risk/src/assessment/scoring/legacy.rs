use super::super::domain::{
    Answer, Criticality, DataType, DataVolume, IncidentHistory, QuestionnaireResponse,
    Subcontracting,
};
use super::{ScoreFactor, Tally};

// Seven factors, 100 points when every answer is the best-practice value:
// data type 20, volume 15, criticality 15, policy 15, certification 10,
// subcontracting 15, incidents 10.

pub(crate) fn score_questionnaire(response: &QuestionnaireResponse) -> Tally {
    let mut tally = Tally::default();

    match response.data_type {
        Some(DataType::None) => tally.award(ScoreFactor::DataType, 20, "no personal data"),
        Some(DataType::Common) => tally.award(ScoreFactor::DataType, 10, "common personal data"),
        Some(DataType::Sensitive) => {
            tally.award(ScoreFactor::DataType, 0, "sensitive personal data")
        }
        None => tally.award(ScoreFactor::DataType, 0, "data type not answered"),
    }

    match response.volume {
        Some(DataVolume::Low) => tally.award(ScoreFactor::Volume, 15, "low volume"),
        Some(DataVolume::Medium) => tally.award(ScoreFactor::Volume, 8, "medium volume"),
        Some(DataVolume::High) => tally.award(ScoreFactor::Volume, 0, "high volume"),
        Some(DataVolume::Massive) => tally.award(ScoreFactor::Volume, 0, "massive volume"),
        None => tally.award(ScoreFactor::Volume, 0, "volume not answered"),
    }

    match response.criticality {
        Some(Criticality::NonCritical) => {
            tally.award(ScoreFactor::Criticality, 15, "non-critical service")
        }
        Some(Criticality::Critical) => tally.award(ScoreFactor::Criticality, 0, "critical service"),
        None => tally.award(ScoreFactor::Criticality, 0, "criticality not answered"),
    }

    match response.policy {
        Answer::Yes => tally.award(ScoreFactor::PrivacyPolicy, 15, "privacy policy in place"),
        Answer::No => tally.award(ScoreFactor::PrivacyPolicy, 0, "no privacy policy"),
        Answer::Unknown => tally.award(ScoreFactor::PrivacyPolicy, 0, "privacy policy unknown"),
    }

    match response.certification {
        Answer::Yes => tally.award(ScoreFactor::Certification, 10, "certified"),
        Answer::No => tally.award(ScoreFactor::Certification, 0, "no certification"),
        Answer::Unknown => tally.award(ScoreFactor::Certification, 0, "certification unknown"),
    }

    match response.subcontracting {
        Subcontracting::None => tally.award(ScoreFactor::Subcontracting, 15, "no subcontractors"),
        Subcontracting::Identified => {
            tally.award(ScoreFactor::Subcontracting, 8, "subcontractors identified")
        }
        Subcontracting::Unknown => {
            tally.award(ScoreFactor::Subcontracting, 0, "subcontracting unknown")
        }
    }

    match response.incidents {
        Some(IncidentHistory::None) => tally.award(ScoreFactor::Incidents, 10, "no incidents"),
        Some(IncidentHistory::Resolved) => {
            tally.award(ScoreFactor::Incidents, 5, "past incidents resolved")
        }
        Some(IncidentHistory::Unresolved) => {
            tally.award(ScoreFactor::Incidents, 0, "unresolved incidents")
        }
        None => tally.award(ScoreFactor::Incidents, 0, "incident history not answered"),
    }

    tally
}
