use super::super::domain::{
    EvaluationFrequency, GovernanceProgram, GrcControls, LogRetention, ReportTimeframe,
};
use super::{ScoreFactor, Tally};

fn credit(tally: &mut Tally, factor: ScoreFactor, answer: Option<bool>, points: u8, what: &str) {
    match answer {
        Some(true) => tally.award(factor, points, what.to_string()),
        Some(false) => tally.award(factor, 0, format!("missing: {what}")),
        None => tally.award(factor, 0, format!("not answered: {what}")),
    }
}

pub(crate) fn score_controls(controls: &GrcControls) -> Tally {
    let mut tally = Tally::default();
    governance(&mut tally, controls);
    technical_security(&mut tally, controls);
    incident_continuity(&mut tally, controls);
    subcontracting(&mut tally, controls);
    subject_rights(&mut tally, controls);
    international_transfer(&mut tally, controls);
    certifications_audits(&mut tally, controls);
    continuous_monitoring(&mut tally, controls);
    tally
}

// 20 points.
fn governance(tally: &mut Tally, controls: &GrcControls) {
    let factor = ScoreFactor::Governance;
    credit(tally, factor, controls.has_dpo, 6, "appointed DPO");
    credit(tally, factor, controls.has_privacy_policy, 6, "privacy policy");
    match controls.governance_program {
        Some(GovernanceProgram::Full) => tally.award(factor, 8, "full governance program"),
        Some(GovernanceProgram::Partial) => tally.award(factor, 4, "partial governance program"),
        Some(GovernanceProgram::None) => tally.award(factor, 0, "no governance program"),
        None => tally.award(factor, 0, "not answered: governance program"),
    }
}

// 25 points.
fn technical_security(tally: &mut Tally, controls: &GrcControls) {
    let factor = ScoreFactor::TechnicalSecurity;
    credit(tally, factor, controls.encryption_at_rest, 5, "encryption at rest");
    credit(tally, factor, controls.encryption_in_transit, 5, "encryption in transit");
    credit(tally, factor, controls.mfa, 5, "multi-factor authentication");
    match controls.log_retention {
        Some(LogRetention::OverTwelveMonths) => {
            tally.award(factor, 5, "logs retained over 12 months")
        }
        Some(LogRetention::SixToTwelveMonths) => {
            tally.award(factor, 3, "logs retained 6 to 12 months")
        }
        Some(LogRetention::UnderSixMonths) => {
            tally.award(factor, 2, "logs retained under 6 months")
        }
        Some(LogRetention::None) => tally.award(factor, 0, "no log retention"),
        None => tally.award(factor, 0, "not answered: log retention"),
    }
    credit(tally, factor, controls.recent_pentest, 5, "recent penetration test");
}

// 15 points.
fn incident_continuity(tally: &mut Tally, controls: &GrcControls) {
    let factor = ScoreFactor::IncidentContinuity;
    credit(tally, factor, controls.incident_response_plan, 5, "incident response plan");
    match controls.report_timeframe {
        Some(ReportTimeframe::Under12h) => tally.award(factor, 5, "reports incidents within 12h"),
        Some(ReportTimeframe::Under24h) => tally.award(factor, 3, "reports incidents within 24h"),
        Some(ReportTimeframe::Under48h) => tally.award(factor, 1, "reports incidents within 48h"),
        Some(ReportTimeframe::Over48h) => tally.award(factor, 0, "reports incidents after 48h"),
        None => tally.award(factor, 0, "not answered: incident report timeframe"),
    }
    credit(tally, factor, controls.drp_tested, 5, "tested disaster recovery plan");
}

// 10 points. Only an explicit "no subprocessors" earns the full credit; an
// unanswered gate still scores the evaluation and clause answers.
fn subcontracting(tally: &mut Tally, controls: &GrcControls) {
    let factor = ScoreFactor::Subcontracting;
    if controls.has_subprocessors == Some(false) {
        tally.award(factor, 10, "no subprocessors");
        return;
    }
    if controls.has_subprocessors.is_none() {
        tally.award(factor, 0, "not answered: subprocessors");
    }
    match controls.subprocessor_evaluation {
        Some(EvaluationFrequency::Always) => {
            tally.award(factor, 3, "subprocessors always evaluated")
        }
        Some(EvaluationFrequency::Sometimes) => {
            tally.award(factor, 1, "subprocessors sometimes evaluated")
        }
        Some(EvaluationFrequency::Never) => tally.award(factor, 0, "subprocessors never evaluated"),
        None => tally.award(factor, 0, "not answered: subprocessor evaluation"),
    }
    credit(
        tally,
        factor,
        controls.subprocessor_contract_clauses,
        2,
        "data protection clauses with subprocessors",
    );
}

// 10 points.
fn subject_rights(tally: &mut Tally, controls: &GrcControls) {
    let factor = ScoreFactor::SubjectRights;
    credit(tally, factor, controls.subject_rights_channel, 5, "data subject channel");
    match controls.subject_rights_response_days {
        Some(days @ 0..=5) => tally.award(factor, 5, format!("answers requests in {days} days")),
        Some(days @ 6..=10) => tally.award(factor, 3, format!("answers requests in {days} days")),
        Some(days @ 11..=15) => tally.award(factor, 1, format!("answers requests in {days} days")),
        Some(days) => tally.award(factor, 0, format!("answers requests in {days} days")),
        None => tally.award(factor, 0, "not answered: request response time"),
    }
}

// 5 points. No transfer earns full credit; otherwise a declared mechanism
// earns 3, whether or not the transfer question itself was answered.
fn international_transfer(tally: &mut Tally, controls: &GrcControls) {
    let factor = ScoreFactor::InternationalTransfer;
    if controls.international_transfer == Some(false) {
        tally.award(factor, 5, "no international transfer");
        return;
    }
    if controls.international_transfer.is_none() {
        tally.award(factor, 0, "not answered: international transfer");
    }
    if controls.transfer_mechanisms.is_empty() {
        tally.award(factor, 0, "international transfer without mechanism");
    } else {
        tally.award(
            factor,
            3,
            format!(
                "international transfer under {}",
                controls.transfer_mechanisms.join(", ")
            ),
        );
    }
}

// 10 points.
fn certifications_audits(tally: &mut Tally, controls: &GrcControls) {
    let factor = ScoreFactor::CertificationsAudits;
    if controls.certifications.is_empty() {
        tally.award(factor, 0, "no certifications declared");
    } else {
        tally.award(
            factor,
            4,
            format!("certifications: {}", controls.certifications.join(", ")),
        );
    }
    credit(tally, factor, controls.external_audits, 4, "external audits");
    match controls.violation_history {
        Some(false) => tally.award(factor, 2, "no violation history"),
        Some(true) => tally.award(factor, 0, "previous violations"),
        None => tally.award(factor, 0, "not answered: violation history"),
    }
}

// 5 points.
fn continuous_monitoring(tally: &mut Tally, controls: &GrcControls) {
    let factor = ScoreFactor::ContinuousMonitoring;
    credit(tally, factor, controls.periodic_risk_assessment, 2, "periodic risk assessment");
    match controls.security_kpis.as_deref().map(str::trim) {
        Some(kpis) if !kpis.is_empty() => tally.award(factor, 1, "security KPIs tracked"),
        _ => tally.award(factor, 0, "no security KPIs"),
    }
    credit(tally, factor, controls.agrees_to_audits, 2, "agrees to audits");
}
