use crate::infra::{parse_date, InMemoryAssessmentRepository, InMemoryReviewNotifier};
use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use vendor_risk::assessment::{
    classify_supplier_type, recommended_actions, score_risk, AssessmentRecord,
    AssessmentService, AssessmentSubmission, FormEnum, GrcForm, IntakeError, QuestionnaireForm,
    ReassessmentSchedule, ReviewRequest, ReviewVerdict, RiskScore, ScoringStrategy,
    SupplierProfile, SupplierTypeCode,
};
use vendor_risk::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct ClassifyArgs {
    /// Data volume: low, medium, high or massive
    #[arg(long)]
    pub(crate) volume: String,
    /// Data sensitivity: none, common or sensitive
    #[arg(long)]
    pub(crate) sensitivity: String,
    /// Contract type: continuous or punctual
    #[arg(long)]
    pub(crate) contract_type: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Questionnaire JSON file in the wizard payload shape
    #[arg(long)]
    pub(crate) questionnaire: PathBuf,
    /// Scoring table: legacy or grc
    #[arg(long, default_value = "legacy")]
    pub(crate) strategy: String,
    /// Append the technology-provider recommendations
    #[arg(long)]
    pub(crate) technology: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScheduleArgs {
    /// Supplier type code (A-D)
    #[arg(long)]
    pub(crate) code: String,
    /// Reference date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) from: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Submission and review date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Scoring table used for the sample supplier
    #[arg(long)]
    pub(crate) strategy: Option<String>,
    /// Skip the reviewer approval step
    #[arg(long)]
    pub(crate) skip_review: bool,
}

fn parse_strategy(raw: &str) -> Result<ScoringStrategy, IntakeError> {
    ScoringStrategy::from_form(raw).ok_or_else(|| IntakeError::InvalidEnum {
        field: "strategy",
        value: raw.to_string(),
    })
}

pub(crate) fn run_classify(args: ClassifyArgs) -> Result<(), AppError> {
    let result = classify_supplier_type(
        &args.volume,
        &args.sensitivity,
        args.contract_type.as_deref(),
    )?;
    println!("Supplier type {} ({})", result.code.label(), result.description);
    println!(
        "Reassessment every {} months",
        result.code.cadence_months()
    );
    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let strategy = parse_strategy(&args.strategy)?;
    let raw = std::fs::read_to_string(&args.questionnaire)?;
    let form: QuestionnaireForm = serde_json::from_str(&raw)?;
    let response = form.into_response()?;

    let risk = score_risk(strategy, &response);
    render_risk(strategy, &risk);
    render_actions(&recommended_actions(risk.risk_level, args.technology));
    Ok(())
}

pub(crate) fn run_schedule(args: ScheduleArgs) -> Result<(), AppError> {
    let code = SupplierTypeCode::from_form(&args.code).ok_or_else(|| IntakeError::InvalidEnum {
        field: "code",
        value: args.code.clone(),
    })?;
    let from = args.from.unwrap_or_else(|| Local::now().date_naive());
    let schedule = ReassessmentSchedule::compute(code, from)?;
    println!(
        "Supplier type {}: next assessment on {} ({} months after {})",
        code.label(),
        schedule.next_assessment_date,
        schedule.cadence_months,
        from
    );
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        today,
        strategy,
        skip_review,
    } = args;
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let strategy = strategy.as_deref().map(parse_strategy).transpose()?;

    let notifier = Arc::new(InMemoryReviewNotifier::default());
    let service = AssessmentService::new(
        Arc::new(InMemoryAssessmentRepository::default()),
        notifier.clone(),
        strategy.unwrap_or_default(),
    );

    println!("Vendor risk demo ({today})");
    let record = service.submit(sample_submission(), today)?;
    render_record(&record);

    if skip_review {
        return Ok(());
    }

    let reviewed = service.review(
        &record.assessment_id,
        ReviewRequest {
            reviewer: "encarregado@portal.example".to_string(),
            verdict: ReviewVerdict::Approve,
            dpo_adjusted_risk_level: Some("high".to_string()),
            notes: Some("Plano de ação recebido; risco reavaliado pelo DPO".to_string()),
        },
        today,
    )?;

    println!("\nReview");
    println!(
        "- status {} | computed {} | effective {}",
        reviewed.status.label(),
        reviewed.risk.risk_level.label(),
        reviewed.effective_risk_level().label()
    );
    for notice in notifier.events() {
        println!("- notice `{}` for {}", notice.template, notice.assessment_id.0);
    }
    Ok(())
}

fn sample_submission() -> AssessmentSubmission {
    AssessmentSubmission {
        supplier: SupplierProfile {
            name: "Nuvem Serviços Digitais Ltda".to_string(),
            document: "12.345.678/0001-90".to_string(),
            is_technology: true,
            contact_email: Some("privacidade@nuvem.example".to_string()),
        },
        questionnaire: QuestionnaireForm {
            data_type: Some("common".to_string()),
            volume: Some("high".to_string()),
            criticality: Some("critical".to_string()),
            policy: Some("yes".to_string()),
            certification: Some("yes".to_string()),
            subcontracting: Some("identified".to_string()),
            incidents: Some("resolved".to_string()),
            contract_type: Some("continuous".to_string()),
            grc: Some(GrcForm {
                has_dpo: Some(true),
                has_privacy_policy: Some(true),
                governance_program: Some("partial".to_string()),
                encryption_at_rest: Some(true),
                encryption_in_transit: Some(true),
                mfa: Some(true),
                log_retention: Some("6-12 months".to_string()),
                incident_response_plan: Some(true),
                report_timeframe: Some("under24h".to_string()),
                has_subprocessors: Some(true),
                subprocessor_evaluation: Some("sometimes".to_string()),
                subprocessor_contract_clauses: Some(true),
                subject_rights_channel: Some(true),
                subject_rights_response_days: Some(10),
                international_transfer: Some(true),
                transfer_mechanisms: vec!["Cláusulas-padrão contratuais".to_string()],
                certifications: vec!["ISO 27001".to_string()],
                ..GrcForm::default()
            }),
        },
        strategy: None,
        draft: false,
    }
}

fn render_record(record: &AssessmentRecord) {
    println!("Assessment {}", record.assessment_id.0);
    println!("- supplier {}", record.supplier.name);
    if let Some(classification) = record.classification {
        println!(
            "- supplier type {} ({})",
            classification.code.label(),
            classification.description
        );
    }
    render_risk(record.strategy, &record.risk);
    if let Some(schedule) = record.schedule {
        println!("- next assessment {}", schedule.next_assessment_date);
    }
    render_actions(&record.recommended_actions);
}

fn render_risk(strategy: ScoringStrategy, risk: &RiskScore) {
    println!(
        "- {} score {}/100 | {} | {}",
        strategy.label(),
        risk.score,
        risk.risk_level.label(),
        risk.description
    );
    for component in risk.components.iter().filter(|component| component.points > 0) {
        println!(
            "    +{:>2} {:?}: {}",
            component.points, component.factor, component.notes
        );
    }
}

fn render_actions(actions: &[String]) {
    println!("Recommended actions:");
    for action in actions {
        println!("  - {action}");
    }
}
