use super::common::*;
use crate::assessment::domain::{
    Answer, ContractType, Criticality, DataType, DataVolume, GovernanceProgram, IncidentHistory,
    LogRetention, QuestionnaireResponse, Subcontracting, SupplierTypeCode,
};
use crate::assessment::intake::{GrcForm, IntakeError, QuestionnaireForm, SupplierWizardState};

#[test]
fn questionnaire_form_maps_to_canonical_response() {
    let response = questionnaire_form().into_response().expect("valid form");

    assert_eq!(response.data_type, Some(DataType::Sensitive));
    assert_eq!(response.volume, Some(DataVolume::High));
    assert_eq!(response.criticality, Some(Criticality::Critical));
    assert_eq!(response.policy, Answer::Yes);
    assert_eq!(response.certification, Answer::No);
    assert_eq!(response.subcontracting, Subcontracting::Identified);
    assert_eq!(response.incidents, Some(IncidentHistory::Resolved));
    assert_eq!(response.contract_type, Some(ContractType::Continuous));
    assert_eq!(
        response.grc.governance_program,
        Some(GovernanceProgram::Partial)
    );
    assert_eq!(
        response.grc.log_retention,
        Some(LogRetention::SixToTwelveMonths)
    );
    assert_eq!(response.grc.certifications, vec!["ISO 27001".to_string()]);
}

#[test]
fn blank_and_missing_answers_fall_back_to_unknown() {
    let form = QuestionnaireForm {
        policy: Some("   ".to_string()),
        ..QuestionnaireForm::default()
    };
    let response = form.into_response().expect("empty form is a valid draft");
    assert_eq!(response, QuestionnaireResponse::default());
    assert_eq!(response.policy, Answer::Unknown);
    assert_eq!(response.subcontracting, Subcontracting::Unknown);
}

#[test]
fn invalid_answers_name_the_field() {
    let form = QuestionnaireForm {
        volume: Some("huge".to_string()),
        ..questionnaire_form()
    };
    assert_eq!(
        form.into_response(),
        Err(IntakeError::InvalidEnum {
            field: "volume",
            value: "huge".to_string(),
        })
    );

    let form = QuestionnaireForm {
        grc: Some(GrcForm {
            report_timeframe: Some("next week".to_string()),
            ..GrcForm::default()
        }),
        ..QuestionnaireForm::default()
    };
    let error = form.into_response().expect_err("timeframe outside domain");
    assert!(error.to_string().contains("report_timeframe"));
}

#[test]
fn questionnaire_form_reads_camel_case_payloads() {
    let payload = serde_json::json!({
        "dataType": "common",
        "volume": "medium",
        "grc": {
            "hasDpo": true,
            "reportTimeframe": "under24h",
            "subjectRightsResponseDays": 7,
            "transferMechanisms": ["SCC"]
        }
    });
    let form: QuestionnaireForm = serde_json::from_value(payload).expect("payload parses");
    let response = form.into_response().expect("valid form");
    assert_eq!(response.data_type, Some(DataType::Common));
    assert_eq!(response.grc.has_dpo, Some(true));
    assert_eq!(response.grc.subject_rights_response_days, Some(7));
    assert_eq!(response.grc.transfer_mechanisms, vec!["SCC".to_string()]);
}

#[test]
fn supplier_wizard_state_classifies_with_old_vocabulary() {
    let state = SupplierWizardState {
        data_volume: Some("massive".to_string()),
        data_sensitivity: Some("regular".to_string()),
        contract_type: Some("continuous".to_string()),
    };
    let result = state.classify().expect("valid wizard state");
    assert_eq!(result.code, SupplierTypeCode::B);

    let response = state.into_response().expect("valid wizard state");
    assert_eq!(response.volume, Some(DataVolume::Massive));
    assert_eq!(response.data_type, Some(DataType::Common));
    assert_eq!(response.policy, Answer::Unknown);
}

#[test]
fn supplier_wizard_state_requires_both_axes() {
    let state = SupplierWizardState {
        data_sensitivity: Some("sensitive".to_string()),
        ..SupplierWizardState::default()
    };
    assert_eq!(
        state.classify(),
        Err(IntakeError::MissingField("data_volume"))
    );
}
