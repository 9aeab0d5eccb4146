use crate::assessment::classification::{classify, classify_supplier_type};
use crate::assessment::domain::{ContractType, DataType, DataVolume, SupplierTypeCode};
use crate::assessment::intake::IntakeError;

#[test]
fn decision_table_matches_business_rules() {
    use crate::assessment::domain::DataVolume::{High, Low, Massive, Medium};
    use crate::assessment::domain::SupplierTypeCode::{A, B, C, D};
    let (none, common, sensitive) = (DataType::None, DataType::Common, DataType::Sensitive);

    let expected = [
        (sensitive, Massive, A),
        (sensitive, High, A),
        (sensitive, Medium, B),
        (sensitive, Low, C),
        (common, Massive, B),
        (common, High, B),
        (common, Medium, C),
        (common, Low, D),
        (none, Massive, C),
        (none, High, D),
        (none, Medium, D),
        (none, Low, D),
    ];

    for (sensitivity, volume, code) in expected {
        let result = classify(volume, sensitivity, None);
        assert_eq!(
            result.code, code,
            "{sensitivity:?} + {volume:?} should classify as {code:?}"
        );
        assert_eq!(result.description, code.description());
    }
}

#[test]
fn every_combination_yields_a_defined_code() {
    let mut seen = 0;
    for sensitivity in DataType::ALL {
        for volume in DataVolume::ALL {
            let result = classify(volume, sensitivity, None);
            assert!(matches!(
                result.code,
                SupplierTypeCode::A | SupplierTypeCode::B | SupplierTypeCode::C | SupplierTypeCode::D
            ));
            seen += 1;
        }
    }
    assert_eq!(seen, 12);
}

#[test]
fn descriptions_are_fixed_per_code() {
    assert_eq!(SupplierTypeCode::A.description(), "CRÍTICO");
    assert_eq!(SupplierTypeCode::B.description(), "SIGNIFICATIVO");
    assert_eq!(SupplierTypeCode::C.description(), "MODERADO");
    assert_eq!(SupplierTypeCode::D.description(), "BÁSICO");
}

#[test]
fn contract_type_does_not_change_the_tier() {
    for sensitivity in DataType::ALL {
        for volume in DataVolume::ALL {
            let baseline = classify(volume, sensitivity, None);
            assert_eq!(
                classify(volume, sensitivity, Some(ContractType::Continuous)),
                baseline
            );
            assert_eq!(
                classify(volume, sensitivity, Some(ContractType::Punctual)),
                baseline
            );
        }
    }
}

#[test]
fn string_boundary_accepts_both_wizard_vocabularies() {
    let legacy = classify_supplier_type("massive", "non-sensitive", None).expect("valid input");
    assert_eq!(legacy.code, SupplierTypeCode::C);

    let regular = classify_supplier_type("High", "regular", Some("punctual")).expect("valid input");
    assert_eq!(regular.code, SupplierTypeCode::B);

    let common = classify_supplier_type(" medium ", "common", Some("")).expect("valid input");
    assert_eq!(common.code, SupplierTypeCode::C);
}

#[test]
fn string_boundary_names_the_offending_field() {
    assert_eq!(
        classify_supplier_type("huge", "sensitive", None),
        Err(IntakeError::InvalidEnum {
            field: "data_volume",
            value: "huge".to_string(),
        })
    );
    assert_eq!(
        classify_supplier_type("low", "secret", None),
        Err(IntakeError::InvalidEnum {
            field: "data_sensitivity",
            value: "secret".to_string(),
        })
    );

    let error = classify_supplier_type("low", "sensitive", Some("forever"))
        .expect_err("contract type is validated");
    assert!(error.to_string().contains("contract_type"));

    assert_eq!(
        classify_supplier_type("", "sensitive", None),
        Err(IntakeError::MissingField("data_volume"))
    );
}
