use std::collections::HashSet;

use crate::assessment::domain::RiskLevel;
use crate::assessment::recommendations::{
    recommended_actions, BASE_CRITICAL, BASE_LOW, TECH_CRITICAL,
};

#[test]
fn critical_technology_supplier_gets_base_then_tech_items() {
    let actions = recommended_actions(RiskLevel::Critical, true);

    let expected: Vec<String> = BASE_CRITICAL
        .iter()
        .chain(TECH_CRITICAL.iter())
        .map(|action| action.to_string())
        .collect();
    assert_eq!(actions, expected);
    assert_eq!(actions.len(), BASE_CRITICAL.len() + TECH_CRITICAL.len());
}

#[test]
fn non_technology_supplier_gets_base_items_only() {
    let actions = recommended_actions(RiskLevel::Low, false);
    let expected: Vec<String> = BASE_LOW.iter().map(|action| action.to_string()).collect();
    assert_eq!(actions, expected);
}

#[test]
fn every_level_has_actions_without_duplicates() {
    for level in RiskLevel::ALL {
        for is_technology in [false, true] {
            let actions = recommended_actions(level, is_technology);
            assert!(!actions.is_empty(), "{level:?}");
            let unique: HashSet<&String> = actions.iter().collect();
            assert_eq!(unique.len(), actions.len(), "{level:?} tech={is_technology}");
        }
    }
}

#[test]
fn technology_supplement_extends_without_reordering_base() {
    for level in RiskLevel::ALL {
        let base = recommended_actions(level, false);
        let tech = recommended_actions(level, true);
        assert!(tech.len() > base.len());
        assert_eq!(&tech[..base.len()], base.as_slice());
    }
}
