use serde::Serialize;

use super::domain::{ContractType, DataType, DataVolume, SupplierTypeCode};
use super::intake::{parse_optional, parse_required, IntakeError};

use super::domain::SupplierTypeCode::{A, B, C, D};

/// Decision table indexed by `[sensitivity][volume]`.
///
/// Rows: none, common, sensitive. Columns: low, medium, high, massive.
/// Sensitivity dominates volume, but massive volume alone still lifts
/// non-sensitive suppliers to C.
const SUPPLIER_TYPE_TABLE: [[SupplierTypeCode; 4]; 3] = [
    [D, D, D, C],
    [D, C, B, B],
    [C, B, A, A],
];

/// Supplier type assigned by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    pub code: SupplierTypeCode,
    pub description: &'static str,
}

impl ClassificationResult {
    pub const fn for_code(code: SupplierTypeCode) -> Self {
        Self {
            code,
            description: code.description(),
        }
    }
}

const fn sensitivity_row(sensitivity: DataType) -> usize {
    match sensitivity {
        DataType::None => 0,
        DataType::Common => 1,
        DataType::Sensitive => 2,
    }
}

const fn volume_column(volume: DataVolume) -> usize {
    match volume {
        DataVolume::Low => 0,
        DataVolume::Medium => 1,
        DataVolume::High => 2,
        DataVolume::Massive => 3,
    }
}

/// Assign the A–D supplier type for a volume/sensitivity pair.
///
/// `contract_type` is accepted so wizard call sites stay symmetric; it does
/// not influence the tier.
pub fn classify(
    volume: DataVolume,
    sensitivity: DataType,
    _contract_type: Option<ContractType>,
) -> ClassificationResult {
    let code = SUPPLIER_TYPE_TABLE[sensitivity_row(sensitivity)][volume_column(volume)];
    ClassificationResult::for_code(code)
}

/// String boundary for wizard payloads. Rejects any value outside the domain,
/// naming the offending field.
pub fn classify_supplier_type(
    volume: &str,
    sensitivity: &str,
    contract_type: Option<&str>,
) -> Result<ClassificationResult, IntakeError> {
    let volume: DataVolume = parse_required("data_volume", Some(volume))?;
    let sensitivity: DataType = parse_required("data_sensitivity", Some(sensitivity))?;
    let contract_type: Option<ContractType> = parse_optional("contract_type", contract_type)?;
    Ok(classify(volume, sensitivity, contract_type))
}
