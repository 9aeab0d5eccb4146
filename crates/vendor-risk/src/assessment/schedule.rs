use chrono::{Months, NaiveDate};
use serde::Serialize;

use super::domain::SupplierTypeCode;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    #[error("reassessment date out of range: {months} month(s) after {from}")]
    OutOfRange { from: NaiveDate, months: u32 },
}

impl SupplierTypeCode {
    /// Months between assessments for this supplier type.
    pub const fn cadence_months(self) -> u32 {
        match self {
            SupplierTypeCode::A => 6,
            SupplierTypeCode::B => 9,
            SupplierTypeCode::C => 12,
            SupplierTypeCode::D => 24,
        }
    }
}

/// Calendar-month addition; month-end overflow clamps to the last valid day.
pub fn next_assessment_date(
    code: SupplierTypeCode,
    from: NaiveDate,
) -> Result<NaiveDate, ScheduleError> {
    let months = code.cadence_months();
    from.checked_add_months(Months::new(months))
        .ok_or(ScheduleError::OutOfRange { from, months })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReassessmentSchedule {
    pub code: SupplierTypeCode,
    pub cadence_months: u32,
    pub next_assessment_date: NaiveDate,
}

impl ReassessmentSchedule {
    pub fn compute(code: SupplierTypeCode, from: NaiveDate) -> Result<Self, ScheduleError> {
        Ok(Self {
            code,
            cadence_months: code.cadence_months(),
            next_assessment_date: next_assessment_date(code, from)?,
        })
    }
}
