use super::common::date;
use crate::assessment::domain::SupplierTypeCode;
use crate::assessment::schedule::{next_assessment_date, ReassessmentSchedule, ScheduleError};
use chrono::NaiveDate;

#[test]
fn cadence_follows_supplier_type() {
    assert_eq!(SupplierTypeCode::A.cadence_months(), 6);
    assert_eq!(SupplierTypeCode::B.cadence_months(), 9);
    assert_eq!(SupplierTypeCode::C.cadence_months(), 12);
    assert_eq!(SupplierTypeCode::D.cadence_months(), 24);
}

#[test]
fn next_dates_from_end_of_january() {
    let from = date(2024, 1, 31);
    let cases = [
        (SupplierTypeCode::A, date(2024, 7, 31)),
        (SupplierTypeCode::B, date(2024, 10, 31)),
        (SupplierTypeCode::C, date(2025, 1, 31)),
        (SupplierTypeCode::D, date(2026, 1, 31)),
    ];
    for (code, expected) in cases {
        assert_eq!(next_assessment_date(code, from), Ok(expected), "{code:?}");
    }
}

#[test]
fn month_end_overflow_clamps_to_last_valid_day() {
    assert_eq!(
        next_assessment_date(SupplierTypeCode::A, date(2024, 8, 31)),
        Ok(date(2025, 2, 28))
    );
    assert_eq!(
        next_assessment_date(SupplierTypeCode::B, date(2023, 5, 31)),
        Ok(date(2024, 2, 29))
    );
    assert_eq!(
        next_assessment_date(SupplierTypeCode::C, date(2024, 2, 29)),
        Ok(date(2025, 2, 28))
    );
}

#[test]
fn out_of_range_dates_are_reported() {
    let error = next_assessment_date(SupplierTypeCode::D, NaiveDate::MAX)
        .expect_err("no date past the calendar maximum");
    assert_eq!(
        error,
        ScheduleError::OutOfRange {
            from: NaiveDate::MAX,
            months: 24,
        }
    );
}

#[test]
fn schedule_bundles_code_cadence_and_date() {
    let schedule =
        ReassessmentSchedule::compute(SupplierTypeCode::B, date(2024, 3, 15)).expect("in range");
    assert_eq!(schedule.code, SupplierTypeCode::B);
    assert_eq!(schedule.cadence_months, 9);
    assert_eq!(schedule.next_assessment_date, date(2024, 12, 15));
}
