//! Duration / date range reconciliation

use jiff::civil::Date;

use crate::{
    booking::{BookingError, Nights},
    dates::{DateRange, add_days},
};

/// Result of reconciling after the date range was edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateChangeOutcome {
    /// Inclusive day count of the range; not clamped.
    pub duration: i64,
}

/// Result of reconciling after the stay length was edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationChangeOutcome {
    /// New end date, with the start date held fixed.
    pub end_date: Date,
}

/// Derives the stay length from an edited date range.
///
/// The count is inclusive: a range starting and ending on the same day is a
/// one-night stay, matching [`reconcile_from_duration_change`]. The picker is
/// trusted to deliver `end_date >= start_date`; an inverted range yields a
/// duration below one rather than an error.
///
/// # Errors
///
/// Returns [`BookingError::Date`] if the day difference cannot be computed.
pub fn reconcile_from_date_change(range: &DateRange) -> Result<DateChangeOutcome, BookingError> {
    let days = range.days()?;

    Ok(DateChangeOutcome { duration: days + 1 })
}

/// Derives the end date from an edited stay length, keeping the start date.
///
/// # Errors
///
/// Returns [`BookingError::Date`] if the end date would fall outside the supported range.
pub fn reconcile_from_duration_change(
    duration: Nights,
    start_date: Date,
) -> Result<DurationChangeOutcome, BookingError> {
    let end_date = add_days(start_date, duration.extra_days())?;

    Ok(DurationChangeOutcome { end_date })
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn same_day_range_is_one_night() -> TestResult {
        let range = DateRange::single_day(date(2024, 3, 1));

        assert_eq!(reconcile_from_date_change(&range)?.duration, 1);

        Ok(())
    }

    #[test]
    fn range_across_month_end_counts_calendar_days() -> TestResult {
        let range = DateRange::new(date(2024, 1, 30), date(2024, 2, 2));

        assert_eq!(reconcile_from_date_change(&range)?.duration, 4);

        Ok(())
    }

    #[test]
    fn ranges_longer_than_a_month_are_not_wrapped() -> TestResult {
        let range = DateRange::new(date(2024, 3, 1), date(2024, 4, 15));

        assert_eq!(reconcile_from_date_change(&range)?.duration, 46);

        Ok(())
    }

    #[test]
    fn inverted_range_is_passed_through_unclamped() -> TestResult {
        let range = DateRange::new(date(2024, 3, 5), date(2024, 3, 1));

        assert_eq!(reconcile_from_date_change(&range)?.duration, -3);

        Ok(())
    }

    #[test]
    fn widest_civil_range_still_counts() -> TestResult {
        let range = DateRange::new(date(-9999, 1, 1), date(9999, 12, 31));

        let outcome = reconcile_from_date_change(&range)?;

        assert!(outcome.duration > 7_000_000);

        Ok(())
    }

    #[test]
    fn five_nights_from_first_of_march() -> TestResult {
        let outcome = reconcile_from_duration_change(Nights::new(5)?, date(2024, 3, 1))?;

        assert_eq!(outcome.end_date, date(2024, 3, 5));

        Ok(())
    }

    #[test]
    fn one_night_ends_on_start_date() -> TestResult {
        let outcome = reconcile_from_duration_change(Nights::MIN, date(2024, 3, 1))?;

        assert_eq!(outcome.end_date, date(2024, 3, 1));

        Ok(())
    }

    #[test]
    fn duration_change_near_end_of_calendar_errors() {
        let outcome = reconcile_from_duration_change(Nights::MAX, date(9999, 12, 20));

        assert!(matches!(outcome, Err(BookingError::Date(_))));
    }
}
