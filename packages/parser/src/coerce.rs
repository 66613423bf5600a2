//! Lenient cell coercion for statistics.
//!
//! These helpers implement the "expected missing data" rule: an empty or
//! unparseable statistics cell becomes `None` instead of an error. Control
//! data (outcomes, scores, abbreviations) must not go through here.

use chrono::NaiveDate;

/// Parses a non-negative count (`"12"`). Empty or invalid cells are `None`.
#[must_use]
pub fn count(cell: &str) -> Option<u32> {
    non_empty(cell)?.parse().ok()
}

/// Parses a signed integer, accepting an explicit `+` sign (`"+7"`).
#[must_use]
pub fn signed(cell: &str) -> Option<i32> {
    let value = non_empty(cell)?;
    value.strip_prefix('+').unwrap_or(value).parse().ok()
}

/// Parses a decimal statistic. Accepts the leading-dot form the source uses
/// for rates (`".512"`).
#[must_use]
pub fn decimal(cell: &str) -> Option<f64> {
    let value = non_empty(cell)?;
    value.strip_prefix('+').unwrap_or(value).parse().ok()
}

/// Parses a `YYYY-MM-DD` date cell.
#[must_use]
pub fn iso_date(cell: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(non_empty(cell)?, "%Y-%m-%d").ok()
}

/// Parses a height cell printed as `feet-inches` (`"6-9"`) into inches.
#[must_use]
pub fn height_inches(cell: &str) -> Option<u32> {
    let (feet, inches) = non_empty(cell)?.split_once('-')?;
    let feet: u32 = feet.trim().parse().ok()?;
    let inches: u32 = inches.trim().parse().ok()?;
    Some(feet * 12 + inches)
}

/// Returns the trimmed cell, or `None` if nothing is left.
#[must_use]
pub fn non_empty(cell: &str) -> Option<&str> {
    let trimmed = cell.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cells_are_none() {
        assert_eq!(count(""), None);
        assert_eq!(signed(" "), None);
        assert_eq!(decimal(""), None);
        assert_eq!(iso_date(""), None);
    }

    #[test]
    fn parses_signed_and_decimal_cells() {
        assert_eq!(signed("+7"), Some(7));
        assert_eq!(signed("-12"), Some(-12));
        assert!((decimal(".512").unwrap() - 0.512).abs() < f64::EPSILON);
        assert!((decimal("-1.5").unwrap() + 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn garbage_counts_are_none_not_errors() {
        assert_eq!(count("n/a"), None);
        assert_eq!(count("3"), Some(3));
    }

    #[test]
    fn parses_heights() {
        assert_eq!(height_inches("6-9"), Some(81));
        assert_eq!(height_inches("7-0"), Some(84));
        assert_eq!(height_inches("tall"), None);
    }
}
