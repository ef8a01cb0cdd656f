use crate::lifecycle::domain::{Eol, Status};
use chrono::NaiveDate;

/// Status and date arithmetic for one matched cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub status: Status,
    pub eol_date: Option<NaiveDate>,
    pub days_remaining: Option<i64>,
}

/// Classifies a cycle's end-of-life marker relative to "today"
pub struct EolClassifier;

impl EolClassifier {
    /// Classifies `eol` against `today` and the warning threshold
    ///
    /// - no concrete date (missing, `true` or `false`) → UNKNOWN
    /// - `days_remaining < 0` → CRITICAL
    /// - `0 <= days_remaining < threshold_days` → WARNING
    /// - otherwise → OK
    pub fn classify(eol: Option<&Eol>, today: NaiveDate, threshold_days: i64) -> Classification {
        let Some(eol_date) = eol.and_then(Eol::date) else {
            return Classification {
                status: Status::Unknown,
                eol_date: None,
                days_remaining: None,
            };
        };

        let days_remaining = (eol_date - today).num_days();
        let status = if days_remaining < 0 {
            Status::Critical
        } else if days_remaining < threshold_days {
            Status::Warning
        } else {
            Status::Ok
        };

        Classification {
            status,
            eol_date: Some(eol_date),
            days_remaining: Some(days_remaining),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_threshold_boundaries() {
        let today = date(2024, 1, 1);

        let critical = EolClassifier::classify(Some(&Eol::Date(date(2023, 12, 1))), today, 90);
        assert_eq!(critical.status, Status::Critical);
        assert_eq!(critical.days_remaining, Some(-31));

        let warning = EolClassifier::classify(Some(&Eol::Date(date(2024, 2, 1))), today, 90);
        assert_eq!(warning.status, Status::Warning);
        assert_eq!(warning.days_remaining, Some(31));

        let ok = EolClassifier::classify(Some(&Eol::Date(date(2025, 1, 1))), today, 90);
        assert_eq!(ok.status, Status::Ok);
        assert_eq!(ok.days_remaining, Some(366));
    }

    #[test]
    fn test_eol_today_is_warning() {
        let today = date(2024, 6, 30);
        let result = EolClassifier::classify(Some(&Eol::Date(today)), today, 90);
        assert_eq!(result.status, Status::Warning);
        assert_eq!(result.days_remaining, Some(0));
    }

    #[test]
    fn test_exactly_threshold_days_is_ok() {
        let today = date(2024, 1, 1);
        let eol = today + chrono::Duration::days(90);
        let result = EolClassifier::classify(Some(&Eol::Date(eol)), today, 90);
        assert_eq!(result.status, Status::Ok);
    }

    #[test]
    fn test_zero_threshold_never_warns() {
        let today = date(2024, 1, 1);
        let result = EolClassifier::classify(Some(&Eol::Date(today)), today, 0);
        assert_eq!(result.status, Status::Ok);
    }

    #[test]
    fn test_non_date_markers_are_unknown() {
        let today = date(2024, 1, 1);
        for eol in [
            None,
            Some(Eol::Flag(true)),
            Some(Eol::Flag(false)),
            Some(Eol::Other("tbd".to_string())),
        ] {
            let result = EolClassifier::classify(eol.as_ref(), today, 90);
            assert_eq!(result.status, Status::Unknown);
            assert_eq!(result.eol_date, None);
            assert_eq!(result.days_remaining, None);
        }
    }
}
