//! Expiry classification policy
//!
//! Maps a certificate's managed flag and decoded expiry to a [`StatusTier`].

use crate::models::{CertificateRecord, StatusTier};
use crate::utils::ConfigError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_EXPIRING_SOON_DAYS: i64 = 10;
pub const DEFAULT_WARNING_DAYS: i64 = 30;

const SECONDS_PER_DAY: i64 = 86_400;

/// Day thresholds separating the expiry tiers (both inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// At or below this many days left: `ExpiringSoon`
    pub expiring_soon_days: i64,
    /// At or below this many days left: `Warning`
    pub warning_days: i64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            expiring_soon_days: DEFAULT_EXPIRING_SOON_DAYS,
            warning_days: DEFAULT_WARNING_DAYS,
        }
    }
}

impl Thresholds {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.expiring_soon_days > self.warning_days {
            return Err(ConfigError::InvalidValue {
                key: "thresholds.expiring_soon_days".to_string(),
                message: format!(
                    "{} is greater than warning_days ({})",
                    self.expiring_soon_days, self.warning_days
                ),
            });
        }
        Ok(())
    }

    /// Classify a certificate.
    ///
    /// Managed certificates are always `Ok`. For self-managed ones a decode
    /// error wins over a timestamp; with neither present the expiry is
    /// unknown and reported as `ParseError`.
    pub fn classify(
        &self,
        is_managed: bool,
        not_valid_after: Option<DateTime<Utc>>,
        decode_error: Option<&str>,
        now: DateTime<Utc>,
    ) -> StatusTier {
        if is_managed {
            return StatusTier::Ok;
        }
        if decode_error.is_some() {
            return StatusTier::ParseError;
        }
        match not_valid_after {
            Some(not_after) => self.classify_days(days_left(not_after, now)),
            None => StatusTier::ParseError,
        }
    }

    /// Tier for a whole-day count. Negative (expired) counts are `ExpiringSoon`.
    pub fn classify_days(&self, days_left: i64) -> StatusTier {
        if days_left <= self.expiring_soon_days {
            StatusTier::ExpiringSoon
        } else if days_left <= self.warning_days {
            StatusTier::Warning
        } else {
            StatusTier::Ok
        }
    }

    pub fn classify_record(&self, record: &CertificateRecord, now: DateTime<Utc>) -> StatusTier {
        self.classify(
            record.is_managed(),
            record.not_valid_after(),
            record.decode_error(),
            now,
        )
    }
}

/// Classify with the default 10/30 day thresholds
pub fn classify(
    is_managed: bool,
    not_valid_after: Option<DateTime<Utc>>,
    decode_error: Option<&str>,
    now: DateTime<Utc>,
) -> StatusTier {
    Thresholds::default().classify(is_managed, not_valid_after, decode_error, now)
}

/// Classify a record with the default thresholds
pub fn classify_record(record: &CertificateRecord, now: DateTime<Utc>) -> StatusTier {
    Thresholds::default().classify_record(record, now)
}

/// Whole days from `now` until `not_after`, rounded toward negative infinity.
///
/// 36 hours left is 1 day; 1 hour past expiry is -1.
pub fn days_left(not_after: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    not_after
        .signed_duration_since(now)
        .num_seconds()
        .div_euclid(SECONDS_PER_DAY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    fn tier_in_days(days: i64) -> StatusTier {
        classify(false, Some(now() + Duration::days(days)), None, now())
    }

    #[test]
    fn test_managed_is_always_ok() {
        assert_eq!(classify(true, None, None, now()), StatusTier::Ok);
        assert_eq!(
            classify(true, Some(now() - Duration::days(400)), None, now()),
            StatusTier::Ok
        );
        assert_eq!(
            classify(true, None, Some("bad base64"), now()),
            StatusTier::Ok
        );
    }

    #[test]
    fn test_decode_error_is_parse_error() {
        assert_eq!(
            classify(false, None, Some("truncated"), now()),
            StatusTier::ParseError
        );
    }

    #[test]
    fn test_missing_expiry_is_parse_error() {
        assert_eq!(classify(false, None, None, now()), StatusTier::ParseError);
    }

    #[test]
    fn test_tiers() {
        assert_eq!(tier_in_days(5), StatusTier::ExpiringSoon);
        assert_eq!(tier_in_days(20), StatusTier::Warning);
        assert_eq!(tier_in_days(31), StatusTier::Ok);
        assert_eq!(tier_in_days(-1), StatusTier::ExpiringSoon);
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(tier_in_days(10), StatusTier::ExpiringSoon);
        assert_eq!(tier_in_days(11), StatusTier::Warning);
        assert_eq!(tier_in_days(30), StatusTier::Warning);
        assert_eq!(tier_in_days(31), StatusTier::Ok);
    }

    #[test]
    fn test_days_left_floors() {
        assert_eq!(days_left(now() + Duration::hours(36), now()), 1);
        assert_eq!(days_left(now() + Duration::hours(23), now()), 0);
        assert_eq!(days_left(now() - Duration::hours(1), now()), -1);
        assert_eq!(days_left(now(), now()), 0);
    }

    #[test]
    fn test_partial_day_past_boundary_truncates_down() {
        // 10 days and 23 hours is still 10 whole days
        let not_after = now() + Duration::days(10) + Duration::hours(23);
        assert_eq!(classify(false, Some(not_after), None, now()), StatusTier::ExpiringSoon);
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = Thresholds {
            expiring_soon_days: 3,
            warning_days: 14,
        };
        assert_eq!(thresholds.classify_days(5), StatusTier::Warning);
        assert_eq!(thresholds.classify_days(15), StatusTier::Ok);
        assert!(thresholds.validate().is_ok());
    }

    #[test]
    fn test_inverted_thresholds_rejected() {
        let thresholds = Thresholds {
            expiring_soon_days: 40,
            warning_days: 30,
        };
        assert!(thresholds.validate().is_err());
    }
}
