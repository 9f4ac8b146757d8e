use chrono::{Duration, TimeZone, Utc};
use lb_cert_tracker::commands::inspect::format_inspect_line;
use lb_cert_tracker::commands::inspect_bytes;
use lb_cert_tracker::{StatusTier, Thresholds};

const TEST_CERT: &[u8] = include_bytes!("fixtures/test-cert.pem");
const TEST_KEY: &[u8] = include_bytes!("fixtures/test-key.pem");

#[test]
fn test_inspect_valid_certificate() {
    let not_after = Utc.with_ymd_and_hms(2036, 10, 15, 5, 23, 29).unwrap();

    let fresh = inspect_bytes("cert.pem", TEST_CERT, &Thresholds::default(), not_after - Duration::days(400));
    assert_eq!(fresh.tier, StatusTier::Ok);
    assert_eq!(fresh.days_left, Some(400));
    assert!(fresh.error.is_none());

    let late = inspect_bytes("cert.pem", TEST_CERT, &Thresholds::default(), not_after - Duration::days(15));
    assert_eq!(late.tier, StatusTier::Warning);
    assert_eq!(
        format_inspect_line(&late),
        "🟡 Warning | File: cert.pem | Expiry: 2036-10-15T05:23:29+00:00"
    );
}

#[test]
fn test_inspect_private_key() {
    let result = inspect_bytes("key.pem", TEST_KEY, &Thresholds::default(), Utc::now());
    assert_eq!(result.tier, StatusTier::ParseError);
    assert!(result.details.is_none());
    assert!(result.error.unwrap().contains("CERTIFICATE"));
}

#[test]
fn test_inspect_bundle_classifies_from_details() {
    let mut bundle = TEST_KEY.to_vec();
    bundle.extend_from_slice(TEST_CERT);
    let not_after = Utc.with_ymd_and_hms(2036, 10, 15, 5, 23, 29).unwrap();

    let result = inspect_bytes("bundle.pem", &bundle, &Thresholds::default(), not_after - Duration::days(5));
    let details = result.details.as_ref().unwrap();
    assert_eq!(details.not_after, not_after);
    assert_eq!(result.days_left, Some(5));
    assert_eq!(result.tier, StatusTier::ExpiringSoon);
    assert!(result.error.is_none());
}
