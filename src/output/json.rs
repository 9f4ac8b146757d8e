//! JSON output formatter

use crate::utils::ReportError;
use serde::Serialize;

/// Serialize any report value as pretty JSON
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ReportError> {
    serde_json::to_string_pretty(value).map_err(|e| ReportError::Serialize {
        message: e.to_string(),
    })
}

/// Print a report value as JSON to stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), ReportError> {
    println!("{}", to_json(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::certificate::Thresholds;
    use crate::models::{CertificateRecord, ScanReport};
    use chrono::Utc;

    #[test]
    fn test_report_json_shape() {
        let report = ScanReport::build(
            "demo",
            1,
            vec![
                CertificateRecord::managed("web", "managed-cert"),
                CertificateRecord::self_managed("web", "broken", Some(&b"junk"[..])),
            ],
            &Thresholds::default(),
            Utc::now(),
        );

        let value: serde_json::Value = serde_json::from_str(&to_json(&report).unwrap()).unwrap();
        assert_eq!(value["project"], "demo");
        assert_eq!(value["summary"]["total"], 2);

        let managed = &value["entries"][0];
        assert_eq!(managed["proxy_name"], "web");
        assert_eq!(managed["cert_type"], "managed");
        assert_eq!(managed["tier"], "ok");
        assert_eq!(managed["expiry"]["kind"], "not_evaluated");

        let broken = &value["entries"][1];
        assert_eq!(broken["tier"], "parse_error");
        assert_eq!(broken["expiry"]["kind"], "decode_error");
        assert!(broken["expiry"]["value"].is_string());
    }
}
