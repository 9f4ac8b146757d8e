//! Expiry status tiers

use serde::Serialize;
use std::fmt;

/// Urgency tier attached to a certificate at report time.
///
/// Variants are declared from most to least urgent, so the derived `Ord`
/// sorts the most urgent certificates first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTier {
    /// The certificate body could not be decoded
    ParseError,
    /// Expires within the short threshold, or has already expired
    ExpiringSoon,
    /// Expires within the warning threshold
    Warning,
    /// Managed, or comfortably far from expiry
    Ok,
}

impl StatusTier {
    /// All tiers, most urgent first
    pub const ALL: [StatusTier; 4] = [
        StatusTier::ParseError,
        StatusTier::ExpiringSoon,
        StatusTier::Warning,
        StatusTier::Ok,
    ];

    /// Get the icon for this tier
    pub fn icon(&self) -> &'static str {
        match self {
            StatusTier::ParseError => "❌",
            StatusTier::ExpiringSoon => "🔴",
            StatusTier::Warning => "🟡",
            StatusTier::Ok => "🟢",
        }
    }

    /// Get the display label for this tier
    pub fn label(&self) -> &'static str {
        match self {
            StatusTier::ParseError => "Parse Error",
            StatusTier::ExpiringSoon => "Expiring Soon",
            StatusTier::Warning => "Warning",
            StatusTier::Ok => "OK",
        }
    }

    /// Get the color name for this tier
    pub fn color_name(&self) -> &'static str {
        match self {
            StatusTier::ParseError | StatusTier::ExpiringSoon => "red",
            StatusTier::Warning => "yellow",
            StatusTier::Ok => "green",
        }
    }

    /// Whether this tier is at least as urgent as `other`
    pub fn is_at_least(&self, other: StatusTier) -> bool {
        *self <= other
    }
}

impl fmt::Display for StatusTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urgency_order() {
        let mut tiers = vec![
            StatusTier::Ok,
            StatusTier::Warning,
            StatusTier::ParseError,
            StatusTier::ExpiringSoon,
        ];
        tiers.sort();
        assert_eq!(tiers, StatusTier::ALL.to_vec());
    }

    #[test]
    fn test_is_at_least() {
        assert!(StatusTier::ParseError.is_at_least(StatusTier::Warning));
        assert!(StatusTier::Warning.is_at_least(StatusTier::Warning));
        assert!(!StatusTier::Ok.is_at_least(StatusTier::Warning));
    }

    #[test]
    fn test_serializes_snake_case() {
        let json = serde_json::to_string(&StatusTier::ExpiringSoon).unwrap();
        assert_eq!(json, "\"expiring_soon\"");
    }
}
