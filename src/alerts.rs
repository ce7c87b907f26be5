// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::EngineConfig;
use crate::models::{Alert, Severity};
use crate::utils::fmt_grouped;

/// Grades an estimated annual income against the formalization threshold.
///
/// Always yields exactly one alert; the first matching tier wins.
pub fn generate_alerts(estimated_annual_income: Decimal, cfg: &EngineConfig) -> Vec<Alert> {
    let threshold = fmt_grouped(&cfg.threshold, &cfg.currency);
    let estimate = fmt_grouped(&estimated_annual_income, &cfg.currency);

    let alert = if estimated_annual_income >= cfg.threshold {
        Alert {
            severity: Severity::Danger,
            message: format!(
                "Estimated annual income of {} has exceeded the formalization threshold of {}. Formalization is now required.",
                estimate, threshold
            ),
        }
    } else if estimated_annual_income >= cfg.threshold * cfg.warning_ratio {
        Alert {
            severity: Severity::Warning,
            message: format!(
                "Estimated annual income of {} is approaching the formalization threshold of {}. Consider contacting an advisory service.",
                estimate, threshold
            ),
        }
    } else {
        Alert {
            severity: Severity::Info,
            message: format!(
                "Estimated annual income of {} is well below the formalization threshold of {}. Keep recording your income and expenses.",
                estimate, threshold
            ),
        }
    };
    debug!(severity = %alert.severity, estimate = %estimated_annual_income, "alert generated");
    vec![alert]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn severity_of(n: i64) -> Severity {
        let alerts = generate_alerts(Decimal::from(n), &EngineConfig::default());
        assert_eq!(alerts.len(), 1);
        alerts[0].severity
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(severity_of(50_000_000), Severity::Danger);
        assert_eq!(severity_of(49_999_999), Severity::Warning);
        assert_eq!(severity_of(25_000_000), Severity::Warning);
        assert_eq!(severity_of(24_999_999), Severity::Info);
        assert_eq!(severity_of(0), Severity::Info);
        assert_eq!(severity_of(900_000_000), Severity::Danger);
    }

    #[test]
    fn message_shows_grouped_threshold() {
        let alerts = generate_alerts(Decimal::from(60_000_000), &EngineConfig::default());
        assert!(alerts[0].message.contains("50,000,000 COP"));
        assert!(alerts[0].message.contains("60,000,000 COP"));
        assert!(alerts[0].message.contains("Formalization is now required"));
    }

    #[test]
    fn warning_mentions_advisory() {
        let alerts = generate_alerts(Decimal::from(30_000_000), &EngineConfig::default());
        assert_eq!(alerts[0].severity, Severity::Warning);
        assert!(alerts[0].message.contains("advisory service"));
    }

    #[test]
    fn tiers_follow_configured_threshold() {
        let mut cfg = EngineConfig::default();
        cfg.apply(crate::config::KEY_THRESHOLD, "1000").unwrap();
        cfg.apply(crate::config::KEY_CURRENCY, "usd").unwrap();
        let alerts = generate_alerts(Decimal::from(500), &cfg);
        assert_eq!(alerts[0].severity, Severity::Warning);
        assert!(alerts[0].message.contains("1,000 USD"));
    }
}
