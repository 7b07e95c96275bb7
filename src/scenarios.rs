//! Built-in scenario suite: representative cases spanning the feature space,
//! from "perfect recovery setup" down to "old, stale and disputed".
//!
//! Expected-outcome labels are printed for the operator, not asserted: the
//! suite is a diagnostic lens on a fitted model, not a test harness.

use crate::features::CaseAttributes;

/// A named benchmark case.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub expected: &'static str,
    pub case: CaseAttributes,
}

/// The ten built-in scenarios, in presentation order.
pub fn builtin_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            id: "HIGH_PRIORITY_NEW",
            name: "High Priority - New Case with PTP",
            description: "Recent case, high amount, customer engaged, has payment promise",
            expected: "VERY HIGH",
            case: CaseAttributes {
                amount: 1_200_000.0,
                ageing_days: 6.0,
                attempts_count: 5,
                days_since_update: 0.2,
                has_dispute: false,
                ptp_active: true,
            },
        },
        Scenario {
            id: "MEDIUM_PRIORITY_ACTIVE",
            name: "Medium Priority - Active Case",
            description: "Moderate age, medium amount, some engagement",
            expected: "MEDIUM",
            case: CaseAttributes {
                amount: 100_000.0,
                ageing_days: 36.0,
                attempts_count: 3,
                days_since_update: 2.0,
                has_dispute: false,
                ptp_active: false,
            },
        },
        Scenario {
            id: "LOW_PRIORITY_OLD",
            name: "Low Priority - Old Stale Case",
            description: "Very old, no engagement, stale",
            expected: "VERY LOW",
            case: CaseAttributes {
                amount: 22_000.0,
                ageing_days: 114.0,
                attempts_count: 0,
                days_since_update: 12.6,
                has_dispute: false,
                ptp_active: false,
            },
        },
        Scenario {
            id: "CHALLENGING_DISPUTE",
            name: "Challenging - Active Dispute",
            description: "Has dispute, reducing recovery chances",
            expected: "LOW",
            case: CaseAttributes {
                amount: 163_000.0,
                ageing_days: 48.0,
                attempts_count: 2,
                days_since_update: 4.2,
                has_dispute: true,
                ptp_active: false,
            },
        },
        Scenario {
            id: "HIGH_VALUE_OLD",
            name: "High Value but Old",
            description: "Large amount but aged, needs attention",
            expected: "MEDIUM-LOW",
            case: CaseAttributes {
                amount: 3_300_000.0,
                ageing_days: 84.0,
                attempts_count: 1,
                days_since_update: 8.4,
                has_dispute: false,
                ptp_active: false,
            },
        },
        Scenario {
            id: "PERFECT_CASE",
            name: "Perfect Case - Ideal Recovery",
            description: "New, engaged, has PTP, high amount",
            expected: "EXTREMELY HIGH",
            case: CaseAttributes {
                amount: 730_000.0,
                ageing_days: 2.4,
                attempts_count: 8,
                days_since_update: 0.1,
                has_dispute: false,
                ptp_active: true,
            },
        },
        Scenario {
            id: "WORST_CASE",
            name: "Worst Case - Multiple Issues",
            description: "Old, disputed, stale, no engagement",
            expected: "EXTREMELY LOW",
            case: CaseAttributes {
                amount: 13_000.0,
                ageing_days: 120.0,
                attempts_count: 0,
                days_since_update: 14.0,
                has_dispute: true,
                ptp_active: false,
            },
        },
        Scenario {
            id: "PTP_SAVES_DAY",
            name: "PTP Saves the Day",
            description: "Old but customer committed with PTP",
            expected: "MEDIUM-HIGH",
            case: CaseAttributes {
                amount: 60_000.0,
                ageing_days: 60.0,
                attempts_count: 4,
                days_since_update: 2.8,
                has_dispute: false,
                ptp_active: true,
            },
        },
        Scenario {
            id: "FRESH_START",
            name: "Fresh Start - Just Received",
            description: "Brand new case, not yet worked",
            expected: "MEDIUM",
            case: CaseAttributes {
                amount: 133_000.0,
                ageing_days: 1.2,
                attempts_count: 0,
                days_since_update: 0.1,
                has_dispute: false,
                ptp_active: false,
            },
        },
        Scenario {
            id: "MEDIUM_ENGAGED",
            name: "Medium Engaged Case",
            description: "Average in all aspects",
            expected: "MEDIUM",
            case: CaseAttributes {
                amount: 100_000.0,
                ageing_days: 48.0,
                attempts_count: 3,
                days_since_update: 3.5,
                has_dispute: false,
                ptp_active: false,
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{normalize, NormalizationParams};

    #[test]
    fn test_scenario_ids_are_unique() {
        let scenarios = builtin_scenarios();
        let mut ids: Vec<&str> = scenarios.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), scenarios.len());
    }

    #[test]
    fn test_scenarios_normalize_within_contract() {
        let norm = NormalizationParams::default();
        for scenario in builtin_scenarios() {
            let fv = normalize(&scenario.case, &norm);
            for (name, value) in fv.iter() {
                assert!(
                    (0.0..=2.0).contains(&value),
                    "{}: {name} = {value}",
                    scenario.id
                );
            }
        }
    }
}
