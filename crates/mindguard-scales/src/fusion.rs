//! Questionnaire-only risk fusion.
//!
//! The three clinical totals are checked in a fixed order: depression,
//! anxiety, then stress. A High trigger always wins and sticks. A Moderate
//! trigger only applies while the running level is not yet High. The order
//! is part of the contract; do not reorder the checks.

use mindguard_core::models::features::ScaleTotals;
use mindguard_core::models::risk::OverallRisk;

pub const DEPRESSION_HIGH: u32 = 20;
pub const DEPRESSION_MODERATE: u32 = 15;
pub const ANXIETY_HIGH: u32 = 15;
pub const ANXIETY_MODERATE: u32 = 10;
pub const STRESS_HIGH: u32 = 27;
pub const STRESS_MODERATE: u32 = 14;

/// Fuse PHQ-9, GAD-7 and PSS-10 totals into one risk level.
pub fn fuse_risk(depression: u32, anxiety: u32, stress: u32) -> OverallRisk {
    let mut risk = OverallRisk::Low;

    if depression >= DEPRESSION_HIGH {
        risk = OverallRisk::High;
    } else if depression >= DEPRESSION_MODERATE {
        risk = OverallRisk::Moderate;
    }

    if anxiety >= ANXIETY_HIGH {
        risk = OverallRisk::High;
    } else if anxiety >= ANXIETY_MODERATE && risk != OverallRisk::High {
        risk = OverallRisk::Moderate;
    }

    if stress >= STRESS_HIGH {
        risk = OverallRisk::High;
    } else if stress >= STRESS_MODERATE && risk != OverallRisk::High {
        risk = OverallRisk::Moderate;
    }

    risk
}

/// [`fuse_risk`] over assembled totals. Social support does not take part.
pub fn fuse_totals(totals: &ScaleTotals) -> OverallRisk {
    fuse_risk(totals.depression, totals.anxiety, totals.stress)
}
