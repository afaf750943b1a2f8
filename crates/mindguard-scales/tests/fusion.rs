use mindguard_core::models::features::ScaleTotals;
use mindguard_core::models::risk::OverallRisk;
use mindguard_scales::fusion::{fuse_risk, fuse_totals};

#[test]
fn all_quiet_is_low() {
    assert_eq!(fuse_risk(0, 0, 0), OverallRisk::Low);
    assert_eq!(fuse_risk(14, 9, 13), OverallRisk::Low);
}

#[test]
fn each_scale_can_trigger_moderate_alone() {
    assert_eq!(fuse_risk(15, 0, 0), OverallRisk::Moderate);
    assert_eq!(fuse_risk(0, 10, 0), OverallRisk::Moderate);
    assert_eq!(fuse_risk(0, 0, 14), OverallRisk::Moderate);
}

#[test]
fn each_scale_can_trigger_high_alone() {
    assert_eq!(fuse_risk(20, 0, 0), OverallRisk::High);
    assert_eq!(fuse_risk(0, 15, 0), OverallRisk::High);
    assert_eq!(fuse_risk(0, 0, 27), OverallRisk::High);
}

#[test]
fn later_high_overrides_earlier_moderate() {
    assert_eq!(fuse_risk(16, 5, 30), OverallRisk::High);
    assert_eq!(fuse_risk(16, 15, 0), OverallRisk::High);
}

#[test]
fn moderate_never_downgrades_high() {
    assert_eq!(fuse_risk(20, 12, 20), OverallRisk::High);
    assert_eq!(fuse_risk(0, 18, 20), OverallRisk::High);
}

#[test]
fn high_is_sticky_across_every_combination() {
    for depression in 0..=27 {
        for anxiety in 0..=21 {
            for stress in 0..=40 {
                let fused = fuse_risk(depression, anxiety, stress);
                if depression >= 20 || anxiety >= 15 || stress >= 27 {
                    assert_eq!(fused, OverallRisk::High, "{depression}/{anxiety}/{stress}");
                } else if depression >= 15 || anxiety >= 10 || stress >= 14 {
                    assert_eq!(fused, OverallRisk::Moderate, "{depression}/{anxiety}/{stress}");
                } else {
                    assert_eq!(fused, OverallRisk::Low, "{depression}/{anxiety}/{stress}");
                }
            }
        }
    }
}

#[test]
fn end_to_end_example_is_high_from_anxiety() {
    // PHQ-9 all "Not at all", GAD-7 all "Nearly every day", PSS-10 all "Sometimes".
    let totals = ScaleTotals {
        depression: 0,
        anxiety: 21,
        stress: 20,
        social_support: 48,
    };
    assert_eq!(fuse_totals(&totals), OverallRisk::High);
}

#[test]
fn social_support_is_ignored() {
    let low = ScaleTotals {
        depression: 3,
        anxiety: 3,
        stress: 3,
        social_support: 16,
    };
    let high = ScaleTotals {
        social_support: 80,
        ..low
    };
    assert_eq!(fuse_totals(&low), fuse_totals(&high));
}
