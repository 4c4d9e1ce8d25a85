use super::common::{exemplary_assessment, exposed_profile, neutral_profile, uniform_assessment};
use crate::assessment::domain::{Certification, Certifications, Dimension, Topic};
use crate::assessment::error::ConfigurationError;
use crate::assessment::risks::{
    Criticality, ProfileScope, RiskRule, RiskRulebook, RiskTrigger, Severity, SeverityRule,
};

fn rule(id: &'static str, trigger: RiskTrigger, severity: SeverityRule) -> RiskRule {
    RiskRule {
        id,
        category: Dimension::Environmental,
        risk_type: "Test",
        trigger,
        severity,
        regulatory: false,
        description: "test finding",
        recommendation: "test action",
    }
}

#[test]
fn exemplary_submission_has_no_risks() {
    let risks = RiskRulebook::standard().identify(&exemplary_assessment());

    assert!(risks.is_empty(), "unexpected risks: {risks:?}");
}

#[test]
fn lowest_ratings_trigger_every_rating_rule() {
    let risks = RiskRulebook::standard().identify(&uniform_assessment(1));

    assert_eq!(risks.len(), 18);
    assert!(risks
        .iter()
        .all(|risk| matches!(risk.severity, Severity::Critical | Severity::High)));
    assert_eq!(
        risks
            .iter()
            .filter(|risk| risk.severity == Severity::Critical)
            .count(),
        7
    );
}

#[test]
fn findings_are_sorted_most_severe_first() {
    let mut data = exemplary_assessment();
    data.company_profile.geography = "eu".to_string();
    data.environmental.ghg_tracking = 3;
    data.governance.risk_management = 1;

    let risks = RiskRulebook::standard().identify(&data);

    assert_eq!(risks.len(), 2);
    assert_eq!(risks[0].severity, Severity::Critical);
    assert!(!risks[0].is_regulatory);
    assert_eq!(
        risks[0].recommendation,
        "Integrate ESG risks into the enterprise risk management framework"
    );
    assert_eq!(risks[1].severity, Severity::Medium);
    assert!(risks[1].is_regulatory);
    assert_eq!(risks[1].risk_type, "CSRD Climate Disclosure");
}

#[test]
fn severity_bands_follow_criticality() {
    let mut data = exemplary_assessment();
    data.social.labor_practices = 2;
    data.environmental.water_usage = 2;

    let risks = RiskRulebook::standard().identify(&data);

    let labor = risks
        .iter()
        .find(|risk| risk.risk_type == "Workforce Relations")
        .expect("labor finding");
    let water = risks
        .iter()
        .find(|risk| risk.risk_type == "Water Stewardship")
        .expect("water finding");
    assert_eq!(labor.severity, Severity::High);
    assert_eq!(labor.category, Dimension::Social);
    assert_eq!(water.severity, Severity::Medium);
    assert_eq!(water.category, Dimension::Environmental);
}

#[test]
fn profile_scoped_rules_need_a_matching_profile() {
    let mut exposed = uniform_assessment(3);
    exposed.company_profile = exposed_profile();
    let neutral = uniform_assessment(3);

    let exposed_risks = RiskRulebook::standard().identify(&exposed);
    let neutral_risks = RiskRulebook::standard().identify(&neutral);

    let types: Vec<&str> = exposed_risks
        .iter()
        .map(|risk| risk.risk_type.as_str())
        .collect();
    assert_eq!(
        types,
        vec![
            "CSRD Climate Disclosure",
            "High-Hazard Operations Safety",
            "Listed Company Disclosure",
            "Third-Party Assurance Gap",
        ]
    );
    assert!(exposed_risks
        .iter()
        .all(|risk| risk.severity == Severity::Medium));
    assert!(neutral_risks.is_empty(), "unexpected risks: {neutral_risks:?}");
}

#[test]
fn unknown_profile_codes_match_no_scope() {
    let mut data = uniform_assessment(3);
    data.company_profile.geography = "atlantis".to_string();
    data.company_profile.size = "lots".to_string();

    assert!(RiskRulebook::standard().identify(&data).is_empty());
}

#[test]
fn a_held_certification_closes_the_assurance_gap() {
    let mut data = uniform_assessment(5);
    data.company_profile.size = "501-1000".to_string();
    let without = RiskRulebook::standard().identify(&data);

    data.maturity.certifications = Certifications::from_selection(vec![Certification::EcoVadis]);
    let with = RiskRulebook::standard().identify(&data);

    assert_eq!(without.len(), 1);
    assert_eq!(without[0].risk_type, "Third-Party Assurance Gap");
    assert!(with.is_empty());
}

#[test]
fn none_sentinel_counts_as_no_certification() {
    let mut data = uniform_assessment(5);
    data.company_profile.size = "1001+".to_string();
    data.maturity.certifications = Certifications::from_selection(vec![Certification::NoneHeld]);

    let risks = RiskRulebook::standard().identify(&data);

    assert_eq!(risks.len(), 1);
    assert!(!risks[0].is_regulatory);
}

#[test]
fn investor_backed_companies_get_due_diligence_findings() {
    let mut data = uniform_assessment(5);
    data.company_profile = neutral_profile();
    data.company_profile.ownership = "pe-backed".to_string();
    data.governance.risk_management = 3;

    let risks = RiskRulebook::standard().identify(&data);

    assert_eq!(risks.len(), 1);
    assert_eq!(risks[0].risk_type, "Investor Due Diligence Exposure");
    assert_eq!(risks[0].severity, Severity::Low);
}

#[test]
fn rejects_duplicate_rule_ids() {
    let trigger = RiskTrigger::RatingBelow {
        topic: Topic::WaterUsage,
        threshold: 3,
    };
    let rules = vec![
        rule("water", trigger, SeverityRule::Fixed(Severity::Low)),
        rule("water", trigger, SeverityRule::Fixed(Severity::High)),
    ];

    match RiskRulebook::new(rules) {
        Err(ConfigurationError::DuplicateRule { id: "water" }) => {}
        other => panic!("expected duplicate rule, got {other:?}"),
    }
}

#[test]
fn rejects_threshold_that_can_never_fire() {
    let rules = vec![rule(
        "never",
        RiskTrigger::RatingBelow {
            topic: Topic::WaterUsage,
            threshold: 1,
        },
        SeverityRule::Banded(Criticality::Standard),
    )];

    match RiskRulebook::new(rules) {
        Err(ConfigurationError::InvalidThreshold {
            id: "never",
            threshold: 1,
        }) => {}
        other => panic!("expected invalid threshold, got {other:?}"),
    }
}

#[test]
fn rejects_banded_severity_on_condition_trigger() {
    let rules = vec![rule(
        "certs",
        RiskTrigger::NoCertificationsWithin {
            scope: ProfileScope::Sizes(&[]),
        },
        SeverityRule::Banded(Criticality::Core),
    )];

    match RiskRulebook::new(rules) {
        Err(ConfigurationError::BandedSeverityWithoutRating { id: "certs" }) => {}
        other => panic!("expected banded severity rejection, got {other:?}"),
    }
}

#[test]
fn standard_rulebook_is_valid() {
    assert_eq!(RiskRulebook::standard().validate(), Ok(()));
}
