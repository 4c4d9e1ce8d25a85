use super::super::domain::{
    AssessmentData, CompanyProfile, CompanySize, Dimension, Geography, Industry, Ownership, Topic,
};
use super::Severity;

/// Subset of company profiles a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileScope {
    Industries(&'static [Industry]),
    Geographies(&'static [Geography]),
    Ownerships(&'static [Ownership]),
    Sizes(&'static [CompanySize]),
}

impl ProfileScope {
    pub fn contains(&self, profile: &CompanyProfile) -> bool {
        match self {
            ProfileScope::Industries(values) => profile
                .industry_sector()
                .is_some_and(|value| values.contains(&value)),
            ProfileScope::Geographies(values) => profile
                .geographic_scope()
                .is_some_and(|value| values.contains(&value)),
            ProfileScope::Ownerships(values) => profile
                .ownership_structure()
                .is_some_and(|value| values.contains(&value)),
            ProfileScope::Sizes(values) => profile
                .size_band()
                .is_some_and(|value| values.contains(&value)),
        }
    }
}

/// Condition under which a rule emits a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTrigger {
    /// Rating strictly below `threshold`.
    RatingBelow { topic: Topic, threshold: u8 },
    /// Rating strictly below `threshold` for companies inside `scope`.
    RatingBelowWithin {
        topic: Topic,
        threshold: u8,
        scope: ProfileScope,
    },
    /// No real certification held by a company inside `scope`.
    NoCertificationsWithin { scope: ProfileScope },
}

/// What caused a trigger to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Activation {
    Rating(u8),
    Condition,
}

impl RiskTrigger {
    pub(crate) fn threshold(&self) -> Option<u8> {
        match self {
            RiskTrigger::RatingBelow { threshold, .. }
            | RiskTrigger::RatingBelowWithin { threshold, .. } => Some(*threshold),
            RiskTrigger::NoCertificationsWithin { .. } => None,
        }
    }

    pub(crate) fn activation(&self, data: &AssessmentData) -> Option<Activation> {
        match self {
            RiskTrigger::RatingBelow { topic, threshold } => {
                let rating = data.rating(*topic);
                (rating < *threshold).then_some(Activation::Rating(rating))
            }
            RiskTrigger::RatingBelowWithin {
                topic,
                threshold,
                scope,
            } => {
                let rating = data.rating(*topic);
                (rating < *threshold && scope.contains(&data.company_profile))
                    .then_some(Activation::Rating(rating))
            }
            RiskTrigger::NoCertificationsWithin { scope } => {
                (!data.maturity.certifications.holds_any()
                    && scope.contains(&data.company_profile))
                .then_some(Activation::Condition)
            }
        }
    }
}

/// How strongly a low rating on a topic weighs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criticality {
    /// 1 → Critical, 2 → High, 3 → Medium, otherwise Low.
    Core,
    /// 1 → High, 2 → Medium, otherwise Low.
    Standard,
}

impl Criticality {
    pub const fn severity_for(self, rating: u8) -> Severity {
        match (self, rating) {
            (Criticality::Core, 1) => Severity::Critical,
            (Criticality::Core, 2) => Severity::High,
            (Criticality::Core, 3) => Severity::Medium,
            (Criticality::Standard, 1) => Severity::High,
            (Criticality::Standard, 2) => Severity::Medium,
            _ => Severity::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityRule {
    /// Severity follows the rating that fired the trigger.
    Banded(Criticality),
    Fixed(Severity),
}

impl SeverityRule {
    pub(crate) fn resolve(&self, activation: Activation) -> Severity {
        match (self, activation) {
            (SeverityRule::Fixed(severity), _) => *severity,
            (SeverityRule::Banded(criticality), Activation::Rating(rating)) => {
                criticality.severity_for(rating)
            }
            // Rejected when the rulebook is built.
            (SeverityRule::Banded(_), Activation::Condition) => Severity::Low,
        }
    }
}

/// Declarative risk rule: a trigger plus the finding it emits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskRule {
    pub id: &'static str,
    pub category: Dimension,
    pub risk_type: &'static str,
    pub trigger: RiskTrigger,
    pub severity: SeverityRule,
    pub regulatory: bool,
    pub description: &'static str,
    pub recommendation: &'static str,
}

const CSRD_GEOGRAPHIES: &[Geography] = &[Geography::Eu, Geography::International, Geography::Global];

const HIGH_HAZARD_INDUSTRIES: &[Industry] = &[
    Industry::Manufacturing,
    Industry::Energy,
    Industry::Agriculture,
    Industry::Transportation,
    Industry::RealEstate,
];

const LISTED_OWNERSHIP: &[Ownership] = &[Ownership::Public];

const INVESTOR_BACKED_OWNERSHIP: &[Ownership] = &[Ownership::PeBacked, Ownership::VcBacked];

const LARGE_COMPANY_SIZES: &[CompanySize] = &[
    CompanySize::Large,
    CompanySize::VeryLarge,
    CompanySize::Enterprise,
];

pub(crate) fn standard_risk_rules() -> Vec<RiskRule> {
    vec![
        RiskRule {
            id: "ghg-tracking",
            category: Dimension::Environmental,
            risk_type: "GHG Emissions Disclosure",
            trigger: RiskTrigger::RatingBelow {
                topic: Topic::GhgTracking,
                threshold: 3,
            },
            severity: SeverityRule::Banded(Criticality::Core),
            regulatory: true,
            description: "Greenhouse gas emissions are not tracked systematically, leaving the company exposed to mandatory climate disclosure regimes such as CSRD, ISSB and SEC climate rules.",
            recommendation: "Establish a Scope 1 and 2 GHG inventory aligned with the GHG Protocol",
        },
        RiskRule {
            id: "climate-strategy",
            category: Dimension::Environmental,
            risk_type: "Climate Transition Risk",
            trigger: RiskTrigger::RatingBelow {
                topic: Topic::ClimateStrategy,
                threshold: 3,
            },
            severity: SeverityRule::Banded(Criticality::Standard),
            regulatory: false,
            description: "Without a climate transition strategy the business is exposed to carbon pricing, shifting customer demand and stranded asset risk.",
            recommendation: "Develop a climate transition plan with science-based reduction targets",
        },
        RiskRule {
            id: "energy-management",
            category: Dimension::Environmental,
            risk_type: "Energy Cost Exposure",
            trigger: RiskTrigger::RatingBelow {
                topic: Topic::EnergyManagement,
                threshold: 3,
            },
            severity: SeverityRule::Banded(Criticality::Standard),
            regulatory: false,
            description: "Limited energy management leaves operating costs exposed to energy price volatility.",
            recommendation: "Launch an energy efficiency program and assess renewable energy sourcing",
        },
        RiskRule {
            id: "waste-reduction",
            category: Dimension::Environmental,
            risk_type: "Waste & Circularity",
            trigger: RiskTrigger::RatingBelow {
                topic: Topic::WasteReduction,
                threshold: 3,
            },
            severity: SeverityRule::Banded(Criticality::Standard),
            regulatory: false,
            description: "Minimal waste reduction effort increases disposal costs and reputational exposure as circular economy expectations rise.",
            recommendation: "Implement waste tracking and set reduction and diversion targets",
        },
        RiskRule {
            id: "water-usage",
            category: Dimension::Environmental,
            risk_type: "Water Stewardship",
            trigger: RiskTrigger::RatingBelow {
                topic: Topic::WaterUsage,
                threshold: 3,
            },
            severity: SeverityRule::Banded(Criticality::Standard),
            regulatory: false,
            description: "Water use is not monitored, hiding exposure to scarcity and supply disruption at operating sites.",
            recommendation: "Introduce water monitoring at material sites and assess basin stress",
        },
        RiskRule {
            id: "csrd-climate-disclosure",
            category: Dimension::Environmental,
            risk_type: "CSRD Climate Disclosure",
            trigger: RiskTrigger::RatingBelowWithin {
                topic: Topic::GhgTracking,
                threshold: 4,
                scope: ProfileScope::Geographies(CSRD_GEOGRAPHIES),
            },
            severity: SeverityRule::Banded(Criticality::Core),
            regulatory: true,
            description: "Operations in or selling into the European Union fall within CSRD climate reporting, which requires audited emissions data the company does not yet produce.",
            recommendation: "Run a CSRD double materiality assessment and disclosure gap analysis",
        },
        RiskRule {
            id: "labor-practices",
            category: Dimension::Social,
            risk_type: "Workforce Relations",
            trigger: RiskTrigger::RatingBelow {
                topic: Topic::LaborPractices,
                threshold: 3,
            },
            severity: SeverityRule::Banded(Criticality::Core),
            regulatory: false,
            description: "Labor practices stop at basic compliance, raising the risk of disputes, turnover and reputational damage.",
            recommendation: "Review labor policies against ILO core standards and introduce employee feedback channels",
        },
        RiskRule {
            id: "health-safety",
            category: Dimension::Social,
            risk_type: "Occupational Health & Safety",
            trigger: RiskTrigger::RatingBelow {
                topic: Topic::HealthSafety,
                threshold: 3,
            },
            severity: SeverityRule::Banded(Criticality::Core),
            regulatory: true,
            description: "Health and safety programs are minimal, exposing the company to workplace incidents and occupational safety enforcement.",
            recommendation: "Implement a health and safety management system aligned with ISO 45001",
        },
        RiskRule {
            id: "supply-chain",
            category: Dimension::Social,
            risk_type: "Supply Chain Due Diligence",
            trigger: RiskTrigger::RatingBelow {
                topic: Topic::SupplyChain,
                threshold: 3,
            },
            severity: SeverityRule::Banded(Criticality::Core),
            regulatory: true,
            description: "There is little oversight of human rights and ethics in the supply chain, a gap under mandatory due diligence laws such as CSDDD and national supply chain acts.",
            recommendation: "Map tier-one suppliers and introduce a supplier code of conduct backed by due diligence audits",
        },
        RiskRule {
            id: "diversity-inclusion",
            category: Dimension::Social,
            risk_type: "Diversity & Inclusion Gap",
            trigger: RiskTrigger::RatingBelow {
                topic: Topic::DiversityInclusion,
                threshold: 3,
            },
            severity: SeverityRule::Banded(Criticality::Standard),
            regulatory: false,
            description: "Limited diversity, equity and inclusion initiatives weaken talent attraction and investor perception.",
            recommendation: "Set measurable diversity, equity and inclusion objectives with executive ownership",
        },
        RiskRule {
            id: "community-engagement",
            category: Dimension::Social,
            risk_type: "Social License to Operate",
            trigger: RiskTrigger::RatingBelow {
                topic: Topic::CommunityEngagement,
                threshold: 3,
            },
            severity: SeverityRule::Banded(Criticality::Standard),
            regulatory: false,
            description: "No structured community engagement leaves local relationships and the social license to operate unmanaged.",
            recommendation: "Formalize a community investment and engagement program",
        },
        RiskRule {
            id: "high-hazard-safety",
            category: Dimension::Social,
            risk_type: "High-Hazard Operations Safety",
            trigger: RiskTrigger::RatingBelowWithin {
                topic: Topic::HealthSafety,
                threshold: 4,
                scope: ProfileScope::Industries(HIGH_HAZARD_INDUSTRIES),
            },
            severity: SeverityRule::Banded(Criticality::Core),
            regulatory: true,
            description: "The sector carries elevated physical hazards and strict safety regulation, and current safety management falls short of that exposure.",
            recommendation: "Commission an independent safety audit of high-hazard operations",
        },
        RiskRule {
            id: "stakeholder-engagement",
            category: Dimension::Social,
            risk_type: "Stakeholder Engagement",
            trigger: RiskTrigger::RatingBelow {
                topic: Topic::StakeholderEngagement,
                threshold: 3,
            },
            severity: SeverityRule::Banded(Criticality::Standard),
            regulatory: false,
            description: "Stakeholder engagement is ad hoc, so material concerns from investors, employees and customers may go unnoticed.",
            recommendation: "Run a structured stakeholder engagement and materiality exercise",
        },
        RiskRule {
            id: "compliance-framework",
            category: Dimension::Governance,
            risk_type: "Compliance Framework Gap",
            trigger: RiskTrigger::RatingBelow {
                topic: Topic::ComplianceFramework,
                threshold: 3,
            },
            severity: SeverityRule::Banded(Criticality::Core),
            regulatory: true,
            description: "Compliance is managed reactively, increasing the likelihood of regulatory breaches going undetected.",
            recommendation: "Build an integrated compliance management system with clear ownership",
        },
        RiskRule {
            id: "board-structure",
            category: Dimension::Governance,
            risk_type: "Board ESG Oversight",
            trigger: RiskTrigger::RatingBelow {
                topic: Topic::BoardStructure,
                threshold: 3,
            },
            severity: SeverityRule::Banded(Criticality::Standard),
            regulatory: false,
            description: "The board has no defined ESG oversight, leaving strategy and risk decisions without sustainability input.",
            recommendation: "Assign ESG oversight to a board committee with a defined charter",
        },
        RiskRule {
            id: "risk-management",
            category: Dimension::Governance,
            risk_type: "ESG Risk Integration",
            trigger: RiskTrigger::RatingBelow {
                topic: Topic::RiskManagement,
                threshold: 3,
            },
            severity: SeverityRule::Banded(Criticality::Core),
            regulatory: false,
            description: "ESG risks are not tracked within enterprise risk management, so material exposures can surface without warning.",
            recommendation: "Integrate ESG risks into the enterprise risk management framework",
        },
        RiskRule {
            id: "transparency",
            category: Dimension::Governance,
            risk_type: "Disclosure Transparency",
            trigger: RiskTrigger::RatingBelow {
                topic: Topic::Transparency,
                threshold: 3,
            },
            severity: SeverityRule::Banded(Criticality::Standard),
            regulatory: false,
            description: "Limited public disclosure reduces trust with investors, lenders and customers.",
            recommendation: "Publish an annual ESG disclosure covering key performance metrics",
        },
        RiskRule {
            id: "ethics-code",
            category: Dimension::Governance,
            risk_type: "Anti-Corruption Controls",
            trigger: RiskTrigger::RatingBelow {
                topic: Topic::EthicsCode,
                threshold: 3,
            },
            severity: SeverityRule::Banded(Criticality::Core),
            regulatory: true,
            description: "Ethics and anti-corruption policies are basic, exposing the company to bribery and corruption enforcement.",
            recommendation: "Adopt an anti-corruption policy with mandatory training and a whistleblower channel",
        },
        RiskRule {
            id: "listed-disclosure",
            category: Dimension::Governance,
            risk_type: "Listed Company Disclosure",
            trigger: RiskTrigger::RatingBelowWithin {
                topic: Topic::Transparency,
                threshold: 4,
                scope: ProfileScope::Ownerships(LISTED_OWNERSHIP),
            },
            severity: SeverityRule::Banded(Criticality::Core),
            regulatory: true,
            description: "Publicly traded companies face mandatory sustainability reporting under listing and securities rules, and current disclosure falls short.",
            recommendation: "Prepare for mandatory sustainability reporting under listing requirements",
        },
        RiskRule {
            id: "investor-readiness",
            category: Dimension::Governance,
            risk_type: "Investor Due Diligence Exposure",
            trigger: RiskTrigger::RatingBelowWithin {
                topic: Topic::RiskManagement,
                threshold: 4,
                scope: ProfileScope::Ownerships(INVESTOR_BACKED_OWNERSHIP),
            },
            severity: SeverityRule::Banded(Criticality::Standard),
            regulatory: false,
            description: "Investor-backed companies are screened on ESG risk management during fundraising and exit, and gaps here can affect valuation.",
            recommendation: "Prepare an ESG data room ahead of investor due diligence",
        },
        RiskRule {
            id: "esg-reporting",
            category: Dimension::Governance,
            risk_type: "Reporting Readiness",
            trigger: RiskTrigger::RatingBelow {
                topic: Topic::EsgReport,
                threshold: 3,
            },
            severity: SeverityRule::Banded(Criticality::Standard),
            regulatory: false,
            description: "No established ESG reporting means stakeholder requests for data cannot be answered consistently.",
            recommendation: "Produce a baseline sustainability report using GRI or ISSB standards",
        },
        RiskRule {
            id: "esg-accountability",
            category: Dimension::Governance,
            risk_type: "ESG Accountability",
            trigger: RiskTrigger::RatingBelow {
                topic: Topic::EsgTeam,
                threshold: 3,
            },
            severity: SeverityRule::Banded(Criticality::Standard),
            regulatory: false,
            description: "No one is resourced to own ESG, so initiatives depend on goodwill rather than accountability.",
            recommendation: "Appoint an accountable ESG lead with a defined mandate and budget",
        },
        RiskRule {
            id: "assurance-gap",
            category: Dimension::Governance,
            risk_type: "Third-Party Assurance Gap",
            trigger: RiskTrigger::NoCertificationsWithin {
                scope: ProfileScope::Sizes(LARGE_COMPANY_SIZES),
            },
            severity: SeverityRule::Fixed(Severity::Medium),
            regulatory: false,
            description: "A company of this size without any recognized certification or rating has no independent validation of its ESG claims.",
            recommendation: "Pursue a recognized third-party certification or rating such as EcoVadis or ISO 14001",
        },
    ]
}
