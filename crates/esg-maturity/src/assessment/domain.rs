use serde::{Deserialize, Serialize};

/// One of the three scored ESG dimensions. Also used as the category of a risk finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dimension {
    Environmental,
    Social,
    Governance,
}

impl Dimension {
    pub const fn ordered() -> [Self; 3] {
        [Self::Environmental, Self::Social, Self::Governance]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Environmental => "Environmental",
            Self::Social => "Social",
            Self::Governance => "Governance",
        }
    }
}

/// Questionnaire sections that carry ratings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Environmental,
    Social,
    Governance,
    Maturity,
}

impl Section {
    /// Key of the section in the submitted payload.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Environmental => "environmental",
            Self::Social => "social",
            Self::Governance => "governance",
            Self::Maturity => "maturity",
        }
    }
}

/// A single rated questionnaire field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    GhgTracking,
    EnergyManagement,
    WasteReduction,
    WaterUsage,
    ClimateStrategy,
    LaborPractices,
    HealthSafety,
    DiversityInclusion,
    SupplyChain,
    CommunityEngagement,
    BoardStructure,
    ComplianceFramework,
    RiskManagement,
    Transparency,
    EthicsCode,
    EsgReport,
    EsgTeam,
    StakeholderEngagement,
}

impl Topic {
    pub const fn section(self) -> Section {
        match self {
            Self::GhgTracking
            | Self::EnergyManagement
            | Self::WasteReduction
            | Self::WaterUsage
            | Self::ClimateStrategy => Section::Environmental,
            Self::LaborPractices
            | Self::HealthSafety
            | Self::DiversityInclusion
            | Self::SupplyChain
            | Self::CommunityEngagement => Section::Social,
            Self::BoardStructure
            | Self::ComplianceFramework
            | Self::RiskManagement
            | Self::Transparency
            | Self::EthicsCode => Section::Governance,
            Self::EsgReport | Self::EsgTeam | Self::StakeholderEngagement => Section::Maturity,
        }
    }

    /// Field name used in the submitted payload.
    pub const fn field(self) -> &'static str {
        match self {
            Self::GhgTracking => "ghgTracking",
            Self::EnergyManagement => "energyManagement",
            Self::WasteReduction => "wasteReduction",
            Self::WaterUsage => "waterUsage",
            Self::ClimateStrategy => "climateStrategy",
            Self::LaborPractices => "laborPractices",
            Self::HealthSafety => "healthSafety",
            Self::DiversityInclusion => "diversityInclusion",
            Self::SupplyChain => "supplyChain",
            Self::CommunityEngagement => "communityEngagement",
            Self::BoardStructure => "boardStructure",
            Self::ComplianceFramework => "complianceFramework",
            Self::RiskManagement => "riskManagement",
            Self::Transparency => "transparency",
            Self::EthicsCode => "ethicsCode",
            Self::EsgReport => "hasESGReport",
            Self::EsgTeam => "hasESGTeam",
            Self::StakeholderEngagement => "stakeholderEngagement",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::GhgTracking => "Greenhouse Gas Emissions Tracking",
            Self::EnergyManagement => "Energy Management",
            Self::WasteReduction => "Waste Reduction & Circular Economy",
            Self::WaterUsage => "Water Management",
            Self::ClimateStrategy => "Climate Transition Strategy",
            Self::LaborPractices => "Labor Practices & Employee Rights",
            Self::HealthSafety => "Health & Safety",
            Self::DiversityInclusion => "Diversity, Equity & Inclusion",
            Self::SupplyChain => "Supply Chain Ethics & Human Rights",
            Self::CommunityEngagement => "Community Engagement & Impact",
            Self::BoardStructure => "Board Structure & ESG Oversight",
            Self::ComplianceFramework => "Compliance Management Framework",
            Self::RiskManagement => "Risk Management & Integration",
            Self::Transparency => "Transparency & Reporting",
            Self::EthicsCode => "Ethics & Anti-Corruption",
            Self::EsgReport => "ESG or Sustainability Reporting Maturity",
            Self::EsgTeam => "ESG Team Structure & Resources",
            Self::StakeholderEngagement => "Stakeholder Engagement Maturity",
        }
    }

    /// Dotted path of the field, e.g. `environmental.ghgTracking`.
    pub fn path(self) -> String {
        format!("{}.{}", self.section().key(), self.field())
    }
}

/// Rated responses for one ESG dimension.
pub trait DimensionResponses {
    const DIMENSION: Dimension;

    /// The five ratings of the dimension in questionnaire order.
    fn ratings(&self) -> [(Topic, u8); 5];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentalResponses {
    pub ghg_tracking: u8,
    pub energy_management: u8,
    pub waste_reduction: u8,
    pub water_usage: u8,
    pub climate_strategy: u8,
}

impl DimensionResponses for EnvironmentalResponses {
    const DIMENSION: Dimension = Dimension::Environmental;

    fn ratings(&self) -> [(Topic, u8); 5] {
        [
            (Topic::GhgTracking, self.ghg_tracking),
            (Topic::EnergyManagement, self.energy_management),
            (Topic::WasteReduction, self.waste_reduction),
            (Topic::WaterUsage, self.water_usage),
            (Topic::ClimateStrategy, self.climate_strategy),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialResponses {
    pub labor_practices: u8,
    pub health_safety: u8,
    pub diversity_inclusion: u8,
    pub supply_chain: u8,
    pub community_engagement: u8,
}

impl DimensionResponses for SocialResponses {
    const DIMENSION: Dimension = Dimension::Social;

    fn ratings(&self) -> [(Topic, u8); 5] {
        [
            (Topic::LaborPractices, self.labor_practices),
            (Topic::HealthSafety, self.health_safety),
            (Topic::DiversityInclusion, self.diversity_inclusion),
            (Topic::SupplyChain, self.supply_chain),
            (Topic::CommunityEngagement, self.community_engagement),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GovernanceResponses {
    pub board_structure: u8,
    pub compliance_framework: u8,
    pub risk_management: u8,
    pub transparency: u8,
    pub ethics_code: u8,
}

impl DimensionResponses for GovernanceResponses {
    const DIMENSION: Dimension = Dimension::Governance;

    fn ratings(&self) -> [(Topic, u8); 5] {
        [
            (Topic::BoardStructure, self.board_structure),
            (Topic::ComplianceFramework, self.compliance_framework),
            (Topic::RiskManagement, self.risk_management),
            (Topic::Transparency, self.transparency),
            (Topic::EthicsCode, self.ethics_code),
        ]
    }
}

/// Certifications and third-party ratings offered by the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Certification {
    #[serde(rename = "ISO 14001 (Environmental Management)")]
    Iso14001,
    #[serde(rename = "ISO 45001 (Occupational Health & Safety)")]
    Iso45001,
    #[serde(rename = "B Corp Certification")]
    BCorp,
    #[serde(rename = "EcoVadis Rating")]
    EcoVadis,
    #[serde(rename = "CDP Disclosure")]
    Cdp,
    #[serde(rename = "LEED Certification")]
    Leed,
    #[serde(rename = "Fair Trade Certification")]
    FairTrade,
    #[serde(rename = "SA8000 (Social Accountability)")]
    Sa8000,
    /// Sentinel answer; exclusive with every other selection.
    #[serde(rename = "None")]
    NoneHeld,
}

impl Certification {
    pub const fn ordered() -> [Self; 9] {
        [
            Self::Iso14001,
            Self::Iso45001,
            Self::BCorp,
            Self::EcoVadis,
            Self::Cdp,
            Self::Leed,
            Self::FairTrade,
            Self::Sa8000,
            Self::NoneHeld,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Iso14001 => "ISO 14001 (Environmental Management)",
            Self::Iso45001 => "ISO 45001 (Occupational Health & Safety)",
            Self::BCorp => "B Corp Certification",
            Self::EcoVadis => "EcoVadis Rating",
            Self::Cdp => "CDP Disclosure",
            Self::Leed => "LEED Certification",
            Self::FairTrade => "Fair Trade Certification",
            Self::Sa8000 => "SA8000 (Social Accountability)",
            Self::NoneHeld => "None",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ordered()
            .into_iter()
            .find(|certification| certification.label().eq_ignore_ascii_case(value))
    }

    pub const fn is_sentinel(self) -> bool {
        matches!(self, Self::NoneHeld)
    }
}

/// Ordered certification selection as answered on the questionnaire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Certifications(Vec<Certification>);

impl Certifications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a selection verbatim. Consistency is checked during validation, not here.
    pub fn from_selection(selection: Vec<Certification>) -> Self {
        Self(selection)
    }

    /// Every real certification in selection order.
    pub fn all_held() -> Self {
        Self(
            Certification::ordered()
                .into_iter()
                .filter(|certification| !certification.is_sentinel())
                .collect(),
        )
    }

    /// Flip a selection the way the questionnaire does: `None` clears every certification,
    /// any real certification clears `None`.
    pub fn toggle(&mut self, certification: Certification) {
        if certification.is_sentinel() {
            self.0 = vec![Certification::NoneHeld];
            return;
        }

        self.0.retain(|selected| !selected.is_sentinel());
        if let Some(position) = self.0.iter().position(|selected| *selected == certification) {
            self.0.remove(position);
        } else {
            self.0.push(certification);
        }
    }

    pub fn selected(&self) -> &[Certification] {
        &self.0
    }

    pub fn contains(&self, certification: Certification) -> bool {
        self.0.contains(&certification)
    }

    /// Real certifications only, in selection order.
    pub fn held(&self) -> impl Iterator<Item = Certification> + '_ {
        self.0
            .iter()
            .copied()
            .filter(|certification| !certification.is_sentinel())
    }

    pub fn holds_any(&self) -> bool {
        self.held().next().is_some()
    }

    pub(crate) fn is_consistent(&self) -> bool {
        let has_sentinel = self.0.iter().any(|selected| selected.is_sentinel());
        if has_sentinel && self.0.len() > 1 {
            return false;
        }

        self.0
            .iter()
            .enumerate()
            .all(|(index, selected)| !self.0[..index].contains(selected))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaturityResponses {
    #[serde(rename = "hasESGReport")]
    pub esg_report: u8,
    #[serde(rename = "hasCertifications", default)]
    pub certifications: Certifications,
    #[serde(rename = "hasESGTeam")]
    pub esg_team: u8,
    #[serde(rename = "stakeholderEngagement")]
    pub stakeholder_engagement: u8,
}

impl MaturityResponses {
    pub fn ratings(&self) -> [(Topic, u8); 3] {
        [
            (Topic::EsgReport, self.esg_report),
            (Topic::EsgTeam, self.esg_team),
            (Topic::StakeholderEngagement, self.stakeholder_engagement),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Industry {
    Technology,
    Manufacturing,
    Financial,
    Healthcare,
    Retail,
    Energy,
    RealEstate,
    Professional,
    Hospitality,
    Agriculture,
    Transportation,
    Other,
}

impl Industry {
    pub const fn ordered() -> [Self; 12] {
        [
            Self::Technology,
            Self::Manufacturing,
            Self::Financial,
            Self::Healthcare,
            Self::Retail,
            Self::Energy,
            Self::RealEstate,
            Self::Professional,
            Self::Hospitality,
            Self::Agriculture,
            Self::Transportation,
            Self::Other,
        ]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Technology => "technology",
            Self::Manufacturing => "manufacturing",
            Self::Financial => "financial",
            Self::Healthcare => "healthcare",
            Self::Retail => "retail",
            Self::Energy => "energy",
            Self::RealEstate => "real-estate",
            Self::Professional => "professional",
            Self::Hospitality => "hospitality",
            Self::Agriculture => "agriculture",
            Self::Transportation => "transportation",
            Self::Other => "other",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ordered()
            .into_iter()
            .find(|value| value.code().eq_ignore_ascii_case(code))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompanySize {
    #[serde(rename = "1-10")]
    Micro,
    #[serde(rename = "11-50")]
    Small,
    #[serde(rename = "51-200")]
    Medium,
    #[serde(rename = "201-500")]
    Large,
    #[serde(rename = "501-1000")]
    VeryLarge,
    #[serde(rename = "1001+")]
    Enterprise,
}

impl CompanySize {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Micro,
            Self::Small,
            Self::Medium,
            Self::Large,
            Self::VeryLarge,
            Self::Enterprise,
        ]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Micro => "1-10",
            Self::Small => "11-50",
            Self::Medium => "51-200",
            Self::Large => "201-500",
            Self::VeryLarge => "501-1000",
            Self::Enterprise => "1001+",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ordered().into_iter().find(|value| value.code() == code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RevenueBand {
    #[serde(rename = "under-1m")]
    Under1m,
    #[serde(rename = "1m-5m")]
    From1mTo5m,
    #[serde(rename = "5m-10m")]
    From5mTo10m,
    #[serde(rename = "10m-50m")]
    From10mTo50m,
    #[serde(rename = "50m-100m")]
    From50mTo100m,
    #[serde(rename = "100m-500m")]
    From100mTo500m,
    #[serde(rename = "500m+")]
    Over500m,
}

impl RevenueBand {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Under1m,
            Self::From1mTo5m,
            Self::From5mTo10m,
            Self::From10mTo50m,
            Self::From50mTo100m,
            Self::From100mTo500m,
            Self::Over500m,
        ]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Under1m => "under-1m",
            Self::From1mTo5m => "1m-5m",
            Self::From5mTo10m => "5m-10m",
            Self::From10mTo50m => "10m-50m",
            Self::From50mTo100m => "50m-100m",
            Self::From100mTo500m => "100m-500m",
            Self::Over500m => "500m+",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ordered()
            .into_iter()
            .find(|value| value.code().eq_ignore_ascii_case(code))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Geography {
    Local,
    Regional,
    National,
    Eu,
    International,
    Global,
}

impl Geography {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Local,
            Self::Regional,
            Self::National,
            Self::Eu,
            Self::International,
            Self::Global,
        ]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Regional => "regional",
            Self::National => "national",
            Self::Eu => "eu",
            Self::International => "international",
            Self::Global => "global",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ordered()
            .into_iter()
            .find(|value| value.code().eq_ignore_ascii_case(code))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ownership {
    Private,
    Public,
    PeBacked,
    VcBacked,
    Family,
    Nonprofit,
}

impl Ownership {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Private,
            Self::Public,
            Self::PeBacked,
            Self::VcBacked,
            Self::Family,
            Self::Nonprofit,
        ]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::Public => "public",
            Self::PeBacked => "pe-backed",
            Self::VcBacked => "vc-backed",
            Self::Family => "family",
            Self::Nonprofit => "nonprofit",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ordered()
            .into_iter()
            .find(|value| value.code().eq_ignore_ascii_case(code))
    }
}

/// Company context captured before the rated sections. Codes stay as submitted; the typed
/// accessors return `None` for codes outside the known option sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub industry: String,
    pub size: String,
    pub revenue: String,
    pub geography: String,
    pub ownership: String,
}

impl CompanyProfile {
    pub fn industry_sector(&self) -> Option<Industry> {
        Industry::from_code(&self.industry)
    }

    pub fn size_band(&self) -> Option<CompanySize> {
        CompanySize::from_code(&self.size)
    }

    pub fn revenue_band(&self) -> Option<RevenueBand> {
        RevenueBand::from_code(&self.revenue)
    }

    pub fn geographic_scope(&self) -> Option<Geography> {
        Geography::from_code(&self.geography)
    }

    pub fn ownership_structure(&self) -> Option<Ownership> {
        Ownership::from_code(&self.ownership)
    }

    pub(crate) fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("industry", &self.industry),
            ("size", &self.size),
            ("revenue", &self.revenue),
            ("geography", &self.geography),
            ("ownership", &self.ownership),
        ]
    }
}

/// Complete questionnaire submission; the only input the engine accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentData {
    pub company_profile: CompanyProfile,
    pub environmental: EnvironmentalResponses,
    pub social: SocialResponses,
    pub governance: GovernanceResponses,
    pub maturity: MaturityResponses,
}

impl AssessmentData {
    pub fn rating(&self, topic: Topic) -> u8 {
        match topic {
            Topic::GhgTracking => self.environmental.ghg_tracking,
            Topic::EnergyManagement => self.environmental.energy_management,
            Topic::WasteReduction => self.environmental.waste_reduction,
            Topic::WaterUsage => self.environmental.water_usage,
            Topic::ClimateStrategy => self.environmental.climate_strategy,
            Topic::LaborPractices => self.social.labor_practices,
            Topic::HealthSafety => self.social.health_safety,
            Topic::DiversityInclusion => self.social.diversity_inclusion,
            Topic::SupplyChain => self.social.supply_chain,
            Topic::CommunityEngagement => self.social.community_engagement,
            Topic::BoardStructure => self.governance.board_structure,
            Topic::ComplianceFramework => self.governance.compliance_framework,
            Topic::RiskManagement => self.governance.risk_management,
            Topic::Transparency => self.governance.transparency,
            Topic::EthicsCode => self.governance.ethics_code,
            Topic::EsgReport => self.maturity.esg_report,
            Topic::EsgTeam => self.maturity.esg_team,
            Topic::StakeholderEngagement => self.maturity.stakeholder_engagement,
        }
    }

    /// Every rated field in questionnaire order.
    pub fn ratings(&self) -> Vec<(Topic, u8)> {
        let mut ratings = Vec::with_capacity(18);
        ratings.extend(self.environmental.ratings());
        ratings.extend(self.social.ratings());
        ratings.extend(self.governance.ratings());
        ratings.extend(self.maturity.ratings());
        ratings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_none_clears_real_certifications() {
        let mut certifications = Certifications::new();
        certifications.toggle(Certification::Iso14001);
        certifications.toggle(Certification::BCorp);

        certifications.toggle(Certification::NoneHeld);

        assert_eq!(certifications.selected(), &[Certification::NoneHeld]);
        assert!(!certifications.holds_any());
    }

    #[test]
    fn toggling_real_certification_clears_none() {
        let mut certifications = Certifications::from_selection(vec![Certification::NoneHeld]);

        certifications.toggle(Certification::EcoVadis);

        assert_eq!(certifications.selected(), &[Certification::EcoVadis]);
        assert!(certifications.is_consistent());
    }

    #[test]
    fn toggling_selected_certification_removes_it() {
        let mut certifications = Certifications::new();
        certifications.toggle(Certification::Cdp);
        certifications.toggle(Certification::Leed);
        certifications.toggle(Certification::Cdp);

        assert_eq!(certifications.selected(), &[Certification::Leed]);
    }

    #[test]
    fn mixed_none_selection_is_inconsistent() {
        let certifications =
            Certifications::from_selection(vec![Certification::NoneHeld, Certification::Sa8000]);
        assert!(!certifications.is_consistent());

        let duplicated =
            Certifications::from_selection(vec![Certification::Sa8000, Certification::Sa8000]);
        assert!(!duplicated.is_consistent());
    }

    #[test]
    fn certifications_use_questionnaire_labels_on_the_wire() {
        let certifications =
            Certifications::from_selection(vec![Certification::Iso45001, Certification::FairTrade]);
        let json = serde_json::to_string(&certifications).expect("serializes");
        assert_eq!(
            json,
            r#"["ISO 45001 (Occupational Health & Safety)","Fair Trade Certification"]"#
        );
        assert_eq!(
            Certification::from_label(" b corp certification "),
            Some(Certification::BCorp)
        );
    }

    #[test]
    fn profile_codes_parse_into_option_sets() {
        let profile = CompanyProfile {
            industry: "real-estate".to_string(),
            size: "1001+".to_string(),
            revenue: "500m+".to_string(),
            geography: "EU".to_string(),
            ownership: "pe-backed".to_string(),
        };

        assert_eq!(profile.industry_sector(), Some(Industry::RealEstate));
        assert_eq!(profile.size_band(), Some(CompanySize::Enterprise));
        assert_eq!(profile.revenue_band(), Some(RevenueBand::Over500m));
        assert_eq!(profile.geographic_scope(), Some(Geography::Eu));
        assert_eq!(profile.ownership_structure(), Some(Ownership::PeBacked));
    }

    #[test]
    fn topic_paths_match_payload_fields() {
        assert_eq!(Topic::GhgTracking.path(), "environmental.ghgTracking");
        assert_eq!(Topic::EsgReport.path(), "maturity.hasESGReport");
    }
}
