//! CSV portfolio import: one questionnaire per row, so a set of targets can be screened in a
//! single pass.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use super::domain::{
    AssessmentData, Certification, Certifications, CompanyProfile, EnvironmentalResponses,
    GovernanceResponses, MaturityResponses, SocialResponses,
};
use super::engine::{AssessmentEngine, AssessmentResult};
use super::error::ValidationError;

const CERTIFICATION_SEPARATOR: char = ';';

#[derive(Debug, thiserror::Error)]
pub enum BatchImportError {
    #[error("failed to read portfolio: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid portfolio CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("unknown certification '{value}' on line {line}")]
    UnknownCertification { line: u64, value: String },
}

/// A parsed portfolio row. Ratings are carried as read; validation happens at evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioEntry {
    pub company: String,
    pub line: u64,
    pub data: AssessmentData,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioOutcome {
    pub company: String,
    pub line: u64,
    pub result: Result<AssessmentResult, ValidationError>,
}

pub struct PortfolioImporter;

impl PortfolioImporter {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Vec<PortfolioEntry>, BatchImportError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<PortfolioEntry>, BatchImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        let mut entries = Vec::new();

        for record in csv_reader.records() {
            let record = record?;
            let line = record
                .position()
                .map(|position| position.line())
                .unwrap_or_default();
            let row: PortfolioRow = record.deserialize(Some(&headers))?;
            entries.push(row.into_entry(line)?);
        }

        Ok(entries)
    }
}

/// Evaluate every entry independently; a rejected row does not stop the others.
pub fn evaluate_portfolio(
    engine: &AssessmentEngine,
    entries: &[PortfolioEntry],
) -> Vec<PortfolioOutcome> {
    entries
        .iter()
        .map(|entry| PortfolioOutcome {
            company: entry.company.clone(),
            line: entry.line,
            result: engine.evaluate(&entry.data),
        })
        .collect()
}

/// Write one summary line per outcome. Rejected rows keep their error and leave scores empty.
pub fn write_portfolio_summary<W: Write>(
    outcomes: &[PortfolioOutcome],
    writer: W,
) -> Result<(), BatchImportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for outcome in outcomes {
        let row = match &outcome.result {
            Ok(result) => SummaryRow {
                company: &outcome.company,
                line: outcome.line,
                status: "scored",
                overall: Some(result.scores.overall()),
                environmental: Some(result.scores.environmental()),
                social: Some(result.scores.social()),
                governance: Some(result.scores.governance()),
                maturity_level: Some(result.scores.maturity_level().label()),
                risks: Some(result.risks.len()),
                regulatory_risks: Some(result.regulatory_risk_count()),
                error: None,
            },
            Err(error) => SummaryRow {
                company: &outcome.company,
                line: outcome.line,
                status: "rejected",
                overall: None,
                environmental: None,
                social: None,
                governance: None,
                maturity_level: None,
                risks: None,
                regulatory_risks: None,
                error: Some(error.to_string()),
            },
        };
        csv_writer.serialize(row)?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryRow<'a> {
    company: &'a str,
    line: u64,
    status: &'static str,
    overall: Option<u8>,
    environmental: Option<u8>,
    social: Option<u8>,
    governance: Option<u8>,
    maturity_level: Option<&'static str>,
    risks: Option<usize>,
    regulatory_risks: Option<usize>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PortfolioRow {
    company: String,
    #[serde(default)]
    industry: String,
    #[serde(default)]
    size: String,
    #[serde(default)]
    revenue: String,
    #[serde(default)]
    geography: String,
    #[serde(default)]
    ownership: String,
    #[serde(default, deserialize_with = "rating_cell")]
    ghg_tracking: u8,
    #[serde(default, deserialize_with = "rating_cell")]
    energy_management: u8,
    #[serde(default, deserialize_with = "rating_cell")]
    waste_reduction: u8,
    #[serde(default, deserialize_with = "rating_cell")]
    water_usage: u8,
    #[serde(default, deserialize_with = "rating_cell")]
    climate_strategy: u8,
    #[serde(default, deserialize_with = "rating_cell")]
    labor_practices: u8,
    #[serde(default, deserialize_with = "rating_cell")]
    health_safety: u8,
    #[serde(default, deserialize_with = "rating_cell")]
    diversity_inclusion: u8,
    #[serde(default, deserialize_with = "rating_cell")]
    supply_chain: u8,
    #[serde(default, deserialize_with = "rating_cell")]
    community_engagement: u8,
    #[serde(default, deserialize_with = "rating_cell")]
    board_structure: u8,
    #[serde(default, deserialize_with = "rating_cell")]
    compliance_framework: u8,
    #[serde(default, deserialize_with = "rating_cell")]
    risk_management: u8,
    #[serde(default, deserialize_with = "rating_cell")]
    transparency: u8,
    #[serde(default, deserialize_with = "rating_cell")]
    ethics_code: u8,
    #[serde(rename = "hasESGReport", default, deserialize_with = "rating_cell")]
    esg_report: u8,
    #[serde(rename = "hasESGTeam", default, deserialize_with = "rating_cell")]
    esg_team: u8,
    #[serde(default, deserialize_with = "rating_cell")]
    stakeholder_engagement: u8,
    #[serde(default)]
    certifications: String,
}

impl PortfolioRow {
    fn into_entry(self, line: u64) -> Result<PortfolioEntry, BatchImportError> {
        let certifications = parse_certifications(&self.certifications, line)?;

        Ok(PortfolioEntry {
            company: self.company,
            line,
            data: AssessmentData {
                company_profile: CompanyProfile {
                    industry: self.industry,
                    size: self.size,
                    revenue: self.revenue,
                    geography: self.geography,
                    ownership: self.ownership,
                },
                environmental: EnvironmentalResponses {
                    ghg_tracking: self.ghg_tracking,
                    energy_management: self.energy_management,
                    waste_reduction: self.waste_reduction,
                    water_usage: self.water_usage,
                    climate_strategy: self.climate_strategy,
                },
                social: SocialResponses {
                    labor_practices: self.labor_practices,
                    health_safety: self.health_safety,
                    diversity_inclusion: self.diversity_inclusion,
                    supply_chain: self.supply_chain,
                    community_engagement: self.community_engagement,
                },
                governance: GovernanceResponses {
                    board_structure: self.board_structure,
                    compliance_framework: self.compliance_framework,
                    risk_management: self.risk_management,
                    transparency: self.transparency,
                    ethics_code: self.ethics_code,
                },
                maturity: MaturityResponses {
                    esg_report: self.esg_report,
                    certifications,
                    esg_team: self.esg_team,
                    stakeholder_engagement: self.stakeholder_engagement,
                },
            },
        })
    }
}

fn parse_certifications(cell: &str, line: u64) -> Result<Certifications, BatchImportError> {
    let selection = cell
        .split(CERTIFICATION_SEPARATOR)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| {
            Certification::from_label(value).ok_or_else(|| BatchImportError::UnknownCertification {
                line,
                value: value.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Certifications::from_selection(selection))
}

/// Empty cells are unanswered ratings (0) and numbers above 255 saturate, so both reach
/// per-row validation instead of failing the import.
fn rating_cell<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(0),
        Some(value) => value
            .parse::<u32>()
            .map(|rating| u8::try_from(rating).unwrap_or(u8::MAX))
            .map_err(|err| serde::de::Error::custom(format!("invalid rating '{value}': {err}"))),
    }
}
