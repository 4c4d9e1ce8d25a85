use crate::infra::{build_engine, read_input};
use clap::Args;
use esg_maturity::assessment::{
    evaluate_portfolio, write_portfolio_summary, AssessmentData, AssessmentResult,
    PortfolioImporter,
};
use esg_maturity::config::AppConfig;
use esg_maturity::error::AppError;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Assessment JSON file, or `-` to read from stdin
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Pretty-print the JSON result
    #[arg(long)]
    pub(crate) pretty: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// Portfolio CSV with one assessment per row
    #[arg(long)]
    pub(crate) input: PathBuf,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = build_engine(&config.scoring)?;

    let raw = read_input(&args.input)?;
    let data: AssessmentData = serde_json::from_str(&raw)?;
    let result = engine.evaluate(&data)?;

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{rendered}");
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = build_engine(&config.scoring)?;

    let entries = PortfolioImporter::from_path(&args.input)?;
    let outcomes = evaluate_portfolio(&engine, &entries);
    write_portfolio_summary(&outcomes, std::io::stdout().lock())?;

    let rejected = outcomes
        .iter()
        .filter(|outcome| outcome.result.is_err())
        .count();
    if rejected > 0 {
        eprintln!("{rejected} of {} rows rejected", outcomes.len());
    }
    Ok(())
}

/// Plain-text rendering of one result for terminals and demos.
pub(crate) fn render_text_report(company: &str, result: &AssessmentResult) -> String {
    let scores = &result.scores;
    let level = scores.maturity_level();
    let mut lines = vec![
        format!("ESG maturity assessment: {company}"),
        format!(
            "Overall {}/100 | {} ({})",
            scores.overall(),
            level.label(),
            level.description()
        ),
        format!(
            "Environmental {} | Social {} | Governance {}",
            scores.environmental(),
            scores.social(),
            scores.governance()
        ),
        String::new(),
        format!(
            "Risks ({} total, {} regulatory)",
            result.risks.len(),
            result.regulatory_risk_count()
        ),
    ];

    if result.risks.is_empty() {
        lines.push("- none identified".to_string());
    }
    lines.extend(result.risks.iter().map(|risk| {
        let marker = if risk.is_regulatory { " [regulatory]" } else { "" };
        format!(
            "- [{}] {} / {}{}: {}",
            risk.severity.label(),
            risk.category.label(),
            risk.risk_type,
            marker,
            risk.description
        )
    }));

    lines.push(String::new());
    lines.push("Opportunities".to_string());
    if result.opportunities.is_empty() {
        lines.push("- none identified".to_string());
    }
    lines.extend(
        result
            .opportunities
            .iter()
            .map(|opportunity| format!("- {opportunity}")),
    );

    lines.push(String::new());
    lines.push("Next steps".to_string());
    lines.extend(
        result
            .next_steps
            .iter()
            .enumerate()
            .map(|(index, step)| format!("{}. {step}", index + 1)),
    );

    let mut report = lines.join("\n");
    report.push('\n');
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use esg_maturity::assessment::AssessmentEngine;

    #[test]
    fn text_report_lists_every_section() {
        let data = crate::demo::sample_assessment();
        let result = AssessmentEngine::standard()
            .evaluate(&data)
            .expect("sample is valid");

        let report = render_text_report("Northwind Components", &result);

        assert!(report.starts_with("ESG maturity assessment: Northwind Components"));
        assert!(report.contains("[regulatory]"));
        assert!(report.contains("\nOpportunities\n"));
        assert!(report.contains(&format!("1. {}", result.next_steps[0])));
        let last = result.next_steps.last().expect("next steps");
        assert!(report.ends_with(&format!("{}. {last}\n", result.next_steps.len())));
    }
}
