//! Plain-text rendering of ranking and consistency results.

use crate::application::{ConsistencyReport, RankAlternativesResult};
use crate::domain::ahp::{ConsistencyVerdict, DecisionModel, PriorityResult};

/// Renders weights, consistency ratios and the final ranking.
pub fn render_ranking(model: &DecisionModel, result: &RankAlternativesResult) -> String {
    let mut out = String::new();

    section(&mut out, "Criteria", &result.criteria, model.criteria().names());
    for entry in &result.alternatives {
        out.push('\n');
        section(
            &mut out,
            &format!("Alternatives under {}", entry.criterion),
            &entry.priorities,
            model.alternatives().names(),
        );
    }

    out.push_str("\nRanking\n");
    let width = name_width(result.rankings.iter().map(|r| r.name.as_str()));
    for row in &result.rankings {
        out.push_str(&format!(
            "  {:>2}. {:<width$}  {:.3}\n",
            row.rank, row.name, row.score
        ));
    }

    out
}

/// Renders one line per comparison set with its CR and verdict.
pub fn render_consistency(report: &ConsistencyReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Consistency (threshold CR <= {:.2})\n",
        report.threshold
    ));

    for entry in &report.entries {
        let status = match &entry.verdict {
            ConsistencyVerdict::Accepted => "ok".to_string(),
            ConsistencyVerdict::Rejected { message } => format!("REJECTED: {}", message),
        };
        out.push_str(&format!(
            "  {:<40} CR = {:<6} {}\n",
            entry.set.to_string(),
            format_ratio(entry.priorities.consistency_ratio),
            status
        ));
    }

    out
}

fn section(out: &mut String, title: &str, priorities: &PriorityResult, names: &[String]) {
    out.push_str(&format!(
        "{} (CR = {})\n",
        title,
        format_ratio(priorities.consistency_ratio)
    ));
    let width = name_width(names.iter().map(String::as_str));
    for (name, weight) in names.iter().zip(&priorities.weights) {
        out.push_str(&format!("  {:<width$}  {:.3}\n", name, weight));
    }
}

fn name_width<'a>(names: impl Iterator<Item = &'a str>) -> usize {
    names.map(|n| n.chars().count()).max().unwrap_or(0)
}

fn format_ratio(ratio: Option<f64>) -> String {
    ratio.map_or_else(|| "n/a".to_string(), |r| format!("{:.3}", r))
}
