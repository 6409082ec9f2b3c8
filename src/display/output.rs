use crate::analysis::aptitude::{self, AggregateReport};
use crate::analysis::classifier::{OpponentSummary, Shape};
use crate::error::AppError;
use crate::labels::LabelTable;
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct RosterRow {
    #[tabled(rename = "#")]
    slot: String,
    distance: String,
    surface: String,
    style: String,
}

/// Turns a classified response into its display lines. Inapplicable
/// responses render as nothing at all; only a bad aptitude ordinal in
/// the post-selection path can fail.
pub fn render(
    shape: &Shape<'_>,
    labels: &dyn LabelTable,
    detail: bool,
) -> Result<Vec<String>, AppError> {
    match shape {
        Shape::PreSelection(summaries) => Ok(render_pre_selection(summaries)),
        Shape::PostSelection { name, roster, pool } => {
            let report = aptitude::aggregate(name, roster, pool)?;
            Ok(render_report(&report, labels, detail))
        }
        Shape::Inapplicable => Ok(Vec::new()),
    }
}

pub fn render_pre_selection(summaries: &[OpponentSummary]) -> Vec<String> {
    let mut lines = Vec::new();
    for summary in summaries {
        let per_day = match summary.intensity() {
            Some(value) => format!("{:.1}", value),
            None => "N/A".to_string(),
        };
        lines.push(format!(
            "#{}: {}  login days {}  runs {}  ({}/day)",
            summary.rank, summary.name, summary.login_day_count, summary.play_count, per_day
        ));
        lines.push("------".to_string());
    }
    lines.push(String::new());
    lines
}

pub fn render_report(
    report: &AggregateReport,
    labels: &dyn LabelTable,
    detail: bool,
) -> Vec<String> {
    let mut lines = vec![format!("Current opponent: {}", report.opponent_name)];

    if detail && !report.entries.is_empty() {
        let rows: Vec<RosterRow> = report
            .entries
            .iter()
            .map(|entry| RosterRow {
                slot: entry.trained_chara_id.to_string(),
                distance: format!(
                    "{} {}",
                    labels.distance_label(entry.distance_bucket),
                    entry.distance_grade.letter()
                ),
                surface: format!(
                    "{} {}",
                    labels.surface_label(entry.surface),
                    entry.surface_grade.letter()
                ),
                style: format!(
                    "{} {}",
                    labels.style_label(entry.style),
                    entry.style_grade.letter()
                ),
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::rounded());
        lines.extend(table.to_string().lines().map(str::to_string));
    }

    lines.push(format!("Distance aptitude: {}", report.distance));
    lines.push(format!("Surface aptitude: {}", report.surface));
    lines.push(format!("Style aptitude: {}", report.style));
    lines.push("----".to_string());
    lines.push(String::new());
    lines
}

pub fn display_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}
