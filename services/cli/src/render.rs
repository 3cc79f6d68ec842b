use crate::demo::OutputFormat;
use admissions::admissions::{AdmissionReportSummary, RankedCandidateView, StatisticsView};
use admissions::error::AppError;
use std::io::{self, Write};

const TITLE: &str = "ADMITTED CANDIDATES - SYSTEMS ENGINEERING";
const TABLE_WIDTH: usize = 107;
const NAME_WIDTH: usize = 20;
const ETHNICITY_WIDTH: usize = 15;
const ROWS_PER_GROUP: usize = 5;
const STATISTICS_RULE_WIDTH: usize = 50;
const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ReportScope {
    Full,
    StatisticsOnly,
}

pub(crate) fn emit<W: Write>(
    out: &mut W,
    summary: &AdmissionReportSummary,
    scope: ReportScope,
    format: OutputFormat,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Json => {
            match scope {
                ReportScope::Full => serde_json::to_writer_pretty(&mut *out, summary)?,
                ReportScope::StatisticsOnly => {
                    serde_json::to_writer_pretty(&mut *out, &summary.statistics)?
                }
            }
            writeln!(out)?;
        }
        OutputFormat::Table => {
            if scope == ReportScope::Full {
                render_table(out, &summary.candidates)?;
            }
            render_statistics(out, &summary.statistics)?;
        }
    }
    Ok(())
}

pub(crate) fn render_table<W: Write>(
    out: &mut W,
    candidates: &[RankedCandidateView],
) -> io::Result<()> {
    if candidates.is_empty() {
        writeln!(out, "\nNo candidates to display.")?;
        return Ok(());
    }

    let banner = "=".repeat(TABLE_WIDTH + 2);
    let separator = format!("+{}+", "-".repeat(TABLE_WIDTH));

    writeln!(out, "\n{banner}")?;
    writeln!(out, "{:^width$}", TITLE, width = TABLE_WIDTH + 2)?;
    writeln!(out, "{banner}")?;
    writeln!(out, "{separator}")?;
    writeln!(
        out,
        "| {:<4} | {:<20} | {:<20} | {:<12} | {:<8} | {:<8} | {:<15} |",
        "POS", "GIVEN NAME", "FAMILY NAME", "ADMISSION", "MATH", "ENGLISH", "ETHNICITY"
    )?;
    writeln!(out, "{separator}")?;

    for (index, view) in candidates.iter().enumerate() {
        let position = if view.minority {
            format!("{}*", view.position)
        } else {
            view.position.to_string()
        };

        writeln!(
            out,
            "| {:<4} | {:<20} | {:<20} | {:<12} | {:<8} | {:<8} | {:<15} |",
            position,
            truncate(&view.given_name, NAME_WIDTH),
            truncate(&view.family_name, NAME_WIDTH),
            view.admission_score,
            view.math_score,
            view.english_score,
            truncate(&view.ethnicity_label, ETHNICITY_WIDTH),
        )?;

        let rendered = index + 1;
        if rendered % ROWS_PER_GROUP == 0 && rendered < candidates.len() {
            writeln!(out, "|{}|", "-".repeat(TABLE_WIDTH))?;
        }
    }

    let minority = candidates.iter().filter(|view| view.minority).count();
    let footer_width = TABLE_WIDTH - 2;

    writeln!(out, "{separator}")?;
    writeln!(
        out,
        "| {:<footer_width$} |",
        format!("Total admitted candidates: {}", candidates.len())
    )?;
    writeln!(
        out,
        "| {:<footer_width$} |",
        format!("Minority community candidates: {minority}")
    )?;
    writeln!(
        out,
        "| {:<footer_width$} |",
        "* = minority community candidate"
    )?;
    writeln!(out, "{separator}")?;
    Ok(())
}

pub(crate) fn render_statistics<W: Write>(
    out: &mut W,
    statistics: &StatisticsView,
) -> io::Result<()> {
    let rule = "=".repeat(STATISTICS_RULE_WIDTH);

    writeln!(out, "\nADMISSION STATISTICS")?;
    writeln!(out, "{rule}")?;
    writeln!(out, "Total candidates: {}", statistics.total)?;
    writeln!(
        out,
        "Minority community candidates: {} ({:.1}%)",
        statistics.minority_count, statistics.minority_percentage
    )?;
    writeln!(
        out,
        "Average admission score: {:.1}",
        statistics.average_score
    )?;
    writeln!(out, "Highest admission score: {}", statistics.max_score)?;
    writeln!(out, "Lowest admission score: {}", statistics.min_score)?;

    if statistics.top_candidates.is_empty() {
        writeln!(out, "\nTop candidates: none")?;
    } else {
        writeln!(out, "\nTOP {} CANDIDATES:", statistics.top_candidates.len())?;
        for view in &statistics.top_candidates {
            let indicator = if view.minority {
                " (minority community)"
            } else {
                ""
            };
            writeln!(
                out,
                "{}. {} {} - ICFES: {}{}",
                view.position, view.given_name, view.family_name, view.admission_score, indicator
            )?;
        }
    }

    writeln!(out, "\n{rule}")?;
    Ok(())
}

fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let kept: String = value
        .chars()
        .take(max_chars.saturating_sub(ELLIPSIS.len()))
        .collect();
    format!("{kept}{ELLIPSIS}")
}
