//! Output rendering for text and JSON formats.

use accent_core::{AccentColor, CommandSpec, DetectionState, StrategyKind};
use clap::ValueEnum;
use serde::Serialize;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Bare `#rrggbb` (or a short human-readable line)
    #[default]
    Text,
    /// One JSON object per result
    Json,
}

/// Result of one `detect` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectionReport {
    pub accent_color: Option<AccentColor>,
    pub strategy: Option<&'static str>,
    pub state: &'static str,
}

impl DetectionReport {
    pub fn new(
        accent_color: Option<AccentColor>,
        strategy: Option<StrategyKind>,
        state: DetectionState,
    ) -> Self {
        Self {
            accent_color,
            strategy: strategy.map(StrategyKind::name),
            state: state_name(state),
        }
    }
}

/// Result of running one strategy directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeReport {
    pub strategy: &'static str,
    pub status: ProbeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<AccentColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProbeStatus {
    Found,
    NotApplicable,
    Failed,
}

/// One row of the `strategies` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrategyInfo {
    pub order: usize,
    pub name: &'static str,
    pub description: &'static str,
    pub command: String,
}

impl StrategyInfo {
    pub fn new(order: usize, kind: StrategyKind, command: &CommandSpec) -> Self {
        Self {
            order,
            name: kind.name(),
            description: kind.description(),
            command: command.to_string(),
        }
    }
}

const fn state_name(state: DetectionState) -> &'static str {
    match state {
        DetectionState::Unknown => "unknown",
        DetectionState::Resolved(_) => "resolved",
        DetectionState::Exhausted => "exhausted",
    }
}

/// Render a detection result. Text output is empty when nothing was found.
pub fn render_detection(
    report: &DetectionReport,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string(report),
        OutputFormat::Text => Ok(report
            .accent_color
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()),
    }
}

pub fn render_probe(report: &ProbeReport, format: OutputFormat) -> Result<String, serde_json::Error> {
    if format == OutputFormat::Json {
        return serde_json::to_string(report);
    }

    Ok(match (&report.accent_color, &report.detail) {
        (Some(color), _) => color.to_string(),
        (None, Some(detail)) => match report.status {
            ProbeStatus::Failed => format!("{}: failed ({detail})", report.strategy),
            _ => format!("{}: not applicable ({detail})", report.strategy),
        },
        (None, None) => format!("{}: not applicable", report.strategy),
    })
}

pub fn render_strategies(
    rows: &[StrategyInfo],
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    if format == OutputFormat::Json {
        return serde_json::to_string(rows);
    }

    let lines: Vec<String> = rows
        .iter()
        .map(|row| {
            format!(
                "{}. {:<12} {}\n   {}",
                row.order, row.name, row.description, row.command
            )
        })
        .collect();
    Ok(lines.join("\n"))
}
