use crate::application::dto::CheckResponse;
use crate::lifecycle::domain::{Resolution, Status};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use owo_colors::OwoColorize;
use std::fmt::Write;

const HEADERS: [&str; 6] = ["STATUS", "DEPENDENCY", "VERSION", "EOL", "DAYS", "RECOMMENDED"];

/// TextFormatter adapter for the human-readable report
///
/// Renders one aligned row per dependency, in input order, followed by the
/// summary counts. Status labels are colored only when `colored` is set,
/// so redirected output stays plain.
pub struct TextFormatter {
    colored: bool,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self { colored: false }
    }

    pub fn with_color(colored: bool) -> Self {
        Self { colored }
    }

    fn paint_status(&self, status: Status, padded: &str) -> String {
        if !self.colored {
            return padded.to_string();
        }
        match status {
            Status::Critical => padded.red().bold().to_string(),
            Status::Warning => padded.yellow().to_string(),
            Status::Ok => padded.green().to_string(),
            Status::Unknown => padded.dimmed().to_string(),
            Status::Error => padded.magenta().to_string(),
        }
    }

    fn row(resolution: &Resolution) -> [String; 6] {
        let dependency = resolution.dependency();
        let recommended = match (resolution.error_message(), resolution.recommended_version()) {
            (Some(error), _) => error.to_string(),
            (None, Some(version)) if resolution.has_breaking_change() => {
                format!("{} (breaking)", version)
            }
            (None, Some(version)) => version.to_string(),
            (None, None) => "-".to_string(),
        };

        [
            resolution.status().to_string(),
            dependency.name().to_string(),
            dependency.version().to_string(),
            resolution
                .eol_date()
                .map(|date| date.to_string())
                .unwrap_or_else(|| "-".to_string()),
            resolution
                .days_remaining()
                .map(|days| days.to_string())
                .unwrap_or_else(|| "-".to_string()),
            recommended,
        ]
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, response: &CheckResponse) -> Result<String> {
        let metadata = &response.metadata;
        let summary = &response.summary;
        let mut out = String::new();

        writeln!(
            out,
            "EOL check: {} ({})",
            metadata.project_name,
            metadata.project_path.display()
        )?;
        writeln!(
            out,
            "Scanned {} in {:.2}s, warning threshold {} days",
            metadata.scanned_at.format("%Y-%m-%d %H:%M:%S UTC"),
            metadata.execution_time_seconds,
            metadata.threshold_days
        )?;
        if metadata.ignored > 0 {
            writeln!(out, "Ignored {} dependencies", metadata.ignored)?;
        }
        writeln!(out)?;

        if response.resolutions.is_empty() {
            writeln!(out, "No dependencies to check.")?;
        } else {
            let rows: Vec<[String; 6]> = response.resolutions.iter().map(Self::row).collect();
            let mut widths = HEADERS.map(str::len);
            for row in &rows {
                for (width, cell) in widths.iter_mut().zip(row) {
                    *width = (*width).max(cell.chars().count());
                }
            }

            let header: Vec<String> = HEADERS
                .iter()
                .zip(widths)
                .map(|(h, w)| format!("{:<w$}", h, w = w))
                .collect();
            writeln!(out, "{}", header.join("  ").trim_end())?;

            for (resolution, row) in response.resolutions.iter().zip(&rows) {
                let status = self.paint_status(
                    resolution.status(),
                    &format!("{:<w$}", row[0], w = widths[0]),
                );
                let rest: Vec<String> = row[1..]
                    .iter()
                    .zip(&widths[1..])
                    .map(|(cell, w)| format!("{:<w$}", cell, w = *w))
                    .collect();
                writeln!(out, "{}  {}", status, rest.join("  ").trim_end())?;
            }
        }

        writeln!(out)?;
        writeln!(
            out,
            "Summary: {} critical, {} warning, {} ok, {} unknown, {} error ({} total)",
            summary.critical,
            summary.warning,
            summary.ok,
            summary.unknown,
            summary.error,
            summary.total()
        )?;

        Ok(out)
    }
}
