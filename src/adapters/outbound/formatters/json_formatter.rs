use crate::application::dto::{CheckResponse, RunMetadata};
use crate::lifecycle::domain::{Resolution, Summary};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Report<'a> {
    tool: Tool,
    metadata: &'a RunMetadata,
    summary: SummaryView<'a>,
    dependencies: &'a [Resolution],
}

#[derive(Debug, Serialize)]
struct Tool {
    name: &'static str,
    version: &'static str,
}

#[derive(Debug, Serialize)]
struct SummaryView<'a> {
    #[serde(flatten)]
    counts: &'a Summary,
    total: usize,
}

/// JsonFormatter adapter for the machine-readable report
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, response: &CheckResponse) -> Result<String> {
        let report = Report {
            tool: Tool {
                name: env!("CARGO_PKG_NAME"),
                version: env!("CARGO_PKG_VERSION"),
            },
            metadata: &response.metadata,
            summary: SummaryView {
                counts: &response.summary,
                total: response.summary.total(),
            },
            dependencies: &response.resolutions,
        };
        let mut json = serde_json::to_string_pretty(&report)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::domain::{DependencyRecord, Ecosystem, Status};
    use chrono::{NaiveDate, TimeZone, Utc};
    use serde_json::Value;
    use std::path::PathBuf;
    use uuid::Uuid;

    #[test]
    fn test_json_report_shape() {
        let resolutions = vec![
            Resolution::dated(
                DependencyRecord::new("django", "3.2.1", Ecosystem::Python),
                Status::Critical,
                NaiveDate::from_ymd_opt(2022, 4, 1).unwrap(),
                -275,
            )
            .with_recommendation("4.2.11".to_string(), true),
            Resolution::unknown(
                DependencyRecord::new("left-pad", "1.3.0", Ecosystem::Nodejs).with_scope(false, true),
            ),
        ];
        let summary = Summary::from_resolutions(&resolutions);
        let response = CheckResponse::new(
            resolutions,
            summary,
            RunMetadata {
                run_id: Uuid::nil(),
                project_path: PathBuf::from("/work/shop"),
                project_name: "shop".to_string(),
                scanned_at: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
                execution_time_seconds: 1.25,
                threshold_days: 90,
                ignored: 2,
            },
        );

        let json = JsonFormatter::new().format(&response).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["tool"]["name"], "eol-check");
        assert_eq!(value["metadata"]["project_name"], "shop");
        assert_eq!(value["metadata"]["threshold_days"], 90);
        assert_eq!(value["metadata"]["ignored"], 2);
        assert_eq!(value["summary"]["critical"], 1);
        assert_eq!(value["summary"]["unknown"], 1);
        assert_eq!(value["summary"]["error"], 0);
        assert_eq!(value["summary"]["total"], 2);

        let django = &value["dependencies"][0];
        assert_eq!(django["name"], "django");
        assert_eq!(django["ecosystem"], "python");
        assert_eq!(django["status"], "CRITICAL");
        assert_eq!(django["eol_date"], "2022-04-01");
        assert_eq!(django["days_remaining"], -275);
        assert_eq!(django["recommended_version"], "4.2.11");
        assert_eq!(django["has_breaking_change"], true);
        assert!(django["error"].is_null());

        let left_pad = &value["dependencies"][1];
        assert_eq!(left_pad["status"], "UNKNOWN");
        assert_eq!(left_pad["direct"], false);
        assert_eq!(left_pad["dev"], true);
        assert!(left_pad["eol_date"].is_null());
    }
}
