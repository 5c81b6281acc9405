//! Resolution reporting and formatting.

use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Table};
use serde::Serialize;
use wcs_protocol::{Coverage, CoverageResolver, WcsVersion};

/// Outcome of resolving one coverage.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionEntry {
    pub coverage_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage: Option<Coverage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResolutionEntry {
    pub fn is_usable(&self) -> bool {
        self.coverage.is_some()
    }
}

/// Resolution outcomes for a set of coverages of one service.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionReport {
    pub version: WcsVersion,
    pub entries: Vec<ResolutionEntry>,
}

impl ResolutionReport {
    /// Resolve each id in turn; failures are recorded, not propagated.
    pub fn build<'a, I>(resolver: &CoverageResolver<'_>, coverage_ids: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let entries = coverage_ids
            .into_iter()
            .map(|id| match resolver.resolve(id) {
                Ok(coverage) => ResolutionEntry {
                    coverage_id: id.to_string(),
                    coverage: Some(coverage),
                    error: None,
                },
                Err(e) => ResolutionEntry {
                    coverage_id: id.to_string(),
                    coverage: None,
                    error: Some(e.to_string()),
                },
            })
            .collect();

        Self {
            version: resolver.catalog().version(),
            entries,
        }
    }

    /// Report over every coverage the capabilities advertise.
    pub fn for_all(resolver: &CoverageResolver<'_>) -> Self {
        Self::build(resolver, resolver.catalog().coverage_ids())
    }

    pub fn usable_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_usable()).count()
    }

    /// Format the report as a console table.
    pub fn format_table(&self) -> String {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_header(vec![
                "Coverage",
                "Sector",
                "Samples/rad",
                "Format",
                "Endpoint",
            ]);

        for entry in &self.entries {
            match &entry.coverage {
                Some(coverage) => table.add_row(vec![
                    entry.coverage_id.clone(),
                    coverage.sector().to_string(),
                    format!("{:.1}", coverage.resolution()),
                    coverage.preferred_format().to_string(),
                    coverage.base_url().to_string(),
                ]),
                None => table.add_row(vec![
                    entry.coverage_id.clone(),
                    "-".to_string(),
                    "-".to_string(),
                    "-".to_string(),
                    entry.error.clone().unwrap_or_default(),
                ]),
            };
        }

        format!(
            "WCS {}: {}/{} coverages usable\n{}",
            self.version,
            self.usable_count(),
            self.entries.len(),
            table
        )
    }

    /// Format the report as JSON.
    pub fn format_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
