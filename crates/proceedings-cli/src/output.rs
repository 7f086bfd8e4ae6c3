//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use proceedings_domain::ApplicationCategory;
use proceedings_engine::Decision;
use proceedings_refdata::ReferenceData;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// One line of batch output: a decision, or why the application was skipped.
#[derive(Debug, Clone)]
pub enum BatchEntry {
    /// The application was decided
    Decided(Decision),
    /// The application payload could not be converted
    Rejected {
        /// Position in the input array
        index: usize,
        /// What was wrong with it
        message: String,
    },
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a single decision; `None` means no application was supplied.
    pub fn format_decision(&self, decision: Option<&Decision>) -> Result<String> {
        let decision = match decision {
            Some(decision) => decision,
            None => {
                return Ok(match self.format {
                    OutputFormat::Json => "null".to_string(),
                    OutputFormat::Quiet => String::new(),
                    OutputFormat::Table => self.colorize("No application supplied.", "yellow"),
                })
            }
        };

        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&decision_json(decision))?),
            OutputFormat::Table => Ok(self.decisions_table(std::slice::from_ref(decision))),
            OutputFormat::Quiet => Ok(quiet_line(decision)),
        }
    }

    /// Format the results of a batch.
    pub fn format_batch(&self, entries: &[BatchEntry]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let values: Vec<serde_json::Value> = entries
                    .iter()
                    .map(|entry| match entry {
                        BatchEntry::Decided(decision) => decision_json(decision),
                        BatchEntry::Rejected { index, message } => serde_json::json!({
                            "index": index,
                            "error": message,
                        }),
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&values)?)
            }
            OutputFormat::Quiet => {
                let lines: Vec<String> = entries
                    .iter()
                    .map(|entry| match entry {
                        BatchEntry::Decided(decision) => quiet_line(decision),
                        BatchEntry::Rejected { index, .. } => format!("error\t#{}", index),
                    })
                    .collect();
                Ok(lines.join("\n"))
            }
            OutputFormat::Table => {
                if entries.is_empty() {
                    return Ok(self.colorize("No applications found.", "yellow"));
                }

                let decisions: Vec<Decision> = entries
                    .iter()
                    .filter_map(|entry| match entry {
                        BatchEntry::Decided(decision) => Some(decision.clone()),
                        BatchEntry::Rejected { .. } => None,
                    })
                    .collect();

                let mut lines = Vec::new();
                if !decisions.is_empty() {
                    lines.push(self.decisions_table(&decisions));
                }
                for entry in entries {
                    if let BatchEntry::Rejected { index, message } = entry {
                        lines.push(self.error(&format!("Application #{} skipped: {}", index, message)));
                    }
                }
                Ok(lines.join("\n"))
            }
        }
    }

    /// Format a reference data overview.
    pub fn format_reference_data(&self, data: &ReferenceData) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let rules: serde_json::Map<String, serde_json::Value> = ApplicationCategory::MAPPED
                    .iter()
                    .map(|c| (c.as_str().to_string(), data.rule_count_for(*c).into()))
                    .collect();
                Ok(serde_json::to_string_pretty(&serde_json::json!({
                    "resultTypes": data.result_type_count(),
                    "applicationTypes": data.application_type_count(),
                    "rules": rules,
                }))?)
            }
            OutputFormat::Quiet => Ok(format!(
                "{}\t{}\t{}",
                data.result_type_count(),
                data.application_type_count(),
                data.rule_count()
            )),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Category", "Rules"]);
                for category in ApplicationCategory::MAPPED {
                    builder.push_record([
                        category.as_str().to_string(),
                        data.rule_count_for(category).to_string(),
                    ]);
                }
                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));

                Ok(format!(
                    "{}\n{}",
                    self.success(&format!(
                        "Reference data valid: {} result types, {} application types, {} rules",
                        data.result_type_count(),
                        data.application_type_count(),
                        data.rule_count()
                    )),
                    table
                ))
            }
        }
    }

    fn decisions_table(&self, decisions: &[Decision]) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Application", "Category", "Concluded", "Reason Code", "Basis"]);

        for decision in decisions {
            let concluded = if decision.concluded {
                self.colorize("yes", "green")
            } else {
                self.colorize("no", "red")
            };
            builder.push_record([
                decision.application_id.to_string(),
                decision.category.to_string(),
                concluded,
                decision.reason_code.clone().unwrap_or_else(|| "-".to_string()),
                decision.basis.to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn decision_json(decision: &Decision) -> serde_json::Value {
    serde_json::json!({
        "applicationId": decision.application_id.to_string(),
        "category": decision.category.as_str(),
        "concluded": decision.concluded,
        "reasonCode": decision.reason_code,
        "basis": decision.basis.as_str(),
    })
}

fn quiet_line(decision: &Decision) -> String {
    format!(
        "{}\t{}",
        decision.concluded,
        decision.reason_code.as_deref().unwrap_or("")
    )
}
