//! Console output formatter for workflow results

use colored::Colorize;
use imaging_application::ServerInventory;
use imaging_domain::{Application, ImpactPayload, SummaryPayload};
use serde::Serialize;

/// Formats reports, payloads and server inventories for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Rendered application summary with a short header
    pub fn format_summary(payload: &SummaryPayload, report: &str) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Application Summary"));
        output.push('\n');
        output.push_str(&Self::field("Question:", &payload.question));
        output.push_str(&Self::field("Application:", &Self::application(&payload.selected_application)));
        output.push_str(&Self::coverage(&payload.populated_sections()));

        output.push_str(&format!("\n{}\n", report.trim_end()));
        output.push_str(&Self::footer());
        output
    }

    /// Rendered impact report with a short header
    pub fn format_impact(payload: &ImpactPayload, report: &str) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Impact Analysis"));
        output.push('\n');
        output.push_str(&Self::field("Question:", &payload.question));
        output.push_str(&Self::field("Application:", &Self::application(&payload.selected_application)));
        output.push_str(&Self::field("Object:", &payload.object_hint));
        output.push_str(&Self::coverage(&payload.populated_sections()));

        output.push_str(&format!("\n{}\n", report.trim_end()));
        output.push_str(&Self::footer());
        output
    }

    /// Any payload as pretty JSON
    pub fn format_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Advertised tools and capability resolution
    pub fn format_inventory(inventory: &ServerInventory) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Imaging Tools"));
        output.push('\n');
        output.push_str(&Self::field("Endpoint:", &inventory.endpoint));
        output.push_str(&Self::field("Advertised:", &inventory.tools.len().to_string()));
        let missing = inventory.missing_mandatory();
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(|c| c.base_name()).collect();
            output.push_str(&Self::field("Missing required:", &names.join(", ").red().to_string()));
        }

        output.push_str(&Self::section_header("Capabilities"));
        for binding in &inventory.bindings {
            let line = match binding.tool() {
                Some(tool) => format!("  {} {:<32} -> {}", "v".green(), binding.capability.base_name(), tool),
                None if binding.capability.is_mandatory() => {
                    format!("  {} {:<32} {}", "x".red(), binding.capability.base_name(), "(missing, required)".red())
                }
                None => format!("  {} {:<32} {}", "-".dimmed(), binding.capability.base_name(), "(not offered)".dimmed()),
            };
            output.push_str(&line);
            output.push('\n');
        }

        output.push_str(&Self::section_header("Tools"));
        for tool in &inventory.tools {
            output.push_str(&format!("  * {}\n", tool));
        }

        output.push_str(&Self::footer());
        output
    }

    fn application(app: &Application) -> String {
        if app.id == app.name {
            app.name.clone()
        } else {
            format!("{} ({})", app.name, app.id)
        }
    }

    fn coverage(sections: &[&str]) -> String {
        let listed = if sections.is_empty() {
            "none".to_string()
        } else {
            sections.join(", ")
        };
        format!("{} {}\n", "Data:".dimmed(), listed.dimmed())
    }

    fn field(label: &str, value: &str) -> String {
        format!("{} {}\n", label.cyan().bold(), value)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
