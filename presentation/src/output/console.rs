//! Console output for experiment runs

use colored::Colorize;
use dialectic_application::ExperimentSummary;
use dialectic_domain::DatasetName;
use std::path::Path;

/// Formats run summaries for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the end-of-run summary
    pub fn format_summary(summary: &ExperimentSummary, dataset: DatasetName, output: &Path) -> String {
        let mut out = String::new();

        out.push_str(&Self::header(&format!("Experiment Results: {}", dataset)));
        out.push('\n');

        out.push_str(&format!(
            "{} {} of {}\n",
            "Queries:".cyan().bold(),
            summary.written(),
            summary.total
        ));
        out.push_str(&format!(
            "  {} {}\n",
            "completed".green(),
            summary.completed
        ));
        out.push_str(&format!("  {} {}\n", "aborted".yellow(), summary.aborted));
        out.push_str(&format!("  {} {}\n", "failed".red(), summary.failed));

        if summary.evaluated > 0 {
            out.push_str(&format!(
                "\n{} {}/{} ({:.1}%)\n",
                "Gold answer hits:".cyan().bold(),
                summary.gold_hits,
                summary.evaluated,
                Self::percent(summary.gold_hits, summary.evaluated)
            ));
            out.push_str(&format!(
                "{} {}/{}\n",
                "Wrong answer mentions:".cyan().bold(),
                summary.wrong_mentions,
                summary.evaluated
            ));
        }

        if summary.cancelled {
            out.push_str(&format!("\n{}\n", "Run cancelled before the end of the dataset.".yellow()));
        }

        out.push_str(&format!("\n{} {}\n", "Results:".cyan().bold(), output.display()));
        out.push_str(&Self::footer());
        out
    }

    fn percent(part: usize, whole: usize) -> f64 {
        if whole == 0 {
            0.0
        } else {
            part as f64 * 100.0 / whole as f64
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }
}
