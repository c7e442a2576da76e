//! Progress reporting for experiment runs

use colored::Colorize;
use dialectic_application::ProgressNotifier;
use dialectic_domain::{DebateState, Phase};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports progress with an overall bar over queries and a bar for the
/// phase currently running
pub struct ProgressReporter {
    multi: MultiProgress,
    batch_bar: Mutex<Option<ProgressBar>>,
    phase_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            batch_bar: Mutex::new(None),
            phase_bar: Mutex::new(None),
        }
    }

    fn batch_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold} [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn phase_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("  {prefix:.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn state_label(state: Option<DebateState>) -> String {
        match state {
            Some(DebateState::Completed) => "completed".green().to_string(),
            Some(DebateState::Aborted) => "aborted".yellow().to_string(),
            None => "failed".red().to_string(),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize) {
        let pb = self.multi.add(ProgressBar::new(total_tasks as u64));
        pb.set_style(Self::phase_style());
        pb.set_prefix(phase.display_name());

        if let Ok(mut slot) = self.phase_bar.lock()
            && let Some(previous) = slot.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn on_task_complete(&self, _phase: &Phase, label: &str, success: bool) {
        if let Ok(slot) = self.phase_bar.lock()
            && let Some(pb) = slot.as_ref()
        {
            let status = if success {
                format!("{} {}", "v".green(), label)
            } else {
                format!("{} {}", "x".red(), label)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_phase_complete(&self, _phase: &Phase) {
        if let Ok(mut slot) = self.phase_bar.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_and_clear();
        }
    }

    fn on_batch_start(&self, total_queries: usize) {
        let pb = self.multi.add(ProgressBar::new(total_queries as u64));
        pb.set_style(Self::batch_style());
        pb.set_prefix("Debating");
        if let Ok(mut slot) = self.batch_bar.lock() {
            *slot = Some(pb);
        }
    }

    fn on_query_complete(&self, query_id: &str, state: Option<DebateState>) {
        if let Ok(slot) = self.batch_bar.lock()
            && let Some(pb) = slot.as_ref()
        {
            pb.set_message(format!("{} {}", query_id, Self::state_label(state)));
            pb.inc(1);
        }
    }

    fn on_batch_complete(&self) {
        if let Ok(mut slot) = self.batch_bar.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_with_message("done".green().to_string());
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize) {
        println!(
            "{} {} ({} tasks)",
            "->".cyan(),
            phase.display_name().bold(),
            total_tasks
        );
    }

    fn on_task_complete(&self, _phase: &Phase, label: &str, success: bool) {
        if success {
            println!("  {} {}", "v".green(), label);
        } else {
            println!("  {} {} (malformed)", "x".red(), label);
        }
    }

    fn on_phase_complete(&self, _phase: &Phase) {}

    fn on_query_complete(&self, query_id: &str, state: Option<DebateState>) {
        println!("{} {}\n", query_id.bold(), ProgressReporter::state_label(state));
    }
}
