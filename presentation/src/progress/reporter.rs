//! Progress reporting for question supply

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use quizforge_application::ports::progress::SupplyProgressNotifier;
use quizforge_domain::{MaturityTier, QuestionKey};
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with a spinner on stderr
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Clear a spinner left behind by a failed run
    pub fn finish(&self) {
        if let Ok(mut guard) = self.spinner.lock()
            && let Some(pb) = guard.take()
        {
            pb.finish_and_clear();
        }
    }

    fn with_spinner(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.spinner.lock()
            && let Some(pb) = guard.as_ref()
        {
            f(pb);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SupplyProgressNotifier for ProgressReporter {
    fn on_store_lookup(&self, key: &QuestionKey, store_count: usize, tier: MaturityTier) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(key.to_string());
        pb.set_message(format!("{} stored ({})", store_count, tier));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut guard) = self.spinner.lock() {
            *guard = Some(pb);
        }
    }

    fn on_generation_start(&self, _key: &QuestionKey, count: usize) {
        self.with_spinner(|pb| pb.set_message(format!("generating {} questions...", count)));
    }

    fn on_generation_complete(&self, _key: &QuestionKey, produced: usize, success: bool) {
        self.with_spinner(|pb| {
            if success {
                pb.set_message(format!("{} generated {}", "v".green(), produced));
            } else {
                pb.set_message(format!("{} generation failed", "x".red()));
            }
        });
    }

    fn on_supply_complete(&self, _key: &QuestionKey, returned: usize) {
        if let Ok(mut guard) = self.spinner.lock()
            && let Some(pb) = guard.take()
        {
            pb.finish_and_clear();
            eprintln!("{} {} questions ready", "v".green(), returned);
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl SupplyProgressNotifier for SimpleProgress {
    fn on_store_lookup(&self, key: &QuestionKey, store_count: usize, tier: MaturityTier) {
        eprintln!(
            "{} {} ({} stored, {})",
            "->".cyan(),
            key.to_string().bold(),
            store_count,
            tier
        );
    }

    fn on_generation_start(&self, _key: &QuestionKey, count: usize) {
        eprintln!("  generating {} questions", count);
    }

    fn on_generation_complete(&self, _key: &QuestionKey, produced: usize, success: bool) {
        if success {
            eprintln!("  {} {} generated", "v".green(), produced);
        } else {
            eprintln!("  {} generation failed", "x".red());
        }
    }

    fn on_supply_complete(&self, _key: &QuestionKey, returned: usize) {
        eprintln!("  {} questions ready", returned);
    }
}
