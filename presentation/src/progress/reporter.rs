//! Spinner shown while an agent is working

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TICK: Duration = Duration::from_millis(100);

/// Reports that a completion is in flight with an indicatif spinner
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    /// Start spinning with `agent`'s name in the prefix.
    pub fn start(agent: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::spinner_style());
        bar.set_prefix(agent.to_string());
        bar.set_message("thinking...");
        bar.enable_steady_tick(TICK);
        Self { bar }
    }

    /// A reporter that draws nothing (for `--quiet`).
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Start a visible spinner only when `show` is set.
    pub fn start_if(show: bool, agent: &str) -> Self {
        if show {
            Self::start(agent)
        } else {
            Self::hidden()
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Stop and erase the spinner line.
    pub fn finish(self) {
        self.bar.finish_and_clear();
    }

    /// Stop, leaving a failure marker behind.
    pub fn fail(self) {
        self.bar.finish_with_message(format!("{}", "failed".red()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_reporter_finishes() {
        let reporter = ProgressReporter::start_if(false, "echo");
        assert!(reporter.bar.is_hidden());
        reporter.finish();
    }
}
