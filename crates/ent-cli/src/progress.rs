use std::io::IsTerminal;
use std::sync::Mutex;

use ent_engine::ProgressSink;
use indicatif::{ProgressBar, ProgressStyle};

/// Indicatif-backed progress rendering for engine batches.
///
/// Disabled when stderr is not a terminal, in quiet mode, or with
/// `--no-progress`; every event is then a no-op.
pub struct Progress {
    enabled: bool,
    bar: Mutex<Option<ProgressBar>>,
}

fn terminal_columns() -> Option<usize> {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
}

fn bar_template() -> &'static str {
    match terminal_columns() {
        Some(cols) if cols >= 110 => "{bar:40.cyan/blue} {pos}/{len} {msg}",
        Some(cols) if cols >= 80 => "{wide_bar:.cyan/blue} {pos}/{len} {msg}",
        _ => "{wide_bar:.cyan/blue} {percent}% {msg}",
    }
}

impl Progress {
    #[must_use]
    pub fn new(quiet: bool, no_progress: bool) -> Self {
        Self {
            enabled: std::io::stderr().is_terminal() && !quiet && !no_progress,
            bar: Mutex::new(None),
        }
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.bar.lock() {
            if let Some(bar) = guard.as_ref() {
                f(bar);
            }
        }
    }
}

impl ProgressSink for Progress {
    fn start(&self, total: u64, message: &str) {
        if !self.enabled {
            return;
        }
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::with_template(bar_template())
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar.set_message(message.to_string());
        if let Ok(mut guard) = self.bar.lock() {
            *guard = Some(bar);
        }
    }

    fn advance(&self, message: &str) {
        self.with_bar(|bar| {
            bar.inc(1);
            bar.set_message(message.to_string());
        });
    }

    fn finish_ok(&self, message: &str) {
        self.with_bar(|bar| bar.finish_with_message(message.to_string()));
    }

    fn finish_err(&self, message: &str) {
        self.with_bar(|bar| bar.abandon_with_message(message.to_string()));
    }
}
