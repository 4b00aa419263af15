use std::io::IsTerminal;

use crossterm::style::{Color, Stylize};

use crate::measure::LatencySummary;
use crate::stats;

const INFO_LABEL_WIDTH: usize = 15;
const SPEED_LABEL_WIDTH: usize = 9;
const HEADLINE_LABEL_WIDTH: usize = 16;

/// Human-readable progress printed while a benchmark runs.
///
/// JSON mode silences everything; minimized output keeps results but drops
/// the `[TIME]` phase lines.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    results: bool,
    timings: bool,
    color: bool,
}

impl Console {
    #[must_use]
    pub fn new(json: bool, minimize_output: bool, no_color: bool) -> Self {
        Self {
            results: !json,
            timings: !json && !minimize_output,
            color: !no_color && std::io::stdout().is_terminal(),
        }
    }

    /// Console that prints nothing.
    #[must_use]
    pub const fn silent() -> Self {
        Self {
            results: false,
            timings: false,
            color: false,
        }
    }

    pub fn info(&self, label: &str, data: &str) {
        if self.results {
            let value = self.paint(data, Color::Blue);
            println!("{}", self.bold(&info_line(label, &value)));
        }
    }

    pub fn latency(&self, summary: &LatencySummary) {
        if !self.results {
            return;
        }
        let latency = self.paint(&format!("{} ms", fmt_number(summary.average)), Color::Magenta);
        let jitter = self.paint(&format!("{} ms", fmt_number(summary.jitter)), Color::Magenta);
        println!("{}", self.bold(&format!("     Latency: {}", latency)));
        println!("{}", self.bold(&format!("     Jitter:  {}", jitter)));
    }

    /// Median speed of one stage; an empty stage prints `-`.
    pub fn stage(&self, label: &str, samples: &[f64]) {
        if self.results {
            let value = self.paint(&stage_value(samples), Color::Yellow);
            let line = format!("{:>width$} speed: {}", label, value, width = SPEED_LABEL_WIDTH);
            println!("{}", self.bold(&line));
        }
    }

    /// Headline speed for a whole ladder (interpolated 90th percentile).
    pub fn headline(&self, label: &str, samples: &[f64]) {
        if self.results {
            let speed = format!("{} Mbps", fmt_number(stats::quartile(samples, stats::P90)));
            let value = self.paint(&speed, Color::Green);
            let line = format!("{:>width$}: {}", label, value, width = HEADLINE_LABEL_WIDTH);
            println!("{}", self.bold(&line));
        }
    }

    pub fn timing(&self, phase: &str, elapsed_ms: f64) {
        if self.timings {
            println!("[TIME] {}: {} ms", phase, fmt_number(elapsed_ms));
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).to_string()
        } else {
            text.to_owned()
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_owned()
        }
    }
}

pub(super) fn info_line(label: &str, value: &str) -> String {
    format!("{:>width$}: {}", label, value, width = INFO_LABEL_WIDTH)
}

pub(super) fn stage_value(samples: &[f64]) -> String {
    if samples.is_empty() {
        return "-".to_owned();
    }
    format!("{} Mbps", fmt_number(stats::median(samples)))
}

fn fmt_number(value: f64) -> String {
    format!("{:.2}", value)
}
