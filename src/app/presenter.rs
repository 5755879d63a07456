//! Terminal presentation: banner, status markers and result headers.
//!
//! Color is a property of the `Presenter` value rather than global state, so the
//! same helpers produce plain text for pipes and tests.

use colored::control::ShouldColorize;
use colored::Colorize;

const BANNER: &str = r"
   _____ _    _ ____   _____ _____ _______
  / ____| |  | |  _ \ / ____|  __ \__   __|
 | (___ | |  | | |_) | |    | |__) | | |
  \___ \| |  | |  _ <| |    |  _  /  | |
  ____) | |__| | |_) | |____| | \ \  | |
 |_____/ \____/|____/ \_____|_|  \_\ |_|
---------------------------------------------";

/// Formats user-facing lines, optionally with ANSI colors.
#[derive(Debug, Clone, Copy)]
pub struct Presenter {
    color: bool,
}

impl Presenter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Colors only when `requested` and `colored`'s environment and terminal
    /// checks (`NO_COLOR`, `CLICOLOR`, `CLICOLOR_FORCE`, stdout is a tty) agree.
    pub fn detect(requested: bool) -> Self {
        Self::new(requested && ShouldColorize::from_env().should_colorize())
    }

    pub fn banner(&self) -> String {
        if self.color {
            BANNER.cyan().to_string()
        } else {
            BANNER.to_string()
        }
    }

    /// Header printed above one domain's results in print mode.
    pub fn domain_header(&self, domain: &str, count: usize) -> String {
        let line = format!("[{}] {} subdomain{}", domain, count, plural(count));
        if self.color {
            line.cyan().bold().to_string()
        } else {
            line
        }
    }

    pub fn success(&self, message: &str) -> String {
        self.marked("[✓]", message, Marker::Success)
    }

    pub fn failure(&self, message: &str) -> String {
        self.marked("[!]", message, Marker::Failure)
    }

    fn marked(&self, marker: &str, message: &str, kind: Marker) -> String {
        let line = format!("{} {}", marker, message);
        if !self.color {
            return line;
        }
        match kind {
            Marker::Success => line.green().to_string(),
            Marker::Failure => line.red().to_string(),
        }
    }
}

enum Marker {
    Success,
    Failure,
}

pub(crate) fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
