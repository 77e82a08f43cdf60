use std::io::IsTerminal;

/// ANSI color helpers — only emit escape codes when stdout is a terminal.
pub struct Style {
    color: bool,
}

impl Style {
    pub fn new() -> Self {
        Self {
            color: std::io::stdout().is_terminal(),
        }
    }

    fn style(&self, code: &str, s: &str) -> String {
        if self.color {
            format!("\x1b[{code}m{s}\x1b[0m")
        } else {
            s.to_string()
        }
    }

    pub fn bold(&self, s: &str) -> String {
        self.style("1", s)
    }

    pub fn dim(&self, s: &str) -> String {
        self.style("2", s)
    }
}
