//! Terminal color support for the results table

pub struct Colors;

impl Colors {
    pub const RESET: &'static str = "\x1b[0m";
    pub const RED: &'static str = "\x1b[31m";
    pub const GREEN: &'static str = "\x1b[32m";
}

/// Escape sequences used to color table rows.
///
/// Chosen once at start-up; a plain palette turns every code into an empty
/// string so the layout is unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub success: &'static str,
    pub failure: &'static str,
    pub reset: &'static str,
}

impl Palette {
    pub const fn ansi() -> Self {
        Self {
            success: Colors::GREEN,
            failure: Colors::RED,
            reset: Colors::RESET,
        }
    }

    pub const fn plain() -> Self {
        Self {
            success: "",
            failure: "",
            reset: "",
        }
    }

    /// Pick the palette for the current process.
    pub fn detect() -> Self {
        if supports_formatting() {
            Self::ansi()
        } else {
            Self::plain()
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Terminal capability detection
pub fn supports_formatting() -> bool {
    use std::env;
    use std::io::IsTerminal;

    // Check if colors are explicitly disabled
    if env::var("NO_COLOR").is_ok() || env::var("FORCE_COLOR").as_deref() == Ok("0") {
        return false;
    }

    // Force enable if explicitly requested
    if env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    // Check if output is being redirected
    if !std::io::stdout().is_terminal() {
        return false;
    }

    term_supports_color(env::var("TERM").ok().as_deref())
}

/// Whether a `TERM` value names a terminal that understands color codes.
fn term_supports_color(term: Option<&str>) -> bool {
    matches!(term, Some(term) if !term.is_empty() && term != "dumb")
}
