//! Terminal Logging and Output
//!
//! Provides the diagnostic and console plumbing for the CLI:
//! - tracing subscriber with a pretty stderr layer and a JSON file layer
//! - daily-rolling log files under the platform data directory
//! - miette error reporting tuned to detected terminal capabilities
//! - styled output helpers (panels, status lines) with plain-ASCII
//!   fallbacks for dumb terminals
//!
//! Generated content goes to stdout; logs and status chatter stay on
//! stderr so piped output remains clean.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::OnceLock;

use console::{style, Term};
use supports_color::Stream;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static TERMINAL_CAPS: OnceLock<TerminalCapabilities> = OnceLock::new();

fn get_terminal_caps() -> &'static TerminalCapabilities {
    TERMINAL_CAPS.get_or_init(TerminalCapabilities::detect)
}

// ============================================================================
// Terminal Capability Detection
// ============================================================================

/// Terminal color support levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorLevel {
    /// 24-bit TrueColor (16.7M colors)
    TrueColor,
    /// 256-color palette
    Ansi256,
    /// 16 ANSI colors
    Ansi16,
    /// No color support
    NoColor,
}

/// Detected terminal capabilities
#[derive(Debug, Clone)]
pub struct TerminalCapabilities {
    pub color_level: ColorLevel,
    pub supports_unicode: bool,
    pub is_interactive: bool,
    pub width: u16,
}

impl TerminalCapabilities {
    /// Detect terminal capabilities from environment
    pub fn detect() -> Self {
        use is_terminal::IsTerminal;

        let color_level = match supports_color::on(Stream::Stdout) {
            Some(support) if support.has_16m => ColorLevel::TrueColor,
            Some(support) if support.has_256 => ColorLevel::Ansi256,
            Some(support) if support.has_basic => ColorLevel::Ansi16,
            _ => ColorLevel::NoColor,
        };

        let is_interactive = io::stdout().is_terminal();
        let width = Term::stdout().size().1;

        // Unicode support heuristic
        let supports_unicode = std::env::var("TERM")
            .map(|t| !t.contains("dumb"))
            .unwrap_or(true)
            && std::env::var("LANG")
                .map(|l| l.contains("UTF-8") || l.contains("utf8"))
                .unwrap_or(true);

        Self {
            color_level,
            supports_unicode,
            is_interactive,
            width,
        }
    }

    /// Check if colors should be used
    pub fn should_colorize(&self) -> bool {
        self.is_interactive && self.color_level != ColorLevel::NoColor
    }
}

// ============================================================================
// Logging Initialization
// ============================================================================

/// Initialize the logging system.
///
/// This sets up:
/// 1. A stderr logger (pretty formatted with colors).
/// 2. A file logger (JSON formatted) in the app data directory.
/// 3. Redirects standard `log` crate events to `tracing`.
/// 4. Configures miette for readable error reports.
///
/// Returns a `WorkerGuard` which must be kept alive for the duration of the
/// application to ensure buffered logs are flushed on shutdown.
pub fn init() -> WorkerGuard {
    // Logs live in the app data directory, not next to the word lists
    let log_dir = dirs::data_dir()
        .map(|d| d.join("holocron").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"));

    if !log_dir.exists() {
        if let Err(e) = fs::create_dir_all(&log_dir) {
            eprintln!("Failed to create logs directory: {}", e);
        }
    }

    let file_appender = tracing_appender::rolling::daily(&log_dir, "holocron.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // File Layer: JSON format for easy parsing/ingestion
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_filter(env_filter.clone());

    // Stderr Layer: pretty human-readable format, keeping stdout free for
    // generated names and sheets
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .pretty()
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .init();

    // Redirect standard `log` macros to `tracing`
    if let Err(e) = tracing_log::LogTracer::init() {
        eprintln!("Failed to initialize LogTracer: {}", e);
    }

    init_miette();

    log::debug!(
        "Logging initialized. Writing to: {:?} (daily rolling)",
        log_dir.join("holocron.log")
    );

    guard
}

/// Initialize miette for readable error reporting
fn init_miette() {
    let caps = get_terminal_caps();

    miette::set_hook(Box::new(move |_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(caps.color_level == ColorLevel::TrueColor)
                .unicode(caps.supports_unicode)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .color(caps.should_colorize())
                .build(),
        )
    }))
    .ok(); // Ignore if already set
}

// ============================================================================
// Rich Text Styling
// ============================================================================

/// Builder for styled text segments
#[derive(Default)]
pub struct RichText {
    segments: Vec<String>,
}

impl RichText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add plain text
    pub fn text(mut self, text: &str) -> Self {
        self.segments.push(text.to_string());
        self
    }

    /// Add bold text
    pub fn bold(mut self, text: &str) -> Self {
        self.segments.push(format!("{}", style(text).bold()));
        self
    }

    /// Add success styled text
    pub fn success(mut self, text: &str) -> Self {
        self.segments
            .push(format!("{}", style(text).green().bold()));
        self
    }

    /// Add warning styled text
    pub fn warning(mut self, text: &str) -> Self {
        self.segments
            .push(format!("{}", style(text).yellow().bold()));
        self
    }

    /// Add muted/dim text
    pub fn muted(mut self, text: &str) -> Self {
        self.segments.push(format!("{}", style(text).dim()));
        self
    }

    /// Build the final string
    pub fn build(self) -> String {
        self.segments.join("")
    }
}

impl std::fmt::Display for RichText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for seg in &self.segments {
            write!(f, "{}", seg)?;
        }
        Ok(())
    }
}

// ============================================================================
// Console Output Utilities
// ============================================================================

fn status_glyph(unicode: &'static str, ascii: &'static str) -> &'static str {
    if get_terminal_caps().supports_unicode {
        unicode
    } else {
        ascii
    }
}

/// Print a styled panel with title and content
pub fn print_panel(title: &str, content: &str) {
    let caps = get_terminal_caps();
    let width = (caps.width as usize).clamp(20, 80);

    let border_char = if caps.supports_unicode { "─" } else { "-" };
    let corner_tl = if caps.supports_unicode { "╭" } else { "+" };
    let corner_tr = if caps.supports_unicode { "╮" } else { "+" };
    let corner_bl = if caps.supports_unicode { "╰" } else { "+" };
    let corner_br = if caps.supports_unicode { "╯" } else { "+" };
    let side = if caps.supports_unicode { "│" } else { "|" };

    let title_display = format!(" {} ", title);
    // Use saturating arithmetic to prevent underflow
    let border_len = width
        .saturating_sub(title_display.len())
        .saturating_sub(2)
        .max(1);
    let top = format!(
        "{}{}{}{}",
        style(corner_tl).cyan(),
        style(&title_display).cyan().bold(),
        style(border_char.repeat(border_len)).cyan(),
        style(corner_tr).cyan()
    );

    let bottom_border_len = width.saturating_sub(2).max(1);
    let bottom = format!(
        "{}{}{}",
        style(corner_bl).cyan(),
        style(border_char.repeat(bottom_border_len)).cyan(),
        style(corner_br).cyan()
    );

    println!("{}", top);
    let content_width = width.saturating_sub(4).max(1);
    for line in content.lines() {
        let padded = format!("{:width$}", line, width = content_width);
        println!("{} {} {}", style(side).cyan(), padded, style(side).cyan());
    }
    println!("{}", bottom);
}

/// Print a success message
pub fn print_success(message: &str) {
    let prefix = status_glyph("✔", "[ok]");
    println!("{} {}", style(prefix).green(), style(message).green());
}

/// Print an error message
pub fn print_error(message: &str) {
    let prefix = status_glyph("✘", "[x]");
    eprintln!("{} {}", style(prefix).red(), style(message).red().bold());
}

/// Print a warning message
pub fn print_warning(message: &str) {
    let prefix = status_glyph("!", "[!]");
    eprintln!(
        "{} {}",
        style(prefix).yellow(),
        style(message).yellow().bold()
    );
}

/// Print an info message
pub fn print_info(message: &str) {
    let prefix = status_glyph("·", "(i)");
    println!("{} {}", style(prefix).blue(), style(message).blue());
}

// ============================================================================
// Tests
// ============================================================================
