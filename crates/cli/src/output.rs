//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use owo_colors::OwoColorize;
use serde::Serialize;

/// Output format selected with `--format`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human readable, colored
    #[default]
    Text,
    /// Pretty-printed JSON on stdout
    Json,
}

impl OutputFormat {
    /// Whether JSON output was requested
    #[must_use]
    pub fn is_json(self) -> bool {
        self == Self::Json
    }
}

/// Print `value` as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.chars().count()));
    }

    /// Print an aligned `label: value` line
    pub fn field(label: &str, value: impl std::fmt::Display) {
        println!("  {:<18} {}", format!("{label}:").dimmed(), value);
    }
}

/// Replace `<mark>…</mark>` spans with bold terminal text
pub fn render_marks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find("<mark>") {
        out.push_str(&rest[..start]);
        let after = &rest[start + "<mark>".len()..];
        match after.find("</mark>") {
            Some(end) => {
                out.push_str(&(&after[..end]).bold().yellow().to_string());
                rest = &after[end + "</mark>".len()..];
            }
            None => {
                out.push_str(after);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Format a duration for display
pub fn format_duration(duration: std::time::Duration) -> String {
    let secs = duration.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.1}s")
    } else {
        let mins = (secs / 60.0).floor();
        let remaining_secs = secs % 60.0;
        format!("{mins}m {remaining_secs:.0}s")
    }
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Render an optional rating as stars out of five
pub fn format_rating(rating: Option<u8>) -> String {
    match rating {
        Some(r) => {
            let filled = usize::from(r.min(5));
            format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
        }
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_format_duration_ms() {
        assert_eq!(format_duration(Duration::from_millis(500)), "500ms");
    }

    #[test]
    fn test_format_duration_secs() {
        assert_eq!(format_duration(Duration::from_secs_f32(5.5)), "5.5s");
    }

    #[test]
    fn test_format_duration_mins() {
        assert_eq!(format_duration(Duration::from_secs(125)), "2m 5s");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(1, "repas", "repas"), "1 repas");
        assert_eq!(format_count(3, "plan", "plans"), "3 plans");
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(Some(3)), "★★★☆☆");
        assert_eq!(format_rating(Some(9)), "★★★★★");
        assert_eq!(format_rating(None), "-");
    }

    #[test]
    fn test_render_marks_strips_tags() {
        let rendered = render_marks("<mark>Poul</mark>et DG");
        assert!(!rendered.contains("<mark>"));
        assert!(rendered.contains("Poul"));
        assert!(rendered.ends_with("et DG"));
    }

    #[test]
    fn test_render_marks_unclosed() {
        assert_eq!(render_marks("a <mark>b"), "a b");
        assert_eq!(render_marks("plain"), "plain");
    }
}
