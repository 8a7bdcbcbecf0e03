//! Severity to terminal style mapping for the summary report.

use crate::e_types::DiagnosticKind;
use nu_ansi_term::Color;
use std::io::IsTerminal;

/// What a piece of report text means, independent of how it is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleRole {
    Error,
    Warning,
    Success,
    FileHeader,
}

impl From<DiagnosticKind> for StyleRole {
    fn from(kind: DiagnosticKind) -> Self {
        match kind {
            DiagnosticKind::Error => StyleRole::Error,
            DiagnosticKind::Warning => StyleRole::Warning,
        }
    }
}

/// Paints report text for a role. The aggregator only talks to this trait.
pub trait SeverityStyle {
    fn paint(&self, role: StyleRole, text: &str) -> String;
}

/// No escape codes at all; used for pipes, files and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyle;

impl SeverityStyle for PlainStyle {
    fn paint(&self, _role: StyleRole, text: &str) -> String {
        text.to_string()
    }
}

/// ANSI colors: red errors, yellow warnings, green success, cyan file headers.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiStyle;

impl AnsiStyle {
    pub fn color_for(role: StyleRole) -> Color {
        match role {
            StyleRole::Error => Color::Red,
            StyleRole::Warning => Color::Yellow,
            StyleRole::Success => Color::Green,
            StyleRole::FileHeader => Color::Cyan,
        }
    }
}

impl SeverityStyle for AnsiStyle {
    fn paint(&self, role: StyleRole, text: &str) -> String {
        Self::color_for(role).paint(text).to_string()
    }
}

/// When to emit ANSI styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Color only when stdout is a terminal and NO_COLOR is unset.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn uses_color(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
            }
        }
    }

    pub fn style(self) -> Box<dyn SeverityStyle> {
        if self.uses_color() {
            Box::new(AnsiStyle)
        } else {
            Box::new(PlainStyle)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_style_is_identity() {
        assert_eq!(PlainStyle.paint(StyleRole::Error, "3 errors"), "3 errors");
    }

    #[test]
    fn test_ansi_style_maps_roles_to_colors() {
        let painted = AnsiStyle.paint(StyleRole::Error, "boom");
        assert_eq!(painted, Color::Red.paint("boom").to_string());
        assert!(painted.contains("boom"));
        assert_ne!(painted, "boom");
        assert_eq!(AnsiStyle::color_for(StyleRole::Warning), Color::Yellow);
        assert_eq!(AnsiStyle::color_for(StyleRole::Success), Color::Green);
        assert_eq!(AnsiStyle::color_for(StyleRole::FileHeader), Color::Cyan);
    }

    #[test]
    fn test_kind_to_role() {
        assert_eq!(StyleRole::from(DiagnosticKind::Error), StyleRole::Error);
        assert_eq!(StyleRole::from(DiagnosticKind::Warning), StyleRole::Warning);
    }

    #[test]
    fn test_explicit_color_choices() {
        assert!(ColorChoice::Always.uses_color());
        assert!(!ColorChoice::Never.uses_color());
    }
}
