//! UI Theme - colors and icons shared by every printed line

use crossterm::style::Color;

/// Default theme for gha-sweep output
#[derive(Debug, Clone, Default)]
pub struct Theme {
    /// Colors for different UI elements
    pub colors: ColorScheme,
    /// Status icons
    pub icons: Icons,
}

/// Color scheme for UI elements
#[derive(Debug, Clone)]
pub struct ColorScheme {
    /// Artifact names (primary content)
    pub name: Color,
    /// Sizes, dates and counters
    pub secondary: Color,
    /// Headers and labels
    pub header: Color,
    /// Success states
    pub success: Color,
    /// Warning states
    pub warning: Color,
    /// Error states
    pub error: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            name: Color::Cyan,
            secondary: Color::DarkGrey,
            header: Color::DarkGrey,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
        }
    }
}

/// Status icons for different states
#[derive(Debug, Clone)]
pub struct Icons {
    /// Success/completed state (✓)
    pub success: &'static str,
    /// Error/failed state (✗)
    pub error: &'static str,
    /// Warning state (⚠)
    pub warning: &'static str,
    /// Info/Tip state (ℹ)
    pub info: &'static str,
}

impl Default for Icons {
    fn default() -> Self {
        Self {
            success: "✓",
            error: "✗",
            warning: "⚠",
            info: "ℹ",
        }
    }
}
