//! Terminal presentation: theme constants and the [`Output`] reporter.

pub mod output;
pub mod theme;

pub use output::Output;
pub use theme::Theme;
