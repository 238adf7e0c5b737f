//! Config loading errors and validation diagnostics.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("malformed config file")]
    Toml(#[from] toml::de::Error),

    // Rendered in full by Display; a source() would repeat it.
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Blocks the command.
    Error,
    /// Printed once, then ignored.
    Warning,
}

/// One finding about one config field.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    pub field: FieldPath,
    pub message: String,
    pub hint: Option<String>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  {} {}", self.field, self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n    {} {hint}", "help:".yellow())?;
        }
        Ok(())
    }
}

/// Findings gathered by the section `validate` methods.
///
/// Validation never stops at the first problem, so a broken `decor.toml`
/// reports everything wrong with it in one go.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    items: Vec<Diagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, severity: Severity, field: FieldPath, message: String, hint: Option<String>) {
        self.items.push(Diagnostic {
            severity,
            field,
            message,
            hint,
        });
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.push(Severity::Error, field, message.into(), None);
    }

    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.push(Severity::Error, field, message.into(), Some(hint.into()));
    }

    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.push(Severity::Warning, field, message.into(), None);
    }

    fn of(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter().filter(move |d| d.severity == severity)
    }

    pub fn print_warnings(&self) {
        for warning in self.of(Severity::Warning) {
            crate::log!("warning"; "[{}] {}", warning.field.as_str(), warning.message);
        }
    }

    /// `Err(self)` when any error was recorded. Warnings alone pass.
    pub fn into_result(self) -> Result<(), Self> {
        let has_error = self.of(Severity::Error).next().is_some();
        match has_error {
            true => Err(self),
            false => Ok(()),
        }
    }

    #[cfg(test)]
    pub fn errors(&self) -> Vec<&Diagnostic> {
        self.of(Severity::Error).collect()
    }

    #[cfg(test)]
    pub fn warnings(&self) -> Vec<&Diagnostic> {
        self.of(Severity::Warning).collect()
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.of(Severity::Error).count();
        let noun = if count == 1 { "problem" } else { "problems" };
        write!(f, "{} ({count} {noun})", "invalid decor.toml".red().bold())?;
        for error in self.of(Severity::Error) {
            write!(f, "\n{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}
