// SPDX-License-Identifier: MPL-2.0
//! One-line status feedback shown under the panel.

use crate::ui::design_tokens::palette;
use iced::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn color(self) -> Color {
        match self {
            Severity::Info => palette::INFO_500,
            Severity::Success => palette::SUCCESS_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }
}

/// A status message, stored as an i18n key so it follows locale changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub severity: Severity,
    pub key: String,
}

impl Status {
    pub fn info(key: impl Into<String>) -> Self {
        Self::new(Severity::Info, key)
    }

    pub fn success(key: impl Into<String>) -> Self {
        Self::new(Severity::Success, key)
    }

    pub fn warning(key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, key)
    }

    pub fn error(key: impl Into<String>) -> Self {
        Self::new(Severity::Error, key)
    }

    fn new(severity: Severity, key: impl Into<String>) -> Self {
        Self {
            severity,
            key: key.into(),
        }
    }
}
