//! Run summary for a rewrite pass

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of applying the rule for one protocol name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleApplication {
    pub name: String,
    pub replacements: usize,
}

/// What a rewrite pass discovered and changed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteReport {
    /// Distinct names, in processing order
    pub names: Vec<String>,
    /// One entry per rule application, in processing order
    pub applications: Vec<RuleApplication>,
}

impl RewriteReport {
    pub fn record(&mut self, name: &str, replacements: usize) {
        self.names.push(name.to_string());
        self.applications.push(RuleApplication {
            name: name.to_string(),
            replacements,
        });
    }

    pub fn rule_applications(&self) -> usize {
        self.applications.len()
    }

    pub fn total_replacements(&self) -> usize {
        self.applications.iter().map(|a| a.replacements).sum()
    }

    /// Names whose rule rewrote nothing, e.g. colon-only declarations
    pub fn unmatched_names(&self) -> Vec<&str> {
        self.applications
            .iter()
            .filter(|a| a.replacements == 0)
            .map(|a| a.name.as_str())
            .collect()
    }

    pub fn replacements_for(&self, name: &str) -> Option<usize> {
        self.applications
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.replacements)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for RewriteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} protocol name(s), {} declaration(s) rewritten",
            self.names.len(),
            self.total_replacements()
        )?;
        for application in &self.applications {
            writeln!(f, "  {}: {}", application.name, application.replacements)?;
        }
        Ok(())
    }
}
