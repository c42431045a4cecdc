//! Provider listing command
//!
//! Lists the providers a resolver would choose from.

use acme_dispatch::ProviderRegistry;
use colored::Colorize;
use serde::Serialize;
use std::fmt;

/// Registered provider names, sorted
#[derive(Debug, Serialize)]
pub struct ProvidersReport {
    pub providers: Vec<String>,
}

pub fn execute<R: ProviderRegistry>(registry: &R) -> ProvidersReport {
    let mut providers: Vec<String> = registry
        .providers()
        .iter()
        .map(|p| p.name().to_string())
        .collect();
    providers.sort();

    ProvidersReport { providers }
}

impl fmt::Display for ProvidersReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.providers.is_empty() {
            return write!(f, "No ACME providers registered.");
        }

        write!(
            f,
            "{} ({})",
            "Registered ACME providers".bold(),
            self.providers.len()
        )?;
        for name in &self.providers {
            write!(f, "\n  {} {}", "•".dimmed(), name)?;
        }
        Ok(())
    }
}
