//! Heuristic tables: the skill vocabulary, company list, certification and
//! education keywords, and scoring weights used by the local resume scorer.
//!
//! A default table is compiled into the binary. `HEURISTICS_PATH` points at a
//! JSON file with the same shape to extend or replace it without a rebuild.

use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::readiness::{ScoringWeights, READINESS_CEILING};

const EMBEDDED_TABLES: &str = include_str!("../../data/heuristics.json");

/// Keyword lists per degree tier. Matched as lowercase substrings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationKeywords {
    pub phd: Vec<String>,
    pub masters: Vec<String>,
    pub bachelors: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeuristicTables {
    /// Known skill names in display form. Extraction output follows this order.
    pub skills: Vec<String>,
    /// Lowercase company names.
    pub companies: Vec<String>,
    pub certification_keywords: Vec<String>,
    /// Display-form company names treated as big tech by the report builder.
    #[serde(default)]
    pub big_tech: Vec<String>,
    pub education: EducationKeywords,
    #[serde(default)]
    pub weights: ScoringWeights,
}

impl HeuristicTables {
    /// Parses the table compiled into the binary.
    pub fn embedded() -> Result<Self> {
        serde_json::from_str(EMBEDDED_TABLES).context("Embedded heuristics table is malformed")
    }

    /// Loads the table from `path` when given, otherwise the embedded default.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            let tables = Self::embedded()?;
            info!(
                "Using embedded heuristics table ({} skills, {} companies)",
                tables.skills.len(),
                tables.companies.len()
            );
            return Ok(tables);
        };

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read heuristics table '{}'", path.display()))?;
        let tables: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Heuristics table '{}' is not valid JSON", path.display()))?;
        ensure!(
            tables.weights.max_score <= READINESS_CEILING,
            "Heuristics table '{}': max_score {} exceeds {READINESS_CEILING}",
            path.display(),
            tables.weights.max_score
        );

        info!(
            "Loaded heuristics table from {} ({} skills, {} companies)",
            path.display(),
            tables.skills.len(),
            tables.companies.len()
        );
        Ok(tables)
    }
}
