// src/types/analysis.rs
//! Value objects produced by the ATS analysis engine. Field names serialize
//! in camelCase to match the JSON shape consumers already store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-dimension scores, each an integer in [0,100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub keywords: u8,
    pub format: u8,
    pub content: u8,
    pub overall: u8,
}

/// Keyword coverage detail for the selected job category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordAnalysis {
    pub found_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_job: Option<String>,
}

/// Complete result of one analysis pass. Pure value, no side effects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsAnalysis {
    pub scores: ScoreBreakdown,
    pub keyword_analysis: KeywordAnalysis,
}

/// Report envelope emitted by the CLI when JSON output is requested.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub resume: String,
    pub analyzed_at: DateTime<Utc>,
    #[serde(flatten)]
    pub analysis: AtsAnalysis,
}

/// Structured improvement suggestion stored alongside the scores. Produced
/// by an upstream advisory service; this crate only defines the shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}
