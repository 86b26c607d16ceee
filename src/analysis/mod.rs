// src/analysis/mod.rs
//! Deterministic ATS scoring engine: keyword coverage, format compliance and
//! content quality over raw resume text, combined into one composite score.

pub mod classifier;
pub mod content;
pub mod format;
pub mod keywords;
pub mod taxonomy;

use anyhow::Result;
use tracing::debug;

use crate::types::{AtsAnalysis, KeywordAnalysis, ScoreBreakdown};
use content::ContentScorer;
use format::FormatScorer;
use taxonomy::Taxonomy;

const KEYWORD_WEIGHT: f64 = 0.4;
const FORMAT_WEIGHT: f64 = 0.3;
const CONTENT_WEIGHT: f64 = 0.3;

/// ATS analysis engine.
///
/// Owns the immutable keyword taxonomy and the pre-compiled scan patterns.
/// Construct once at startup and share across callers; `analyze` is pure and
/// needs no synchronization.
pub struct AtsAnalyzer {
    taxonomy: Taxonomy,
    format: FormatScorer,
    content: ContentScorer,
}

impl AtsAnalyzer {
    pub fn new(taxonomy: Taxonomy) -> Result<Self> {
        Ok(Self {
            taxonomy,
            format: FormatScorer::new()?,
            content: ContentScorer::new()?,
        })
    }

    /// Analyzer backed by the embedded keyword table.
    pub fn with_default_taxonomy() -> Result<Self> {
        Self::new(Taxonomy::default())
    }

    /// Score resume text against the ATS rubric.
    ///
    /// Total over any input: empty or malformed text degrades to low scores,
    /// an unrecognized target job falls back to the default category.
    pub fn analyze(&self, resume_text: &str, target_job: Option<&str>) -> AtsAnalysis {
        let category = classifier::classify(target_job.unwrap_or(""));
        let relevant_keywords = self.taxonomy.keywords_for(category);

        let partition = keywords::partition_keywords(resume_text, relevant_keywords);
        let keyword_score = partition.score();
        let format_score = self.format.score(resume_text);
        let content_score = self.content.score(resume_text);
        let overall = combine_scores(keyword_score, format_score, content_score);

        debug!(
            category = %category,
            keywords = keyword_score,
            format = format_score,
            content = content_score,
            overall,
            "Resume analyzed"
        );

        AtsAnalysis {
            scores: ScoreBreakdown {
                keywords: keyword_score,
                format: format_score,
                content: content_score,
                overall,
            },
            keyword_analysis: KeywordAnalysis {
                found_keywords: partition.found.clone(),
                missing_keywords: partition.capped_missing(),
                target_job: target_job.map(|s| s.to_string()),
            },
        }
    }
}

/// Weighted composite of the three sub-scores, rounded half-up.
///
/// Inputs are already clamped to [0,100] so the weighted sum cannot leave
/// that range.
pub fn combine_scores(keywords: u8, format: u8, content: u8) -> u8 {
    (keywords as f64 * KEYWORD_WEIGHT
        + format as f64 * FORMAT_WEIGHT
        + content as f64 * CONTENT_WEIGHT)
        .round() as u8
}

/// Round a raw point total and clamp it into the score range.
///
/// The rubric weights cannot exceed 100 by construction; the clamp tolerates
/// future weight changes.
pub(crate) fn clamp_score(raw: f64) -> u8 {
    raw.round().clamp(0.0, 100.0) as u8
}
