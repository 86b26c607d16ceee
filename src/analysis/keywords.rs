// src/analysis/keywords.rs

/// Cap on reported missing keywords. The gap list is advisory; anything past
/// the first eight entries adds noise without changing the score.
pub const MISSING_KEYWORDS_CAP: usize = 8;

/// Partition of a category's keyword list into found and missing sets,
/// both kept in taxonomy order. The two sets are disjoint and together
/// cover the full list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordPartition {
    pub found: Vec<String>,
    pub missing: Vec<String>,
}

impl KeywordPartition {
    /// Keyword coverage score in [0,100], rounded half-up.
    pub fn score(&self) -> u8 {
        let total = self.found.len() + self.missing.len();
        if total == 0 {
            return 0;
        }
        (self.found.len() as f64 / total as f64 * 100.0).round() as u8
    }

    /// Missing keywords truncated to the reporting cap, taxonomy order kept.
    pub fn capped_missing(&self) -> Vec<String> {
        self.missing
            .iter()
            .take(MISSING_KEYWORDS_CAP)
            .cloned()
            .collect()
    }
}

/// Case-insensitive substring partition of `keywords` against `resume_text`.
///
/// Matching is literal: "CI/CD" only matches the exact slash form, there is
/// no tokenization or fuzzy matching.
pub fn partition_keywords(resume_text: &str, keywords: &[String]) -> KeywordPartition {
    let text = resume_text.to_lowercase();

    let (found, missing) = keywords
        .iter()
        .cloned()
        .partition(|keyword| text.contains(&keyword.to_lowercase()));

    KeywordPartition { found, missing }
}
