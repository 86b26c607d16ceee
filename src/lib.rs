use anyhow::Result;

pub mod analysis;
pub mod builder;
pub mod cli;
pub mod types;
pub mod utils;

pub use analysis::taxonomy::{JobCategory, Taxonomy, TAXONOMY_VERSION};
pub use analysis::AtsAnalyzer;
pub use builder::{build_resume, BuiltResume};
pub use types::{AtsAnalysis, KeywordAnalysis, ResumeForm, ScoreBreakdown};

/// Convenience function for a one-shot analysis with the embedded taxonomy.
///
/// Callers scoring many resumes should construct an [`AtsAnalyzer`] once and
/// reuse it; the analyzer is immutable and freely shareable across threads.
pub fn analyze_resume(resume_text: &str, target_job: Option<&str>) -> Result<AtsAnalysis> {
    let analyzer = AtsAnalyzer::with_default_taxonomy()?;
    Ok(analyzer.analyze(resume_text, target_job))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_resume_one_shot() {
        let analysis =
            analyze_resume("EXPERIENCE\nDeveloped APIs in Python", Some("Backend Engineer"))
                .unwrap();
        assert!(analysis.scores.keywords > 0);
        assert_eq!(
            analysis.keyword_analysis.target_job.as_deref(),
            Some("Backend Engineer")
        );
    }
}
