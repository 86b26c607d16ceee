// src/analysis/classifier.rs
use super::taxonomy::JobCategory;

/// Map a free-text target job title to a taxonomy category.
///
/// Substring checks run in a fixed priority order; the first matching rule
/// wins. Empty or unrecognized input falls back to software engineer, so the
/// function is total over any string.
pub fn classify(target_job: &str) -> JobCategory {
    let job = target_job.to_lowercase();

    if job.contains("data") || job.contains("scientist") || job.contains("analyst") {
        return JobCategory::DataScientist;
    }
    if job.contains("product") && job.contains("manager") {
        return JobCategory::ProductManager;
    }
    if job.contains("marketing") || job.contains("digital") {
        return JobCategory::Marketing;
    }

    JobCategory::SoftwareEngineer
}
