// src/builder.rs
//! Compose a plain-text, ATS-friendly resume from structured form fields.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;
use tracing::info;
use uuid::Uuid;

use crate::types::ResumeForm;
use crate::utils::get_file_extension;

/// A resume composed from form fields, ready for analysis or export.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuiltResume {
    pub id: Uuid,
    pub filename: String,
    pub text: String,
    pub built_at: DateTime<Utc>,
}

/// Load a builder form from a JSON or TOML file.
pub async fn load_form(path: &Path) -> Result<ResumeForm> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read form file: {}", path.display()))?;

    let filename = path.to_string_lossy();
    match get_file_extension(&filename).as_deref() {
        Some("toml") => {
            toml::from_str(&content).context("Failed to parse form file as TOML")
        }
        _ => serde_json::from_str(&content).context("Failed to parse form file as JSON"),
    }
}

/// Build a resume from form fields.
///
/// The layout follows the canonical section order ATS parsers expect:
/// contact header, PROFESSIONAL SUMMARY, WORK EXPERIENCE, EDUCATION, SKILLS.
pub fn build_resume(form: &ResumeForm) -> BuiltResume {
    let resume = BuiltResume {
        id: Uuid::new_v4(),
        filename: format!("{}_Resume.txt", collapse_whitespace(&form.full_name)),
        text: render_text(form),
        built_at: Utc::now(),
    };

    info!(
        id = %resume.id,
        filename = %resume.filename,
        "Built resume from form fields"
    );

    resume
}

fn render_text(form: &ResumeForm) -> String {
    let mut text = format!("{}\n", form.full_name);
    text.push_str(&format!(
        "{} | {} | {}\n",
        form.email, form.phone, form.location
    ));

    if let Some(linkedin) = &form.linkedin {
        text.push_str(&format!("LinkedIn: {}\n", linkedin));
    }
    if let Some(portfolio) = &form.portfolio {
        text.push_str(&format!("Portfolio: {}\n", portfolio));
    }

    text.push_str(&format!("\nPROFESSIONAL SUMMARY\n{}\n\n", form.summary));

    text.push_str("WORK EXPERIENCE\n");
    for exp in &form.experience {
        let end = if exp.is_current_job {
            "Present"
        } else {
            exp.end_date.as_deref().unwrap_or("Present")
        };
        text.push_str(&format!("{} at {}\n", exp.position, exp.company));
        text.push_str(&format!("{} | {} - {}\n", exp.location, exp.start_date, end));
        text.push_str(&format!("{}\n\n", exp.description));
    }

    text.push_str("EDUCATION\n");
    for edu in &form.education {
        text.push_str(&format!("{} in {}\n", edu.degree, edu.field_of_study));
        text.push_str(&format!("{} | {}\n", edu.institution, edu.graduation_date));
        if let Some(gpa) = &edu.gpa {
            text.push_str(&format!("GPA: {}\n", gpa));
        }
        text.push('\n');
    }

    text.push_str(&format!("SKILLS\n{}\n", form.skills.join(", ")));

    text
}

fn collapse_whitespace(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join("_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::AtsAnalyzer;
    use crate::types::{EducationEntry, ExperienceEntry};

    fn sample_form() -> ResumeForm {
        ResumeForm {
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "555-123-4567".to_string(),
            location: "Zurich".to_string(),
            linkedin: Some("linkedin.com/in/janedoe".to_string()),
            portfolio: None,
            summary: "Software engineer focused on data platforms.".to_string(),
            experience: vec![ExperienceEntry {
                position: "Backend Engineer".to_string(),
                company: "Acme".to_string(),
                location: "Zurich".to_string(),
                start_date: "2021-03".to_string(),
                end_date: None,
                is_current_job: true,
                description: "Developed billing APIs, reduced latency by 40%".to_string(),
            }],
            education: vec![EducationEntry {
                degree: "BSc".to_string(),
                field_of_study: "Computer Science".to_string(),
                institution: "ETH".to_string(),
                graduation_date: "2020".to_string(),
                gpa: Some("5.5".to_string()),
            }],
            skills: vec!["Python".to_string(), "SQL".to_string(), "Docker".to_string()],
        }
    }

    #[test]
    fn test_filename_collapses_whitespace() {
        let mut form = sample_form();
        form.full_name = "Jane  van  Doe".to_string();
        assert_eq!(build_resume(&form).filename, "Jane_van_Doe_Resume.txt");
    }

    #[test]
    fn test_text_layout_has_canonical_sections_in_order() {
        let resume = build_resume(&sample_form());
        let text = &resume.text;

        let summary = text.find("PROFESSIONAL SUMMARY").unwrap();
        let experience = text.find("WORK EXPERIENCE").unwrap();
        let education = text.find("EDUCATION").unwrap();
        let skills = text.find("SKILLS").unwrap();
        assert!(summary < experience && experience < education && education < skills);

        assert!(text.starts_with("Jane Doe\n"));
        assert!(text.contains("jane@example.com | 555-123-4567 | Zurich"));
        assert!(text.contains("LinkedIn: linkedin.com/in/janedoe"));
        assert!(!text.contains("Portfolio:"));
        assert!(text.contains("Backend Engineer at Acme"));
        assert!(text.contains("Zurich | 2021-03 - Present"));
        assert!(text.contains("BSc in Computer Science"));
        assert!(text.contains("GPA: 5.5"));
        assert!(text.contains("Python, SQL, Docker"));
    }

    #[test]
    fn test_ended_job_uses_end_date() {
        let mut form = sample_form();
        form.experience[0].is_current_job = false;
        form.experience[0].end_date = Some("2023-06".to_string());
        let resume = build_resume(&form);
        assert!(resume.text.contains("2021-03 - 2023-06"));
    }

    #[test]
    fn test_built_resume_scores_well_on_format() {
        let resume = build_resume(&sample_form());
        let analyzer = AtsAnalyzer::with_default_taxonomy().unwrap();
        let analysis = analyzer.analyze(&resume.text, None);

        // Contact info and section headers are present by construction;
        // only the length and bullet checks depend on form content.
        assert!(analysis.scores.format >= 60);
        assert!(analysis
            .keyword_analysis
            .found_keywords
            .contains(&"Python".to_string()));
    }
}
