// src/cli.rs
use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::analysis::taxonomy::{JobCategory, Taxonomy, TAXONOMY_VERSION};
use crate::analysis::AtsAnalyzer;
use crate::builder::{build_resume, load_form};
use crate::types::{AnalysisReport, AtsAnalysis};
use crate::utils::{read_file_content, validate_file_extension, write_file_content};

#[derive(Parser)]
#[command(name = "atscore")]
#[command(about = "Score resumes against an ATS rubric and build resumes from form data")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze a resume text file against the ATS rubric
    Analyze {
        /// Path to the extracted resume text
        #[arg(long)]
        resume: PathBuf,
        /// Target job title used to pick the keyword category
        #[arg(long)]
        target_job: Option<String>,
        /// YAML file overriding the embedded keyword taxonomy
        #[arg(long)]
        taxonomy: Option<PathBuf>,
        /// Emit the full report as JSON instead of the text summary
        #[arg(long)]
        json: bool,
    },
    /// Build a plain-text resume from a structured form file (JSON or TOML)
    Build {
        #[arg(long)]
        form: PathBuf,
        /// Where to write the resume text (defaults to the generated filename)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Also run the built resume through the analyzer
        #[arg(long)]
        analyze: bool,
    },
    /// List taxonomy categories and their keyword lists
    Categories {
        #[arg(long)]
        taxonomy: Option<PathBuf>,
    },
}

pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Analyze {
            resume,
            target_job,
            taxonomy,
            json,
        } => {
            let analyzer = AtsAnalyzer::new(load_taxonomy(taxonomy.as_deref())?)?;
            let text = read_file_content(&resume).await?;

            info!(resume = %resume.display(), "Analyzing resume");
            let analysis = analyzer.analyze(&text, target_job.as_deref());

            if json {
                let report = AnalysisReport {
                    resume: resume.display().to_string(),
                    analyzed_at: Utc::now(),
                    analysis,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_summary(&resume, &analysis);
            }
        }

        Command::Build {
            form,
            output,
            analyze,
        } => {
            validate_file_extension(&form.to_string_lossy(), &["json", "toml"])?;
            let form_data = load_form(&form).await?;
            let resume = build_resume(&form_data);

            let output_path = output.unwrap_or_else(|| PathBuf::from(&resume.filename));
            write_file_content(&output_path, &resume.text).await?;
            println!("✓ Built resume written to {}", output_path.display());

            if analyze {
                let analyzer = AtsAnalyzer::with_default_taxonomy()?;
                let analysis = analyzer.analyze(&resume.text, None);
                print_summary(&output_path, &analysis);
            }
        }

        Command::Categories { taxonomy } => {
            let taxonomy = load_taxonomy(taxonomy.as_deref())?;
            println!("Taxonomy version: {}", TAXONOMY_VERSION);
            for category in JobCategory::ALL {
                println!("\n{}:", category);
                for keyword in taxonomy.keywords_for(category) {
                    println!("  - {}", keyword);
                }
            }
        }
    }

    Ok(())
}

fn load_taxonomy(path: Option<&Path>) -> Result<Taxonomy> {
    match path {
        Some(path) => {
            info!(taxonomy = %path.display(), "Loading taxonomy override");
            Taxonomy::from_yaml_file(path)
        }
        None => Ok(Taxonomy::default()),
    }
}

fn print_summary(resume: &Path, analysis: &AtsAnalysis) {
    let scores = &analysis.scores;
    let keyword_analysis = &analysis.keyword_analysis;

    println!("\nATS analysis for {}", resume.display());
    if let Some(target_job) = &keyword_analysis.target_job {
        println!("Target job: {}", target_job);
    }
    println!("  Keywords: {:>3}/100", scores.keywords);
    println!("  Format:   {:>3}/100", scores.format);
    println!("  Content:  {:>3}/100", scores.content);
    println!("  Overall:  {:>3}/100", scores.overall);

    if !keyword_analysis.found_keywords.is_empty() {
        println!("Found keywords: {}", keyword_analysis.found_keywords.join(", "));
    }
    if !keyword_analysis.missing_keywords.is_empty() {
        println!(
            "Missing keywords: {}",
            keyword_analysis.missing_keywords.join(", ")
        );
    }
}
