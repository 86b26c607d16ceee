// src/analysis/taxonomy.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// Version tag for the embedded keyword table. Bump when the lists change.
pub const TAXONOMY_VERSION: &str = "2024.1";

const SOFTWARE_ENGINEER_KEYWORDS: &[&str] = &[
    "JavaScript",
    "Python",
    "React",
    "Node.js",
    "Git",
    "API",
    "Database",
    "Agile",
    "Testing",
    "CI/CD",
    "Docker",
    "AWS",
    "TypeScript",
    "SQL",
];

const DATA_SCIENTIST_KEYWORDS: &[&str] = &[
    "Python",
    "R",
    "Machine Learning",
    "SQL",
    "Statistics",
    "TensorFlow",
    "pandas",
    "numpy",
    "Data Analysis",
    "Visualization",
    "Jupyter",
    "scikit-learn",
];

const PRODUCT_MANAGER_KEYWORDS: &[&str] = &[
    "Product Strategy",
    "Roadmap",
    "Stakeholder",
    "Analytics",
    "User Research",
    "Agile",
    "Scrum",
    "KPIs",
    "A/B Testing",
    "Market Research",
    "Competitive Analysis",
];

const MARKETING_KEYWORDS: &[&str] = &[
    "Digital Marketing",
    "SEO",
    "SEM",
    "Social Media",
    "Content Marketing",
    "Email Marketing",
    "Analytics",
    "Campaign",
    "Brand",
    "Lead Generation",
];

/// Job role cluster used to select a relevant keyword list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobCategory {
    SoftwareEngineer,
    DataScientist,
    ProductManager,
    Marketing,
}

impl JobCategory {
    pub const ALL: [JobCategory; 4] = [
        JobCategory::SoftwareEngineer,
        JobCategory::DataScientist,
        JobCategory::ProductManager,
        JobCategory::Marketing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobCategory::SoftwareEngineer => "software_engineer",
            JobCategory::DataScientist => "data_scientist",
            JobCategory::ProductManager => "product_manager",
            JobCategory::Marketing => "marketing",
        }
    }

    /// Parse a category name as it appears in taxonomy override files.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "software_engineer" => Some(JobCategory::SoftwareEngineer),
            "data_scientist" => Some(JobCategory::DataScientist),
            "product_manager" => Some(JobCategory::ProductManager),
            "marketing" => Some(JobCategory::Marketing),
            _ => None,
        }
    }

    fn index(&self) -> usize {
        match self {
            JobCategory::SoftwareEngineer => 0,
            JobCategory::DataScientist => 1,
            JobCategory::ProductManager => 2,
            JobCategory::Marketing => 3,
        }
    }
}

impl fmt::Display for JobCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable mapping from job category to an ordered keyword list.
///
/// Constructed once at startup and shared freely across concurrent callers;
/// lookups are total, every category always has a non-empty list.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    lists: [Vec<String>; 4],
}

impl Default for Taxonomy {
    fn default() -> Self {
        let to_owned = |list: &[&str]| list.iter().map(|s| s.to_string()).collect();
        Self {
            lists: [
                to_owned(SOFTWARE_ENGINEER_KEYWORDS),
                to_owned(DATA_SCIENTIST_KEYWORDS),
                to_owned(PRODUCT_MANAGER_KEYWORDS),
                to_owned(MARKETING_KEYWORDS),
            ],
        }
    }
}

impl Taxonomy {
    /// Keyword list for a category, in taxonomy order.
    pub fn keywords_for(&self, category: JobCategory) -> &[String] {
        &self.lists[category.index()]
    }

    /// Load a taxonomy from a YAML mapping of category name to keyword list.
    ///
    /// Categories missing from the file keep their embedded defaults; unknown
    /// category names and empty lists are rejected.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read taxonomy file: {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Invalid taxonomy file: {}", path.display()))
    }

    /// Parse a taxonomy override from YAML content.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let overrides: HashMap<String, Vec<String>> =
            serde_yaml::from_str(content).context("Failed to parse taxonomy YAML")?;

        let mut taxonomy = Self::default();
        for (name, keywords) in overrides {
            let category = JobCategory::from_name(&name).ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown category: {}. Expected one of: {}",
                    name,
                    JobCategory::ALL.map(|c| c.as_str()).join(", ")
                )
            })?;

            if keywords.is_empty() {
                anyhow::bail!("Category '{}' has an empty keyword list", name);
            }

            taxonomy.lists[category.index()] = keywords;
        }

        Ok(taxonomy)
    }
}
