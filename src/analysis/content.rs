// src/analysis/content.rs
use anyhow::{Context, Result};
use regex::Regex;

use super::clamp_score;

/// Action verbs recruiters and ATS rubrics reward.
const ACTION_VERBS: [&str; 9] = [
    "developed",
    "managed",
    "led",
    "created",
    "implemented",
    "designed",
    "improved",
    "increased",
    "reduced",
];

/// Industry terms that signal relevant professional context.
const DOMAIN_TERMS: [&str; 7] = [
    "software",
    "development",
    "programming",
    "project",
    "team",
    "client",
    "system",
];

/// Passive phrases that weaken achievement statements.
const WEAK_PHRASES: [&str; 3] = ["responsible for", "duties included", "helped with"];

const ACTION_VERB_POINTS: f64 = 30.0;
const QUANTIFIED_POINTS: f64 = 25.0;
const DOMAIN_TERM_POINTS: f64 = 25.0;
const NO_WEAK_PHRASE_POINTS: f64 = 20.0;

/// Content-quality scorer over raw resume text.
pub struct ContentScorer {
    quantified: Regex,
}

impl ContentScorer {
    pub fn new() -> Result<Self> {
        // Quantified achievements: "20%", "10k", "500+", "1,000"
        let quantified =
            Regex::new(r"\d+[%k+,]").context("Failed to compile quantified achievement pattern")?;

        Ok(Self { quantified })
    }

    /// Score raw resume text in [0,100].
    ///
    /// The weak-phrase penalty is all-or-nothing: a single occurrence of any
    /// weak phrase forfeits the full allotment.
    pub fn score(&self, text: &str) -> u8 {
        let lower = text.to_lowercase();
        let mut score = 0.0;

        let found_verbs = ACTION_VERBS
            .iter()
            .filter(|verb| lower.contains(*verb))
            .count();
        score += found_verbs as f64 / ACTION_VERBS.len() as f64 * ACTION_VERB_POINTS;

        if self.quantified.is_match(text) {
            score += QUANTIFIED_POINTS;
        }

        let found_terms = DOMAIN_TERMS
            .iter()
            .filter(|term| lower.contains(*term))
            .count();
        score += found_terms as f64 / DOMAIN_TERMS.len() as f64 * DOMAIN_TERM_POINTS;

        let has_weak_phrase = WEAK_PHRASES.iter().any(|phrase| lower.contains(*phrase));
        if !has_weak_phrase {
            score += NO_WEAK_PHRASE_POINTS;
        }

        clamp_score(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> ContentScorer {
        ContentScorer::new().unwrap()
    }

    #[test]
    fn test_empty_text_keeps_only_the_weak_phrase_allotment() {
        // No weak phrases in empty text, so the 20 no-penalty points remain
        assert_eq!(scorer().score(""), 20);
    }

    #[test]
    fn test_action_verbs_scale_linearly() {
        let scorer = scorer();
        // 30/9 per verb, rounded at the end
        assert_eq!(scorer.score("Developed"), 23); // 3.33 + 20
        assert_eq!(scorer.score("Developed and managed and led"), 30); // 10 + 20
    }

    #[test]
    fn test_quantified_achievements() {
        let scorer = scorer();
        assert_eq!(scorer.score("grew revenue 20%"), 45);
        assert_eq!(scorer.score("10k users"), 45);
        assert_eq!(scorer.score("500+ deployments"), 45);
        assert_eq!(scorer.score("1,000 requests"), 45);
        // Bare number without a qualifier is not a quantified achievement
        assert_eq!(scorer.score("20 things"), 20);
    }

    #[test]
    fn test_domain_terms_scale_linearly() {
        let scorer = scorer();
        // 25/7 per term plus the 20 no-weak-phrase points
        assert_eq!(scorer.score("software"), 24); // 3.57 + 20 -> 23.57 -> 24
        assert_eq!(
            scorer.score("software development programming project team client system"),
            45
        );
    }

    #[test]
    fn test_weak_phrase_forfeits_the_full_allotment() {
        let scorer = scorer();
        let strong = "Developed the billing system for clients";
        let weak = format!("{}. Responsible for meetings.", strong);
        let very_weak = format!("{}. Responsible for meetings. Helped with chores.", strong);

        let strong_score = scorer.score(strong);
        let weak_score = scorer.score(&weak);
        assert_eq!(strong_score - weak_score, 20);
        // No extra penalty for additional weak phrases
        assert_eq!(scorer.score(&very_weak), weak_score);
    }

    #[test]
    fn test_weak_phrase_match_is_case_insensitive() {
        let scorer = scorer();
        assert!(scorer.score("DUTIES INCLUDED filing") < scorer.score("filing"));
    }
}
