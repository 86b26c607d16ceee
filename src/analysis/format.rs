// src/analysis/format.rs
use anyhow::{Context, Result};
use regex::Regex;

use super::clamp_score;

/// Canonical resume section names ATS parsers look for.
const SECTION_NAMES: [&str; 5] = ["experience", "education", "skills", "summary", "objective"];

const SECTION_POINTS: f64 = 30.0;
const BULLET_POINTS: f64 = 20.0;
const EMAIL_POINTS: f64 = 15.0;
const PHONE_POINTS: f64 = 15.0;
const IDEAL_LENGTH_POINTS: f64 = 20.0;
const ACCEPTABLE_LENGTH_POINTS: f64 = 10.0;

const IDEAL_WORD_RANGE: std::ops::RangeInclusive<usize> = 200..=800;
const MIN_ACCEPTABLE_WORDS: usize = 100;

/// Structural ATS-friendliness scorer.
///
/// Every check is a linear scan or a linear-time regex match, so scoring
/// stays linear in the input length even for pathological text.
pub struct FormatScorer {
    phone: Regex,
}

impl FormatScorer {
    pub fn new() -> Result<Self> {
        // North-American phone shape: 555-123-4567, 555.123.4567, 5551234567
        let phone = Regex::new(r"\d{3}[-.\s]?\d{3}[-.\s]?\d{4}")
            .context("Failed to compile phone number pattern")?;

        Ok(Self { phone })
    }

    /// Score raw resume text in [0,100].
    pub fn score(&self, text: &str) -> u8 {
        let lower = text.to_lowercase();
        let mut score = 0.0;

        let found_sections = SECTION_NAMES
            .iter()
            .filter(|section| lower.contains(*section))
            .count();
        score += found_sections as f64 / SECTION_NAMES.len() as f64 * SECTION_POINTS;

        if text.contains('•') || text.contains('-') || text.contains('*') {
            score += BULLET_POINTS;
        }

        if text.contains('@') {
            score += EMAIL_POINTS;
        }
        if self.phone.is_match(text) {
            score += PHONE_POINTS;
        }

        let word_count = text.split_whitespace().count();
        if IDEAL_WORD_RANGE.contains(&word_count) {
            score += IDEAL_LENGTH_POINTS;
        } else if word_count >= MIN_ACCEPTABLE_WORDS {
            score += ACCEPTABLE_LENGTH_POINTS;
        }

        clamp_score(score)
    }
}
