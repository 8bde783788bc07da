//! Response Parser — turns the model's free-text reply into `ExtractionConstraints`.
//!
//! The reply has no guaranteed schema. Lines are scanned independently for a
//! `skills` label and a `duration` label (case-insensitive substring match). When a
//! label appears on more than one line, the last line wins. Nothing here fails:
//! missing or garbled lines fall back to empty skills and the default duration.

use serde::{Deserialize, Serialize};

/// Duration limit applied when the reply carries no usable duration.
pub const DEFAULT_DURATION_LIMIT_MINUTES: u32 = 60;

const SKILLS_LABEL: &str = "skills";
const DURATION_LABEL: &str = "duration";

/// Structured signals extracted from one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionConstraints {
    /// Lower-cased, trimmed, in reply order. Duplicates are kept.
    pub required_skills: Vec<String>,
    pub duration_limit_minutes: u32,
}

impl Default for ExtractionConstraints {
    fn default() -> Self {
        Self {
            required_skills: Vec::new(),
            duration_limit_minutes: DEFAULT_DURATION_LIMIT_MINUTES,
        }
    }
}

/// Parses a raw model reply. A line carrying both labels is read as both.
pub fn parse(raw_text: &str) -> ExtractionConstraints {
    let mut constraints = ExtractionConstraints::default();

    for line in raw_text.lines() {
        let lowered = line.to_lowercase();

        if lowered.contains(SKILLS_LABEL) {
            constraints.required_skills = parse_skills_line(line);
        }

        if lowered.contains(DURATION_LABEL) {
            if let Some(minutes) = parse_duration_line(line) {
                constraints.duration_limit_minutes = minutes;
            }
        }
    }

    constraints
}

/// Takes everything after the last colon and splits it on commas.
fn parse_skills_line(line: &str) -> Vec<String> {
    let value = line.rsplit(':').next().unwrap_or(line);
    value
        .split(',')
        .map(|skill| skill.trim().to_lowercase())
        .filter(|skill| !skill.is_empty())
        .collect()
}

/// Concatenates every ASCII digit on the line into one number, so "3 weeks 5 days"
/// reads as 35. Returns `None` when the line has no digits. A digit run too large for
/// `u32` saturates rather than failing.
fn parse_duration_line(line: &str) -> Option<u32> {
    let digits: String = line.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    Some(digits.parse::<u32>().unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labeled_lines_are_extracted() {
        let constraints = parse("Skills: java, sql\nDuration: 45");
        assert_eq!(constraints.required_skills, vec!["java", "sql"]);
        assert_eq!(constraints.duration_limit_minutes, 45);
    }

    #[test]
    fn test_unlabeled_text_yields_defaults() {
        let constraints = parse("no usable info");
        assert!(constraints.required_skills.is_empty());
        assert_eq!(
            constraints.duration_limit_minutes,
            DEFAULT_DURATION_LIMIT_MINUTES
        );
    }

    #[test]
    fn test_empty_input_yields_defaults() {
        assert_eq!(parse(""), ExtractionConstraints::default());
    }

    #[test]
    fn test_duration_digits_are_concatenated_not_summed() {
        let constraints = parse("Duration: 3 weeks 5 days");
        assert_eq!(constraints.duration_limit_minutes, 35);
    }

    #[test]
    fn test_labels_match_case_insensitively_anywhere_in_line() {
        let constraints = parse("1. Required SKILLS: Python,  Machine Learning \n2. Preferred DURATION in minutes: 30");
        assert_eq!(
            constraints.required_skills,
            vec!["python", "machine learning"]
        );
        // The "2." list marker is part of the digit run.
        assert_eq!(constraints.duration_limit_minutes, 230);
    }

    #[test]
    fn test_skills_use_text_after_last_colon() {
        let constraints = parse("Skills: core: Rust, Go");
        assert_eq!(constraints.required_skills, vec!["rust", "go"]);
    }

    #[test]
    fn test_skills_line_without_colon_uses_whole_line() {
        let constraints = parse("skills java");
        assert_eq!(constraints.required_skills, vec!["skills java"]);
    }

    #[test]
    fn test_empty_skill_tokens_are_discarded() {
        let constraints = parse("Skills: java,, ,sql,");
        assert_eq!(constraints.required_skills, vec!["java", "sql"]);
    }

    #[test]
    fn test_empty_skills_line_yields_no_skills() {
        let constraints = parse("Skills:\nDuration: 20");
        assert!(constraints.required_skills.is_empty());
        assert_eq!(constraints.duration_limit_minutes, 20);
    }

    #[test]
    fn test_duplicate_skills_are_preserved() {
        let constraints = parse("Skills: Java, java");
        assert_eq!(constraints.required_skills, vec!["java", "java"]);
    }

    #[test]
    fn test_last_skills_line_wins_even_when_empty() {
        let constraints = parse("Skills: java\nsome prose\nSkills: ");
        assert!(constraints.required_skills.is_empty());
    }

    #[test]
    fn test_last_duration_line_with_digits_wins() {
        let constraints = parse("Duration: 30\nDuration: 90");
        assert_eq!(constraints.duration_limit_minutes, 90);
    }

    #[test]
    fn test_digitless_duration_line_keeps_previous_value() {
        let constraints = parse("Duration: 30\nDuration: flexible");
        assert_eq!(constraints.duration_limit_minutes, 30);

        let constraints = parse("Duration: not specified");
        assert_eq!(
            constraints.duration_limit_minutes,
            DEFAULT_DURATION_LIMIT_MINUTES
        );
    }

    #[test]
    fn test_line_order_does_not_matter() {
        let a = parse("Skills: java, sql\nDuration: 45");
        let b = parse("Duration: 45\nSkills: java, sql");
        assert_eq!(a, b);
    }

    #[test]
    fn test_line_with_both_labels_sets_both() {
        let constraints = parse("Skills and duration: 40");
        assert_eq!(constraints.required_skills, vec!["40"]);
        assert_eq!(constraints.duration_limit_minutes, 40);
    }

    #[test]
    fn test_huge_duration_saturates() {
        let constraints = parse("Duration: 99999999999999999999");
        assert_eq!(constraints.duration_limit_minutes, u32::MAX);
    }

    #[test]
    fn test_non_ascii_digits_are_ignored() {
        let constraints = parse("Duration: ٤٥ minutes");
        assert_eq!(
            constraints.duration_limit_minutes,
            DEFAULT_DURATION_LIMIT_MINUTES
        );
    }

    #[test]
    fn test_markdown_wrapped_reply() {
        let reply = "Here is what I found:\n\n**Skills:** Java, Spring Boot, SQL\n**Duration:** 40 minutes\n";
        let constraints = parse(reply);
        assert_eq!(
            constraints.required_skills,
            vec!["** java", "spring boot", "sql"]
        );
        assert_eq!(constraints.duration_limit_minutes, 40);
    }

    #[test]
    fn test_crlf_line_endings() {
        let constraints = parse("Skills: java, sql\r\nDuration: 45\r\n");
        assert_eq!(constraints.required_skills, vec!["java", "sql"]);
        assert_eq!(constraints.duration_limit_minutes, 45);
    }
}
