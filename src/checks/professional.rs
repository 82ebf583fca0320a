//! Professional-looking local-part detection.
//!
//! The third pattern accepts any all-lowercase alphabetic token of two or
//! more letters (a concatenated name like "johndoe"), which also matches
//! plain words like "test". That looseness is inherited behavior and is
//! kept as-is.

use regex::Regex;
use serde::{Deserialize, Serialize};

const SCORE_PROFESSIONAL: i32 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfessionalCheck {
    pub professional: bool,
    pub score: i32,
}

pub struct ProfessionalPatternDetector {
    patterns: Vec<Regex>,
}

impl Default for ProfessionalPatternDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfessionalPatternDetector {
    pub fn new() -> Self {
        let patterns = vec![
            Regex::new(r"^[a-z]+\.[a-z]+$").unwrap(), // firstname.lastname
            Regex::new(r"^[a-z]\.[a-z]+$").unwrap(),  // initial.lastname
            Regex::new(r"^[a-z]+[a-z]$").unwrap(),    // concatenated name
        ];

        Self { patterns }
    }

    pub fn check(&self, local_part: Option<&str>) -> ProfessionalCheck {
        let professional = local_part
            .map(|l| {
                let local = l.to_ascii_lowercase();
                self.patterns.iter().any(|p| p.is_match(&local))
            })
            .unwrap_or(false);

        ProfessionalCheck {
            professional,
            score: if professional { SCORE_PROFESSIONAL } else { 0 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_firstname_lastname() {
        let detector = ProfessionalPatternDetector::new();
        let result = detector.check(Some("john.doe"));

        assert!(result.professional);
        assert_eq!(result.score, 10);
    }

    #[test]
    fn test_initial_lastname() {
        let detector = ProfessionalPatternDetector::new();

        assert!(detector.check(Some("j.doe")).professional);
    }

    #[test]
    fn test_concatenated_name() {
        let detector = ProfessionalPatternDetector::new();

        assert!(detector.check(Some("johndoe")).professional);
        // Inherited looseness: any lowercase alphabetic token of length >= 2
        assert!(detector.check(Some("test")).professional);
    }

    #[test]
    fn test_non_matching_local_parts() {
        let detector = ProfessionalPatternDetector::new();

        for local in ["j", "john123", "john_doe", "john.doe.iii", "john+tag"] {
            let result = detector.check(Some(local));
            assert!(!result.professional, "expected no match: {local}");
            assert_eq!(result.score, 0);
        }
    }

    #[test]
    fn test_missing_local_part() {
        let detector = ProfessionalPatternDetector::new();

        assert!(!detector.check(None).professional);
    }
}
