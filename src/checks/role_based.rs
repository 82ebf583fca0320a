//! Role-based mailbox detection. Shared inboxes (admin@, support@, ...)
//! are lower-value leads than named individuals, so a match scores down.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::reference::ROLE_WORDS;

const SCORE_ROLE: i32 = -15;
const SCORE_PERSONAL: i32 = 10;

/// Separators that delimit a role prefix from a suffix.
const ROLE_SEPARATORS: [char; 3] = ['.', '_', '-'];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleCheck {
    pub role_based: bool,
    pub score: i32,
}

pub struct RoleBasedDetector {
    roles: HashSet<&'static str>,
}

impl Default for RoleBasedDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl RoleBasedDetector {
    pub fn new() -> Self {
        Self {
            roles: ROLE_WORDS.iter().copied().collect(),
        }
    }

    /// Matches an exact role word, or `<role>.`, `<role>_`, `<role>-`
    /// prefixes. A missing local part never matches.
    pub fn check(&self, local_part: Option<&str>) -> RoleCheck {
        let role_based = local_part
            .map(|l| self.is_role(&l.to_ascii_lowercase()))
            .unwrap_or(false);

        RoleCheck {
            role_based,
            score: if role_based { SCORE_ROLE } else { SCORE_PERSONAL },
        }
    }

    fn is_role(&self, local_part: &str) -> bool {
        if self.roles.contains(local_part) {
            return true;
        }

        self.roles.iter().any(|role| {
            ROLE_SEPARATORS
                .iter()
                .any(|sep| local_part.starts_with(&format!("{role}{sep}")))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_role_word() {
        let detector = RoleBasedDetector::new();
        let result = detector.check(Some("admin"));

        assert!(result.role_based);
        assert_eq!(result.score, -15);
    }

    #[test]
    fn test_delimited_role_prefix() {
        let detector = RoleBasedDetector::new();

        assert!(detector.check(Some("admin.team")).role_based);
        assert!(detector.check(Some("support_eu")).role_based);
        assert!(detector.check(Some("sales-west")).role_based);
    }

    #[test]
    fn test_undelimited_prefix_does_not_match() {
        let detector = RoleBasedDetector::new();

        // "administrative" starts with "admin" but has no separator
        assert!(!detector.check(Some("administrative")).role_based);
        assert!(!detector.check(Some("salesman")).role_based);
    }

    #[test]
    fn test_personal_local_part() {
        let detector = RoleBasedDetector::new();
        let result = detector.check(Some("john.doe"));

        assert!(!result.role_based);
        assert_eq!(result.score, 10);
    }

    #[test]
    fn test_case_insensitive() {
        let detector = RoleBasedDetector::new();

        assert!(detector.check(Some("Admin")).role_based);
        assert!(detector.check(Some("NOREPLY")).role_based);
    }

    #[test]
    fn test_missing_local_part() {
        let detector = RoleBasedDetector::new();

        assert!(!detector.check(None).role_based);
    }
}
