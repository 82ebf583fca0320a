//! Scoring aggregator and decision policy.
//!
//! Runs the syntax gate, fans out to the four independent quality checks,
//! sums their contributions onto a base offset, clamps, and maps the
//! outcome to a status/reason/deliverability verdict.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::checks::{
    CheckReport, DisposableDetector, ProfessionalPatternDetector, RoleBasedDetector,
    SyntaxValidator, TypoDetector,
};
use crate::email::NormalizedAddress;

/// Offset added to the summed check scores before clamping.
const BASE_SCORE: i32 = 50;

const VALID_THRESHOLD: i32 = 70;
const RISKY_THRESHOLD: i32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Valid,
    Risky,
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Deliverability {
    Yes,
    Risky,
    No,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    pub email: String,
    pub timestamp: DateTime<Utc>,
    pub local_part: Option<String>,
    pub domain: Option<String>,
    pub checks: CheckReport,
    pub score: i32,
    pub status: Status,
    pub reason: String,
    pub deliverable: Deliverability,
}

pub struct EmailVerifier {
    syntax: SyntaxValidator,
    disposable: DisposableDetector,
    role_based: RoleBasedDetector,
    typo: TypoDetector,
    professional: ProfessionalPatternDetector,
}

impl Default for EmailVerifier {
    fn default() -> Self {
        Self::new()
    }
}

impl EmailVerifier {
    pub fn new() -> Self {
        Self {
            syntax: SyntaxValidator::new(),
            disposable: DisposableDetector::new(),
            role_based: RoleBasedDetector::new(),
            typo: TypoDetector::new(),
            professional: ProfessionalPatternDetector::new(),
        }
    }

    /// Score a single address.
    ///
    /// Returns `None` for blank input. Any non-blank input, however
    /// malformed, produces a full result: a bad address is a
    /// classification, not an error.
    pub fn verify(&self, raw: &str) -> Option<VerificationResult> {
        let addr = NormalizedAddress::parse(raw)?;
        let timestamp = Utc::now();

        let syntax = self.syntax.check(&addr.address);
        if !syntax.valid {
            return Some(VerificationResult {
                email: addr.address,
                timestamp,
                local_part: addr.local_part,
                domain: addr.domain,
                checks: CheckReport::syntax_only(syntax),
                score: 0,
                status: Status::Invalid,
                reason: "Invalid email syntax".to_string(),
                deliverable: Deliverability::No,
            });
        }

        let disposable = self.disposable.check(addr.domain.as_deref());
        let role_based = self.role_based.check(addr.local_part.as_deref());
        let typo = self.typo.check(addr.domain.as_deref());
        let professional = self.professional.check(addr.local_part.as_deref());

        let total = syntax.score
            + disposable.score
            + role_based.score
            + typo.score
            + professional.score
            + BASE_SCORE;
        let score = total.clamp(0, 100);

        // Fixed priority: a disposable domain is always risky, whatever
        // the numeric score says.
        let (status, reason, deliverable) = if disposable.disposable {
            (
                Status::Risky,
                "Disposable email provider",
                Deliverability::Risky,
            )
        } else if score >= VALID_THRESHOLD {
            (
                Status::Valid,
                "Email appears valid and deliverable",
                Deliverability::Yes,
            )
        } else if score >= RISKY_THRESHOLD {
            let reason = if role_based.role_based {
                "Role-based email address"
            } else {
                "Email deliverability uncertain"
            };
            (Status::Risky, reason, Deliverability::Risky)
        } else {
            (
                Status::Invalid,
                "Email appears invalid or low quality",
                Deliverability::No,
            )
        };

        Some(VerificationResult {
            email: addr.address,
            timestamp,
            local_part: addr.local_part,
            domain: addr.domain,
            checks: CheckReport {
                syntax,
                disposable: Some(disposable),
                role_based: Some(role_based),
                typo: Some(typo),
                professional: Some(professional),
            },
            score,
            status,
            reason: reason.to_string(),
            deliverable,
        })
    }

    /// Sorted reference list of disposable domains.
    pub fn disposable_domains(&self) -> Vec<&'static str> {
        self.disposable.domains_sorted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_professional_address_is_valid() {
        let verifier = EmailVerifier::new();
        let result = verifier.verify("John.Doe@gmail.com").unwrap();

        // 25 + 15 + 10 + 5 + 10 + 50 = 115, clamped to 100
        assert_eq!(result.score, 100);
        assert_eq!(result.status, Status::Valid);
        assert_eq!(result.deliverable, Deliverability::Yes);
        assert_eq!(result.reason, "Email appears valid and deliverable");
        assert!(result.checks.professional.unwrap().professional);
    }

    #[test]
    fn test_invalid_syntax_short_circuits() {
        let verifier = EmailVerifier::new();
        let result = verifier.verify("not-an-email").unwrap();

        assert_eq!(result.score, 0);
        assert_eq!(result.status, Status::Invalid);
        assert_eq!(result.deliverable, Deliverability::No);
        assert_eq!(result.reason, "Invalid email syntax");
        assert!(!result.checks.syntax.valid);
        assert!(result.checks.disposable.is_none());
        assert!(result.checks.role_based.is_none());
        assert!(result.checks.typo.is_none());
        assert!(result.checks.professional.is_none());
    }

    #[test]
    fn test_disposable_overrides_numeric_score() {
        let verifier = EmailVerifier::new();
        let result = verifier.verify("john.doe@mailinator.com").unwrap();

        // 25 - 30 + 10 + 5 + 10 + 50 = 70: the score alone would be valid
        assert_eq!(result.score, 70);
        assert_eq!(result.status, Status::Risky);
        assert_eq!(result.deliverable, Deliverability::Risky);
        assert_eq!(result.reason, "Disposable email provider");
        assert!(result.checks.disposable.unwrap().disposable);
    }

    #[test]
    fn test_role_based_reason_in_risky_band() {
        let verifier = EmailVerifier::new();
        // 25 + 15 - 15 - 10 + 0 + 50 = 65: risky band with the role check fired
        let result = verifier.verify("admin_1@gmial.com").unwrap();

        assert_eq!(result.score, 65);
        assert_eq!(result.status, Status::Risky);
        assert_eq!(result.reason, "Role-based email address");
        assert_eq!(result.deliverable, Deliverability::Risky);
    }

    #[test]
    fn test_typo_detection_carries_suggestion() {
        let verifier = EmailVerifier::new();
        let result = verifier.verify("user@gmial.com").unwrap();

        let typo = result.checks.typo.unwrap();
        assert!(typo.has_typo);
        assert_eq!(typo.suggestion.as_deref(), Some("gmail.com"));
    }

    #[test]
    fn test_role_address_on_clean_domain_scores_valid() {
        let verifier = EmailVerifier::new();
        // 25 + 15 - 15 + 5 + 10 + 50 = 90: role check fires but the score
        // clears the valid threshold, so the role reason never surfaces
        let result = verifier.verify("admin@example.com").unwrap();

        assert_eq!(result.score, 90);
        assert_eq!(result.status, Status::Valid);
        assert!(result.checks.role_based.unwrap().role_based);
    }

    #[test]
    fn test_blank_input_yields_no_result() {
        let verifier = EmailVerifier::new();

        assert!(verifier.verify("").is_none());
        assert!(verifier.verify("   ").is_none());
    }

    #[test]
    fn test_input_is_normalized() {
        let verifier = EmailVerifier::new();
        let result = verifier.verify("  John.Doe@GMAIL.com  ").unwrap();

        assert_eq!(result.email, "john.doe@gmail.com");
        assert_eq!(result.local_part.as_deref(), Some("john.doe"));
        assert_eq!(result.domain.as_deref(), Some("gmail.com"));
    }

    #[test]
    fn test_score_stays_in_bounds() {
        let verifier = EmailVerifier::new();

        for input in [
            "john.doe@gmail.com",
            "admin@mailinator.com",
            "x_9@gmial.com",
            "noreply@yopmail.com",
            "a@b",
        ] {
            let result = verifier.verify(input).unwrap();
            assert!(
                (0..=100).contains(&result.score),
                "score out of bounds for {input}: {}",
                result.score
            );
        }
    }

    #[test]
    fn test_verification_is_idempotent() {
        let verifier = EmailVerifier::new();

        let first = verifier.verify("support@outlok.com").unwrap();
        let second = verifier.verify("support@outlok.com").unwrap();

        assert_eq!(first.score, second.score);
        assert_eq!(first.status, second.status);
        assert_eq!(first.reason, second.reason);
        assert_eq!(first.deliverable, second.deliverable);
    }

    #[test]
    fn test_result_serialization_shape() {
        let verifier = EmailVerifier::new();
        let result = verifier.verify("not-an-email").unwrap();
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["status"], "invalid");
        assert_eq!(value["deliverable"], "no");
        assert_eq!(value["domain"], serde_json::Value::Null);
        // Skipped checks are omitted entirely, not serialized as null
        assert!(value["checks"].get("disposable").is_none());
        assert!(value["checks"]["syntax"]["valid"] == false);
    }
}
