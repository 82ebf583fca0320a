//! Independent quality checks over a normalized address.
//!
//! Each check is a total function of its (possibly missing) input: a
//! missing local part or domain degrades to the check's no-match path,
//! never an error. No check result conditions another.

pub mod disposable;
pub mod professional;
pub mod role_based;
pub mod syntax;
pub mod typo;

pub use disposable::{DisposableCheck, DisposableDetector};
pub use professional::{ProfessionalCheck, ProfessionalPatternDetector};
pub use role_based::{RoleBasedDetector, RoleCheck};
pub use syntax::{SyntaxCheck, SyntaxValidator};
pub use typo::{TypoCheck, TypoDetector};

use serde::{Deserialize, Serialize};

/// Per-check results for one verification.
///
/// Syntax is always present; the other checks only run (and only appear
/// in the serialized report) when syntax passed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    pub syntax: SyntaxCheck,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disposable: Option<DisposableCheck>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_based: Option<RoleCheck>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typo: Option<TypoCheck>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub professional: Option<ProfessionalCheck>,
}

impl CheckReport {
    /// Report for an address that failed the syntax gate.
    pub fn syntax_only(syntax: SyntaxCheck) -> Self {
        Self {
            syntax,
            disposable: None,
            role_based: None,
            typo: None,
            professional: None,
        }
    }
}
