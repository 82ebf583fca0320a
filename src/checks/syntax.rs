//! RFC-5321-ish syntax validation. This check gates the rest of the
//! pipeline: an address that fails here is scored 0 and nothing else runs.

use regex::Regex;
use serde::{Deserialize, Serialize};

const SCORE_VALID: i32 = 25;

/// Hard cap on total address length.
const MAX_ADDRESS_LEN: usize = 320;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyntaxCheck {
    pub valid: bool,
    pub score: i32,
}

pub struct SyntaxValidator {
    pattern: Regex,
}

impl Default for SyntaxValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxValidator {
    pub fn new() -> Self {
        // One-or-more allowed local-part characters, then dot-separated
        // DNS labels of 1-63 characters with no leading/trailing hyphen.
        let pattern = Regex::new(
            r"^[a-z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?)*$",
        )
        .unwrap();

        Self { pattern }
    }

    /// Expects an already-normalized (trimmed, lower-cased) address.
    pub fn check(&self, address: &str) -> SyntaxCheck {
        let valid = address.len() <= MAX_ADDRESS_LEN && self.pattern.is_match(address);

        SyntaxCheck {
            valid,
            score: if valid { SCORE_VALID } else { 0 },
        }
    }
}
