//! Domain typo detection: reverse lookup of the supplied domain against
//! each canonical provider's list of known misspellings. Only the
//! pre-enumerated variants are caught.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::reference::TYPO_VARIANTS;

const SCORE_TYPO: i32 = -10;
const SCORE_CLEAN: i32 = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypoCheck {
    pub has_typo: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    pub score: i32,
}

pub struct TypoDetector {
    /// Misspelling -> canonical domain.
    variants: HashMap<&'static str, &'static str>,
}

impl Default for TypoDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl TypoDetector {
    pub fn new() -> Self {
        let mut variants = HashMap::new();
        for (canonical, misspellings) in TYPO_VARIANTS {
            for misspelling in *misspellings {
                variants.insert(*misspelling, *canonical);
            }
        }

        Self { variants }
    }

    pub fn check(&self, domain: Option<&str>) -> TypoCheck {
        let suggestion = domain
            .and_then(|d| self.variants.get(d.to_ascii_lowercase().as_str()))
            .copied();

        match suggestion {
            Some(canonical) => TypoCheck {
                has_typo: true,
                suggestion: Some(canonical.to_string()),
                score: SCORE_TYPO,
            },
            None => TypoCheck {
                has_typo: false,
                suggestion: None,
                score: SCORE_CLEAN,
            },
        }
    }
}
