//! Disposable-provider detection: membership of the domain in a closed
//! reference set. No pattern matching, no DNS.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::reference::DISPOSABLE_DOMAINS;

const SCORE_DISPOSABLE: i32 = -30;
const SCORE_CLEAN: i32 = 15;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisposableCheck {
    pub disposable: bool,
    pub score: i32,
}

pub struct DisposableDetector {
    domains: HashSet<&'static str>,
}

impl Default for DisposableDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl DisposableDetector {
    pub fn new() -> Self {
        Self {
            domains: DISPOSABLE_DOMAINS.iter().copied().collect(),
        }
    }

    /// A missing domain is treated as a non-member.
    pub fn check(&self, domain: Option<&str>) -> DisposableCheck {
        let disposable = domain
            .map(|d| self.domains.contains(d.to_ascii_lowercase().as_str()))
            .unwrap_or(false);

        DisposableCheck {
            disposable,
            score: if disposable {
                SCORE_DISPOSABLE
            } else {
                SCORE_CLEAN
            },
        }
    }

    /// Sorted copy of the reference list, for the read-only dump endpoint.
    pub fn domains_sorted(&self) -> Vec<&'static str> {
        let mut domains: Vec<_> = self.domains.iter().copied().collect();
        domains.sort_unstable();
        domains
    }
}
