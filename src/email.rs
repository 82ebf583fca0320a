//! Address normalization and decomposition.

/// A trimmed, lower-cased address split on its first `@`.
///
/// Both parts are optional: input without an `@` keeps its text as the
/// local part and has no domain. Downstream checks accept the missing
/// pieces instead of faulting on malformed input.
#[derive(Debug, Clone)]
pub struct NormalizedAddress {
    pub address: String,
    pub local_part: Option<String>,
    pub domain: Option<String>,
}

impl NormalizedAddress {
    /// Returns `None` when the input is blank after trimming.
    pub fn parse(raw: &str) -> Option<Self> {
        let address = raw.trim().to_lowercase();
        if address.is_empty() {
            return None;
        }

        let (local_part, domain) = match address.split_once('@') {
            Some((local, domain)) => (Some(local.to_string()), Some(domain.to_string())),
            None => (Some(address.clone()), None),
        };

        Some(Self {
            address,
            local_part,
            domain,
        })
    }
}
