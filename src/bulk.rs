//! Batch orchestration: chunked fan-out over the verifier with a fixed
//! pacing delay between chunks.
//!
//! The pacing bounds burst concurrency on the caller's side; the engine
//! itself is cheap. Within a chunk every address is verified on its own
//! task and the handles are awaited in spawn order, so results keep input
//! order within and across chunks.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::verifier::{EmailVerifier, Status, VerificationResult};

/// Hard cap on addresses per bulk request.
pub const MAX_BULK_EMAILS: usize = 1000;

const DEFAULT_BATCH_SIZE: usize = 10;
const MAX_BATCH_SIZE: usize = 20;
const DEFAULT_DELAY_MS: u64 = 100;
const MIN_DELAY_MS: u64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkOptions {
    pub batch_size: usize,
    pub delay: Duration,
}

impl BulkOptions {
    /// Clamp caller-supplied pacing to the allowed window.
    pub fn new(batch_size: Option<usize>, delay_ms: Option<u64>) -> Self {
        let batch_size = batch_size.unwrap_or(DEFAULT_BATCH_SIZE).clamp(1, MAX_BATCH_SIZE);
        let delay_ms = delay_ms.unwrap_or(DEFAULT_DELAY_MS).max(MIN_DELAY_MS);

        Self {
            batch_size,
            delay: Duration::from_millis(delay_ms),
        }
    }
}

impl Default for BulkOptions {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkStats {
    pub total: usize,
    pub valid: usize,
    pub risky: usize,
    pub invalid: usize,
    pub average_score: f64,
}

impl BulkStats {
    pub fn summarize(results: &[VerificationResult]) -> Self {
        let mut valid = 0;
        let mut risky = 0;
        let mut invalid = 0;

        for result in results {
            match result.status {
                Status::Valid => valid += 1,
                Status::Risky => risky += 1,
                Status::Invalid => invalid += 1,
            }
        }

        let average_score = if results.is_empty() {
            0.0
        } else {
            let sum: i32 = results.iter().map(|r| r.score).sum();
            (sum as f64 / results.len() as f64 * 10.0).round() / 10.0
        };

        Self {
            total: results.len(),
            valid,
            risky,
            invalid,
            average_score,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkReport {
    pub results: Vec<VerificationResult>,
    pub stats: BulkStats,
}

/// Verify many addresses with chunked fan-out.
///
/// Blank inputs drop out of the results (the verifier returns `None` for
/// them); a panicked verification task is logged and dropped without
/// aborting the rest of the batch. The delay runs between chunks, not
/// after the final one.
pub async fn verify_bulk(
    verifier: Arc<EmailVerifier>,
    emails: &[String],
    options: BulkOptions,
) -> BulkReport {
    let chunk_count = emails.len().div_ceil(options.batch_size);
    let mut results = Vec::with_capacity(emails.len());

    for (index, chunk) in emails.chunks(options.batch_size).enumerate() {
        if index > 0 {
            tokio::time::sleep(options.delay).await;
        }

        let handles: Vec<_> = chunk
            .iter()
            .map(|email| {
                let verifier = Arc::clone(&verifier);
                let email = email.clone();
                tokio::spawn(async move { verifier.verify(&email) })
            })
            .collect();

        for handle in handles {
            match handle.await {
                Ok(Some(result)) => results.push(result),
                Ok(None) => {}
                Err(e) => log::warn!("Verification task failed: {e}"),
            }
        }

        log::debug!("Processed chunk {}/{}", index + 1, chunk_count);
    }

    let stats = BulkStats::summarize(&results);

    BulkReport { results, stats }
}
