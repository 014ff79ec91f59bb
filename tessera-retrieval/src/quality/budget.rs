//! Context-budget resolution.

use tessera_core::config::BudgetPolicy;
use tessera_core::models::{QueryAnalysis, SearchOptions};

/// Effective selection limits for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedBudget {
    pub max_chunks: usize,
    pub max_context_chars: usize,
}

impl ResolvedBudget {
    /// Derive limits from the policy tier, promoting one tier for
    /// wide-context categories, then apply caller overrides field by
    /// field. An explicit `max_chunks` of 0 is honored literally.
    pub fn resolve(policy: &BudgetPolicy, query: &QueryAnalysis, options: &SearchOptions) -> Self {
        let mut tier = query.complexity;
        if query.category.wants_wide_context() {
            tier = tier.promoted();
        }
        let derived_chars =
            (policy.baseline_chars as f64 * policy.multiplier_for(tier)).round() as usize;
        Self {
            max_chunks: options.max_chunks.unwrap_or(policy.max_chunks_for(tier)),
            max_context_chars: options.max_context_chars.unwrap_or(derived_chars),
        }
    }
}
