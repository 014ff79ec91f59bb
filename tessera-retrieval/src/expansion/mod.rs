//! Synonym expansion collaborators.

mod static_expander;

pub use static_expander::StaticSynonymExpander;

use tessera_core::traits::ISynonymExpander;

/// Expander that performs no expansion at all. Useful when the query
/// analysis already carries an expanded keyword set, or for tests that
/// want lexical scoring only.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopExpander;

impl ISynonymExpander for NoopExpander {
    fn expand(&self, keywords: &[String]) -> Vec<String> {
        keywords.to_vec()
    }
}
