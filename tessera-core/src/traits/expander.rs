/// Synonym expansion of query keywords.
pub trait ISynonymExpander: Send + Sync {
    /// Expand keywords into a superset of related terms. Pure function:
    /// no side effects, and returning the input unchanged is a valid
    /// implementation.
    fn expand(&self, keywords: &[String]) -> Vec<String>;
}
