mod relevance_scorer;

pub use relevance_scorer::RelevanceScorer;
