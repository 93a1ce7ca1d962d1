pub mod normalize;
pub mod ranker;
pub mod relevance;
