//! Scoring primitives: weights, scorers, score combiners and explanations.

mod explanation;
mod score_combiner;
mod scorer;
mod weight;

pub use self::explanation::Explanation;
pub use self::score_combiner::{DisjunctionMaxCombiner, ScoreCombiner, SumCombiner};
pub use self::scorer::SimScorer;
pub use self::weight::{for_each_scored, SimWeight};
