use crate::Score;

/// The `ScoreCombiner` trait defines how to compute
/// an overall document score given the contributions of each query term.
pub trait ScoreCombiner: Default + Clone + Send + Copy + 'static {
    /// Aggregates the contribution of one term.
    fn update(&mut self, contribution: Score);

    /// Clears the score combiner state back to its initial state.
    fn clear(&mut self);

    /// Returns the aggregate score.
    fn score(&self) -> Score;

    /// Describes the aggregation in explanations, e.g. `sum of:`.
    fn explanation_label(&self) -> &'static str;
}

/// Sums the contributions of the different terms.
#[derive(Default, Clone, Copy)]
pub struct SumCombiner {
    score: Score,
}

impl ScoreCombiner for SumCombiner {
    fn update(&mut self, contribution: Score) {
        self.score += contribution;
    }

    fn clear(&mut self) {
        self.score = 0.0;
    }

    fn score(&self) -> Score {
        self.score
    }

    fn explanation_label(&self) -> &'static str {
        "sum of:"
    }
}

/// Take max contribution of the different terms
/// and optionally sum it with other contributions multiplied by `tie_breaker`
#[derive(Default, Clone, Copy)]
pub struct DisjunctionMaxCombiner {
    max: Score,
    sum: Score,
    seen: bool,
    tie_breaker: Score,
}

impl DisjunctionMaxCombiner {
    /// Creates `DisjunctionMaxCombiner` with tie breaker
    pub fn with_tie_breaker(tie_breaker: Score) -> DisjunctionMaxCombiner {
        DisjunctionMaxCombiner {
            tie_breaker,
            ..Default::default()
        }
    }
}

impl ScoreCombiner for DisjunctionMaxCombiner {
    fn update(&mut self, contribution: Score) {
        self.max = if self.seen {
            Score::max(contribution, self.max)
        } else {
            contribution
        };
        self.seen = true;
        self.sum += contribution;
    }

    fn clear(&mut self) {
        self.max = 0.0;
        self.sum = 0.0;
        self.seen = false;
    }

    fn score(&self) -> Score {
        self.max + (self.sum - self.max) * self.tie_breaker
    }

    fn explanation_label(&self) -> &'static str {
        "max plus tie breaker times others of:"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_combiner() {
        let mut combiner = SumCombiner::default();
        combiner.update(2.0);
        combiner.update(1.0);
        assert_eq!(combiner.score(), 3.0);
        combiner.clear();
        assert_eq!(combiner.score(), 0.0);
    }

    #[test]
    fn test_disjunction_max_combiner() {
        let mut combiner = DisjunctionMaxCombiner::with_tie_breaker(0.5);
        combiner.update(2.0);
        combiner.update(4.0);
        combiner.update(1.0);
        assert_eq!(combiner.score(), 4.0 + 3.0 * 0.5);
        combiner.clear();
        assert_eq!(combiner.score(), 0.0);
    }

    #[test]
    fn test_disjunction_max_combiner_negative_contributions() {
        let mut combiner = DisjunctionMaxCombiner::default();
        combiner.update(-2.0);
        combiner.update(-1.0);
        assert_eq!(combiner.score(), -1.0);
    }
}
