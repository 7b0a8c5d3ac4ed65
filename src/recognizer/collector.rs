use super::Match;

/// Keeps the best `limit` matches, highest score first, one per name.
///
/// Matches filed with an equal score stay in filing order, so callers that
/// file in template order get insertion-order tie-breaking for free.
pub(crate) struct MatchCollector {
    limit: usize,
    matches: Vec<Match>,
}

impl MatchCollector {
    pub(crate) fn new(limit: usize) -> Self {
        MatchCollector {
            limit,
            matches: Vec::with_capacity(limit),
        }
    }

    /// Drop an existing entry for the same name if `candidate` beats it.
    /// Returns `true` when `candidate` should be skipped instead.
    fn remove_existing_lower(&mut self, candidate: &Match) -> bool {
        let Some(ix) = self.matches.iter().position(|m| m.name == candidate.name) else {
            return false;
        };
        if candidate.score <= self.matches[ix].score {
            return true;
        }
        self.matches.remove(ix);
        false
    }

    pub(crate) fn file(&mut self, candidate: Match) {
        if self.limit == 0 || !candidate.score.is_finite() {
            return;
        }
        if self.matches.len() == self.limit
            && self
                .matches
                .last()
                .is_some_and(|last| candidate.score <= last.score)
        {
            return;
        }
        if self.remove_existing_lower(&candidate) {
            return;
        }
        match self.matches.iter().position(|m| m.score < candidate.score) {
            Some(ix) => self.matches.insert(ix, candidate),
            None => self.matches.push(candidate),
        }
        self.matches.truncate(self.limit);
    }

    pub(crate) fn into_matches(self) -> Vec<Match> {
        self.matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(name: &str, score: f64) -> Match {
        Match {
            name: name.to_string(),
            score: score as crate::float_types::Real,
        }
    }

    #[test]
    fn keeps_best_per_name_within_limit() {
        let mut collector = MatchCollector::new(3);
        collector.file(m("CHECK", 0.8));
        collector.file(m("V", 0.9));
        collector.file(m("CHECK", 0.7));
        collector.file(m("CARET", 0.7));
        collector.file(m("STAR", 1.0));
        assert_eq!(
            collector.into_matches(),
            vec![m("STAR", 1.0), m("V", 0.9), m("CHECK", 0.8)]
        );
    }

    #[test]
    fn replaces_lower_score_for_same_name() {
        let mut collector = MatchCollector::new(2);
        collector.file(m("X", 0.5));
        collector.file(m("X", 0.6));
        assert_eq!(collector.into_matches(), vec![m("X", 0.6)]);
    }

    #[test]
    fn ties_keep_filing_order() {
        let mut collector = MatchCollector::new(5);
        collector.file(m("A", 0.5));
        collector.file(m("B", 0.5));
        collector.file(m("C", 0.75));
        assert_eq!(
            collector.into_matches(),
            vec![m("C", 0.75), m("A", 0.5), m("B", 0.5)]
        );
    }

    #[test]
    fn ignores_non_finite_scores_and_zero_limit() {
        let mut collector = MatchCollector::new(2);
        collector.file(m("NAN", f64::NAN));
        collector.file(m("INF", f64::NEG_INFINITY));
        assert!(collector.into_matches().is_empty());

        let mut collector = MatchCollector::new(0);
        collector.file(m("A", 0.9));
        assert!(collector.into_matches().is_empty());
    }
}
