use log::{debug, info, trace, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::assignment::Assignment;
use crate::common::{Edge, PersonId};
use crate::edge_set::EdgeSet;
use crate::error::MatchError;
use crate::feasibility::has_complete_assignment;
use crate::households::Households;

/// Greedy random matching over the cross-household edges.
///
/// Each round draws one remaining edge uniformly, commits it, and prunes every
/// edge sharing its giver or its receiver. Choices are never revisited, so the
/// result can leave people out even when a complete assignment exists.
pub fn assign_gifts<T: PersonId, R: Rng>(
    households: &Households<T>,
    rng: &mut R,
) -> Assignment<T> {
    let mut edges = EdgeSet::new(households);
    let mut assignment = Assignment::new();
    while !edges.is_empty() {
        let (g, r) = edges.take(rng.gen_range(0..edges.len()));
        let edge = Edge::new(households.person(g).clone(), households.person(r).clone());
        let pruned = edges.remove_giver(g) + edges.remove_receiver(r);
        debug_assert!(
            (0..households.len()).all(|x| !edges.contains(g, x) && !edges.contains(x, r))
        );
        debug!("committed {}", edge);
        trace!("pruned {} edges, {} remaining", pruned, edges.len());
        assignment.push(edge);
    }
    assignment
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteAssignment<T: PersonId> {
    pub seed: u64,
    pub attempts: usize,
    pub assignment: Assignment<T>,
}

#[derive(Debug, Clone)]
pub struct Matcher<T: PersonId> {
    households: Households<T>,
    seed: u64,
}

impl<T: PersonId> Matcher<T> {
    pub fn new(households: Households<T>, seed: u64) -> Self {
        Matcher { households, seed }
    }
    pub fn households(&self) -> &Households<T> {
        &self.households
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn assign(&self) -> Assignment<T> {
        self.assign_with_seed(self.seed)
    }
    pub fn assign_with_seed(&self, seed: u64) -> Assignment<T> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let assignment = assign_gifts(&self.households, &mut rng);
        info!(
            "seed {}: {} pairings for {} people",
            seed,
            assignment.len(),
            self.households.len()
        );
        assignment
    }
    /// Reruns the greedy draw with seeds `seed, seed + 1, ...` until every
    /// person gives and receives once.
    pub fn assign_until_complete(
        &self,
        max_attempts: usize,
    ) -> Result<CompleteAssignment<T>, MatchError> {
        if max_attempts == 0 {
            return Err(MatchError::ZeroAttempts);
        }
        if !has_complete_assignment(&self.households) {
            return Err(MatchError::Infeasible);
        }
        let mut seed = self.seed;
        for attempt in 1..=max_attempts {
            let assignment = self.assign_with_seed(seed);
            if assignment.is_complete(&self.households) {
                return Ok(CompleteAssignment {
                    seed,
                    attempts: attempt,
                    assignment,
                });
            }
            warn!("attempt {} with seed {} left people unpaired", attempt, seed);
            seed = seed.wrapping_add(1);
        }
        Err(MatchError::AttemptsExhausted(max_attempts))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn default_roster() -> Households<&'static str> {
        Households::new(vec![
            vec!["Jeanne", "Bill"],
            vec!["Laura", "Joe"],
            vec!["Doug"],
            vec!["Grandma", "Grandpa"],
        ])
        .unwrap()
    }

    fn check_structure<T: PersonId>(households: &Households<T>, assignment: &Assignment<T>) {
        let mut givers = HashSet::new();
        let mut receivers = HashSet::new();
        for edge in assignment.iter() {
            assert_ne!(
                households.household_of(&edge.giver),
                households.household_of(&edge.receiver)
            );
            assert!(households.household_of(&edge.giver).is_some());
            assert!(givers.insert(edge.giver.clone()), "{} gives twice", edge.giver);
            assert!(
                receivers.insert(edge.receiver.clone()),
                "{} receives twice",
                edge.receiver
            );
        }
        assert!(assignment.len() <= households.len());
    }

    fn generate_households(seed: u64) -> Households<usize> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let num_households = rng.gen_range(2..7);
        let mut next = 0;
        let raw: Vec<Vec<usize>> = (0..num_households)
            .map(|_| {
                let size = rng.gen_range(1..5);
                let household: Vec<usize> = (next..next + size).collect();
                next += size;
                household
            })
            .collect();
        Households::new(raw).unwrap()
    }

    #[test]
    fn test_two_by_two_always_complete() {
        let hh = Households::new(vec![vec!["A", "B"], vec!["C", "D"]]).unwrap();
        for seed in 0..200 {
            let assignment = Matcher::new(hh.clone(), seed).assign();
            check_structure(&hh, &assignment);
            assert_eq!(assignment.len(), 4);
            assert!(assignment.is_complete(&hh));
        }
    }

    #[test]
    fn test_random_households() {
        for seed in 0..300 {
            let hh = generate_households(seed);
            let assignment = Matcher::new(hh.clone(), seed).assign();
            check_structure(&hh, &assignment);
            assert!(!assignment.is_empty());
        }
    }

    #[test]
    fn test_deterministic() {
        let matcher = Matcher::new(default_roster(), 2020);
        assert_eq!(matcher.assign(), matcher.assign());
        let mut rng = ChaCha8Rng::seed_from_u64(2020);
        assert_eq!(assign_gifts(matcher.households(), &mut rng), matcher.assign());
    }

    #[test]
    fn test_seeds_differ() {
        let matcher = Matcher::new(default_roster(), 0);
        let outcomes: HashSet<_> = (0..20)
            .map(|seed| matcher.assign_with_seed(seed).into_pairs())
            .collect();
        assert!(outcomes.len() > 1);
    }

    #[test]
    fn test_greedy_can_strand_people() {
        // three singletons: the 3-cycle always exists, but drawing the reverse
        // of the first edge leaves the third person out
        let hh = Households::new(vec![vec!["A"], vec!["B"], vec!["C"]]).unwrap();
        assert!(has_complete_assignment(&hh));
        let matcher = Matcher::new(hh.clone(), 0);
        let mut complete = 0;
        let mut incomplete = 0;
        for seed in 0..100 {
            let assignment = matcher.assign_with_seed(seed);
            check_structure(&hh, &assignment);
            if assignment.is_complete(&hh) {
                complete += 1;
            } else {
                assert_eq!(assignment.len(), 2);
                let coverage = assignment.coverage(&hh);
                assert_eq!(coverage.missing_givers, coverage.missing_receivers);
                incomplete += 1;
            }
        }
        assert!(complete > 0);
        assert!(incomplete > 0);
    }

    #[test]
    fn test_assign_until_complete() {
        let hh = Households::new(vec![vec!["A"], vec!["B"], vec!["C"]]).unwrap();
        for seed in 0..50 {
            let outcome = Matcher::new(hh.clone(), seed)
                .assign_until_complete(50)
                .unwrap();
            assert!(outcome.assignment.is_complete(&hh));
            assert_eq!(outcome.seed, seed + outcome.attempts as u64 - 1);
            assert_eq!(
                outcome.assignment,
                Matcher::new(hh.clone(), outcome.seed).assign()
            );
        }
    }

    #[test]
    fn test_assign_until_complete_errors() {
        let hh = Households::new(vec![vec!["A", "B", "C"], vec!["D"]]).unwrap();
        let matcher = Matcher::new(hh, 7);
        assert_eq!(
            matcher.assign_until_complete(10).unwrap_err(),
            MatchError::Infeasible
        );
        assert_eq!(
            matcher.assign_until_complete(0).unwrap_err(),
            MatchError::ZeroAttempts
        );
        // argument check comes before the feasibility check
        let hh = Households::new(vec![vec!["A"], vec!["B"]]).unwrap();
        assert_eq!(
            Matcher::new(hh, 0).assign_until_complete(0).unwrap_err(),
            MatchError::ZeroAttempts
        );
    }

    #[test]
    fn test_incomplete_on_infeasible_roster() {
        let hh = Households::new(vec![vec!["A", "B", "C"], vec!["D"]]).unwrap();
        for seed in 0..20 {
            let assignment = Matcher::new(hh.clone(), seed).assign();
            check_structure(&hh, &assignment);
            // D gives to one of A, B, C and receives from one of them
            assert_eq!(assignment.len(), 2);
            assert!(!assignment.is_complete(&hh));
        }
    }
}
