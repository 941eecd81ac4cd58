use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::common::{Edge, PersonId};
use crate::error::InvalidInputError;

/// A validated partition of people into households.
///
/// People are interned to dense indices in input order, so index `i` is the
/// `i`-th person when the households are read left to right.
#[derive(Debug, Clone)]
pub struct Households<T: PersonId> {
    people: Vec<T>,
    household_of: Vec<usize>,
    sizes: Vec<usize>,
    index: HashMap<T, usize>,
}

impl<T: PersonId> Households<T> {
    pub fn new(households: Vec<Vec<T>>) -> Result<Self, InvalidInputError> {
        if households.len() < 2 {
            return Err(InvalidInputError::TooFewHouseholds(households.len()));
        }
        let mut people = Vec::new();
        let mut household_of = Vec::new();
        let mut sizes = Vec::with_capacity(households.len());
        let mut index = HashMap::new();
        for (h, household) in households.into_iter().enumerate() {
            if household.is_empty() {
                return Err(InvalidInputError::EmptyHousehold(h));
            }
            sizes.push(household.len());
            for person in household {
                match index.entry(person.clone()) {
                    Entry::Occupied(_) => {
                        return Err(InvalidInputError::DuplicatePerson(person.to_string()))
                    }
                    Entry::Vacant(vacant) => {
                        vacant.insert(people.len());
                    }
                }
                people.push(person);
                household_of.push(h);
            }
        }
        Ok(Households {
            people,
            household_of,
            sizes,
            index,
        })
    }
    pub fn len(&self) -> usize {
        self.people.len()
    }
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
    pub fn num_households(&self) -> usize {
        self.sizes.len()
    }
    pub fn people(&self) -> &[T] {
        &self.people
    }
    pub fn person(&self, idx: usize) -> &T {
        &self.people[idx]
    }
    pub fn index_of(&self, person: &T) -> Option<usize> {
        self.index.get(person).copied()
    }
    pub fn household_of(&self, person: &T) -> Option<usize> {
        self.index_of(person).map(|idx| self.household_of[idx])
    }
    pub fn allows(&self, giver: usize, receiver: usize) -> bool {
        self.household_of[giver] != self.household_of[receiver]
    }
    /// Number of cross-household ordered pairs: sum over p of (n - |household(p)|).
    pub fn edge_count(&self) -> usize {
        let n = self.len();
        self.household_of
            .iter()
            .map(|h| n - self.sizes[*h])
            .sum()
    }
    pub(crate) fn edge_indices(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.len();
        (0..n).flat_map(move |g| {
            (0..n)
                .filter(move |r| self.allows(g, *r))
                .map(move |r| (g, r))
        })
    }
    /// The edge universe, ordered by giver then receiver in input order.
    pub fn edges(&self) -> Vec<Edge<T>> {
        self.edge_indices()
            .map(|(g, r)| Edge::new(self.people[g].clone(), self.people[r].clone()))
            .collect()
    }
}
