use std::collections::HashSet;
use std::fmt::Display;

use serde::Serialize;

use crate::common::{Edge, PersonId};
use crate::households::Households;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Assignment<T: PersonId>(Vec<Edge<T>>);

/// People left out of an assignment, in household order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coverage<T: PersonId> {
    pub missing_givers: Vec<T>,
    pub missing_receivers: Vec<T>,
}

impl<T: PersonId> Coverage<T> {
    pub fn is_complete(&self) -> bool {
        self.missing_givers.is_empty() && self.missing_receivers.is_empty()
    }
}

impl<T: PersonId> Assignment<T> {
    pub fn new() -> Self {
        Assignment(Vec::new())
    }
    pub(crate) fn push(&mut self, edge: Edge<T>) {
        self.0.push(edge);
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Edge<T>> + '_ {
        self.0.iter()
    }
    pub fn into_pairs(self) -> Vec<(T, T)> {
        self.0
            .into_iter()
            .map(|edge| (edge.giver, edge.receiver))
            .collect()
    }
    pub fn coverage(&self, households: &Households<T>) -> Coverage<T> {
        let givers: HashSet<&T> = self.0.iter().map(|edge| &edge.giver).collect();
        let receivers: HashSet<&T> = self.0.iter().map(|edge| &edge.receiver).collect();
        let missing = |present: &HashSet<&T>| -> Vec<T> {
            households
                .people()
                .iter()
                .filter(|person| !present.contains(person))
                .cloned()
                .collect()
        };
        Coverage {
            missing_givers: missing(&givers),
            missing_receivers: missing(&receivers),
        }
    }
    pub fn is_complete(&self, households: &Households<T>) -> bool {
        self.len() == households.len() && self.coverage(households).is_complete()
    }
}

impl<T: PersonId> Default for Assignment<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PersonId> FromIterator<Edge<T>> for Assignment<T> {
    fn from_iter<I: IntoIterator<Item = Edge<T>>>(iter: I) -> Self {
        Assignment(Vec::from_iter(iter))
    }
}

impl<T: PersonId> Display for Assignment<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, edge) in self.0.iter().enumerate() {
            writeln!(f, "Pairing {}:    {}", i + 1, edge)?;
        }
        Ok(())
    }
}
