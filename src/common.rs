use std::fmt::{Debug, Display};
use std::hash::Hash;

use serde::Serialize;

pub trait PersonId: Eq + Hash + Debug + Clone + Display {}
impl<T> PersonId for T where T: Eq + Hash + Debug + Clone + Display {}

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize)]
pub struct Edge<T: PersonId> {
    // giver and receiver never share a household
    pub giver: T,
    pub receiver: T,
}

impl<T: PersonId> Edge<T> {
    pub fn new(giver: T, receiver: T) -> Self {
        assert!(giver != receiver);
        Edge { giver, receiver }
    }
}

impl<T: PersonId> Display for Edge<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} gives to {}", self.giver, self.receiver)
    }
}
