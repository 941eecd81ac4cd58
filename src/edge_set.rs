use crate::common::PersonId;
use crate::households::Households;

/// Remaining candidate edges, as (giver, receiver) person indices.
///
/// Edges live in a dense vector so a uniform draw is a single index, and a
/// giver x receiver slot table maps each edge to its position so removal is a
/// `swap_remove`.
#[derive(Debug, Clone)]
pub struct EdgeSet {
    n: usize,
    edges: Vec<(usize, usize)>,
    slots: Vec<Option<usize>>,
}

impl EdgeSet {
    pub fn new<T: PersonId>(households: &Households<T>) -> Self {
        let n = households.len();
        let mut edge_set = EdgeSet {
            n,
            edges: Vec::with_capacity(households.edge_count()),
            slots: vec![None; n * n],
        };
        for (g, r) in households.edge_indices() {
            edge_set.slots[g * n + r] = Some(edge_set.edges.len());
            edge_set.edges.push((g, r));
        }
        edge_set
    }
    pub fn len(&self) -> usize {
        self.edges.len()
    }
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
    pub fn get(&self, pos: usize) -> (usize, usize) {
        self.edges[pos]
    }
    pub fn contains(&self, giver: usize, receiver: usize) -> bool {
        self.slots[giver * self.n + receiver].is_some()
    }
    /// Removes and returns the edge stored at `pos`.
    pub fn take(&mut self, pos: usize) -> (usize, usize) {
        let edge = self.edges.swap_remove(pos);
        self.slots[edge.0 * self.n + edge.1] = None;
        if let Some(moved) = self.edges.get(pos) {
            self.slots[moved.0 * self.n + moved.1] = Some(pos);
        }
        edge
    }
    pub fn remove(&mut self, giver: usize, receiver: usize) -> bool {
        let Some(pos) = self.slots[giver * self.n + receiver] else {
            return false
        };
        self.take(pos);
        true
    }
    /// Removes every edge out of `giver`, returning how many were dropped.
    pub fn remove_giver(&mut self, giver: usize) -> usize {
        (0..self.n).filter(|r| self.remove(giver, *r)).count()
    }
    /// Removes every edge into `receiver`, returning how many were dropped.
    pub fn remove_receiver(&mut self, receiver: usize) -> usize {
        (0..self.n).filter(|g| self.remove(*g, receiver)).count()
    }
}
